//! CLI logic for the collidoscope figure renderer.

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::info;

use collidoscope::{CollidoscopeError, FigureRenderer};

/// Run the collidoscope CLI application
///
/// Renders the requested figures (or all of them) into the output
/// directory as SVG files.
///
/// # Errors
///
/// Returns `CollidoscopeError` for:
/// - Configuration loading errors
/// - Unknown figure names
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), CollidoscopeError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let renderer = FigureRenderer::new(&app_config);

    if args.list {
        for name in renderer.figures().names() {
            println!("{name}");
        }
        return Ok(());
    }

    // CLI flag wins over the config file; "images" matches the directory
    // the blog post loads the figures from.
    let output_dir = args
        .output
        .clone()
        .or_else(|| app_config.output().directory().cloned())
        .unwrap_or_else(|| PathBuf::from("images"));

    let written = renderer.render_to_dir(&args.figures, &output_dir)?;

    info!(
        dir:display = output_dir.display(),
        count = written.len();
        "SVG figures exported successfully"
    );

    Ok(())
}
