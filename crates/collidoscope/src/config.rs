//! Configuration types for figure rendering.
//!
//! [`AppConfig`] is deserialized from a TOML file. Every field is optional;
//! omitted palette entries fall back to the colors of the original figures.
//! Palette values are CSS color strings, parsed through
//! [`Color`](collidoscope_core::color::Color)'s `Deserialize` impl.

use std::path::PathBuf;

use serde::Deserialize;

use collidoscope_core::color::Color;

use crate::figure::Palette;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,

    /// Palette overrides section.
    #[serde(default)]
    palette: PaletteConfig,
}

impl AppConfig {
    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the configured palette, with unset entries defaulted.
    pub fn palette(&self) -> Palette {
        self.palette.resolve()
    }
}

/// Output location settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Directory the SVG files are written to. Overridden by the CLI's
    /// `--output` flag when given.
    #[serde(default)]
    directory: Option<PathBuf>,
}

impl OutputConfig {
    /// Returns the configured output directory, if any.
    pub fn directory(&self) -> Option<&PathBuf> {
        self.directory.as_ref()
    }
}

/// Per-role color overrides, as CSS color strings in the TOML source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaletteConfig {
    #[serde(default)]
    player: Option<Color>,
    #[serde(default)]
    ground: Option<Color>,
    #[serde(default)]
    arrow: Option<Color>,
    #[serde(default)]
    arrow_dim: Option<Color>,
    #[serde(default)]
    marker: Option<Color>,
    #[serde(default)]
    highlight: Option<Color>,
    #[serde(default)]
    sensor: Option<Color>,
    #[serde(default)]
    platform: Option<Color>,
    #[serde(default)]
    text: Option<Color>,
}

impl PaletteConfig {
    /// Merges the overrides over the default palette.
    fn resolve(&self) -> Palette {
        let defaults = Palette::default();
        Palette {
            player: self.player.unwrap_or(defaults.player),
            ground: self.ground.unwrap_or(defaults.ground),
            arrow: self.arrow.unwrap_or(defaults.arrow),
            arrow_dim: self.arrow_dim.unwrap_or(defaults.arrow_dim),
            marker: self.marker.unwrap_or(defaults.marker),
            highlight: self.highlight.unwrap_or(defaults.highlight),
            sensor: self.sensor.unwrap_or(defaults.sensor),
            platform: self.platform.unwrap_or(defaults.platform),
            text: self.text.unwrap_or(defaults.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_default_palette() {
        let config = AppConfig::default();
        assert_eq!(config.palette(), Palette::default());
        assert!(config.output().directory().is_none());
    }

    #[test]
    fn test_partial_palette_override() {
        let config: AppConfig = toml::from_str(
            r##"
            [output]
            directory = "figures"

            [palette]
            player = "#336699"
            marker = "red"
            "##,
        )
        .expect("config should parse");

        let palette = config.palette();
        assert_eq!(palette.player.to_hex(), "#336699");
        assert_eq!(palette.marker.to_hex(), "#ff0000");
        // Untouched entries keep their defaults
        assert_eq!(palette.ground, Palette::default().ground);
        assert_eq!(
            config.output().directory().map(|dir| dir.as_path()),
            Some(std::path::Path::new("figures"))
        );
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [palette]
            player = "definitely-not-a-color"
            "#,
        );
        assert!(result.is_err());
    }
}
