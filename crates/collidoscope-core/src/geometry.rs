//! Basic geometric types for canvas drawing.
//!
//! Coordinates are `f64` in canvas space (x right, y down, matching SVG).
//! [`Transform`] is an affine matrix in the SVG `[a b c d e f]` convention
//! and backs the canvas's current-transform stack.

/// A point (or displacement) in canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a displacement from a direction angle (radians) and length.
    pub fn from_polar(theta: f64, len: f64) -> Self {
        Self {
            x: len * theta.cos(),
            y: len * theta.sin(),
        }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> f64 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point.
    pub fn sub(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point.
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Dot product, treating both points as vectors from the origin.
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Calculates the Euclidean distance from the origin.
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        self.sub(other).hypot()
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Represents the dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size.
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size.
    pub fn height(self) -> f64 {
        self.height
    }
}

/// An affine transform in the SVG matrix convention.
///
/// Maps `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`. The identity is the
/// default. Composition follows user-to-device semantics: the canvas applies
/// `Transform::rotation(theta).then(current)` when `rotate` is called, so
/// points pass through the most recently pushed operation first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// A pure translation by `(tx, ty)`.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::identity()
        }
    }

    /// A pure scale by `(sx, sy)` about the origin.
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    /// A pure rotation by `theta` radians about the origin.
    ///
    /// Positive angles rotate from the +x axis towards the +y axis, which is
    /// clockwise on a y-down canvas.
    pub fn rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Composes two transforms: the result applies `self` first, then `other`.
    pub fn then(self, other: Transform) -> Self {
        Self {
            a: other.a * self.a + other.c * self.b,
            b: other.b * self.a + other.d * self.b,
            c: other.a * self.c + other.c * self.d,
            d: other.b * self.c + other.d * self.d,
            e: other.a * self.e + other.c * self.f + other.e,
            f: other.b * self.e + other.d * self.f + other.f,
        }
    }

    /// Transforms a point (applies the full affine map).
    pub fn apply(self, p: Point) -> Point {
        Point::new(
            self.a * p.x() + self.c * p.y() + self.e,
            self.b * p.x() + self.d * p.y() + self.f,
        )
    }

    /// Transforms a displacement (applies the linear part only).
    pub fn apply_distance(self, d: Point) -> Point {
        Point::new(self.a * d.x() + self.c * d.y(), self.b * d.x() + self.d * d.y())
    }

    /// The uniform scale factor of this transform, `sqrt(|det|)`.
    ///
    /// For the translate/rotate/uniform-scale transforms the figures use,
    /// this is exactly the factor a user-space length grows by. It carries
    /// user-space line widths into device space when stroking.
    pub fn conformal_scale(self) -> f64 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }
}
