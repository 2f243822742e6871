//! Numeric primitives shared by the renderers.
//!
//! Board records are in design units (millimetres in practice). The
//! [`ViewTransform`] is the only way design units become device units.

use std::fmt;

use glam::{DAffine2, DMat2, DVec2, dvec2};

use crate::errors::ContextError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN, infinite and zero values.
pub fn check_nonzero(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else {
        Ok(val)
    }
}

/// Affine transform from board space to device space.
///
/// Uses the usual `[a c e; b d f]` layout: `a` and `d` are the horizontal and
/// vertical scale components, `e` and `f` the translation. Only the
/// magnitudes `|a|` and `|d|` are ever applied to widths, heights and radii;
/// positions go through the whole matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    affine: DAffine2,
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        affine: DAffine2::IDENTITY,
    };

    /// Wrap an affine transform, validating its scale components.
    pub fn try_new(affine: DAffine2) -> Result<Self, ContextError> {
        let a = affine.matrix2.x_axis.x;
        let d = affine.matrix2.y_axis.y;
        check_nonzero(a).map_err(|reason| ContextError::InvalidScaleX { value: a, reason })?;
        check_nonzero(d).map_err(|reason| ContextError::InvalidScaleY { value: d, reason })?;

        let t = affine.translation;
        if !t.is_finite() {
            return Err(ContextError::InvalidTranslation { x: t.x, y: t.y });
        }

        Ok(Self { affine })
    }

    /// Build from the six matrix components `a b c d e f`.
    pub fn from_components(
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    ) -> Result<Self, ContextError> {
        Self::try_new(DAffine2::from_mat2_translation(
            DMat2::from_cols(dvec2(a, b), dvec2(c, d)),
            dvec2(e, f),
        ))
    }

    /// Scale, then translate. The common board-to-screen transform
    /// (a negative `sy` flips the Y axis).
    pub fn scale_translate(sx: f64, sy: f64, tx: f64, ty: f64) -> Result<Self, ContextError> {
        Self::from_components(sx, 0.0, 0.0, sy, tx, ty)
    }

    /// Uniform scale about the origin.
    pub fn uniform_scale(scale: f64) -> Result<Self, ContextError> {
        Self::scale_translate(scale, scale, 0.0, 0.0)
    }

    pub fn affine(&self) -> DAffine2 {
        self.affine
    }

    /// Map a board position to device coordinates.
    pub fn apply(&self, x: f64, y: f64) -> DVec2 {
        self.affine.transform_point2(dvec2(x, y))
    }

    /// Magnitude of the horizontal scale component (`|a|`).
    pub fn scale_x(&self) -> f64 {
        self.affine.matrix2.x_axis.x.abs()
    }

    /// Magnitude of the vertical scale component (`|d|`).
    pub fn scale_y(&self) -> f64 {
        self.affine.matrix2.y_axis.y.abs()
    }

    /// Whether the transform reverses orientation (negative determinant),
    /// as a Y-up board mapped onto a Y-down screen does.
    pub fn is_mirrored(&self) -> bool {
        self.affine.matrix2.determinant() < 0.0
    }

    /// Convert a counter-clockwise board angle to an SVG `rotate()` angle.
    ///
    /// SVG rotates from +x toward +y. A mirroring transform reverses that
    /// sense relative to the board, so the angle is negated.
    pub fn device_rotation(&self, ccw_degrees: f64) -> f64 {
        if self.is_mirrored() {
            -ccw_degrees
        } else {
            ccw_degrees
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
