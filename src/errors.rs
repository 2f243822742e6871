//! Error types with diagnostics using miette
//!
//! Rendering itself never fails. These errors only come out of building a
//! rendering context from caller-supplied numbers.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors that occur while building a rendering context
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ContextError {
    #[error("invalid horizontal scale {value}: {reason}")]
    #[diagnostic(
        code(boardsvg::context::invalid_scale_x),
        help("the transform's `a` component must be finite and non-zero")
    )]
    InvalidScaleX { value: f64, reason: NumericError },

    #[error("invalid vertical scale {value}: {reason}")]
    #[diagnostic(
        code(boardsvg::context::invalid_scale_y),
        help("the transform's `d` component must be finite and non-zero")
    )]
    InvalidScaleY { value: f64, reason: NumericError },

    #[error("transform translation is not finite: ({x}, {y})")]
    #[diagnostic(code(boardsvg::context::invalid_translation))]
    InvalidTranslation { x: f64, y: f64 },
}
