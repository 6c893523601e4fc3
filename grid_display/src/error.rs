use thiserror::Error;

/// Errors from mapping or painting a cell layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Scale factor was zero, negative, infinite or NaN.
    #[error("invalid scale factor {0}")]
    InvalidScale(f32),

    /// Color matrix shape differs from the bound layout.
    #[error("color matrix is {found:?} but the layout is {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}
