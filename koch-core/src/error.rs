use thiserror::Error;

/// Errors surfaced by the render pipeline and the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KochError {
    #[error("depth {depth} is out of range [0, {max}]")]
    InvalidDepth { depth: u8, max: u8 },

    #[error("a drawing is in progress")]
    Busy,
}

/// Convenience type alias for results using [`KochError`].
pub type Result<T> = std::result::Result<T, KochError>;
