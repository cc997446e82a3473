use thiserror::Error;

#[derive(Debug, Error)]
pub enum SquircleError {
    #[error("invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("invalid corner size {0:?}, expected pixels or a percentage like \"25%\"")]
    InvalidCornerSize(String),

    #[error("failed to allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Png(#[from] png::EncodingError),

    #[error("failed to parse SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SquircleError>;
