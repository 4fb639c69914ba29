use thiserror::Error;

/// Errors raised when constructing a pixel buffer from raw parts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("Pixel data length {len} does not match {width}x{height} RGBA")]
    SizeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("Buffer dimensions must be non-zero (got {width}x{height})")]
    Empty { width: usize, height: usize },
}

/// Errors raised when parsing a `#RRGGBB` color string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Expected 6 hex digits, got {0} characters")]
    InvalidLength(usize),

    #[error("Invalid hex digits in color: {0}")]
    InvalidHex(String),
}

/// Errors that can occur while loading artwork into a session
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read artwork: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode artwork: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Decoded artwork is unusable: {0}")]
    Buffer(#[from] BufferError),
}

/// Errors that can occur while exporting the current canvas
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No artwork is loaded")]
    NoArtwork,

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
