//! Error types for icon rendering and output.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for icon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested edge length is too small to draw the icon.
    ///
    /// `min` is [`IconSize::MIN`](crate::IconSize::MIN): below it the
    /// crosshair arms (`edge / 30` long) shrink under one pixel.
    #[error("invalid icon size {size}: edge length must be at least {min} px")]
    InvalidSize { size: u32, min: u32 },

    /// The drawing canvas could not be allocated.
    #[error("failed to allocate a {size}x{size} canvas")]
    Canvas { size: u32 },

    /// A drawing path collapsed to nothing.
    #[error("failed to build {0} path")]
    Path(&'static str),

    /// Encoding or writing a PNG failed.
    #[error("failed to write {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Reading a file failed.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing progress output failed.
    #[error("failed to write output")]
    Output(#[from] std::io::Error),

    /// A profile could not be parsed or serialized.
    #[error("invalid profile")]
    Profile(#[from] serde_json::Error),
}
