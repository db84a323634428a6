//! Errors raised when writing rendered images.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image buffer is {width}x{height} but holds {pixels} pixels")]
    SizeMismatch { width: u32, height: u32, pixels: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;
