/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image has a zero width or height.
    #[error("Image dimensions must be non-zero, got {0}x{1}")]
    ZeroImageSize(usize, usize),

    /// Error when two images are expected to have the same size but do not.
    #[error("Images have incompatible sizes ({0}x{1} vs {2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel index ({0}, {1}) out of bounds for image size {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),
}
