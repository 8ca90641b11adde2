use asciipix_image::ImageError;
use thiserror::Error;

/// Errors that can occur in the rendering pipeline.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// Error coming from the pixel buffer layer.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The tiling factor produced no tiles for the given image.
    #[error("tiling factor {factor} produces no tiles for a {width}x{height} image")]
    DegenerateTiling {
        /// Width of the source image in pixels.
        width: usize,
        /// Height of the source image in pixels.
        height: usize,
        /// The rounded tiling factor.
        factor: i64,
    },

    /// The glyph ramp contains no glyphs.
    #[error("glyph ramp must contain at least one glyph")]
    EmptyRamp,
}
