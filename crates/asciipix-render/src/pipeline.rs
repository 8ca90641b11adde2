use std::sync::Arc;
use std::thread;

use log::{debug, error};

use asciipix_image::ArgbImage;

use crate::error::RenderError;
use crate::glyph::{render_text, GlyphRamp};
use crate::gray::gray_from_argb_u8;
use crate::tile::{tile_average, DEFAULT_TILE_FACTOR};

/// Observer for the progress of a conversion run.
///
/// This is the only point of contact with the presentation layer: the
/// pipeline hands each intermediate artifact to the observer and never
/// renders anything itself. The first two callbacks fire on the caller's
/// thread before [`convert`] returns; exactly one of [`on_text`] or
/// [`on_error`] fires later from the rendering thread.
///
/// [`on_text`]: ConversionObserver::on_text
/// [`on_error`]: ConversionObserver::on_error
pub trait ConversionObserver: Send + Sync {
    /// Called with the original buffer before any processing.
    fn on_original(&self, image: &ArgbImage);

    /// Called with the greyscaled buffer.
    fn on_grayscale(&self, image: &ArgbImage);

    /// Called with the rendered text once the background stage completes.
    fn on_text(&self, text: &str);

    /// Called instead of [`on_text`](ConversionObserver::on_text) when the
    /// background stage fails.
    fn on_error(&self, error: RenderError);
}

/// Configuration for a conversion run.
///
/// An explicit value rather than process-wide state; each call to
/// [`convert`] receives its own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// The glyph ramp, densest first.
    pub ramp: GlyphRamp,
    /// Fraction of the image width used as tile edge length.
    pub tile_factor: f64,
    /// Separator appended after every output row, including the last.
    pub line_separator: String,
}

impl Default for RenderConfig {
    /// The reference ramp, the 0.015 tiling factor and the platform newline.
    fn default() -> Self {
        Self {
            ramp: GlyphRamp::default(),
            tile_factor: DEFAULT_TILE_FACTOR,
            line_separator: if cfg!(windows) { "\r\n" } else { "\n" }.to_string(),
        }
    }
}

/// Run the conversion pipeline on a decoded image.
///
/// The original buffer and the greyscaled buffer are reported to the
/// observer synchronously, in that order. Tiling and glyph mapping then run
/// on a spawned thread, which delivers exactly one of
/// [`ConversionObserver::on_text`] or [`ConversionObserver::on_error`].
/// Concurrent calls are independent; each invocation exclusively owns its
/// buffers and intensity grid.
///
/// The returned join handle resolves once the text or the error has been
/// delivered. Dropping it detaches the rendering thread.
///
/// # Errors
///
/// Errors detected before the rendering thread is spawned (a greyscale
/// buffer that cannot be allocated or converted) are returned directly.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use asciipix_image::{ArgbImage, ImageSize};
/// use asciipix_render::pipeline::{convert, ConversionObserver, RenderConfig};
/// use asciipix_render::RenderError;
///
/// #[derive(Default)]
/// struct Collect(Mutex<String>);
///
/// impl ConversionObserver for Collect {
///     fn on_original(&self, _image: &ArgbImage) {}
///     fn on_grayscale(&self, _image: &ArgbImage) {}
///     fn on_text(&self, text: &str) {
///         self.0.lock().unwrap().push_str(text);
///     }
///     fn on_error(&self, _error: RenderError) {}
/// }
///
/// let image = ArgbImage::from_size_val(
///     ImageSize {
///         width: 100,
///         height: 100,
///     },
///     255,
/// )
/// .unwrap();
///
/// let observer = Arc::new(Collect::default());
/// let handle = convert(image, RenderConfig::default(), observer.clone()).unwrap();
/// handle.join().unwrap();
///
/// // 50 lines of 50 glyphs each
/// assert_eq!(observer.0.lock().unwrap().lines().count(), 50);
/// ```
pub fn convert(
    image: ArgbImage,
    config: RenderConfig,
    observer: Arc<dyn ConversionObserver>,
) -> Result<thread::JoinHandle<()>, RenderError> {
    observer.on_original(&image);

    let mut grayscaled = ArgbImage::from_size_val(image.size(), 0)?;
    gray_from_argb_u8(&image, &mut grayscaled)?;
    observer.on_grayscale(&grayscaled);
    debug!("greyscaled {}, rendering text", image.size());

    let handle = thread::spawn(move || match tile_average(&grayscaled, config.tile_factor) {
        Ok(grid) => {
            let text = render_text(&grid, &config.ramp, &config.line_separator);
            debug!(
                "rendered {}x{} glyphs",
                grid.tiles_wide(),
                grid.tiles_tall()
            );
            observer.on_text(&text);
        }
        Err(e) => {
            error!("text rendering failed: {e}");
            observer.on_error(e);
        }
    });

    Ok(handle)
}
