use rayon::prelude::*;

use asciipix_image::{argb, ArgbImage};

use crate::error::RenderError;

/// Fraction of the image width used to derive the tile edge length.
pub const DEFAULT_TILE_FACTOR: f64 = 0.015;

/// 2D grid of per-tile averaged brightness values.
///
/// Produced by [`tile_average`] and consumed by
/// [`render_text`](crate::glyph::render_text), one glyph per tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    tiles_wide: usize,
    tiles_tall: usize,
    data: Vec<u8>,
}

impl IntensityGrid {
    pub(crate) fn new(tiles_wide: usize, tiles_tall: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), tiles_wide * tiles_tall);
        Self {
            tiles_wide,
            tiles_tall,
            data,
        }
    }

    /// Get the number of tile columns.
    pub fn tiles_wide(&self) -> usize {
        self.tiles_wide
    }

    /// Get the number of tile rows.
    pub fn tiles_tall(&self) -> usize {
        self.tiles_tall
    }

    /// Get the intensity of the tile at the given column and row.
    pub fn get(&self, col: usize, row: usize) -> Option<u8> {
        if col >= self.tiles_wide || row >= self.tiles_tall {
            return None;
        }
        Some(self.data[row * self.tiles_wide + col])
    }

    /// Get the tile intensities as a flat row-major slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

/// Partition a greyscaled image into rectangular tiles and average each
/// tile's intensity.
///
/// The tile edge length is `round(tile_factor * width)` pixels, rounding
/// half away from zero. The grid is `width / factor` tiles wide and
/// `height / factor` tiles tall; the pixel extent of a tile is then derived
/// by a second integer division (`width / tiles_wide` by
/// `height / tiles_tall`), so it can drift slightly from the factor. Margin
/// pixels beyond the last full tile are excluded from every average. Both
/// behaviors are load-bearing for output compatibility and deliberately kept.
///
/// Only the blue channel is sampled; after greyscale conversion all color
/// channels hold the same value.
///
/// # Arguments
///
/// * `src` - The greyscaled input image.
/// * `tile_factor` - Fraction of the width used as tile edge length, usually
///   [`DEFAULT_TILE_FACTOR`].
///
/// # Errors
///
/// Returns [`RenderError::DegenerateTiling`] when the rounded factor or one
/// of the tile counts resolves to zero, e.g. for very narrow images.
///
/// # Example
///
/// ```
/// use asciipix_image::{ArgbImage, ImageSize};
/// use asciipix_render::tile::{tile_average, DEFAULT_TILE_FACTOR};
///
/// let image = ArgbImage::from_size_val(
///     ImageSize {
///         width: 100,
///         height: 100,
///     },
///     85,
/// )
/// .unwrap();
///
/// let grid = tile_average(&image, DEFAULT_TILE_FACTOR).unwrap();
///
/// assert_eq!(grid.tiles_wide(), 50);
/// assert_eq!(grid.tiles_tall(), 50);
/// assert_eq!(grid.get(0, 0), Some(85));
/// ```
pub fn tile_average(src: &ArgbImage, tile_factor: f64) -> Result<IntensityGrid, RenderError> {
    let (width, height) = (src.width(), src.height());

    let factor = (tile_factor * width as f64).round() as i64;
    if factor <= 0 {
        return Err(RenderError::DegenerateTiling {
            width,
            height,
            factor,
        });
    }

    let tiles_wide = width / factor as usize;
    let tiles_tall = height / factor as usize;
    if tiles_wide == 0 || tiles_tall == 0 {
        return Err(RenderError::DegenerateTiling {
            width,
            height,
            factor,
        });
    }

    let tile_width = width / tiles_wide;
    let tile_height = height / tiles_tall;

    let src_data = src.as_slice();
    let row_stride = width * argb::CHANNELS;

    // one grid row per rayon job; each tile sums its pixel rectangle
    let mut data = vec![0u8; tiles_wide * tiles_tall];
    data.par_chunks_exact_mut(tiles_wide)
        .enumerate()
        .for_each(|(row, grid_row)| {
            for (col, tile) in grid_row.iter_mut().enumerate() {
                let mut sum = 0u64;
                for y in row * tile_height..(row + 1) * tile_height {
                    let row_offset = y * row_stride;
                    for x in col * tile_width..(col + 1) * tile_width {
                        sum += src_data[row_offset + x * argb::CHANNELS + argb::BLUE] as u64;
                    }
                }
                *tile = (sum / (tile_width * tile_height) as u64) as u8;
            }
        });

    Ok(IntensityGrid::new(tiles_wide, tiles_tall, data))
}
