use crate::error::RenderError;
use crate::tile::IntensityGrid;

/// The reference 70-glyph ramp, ordered from visually densest to sparsest.
pub const DEFAULT_RAMP: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Ordered character sequence used to represent intensity buckets.
///
/// Index 0 holds the visually densest glyph, the last index the sparsest.
/// The ramp is immutable once constructed; its length is a runtime
/// parameter, not a fixed constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Create a ramp from a dense-to-sparse character sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::EmptyRamp`] if the sequence contains no
    /// characters.
    ///
    /// # Example
    ///
    /// ```
    /// use asciipix_render::glyph::GlyphRamp;
    ///
    /// let ramp = GlyphRamp::new("#+. ").unwrap();
    /// assert_eq!(ramp.len(), 4);
    /// assert_eq!(ramp.glyph(0), '#');
    /// assert_eq!(ramp.glyph(255), ' ');
    /// ```
    pub fn new(glyphs: &str) -> Result<Self, RenderError> {
        if glyphs.is_empty() {
            return Err(RenderError::EmptyRamp);
        }
        Ok(Self {
            glyphs: glyphs.chars().collect(),
        })
    }

    /// Get the number of glyphs in the ramp.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the ramp contains no glyphs. Construction rejects the empty
    /// sequence, so this is always false for a constructed ramp.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Get the glyph for an intensity value.
    ///
    /// The glyph index is `intensity * (len - 1) / 255` with integer
    /// division, a linear bucketing from darkest (ramp start) to brightest
    /// (ramp end).
    pub fn glyph(&self, intensity: u8) -> char {
        let index = intensity as usize * (self.glyphs.len() - 1) / 255;
        self.glyphs[index]
    }
}

impl Default for GlyphRamp {
    /// The reference ramp, see [`DEFAULT_RAMP`].
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
        }
    }
}

/// Render an intensity grid as text.
///
/// Each tile becomes one glyph, each tile row one line. The line separator
/// is appended after every row including the last; the trailing separator is
/// part of the observed output.
///
/// # Arguments
///
/// * `grid` - The per-tile intensities.
/// * `ramp` - The glyph ramp, densest first.
/// * `line_separator` - Appended after every row.
pub fn render_text(grid: &IntensityGrid, ramp: &GlyphRamp, line_separator: &str) -> String {
    let mut text =
        String::with_capacity((grid.tiles_wide() + line_separator.len()) * grid.tiles_tall());

    for row in grid.as_slice().chunks_exact(grid.tiles_wide()) {
        for &intensity in row {
            text.push(ramp.glyph(intensity));
        }
        text.push_str(line_separator);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_mapping() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.len(), 70);
        assert_eq!(ramp.glyph(0), '$');
        assert_eq!(ramp.glyph(255), ' ');
    }

    #[test]
    fn bucket_monotonicity() {
        let ramp = GlyphRamp::default();
        let index_of = |intensity: u8| intensity as usize * (ramp.len() - 1) / 255;

        for v in 0..255u8 {
            assert!(index_of(v) <= index_of(v + 1));
        }
    }

    #[test]
    fn mid_intensity_bucket() {
        // 85 * 69 / 255 = 23
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.glyph(85), DEFAULT_RAMP.chars().nth(23).unwrap());
        assert_eq!(ramp.glyph(85), 'Q');
    }

    #[test]
    fn single_glyph_ramp() {
        let ramp = GlyphRamp::new("#").unwrap();
        assert_eq!(ramp.glyph(0), '#');
        assert_eq!(ramp.glyph(128), '#');
        assert_eq!(ramp.glyph(255), '#');
    }

    #[test]
    fn empty_ramp_rejected() {
        assert_eq!(GlyphRamp::new("").err(), Some(RenderError::EmptyRamp));
    }

    #[test]
    fn render_rows_outer_columns_inner() {
        // 3 wide, 2 tall, row-major
        let grid = IntensityGrid::new(3, 2, vec![0, 0, 255, 255, 255, 0]);
        let ramp = GlyphRamp::new("#. ").unwrap();

        let text = render_text(&grid, &ramp, "\n");

        assert_eq!(text, "## \n  #\n");
    }

    #[test]
    fn trailing_separator_preserved() {
        let grid = IntensityGrid::new(1, 1, vec![0]);
        let ramp = GlyphRamp::default();

        let text = render_text(&grid, &ramp, "\r\n");

        assert_eq!(text, "$\r\n");
    }
}
