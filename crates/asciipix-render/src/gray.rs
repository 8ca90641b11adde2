use crate::parallel;
use asciipix_image::{argb, ArgbImage, ImageError};

/// Convert an ARGB8 image to greyscale using the formula:
///
/// Y = (R + G + B) / 3
///
/// The division is an integer (floor) division, which matches the bucketing
/// the glyph ramp was tuned against. Red, green and blue are replaced with
/// the average; alpha is preserved unchanged.
///
/// # Arguments
///
/// * `src` - The input ARGB8 image.
/// * `dst` - The output greyscaled ARGB8 image.
///
/// Precondition: the input and output images must have the same size.
/// Both images are non-empty by construction, see [`asciipix_image::Image::new`].
///
/// # Example
///
/// ```
/// use asciipix_image::{ArgbImage, ImageSize};
/// use asciipix_render::gray::gray_from_argb_u8;
///
/// let image = ArgbImage::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![255, 255, 0, 0],
/// )
/// .unwrap();
///
/// let mut gray = ArgbImage::from_size_val(image.size(), 0).unwrap();
///
/// gray_from_argb_u8(&image, &mut gray).unwrap();
/// assert_eq!(gray.as_slice(), &[255, 85, 85, 85]);
/// ```
pub fn gray_from_argb_u8(src: &ArgbImage, dst: &mut ArgbImage) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // parallelize the greyscale conversion by rows
    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let r = src_pixel[argb::RED] as u16;
        let g = src_pixel[argb::GREEN] as u16;
        let b = src_pixel[argb::BLUE] as u16;
        let avg = ((r + g + b) / 3) as u8;
        dst_pixel[argb::ALPHA] = src_pixel[argb::ALPHA];
        dst_pixel[argb::RED] = avg;
        dst_pixel[argb::GREEN] = avg;
        dst_pixel[argb::BLUE] = avg;
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use asciipix_image::{ArgbImage, ImageError, ImageSize};

    #[test]
    fn gray_from_argb_u8_regression() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = ArgbImage::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                255, 255,   0,   0,
                255,   0, 255,   0,
                128,   0,   0, 255,
                255, 100, 101, 102,
            ],
        )?;

        let mut gray = ArgbImage::from_size_val(image.size(), 0)?;
        super::gray_from_argb_u8(&image, &mut gray)?;

        // (100 + 101 + 102) / 3 = 101, the others average to 85 by floor division
        #[rustfmt::skip]
        let expected = vec![
            255,  85,  85,  85,
            255,  85,  85,  85,
            128,  85,  85,  85,
            255, 101, 101, 101,
        ];

        assert_eq!(gray.as_slice(), expected.as_slice());

        Ok(())
    }

    #[test]
    fn gray_preserves_dimensions() -> Result<(), ImageError> {
        let image = ArgbImage::from_size_val(
            ImageSize {
                width: 7,
                height: 3,
            },
            200,
        )?;
        let mut gray = ArgbImage::from_size_val(image.size(), 0)?;

        super::gray_from_argb_u8(&image, &mut gray)?;

        assert_eq!(gray.size(), image.size());

        Ok(())
    }

    #[test]
    fn gray_applied_twice_is_stable() -> Result<(), ImageError> {
        let image = ArgbImage::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![255, 10, 200, 33, 0, 255, 254, 253],
        )?;

        let mut once = ArgbImage::from_size_val(image.size(), 0)?;
        super::gray_from_argb_u8(&image, &mut once)?;

        let mut twice = ArgbImage::from_size_val(image.size(), 0)?;
        super::gray_from_argb_u8(&once, &mut twice)?;

        assert_eq!(once, twice);

        Ok(())
    }

    #[test]
    fn gray_size_mismatch() -> Result<(), ImageError> {
        let image = ArgbImage::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut gray = ArgbImage::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;

        let result = super::gray_from_argb_u8(&image, &mut gray);
        assert_eq!(result.err(), Some(ImageError::InvalidImageSize(2, 2, 3, 2)));

        Ok(())
    }
}
