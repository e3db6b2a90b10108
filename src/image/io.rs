//! Sample loading via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. 8-bit luma is reduced to
//! 4-bit intensity by integer division by 16.

use crate::image::Sample;
use crate::util::{MicroDetectError, MicroDetectResult};
use std::path::Path;

/// Builds a sample from a grayscale image buffer.
pub fn sample_from_gray_image(
    id: impl Into<String>,
    img: &image::GrayImage,
) -> MicroDetectResult<Sample> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.as_raw().iter().map(|&v| v / 16).collect();
    Sample::from_raw(id, data, width, height)
}

/// Builds a sample from a dynamic image, converting it to luma first.
pub fn sample_from_dynamic_image(
    id: impl Into<String>,
    img: &image::DynamicImage,
) -> MicroDetectResult<Sample> {
    let gray = img.to_luma8();
    sample_from_gray_image(id, &gray)
}

/// Loads an image from disk and converts it to a sample.
pub fn load_sample<P: AsRef<Path>>(path: P, id: impl Into<String>) -> MicroDetectResult<Sample> {
    let img = image::open(path).map_err(|err| MicroDetectError::ImageIo {
        reason: err.to_string(),
    })?;
    sample_from_dynamic_image(id, &img)
}

#[cfg(test)]
mod tests {
    use super::sample_from_gray_image;

    #[test]
    fn luma_is_quantized_to_nibbles() {
        let img = image::GrayImage::from_raw(3, 1, vec![0, 17, 255]).unwrap();
        let sample = sample_from_gray_image("png", &img).unwrap();
        assert_eq!(sample.data(), &[0, 1, 15]);
        assert_eq!((sample.width(), sample.height()), (3, 1));
    }
}
