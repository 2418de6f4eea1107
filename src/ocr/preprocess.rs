//! Plate image pre-processing
//!
//! Conditions a photo for text recognition before it crosses the OCR
//! boundary: grayscale, denoise, contrast equalization, sharpening, then
//! adaptive binarization. Plates photographed outdoors mix glare, shadow
//! and dirt; a global threshold loses glyph strokes that the adaptive one
//! keeps.

use image::{DynamicImage, GrayImage, Luma};
use imageproc::contrast::{adaptive_threshold, equalize_histogram};
use imageproc::filter::{filter3x3, median_filter};

/// 3x3 sharpen kernel applied after denoising to recover glyph edges.
const SHARPEN_KERNEL: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 9.0, -1.0, -1.0, -1.0, -1.0];

/// Neighborhood radius for adaptive thresholding (11x11 blocks).
const THRESHOLD_BLOCK_RADIUS: u32 = 5;

/// Run the full plate pipeline, producing a binarized grayscale image.
pub fn prepare_plate_image(image: &DynamicImage) -> GrayImage {
    let gray = image.to_luma8();
    let denoised = median_filter(&gray, 1, 1);
    let equalized = equalize_histogram(&denoised);
    let sharpened = filter3x3::<Luma<u8>, f32, u8>(&equalized, &SHARPEN_KERNEL);
    adaptive_threshold(&sharpened, THRESHOLD_BLOCK_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn gradient_image(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            let v = ((x * 7 + y * 13) % 256) as u8;
            image::Rgba([v, v, v, 255])
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_pipeline_preserves_dimensions() {
        let img = gradient_image(40, 20);
        let result = prepare_plate_image(&img);
        assert_eq!(result.dimensions(), (40, 20));
    }

    #[test]
    fn test_pipeline_binarizes() {
        let img = gradient_image(32, 32);
        let result = prepare_plate_image(&img);
        assert!(result.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }
}
