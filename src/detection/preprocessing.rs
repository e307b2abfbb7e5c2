use image::{DynamicImage, GrayImage};
use imageproc::contrast::{threshold, ThresholdType};

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Mark every pixel at or below `cutoff` as foreground (255), the rest as
/// background (0). Only near-white pixels count as free space.
pub fn binarize(img: &GrayImage, cutoff: u8) -> GrayImage {
    threshold(img, cutoff, ThresholdType::BinaryInverted)
}
