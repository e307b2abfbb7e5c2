use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use crate::error::Result;
use crate::models::{BoundingBox, Candidate, Classification, Contour};
use crate::pipeline::CandidateSink;

/// Passed the dimension filter
pub const CANDIDATE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const ACCEPTED_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
/// Right size, rejected by aspect ratio
pub const REJECTED_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const CONTOUR_COLOR: Rgb<u8> = Rgb([255, 128, 0]);

pub fn to_rgb(map: &GrayImage) -> RgbImage {
    image::DynamicImage::ImageLuma8(map.clone()).to_rgb8()
}

/// Two-pixel outline from `(x, y)` to `(x + w, y + h)`
pub fn draw_box(canvas: &mut RgbImage, bbox: &BoundingBox, color: Rgb<u8>) {
    let outer = Rect::at(bbox.x as i32, bbox.y as i32).of_size(bbox.width + 1, bbox.height + 1);
    draw_hollow_rect_mut(canvas, outer, color);

    if bbox.width >= 2 && bbox.height >= 2 {
        let inner = Rect::at(bbox.x as i32 + 1, bbox.y as i32 + 1)
            .of_size(bbox.width - 1, bbox.height - 1);
        draw_hollow_rect_mut(canvas, inner, color);
    }
}

/// Closed polyline through the contour's points
pub fn draw_contour(canvas: &mut RgbImage, contour: &Contour, color: Rgb<u8>) {
    let n = contour.points.len();
    for i in 0..n {
        let p1 = contour.points[i];
        let p2 = contour.points[(i + 1) % n];
        draw_line_segment_mut(
            canvas,
            (p1.x as f32, p1.y as f32),
            (p2.x as f32, p2.y as f32),
            color,
        );
    }
}

/// Color-coded bounding boxes over an RGB copy of the input map
pub struct DebugOverlay {
    canvas: RgbImage,
}

impl DebugOverlay {
    pub fn new(map: &GrayImage) -> Self {
        Self { canvas: to_rgb(map) }
    }

    pub fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbImage {
        self.canvas
    }
}

impl CandidateSink for DebugOverlay {
    fn consume(&mut self, candidate: &Candidate) -> Result<()> {
        if !candidate.classification.passed_dimensions() {
            return Ok(());
        }

        draw_box(&mut self.canvas, &candidate.bbox, CANDIDATE_COLOR);
        match candidate.classification {
            Classification::Accepted => draw_box(&mut self.canvas, &candidate.bbox, ACCEPTED_COLOR),
            Classification::RejectedByAspect => {
                draw_box(&mut self.canvas, &candidate.bbox, REJECTED_COLOR)
            }
            Classification::RejectedBySize => {}
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Debug Overlay"
    }
}
