use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use crate::error::Result;
use crate::models::{BoundingBox, Candidate};
use crate::pipeline::CandidateSink;

pub const FREE: Luma<u8> = Luma([255]);
pub const OCCUPIED: Luma<u8> = Luma([0]);

/// Clear the table from the map: everything from `(x, y)` to
/// `(x + w, y + h)`, both corners included, becomes free space.
pub fn erase_table(map: &mut GrayImage, bbox: &BoundingBox) {
    let rect = Rect::at(bbox.x as i32, bbox.y as i32).of_size(bbox.width + 1, bbox.height + 1);
    draw_filled_rect_mut(map, rect, FREE);
}

/// Stamp an occupied square centered on each corner of the box.
///
/// Each square spans `center - foot_size / 2 ..= center + foot_size / 2`.
/// Pixels outside the map are clipped.
pub fn stamp_feet(map: &mut GrayImage, bbox: &BoundingBox, foot_size: u32) {
    let half = (foot_size / 2) as i32;
    let side = 2 * half as u32 + 1;
    for (cx, cy) in bbox.corners() {
        let rect = Rect::at(cx as i32 - half, cy as i32 - half).of_size(side, side);
        draw_filled_rect_mut(map, rect, OCCUPIED);
    }
}

/// Rewrites accepted tables on its own copy of the map
pub struct MapEditor {
    map: GrayImage,
    foot_size: u32,
    edited: usize,
}

impl MapEditor {
    pub fn new(map: GrayImage, foot_size: u32) -> Self {
        Self { map, foot_size, edited: 0 }
    }

    /// Number of tables replaced so far
    pub fn edited(&self) -> usize {
        self.edited
    }

    pub fn into_map(self) -> GrayImage {
        self.map
    }
}

impl CandidateSink for MapEditor {
    fn consume(&mut self, candidate: &Candidate) -> Result<()> {
        if candidate.classification.is_accepted() {
            erase_table(&mut self.map, &candidate.bbox);
            stamp_feet(&mut self.map, &candidate.bbox, self.foot_size);
            self.edited += 1;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Map Editor"
    }
}
