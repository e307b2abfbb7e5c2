use image::GrayImage;
use imageproc::contours::{find_contours as trace_borders, BorderType};
use imageproc::point::Point;
use crate::models::Contour;

/// Find every border in a binary mask (non-zero pixels = foreground).
///
/// Outer borders and hole borders are both returned, whatever their nesting,
/// as one flat list. Points are chain-compressed with [`compress_chain`].
pub fn find_contours(mask: &GrayImage) -> Vec<Contour> {
    trace_borders::<i32>(mask)
        .into_iter()
        .filter(|c| !c.points.is_empty())
        .enumerate()
        .map(|(index, c)| Contour {
            index,
            points: compress_chain(&c.points),
            is_hole: c.border_type == BorderType::Hole,
        })
        .collect()
}

/// Drop points in the middle of straight horizontal, vertical or diagonal
/// runs, keeping only the points where the direction changes.
///
/// The curve is treated as closed. Extreme points always sit at a direction
/// change, so the bounding box is unchanged.
pub fn compress_chain(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    points
        .iter()
        .enumerate()
        .filter(|&(i, &p)| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, p) != step(p, next)
        })
        .map(|(_, &p)| p)
        .collect()
}

fn step(from: Point<i32>, to: Point<i32>) -> (i32, i32) {
    ((to.x - from.x).signum(), (to.y - from.y).signum())
}
