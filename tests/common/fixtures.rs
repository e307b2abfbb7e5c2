use image::{GrayImage, Luma};
use tablefeet::io;
use tempfile::TempDir;

pub const FREE: u8 = 255;
pub const OCCUPIED: u8 = 0;

/// Creates an all-free map of the given size.
pub fn blank_map(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([FREE]))
}

/// Fills the `w` x `h` block whose top-left pixel is `(x, y)`.
pub fn fill_block(map: &mut GrayImage, x: u32, y: u32, w: u32, h: u32, value: u8) {
    for py in y..y + h {
        for px in x..x + w {
            map.put_pixel(px, py, Luma([value]));
        }
    }
}

/// Creates a blank map with one occupied block on it.
pub fn map_with_block(width: u32, height: u32, x: u32, y: u32, w: u32, h: u32) -> GrayImage {
    let mut map = blank_map(width, height);
    fill_block(&mut map, x, y, w, h, OCCUPIED);
    map
}

/// Writes `map` as `map.pgm` in a fresh temp directory.
/// Returns the directory (keep it alive) and the map path.
pub fn write_temp_map(map: &GrayImage) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("map.pgm");
    io::save_map(map, &path).expect("Failed to save test map");
    (dir, path)
}

/// True when `(px, py)` lies within `half` pixels of any corner in Chebyshev distance.
pub fn near_corner(corners: &[(u32, u32); 4], px: u32, py: u32, half: u32) -> bool {
    corners
        .iter()
        .any(|&(cx, cy)| px.abs_diff(cx) <= half && py.abs_diff(cy) <= half)
}
