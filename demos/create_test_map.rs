use image::{GrayImage, Luma};
use std::path::Path;

fn block(map: &mut GrayImage, x: u32, y: u32, w: u32, h: u32, value: u8) {
    for py in y..y + h {
        for px in x..x + w {
            map.put_pixel(px, py, Luma([value]));
        }
    }
}

fn main() -> anyhow::Result<()> {
    let mut map = GrayImage::from_pixel(500, 450, Luma([254]));

    // Outer walls. The room must stay wider than the largest table, otherwise
    // the inside border of the walls is itself a table candidate.
    block(&mut map, 0, 0, 500, 4, 0);
    block(&mut map, 0, 446, 500, 4, 0);
    block(&mut map, 0, 0, 4, 450, 0);
    block(&mut map, 496, 0, 4, 450, 0);

    // Square table, long table, and one too long to count
    block(&mut map, 40, 40, 60, 60, 0);
    block(&mut map, 160, 40, 50, 95, 0);
    block(&mut map, 260, 40, 35, 120, 0);

    // Faint gray above the cutoff stays free space; the clutter is too small
    block(&mut map, 40, 200, 80, 60, 252);
    block(&mut map, 300, 220, 12, 12, 0);

    tablefeet::io::save_map(&map, Path::new("map.pgm"))?;
    println!("Created map.pgm (500x450 synthetic occupancy map)");
    Ok(())
}
