use std::path::PathBuf;

use tablefeet::{Classification, TableConfig, TableDetector};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("map.pgm"));
    let map = tablefeet::io::load_map(&path)?;

    let detector = TableDetector::new(TableConfig::driver());
    let contours = detector.get_contours(&map);
    println!("{}: {} contours", path.display(), contours.len());

    for candidate in detector.get_candidates(&map) {
        let verdict = match candidate.classification {
            Classification::RejectedBySize => continue,
            Classification::RejectedByAspect => "aspect",
            Classification::Accepted => "table",
        };
        let b = candidate.bbox;
        println!(
            "  #{:<3} {:>4},{:<4} {:>3}x{:<3} ar={:.2} {}",
            candidate.index, b.x, b.y, b.width, b.height, candidate.normalized_aspect, verdict
        );
    }
    Ok(())
}
