use crate::config::TableFilter;
use crate::models::{BoundingBox, Candidate, Classification, Contour};

/// Both sides within `[min_dim, max_dim]`
pub fn passes_dimensions(bbox: &BoundingBox, filter: &TableFilter) -> bool {
    let in_range = |side: u32| side >= filter.min_dim && side <= filter.max_dim;
    in_range(bbox.width) && in_range(bbox.height)
}

/// Normalized aspect ratio within `[min_ar, max_ar]`
pub fn passes_aspect_ratio(normalized_aspect: f64, filter: &TableFilter) -> bool {
    normalized_aspect >= filter.min_ar && normalized_aspect <= filter.max_ar
}

/// Size first; the aspect ratio only matters for boxes of table size
pub fn classify(bbox: &BoundingBox, filter: &TableFilter) -> Classification {
    if !passes_dimensions(bbox, filter) {
        Classification::RejectedBySize
    } else if passes_aspect_ratio(bbox.normalized_aspect_ratio(), filter) {
        Classification::Accepted
    } else {
        Classification::RejectedByAspect
    }
}

/// Classify every contour, in detector order
pub fn classify_all(contours: &[Contour], filter: &TableFilter) -> Vec<Candidate> {
    contours
        .iter()
        .filter_map(|contour| {
            let bbox = contour.bounding_box()?;
            Some(Candidate {
                index: contour.index,
                bbox,
                normalized_aspect: bbox.normalized_aspect_ratio(),
                classification: classify(&bbox, filter),
            })
        })
        .collect()
}

/// Pairs `(earlier, later)` of accepted candidates whose boxes overlap
pub fn find_overlaps(candidates: &[Candidate]) -> Vec<(usize, usize)> {
    let accepted: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| c.classification.is_accepted())
        .collect();

    let mut overlaps = Vec::new();
    for (i, a) in accepted.iter().enumerate() {
        for b in &accepted[i + 1..] {
            if a.bbox.overlaps(&b.bbox) {
                overlaps.push((a.index, b.index));
            }
        }
    }
    overlaps
}
