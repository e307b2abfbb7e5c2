use imageproc::point::Point;

/// Axis-aligned bounding box in map pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Column of the far corner, `x + width`
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Row of the far corner, `y + height`
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [(u32, u32); 4] {
        [
            (self.x, self.y),
            (self.right(), self.y),
            (self.x, self.bottom()),
            (self.right(), self.bottom()),
        ]
    }

    pub fn normalized_aspect_ratio(&self) -> f64 {
        normalized_aspect_ratio(self.width, self.height)
    }

    /// True when the corner-to-corner regions of both boxes share a pixel
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

/// Longer side over shorter side, always >= 1. A zero height gives infinity.
pub fn normalized_aspect_ratio(width: u32, height: u32) -> f64 {
    let aspect = if height == 0 {
        f64::INFINITY
    } else {
        width as f64 / height as f64
    };
    aspect.max(1.0 / aspect)
}

/// Boundary curve of one connected foreground region
#[derive(Debug, Clone)]
pub struct Contour {
    /// Position in the detector's output
    pub index: usize,
    pub points: Vec<Point<i32>>,
    /// Border of a hole inside a region rather than its outer border
    pub is_hole: bool,
}

impl Contour {
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.points.first()?;
        let (min_x, min_y, max_x, max_y) = self.points.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        );

        // Contour points come from image coordinates and are never negative
        Some(BoundingBox {
            x: min_x.max(0) as u32,
            y: min_y.max(0) as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Outside the dimension window; never printed or drawn
    RejectedBySize,
    /// Right size, wrong shape
    RejectedByAspect,
    Accepted,
}

impl Classification {
    pub fn passed_dimensions(&self) -> bool {
        !matches!(self, Classification::RejectedBySize)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Classification::Accepted)
    }
}

/// A classified contour, handed to every output sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub index: usize,
    pub bbox: BoundingBox,
    pub normalized_aspect: f64,
    pub classification: Classification,
}
