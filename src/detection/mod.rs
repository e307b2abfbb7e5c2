pub mod preprocessing;
pub mod contours;
pub mod filter;
pub mod editor;
pub mod overlay;

use image::GrayImage;
use crate::config::TableConfig;
use crate::models::{Candidate, Contour};

/// Detection half of the pipeline, without any editing.
/// Useful for inspecting what a given configuration would do to a map.
pub struct TableDetector {
    pub config: TableConfig,
}

impl TableDetector {
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    /// Binary mask the contours are traced on
    pub fn get_mask(&self, map: &GrayImage) -> GrayImage {
        preprocessing::binarize(map, self.config.threshold)
    }

    /// Get all contours of a map (for debugging)
    pub fn get_contours(&self, map: &GrayImage) -> Vec<Contour> {
        contours::find_contours(&self.get_mask(map))
    }

    /// Classify every contour of a map
    pub fn get_candidates(&self, map: &GrayImage) -> Vec<Candidate> {
        filter::classify_all(&self.get_contours(map), &self.config.filter)
    }

    /// Only the contours that would be replaced
    pub fn get_tables(&self, map: &GrayImage) -> Vec<Candidate> {
        self.get_candidates(map)
            .into_iter()
            .filter(|c| c.classification.is_accepted())
            .collect()
    }
}

impl Default for TableDetector {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}
