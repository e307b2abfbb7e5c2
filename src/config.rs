use crate::error::{MapError, Result};

/// Intensities at or below this are obstacle pixels.
pub const DEFAULT_THRESHOLD: u8 = 250;
pub const DEFAULT_MIN_DIM: u32 = 30;
pub const DEFAULT_MAX_DIM: u32 = 400;
pub const DEFAULT_MIN_AR: f64 = 1.0;
pub const DEFAULT_MAX_AR: f64 = 1.5;
/// The driver accepts longer tables than the library default.
pub const DRIVER_MAX_AR: f64 = 2.0;
pub const DEFAULT_FOOT_SIZE: u32 = 5;

/// Bounding-box limits a contour must satisfy to count as a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableFilter {
    /// Smallest accepted side length in pixels (inclusive)
    pub min_dim: u32,
    /// Largest accepted side length in pixels (inclusive)
    pub max_dim: u32,
    /// Lower bound on the normalized aspect ratio (inclusive, >= 1.0)
    pub min_ar: f64,
    /// Upper bound on the normalized aspect ratio (inclusive)
    pub max_ar: f64,
}

impl Default for TableFilter {
    fn default() -> Self {
        Self {
            min_dim: DEFAULT_MIN_DIM,
            max_dim: DEFAULT_MAX_DIM,
            min_ar: DEFAULT_MIN_AR,
            max_ar: DEFAULT_MAX_AR,
        }
    }
}

impl TableFilter {
    pub fn validate(&self) -> Result<()> {
        if self.min_dim == 0 {
            return Err(MapError::InvalidConfig("min_dim must be greater than 0".into()));
        }
        if self.max_dim < self.min_dim {
            return Err(MapError::InvalidConfig(format!(
                "max_dim ({}) must not be smaller than min_dim ({})",
                self.max_dim, self.min_dim
            )));
        }
        if !self.min_ar.is_finite() || !self.max_ar.is_finite() {
            return Err(MapError::InvalidConfig("aspect ratio bounds must be finite".into()));
        }
        if self.min_ar < 1.0 {
            return Err(MapError::InvalidConfig(format!(
                "min_ar ({:.2}) must be at least 1.0",
                self.min_ar
            )));
        }
        if self.max_ar < self.min_ar {
            return Err(MapError::InvalidConfig(format!(
                "max_ar ({:.2}) must not be smaller than min_ar ({:.2})",
                self.max_ar, self.min_ar
            )));
        }
        Ok(())
    }
}

/// Every tunable of a table replacement run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Binarization cutoff
    pub threshold: u8,
    pub filter: TableFilter,
    /// Side length of each foot marker in pixels
    pub foot_size: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            filter: TableFilter::default(),
            foot_size: DEFAULT_FOOT_SIZE,
        }
    }
}

impl TableConfig {
    /// Values the command-line driver runs with when no flags are given
    pub fn driver() -> Self {
        Self::default().with_aspect_ratio(DEFAULT_MIN_AR, DRIVER_MAX_AR)
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_dimensions(mut self, min_dim: u32, max_dim: u32) -> Self {
        self.filter.min_dim = min_dim;
        self.filter.max_dim = max_dim;
        self
    }

    pub fn with_aspect_ratio(mut self, min_ar: f64, max_ar: f64) -> Self {
        self.filter.min_ar = min_ar;
        self.filter.max_ar = max_ar;
        self
    }

    pub fn with_foot_size(mut self, foot_size: u32) -> Self {
        self.foot_size = foot_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.filter.validate()?;
        if self.foot_size == 0 {
            return Err(MapError::InvalidConfig("foot_size must be greater than 0".into()));
        }
        if self.foot_size > self.filter.max_dim {
            return Err(MapError::InvalidConfig(format!(
                "foot_size ({}) must not exceed max_dim ({})",
                self.foot_size, self.filter.max_dim
            )));
        }
        Ok(())
    }
}
