use image::{GrayImage, RgbImage};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};
use crate::config::TableConfig;
use crate::detection::editor::MapEditor;
use crate::detection::overlay::{self, DebugOverlay};
use crate::detection::{contours, filter, preprocessing};
use crate::error::{MapError, Result};
use crate::io;
use crate::models::Candidate;

/// Consumer of classified contours.
///
/// Every sink sees the same candidates in the same order; sinks never see
/// each other's output.
pub trait CandidateSink {
    fn consume(&mut self, candidate: &Candidate) -> Result<()>;

    /// Human-readable name for this sink (used in log output)
    fn name(&self) -> &str;
}

/// Directory receiving one image per pipeline stage
#[derive(Clone, Debug)]
pub struct DebugConfig {
    pub output_dir: PathBuf,
}

impl DebugConfig {
    fn save_gray(&self, name: &str, img: &GrayImage) -> Result<()> {
        let path = self.output_dir.join(name);
        img.save(&path)
            .map_err(|source| MapError::Write { path: path.clone(), source })?;
        debug!(path = %path.display(), "saved stage image");
        Ok(())
    }

    fn save_rgb(&self, name: &str, img: &RgbImage) -> Result<()> {
        io::save_debug(img, &self.output_dir.join(name))?;
        debug!(file = name, "saved stage image");
        Ok(())
    }
}

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Input map with accepted tables replaced by feet
    pub map: GrayImage,
    /// Input map in RGB with color-coded bounding boxes
    pub debug: RgbImage,
    /// Every contour's classification, in detector order
    pub candidates: Vec<Candidate>,
    /// Accepted boxes that overlap, as `(earlier, later)` contour indices
    pub overlaps: Vec<(usize, usize)>,
}

impl PipelineOutput {
    pub fn accepted(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(|c| c.classification.is_accepted())
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted().count()
    }

    /// Contours that passed the dimension filter, accepted or not
    pub fn candidate_count(&self) -> usize {
        self.candidates
            .iter()
            .filter(|c| c.classification.passed_dimensions())
            .count()
    }
}

/// Table replacement pipeline: binarize, trace, classify, edit
pub struct Pipeline {
    config: TableConfig,
    debug: Option<DebugConfig>,
}

impl Pipeline {
    /// Build a pipeline, rejecting an inconsistent configuration
    pub fn new(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, debug: None })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Enable stage dumps into `output_dir`
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(MapError::DebugDirNotEmpty(output_dir));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    pub fn run(&self, input: &GrayImage) -> Result<PipelineOutput> {
        self.run_with_sinks(input, &mut [])
    }

    /// Run on an in-memory map, feeding every candidate to `extra` sinks too
    pub fn run_with_sinks(
        &self,
        input: &GrayImage,
        extra: &mut [&mut dyn CandidateSink],
    ) -> Result<PipelineOutput> {
        let started = Instant::now();
        if let Some(dbg) = &self.debug {
            dbg.save_gray("00_input.png", input)?;
        }

        let mask = preprocessing::binarize(input, self.config.threshold);
        debug!(threshold = self.config.threshold, "binarized {}x{} map", mask.width(), mask.height());
        if let Some(dbg) = &self.debug {
            dbg.save_gray("01_mask.png", &mask)?;
        }

        let all_contours = contours::find_contours(&mask);
        debug!(count = all_contours.len(), "traced contours");
        if let Some(dbg) = &self.debug {
            let mut canvas = overlay::to_rgb(input);
            for contour in &all_contours {
                overlay::draw_contour(&mut canvas, contour, overlay::CONTOUR_COLOR);
            }
            dbg.save_rgb("02_contours.png", &canvas)?;
        }

        let candidates = filter::classify_all(&all_contours, &self.config.filter);

        let overlaps = filter::find_overlaps(&candidates);
        for (earlier, later) in &overlaps {
            warn!(earlier, later, "accepted tables overlap; the later edit wins");
        }

        let mut editor = MapEditor::new(input.clone(), self.config.foot_size);
        let mut debug_overlay = DebugOverlay::new(input);
        for candidate in &candidates {
            editor.consume(candidate)?;
            debug_overlay.consume(candidate)?;
            for sink in extra.iter_mut() {
                sink.consume(candidate)?;
            }
        }
        debug!(
            sink = editor.name(),
            edited = editor.edited(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "pipeline finished"
        );

        if let Some(dbg) = &self.debug {
            dbg.save_rgb("03_classified.png", debug_overlay.canvas())?;
        }

        Ok(PipelineOutput {
            map: editor.into_map(),
            debug: debug_overlay.into_image(),
            candidates,
            overlaps,
        })
    }

    /// Load `input`, run, then write the edited map and the debug image.
    /// Nothing is written unless the input loads.
    pub fn run_files(
        &self,
        input: &Path,
        output: &Path,
        debug_image: &Path,
        extra: &mut [&mut dyn CandidateSink],
    ) -> Result<PipelineOutput> {
        let map = io::load_map(input)?;
        debug!(path = %input.display(), "loaded map");

        let result = self.run_with_sinks(&map, extra)?;

        io::save_map(&result.map, output)?;
        io::save_debug(&result.debug, debug_image)?;
        Ok(result)
    }
}
