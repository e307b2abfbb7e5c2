use crate::config::TableConfig;
use crate::error::Result;
use crate::models::Candidate;
use crate::pipeline::CandidateSink;

/// Prints the geometry of every table-sized contour to stdout
#[derive(Debug, Default)]
pub struct ConsoleReport {
    candidates: usize,
}

impl ConsoleReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contours that passed the dimension filter
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn print_header(&self, config: &TableConfig) {
        let f = &config.filter;
        println!("\n--- Contour Candidates ---");
        println!(
            "Filtering with min_dim={}, max_dim={}, min_AR={:.2}, max_AR={:.2}",
            f.min_dim, f.max_dim, f.min_ar, f.max_ar
        );
    }

    pub fn print_summary(&self, config: &TableConfig, accepted: usize) {
        println!("--------------------------\n");

        if accepted == 0 {
            let f = &config.filter;
            println!("No tables detected matching all criteria.");
            println!(
                "  - Dimensions: {}x{} to {}x{} pixels",
                f.min_dim, f.min_dim, f.max_dim, f.max_dim
            );
            println!("  - Aspect ratio: {:.2} to {:.2}", f.min_ar, f.max_ar);
            println!("Adjust the filter parameters using the candidates above, or check the input map.");
        } else {
            println!("Successfully processed {} tables.", accepted);
        }
    }
}

impl CandidateSink for ConsoleReport {
    fn consume(&mut self, candidate: &Candidate) -> Result<()> {
        if !candidate.classification.passed_dimensions() {
            return Ok(());
        }
        self.candidates += 1;

        let b = &candidate.bbox;
        let verdict = if candidate.classification.is_accepted() { "accepted" } else { "rejected (aspect)" };
        println!(
            "Contour {} candidate: x={}, y={}, w={}, h={}, NormAR={:.2} -> {}",
            candidate.index, b.x, b.y, b.width, b.height, candidate.normalized_aspect, verdict
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "Console Report"
    }
}
