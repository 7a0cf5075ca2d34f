use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Segments at or below this length (input units) count as degenerate.
    pub min_segment_length: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_segment_length: 1e-9,
        }
    }
}
