pub mod analysis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod landmarks;
pub mod session;
pub mod types;

pub use analysis::{AlignmentReport, PostureAnalyzer, compute_hip_shoulder_alignment};
pub use config::AnalyzerConfig;
pub use error::{PostureError, Result};
pub use landmarks::{DetectionResult, Landmark, LandmarkIndex, LandmarkSet, PoseDetection};
pub use types::{Point3D, Vector3D};
