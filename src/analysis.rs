use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::geometry::{angle_degrees, cos_angle_named, ensure_non_degenerate, midpoint, segment};
use crate::landmarks::{DetectionResult, LandmarkIndex, LandmarkSet};
use crate::types::{Point3D, Vector3D};

/// Hip/shoulder alignment diagnostics for one subject.
///
/// Lengths and vectors are in the unit of the input landmarks, angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentReport {
    pub hip_center: Point3D,
    pub shoulder_center: Point3D,
    pub ankle_center: Point3D,
    pub hip_line: Vector3D,
    pub shoulder_line: Vector3D,
    pub hip_length: f64,
    pub shoulder_length: f64,
    pub spine_length: f64,
    /// 0 when the shoulder line runs parallel to the hip line.
    pub parallelism_angle_deg: f64,
    /// 90 minus the angle between the hip line and the hip-to-shoulder line.
    pub spine_verticality_deviation_deg: f64,
    /// Shoulders rotated about their center onto the hip line direction.
    pub corrected_left_shoulder: Point3D,
    pub corrected_right_shoulder: Point3D,
    pub parallelism_correction_left: Vector3D,
    pub parallelism_correction_right: Vector3D,
    /// Moves the shoulder center onto the ankle-to-hip axis.
    pub ankle_alignment_correction: Vector3D,
    pub total_correction_left: Vector3D,
    pub total_correction_right: Vector3D,
}

impl AlignmentReport {
    /// Copy with every length and vector multiplied by `factor`; angles are kept.
    pub fn scaled(&self, factor: f64) -> AlignmentReport {
        AlignmentReport {
            hip_center: self.hip_center * factor,
            shoulder_center: self.shoulder_center * factor,
            ankle_center: self.ankle_center * factor,
            hip_line: self.hip_line * factor,
            shoulder_line: self.shoulder_line * factor,
            hip_length: self.hip_length * factor,
            shoulder_length: self.shoulder_length * factor,
            spine_length: self.spine_length * factor,
            parallelism_angle_deg: self.parallelism_angle_deg,
            spine_verticality_deviation_deg: self.spine_verticality_deviation_deg,
            corrected_left_shoulder: self.corrected_left_shoulder * factor,
            corrected_right_shoulder: self.corrected_right_shoulder * factor,
            parallelism_correction_left: self.parallelism_correction_left * factor,
            parallelism_correction_right: self.parallelism_correction_right * factor,
            ankle_alignment_correction: self.ankle_alignment_correction * factor,
            total_correction_left: self.total_correction_left * factor,
            total_correction_right: self.total_correction_right * factor,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostureAnalyzer {
    config: AnalyzerConfig,
}

impl PostureAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, landmarks: &LandmarkSet) -> Result<AlignmentReport> {
        let min_len = self.config.min_segment_length;

        let left_shoulder = landmarks.get(LandmarkIndex::LeftShoulder);
        let right_shoulder = landmarks.get(LandmarkIndex::RightShoulder);
        let left_hip = landmarks.get(LandmarkIndex::LeftHip);
        let right_hip = landmarks.get(LandmarkIndex::RightHip);
        let left_ankle = landmarks.get(LandmarkIndex::LeftAnkle);
        let right_ankle = landmarks.get(LandmarkIndex::RightAnkle);

        let hip_center = midpoint(left_hip, right_hip);
        let shoulder_center = midpoint(left_shoulder, right_shoulder);

        let hip_line = segment(left_hip, right_hip);
        let shoulder_line = segment(left_shoulder, right_shoulder);
        let hip_length = ensure_non_degenerate(hip_line, min_len, "hip line")?;
        let shoulder_length = ensure_non_degenerate(shoulder_line, min_len, "shoulder line")?;

        let parallelism_angle_deg = angle_degrees(cos_angle_named(
            hip_line,
            "hip line",
            shoulder_line,
            "shoulder line",
        )?);

        // half the shoulder width, pointing along the hip line
        let half_span = hip_line * (0.5 * shoulder_length / hip_length);
        let corrected_right_shoulder = shoulder_center + half_span;
        let corrected_left_shoulder = shoulder_center - half_span;
        let parallelism_correction_left = corrected_left_shoulder - left_shoulder;
        let parallelism_correction_right = corrected_right_shoulder - right_shoulder;

        let hip_shoulder_line = segment(hip_center, shoulder_center);
        let spine_length =
            ensure_non_degenerate(hip_shoulder_line, min_len, "hip-to-shoulder line")?;
        let spine_verticality_deviation_deg =
            90.0 - angle_degrees(cos_angle_named(
                hip_line,
                "hip line",
                hip_shoulder_line,
                "hip-to-shoulder line",
            )?);

        let ankle_center = midpoint(left_ankle, right_ankle);
        let ankle_hip_line = segment(ankle_center, hip_center);
        let ankle_hip_length =
            ensure_non_degenerate(ankle_hip_line, min_len, "ankle-to-hip line")?;
        // spine length is kept, only its direction follows the ankle-to-hip axis
        let up = ankle_hip_line / ankle_hip_length;
        let target_shoulder_center = hip_center + up * spine_length;
        let ankle_alignment_correction = target_shoulder_center - shoulder_center;

        debug!(
            "parallelism {:.3} deg, verticality deviation {:.3} deg",
            parallelism_angle_deg, spine_verticality_deviation_deg
        );

        Ok(AlignmentReport {
            hip_center,
            shoulder_center,
            ankle_center,
            hip_line,
            shoulder_line,
            hip_length,
            shoulder_length,
            spine_length,
            parallelism_angle_deg,
            spine_verticality_deviation_deg,
            corrected_left_shoulder,
            corrected_right_shoulder,
            parallelism_correction_left,
            parallelism_correction_right,
            ankle_alignment_correction,
            total_correction_left: parallelism_correction_left + ankle_alignment_correction,
            total_correction_right: parallelism_correction_right + ankle_alignment_correction,
        })
    }

    /// Analyzes the world landmarks of every subject in the detection.
    pub fn analyze_detection(&self, detection: &DetectionResult) -> Vec<Result<AlignmentReport>> {
        detection
            .poses()
            .map(|pose| self.analyze(pose.world_landmarks))
            .collect()
    }

    pub fn analyze_batch(
        &self,
        detections: &[DetectionResult],
    ) -> Vec<Vec<Result<AlignmentReport>>> {
        detections
            .par_iter()
            .map(|detection| self.analyze_detection(detection))
            .collect()
    }
}

/// Runs [`PostureAnalyzer::analyze`] with the default configuration.
pub fn compute_hip_shoulder_alignment(landmarks: &LandmarkSet) -> Result<AlignmentReport> {
    PostureAnalyzer::default().analyze(landmarks)
}
