use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::analysis::AlignmentReport;
use crate::error::Result;
use crate::landmarks::{DetectionResult, LandmarkSet};

/// Serializes an object to a JSON file.
pub fn object_to_json<T: Serialize, P: AsRef<Path>>(output_path: P, object: &T) -> Result<()> {
    let j = serde_json::to_string_pretty(object)?;
    std::fs::write(output_path, j)?;
    Ok(())
}

/// Deserializes an object from a JSON file.
pub fn object_from_json<T: DeserializeOwned, P: AsRef<Path>>(file_path: P) -> Result<T> {
    let contents = std::fs::read_to_string(file_path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Loads a bare JSON array of 33 `{x, y, z}` points.
pub fn load_landmark_set<P: AsRef<Path>>(file_path: P) -> Result<LandmarkSet> {
    object_from_json(file_path)
}

pub fn load_detection<P: AsRef<Path>>(file_path: P) -> Result<DetectionResult> {
    object_from_json(file_path)
}

/// Reads either a [`DetectionResult`] or a bare landmark array.
///
/// A bare array is taken as world landmarks of a single subject.
pub fn load_any<P: AsRef<Path>>(file_path: P) -> Result<Vec<LandmarkSet>> {
    let value: Value = object_from_json(file_path)?;
    if value.is_array() {
        let set: LandmarkSet = serde_json::from_value(value)?;
        return Ok(vec![set]);
    }
    let detection: DetectionResult = serde_json::from_value(value)?;
    Ok(detection.into_world_landmarks())
}

#[derive(Serialize)]
struct SubjectReport<'a> {
    source: &'a str,
    subject: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    alignment: Option<&'a AlignmentReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct PostureReport<'a> {
    timestamp: String,
    unit_scale: f64,
    subjects: Vec<SubjectReport<'a>>,
}

/// One analyzed subject: source file, index within that file, outcome.
pub type SubjectOutcome = (String, usize, Result<AlignmentReport>);

/// Writes all analysis outcomes as one JSON document.
///
/// `unit_scale` is recorded only; reports are expected to be scaled already.
pub fn write_report<P: AsRef<Path>>(
    output_path: P,
    outcomes: &[SubjectOutcome],
    unit_scale: f64,
) -> Result<()> {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    let timestamp = now
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string());

    let subjects = outcomes
        .iter()
        .map(|(source, subject, outcome)| SubjectReport {
            source,
            subject: *subject,
            alignment: outcome.as_ref().ok(),
            error: outcome.as_ref().err().map(|e| e.to_string()),
        })
        .collect();

    object_to_json(
        output_path,
        &PostureReport {
            timestamp,
            unit_scale,
            subjects,
        },
    )
}
