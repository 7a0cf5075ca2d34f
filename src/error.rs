use crate::landmarks::LANDMARK_COUNT;

#[derive(Debug, thiserror::Error)]
pub enum PostureError {
    #[error("landmark set must contain exactly {} points, got {len}", LANDMARK_COUNT)]
    InvalidLandmarkSet { len: usize },

    #[error("detection has {landmarks} image landmark sets but {world_landmarks} world sets")]
    MismatchedSubjects {
        landmarks: usize,
        world_landmarks: usize,
    },

    #[error("degenerate geometry: {segment} is too short")]
    DegenerateGeometry { segment: &'static str },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PostureError>;
