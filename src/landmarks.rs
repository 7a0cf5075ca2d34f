use serde::{Deserialize, Serialize};

use crate::error::{PostureError, Result};
use crate::types::Point3D;

pub const LANDMARK_COUNT: usize = 33;

/// Anatomical positions emitted by the pose model, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner,
    LeftEye,
    LeftEyeOuter,
    RightEyeInner,
    RightEye,
    RightEyeOuter,
    LeftEar,
    RightEar,
    MouthLeft,
    MouthRight,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftPinky,
    RightPinky,
    LeftIndex,
    RightIndex,
    LeftThumb,
    RightThumb,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

impl LandmarkIndex {
    pub const ALL: [LandmarkIndex; LANDMARK_COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    pub fn from_index(idx: usize) -> Option<LandmarkIndex> {
        Self::ALL.get(idx).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }
}

/// Pairs of landmark indices forming the pose skeleton.
pub const POSE_CONNECTIONS: [[usize; 2]; 35] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 7],
    [0, 4],
    [4, 5],
    [5, 6],
    [6, 8],
    [9, 10],
    [11, 12],
    [11, 13],
    [13, 15],
    [15, 17],
    [15, 19],
    [15, 21],
    [17, 19],
    [12, 14],
    [14, 16],
    [16, 18],
    [16, 20],
    [16, 22],
    [18, 20],
    [11, 23],
    [12, 24],
    [23, 24],
    [23, 25],
    [24, 26],
    [25, 27],
    [26, 28],
    [27, 29],
    [28, 30],
    [29, 31],
    [30, 32],
    [27, 31],
    [28, 32],
];

/// One landmark as emitted by the pose engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Landmark {
        Landmark {
            x,
            y,
            z,
            visibility: None,
        }
    }

    pub fn position(&self) -> Point3D {
        Point3D::new(self.x, self.y, self.z)
    }
}

/// The full set of landmarks for one detected subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkSet {
    points: Vec<Point3D>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point3D>) -> Result<LandmarkSet> {
        if points.len() != LANDMARK_COUNT {
            return Err(PostureError::InvalidLandmarkSet { len: points.len() });
        }
        Ok(LandmarkSet { points })
    }

    pub fn get(&self, idx: LandmarkIndex) -> Point3D {
        self.points[idx as usize]
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = PostureError;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self> {
        LandmarkSet::new(landmarks.iter().map(Landmark::position).collect())
    }
}

impl From<LandmarkSet> for Vec<Landmark> {
    fn from(set: LandmarkSet) -> Self {
        set.points
            .iter()
            .map(|p| Landmark::new(p.x, p.y, p.z))
            .collect()
    }
}

/// A single subject, in image space and in world space.
#[derive(Debug, Clone, Copy)]
pub struct PoseDetection<'a> {
    pub landmarks: &'a LandmarkSet,
    pub world_landmarks: &'a LandmarkSet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDetectionResult {
    #[serde(default)]
    timestamp_ms: Option<f64>,
    landmarks: Vec<LandmarkSet>,
    world_landmarks: Vec<LandmarkSet>,
}

impl TryFrom<RawDetectionResult> for DetectionResult {
    type Error = PostureError;

    fn try_from(raw: RawDetectionResult) -> Result<Self> {
        DetectionResult::new(raw.timestamp_ms, raw.landmarks, raw.world_landmarks)
    }
}

/// Everything the pose engine reported for one image or video frame.
///
/// Same layout as the engine output: one landmark list per subject in
/// `landmarks`, and the matching metric list at the same position in
/// `worldLandmarks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDetectionResult")]
pub struct DetectionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp_ms: Option<f64>,
    landmarks: Vec<LandmarkSet>,
    world_landmarks: Vec<LandmarkSet>,
}

impl DetectionResult {
    pub fn new(
        timestamp_ms: Option<f64>,
        landmarks: Vec<LandmarkSet>,
        world_landmarks: Vec<LandmarkSet>,
    ) -> Result<DetectionResult> {
        if landmarks.len() != world_landmarks.len() {
            return Err(PostureError::MismatchedSubjects {
                landmarks: landmarks.len(),
                world_landmarks: world_landmarks.len(),
            });
        }
        Ok(DetectionResult {
            timestamp_ms,
            landmarks,
            world_landmarks,
        })
    }

    pub fn timestamp_ms(&self) -> Option<f64> {
        self.timestamp_ms
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn landmarks(&self) -> &[LandmarkSet] {
        &self.landmarks
    }

    pub fn world_landmarks(&self) -> &[LandmarkSet] {
        &self.world_landmarks
    }

    pub fn poses(&self) -> impl Iterator<Item = PoseDetection<'_>> {
        self.landmarks
            .iter()
            .zip(&self.world_landmarks)
            .map(|(landmarks, world_landmarks)| PoseDetection {
                landmarks,
                world_landmarks,
            })
    }

    pub fn into_world_landmarks(self) -> Vec<LandmarkSet> {
        self.world_landmarks
    }
}
