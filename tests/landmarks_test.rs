use glam::DVec3;
use posture_geometry::landmarks::{LANDMARK_COUNT, POSE_CONNECTIONS};
use posture_geometry::{DetectionResult, Landmark, LandmarkIndex, LandmarkSet, PostureError};
use serde_json::json;

fn landmark_json(n: usize) -> serde_json::Value {
    let points: Vec<_> = (0..n)
        .map(|i| json!({"x": i as f64 * 0.01, "y": 0.5, "z": -0.1}))
        .collect();
    serde_json::Value::Array(points)
}

#[test]
fn test_index_mapping() {
    assert_eq!(LandmarkIndex::Nose as usize, 0);
    assert_eq!(LandmarkIndex::LeftShoulder as usize, 11);
    assert_eq!(LandmarkIndex::RightShoulder as usize, 12);
    assert_eq!(LandmarkIndex::LeftHip as usize, 23);
    assert_eq!(LandmarkIndex::RightHip as usize, 24);
    assert_eq!(LandmarkIndex::LeftAnkle as usize, 27);
    assert_eq!(LandmarkIndex::RightAnkle as usize, 28);
    assert_eq!(LandmarkIndex::RightFootIndex as usize, LANDMARK_COUNT - 1);

    for (i, idx) in LandmarkIndex::ALL.iter().enumerate() {
        assert_eq!(*idx as usize, i);
        assert_eq!(LandmarkIndex::from_index(i), Some(*idx));
    }
    assert_eq!(LandmarkIndex::from_index(LANDMARK_COUNT), None);
    assert_eq!(LandmarkIndex::LeftHip.name(), "left_hip");
}

#[test]
fn test_connections_in_range() {
    for [a, b] in POSE_CONNECTIONS {
        assert!(a < LANDMARK_COUNT && b < LANDMARK_COUNT);
        assert_ne!(a, b);
    }
}

#[test]
fn test_landmark_set_length() {
    assert!(LandmarkSet::new(vec![DVec3::ZERO; LANDMARK_COUNT]).is_ok());

    let err = LandmarkSet::new(vec![DVec3::ZERO; 32]).unwrap_err();
    assert!(matches!(err, PostureError::InvalidLandmarkSet { len: 32 }));
    assert!(LandmarkSet::new(vec![]).is_err());
    assert!(LandmarkSet::new(vec![DVec3::ZERO; 34]).is_err());
}

#[test]
fn test_landmark_set_from_json() {
    let set: LandmarkSet = serde_json::from_value(landmark_json(LANDMARK_COUNT)).unwrap();
    let p = set.get(LandmarkIndex::RightHip);
    assert!((p - DVec3::new(0.24, 0.5, -0.1)).length() < 1e-12);
    assert_eq!(set.points().len(), LANDMARK_COUNT);

    let short: Result<LandmarkSet, _> = serde_json::from_value(landmark_json(10));
    assert!(short.is_err());
}

#[test]
fn test_landmark_visibility_is_optional() {
    let l: Landmark =
        serde_json::from_value(json!({"x": 0.1, "y": 0.2, "z": 0.3, "visibility": 0.9})).unwrap();
    assert_eq!(l.visibility, Some(0.9));
    assert_eq!(l.position(), DVec3::new(0.1, 0.2, 0.3));

    let l: Landmark = serde_json::from_value(json!({"x": 0.1, "y": 0.2, "z": 0.3})).unwrap();
    assert_eq!(l.visibility, None);
}

#[test]
fn test_detection_result_from_engine_layout() {
    let j = json!({
        "timestampMs": 1234.5,
        "landmarks": [landmark_json(LANDMARK_COUNT), landmark_json(LANDMARK_COUNT)],
        "worldLandmarks": [landmark_json(LANDMARK_COUNT), landmark_json(LANDMARK_COUNT)],
    });
    let d: DetectionResult = serde_json::from_value(j).unwrap();
    assert_eq!(d.timestamp_ms(), Some(1234.5));
    assert_eq!(d.len(), 2);
    assert_eq!(d.poses().count(), 2);
    assert_eq!(d.world_landmarks().len(), 2);

    let empty: DetectionResult =
        serde_json::from_value(json!({"landmarks": [], "worldLandmarks": []})).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.timestamp_ms(), None);
}

#[test]
fn test_detection_result_subject_count_mismatch() {
    let j = json!({
        "landmarks": [landmark_json(LANDMARK_COUNT), landmark_json(LANDMARK_COUNT)],
        "worldLandmarks": [landmark_json(LANDMARK_COUNT)],
    });
    assert!(serde_json::from_value::<DetectionResult>(j).is_err());

    let set: LandmarkSet = serde_json::from_value(landmark_json(LANDMARK_COUNT)).unwrap();
    let err = DetectionResult::new(None, vec![set], vec![]).unwrap_err();
    assert!(matches!(
        err,
        PostureError::MismatchedSubjects {
            landmarks: 1,
            world_landmarks: 0
        }
    ));
}

#[test]
fn test_detection_result_serializes_engine_layout() {
    let set: LandmarkSet = serde_json::from_value(landmark_json(LANDMARK_COUNT)).unwrap();
    let d = DetectionResult::new(None, vec![set.clone()], vec![set]).unwrap();
    let j = serde_json::to_value(&d).unwrap();
    assert_eq!(j["landmarks"].as_array().unwrap().len(), 1);
    assert_eq!(j["worldLandmarks"][0].as_array().unwrap().len(), LANDMARK_COUNT);
    assert!(j.get("timestampMs").is_none());
}
