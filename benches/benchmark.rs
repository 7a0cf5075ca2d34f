use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::DVec3;
use posture_geometry::analysis::PostureAnalyzer;
use posture_geometry::geometry::cos_angle;
use posture_geometry::landmarks::LANDMARK_COUNT;
use posture_geometry::{LandmarkIndex, LandmarkSet};

fn leaning_subject() -> LandmarkSet {
    let mut points = vec![DVec3::ZERO; LANDMARK_COUNT];
    points[LandmarkIndex::LeftShoulder as usize] = DVec3::new(-0.12, 0.48, 0.03);
    points[LandmarkIndex::RightShoulder as usize] = DVec3::new(0.19, 0.53, -0.02);
    points[LandmarkIndex::LeftHip as usize] = DVec3::new(-0.1, 0.0, 0.01);
    points[LandmarkIndex::RightHip as usize] = DVec3::new(0.1, 0.01, -0.01);
    points[LandmarkIndex::LeftAnkle as usize] = DVec3::new(-0.11, -0.88, 0.05);
    points[LandmarkIndex::RightAnkle as usize] = DVec3::new(0.09, -0.9, 0.02);
    LandmarkSet::new(points).unwrap()
}

fn bench_cos_angle(c: &mut Criterion) {
    let u = DVec3::new(0.2, 0.01, -0.02);
    let v = DVec3::new(0.31, 0.05, -0.05);
    c.bench_function("cos_angle", |b| b.iter(|| cos_angle(black_box(u), black_box(v))));
}

fn bench_alignment(c: &mut Criterion) {
    let analyzer = PostureAnalyzer::default();
    let set = leaning_subject();
    c.bench_function("hip_shoulder_alignment", |b| {
        b.iter(|| analyzer.analyze(black_box(&set)))
    });
}

criterion_group!(benches, bench_cos_angle, bench_alignment);
criterion_main!(benches);
