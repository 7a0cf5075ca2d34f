use glam::DVec3;

/// A position, in meters for world landmarks or normalized units for image landmarks.
pub type Point3D = DVec3;

/// A displacement between two [`Point3D`]s.
pub type Vector3D = DVec3;
