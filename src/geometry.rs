use log::trace;

use crate::error::{PostureError, Result};
use crate::types::{Point3D, Vector3D};

/// Componentwise average of two points.
pub fn midpoint(a: Point3D, b: Point3D) -> Point3D {
    (a + b) * 0.5
}

/// Vector pointing from `a` to `b`.
pub fn segment(a: Point3D, b: Point3D) -> Vector3D {
    b - a
}

/// Euclidean length, computed on the vector rescaled by its largest component
/// so that neither squaring step overflows or underflows.
pub fn norm(v: Vector3D) -> f64 {
    let m = v.abs().max_element();
    if m == 0.0 || !m.is_finite() {
        return v.length();
    }
    m * (v / m).length()
}

/// `v` divided by its largest absolute component; fails on zero or non-finite input.
fn rescaled(v: Vector3D, what: &'static str) -> Result<Vector3D> {
    let m = v.abs().max_element();
    if !v.is_finite() || m == 0.0 {
        trace!("{} has no direction: {:?}", what, v);
        return Err(PostureError::DegenerateGeometry { segment: what });
    }
    Ok(v / m)
}

/// Fails when `v` is not longer than `min_length`; `what` names the segment in the error.
pub fn ensure_non_degenerate(v: Vector3D, min_length: f64, what: &'static str) -> Result<f64> {
    let n = norm(v);
    if !n.is_finite() || n == 0.0 || n <= min_length {
        trace!("{} is degenerate, norm = {}", what, n);
        return Err(PostureError::DegenerateGeometry { segment: what });
    }
    Ok(n)
}

/// Unit vector along `v`.
pub fn unit(v: Vector3D, what: &'static str) -> Result<Vector3D> {
    let s = rescaled(v, what)?;
    Ok(s / s.length())
}

/// Cosine of the angle between `u` and `v`, clamped to [-1, 1].
pub fn cos_angle(u: Vector3D, v: Vector3D) -> Result<f64> {
    cos_angle_named(u, "first vector", v, "second vector")
}

/// [`cos_angle`] with the segment names used in the degenerate-geometry error.
pub fn cos_angle_named(
    u: Vector3D,
    u_name: &'static str,
    v: Vector3D,
    v_name: &'static str,
) -> Result<f64> {
    let su = rescaled(u, u_name)?;
    let sv = rescaled(v, v_name)?;
    Ok((su.dot(sv) / (su.length() * sv.length())).clamp(-1.0, 1.0))
}

pub fn angle_degrees(cos_theta: f64) -> f64 {
    cos_theta.acos().to_degrees()
}

/// Angle between two vectors in degrees, in [0, 180].
pub fn angle_between(u: Vector3D, v: Vector3D) -> Result<f64> {
    Ok(angle_degrees(cos_angle(u, v)?))
}
