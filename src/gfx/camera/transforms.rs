//! # Transform Builders
//!
//! Stateless 4x4 matrix constructors used for placement, camera and edit
//! transforms. All angles are in degrees.
//!
//! Matrices compose right to left: in `a * b`, `b` is applied to a column
//! vector first.

use cgmath::{Deg, InnerSpace, Matrix4, Vector3};

/// Builds a right-handed view matrix looking from `eye` towards `target`.
///
/// The camera basis is `z = normalize(eye - target)`,
/// `x = normalize(normalize(up) x z)` and `y = z x x`; the result is the basis
/// rotation applied after moving `eye` to the origin.
pub fn look_at(eye: Vector3<f32>, target: Vector3<f32>, up: Vector3<f32>) -> Matrix4<f32> {
    let z = (eye - target).normalize();
    let x = up.normalize().cross(z).normalize();
    let y = z.cross(x);

    // cgmath takes columns; the basis vectors are the rows
    #[rustfmt::skip]
    let rotation = Matrix4::new(
        x.x, y.x, z.x, 0.0,
        x.y, y.y, z.y, 0.0,
        x.z, y.z, z.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    rotation * translate(-eye)
}

/// OpenGL-style perspective projection (clip z in `[-1, 1]`).
pub fn perspective(fovy_degrees: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    cgmath::perspective(Deg(fovy_degrees), aspect, near, far)
}

/// OpenGL-style orthographic projection of the given view volume.
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Matrix4<f32> {
    cgmath::ortho(left, right, bottom, top, near, far)
}

pub fn translate(offset: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from_translation(offset)
}

/// Uniform scale about the origin.
pub fn scale(factor: f32) -> Matrix4<f32> {
    Matrix4::from_scale(factor)
}

pub fn rotate_x(degrees: f32) -> Matrix4<f32> {
    Matrix4::from_angle_x(Deg(degrees))
}

pub fn rotate_y(degrees: f32) -> Matrix4<f32> {
    Matrix4::from_angle_y(Deg(degrees))
}

pub fn rotate_z(degrees: f32) -> Matrix4<f32> {
    Matrix4::from_angle_z(Deg(degrees))
}

/// Applies `op` about `pivot`: moves the pivot to `target`, applies `op`, moves back.
///
/// Scale and rotate edits use this so an instance turns around its own
/// object center instead of the world origin.
pub fn about_pivot(op: Matrix4<f32>, pivot: Vector3<f32>, target: Vector3<f32>) -> Matrix4<f32> {
    translate(target - pivot) * op * translate(pivot - target)
}

#[cfg(test)]
pub(crate) fn assert_matrix_eq(actual: Matrix4<f32>, expected: Matrix4<f32>) {
    let a: &[f32; 16] = actual.as_ref();
    let e: &[f32; 16] = expected.as_ref();
    for (i, (x, y)) in a.iter().zip(e.iter()).enumerate() {
        assert!(
            (x - y).abs() < 1e-4,
            "element {} differs: {} vs {}\nactual: {:?}\nexpected: {:?}",
            i,
            x,
            y,
            actual,
            expected
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Point3, Vector4};

    #[test]
    fn test_look_at_matches_cgmath() {
        let eye = Vector3::new(-1.0, 1.0, 2.0);
        let target = Vector3::new(0.0, 0.0, 0.0);
        let up = Vector3::new(0.0, 2.0, 0.0);

        let expected = Matrix4::look_at_rh(
            Point3::new(eye.x, eye.y, eye.z),
            Point3::new(target.x, target.y, target.z),
            up,
        );
        assert_matrix_eq(look_at(eye, target, up), expected);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vector3::new(3.0, 1.0, 2.0);
        let view = look_at(eye, Vector3::new(0.0, 1.0, 2.0), Vector3::unit_y());

        let at_eye = view * eye.extend(1.0);
        assert!(at_eye.truncate().magnitude() < 1e-5);

        // The target sits straight ahead on -z
        let at_target = view * Vector4::new(0.0, 1.0, 2.0, 1.0);
        assert!((at_target.x).abs() < 1e-5);
        assert!((at_target.y).abs() < 1e-5);
        assert!((at_target.z + 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotations_use_degrees() {
        let quarter = rotate_z(90.0) * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!((quarter.x).abs() < 1e-5);
        assert!((quarter.y - 1.0).abs() < 1e-5);

        let about_x = rotate_x(90.0) * Vector4::new(0.0, 1.0, 0.0, 1.0);
        assert!((about_x.z - 1.0).abs() < 1e-5);

        let about_y = rotate_y(90.0) * Vector4::new(0.0, 0.0, 1.0, 1.0);
        assert!((about_y.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_composition_applies_right_first() {
        // Scale then translate: (1,0,0) -> (2,0,0) -> (2,5,0)
        let m = translate(Vector3::new(0.0, 5.0, 0.0)) * scale(2.0);
        let p = m * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(p, Vector4::new(2.0, 5.0, 0.0, 1.0));
    }

    #[test]
    fn test_about_pivot_keeps_pivot_fixed() {
        let pivot = Vector3::new(0.3, -0.2, 0.1);
        let target = Vector3::new(0.5, 0.5, 0.0);
        let m = about_pivot(scale(1.25), pivot, target);

        // translate(pivot - target) sends `target - pivot` to the origin
        let fixed_point = target - pivot;
        let mapped = m * fixed_point.extend(1.0);
        assert!((mapped.truncate() - fixed_point).magnitude() < 1e-5);

        let other = m * Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert!((other.truncate() - Vector3::new(1.0, 1.0, 1.0)).magnitude() > 1e-3);
    }

    #[test]
    fn test_perspective_projects_axis_to_center() {
        let proj = perspective(45.0, 4.0 / 3.0, 0.1, 10.0);
        let clip = proj * Vector4::new(0.0, 0.0, -2.0, 1.0);
        assert!((clip.x / clip.w).abs() < 1e-6);
        assert!((clip.y / clip.w).abs() < 1e-6);
        let ndc_z = clip.z / clip.w;
        assert!(ndc_z > -1.0 && ndc_z < 1.0);
    }

    #[test]
    fn test_orthographic_bounds() {
        let proj = orthographic(0.0, 2.0, 0.0, 1.5, 0.1, 10.0);
        let corner = proj * Vector4::new(2.0, 1.5, -0.1, 1.0);
        assert!((corner.x - 1.0).abs() < 1e-6);
        assert!((corner.y - 1.0).abs() < 1e-6);
        assert!((corner.z + 1.0).abs() < 1e-6);
    }
}
