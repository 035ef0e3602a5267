//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::Component;

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a [`Transform`] with the 9 components of a 3x3 matrix. Arguments
/// are in column-major order, so each source row below is a column of the
/// mathematical matrix.
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    )
}

/// Multiply the given matrix in `transform` with the 3 channels.
pub fn transform(transform: &Transform, [x, y, z]: [Component; 3]) -> [Component; 3] {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    [x, y, z]
}

/// Collapse the NaN of a vanished denominator to zero; finite values pass
/// through untouched.
pub fn or_zero(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}
