//! 4x4 homogeneous transforms combining rotation and translation.

use super::{Matrix3, Vector3};
use std::fmt;

/// A 4x4 homogeneous transform, row-major.
///
/// The top-left 3x3 block holds a rotation matrix and the **last row** holds
/// the translation (row-vector convention, matching the transform layout used
/// by this library's callers; note this is *not* the more common last-column
/// placement). The bottom-right corner is always 1.
///
/// ```text
/// | r00 r01 r02  0 |
/// | r10 r11 r12  0 |
/// | r20 r21 r22  0 |
/// | tx  ty  tz   1 |
/// ```
///
/// # Construction
///
/// ```
/// use pose_core::{HomogeneousTransform, Matrix3, Vector3};
///
/// let t = HomogeneousTransform::compose(&Matrix3::identity(), Vector3::new(1.0, 2.0, 3.0));
/// assert_eq!(t.get(3, 0), 1.0);
/// assert_eq!(t.get(3, 3), 1.0);
/// assert_eq!(t.translation(), Vector3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomogeneousTransform {
    elements: [[f64; 4]; 4],
}

impl HomogeneousTransform {
    /// Creates the identity transform (no rotation, no translation).
    pub fn identity() -> Self {
        Self::compose(&Matrix3::identity(), Vector3::zeros())
    }

    /// Assembles a transform from a rotation matrix and a translation.
    ///
    /// The rotation lands in the top-left 3x3 block, the translation in the
    /// last row, and 1 in the bottom-right corner; every other entry is zero.
    pub fn compose(rotation: &Matrix3, translation: Vector3) -> Self {
        let mut elements = [[0.0; 4]; 4];
        for (i, row) in rotation.elements().iter().enumerate() {
            elements[i][..3].copy_from_slice(row);
        }
        elements[3][0] = translation.x;
        elements[3][1] = translation.y;
        elements[3][2] = translation.z;
        elements[3][3] = 1.0;
        Self { elements }
    }

    /// Returns the top-left 3x3 rotation block.
    pub fn rotation(&self) -> Matrix3 {
        let mut block = [[0.0; 3]; 3];
        for (i, row) in block.iter_mut().enumerate() {
            row.copy_from_slice(&self.elements[i][..3]);
        }
        Matrix3::from_array(block)
    }

    /// Returns the translation stored in the last row.
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.elements[3][0], self.elements[3][1], self.elements[3][2])
    }

    /// Returns the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 4` or `col >= 4`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Returns a reference to the underlying 4x4 array.
    pub fn elements(&self) -> &[[f64; 4]; 4] {
        &self.elements
    }
}

impl std::ops::Index<(usize, usize)> for HomogeneousTransform {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl fmt::Display for HomogeneousTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HomogeneousTransform:")?;
        for row in &self.elements {
            writeln!(
                f,
                "  [{:12.9} {:12.9} {:12.9} {:12.9}]",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_layout() {
        let r = Matrix3::from_array([
            [0.0, -1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let t = Vector3::new(4.0, 5.0, 6.0);
        let h = HomogeneousTransform::compose(&r, t);

        // Rotation block.
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(h.get(i, j), r.get(i, j));
            }
        }
        // Translation in the last row, not the last column.
        assert_eq!(h.get(3, 0), 4.0);
        assert_eq!(h.get(3, 1), 5.0);
        assert_eq!(h.get(3, 2), 6.0);
        assert_eq!(h.get(0, 3), 0.0);
        assert_eq!(h.get(1, 3), 0.0);
        assert_eq!(h.get(2, 3), 0.0);
        // Bottom-right corner.
        assert_eq!(h.get(3, 3), 1.0);
    }

    #[test]
    fn test_accessors_round_trip() {
        let r = Matrix3::from_array([
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        ]);
        let t = Vector3::new(-1.0, 0.5, 2.0);
        let h = HomogeneousTransform::compose(&r, t);

        assert_eq!(h.rotation(), r);
        assert_eq!(h.translation(), t);
    }

    #[test]
    fn test_identity() {
        let h = HomogeneousTransform::identity();
        assert_eq!(h.rotation(), Matrix3::identity());
        assert_eq!(h.translation(), Vector3::zeros());
        assert_eq!(h[(3, 3)], 1.0);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", HomogeneousTransform::identity());
        assert!(s.contains("HomogeneousTransform:"));
    }
}
