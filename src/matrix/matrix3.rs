//! 3x3 matrices for rotations and cross-product maps.
//!
//! [`Matrix3`] serves two roles in this library:
//!
//! - **Rotation matrices**: orthogonal matrices with determinant +1, produced
//!   by [`Quaternion::to_rotation_matrix`](crate::Quaternion::to_rotation_matrix)
//!   and [`rotation_onto`](crate::align::rotation_onto). A determinant of -1
//!   indicates a reflection, which is a defect, never a valid rotation output.
//!   Use [`is_rotation_matrix`](Matrix3::is_rotation_matrix) to check.
//!
//! - **Skew-symmetric matrices**: the linear-map encoding of the cross
//!   product, built with [`skew_symmetric`](Matrix3::skew_symmetric) and
//!   inverted with [`deskew`](Matrix3::deskew). These feed the Rodrigues
//!   construction in the alignment solver.
//!
//! # Composing rotations
//!
//! Rotation matrices compose by multiplication. To apply rotation A, then
//! rotation B, compute `B * A` (the rightmost matrix acts first on the
//! vector).
//!
//! # Storage Layout
//!
//! Elements are stored in row-major order as `[[f64; 3]; 3]`. The element at
//! row `i`, column `j` is accessed as `matrix[(i, j)]` or `matrix.get(i, j)`.
//! When the matrix multiplies a column vector, the result is the standard
//! matrix-vector product.
//!
//! # Inverting rotations
//!
//! For a proper rotation matrix, the inverse equals the transpose:
//!
//! ```
//! use pose_core::{Matrix3, Vector3};
//!
//! let r = pose_core::align::rotation_onto(Vector3::x_axis(), Vector3::y_axis()).unwrap();
//! let product = r * r.transpose();
//! assert!(product.max_difference(&Matrix3::identity()) < 1e-14);
//! ```

use super::Vector3;
use std::fmt;

/// A 3x3 matrix, row-major.
///
/// Construction does not validate any structural property; rotation-ness can
/// be checked after the fact with
/// [`is_rotation_matrix`](Self::is_rotation_matrix).
///
/// ```
/// use pose_core::Matrix3;
///
/// let m = Matrix3::from_array([
///     [0.0, -1.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 0.0, 1.0],
/// ]);
/// assert!(m.is_rotation_matrix(1e-15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3 {
    elements: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Creates the 3x3 identity matrix.
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from a 3x3 array of elements.
    ///
    /// The array is interpreted as row-major: `elements[i][j]` is row `i`,
    /// column `j`. No validation is performed.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Builds the skew-symmetric cross-product matrix of a vector.
    ///
    /// The result `K` satisfies `K * x = v × x` for every `x`:
    ///
    /// ```text
    /// K(v) = |  0   -v.z   v.y |
    ///        |  v.z   0   -v.x |
    ///        | -v.y  v.x    0  |
    /// ```
    ///
    /// ```
    /// use pose_core::{Matrix3, Vector3};
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// let k = Matrix3::skew_symmetric(v);
    /// let x = Vector3::new(-4.0, 0.5, 2.0);
    /// let diff = k * x - v.cross(&x);
    /// assert!(diff.magnitude() < 1e-15);
    /// ```
    pub fn skew_symmetric(v: Vector3) -> Self {
        Self::from_array([
            [0.0, -v.z, v.y],
            [v.z, 0.0, -v.x],
            [-v.y, v.x, 0.0],
        ])
    }

    /// Extracts the vector encoded by a skew-symmetric matrix.
    ///
    /// Inverse of [`skew_symmetric`](Self::skew_symmetric): reads
    /// `(m[2][1], m[0][2], m[1][0])`. No antisymmetry validation is performed;
    /// calling this on a matrix that is not skew-symmetric produces a
    /// meaningless result.
    pub fn deskew(&self) -> Vector3 {
        Vector3::new(
            self.elements[2][1],
            self.elements[0][2],
            self.elements[1][0],
        )
    }

    /// Returns the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`. You can also
    /// use indexing syntax: `matrix[(row, col)]`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Sets the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    /// Returns a reference to the underlying 3x3 array.
    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Multiplies this matrix by another, returning the product.
    ///
    /// Matrix multiplication is not commutative: `A * B` is generally
    /// different from `B * A`. For rotations, the result applies `other`
    /// first, then `self`. You can also use the `*` operator.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Applies this matrix to a 3D vector.
    ///
    /// Computes the standard matrix-vector product `M * v`. Also available
    /// via the `*` operator: `matrix * vector`.
    pub fn apply_to_vector(&self, vector: Vector3) -> Vector3 {
        Vector3::new(
            self.elements[0][0] * vector.x
                + self.elements[0][1] * vector.y
                + self.elements[0][2] * vector.z,
            self.elements[1][0] * vector.x
                + self.elements[1][1] * vector.y
                + self.elements[1][2] * vector.z,
            self.elements[2][0] * vector.x
                + self.elements[2][1] * vector.y
                + self.elements[2][2] * vector.z,
        )
    }

    /// Computes the determinant of this matrix.
    ///
    /// For a proper rotation matrix, the determinant is always +1. A
    /// determinant of -1 indicates a reflection (improper rotation).
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose of this matrix.
    ///
    /// For a rotation matrix, the transpose equals the inverse.
    pub fn transpose(&self) -> Self {
        Self::from_array([
            [
                self.elements[0][0],
                self.elements[1][0],
                self.elements[2][0],
            ],
            [
                self.elements[0][1],
                self.elements[1][1],
                self.elements[2][1],
            ],
            [
                self.elements[0][2],
                self.elements[1][2],
                self.elements[2][2],
            ],
        ])
    }

    /// Checks whether this matrix is a valid rotation matrix within a
    /// tolerance.
    ///
    /// A proper rotation matrix must satisfy two conditions:
    /// 1. Determinant equals +1 (not -1, which would be a reflection)
    /// 2. The matrix is orthogonal: `M * M^T = I`
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let det = self.determinant();
        if (det - 1.0).abs() > tolerance {
            return false;
        }

        let rt = self.transpose();
        let product = self.multiply(&rt);
        let identity = Self::identity();

        for i in 0..3 {
            for j in 0..3 {
                if (product.elements[i][j] - identity.elements[i][j]).abs() > tolerance {
                    return false;
                }
            }
        }

        true
    }

    /// Returns the maximum absolute difference between corresponding elements.
    ///
    /// Useful for comparing matrices in tests without element-by-element
    /// assertions.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl std::ops::Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&Matrix3> for &Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: &Matrix3) -> Matrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Add for Matrix3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.elements[i][j] + rhs.elements[i][j];
            }
        }
        Self::from_array(result)
    }
}

/// Matrix * scalar (element-wise)
impl std::ops::Mul<f64> for Matrix3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        let mut result = self.elements;
        for row in result.iter_mut() {
            for cell in row.iter_mut() {
                *cell *= scalar;
            }
        }
        Self::from_array(result)
    }
}

impl std::ops::Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply_to_vector(vec)
    }
}

impl std::ops::Mul<Vector3> for &Matrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply_to_vector(vec)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_and_get() {
        let m = Matrix3::identity();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 1.0);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
    }

    #[test]
    fn test_set() {
        let mut m = Matrix3::identity();
        m.set(0, 1, 0.5);
        assert_eq!(m.get(0, 1), 0.5);
    }

    #[test]
    fn test_skew_symmetric_concrete() {
        // skew((1,2,3)) = [[0,-3,2],[3,0,-1],[-2,1,0]]
        let k = Matrix3::skew_symmetric(Vector3::new(1.0, 2.0, 3.0));
        let expected = Matrix3::from_array([
            [0.0, -3.0, 2.0],
            [3.0, 0.0, -1.0],
            [-2.0, 1.0, 0.0],
        ]);
        assert_eq!(k, expected);
    }

    #[test]
    fn test_skew_symmetric_encodes_cross_product() {
        let v = Vector3::new(0.3, -1.2, 4.5);
        let k = Matrix3::skew_symmetric(v);
        for x in [
            Vector3::x_axis(),
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-0.5, 0.0, 9.0),
        ] {
            let diff = k * x - v.cross(&x);
            assert!(diff.magnitude() < 1e-14);
        }
    }

    #[test]
    fn test_skew_symmetric_is_antisymmetric() {
        let k = Matrix3::skew_symmetric(Vector3::new(1.0, 2.0, 3.0));
        for i in 0..3 {
            assert_eq!(k.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(k.get(i, j), -k.get(j, i));
            }
        }
    }

    #[test]
    fn test_deskew_inverts_skew() {
        for v in [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::zeros(),
            Vector3::new(-0.25, 7.5, -3.125),
        ] {
            assert_eq!(Matrix3::skew_symmetric(v).deskew(), v);
        }
    }

    #[test]
    fn test_determinant_identity() {
        assert_eq!(Matrix3::identity().determinant(), 1.0);
    }

    #[test]
    fn test_determinant_reflection() {
        let mut m = Matrix3::identity();
        m[(2, 2)] = -1.0;
        assert_eq!(m.determinant(), -1.0);
    }

    #[test]
    fn test_is_rotation_matrix_valid() {
        // 90 degrees about Z.
        let m = Matrix3::from_array([
            [0.0, -1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        assert!(m.is_rotation_matrix(1e-15));
    }

    #[test]
    fn test_is_rotation_matrix_bad_determinant() {
        let m = Matrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!m.is_rotation_matrix(1e-15));
    }

    #[test]
    fn test_is_rotation_matrix_not_orthogonal() {
        let m = Matrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!m.is_rotation_matrix(1e-15));
    }

    #[test]
    fn test_multiply_and_operators() {
        let a = Matrix3::from_array([
            [0.0, -1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let b = a.transpose();

        let r1 = a * b;
        let r2 = &a * &b;
        assert_eq!(r1, r2);
        assert!(r1.max_difference(&Matrix3::identity()) < 1e-15);
    }

    #[test]
    fn test_add_and_scalar_mul() {
        let i = Matrix3::identity();
        let sum = i + i;
        assert_eq!(sum, i * 2.0);
        assert_eq!(sum.get(0, 0), 2.0);
        assert_eq!(sum.get(0, 1), 0.0);
    }

    #[test]
    fn test_mul_matrix_vector() {
        let m = Matrix3::identity();
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(m * v, v);
        assert_eq!(&m * v, v);
    }

    #[test]
    fn test_index_operators() {
        let mut m = Matrix3::identity();
        assert_eq!(m[(0, 0)], 1.0);
        m[(0, 1)] = 0.5;
        assert_eq!(m[(0, 1)], 0.5);
    }

    #[test]
    fn test_max_difference() {
        let a = Matrix3::identity();
        let b = Matrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!((a.max_difference(&b) - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", Matrix3::identity());
        assert!(s.contains("Matrix3:"));
        assert!(s.contains("["));
    }

    #[test]
    fn test_elements() {
        let m = Matrix3::identity();
        let e = m.elements();
        assert_eq!(e[0][0], 1.0);
        assert_eq!(e[1][1], 1.0);
    }
}
