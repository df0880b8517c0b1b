//! 3D Cartesian vectors for pose and rotation calculations.
//!
//! Vectors are the workhorses of this library. Thruster commands, plane
//! projections, rotation axes, and translations all pass through [`Vector3`].
//! Two representations share this type:
//!
//! - plain 3D points/directions, and
//! - **rotation vectors** (axis-angle): direction = rotation axis, magnitude =
//!   rotation angle in radians, with the zero vector standing for the identity
//!   rotation.
//!
//! # Normalization is fallible
//!
//! Normalizing the zero vector has no defined direction. Rather than silently
//! returning NaN components, [`normalize`](Vector3::normalize) reports a
//! [`DivisionByZero`](crate::MathErrorKind::DivisionByZero) error that the
//! caller must handle:
//!
//! ```
//! use pose_core::Vector3;
//!
//! let v = Vector3::new(3.0, 4.0, 0.0);
//! let unit = v.normalize().unwrap();
//! assert!((unit.magnitude() - 1.0).abs() < 1e-15);
//!
//! assert!(Vector3::zeros().normalize().is_err());
//! ```
//!
//! # Norm clipping
//!
//! [`clip_norm`](Vector3::clip_norm) is `clamp` for vector norms: it rescales
//! a vector whose length falls outside `[lower, upper]` onto the nearest
//! bound, preserving direction. Useful for saturating velocity or force
//! commands without changing their heading.

use crate::{GeomError, GeomResult, MathErrorKind};
use std::fmt;

/// A 3D Cartesian vector.
///
/// Used throughout the library for positions, directions, translations,
/// rotation vectors (axis-angle), and Euler vectors (roll, pitch, yaw).
///
/// # Fields
///
/// Components are public for direct access when performance matters.
///
/// # Construction
///
/// ```
/// use pose_core::Vector3;
///
/// // Direct construction
/// let v = Vector3::new(1.0, 2.0, 3.0);
///
/// // Unit vectors along axes
/// let x = Vector3::x_axis();
///
/// // From an array
/// let v = Vector3::from_array([1.0, 2.0, 3.0]);
///
/// // Fallibly from a slice (errors unless exactly 3 components)
/// let v = Vector3::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
/// assert!(Vector3::try_from(&[1.0, 2.0][..]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    ///
    /// As a rotation vector, this represents the identity rotation.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Returns the squared magnitude.
    ///
    /// Faster than [`magnitude`](Self::magnitude) when you only need to
    /// compare lengths.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// Errors with [`MathErrorKind::DivisionByZero`] for the zero vector,
    /// which has no direction to preserve.
    ///
    /// ```
    /// use pose_core::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize().unwrap();
    /// assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
    /// ```
    pub fn normalize(&self) -> GeomResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(GeomError::math_error(
                "Vector3::normalize",
                MathErrorKind::DivisionByZero,
                "cannot normalize the zero vector",
            ));
        }
        Ok(Self::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Clamps the norm of the vector to `[lower, upper]`, preserving direction.
    ///
    /// Like `f64::clamp`, but for vector norms:
    ///
    /// - strictly inside the band (`lower < ‖v‖ < upper`): returned unchanged,
    /// - too short: rescaled to norm exactly `lower`,
    /// - too long: rescaled to norm exactly `upper`.
    ///
    /// Both comparisons are strict, so a norm sitting exactly on a bound
    /// takes the rescale path: on the upper bound that is numerically a
    /// no-op, but on the lower bound the vector gets rescaled to `upper`.
    /// Errors with
    /// [`MathErrorKind::InvalidInput`] if `lower > upper` and with
    /// [`MathErrorKind::DivisionByZero`] for the zero vector, whose direction
    /// cannot be preserved while rescaling.
    ///
    /// ```
    /// use pose_core::Vector3;
    ///
    /// let v = Vector3::new(3.0, 4.0, 0.0); // norm 5
    /// let clipped = v.clip_norm(1.0, 2.0).unwrap();
    /// assert!((clipped.magnitude() - 2.0).abs() < 1e-15);
    /// assert_eq!(clipped, Vector3::new(1.2, 1.6, 0.0));
    /// ```
    pub fn clip_norm(&self, lower: f64, upper: f64) -> GeomResult<Self> {
        if lower > upper {
            return Err(GeomError::math_error(
                "Vector3::clip_norm",
                MathErrorKind::InvalidInput,
                &format!("lower bound {} exceeds upper bound {}", lower, upper),
            ));
        }

        let norm = self.magnitude();
        if lower < norm && norm < upper {
            return Ok(*self);
        }
        if norm == 0.0 {
            return Err(GeomError::math_error(
                "Vector3::clip_norm",
                MathErrorKind::DivisionByZero,
                "cannot rescale the zero vector",
            ));
        }

        let target = if norm < lower { lower } else { upper };
        Ok(*self * (target / norm))
    }

    /// Projects the vector onto the plane through the origin with the given
    /// unit normal.
    ///
    /// Computes `p − (p·n)n`. The caller must supply a unit-length `normal`;
    /// no normalization or validation is performed here.
    ///
    /// ```
    /// use pose_core::Vector3;
    ///
    /// let p = Vector3::new(1.0, 2.0, 3.0);
    /// let projected = p.project_onto_plane(&Vector3::z_axis());
    /// assert_eq!(projected, Vector3::new(1.0, 2.0, 0.0));
    /// ```
    pub fn project_onto_plane(&self, normal: &Self) -> Self {
        let dist = self.dot(normal);
        *self - *normal * dist
    }

    /// Computes the dot product (inner product) with another vector.
    ///
    /// For unit vectors, this equals the cosine of the angle between them.
    ///
    /// ```
    /// use pose_core::Vector3;
    ///
    /// let c = Vector3::new(1.0, 2.0, 3.0);
    /// let d = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(c.dot(&d), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    ///
    /// The result is perpendicular to both inputs (right-hand rule), with
    /// magnitude `|a||b|sin(θ)`.
    ///
    /// ```
    /// use pose_core::Vector3;
    ///
    /// let z = Vector3::x_axis().cross(&Vector3::y_axis());
    /// assert_eq!(z, Vector3::z_axis());
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = GeomError;

    /// Builds a vector from a slice with exactly 3 components.
    ///
    /// Never truncates or pads: any other length is a
    /// [`DimensionMismatch`](GeomError::DimensionMismatch).
    fn try_from(slice: &[f64]) -> GeomResult<Self> {
        match slice {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(GeomError::dimension_mismatch(
                "Vector3::try_from",
                3,
                slice.len(),
            )),
        }
    }
}

/// Vector + Vector
impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

/// Vector / scalar
impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// -Vector
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

/// v[i] = value mutable indexing (panics if i > 2)
impl std::ops::IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
