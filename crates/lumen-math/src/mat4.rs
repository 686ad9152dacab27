// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, MulAssign};

use bytemuck::{Pod, Zeroable};
use tracing::debug;

use crate::scalar::deg_to_rad;
use crate::Vec3;

/// Column‑major 4×4 homogeneous transform.
///
/// - Stored as four columns of four floats; `col(c)[r]` is row `r`, column `c`.
///   The 16 floats are contiguous so [`Mat4::as_array`] can be uploaded to the
///   GPU as-is (no transpose flag).
/// - Column vectors: `a * b` applied to `v` is `a * (b * v)`.
/// - Affine transforms keep the last row at `(0, 0, 0, 1)`; projections
///   relax this.
/// - Every constructor returns a fresh value; nothing mutates in place.
///
/// # Examples
/// ```
/// use lumen_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and transforms accumulate rounding.
/// - Rotation and look-at normalize through the approximate reciprocal
///   square root, so their basis vectors are unit length to about `1e-5`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 16]", into = "[f32; 16]")
)]
pub struct Mat4 {
    cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// The multiplicative identity.
    pub const IDENTITY: Self = Self::from_cols([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from four columns.
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from column-major array data.
    ///
    /// Callers must supply 16 values already laid out column-major.
    pub fn new(data: [f32; 16]) -> Self {
        Self::from_cols(bytemuck::cast(data))
    }

    /// Returns column `c` (0-based).
    pub fn col(&self, c: usize) -> [f32; 4] {
        self.cols[c]
    }

    /// Returns the element at `row`, `col` (0-based).
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.cols[col][row]
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_cols_array(self) -> [f32; 16] {
        bytemuck::cast(self.cols)
    }

    /// Borrows the 16 column‑major floats without copying.
    ///
    /// This is the layout a graphics backend expects for a non-transposed
    /// 4×4 uniform upload.
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.cols)
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies rows 0..3 of the last column.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::from_cols([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [tx, ty, tz, 1.0],
        ])
    }

    /// Builds a translation matrix from a vector offset.
    pub const fn from_translation(offset: Vec3) -> Self {
        Self::translation(offset.x(), offset.y(), offset.z())
    }

    /// Returns a copy with the translation zeroed, keeping rotation and scale.
    ///
    /// Useful for transforming directions, e.g. a skybox view matrix.
    pub fn without_translation(&self) -> Self {
        let mut cols = self.cols;
        cols[3][0] = 0.0;
        cols[3][1] = 0.0;
        cols[3][2] = 0.0;
        Self::from_cols(cols)
    }

    /// Builds a uniform scale matrix; the homogeneous row is left at 1.
    pub const fn scale_uniform(value: f32) -> Self {
        Self::from_cols([
            [value, 0.0, 0.0, 0.0],
            [0.0, value, 0.0, 0.0],
            [0.0, 0.0, value, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a rotation of `angle_deg` degrees about `axis` (Rodrigues).
    ///
    /// The axis is normalized internally; a zero axis is a precondition
    /// violation. The fourth row of the first three columns and the
    /// translation column stay zero, with `1` in the bottom-right corner.
    ///
    /// ```
    /// use lumen_math::{Mat4, Vec3};
    /// let r = Mat4::rotation(90.0, Vec3::UNIT_Z);
    /// let v = r.transform_direction(&Vec3::UNIT_X);
    /// assert!((v.y() - 1.0).abs() < 1e-4);
    /// ```
    pub fn rotation(angle_deg: f32, axis: Vec3) -> Self {
        let [x, y, z] = axis.normalize().to_array();
        let (s, c) = deg_to_rad(angle_deg).sin_cos();
        let c1 = 1.0 - c;

        let mut cols = [[0.0; 4]; 4];
        cols[0][0] = c1 * x * x + c;
        cols[0][1] = c1 * x * y + s * z;
        cols[0][2] = c1 * x * z - s * y;

        cols[1][0] = c1 * x * y - s * z;
        cols[1][1] = c1 * y * y + c;
        cols[1][2] = c1 * y * z + s * x;

        cols[2][0] = c1 * x * z + s * y;
        cols[2][1] = c1 * y * z - s * x;
        cols[2][2] = c1 * z * z + c;

        cols[3][3] = 1.0;
        Self::from_cols(cols)
    }

    /// Component form of [`Mat4::rotation`].
    pub fn rotation_xyz(angle_deg: f32, x: f32, y: f32, z: f32) -> Self {
        Self::rotation(angle_deg, Vec3::new(x, y, z))
    }

    /// Builds a symmetric right-handed perspective projection (clip z in `[-1, 1]`).
    ///
    /// `fov_deg` is the vertical field of view. Requires `aspect_ratio != 0`,
    /// `far != near`, and a field of view with non-zero tangent; violations
    /// propagate as non-finite entries. See [`crate::Projection`] for a
    /// validated front end.
    ///
    /// ```
    /// use lumen_math::Mat4;
    /// let p = Mat4::perspective(90.0, 1.0, 1.0, 3.0);
    /// assert_eq!(p.at(3, 2), -1.0);
    /// assert_eq!(p.at(2, 2), -2.0);
    /// ```
    pub fn perspective(fov_deg: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let t = (deg_to_rad(fov_deg) / 2.0).tan();
        let depth = far - near;

        let mut cols = [[0.0; 4]; 4];
        cols[0][0] = 1.0 / (aspect_ratio * t);
        cols[1][1] = 1.0 / t;
        cols[2][2] = -(far + near) / depth;
        cols[2][3] = -1.0;
        cols[3][2] = -2.0 * far * near / depth;
        Self::from_cols(cols)
    }

    /// Builds a right-handed view matrix looking from `eye` toward `center`.
    ///
    /// With `f = normalize(center - eye)`, `s = normalize(f × up)` and
    /// `u = s × f`, the rotation rows are `s`, `u`, `-f` and the translation
    /// column is `(-s·eye, -u·eye, f·eye)`. The camera looks down `-z` in
    /// view space. `up` parallel to `f` is a precondition violation.
    ///
    /// ```
    /// use lumen_math::{Mat4, Vec3};
    /// let eye = Vec3::new(0.0, 0.0, 5.0);
    /// let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UNIT_Y);
    /// let p = view.transform_point(&Vec3::ZERO);
    /// assert!((p.z() + 5.0).abs() < 1e-3);
    /// ```
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let f = (center - eye).normalize();
        let s = f.cross(&up).normalize();
        let u = s.cross(&f);

        Self::from_cols([
            [s.x(), u.x(), -f.x(), 0.0],
            [s.y(), u.y(), -f.y(), 0.0],
            [s.z(), u.z(), -f.z(), 0.0],
            [-s.dot(&eye), -u.dot(&eye), f.dot(&eye), 1.0],
        ])
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// `result[col][row] = Σₑ self[e][row] * rhs[col][e]`, so the product
    /// applies `rhs` first and `self` second.
    ///
    /// # Examples
    /// ```
    /// use lumen_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale_uniform(2.0);
    /// assert_eq!(a.multiply(&b), b);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (col, out_col) in out.iter_mut().enumerate() {
            for (row, cell) in out_col.iter_mut().enumerate() {
                let mut sum = 0.0;
                for (lhs_col, rhs_elem) in self.cols.iter().zip(rhs.cols[col]) {
                    sum += lhs_col[row] * rhs_elem;
                }
                *cell = sum;
            }
        }
        Self::from_cols(out)
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let [x, y, z] = point.to_array();
        let row = |r: usize| {
            self.at(r, 0) * x + self.at(r, 1) * y + self.at(r, 2) * z + self.at(r, 3)
        };
        Vec3::new(row(0), row(1), row(2))
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [x, y, z] = direction.to_array();
        let row = |r: usize| self.at(r, 0) * x + self.at(r, 1) * y + self.at(r, 2) * z;
        Vec3::new(row(0), row(1), row(2))
    }

    /// Emits the row-major dump (see the `Display` impl) as a `debug` event.
    pub fn debug_print(&self) {
        debug!(target: "lumen_math::mat4", "mat4:\n{self}");
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self::new(value)
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(value: Mat4) -> Self {
        value.to_cols_array()
    }
}

/// Row-major text dump, one row per line, six decimals per entry.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            for col in 0..4 {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:.6}", self.at(row, col))?;
            }
            if row < 3 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}
