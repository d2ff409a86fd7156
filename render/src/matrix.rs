#![allow(dead_code)]

use crate::point::Point;

/////////////////////////////////////////////////////////////////////////////
//
// MATRIX ORGANIZATION
//
// Row-major 4x4, row-vector convention:
//
//                 | a11 a12 a13 a14 |
//     [ x y z 1 ] | a21 a22 a23 a24 | = [ x' y' z' w' ]
//                 | a31 a32 a33 a34 |
//                 | a41 a42 a43 a44 |
//
// `multiply_point` reads only the 3x3 block plus row 4 (the affine
// translation) and ignores column 4 entirely -- it never performs a
// perspective divide. `project_point` additionally reads column 4 as the
// homogeneous coordinate generator and performs the divide, returning 1/w in
// the z slot -- every downstream rasterization call relies on that
// convention.
/////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub a11: f64,
    pub a12: f64,
    pub a13: f64,
    pub a14: f64,
    pub a21: f64,
    pub a22: f64,
    pub a23: f64,
    pub a24: f64,
    pub a31: f64,
    pub a32: f64,
    pub a33: f64,
    pub a34: f64,
    pub a41: f64,
    pub a42: f64,
    pub a43: f64,
    pub a44: f64,
}

impl Matrix {
    pub fn identity() -> Matrix {
        Matrix {
            a11: 1.0,
            a12: 0.0,
            a13: 0.0,
            a14: 0.0,
            a21: 0.0,
            a22: 1.0,
            a23: 0.0,
            a24: 0.0,
            a31: 0.0,
            a32: 0.0,
            a33: 1.0,
            a34: 0.0,
            a41: 0.0,
            a42: 0.0,
            a43: 0.0,
            a44: 1.0,
        }
    }

    /// Perspective-projection matrix for a viewport of `width`x`height`,
    /// vertical `fov` in degrees, and near/far clip planes. Built as a
    /// viewport-remap matrix post-multiplied by a pure projection matrix, per
    /// spec.md 4.1's derivation (h = width/2, k = height/2, f = cot(fov/2)).
    pub fn projection(width: i32, height: i32, fov: f64, z_near: f64, z_far: f64) -> Matrix {
        let halfwidth = width as f64 / 2.0;
        let halfheight = height as f64 / 2.0;

        let mut m = Matrix {
            a11: -halfwidth,
            a12: 0.0,
            a13: 0.0,
            a14: 0.0,
            a21: 0.0,
            a22: halfheight,
            a23: 0.0,
            a24: 0.0,
            a31: 0.0,
            a32: 0.0,
            a33: 1.0,
            a34: 0.0,
            a41: halfwidth,
            a42: halfheight,
            a43: 0.0,
            a44: 1.0,
        };

        let fov_rads = (fov / 180.0) * std::f64::consts::PI;
        let aspect = halfwidth / halfheight;
        let cot_fovy_2 = (fov_rads / 2.0).cos() / (fov_rads / 2.0).sin();

        let mut projection_matrix = Matrix::identity();
        projection_matrix.a11 = cot_fovy_2 / aspect;
        projection_matrix.a22 = cot_fovy_2;
        projection_matrix.a33 = -(z_far + z_near) / (z_near - z_far);
        projection_matrix.a34 = -1.0;
        projection_matrix.a43 = -(2.0 * z_far * z_near) / (z_near - z_far);

        m.multiply(&projection_matrix);
        m
    }

    /// Affine apply: treats `point` as (x, y, z, 1), ignores column 4, does
    /// not perform a perspective divide.
    pub fn multiply_point(&self, point: &Point) -> Point {
        Point::new(
            self.a11 * point.x + self.a21 * point.y + self.a31 * point.z + self.a41,
            self.a12 * point.x + self.a22 * point.y + self.a32 * point.z + self.a42,
            self.a13 * point.x + self.a23 * point.y + self.a33 * point.z + self.a43,
        )
    }

    /// Projective apply: computes w via column 4 and returns (x/w, y/w, 1/w).
    pub fn project_point(&self, point: &Point) -> Point {
        let x = self.a11 * point.x + self.a21 * point.y + self.a31 * point.z + self.a41;
        let y = self.a12 * point.x + self.a22 * point.y + self.a32 * point.z + self.a42;
        let w = self.a14 * point.x + self.a24 * point.y + self.a34 * point.z + self.a44;

        Point::new(x / w, y / w, 1.0 / w)
    }

    /// Post-multiply: `self <- other . self`, so that applying the new
    /// `self` to a point equals applying the old `self` first, then `other`.
    /// Computed into a scratch matrix first -- the naive in-place version
    /// reads fields it has already overwritten and produces a wrong result.
    pub fn multiply(&mut self, other: &Matrix) -> &mut Matrix {
        let tmp = Matrix {
            a11: other.a11 * self.a11 + other.a12 * self.a21 + other.a13 * self.a31 + other.a14 * self.a41,
            a12: other.a11 * self.a12 + other.a12 * self.a22 + other.a13 * self.a32 + other.a14 * self.a42,
            a13: other.a11 * self.a13 + other.a12 * self.a23 + other.a13 * self.a33 + other.a14 * self.a43,
            a14: other.a11 * self.a14 + other.a12 * self.a24 + other.a13 * self.a34 + other.a14 * self.a44,

            a21: other.a21 * self.a11 + other.a22 * self.a21 + other.a23 * self.a31 + other.a24 * self.a41,
            a22: other.a21 * self.a12 + other.a22 * self.a22 + other.a23 * self.a32 + other.a24 * self.a42,
            a23: other.a21 * self.a13 + other.a22 * self.a23 + other.a23 * self.a33 + other.a24 * self.a43,
            a24: other.a21 * self.a14 + other.a22 * self.a24 + other.a23 * self.a34 + other.a24 * self.a44,

            a31: other.a31 * self.a11 + other.a32 * self.a21 + other.a33 * self.a31 + other.a34 * self.a41,
            a32: other.a31 * self.a12 + other.a32 * self.a22 + other.a33 * self.a32 + other.a34 * self.a42,
            a33: other.a31 * self.a13 + other.a32 * self.a23 + other.a33 * self.a33 + other.a34 * self.a43,
            a34: other.a31 * self.a14 + other.a32 * self.a24 + other.a33 * self.a34 + other.a34 * self.a44,

            a41: other.a41 * self.a11 + other.a42 * self.a21 + other.a43 * self.a31 + other.a44 * self.a41,
            a42: other.a41 * self.a12 + other.a42 * self.a22 + other.a43 * self.a32 + other.a44 * self.a42,
            a43: other.a41 * self.a13 + other.a42 * self.a23 + other.a43 * self.a33 + other.a44 * self.a43,
            a44: other.a41 * self.a14 + other.a42 * self.a24 + other.a43 * self.a34 + other.a44 * self.a44,
        };

        *self = tmp;
        self
    }

    /// Translates in the matrix's *current* frame: row 4 becomes the affine
    /// apply of (x, y, z) through `self` as it stands right now.
    pub fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Matrix {
        let p = self.multiply_point(&Point::new(x, y, z));
        self.a41 = p.x;
        self.a42 = p.y;
        self.a43 = p.z;
        self
    }

    pub fn translate_x(&mut self, x: f64) -> &mut Matrix {
        self.translate(x, 0.0, 0.0)
    }

    pub fn translate_y(&mut self, y: f64) -> &mut Matrix {
        self.translate(0.0, y, 0.0)
    }

    pub fn translate_z(&mut self, z: f64) -> &mut Matrix {
        self.translate(0.0, 0.0, z)
    }

    pub fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Matrix {
        let mut tmp = Matrix::identity();
        tmp.a11 = x;
        tmp.a22 = y;
        tmp.a33 = z;
        self.multiply(&tmp);
        self
    }

    pub fn scale_x(&mut self, x: f64) -> &mut Matrix {
        self.scale(x, 1.0, 1.0)
    }

    pub fn scale_y(&mut self, y: f64) -> &mut Matrix {
        self.scale(1.0, y, 1.0)
    }

    pub fn scale_z(&mut self, z: f64) -> &mut Matrix {
        self.scale(1.0, 1.0, z)
    }

    pub fn rotate_x(&mut self, degrees: f64) -> &mut Matrix {
        let mut tmp = Matrix::identity();
        let rads = (degrees / 180.0) * std::f64::consts::PI;
        tmp.a33 = rads.cos();
        tmp.a22 = tmp.a33;
        tmp.a32 = rads.sin();
        tmp.a23 = -tmp.a32;
        self.multiply(&tmp);
        self
    }

    pub fn rotate_y(&mut self, degrees: f64) -> &mut Matrix {
        let mut tmp = Matrix::identity();
        let rads = (degrees / 180.0) * std::f64::consts::PI;
        tmp.a33 = rads.cos();
        tmp.a11 = tmp.a33;
        tmp.a13 = rads.sin();
        tmp.a31 = -tmp.a13;
        self.multiply(&tmp);
        self
    }

    pub fn rotate_z(&mut self, degrees: f64) -> &mut Matrix {
        let mut tmp = Matrix::identity();
        let rads = (degrees / 180.0) * std::f64::consts::PI;
        tmp.a22 = rads.cos();
        tmp.a11 = tmp.a22;
        tmp.a21 = rads.sin();
        tmp.a12 = -tmp.a21;
        self.multiply(&tmp);
        self
    }

    /// Rotate about an arbitrary origin by sandwiching the rotation between a
    /// translate-to-origin and translate-back. This overwrites row 4 on a
    /// scratch matrix directly (not via `translate`), so it's affine-only.
    pub fn rotate_origin_x(&mut self, origin: &Point, degrees: f64) -> &mut Matrix {
        let mut move_to = Matrix::identity();
        move_to.a41 = origin.x;
        move_to.a42 = origin.y;
        move_to.a43 = origin.z;
        self.multiply(&move_to);

        self.rotate_x(degrees);

        let mut move_back = Matrix::identity();
        move_back.a41 = -origin.x;
        move_back.a42 = -origin.y;
        move_back.a43 = -origin.z;
        self.multiply(&move_back);
        self
    }

    pub fn rotate_origin_y(&mut self, origin: &Point, degrees: f64) -> &mut Matrix {
        let mut move_to = Matrix::identity();
        move_to.a41 = origin.x;
        move_to.a42 = origin.y;
        move_to.a43 = origin.z;
        self.multiply(&move_to);

        self.rotate_y(degrees);

        let mut move_back = Matrix::identity();
        move_back.a41 = -origin.x;
        move_back.a42 = -origin.y;
        move_back.a43 = -origin.z;
        self.multiply(&move_back);
        self
    }

    pub fn rotate_origin_z(&mut self, origin: &Point, degrees: f64) -> &mut Matrix {
        let mut move_to = Matrix::identity();
        move_to.a41 = origin.x;
        move_to.a42 = origin.y;
        move_to.a43 = origin.z;
        self.multiply(&move_to);

        self.rotate_z(degrees);

        let mut move_back = Matrix::identity();
        move_back.a41 = -origin.x;
        move_back.a42 = -origin.y;
        move_back.a43 = -origin.z;
        self.multiply(&move_back);
        self
    }

    fn as_array(&self) -> [f64; 16] {
        [
            self.a11, self.a12, self.a13, self.a14, self.a21, self.a22, self.a23, self.a24,
            self.a31, self.a32, self.a33, self.a34, self.a41, self.a42, self.a43, self.a44,
        ]
    }

    /// Cofactor/adjugate inversion. Only defined when the determinant is
    /// nonzero -- callers (the per-triangle XY basis matrix during
    /// rasterization) never pass a degenerate triangle here, since those are
    /// culled first by bounding-box checks.
    pub fn invert(&mut self) -> &mut Matrix {
        let m = self.as_array();
        let adj = adjoint(&m);
        let inv_det = 1.0 / determinant(&m);

        self.a11 = adj[0] * inv_det;
        self.a12 = adj[1] * inv_det;
        self.a13 = adj[2] * inv_det;
        self.a14 = adj[3] * inv_det;
        self.a21 = adj[4] * inv_det;
        self.a22 = adj[5] * inv_det;
        self.a23 = adj[6] * inv_det;
        self.a24 = adj[7] * inv_det;
        self.a31 = adj[8] * inv_det;
        self.a32 = adj[9] * inv_det;
        self.a33 = adj[10] * inv_det;
        self.a34 = adj[11] * inv_det;
        self.a41 = adj[12] * inv_det;
        self.a42 = adj[13] * inv_det;
        self.a43 = adj[14] * inv_det;
        self.a44 = adj[15] * inv_det;
        self
    }
}

fn minor(m: &[f64; 16], r0: usize, r1: usize, r2: usize, c0: usize, c1: usize, c2: usize) -> f64 {
    m[4 * r0 + c0] * (m[4 * r1 + c1] * m[4 * r2 + c2] - m[4 * r2 + c1] * m[4 * r1 + c2])
        - m[4 * r0 + c1] * (m[4 * r1 + c0] * m[4 * r2 + c2] - m[4 * r2 + c0] * m[4 * r1 + c2])
        + m[4 * r0 + c2] * (m[4 * r1 + c0] * m[4 * r2 + c1] - m[4 * r2 + c0] * m[4 * r1 + c1])
}

fn adjoint(m: &[f64; 16]) -> [f64; 16] {
    [
        minor(m, 1, 2, 3, 1, 2, 3),
        -minor(m, 0, 2, 3, 1, 2, 3),
        minor(m, 0, 1, 3, 1, 2, 3),
        -minor(m, 0, 1, 2, 1, 2, 3),
        -minor(m, 1, 2, 3, 0, 2, 3),
        minor(m, 0, 2, 3, 0, 2, 3),
        -minor(m, 0, 1, 3, 0, 2, 3),
        minor(m, 0, 1, 2, 0, 2, 3),
        minor(m, 1, 2, 3, 0, 1, 3),
        -minor(m, 0, 2, 3, 0, 1, 3),
        minor(m, 0, 1, 3, 0, 1, 3),
        -minor(m, 0, 1, 2, 0, 1, 3),
        -minor(m, 1, 2, 3, 0, 1, 2),
        minor(m, 0, 2, 3, 0, 1, 2),
        -minor(m, 0, 1, 3, 0, 1, 2),
        minor(m, 0, 1, 2, 0, 1, 2),
    ]
}

fn determinant(m: &[f64; 16]) -> f64 {
    m[0] * minor(m, 1, 2, 3, 1, 2, 3) - m[1] * minor(m, 1, 2, 3, 0, 2, 3)
        + m[2] * minor(m, 1, 2, 3, 0, 1, 3)
        - m[3] * minor(m, 1, 2, 3, 0, 1, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_leaves_points_unchanged() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(Matrix::identity().multiply_point(&p), p);
    }

    #[test]
    fn translate_round_trips_through_invert() {
        let p = Point::new(5.0, -2.0, 9.0);
        let mut m = Matrix::identity();
        m.translate(1.0, 2.0, 3.0);

        let translated = m.multiply_point(&p);
        m.invert();
        let back = m.multiply_point(&translated);

        assert_relative_eq!(back.x, p.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-9);
        assert_relative_eq!(back.z, p.z, epsilon = 1e-9);
    }

    #[test]
    fn composition_order_matches_row_vector_convention() {
        let p = Point::new(1.0, 2.0, 3.0);

        let mut a = Matrix::identity();
        a.translate(1.0, 0.0, 0.0);
        let mut b = Matrix::identity();
        b.scale(2.0, 2.0, 2.0);

        let mut composed = a;
        composed.multiply(&b);

        let lhs = composed.multiply_point(&p);
        let rhs = a.multiply_point(&b.multiply_point(&p));

        assert_relative_eq!(lhs.x, rhs.x, epsilon = 1e-9);
        assert_relative_eq!(lhs.y, rhs.y, epsilon = 1e-9);
        assert_relative_eq!(lhs.z, rhs.z, epsilon = 1e-9);
    }

    #[test]
    fn projection_centers_a_point_on_the_optical_axis() {
        let proj = Matrix::projection(128, 64, 90.0, 1.0, 1000.0);
        let result = proj.project_point(&Point::new(0.0, 0.0, -1.0));
        assert_relative_eq!(result.x, 64.0, epsilon = 1e-9);
        assert_relative_eq!(result.y, 32.0, epsilon = 1e-9);
    }
}
