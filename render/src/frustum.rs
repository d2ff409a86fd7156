#![allow(dead_code)]

use crate::point::{cross_product, Point};

/// Three reference points plus the unit normal computed from them. "Above"
/// means the signed distance from p1 along the normal is >= 0.
#[derive(Clone, Debug)]
pub struct Plane {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
    pub nx: f64,
    pub ny: f64,
    pub nz: f64,
}

impl Plane {
    pub fn new(first: &Point, second: &Point, third: &Point) -> Plane {
        let a = second - first;
        let b = third - first;
        let n = cross_product(&a, &b).normalized();

        Plane {
            p1: *first,
            p2: *second,
            p3: *third,
            nx: n.x,
            ny: n.y,
            nz: n.z,
        }
    }

    pub fn is_point_above(&self, point: &Point) -> bool {
        let v = point - &self.p1;
        (v.x * self.nx + v.y * self.ny + v.z * self.nz) >= 0.0
    }

    /// Intersection of the segment start->end with this plane. Only
    /// well-defined when start and end are on opposite sides.
    pub fn intersect_line(&self, start: &Point, end: &Point) -> Point {
        let line = end - start;
        let line_normal_dot = self.nx * line.x + self.ny * line.y + self.nz * line.z;

        let vec_from_plane = start - &self.p1;
        let factor = -((self.nx * vec_from_plane.x)
            + (self.ny * vec_from_plane.y)
            + (self.nz * vec_from_plane.z))
            / line_normal_dot;

        Point::new(
            start.x + line.x * factor,
            start.y + line.y * factor,
            start.z + line.z * factor,
        )
    }
}

/// The six planes bounding the view volume, in fixed order: near, far, top,
/// bottom, left, right. Owns its planes exclusively.
#[derive(Clone, Debug)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    pub fn new(width: i32, height: i32, fov_degrees: f64, z_near: f64, z_far: f64) -> Frustum {
        // Nudge the near plane out so a clipped edge never lands exactly on
        // it, which would otherwise produce a 1/w of infinity.
        let z_near = z_near + 0.001;

        let fov_rads = (fov_degrees / 180.0) * std::f64::consts::PI;
        let aspect = width as f64 / height as f64;

        let top_near = (fov_rads / 2.0).tan() * z_near;
        let right_near = top_near * aspect;
        let top_far = (fov_rads / 2.0).tan() * z_far;
        let right_far = top_far * aspect;

        let near_top_left = Point::new(-right_near, top_near, z_near);
        let near_top_right = Point::new(right_near, top_near, z_near);
        let near_bottom_left = Point::new(-right_near, -top_near, z_near);
        let near_bottom_right = Point::new(right_near, -top_near, z_near);

        let far_top_left = Point::new(-right_far, top_far, z_far);
        let far_top_right = Point::new(right_far, top_far, z_far);
        let far_bottom_left = Point::new(-right_far, -top_far, z_far);
        let far_bottom_right = Point::new(right_far, -top_far, z_far);

        Frustum {
            planes: [
                Plane::new(&near_top_left, &near_bottom_left, &near_top_right),
                Plane::new(&far_top_left, &far_top_right, &far_bottom_left),
                Plane::new(&near_top_left, &near_top_right, &far_top_right),
                Plane::new(&near_bottom_left, &far_bottom_left, &far_bottom_right),
                Plane::new(&near_bottom_left, &near_top_left, &far_top_left),
                Plane::new(&near_bottom_right, &far_bottom_right, &far_top_right),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn xy_plane() -> Plane {
        Plane::new(
            &Point::new(0.0, 0.0, 0.0),
            &Point::new(1.0, 0.0, 0.0),
            &Point::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn is_point_above() {
        let plane = xy_plane();
        assert!(plane.is_point_above(&Point::new(1.0, 2.0, 3.0)));
        assert!(!plane.is_point_above(&Point::new(1.0, 2.0, -3.0)));
    }

    #[test]
    fn intersect_line_matches_spec_examples() {
        let plane = xy_plane();

        let hit = plane.intersect_line(&Point::new(1.0, 2.0, 3.0), &Point::new(1.0, 2.0, -3.0));
        assert_relative_eq!(hit.x, 1.0);
        assert_relative_eq!(hit.y, 2.0);
        assert_relative_eq!(hit.z, 0.0);

        let hit = plane.intersect_line(&Point::new(0.0, 3.0, 3.0), &Point::new(1.0, 2.0, -3.0));
        assert_relative_eq!(hit.x, 0.5);
        assert_relative_eq!(hit.y, 2.5);
        assert_relative_eq!(hit.z, 0.0);
    }

    #[test]
    fn near_plane_is_nudged_past_znear() {
        let frustum = Frustum::new(128, 64, 90.0, 1.0, 1000.0);
        // Every near-plane corner should sit at z = 1.001, not z = 1.0.
        assert_relative_eq!(frustum.planes[0].p1.z, 1.001);
    }
}
