#![allow(dead_code)]

use crate::frustum::Frustum;
use crate::matrix::Matrix;
use crate::point::Point;
use crate::screen::Screen;

/// How a polygon draws itself. A field instead of a subclass hierarchy --
/// the two drawing strategies differ only in what they hand to `Screen`,
/// not in how they clip or transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Plain wireframe: one line per highlighted edge.
    Wireframe,
    /// Depth-tested outline, hidden behind its own filled interior.
    Occluded,
}

/// A clippable, transformable polygon. Keeps both the original vertices
/// (`poly`/`poly_highlights`, untouched by `cull`) and a working copy
/// (`trans`/`trans_highlights`) that transform/project/cull mutate in
/// place -- `reset` discards the working copy and starts over from the
/// original, since a frustum cull can both add vertices (clip
/// intersections) and drop edges (fully-invisible runs), so the working
/// copy can't be un-clipped in place.
#[derive(Clone, Debug)]
pub struct Polygon {
    poly: Vec<Point>,
    poly_highlights: Vec<bool>,

    trans: Vec<Point>,
    trans_highlights: Vec<bool>,

    culled: bool,
    mode: RenderMode,
}

impl Polygon {
    pub fn new(points: &[Point], mode: RenderMode) -> Polygon {
        let highlights = vec![true; points.len()];
        Polygon {
            poly: points.to_vec(),
            poly_highlights: highlights.clone(),
            trans: points.to_vec(),
            trans_highlights: highlights,
            culled: false,
            mode,
        }
    }

    pub fn tri(first: Point, second: Point, third: Point, mode: RenderMode) -> Polygon {
        Polygon::new(&[first, second, third], mode)
    }

    pub fn is_culled(&self) -> bool {
        self.culled
    }

    pub fn trans_points(&self) -> &[Point] {
        &self.trans
    }

    pub fn poly_points(&self) -> &[Point] {
        &self.poly
    }

    pub fn poly_highlights(&self) -> &[bool] {
        &self.poly_highlights
    }

    /// Same vertices as `poly_points`, for edge comparisons during
    /// coalescing, paired with the edge that originates at each index.
    pub fn edge_highlight_mut(&mut self, edge: usize) -> &mut bool {
        &mut self.poly_highlights[edge]
    }

    /// Re-derive the working copy from the original vertices, discarding
    /// whatever `cull` grew or shrank it into.
    pub fn reset(&mut self) {
        self.trans = self.poly.clone();
        self.trans_highlights = self.poly_highlights.clone();
        self.culled = false;
    }

    pub fn transform(&mut self, matrix: &Matrix) {
        for p in self.trans.iter_mut() {
            *p = matrix.multiply_point(p);
        }
    }

    pub fn project(&mut self, matrix: &Matrix) {
        for p in self.trans.iter_mut() {
            *p = matrix.project_point(p);
        }
    }

    /// Sutherland-Hodgman clipping, one frustum plane at a time, performed
    /// in place on the working copy. A plane that leaves zero vertices
    /// inside culls the whole polygon; a plane some vertices fail splits
    /// edges by inserting the intersection point and marks the new edge's
    /// highlight accordingly, then a second pass collapses any run of
    /// consecutive invisible edges.
    pub fn cull(&mut self, frustum: &Frustum) {
        let mut inside_plane_count = 0;

        for plane in &frustum.planes {
            let inside_point_count = self.trans.iter().filter(|p| plane.is_point_above(p)).count();

            if inside_point_count == 0 {
                self.culled = true;
                return;
            }

            if inside_point_count == self.trans.len() {
                inside_plane_count += 1;
            }
        }

        self.culled = false;

        if inside_plane_count == frustum.planes.len() {
            return;
        }

        for plane in &frustum.planes {
            let mut inside = plane.is_point_above(&self.trans[0]);
            let mut start = 0usize;

            while start < self.trans.len() {
                let end = (start + 1) % self.trans.len();
                let new_inside = plane.is_point_above(&self.trans[end]);

                if new_inside == inside {
                    self.trans_highlights[start] = self.trans_highlights[start] && new_inside;
                    start += 1;
                    continue;
                }

                let intersection = plane.intersect_line(&self.trans[start], &self.trans[end]);
                let insert_at = start + 1;

                // Both synthetic sub-edges trace back to the same original
                // edge (start, end); its flag is the basis for each half, not
                // whatever happened to be sitting at the insertion index.
                let original_flag = self.trans_highlights[start];

                self.trans.insert(insert_at, intersection);
                self.trans_highlights.insert(insert_at, original_flag && new_inside);

                self.trans_highlights[start] = original_flag && inside;

                inside = new_inside;
                start += 2;
            }

            let mut edge = 0usize;
            while edge < self.trans.len() {
                let next = (edge + 1) % self.trans.len();

                if !self.trans_highlights[edge] && !self.trans_highlights[next] {
                    self.trans.remove(next);
                    self.trans_highlights.remove(next);
                } else {
                    edge += 1;
                }
            }
        }
    }

    pub fn draw(&self, screen: &mut Screen) {
        if self.culled {
            return;
        }

        match self.mode {
            RenderMode::Wireframe => {
                let n = self.trans.len();
                for i in 0..n {
                    if self.trans_highlights[i] {
                        let j = (i + 1) % n;
                        screen.draw_line_points(&self.trans[i], &self.trans[j], true);
                    }
                }
            }
            RenderMode::Occluded => {
                screen.draw_occluded_polygon_flagged(&self.trans, &self.trans_highlights);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frustum::Frustum;

    #[test]
    fn reset_restores_pre_cull_state() {
        let mut poly = Polygon::tri(
            Point::new(0.0, 0.0, 2.0),
            Point::new(1.0, 0.0, 2.0),
            Point::new(0.0, 1.0, 2.0),
            RenderMode::Wireframe,
        );

        let frustum = Frustum::new(128, 64, 90.0, 1.0, 1000.0);
        poly.cull(&frustum);
        poly.reset();

        assert!(!poly.is_culled());
        assert_eq!(poly.trans_points().len(), 3);
    }

    #[test]
    fn polygon_entirely_behind_near_plane_is_fully_culled() {
        let mut poly = Polygon::tri(
            Point::new(0.0, 0.0, 0.5),
            Point::new(0.1, 0.0, 0.5),
            Point::new(0.0, 0.1, 0.5),
            RenderMode::Wireframe,
        );

        let frustum = Frustum::new(128, 64, 90.0, 1.0, 1000.0);
        poly.cull(&frustum);

        assert!(poly.is_culled());
    }

    #[test]
    fn polygon_entirely_inside_frustum_keeps_its_original_vertex_count() {
        let mut poly = Polygon::tri(
            Point::new(-0.1, -0.1, 5.0),
            Point::new(0.1, -0.1, 5.0),
            Point::new(0.0, 0.1, 5.0),
            RenderMode::Wireframe,
        );

        let frustum = Frustum::new(128, 64, 90.0, 1.0, 1000.0);
        poly.cull(&frustum);

        assert!(!poly.is_culled());
        assert_eq!(poly.trans_points().len(), 3);
    }
}
