#![allow(dead_code)]

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::error::RenderError;
use crate::frustum::Frustum;
use crate::matrix::Matrix;
use crate::point::Point;
use crate::polygon::{Polygon, RenderMode};
use crate::screen::Screen;

/// An ordered collection of polygons loaded from a single STL mesh, plus a
/// normal -> polygon-index map that `coalesce` uses to find coplanar
/// neighbors. Owns its polygons exclusively; no polygon outlives its model.
#[derive(Clone, Debug)]
pub struct Model {
    polygons: Vec<Polygon>,
    normal_map: BTreeMap<Point, Vec<usize>>,
}

impl Model {
    pub fn empty() -> Model {
        Model {
            polygons: Vec::new(),
            normal_map: BTreeMap::new(),
        }
    }

    /// Parses a binary or ASCII STL file via `stl_io` and builds one
    /// `Polygon` per triangle, keying `normal_map` by the triangle's
    /// (widened-to-f64) normal so `coalesce` can group coplanar faces.
    /// A parse/IO failure leaves no model to draw with -- per spec.md
    /// §7 ("STL parse failure -> Model ends up with zero polygons, drawing
    /// is a no-op") a caller that ignores the `Err` and falls back to
    /// `Model::empty()` gets exactly that behavior.
    pub fn from_stl(path: &str, mode: RenderMode) -> Result<Model, RenderError> {
        let mut file = std::fs::File::open(path).map_err(|source| RenderError::Io {
            path: path.to_string(),
            source,
        })?;

        let mesh = stl_io::read_stl(&mut file).map_err(|source| RenderError::Parse {
            path: path.to_string(),
            reason: source.to_string(),
        })?;

        let mut model = Model::empty();
        for face in &mesh.faces {
            let v0 = mesh.vertices[face.vertices[0]];
            let v1 = mesh.vertices[face.vertices[1]];
            let v2 = mesh.vertices[face.vertices[2]];

            model.push_triangle(
                Point::new(v0[0] as f64, v0[1] as f64, v0[2] as f64),
                Point::new(v1[0] as f64, v1[1] as f64, v1[2] as f64),
                Point::new(v2[0] as f64, v2[1] as f64, v2[2] as f64),
                Point::new(face.normal[0] as f64, face.normal[1] as f64, face.normal[2] as f64),
                mode,
            );
        }

        info!(
            path,
            triangles = model.polygons.len(),
            distinct_normals = model.normal_map.len(),
            "loaded STL model"
        );

        Ok(model)
    }

    /// Builds a model from polygons assembled procedurally (e.g. a demo
    /// harness drawing an analytic cube) rather than parsed from STL. The
    /// normal map is left empty -- `coalesce` is a no-op on a model built
    /// this way, since there's no STL tessellation to collapse.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Model {
        Model {
            polygons,
            normal_map: BTreeMap::new(),
        }
    }

    fn push_triangle(&mut self, first: Point, second: Point, third: Point, normal: Point, mode: RenderMode) {
        let index = self.polygons.len();
        self.polygons.push(Polygon::tri(first, second, third, mode));
        self.normal_map.entry(normal).or_default().push(index);
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// For each group of triangles sharing a normal (coplanar candidates),
    /// an O(N^2/2) comparison of every edge pair: whenever two triangles
    /// share an edge (in either winding direction), that edge is hidden on
    /// both triangles' *original* (`poly`) vertices, so the edge stays
    /// hidden across every subsequent `reset`. Turns a tessellated curved
    /// STL surface back into a silhouette-edge wireframe.
    pub fn coalesce(&mut self) {
        let mut hidden = 0usize;

        for group in self.normal_map.values() {
            for (position, &i) in group.iter().enumerate() {
                for &j in &group[position + 1..] {
                    hidden += hide_shared_edges(&mut self.polygons, i, j);
                }
            }
        }

        debug!(edges_hidden = hidden, "coalesced coplanar edges");
    }

    pub fn reset(&mut self) {
        for polygon in &mut self.polygons {
            polygon.reset();
        }
    }

    pub fn transform(&mut self, matrix: &Matrix) {
        for polygon in &mut self.polygons {
            polygon.transform(matrix);
        }
    }

    pub fn project(&mut self, matrix: &Matrix) {
        for polygon in &mut self.polygons {
            polygon.project(matrix);
        }
    }

    pub fn cull(&mut self, frustum: &Frustum) {
        for polygon in &mut self.polygons {
            polygon.cull(frustum);
        }

        let culled = self.polygons.iter().filter(|p| p.is_culled()).count();
        debug!(culled, total = self.polygons.len(), "frustum cull pass");
    }

    pub fn draw(&self, screen: &mut Screen) {
        for polygon in &self.polygons {
            polygon.draw(screen);
        }
    }

    /// Center of the AABB over every polygon's *current* (`trans`) vertices.
    pub fn get_origin(&self) -> Point {
        let (min, max) = self.trans_bounds();
        Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0, (min.z + max.z) / 2.0)
    }

    /// Extents of that same AABB.
    pub fn get_dimensions(&self) -> Point {
        let (min, max) = self.trans_bounds();
        Point::new(max.x - min.x, max.y - min.y, max.z - min.z)
    }

    fn trans_bounds(&self) -> (Point, Point) {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);

        for polygon in &self.polygons {
            for p in polygon.trans_points() {
                min.x = min.x.min(p.x);
                min.y = min.y.min(p.y);
                min.z = min.z.min(p.z);
                max.x = max.x.max(p.x);
                max.y = max.y.max(p.y);
                max.z = max.z.max(p.z);
            }
        }

        if self.polygons.is_empty() {
            warn!("get_origin/get_dimensions called on an empty model");
            return (Point::zero(), Point::zero());
        }

        (min, max)
    }
}

/// Compares every edge of `polygons[i]` against every edge of `polygons[j]`
/// (both directions of winding) and hides the matching pair. Indices must
/// differ; uses `split_at_mut` to hold both polygons mutably at once.
fn hide_shared_edges(polygons: &mut [Polygon], i: usize, j: usize) -> usize {
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (left, right) = polygons.split_at_mut(hi);
    let (pi, pj) = (&mut left[lo], &mut right[0]);

    let pi_points = pi.poly_points().to_vec();
    let pj_points = pj.poly_points().to_vec();
    let ni = pi_points.len();
    let nj = pj_points.len();

    let mut hidden = 0usize;

    for e1 in 0..ni {
        let (s1, t1) = (pi_points[e1], pi_points[(e1 + 1) % ni]);
        for e2 in 0..nj {
            let (s2, t2) = (pj_points[e2], pj_points[(e2 + 1) % nj]);

            let shared = (s1 == s2 && t1 == t2) || (s1 == t2 && t1 == s2);
            if shared {
                *pi.edge_highlight_mut(e1) = false;
                *pj.edge_highlight_mut(e2) = false;
                hidden += 1;
            }
        }
    }

    hidden
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a unit cube as 12 triangles (2 per face), matching an STL
    /// export's tessellation, with each face's two triangles sharing that
    /// face's normal.
    fn cube_model() -> Model {
        let mut model = Model::empty();

        let corners = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(1.0, 1.0, 1.0),
            Point::new(0.0, 1.0, 1.0),
        ];

        let faces: [(usize, usize, usize, usize, Point); 6] = [
            (0, 1, 2, 3, Point::new(0.0, 0.0, -1.0)),
            (4, 5, 6, 7, Point::new(0.0, 0.0, 1.0)),
            (0, 1, 5, 4, Point::new(0.0, -1.0, 0.0)),
            (2, 3, 7, 6, Point::new(0.0, 1.0, 0.0)),
            (0, 3, 7, 4, Point::new(-1.0, 0.0, 0.0)),
            (1, 2, 6, 5, Point::new(1.0, 0.0, 0.0)),
        ];

        for (a, b, c, d, normal) in faces {
            model.push_triangle(corners[a], corners[b], corners[c], normal, RenderMode::Wireframe);
            model.push_triangle(corners[a], corners[c], corners[d], normal, RenderMode::Wireframe);
        }

        model
    }

    #[test]
    fn coalesce_hides_exactly_the_triangulation_diagonals() {
        let mut model = cube_model();
        assert_eq!(model.polygon_count(), 12);

        model.coalesce();

        let visible_edges: usize = model
            .polygons()
            .iter()
            .map(|p| p.poly_highlights().iter().filter(|&&h| h).count())
            .sum();

        // 12 triangles * 3 edges = 36 total; coalescing hides the 6
        // triangulation diagonals from both sides (12 edge-instances).
        assert_eq!(visible_edges, 36 - 12);
    }

    #[test]
    fn origin_and_dimensions_read_post_transform_positions() {
        let mut model = cube_model();
        let mut shift = Matrix::identity();
        shift.translate(10.0, 0.0, 0.0);
        model.transform(&shift);

        let origin = model.get_origin();
        assert!((origin.x - 10.5).abs() < 1e-9);

        let dims = model.get_dimensions();
        assert!((dims.x - 1.0).abs() < 1e-9);
        assert!((dims.y - 1.0).abs() < 1e-9);
        assert!((dims.z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_model_from_failed_stl_draws_nothing() {
        let model = Model::empty();
        let frustum = Frustum::new(128, 64, 90.0, 1.0, 1000.0);
        let mut screen = Screen::new(128, 64);

        let mut model = model;
        model.cull(&frustum);
        model.draw(&mut screen);

        assert_eq!(model.polygon_count(), 0);
    }
}
