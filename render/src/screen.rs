#![allow(dead_code)]

use crate::config::NormalOrder;
use crate::matrix::Matrix;
use crate::point::Point;
use crate::texture::Texture;
use std::time::Duration;
use tracing::debug;

/// A 2D texture coordinate. Read-only by convention -- nothing mutates one
/// after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uv {
    pub u: f64,
    pub v: f64,
}

impl Uv {
    pub fn new(u: f64, v: f64) -> Uv {
        Uv { u, v }
    }
}

/// 1-bit color buffer + f64 depth buffer, plus frame I/O and the whole
/// drawing API: pixels, lines, wireframe/textured/occluded polygons.
pub struct Screen {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
    depth: Vec<f64>,
    normal_order: NormalOrder,
    last_vsync: u64,
    // Scratch buffers used while rasterizing occluded (outline) polygons.
    // Lazily allocated, reused across draws, owned exclusively by this
    // Screen. Taken out of `self` with Option::take while in use to sidestep
    // the borrow checker -- `_draw_occluded_tri` needs `&mut self` to paint
    // pixels while holding shared references into these.
    mask_screen: Option<Box<Screen>>,
    tex_screen: Option<Box<Screen>>,
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Screen {
        Screen {
            width,
            height,
            pixels: vec![false; width * height],
            depth: vec![f64::INFINITY; width * height],
            normal_order: NormalOrder::Ccw,
            // Sentinel so the very first vsync observed always counts as a
            // change.
            last_vsync: u64::MAX,
            mask_screen: None,
            tex_screen: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_normal_order(&mut self, order: NormalOrder) {
        self.normal_order = order;
    }

    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = false);
        self.depth.iter_mut().for_each(|z| *z = f64::INFINITY);
    }

    /// Snapshot of the color buffer, as the original's `renderTexture` does
    /// -- the screen itself can be sampled as a texture.
    pub fn render_texture(&self) -> Texture {
        Texture::from_mask(self.width, self.height, self.pixels.clone())
    }

    /// Writes the whole color buffer to `path` as one byte per pixel (0 or
    /// 1). Truncate-write-close; any failure is swallowed -- per spec.md,
    /// the renderer never aborts and never partially publishes a frame.
    pub fn render_frame(&self, path: &str) {
        let bytes: Vec<u8> = self.pixels.iter().map(|&p| p as u8).collect();
        if let Err(error) = std::fs::write(path, &bytes) {
            debug!(path, %error, "failed to publish frame");
        }
    }

    /// Polls the vsync counter file once. Returns true (and remembers the
    /// new value) the first time the counter differs from what was last
    /// observed; otherwise returns false without blocking.
    pub fn poll_vsync(&mut self, path: &str) -> bool {
        let current = std::fs::read(path)
            .ok()
            .filter(|bytes| bytes.len() == 8)
            .map(|bytes| u64::from_le_bytes(bytes.try_into().unwrap()))
            .unwrap_or(self.last_vsync);

        if current != self.last_vsync {
            self.last_vsync = current;
            true
        } else {
            false
        }
    }

    /// Spins on `poll_vsync`, sleeping 1ms between attempts, until the
    /// scanout process has advanced the counter. No timeout: if the scanout
    /// process dies, this deadlocks by design.
    pub fn wait_for_vblank(&mut self, path: &str) {
        while !self.poll_vsync(path) {
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    fn get_pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return false;
        }
        self.pixels[x as usize + y as usize * self.width]
    }

    /// Public read of the color buffer -- lets callers (tests, or a scanout
    /// shim that doesn't want to go through the file) inspect a pixel
    /// without round-tripping through `render_frame`.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.get_pixel(x, y)
    }

    pub fn draw_pixel(&mut self, x: i32, y: i32, w: f64, on: bool) {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return;
        }
        // Points with positive w were behind the near plane after projection.
        if w > 0.0 {
            return;
        }

        // z is technically 1/w, so invert it back into a monotonic depth key.
        let z = if w != 0.0 { -1.0 / w } else { 0.0 };

        let idx = x as usize + y as usize * self.width;
        if z > self.depth[idx] {
            return;
        }

        self.pixels[idx] = on;
        self.depth[idx] = z;
    }

    /// Bresenham with per-step depth interpolation. Runs the walk twice:
    /// once to count steps (so `dw` can be computed exactly), once to draw
    /// -- this buys exact endpoint depth, which matters because the depth
    /// test rejects on a strict inequality.
    pub fn draw_line(&mut self, x0: i32, y0: i32, w0: f64, x1: i32, y1: i32, w1: f64, on: bool) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx: i32 = if x0 < x1 { 1 } else { -1 };
        let sy: i32 = if y0 < y1 { 1 } else { -1 };

        let steps = {
            let (mut x, mut y) = (x0, y0);
            let mut err = dx + dy;
            let mut steps = -1i32;
            loop {
                steps += 1;
                if x == x1 && y == y1 {
                    break;
                }
                let e2 = 2 * err;
                if e2 >= dy {
                    err += dy;
                    x += sx;
                }
                if e2 <= dx {
                    err += dx;
                    y += sy;
                }
            }
            steps
        };

        let dw = if steps <= 0 {
            0.0
        } else {
            (w1 - w0) / steps as f64
        };

        let (mut x, mut y) = (x0, y0);
        let mut w = w0;
        let mut err = dx + dy;
        loop {
            self.draw_pixel(x, y, w, on);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
            w += dw;
        }
    }

    pub fn draw_line_points(&mut self, first: &Point, second: &Point, on: bool) {
        self.draw_line(
            first.x as i32,
            first.y as i32,
            first.z,
            second.x as i32,
            second.y as i32,
            second.z,
            on,
        );
    }

    pub fn draw_tri(&mut self, first: &Point, second: &Point, third: &Point, on: bool) {
        self.draw_line_points(first, second, on);
        self.draw_line_points(second, third, on);
        self.draw_line_points(third, first, on);
    }

    pub fn draw_quad(&mut self, first: &Point, second: &Point, third: &Point, fourth: &Point, on: bool) {
        self.draw_line_points(first, second, on);
        self.draw_line_points(second, third, on);
        self.draw_line_points(third, fourth, on);
        self.draw_line_points(fourth, first, on);
    }

    pub fn draw_polygon(&mut self, points: &[Point], on: bool) {
        let n = points.len();
        if n < 3 {
            return;
        }
        if n == 3 {
            self.draw_tri(&points[0], &points[1], &points[2], on);
            return;
        }
        if n == 4 {
            self.draw_quad(&points[0], &points[1], &points[2], &points[3], on);
            return;
        }
        for i in 0..n {
            let j = (i + 1) % n;
            self.draw_line_points(&points[i], &points[j], on);
        }
    }

    // -- textured triangles --------------------------------------------

    /// The per-triangle rasterizer the rest of §4.5 builds on. Constructs an
    /// `XY` basis matrix (inverted) to recover barycentric-like (s, t) for
    /// each candidate pixel, and a `UVW` matrix to recover perspective
    /// correct (u, v) from (s, t). Falls back to an "affine" mode (depth test
    /// inert) when all three w values are zero.
    pub fn draw_textured_tri(
        &mut self,
        first: &Point,
        second: &Point,
        third: &Point,
        first_uv: &Uv,
        second_uv: &Uv,
        third_uv: &Uv,
        tex: &Texture,
    ) {
        let min_x = first.x.min(second.x).min(third.x) as i32;
        let min_y = first.y.min(second.y).min(third.y) as i32;
        let max_x = first.x.max(second.x).max(third.x) as i32;
        let max_y = first.y.max(second.y).max(third.y) as i32;

        if min_x >= self.width as i32 || max_x < 0 {
            return;
        }
        if min_y >= self.height as i32 || max_y < 0 {
            return;
        }

        let mut xy = Matrix::identity();
        xy.a11 = second.x - first.x;
        xy.a12 = second.y - first.y;
        xy.a21 = third.x - first.x;
        xy.a22 = third.y - first.y;
        xy.a41 = first.x;
        xy.a42 = first.y;
        xy.invert();

        let (first_w, second_w, third_w, is_affine) = if first.z == 0.0 && second.z == 0.0 && third.z == 0.0 {
            (1.0, 1.0, 1.0, true)
        } else {
            (first.z, second.z, third.z, false)
        };

        let mut uvw = Matrix::identity();
        uvw.a11 = (second_uv.u * second_w) - (first_uv.u * first_w);
        uvw.a12 = (second_uv.v * second_w) - (first_uv.v * first_w);
        uvw.a13 = second_w - first_w;
        uvw.a21 = (third_uv.u * third_w) - (first_uv.u * first_w);
        uvw.a22 = (third_uv.v * third_w) - (first_uv.v * first_w);
        uvw.a23 = third_w - first_w;
        uvw.a41 = first_uv.u * first_w;
        uvw.a42 = first_uv.v * first_w;
        uvw.a43 = first_w;

        let y_lo = min_y.max(0);
        let y_hi = max_y.min(self.height as i32 - 1);
        let x_lo = min_x.max(0);
        let x_hi = max_x.min(self.width as i32 - 1);

        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                let cur = Point::new(x as f64 + 0.5, y as f64 + 0.5, 0.0);
                let st = xy.multiply_point(&cur);

                if st.x < 0.0 || st.x > 1.0 {
                    continue;
                }
                if st.y < 0.0 || st.y > (1.0 - st.x) {
                    continue;
                }

                let uvw_point = uvw.multiply_point(&st);
                let u = uvw_point.x / uvw_point.z;
                let v = uvw_point.y / uvw_point.z;

                self.draw_pixel(x, y, if is_affine { 0.0 } else { uvw_point.z }, tex.value_at(u, v));
            }
        }
    }

    pub fn draw_textured_quad(
        &mut self,
        first: &Point,
        second: &Point,
        third: &Point,
        fourth: &Point,
        first_uv: &Uv,
        second_uv: &Uv,
        third_uv: &Uv,
        fourth_uv: &Uv,
        tex: &Texture,
    ) {
        self.draw_textured_tri(first, second, fourth, first_uv, second_uv, fourth_uv, tex);
        self.draw_textured_tri(second, third, fourth, second_uv, third_uv, fourth_uv, tex);
    }

    pub fn draw_textured_polygon(&mut self, points: &[Point], uv: &[Uv], tex: &Texture) {
        let n = points.len();
        if n < 3 {
            return;
        }
        if n == 3 {
            self.draw_textured_tri(&points[0], &points[1], &points[2], &uv[0], &uv[1], &uv[2], tex);
            return;
        }
        if n == 4 {
            self.draw_textured_quad(
                &points[0], &points[1], &points[2], &points[3],
                &uv[0], &uv[1], &uv[2], &uv[3],
                tex,
            );
            return;
        }
        for i in 0..n - 2 {
            self.draw_textured_tri(&points[i], &points[i + 1], &points[n - 1], &uv[i], &uv[i + 1], &uv[n - 1], tex);
        }
    }

    // -- back-face test ---------------------------------------------------

    /// Screen-space z-component of the cross product of (first, second,
    /// third), sign interpretation depending on `normal_order`.
    pub fn is_back_facing(&self, first: &Point, second: &Point, third: &Point) -> bool {
        match self.normal_order {
            NormalOrder::Ccw => {
                let ax = third.x - first.x;
                let ay = third.y - first.y;
                let bx = second.x - first.x;
                let by = second.y - first.y;
                (ax * by) - (ay * bx) > 0.0
            }
            NormalOrder::Cw => {
                let ax = second.x - first.x;
                let ay = second.y - first.y;
                let bx = third.x - first.x;
                let by = third.y - first.y;
                (ax * by) - (ay * bx) > 0.0
            }
        }
    }

    // -- culled textured convenience entry points -------------------------

    pub fn draw_textured_culled_tri(
        &mut self,
        first: &Point,
        second: &Point,
        third: &Point,
        first_uv: &Uv,
        second_uv: &Uv,
        third_uv: &Uv,
        tex: &Texture,
    ) {
        if self.is_back_facing(first, second, third) {
            return;
        }
        self.draw_textured_tri(first, second, third, first_uv, second_uv, third_uv, tex);
    }

    pub fn draw_textured_culled_quad(
        &mut self,
        first: &Point,
        second: &Point,
        third: &Point,
        fourth: &Point,
        first_uv: &Uv,
        second_uv: &Uv,
        third_uv: &Uv,
        fourth_uv: &Uv,
        tex: &Texture,
    ) {
        if self.is_back_facing(first, second, fourth) {
            return;
        }
        self.draw_textured_quad(first, second, third, fourth, first_uv, second_uv, third_uv, fourth_uv, tex);
    }

    pub fn draw_textured_culled_polygon(&mut self, points: &[Point], uv: &[Uv], tex: &Texture) {
        let n = points.len();
        if n < 3 {
            return;
        }
        if n == 3 {
            self.draw_textured_culled_tri(&points[0], &points[1], &points[2], &uv[0], &uv[1], &uv[2], tex);
            return;
        }
        if n == 4 {
            self.draw_textured_culled_quad(
                &points[0], &points[1], &points[2], &points[3],
                &uv[0], &uv[1], &uv[2], &uv[3],
                tex,
            );
            return;
        }
        if self.is_back_facing(&points[0], &points[1], &points[n - 1]) {
            return;
        }
        self.draw_textured_polygon(points, uv, tex);
    }

    // -- occluded (outline) polygons ---------------------------------------

    fn take_mask_screen(&mut self) -> Box<Screen> {
        self.mask_screen
            .take()
            .unwrap_or_else(|| Box::new(Screen::new(self.width, self.height)))
    }

    fn take_tex_screen(&mut self) -> Box<Screen> {
        self.tex_screen
            .take()
            .unwrap_or_else(|| Box::new(Screen::new(self.width, self.height)))
    }

    /// Core occluded-triangle rasterizer. `mask` tells us whether a pixel is
    /// inside the polygon (a pixel-exact cheat that skips the floating-point
    /// inside test whenever the mask says the pixel is lit, avoiding gaps
    /// along outline edges); `tex` supplies the color to paint.
    fn draw_occluded_tri_raw(&mut self, first: &Point, second: &Point, third: &Point, mask: &Screen, tex: &Screen) {
        let min_x = first.x.min(second.x).min(third.x) as i32;
        let min_y = first.y.min(second.y).min(third.y) as i32;
        let max_x = first.x.max(second.x).max(third.x) as i32;
        let max_y = first.y.max(second.y).max(third.y) as i32;

        if min_x >= self.width as i32 || max_x < 0 {
            return;
        }
        if min_y >= self.height as i32 || max_y < 0 {
            return;
        }

        let mut xy = Matrix::identity();
        xy.a11 = second.x - first.x;
        xy.a12 = second.y - first.y;
        xy.a21 = third.x - first.x;
        xy.a22 = third.y - first.y;
        xy.a41 = first.x;
        xy.a42 = first.y;
        xy.invert();

        let mut xyw = Matrix::identity();
        xyw.a11 = second.x - first.x;
        xyw.a12 = second.y - first.y;
        xyw.a13 = second.z - first.z;
        xyw.a21 = third.x - first.x;
        xyw.a22 = third.y - first.y;
        xyw.a23 = third.z - first.z;
        xyw.a41 = first.x;
        xyw.a42 = first.y;
        xyw.a43 = first.z;

        let y_lo = min_y.max(0);
        let y_hi = max_y.min(self.height as i32 - 1);
        let x_lo = min_x.max(0);
        let x_hi = max_x.min(self.width as i32 - 1);

        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                let cur = Point::new(x as f64 + 0.5, y as f64 + 0.5, 0.0);
                let st = xy.multiply_point(&cur);

                let is_set = mask.get_pixel(x, y);
                if !is_set {
                    if st.x < 0.0 || st.x > 1.0 {
                        continue;
                    }
                    if st.y < 0.0 || st.y > (1.0 - st.x) {
                        continue;
                    }
                }

                let z = xyw.multiply_point(&st).z;
                self.draw_pixel(x, y, z, tex.get_pixel(x, y));
            }
        }
    }

    pub fn draw_occluded_tri(&mut self, first: &Point, second: &Point, third: &Point) {
        if self.is_back_facing(first, second, third) {
            return;
        }

        let mut mask = self.take_mask_screen();
        mask.clear();
        mask.draw_tri(first, second, third, true);

        self.draw_occluded_tri_raw(first, second, third, &mask, &mask);

        self.mask_screen = Some(mask);
    }

    pub fn draw_occluded_quad(&mut self, first: &Point, second: &Point, third: &Point, fourth: &Point) {
        if self.is_back_facing(first, second, fourth) {
            return;
        }

        let mut mask = self.take_mask_screen();
        let mut tex = self.take_tex_screen();

        mask.clear();
        mask.draw_tri(first, second, fourth, true);
        mask.draw_tri(second, third, fourth, true);

        tex.clear();
        tex.draw_quad(first, second, third, fourth, true);

        self.draw_occluded_tri_raw(first, second, fourth, &mask, &tex);
        self.draw_occluded_tri_raw(second, third, fourth, &mask, &tex);

        self.mask_screen = Some(mask);
        self.tex_screen = Some(tex);
    }

    pub fn draw_occluded_polygon(&mut self, points: &[Point]) {
        let n = points.len();
        if n < 3 {
            return;
        }
        if n == 3 {
            self.draw_occluded_tri(&points[0], &points[1], &points[2]);
            return;
        }
        if n == 4 {
            self.draw_occluded_quad(&points[0], &points[1], &points[2], &points[3]);
            return;
        }

        if self.is_back_facing(&points[0], &points[1], &points[n - 1]) {
            return;
        }

        let mut mask = self.take_mask_screen();
        let mut tex = self.take_tex_screen();

        mask.clear();
        for i in 0..n - 2 {
            mask.draw_tri(&points[i], &points[i + 1], &points[n - 1], true);
        }

        tex.clear();
        for i in 0..n {
            let j = (i + 1) % n;
            tex.draw_line_points(&points[i], &points[j], true);
        }

        for i in 0..n - 2 {
            self.draw_occluded_tri_raw(&points[i], &points[i + 1], &points[n - 1], &mask, &tex);
        }

        self.mask_screen = Some(mask);
        self.tex_screen = Some(tex);
    }

    pub fn draw_occluded_tri_flagged(
        &mut self,
        first: &Point,
        second: &Point,
        third: &Point,
        draw_first: bool,
        draw_second: bool,
        draw_third: bool,
    ) {
        if self.is_back_facing(first, second, third) {
            return;
        }

        let mut tex = self.take_tex_screen();
        tex.clear();
        if draw_first {
            tex.draw_line_points(first, second, true);
        }
        if draw_second {
            tex.draw_line_points(second, third, true);
        }
        if draw_third {
            tex.draw_line_points(third, first, true);
        }

        let mut mask = self.take_mask_screen();
        mask.clear();
        mask.draw_tri(first, second, third, true);

        self.draw_occluded_tri_raw(first, second, third, &mask, &tex);

        self.mask_screen = Some(mask);
        self.tex_screen = Some(tex);
    }

    pub fn draw_occluded_quad_flagged(
        &mut self,
        first: &Point,
        second: &Point,
        third: &Point,
        fourth: &Point,
        draw_first: bool,
        draw_second: bool,
        draw_third: bool,
        draw_fourth: bool,
    ) {
        if self.is_back_facing(first, second, fourth) {
            return;
        }

        let mut tex = self.take_tex_screen();
        tex.clear();
        if draw_first {
            tex.draw_line_points(first, second, true);
        }
        if draw_second {
            tex.draw_line_points(second, third, true);
        }
        if draw_third {
            tex.draw_line_points(third, fourth, true);
        }
        if draw_fourth {
            tex.draw_line_points(fourth, first, true);
        }

        let mut mask = self.take_mask_screen();
        mask.clear();
        mask.draw_tri(first, second, fourth, true);
        mask.draw_tri(second, third, fourth, true);

        self.draw_occluded_tri_raw(first, second, fourth, &mask, &tex);
        self.draw_occluded_tri_raw(second, third, fourth, &mask, &tex);

        self.mask_screen = Some(mask);
        self.tex_screen = Some(tex);
    }

    /// The variant `Polygon::draw` actually calls: a polygon with a parallel
    /// per-edge highlight array, so frustum-clipped polygons suppress the
    /// outline along synthetic clip edges while retaining it on originals.
    pub fn draw_occluded_polygon_flagged(&mut self, points: &[Point], draws: &[bool]) {
        let n = points.len();
        if n < 3 {
            return;
        }
        if n == 3 {
            self.draw_occluded_tri_flagged(&points[0], &points[1], &points[2], draws[0], draws[1], draws[2]);
            return;
        }
        if n == 4 {
            self.draw_occluded_quad_flagged(
                &points[0], &points[1], &points[2], &points[3],
                draws[0], draws[1], draws[2], draws[3],
            );
            return;
        }

        if self.is_back_facing(&points[0], &points[1], &points[n - 1]) {
            return;
        }

        let mut tex = self.take_tex_screen();
        tex.clear();
        for i in 0..n {
            let j = (i + 1) % n;
            if draws[i] {
                tex.draw_line_points(&points[i], &points[j], true);
            }
        }

        let mut mask = self.take_mask_screen();
        mask.clear();
        for i in 0..n - 2 {
            mask.draw_tri(&points[i], &points[i + 1], &points[n - 1], true);
        }

        for i in 0..n - 2 {
            self.draw_occluded_tri_raw(&points[i], &points[i + 1], &points[n - 1], &mask, &tex);
        }

        self.mask_screen = Some(mask);
        self.tex_screen = Some(tex);
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("normal_order", &self.normal_order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_sets_depth_to_infinity() {
        let mut screen = Screen::new(4, 4);
        screen.draw_pixel(1, 1, -1.0, true);
        screen.clear();
        assert!(screen.depth.iter().all(|&z| z.is_infinite()));
        assert!(screen.pixels.iter().all(|&p| !p));
    }

    #[test]
    fn nearer_pixel_wins_the_depth_test() {
        let mut screen = Screen::new(4, 4);
        screen.clear();
        // z = -1/w: w=-2 -> z=0.5 (near); w=-1 -> z=1 (far). Near drawn
        // first, a later farther draw at the same pixel is rejected.
        screen.draw_pixel(0, 0, -2.0, true);
        screen.draw_pixel(0, 0, -1.0, false);
        assert!(screen.get_pixel(0, 0));
    }

    #[test]
    fn farther_pixel_does_not_overwrite_nearer() {
        let mut screen = Screen::new(4, 4);
        screen.clear();
        // Far drawn first, then a nearer draw at the same pixel -- the
        // nearer one wins regardless of draw order.
        screen.draw_pixel(0, 0, -1.0, false);
        screen.draw_pixel(0, 0, -2.0, true);
        assert!(screen.get_pixel(0, 0));
    }

    #[test]
    fn positive_w_pixels_are_rejected() {
        let mut screen = Screen::new(4, 4);
        screen.clear();
        screen.draw_pixel(0, 0, 0.5, true);
        assert!(!screen.get_pixel(0, 0));
    }

    #[test]
    fn back_face_flips_with_vertex_order() {
        let screen = Screen::new(16, 16);
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(0.0, 1.0, 0.0);

        assert_ne!(screen.is_back_facing(&a, &b, &c), screen.is_back_facing(&a, &c, &b));
    }

    #[test]
    fn vsync_handshake_waits_for_a_counter_change() {
        let dir = std::env::temp_dir().join(format!("sign3d_vsync_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("lastframe");
        std::fs::write(&path, 7u64.to_le_bytes()).unwrap();

        let mut screen = Screen::new(4, 4);
        assert!(screen.poll_vsync(path.to_str().unwrap()));
        // Counter hasn't moved -- a second poll must not report a change.
        assert!(!screen.poll_vsync(path.to_str().unwrap()));

        std::fs::remove_dir_all(&dir).ok();
    }
}
