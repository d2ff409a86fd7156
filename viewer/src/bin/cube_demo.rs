//! Bounded-frame demo: spins an analytic unit cube in front of the camera
//! and writes each rasterized frame to disk. No real scanout process is
//! attached in this repo, so this runs a fixed number of frames and reports
//! timing, rather than blocking on `Screen::wait_for_vblank`.

use clap::Parser;
use sign3d_render::{Frustum, Matrix, Model, Point, Polygon, RenderMode, Screen};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Render a spinning wireframe cube to a frame file, bounded number of frames")]
struct Args {
    #[arg(long, default_value_t = 128)]
    width: i32,

    #[arg(long, default_value_t = 64)]
    height: i32,

    #[arg(long, default_value_t = 90.0)]
    fov: f64,

    #[arg(long, default_value_t = 1.0)]
    z_near: f64,

    #[arg(long, default_value_t = 1000.0)]
    z_far: f64,

    /// Distance the cube is translated away from the camera along +z.
    #[arg(long, default_value_t = 2.5)]
    distance: f64,

    #[arg(long, default_value_t = 2.0)]
    rotate_degrees_per_frame: f64,

    #[arg(long, default_value_t = 60)]
    frames: u32,

    #[arg(long, default_value = "cube_demo_frame.bin")]
    out: String,
}

/// Eight corners of a unit cube centered at the origin, as 12 CCW triangles
/// (2 per face), matching the winding the back-face test expects by default.
fn unit_cube() -> Vec<Polygon> {
    let c = [
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(-0.5, -0.5, 0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
    ];

    let faces = [
        (0, 3, 2, 1), // -z
        (4, 5, 6, 7), // +z
        (0, 1, 5, 4), // -y
        (3, 7, 6, 2), // +y
        (0, 4, 7, 3), // -x
        (1, 2, 6, 5), // +x
    ];

    let mut polygons = Vec::with_capacity(12);
    for (a, b, c_, d) in faces {
        polygons.push(Polygon::tri(c[a], c[b], c[c_], RenderMode::Wireframe));
        polygons.push(Polygon::tri(c[a], c[c_], c[d], RenderMode::Wireframe));
    }
    polygons
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut model = Model::from_polygons(unit_cube());
    let frustum = Frustum::new(args.width, args.height, args.fov, args.z_near, args.z_far);
    let projection = Matrix::projection(args.width, args.height, args.fov, args.z_near, args.z_far);
    let mut screen = Screen::new(args.width as usize, args.height as usize);

    let start = Instant::now();
    let mut angle = 0.0;

    for frame in 0..args.frames {
        model.reset();

        let mut world = Matrix::identity();
        world.rotate_y(angle);
        world.rotate_x(angle * 0.5);
        world.translate_z(args.distance);

        model.transform(&world);
        model.cull(&frustum);
        model.project(&projection);

        screen.clear();
        model.draw(&mut screen);
        screen.render_frame(&args.out);

        tracing::info!(frame, angle, "rendered cube_demo frame");
        angle += args.rotate_degrees_per_frame;
    }

    let elapsed = start.elapsed();
    tracing::info!(
        frames = args.frames,
        elapsed_ms = elapsed.as_millis(),
        fps = args.frames as f64 / elapsed.as_secs_f64(),
        out = args.out,
        "cube_demo finished"
    );
}
