//! Bounded-frame demo: loads an STL mesh, coalesces its silhouette edges,
//! centers and auto-fits it in front of the camera, and spins it for a
//! fixed number of frames, in wireframe or occluded-outline mode.

use clap::{Parser, ValueEnum};
use sign3d_render::{Frustum, Matrix, RenderMode, Screen};
use std::time::Instant;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    Wireframe,
    Occluded,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> RenderMode {
        match mode {
            Mode::Wireframe => RenderMode::Wireframe,
            Mode::Occluded => RenderMode::Occluded,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Render a spinning STL mesh to a frame file, bounded number of frames")]
struct Args {
    /// Path to a binary or ASCII STL file.
    path: String,

    #[arg(long, value_enum, default_value_t = Mode::Wireframe)]
    mode: Mode,

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

    #[arg(long, default_value_t = 2.0)]
    rotate_degrees_per_frame: f64,

    #[arg(long, default_value_t = 60)]
    frames: u32,

    #[arg(long, default_value = "stl_viewer_frame.bin")]
    out: String,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut model = match sign3d_render::Model::from_stl(&args.path, args.mode.into()) {
        Ok(model) => model,
        Err(error) => {
            tracing::error!(path = args.path, %error, "failed to load STL model");
            std::process::exit(1);
        }
    };

    model.coalesce();

    // Auto-fit: center the mesh at the origin, then push it back along +z
    // far enough that its largest extent fits comfortably in the frustum.
    let origin = model.get_origin();
    let dims = model.get_dimensions();
    let largest = dims.x.max(dims.y).max(dims.z).max(1e-6);
    let distance = largest * 2.5 + args.z_near;

    let frustum = Frustum::new(args.width, args.height, args.fov, args.z_near, args.z_far);
    let projection = Matrix::projection(args.width, args.height, args.fov, args.z_near, args.z_far);
    let mut screen = Screen::new(args.width as usize, args.height as usize);

    let start = Instant::now();
    let mut angle = 0.0;

    for frame in 0..args.frames {
        model.reset();

        let mut world = Matrix::identity();
        world.translate(-origin.x, -origin.y, -origin.z);
        world.rotate_y(angle);
        world.translate_z(distance);

        model.transform(&world);
        model.cull(&frustum);
        model.project(&projection);

        screen.clear();
        model.draw(&mut screen);
        screen.render_frame(&args.out);

        tracing::info!(frame, angle, "rendered stl_viewer frame");
        angle += args.rotate_degrees_per_frame;
    }

    let elapsed = start.elapsed();
    tracing::info!(
        frames = args.frames,
        elapsed_ms = elapsed.as_millis(),
        fps = args.frames as f64 / elapsed.as_secs_f64(),
        out = args.out,
        "stl_viewer finished"
    );
}
