use sign3d_render::{Frustum, Matrix, Point};

/// Baby-steps exerciser for the core primitives, kept deliberately tiny --
/// in the spirit of the teacher's own trig-by-hand `src/main.rs`, but poking
/// at `Point`/`Matrix`/`Frustum` instead of raw angle math.
fn main() {
    println!("sign3d - core primitives, baby steps");

    let p = Point::new(1.0, 2.0, 3.0);
    println!("identity leaves a point unchanged: {:?}", Matrix::identity().multiply_point(&p));

    let mut translate = Matrix::identity();
    translate.translate(5.0, 0.0, 0.0);
    let translated = translate.multiply_point(&p);
    println!("translate(5,0,0): {:?} -> {:?}", p, translated);

    let mut rotate = Matrix::identity();
    rotate.rotate_y(90.0);
    println!("rotate_y(90) of {:?}: {:?}", p, rotate.multiply_point(&p));

    let projection = Matrix::projection(128, 64, 90.0, 1.0, 1000.0);
    let projected = projection.project_point(&Point::new(0.0, 0.0, -1.0));
    println!(
        "a point on the optical axis at z=-1 projects to screen center: {:?}",
        projected
    );

    let frustum = Frustum::new(128, 64, 90.0, 1.0, 1000.0);
    println!(
        "near plane nudged past z_near: {:.4}",
        frustum.planes[0].p1.z
    );
}
