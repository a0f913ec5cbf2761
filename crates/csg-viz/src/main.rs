use csg_bsp::bsp::Node;
use csg_bsp::{Point, Solid, Vector};
use csg_viz::{cuboid, rotated_cuboid, OrbitCamera, TreeNavigator};
use macroquad::prelude::*;
use nalgebra::Rotation3;
use tracing::info;
use tracing_subscriber::EnvFilter;

const COLOR_A: Color = Color::new(0.85, 0.35, 0.3, 1.0);
const COLOR_B: Color = Color::new(0.3, 0.55, 0.9, 1.0);

/// What the viewer currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operation {
    Union,
    Subtract,
    Intersect,
    OperandA,
    OperandB,
}

impl Operation {
    fn from_keys() -> Option<Self> {
        [
            (KeyCode::Key1, Operation::Union),
            (KeyCode::Key2, Operation::Subtract),
            (KeyCode::Key3, Operation::Intersect),
            (KeyCode::Key4, Operation::OperandA),
            (KeyCode::Key5, Operation::OperandB),
        ]
        .into_iter()
        .find_map(|(key, op)| is_key_pressed(key).then_some(op))
    }

    fn apply(self, a: &Solid<Color>, b: &Solid<Color>) -> Solid<Color> {
        match self {
            Operation::Union => a.union(b),
            Operation::Subtract => a.subtract(b),
            Operation::Intersect => a.intersect(b),
            Operation::OperandA => a.clone(),
            Operation::OperandB => b.clone(),
        }
    }
}

/// The two operands: a box and a second box that can be tilted.
fn operands(tilted: bool) -> (Solid<Color>, Solid<Color>) {
    let a = cuboid(Point::origin(), Vector::new(2.0, 2.0, 2.0), COLOR_A);
    let b = if tilted {
        let rotation = Rotation3::from_euler_angles(0.3, 0.4, 0.25);
        rotated_cuboid(Point::new(1.0, 0.8, 0.6), Vector::new(1.6, 1.6, 1.6), &rotation, COLOR_B)
    } else {
        cuboid(Point::new(1.0, 1.0, 1.0), Vector::new(2.0, 2.0, 2.0), COLOR_B)
    };
    (a, b)
}

struct Scene {
    operation: Operation,
    tilted: bool,
    tree: Node<Color>,
    polygon_count: usize,
}

impl Scene {
    fn new(operation: Operation, tilted: bool) -> Self {
        let (a, b) = operands(tilted);
        let result = operation.apply(&a, &b);
        let polygon_count = result.len();
        info!(?operation, tilted, polygon_count, "computed scene");

        Self {
            operation,
            tilted,
            // Rebuilt as a tree only for back-to-front drawing.
            tree: Node::from_polygons(result.into_polygons()),
            polygon_count,
        }
    }
}

#[macroquad::main("CSG Viewer")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut scene = Scene::new(Operation::Union, false);
    let mut camera = OrbitCamera::new(7.0, 0.6, 0.45)
        .with_zoom(0.5, 2.0, 30.0)
        .with_target(vec3(0.5, 0.5, 0.5));
    let mut navigator = TreeNavigator::new();
    let mut wireframe = true;

    loop {
        if let Some(op) = Operation::from_keys() {
            if op != scene.operation {
                scene = Scene::new(op, scene.tilted);
                navigator.reset();
            }
        }
        if is_key_pressed(KeyCode::T) {
            scene = Scene::new(scene.operation, !scene.tilted);
            navigator.reset();
        }
        if is_key_pressed(KeyCode::W) {
            wireframe = !wireframe;
        }

        camera.update();
        navigator.update(&scene.tree);

        clear_background(Color::from_rgba(20, 20, 30, 255));
        set_camera(&camera.to_camera3d());

        navigator.render(&scene.tree, &camera.eye_point(), wireframe.then_some(BLACK));

        draw_line_3d(Vec3::ZERO, Vec3::X * 2.5, RED);
        draw_line_3d(Vec3::ZERO, Vec3::Y * 2.5, GREEN);
        draw_line_3d(Vec3::ZERO, Vec3::Z * 2.5, BLUE);

        set_default_camera();

        draw_text(
            &format!("{:?} - {} polygons", scene.operation, scene.polygon_count),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            "[1] union [2] subtract [3] intersect [4] A [5] B | [T]ilt B | [W]ireframe",
            10.0,
            45.0,
            16.0,
            GRAY,
        );

        navigator.draw_ui(&scene.tree, 70.0);

        draw_text("Drag mouse to rotate, scroll to zoom", 10.0, 155.0, 16.0, DARKGRAY);
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 175.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
