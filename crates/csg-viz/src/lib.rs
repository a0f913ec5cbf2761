//! Rendering and scene helpers for the CSG viewer.
//!
//! Polygons are tagged with their macroquad [`Color`], so after a boolean
//! operation every fragment is still drawn in the colour of the solid it
//! came from.

use csg_bsp::bsp::BspVisitor;
use csg_bsp::{Plane, Point, Polygon, Real, Solid, Vector, Vertex as CsgVertex};
use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;
use nalgebra::Rotation3;

pub mod navigator;
pub use navigator::TreeNavigator;

/// Direction the scene light comes from.
const LIGHT_DIR: [f32; 3] = [0.4, 0.8, 0.45];

/// Scales a face colour by a simple Lambert term so faces with different
/// orientations stay distinguishable.
pub fn shade(color: Color, normal: &Vector) -> Color {
    let light = vec3(LIGHT_DIR[0], LIGHT_DIR[1], LIGHT_DIR[2]).normalize();
    let n = vec3(normal.x as f32, normal.y as f32, normal.z as f32);
    let lambert = 0.35 + 0.65 * n.dot(light).max(0.0);
    Color::new(color.r * lambert, color.g * lambert, color.b * lambert, color.a)
}

/// Draws a single polygon by fan-triangulating it into a Mesh.
pub fn draw_polygon(polygon: &Polygon<Color>) {
    let verts = polygon.vertices();
    if verts.len() < 3 {
        return;
    }

    let base = polygon.shared().copied().unwrap_or(GRAY);
    let color = shade(base, &polygon.plane().normal());

    let mesh_vertices: Vec<Vertex> = verts
        .iter()
        .map(|v| {
            Vertex::new2(
                vec3(v.pos.x as f32, v.pos.y as f32, v.pos.z as f32),
                vec2(0.0, 0.0),
                color,
            )
        })
        .collect();

    let mut indices: Vec<u16> = Vec::with_capacity((verts.len() - 2) * 3);
    for i in 1..verts.len() - 1 {
        indices.extend([0, i as u16, (i + 1) as u16]);
    }

    draw_mesh(&Mesh {
        vertices: mesh_vertices,
        indices,
        texture: None,
    });
}

/// Draws the outline of a polygon, useful to see where faces were split.
pub fn draw_polygon_edges(polygon: &Polygon<Color>, color: Color) {
    let verts = polygon.vertices();
    for (i, a) in verts.iter().enumerate() {
        let b = &verts[(i + 1) % verts.len()];
        draw_line_3d(to_vec3(&a.pos), to_vec3(&b.pos), color);
    }
}

/// Visitor that renders polygons using macroquad's 3D drawing.
pub struct RenderVisitor {
    pub wireframe: Option<Color>,
}

impl BspVisitor<Color> for RenderVisitor {
    fn visit(&mut self, polygons: &[Polygon<Color>]) {
        for polygon in polygons {
            draw_polygon(polygon);
            if let Some(edge_color) = self.wireframe {
                draw_polygon_edges(polygon, edge_color);
            }
        }
    }
}

/// Converts a CSG point into macroquad's vector type.
pub fn to_vec3(p: &Point) -> Vec3 {
    vec3(p.x as f32, p.y as f32, p.z as f32)
}

/// Corner offsets of a unit box, indexed so bit 0/1/2 of the index selects
/// the +X/+Y/+Z side.
fn box_corners(half: &Vector) -> [Vector; 8] {
    std::array::from_fn(|i| {
        let sign = |bit: usize| if i & bit != 0 { 1.0 } else { -1.0 };
        Vector::new(half.x * sign(1), half.y * sign(2), half.z * sign(4))
    })
}

/// Faces of the box as corner indices, counter-clockwise seen from outside.
const BOX_FACES: [[usize; 4]; 6] = [
    [0, 4, 6, 2], // left (-X)
    [1, 3, 7, 5], // right (+X)
    [0, 1, 5, 4], // bottom (-Y)
    [2, 6, 7, 3], // top (+Y)
    [0, 2, 3, 1], // back (-Z)
    [4, 5, 7, 6], // front (+Z)
];

/// Builds an axis-aligned box solid with every face tagged `color`.
pub fn cuboid(center: Point, size: Vector, color: Color) -> Solid<Color> {
    rotated_cuboid(center, size, &Rotation3::identity(), color)
}

/// Builds a rotated box solid with every face tagged `color`.
pub fn rotated_cuboid(
    center: Point,
    size: Vector,
    rotation: &Rotation3<Real>,
    color: Color,
) -> Solid<Color> {
    let corners = box_corners(&(size / 2.0)).map(|offset| center + rotation * offset);

    BOX_FACES
        .iter()
        .map(|face| {
            make_coplanar_quad(
                corners[face[0]],
                corners[face[1]],
                corners[face[2]],
                corners[face[3]],
                color,
            )
        })
        .collect()
}

/// Creates a coplanar quad by projecting the 4th corner onto the plane of
/// the first three. Rotation leaves it slightly off the plane otherwise.
fn make_coplanar_quad(p0: Point, p1: Point, p2: Point, p3: Point, color: Color) -> Polygon<Color> {
    let plane = Plane::from_points(&p0, &p1, &p2);
    let p3 = plane.project_point(&p3);
    let normal = plane.normal();
    Polygon::new(
        [p0, p1, p2, p3]
            .into_iter()
            .map(|p| CsgVertex::new(p, normal))
            .collect(),
        Some(color),
    )
}

/// Simple orbit camera for 3D scene navigation.
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub target: Vec3,
    /// Multiplier for scroll wheel zoom
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    /// Creates a camera orbiting the origin.
    pub fn new(distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            distance,
            yaw,
            pitch,
            target: Vec3::ZERO,
            zoom_speed: 0.5,
            min_distance: 1.0,
            max_distance: 50.0,
        }
    }

    /// Sets the zoom configuration (speed and distance limits).
    pub fn with_zoom(mut self, speed: f32, min: f32, max: f32) -> Self {
        self.zoom_speed = speed;
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Sets the point the camera orbits around.
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Applies mouse drag (orbit) and wheel (zoom) input.
    pub fn update(&mut self) {
        if is_mouse_button_down(MouseButton::Left) {
            let delta = mouse_delta_position();
            self.yaw -= delta.x * 2.0;
            self.pitch -= delta.y * 2.0;
        }
        self.pitch = self.pitch.clamp(-1.5, 1.5);

        let scroll = mouse_wheel().1;
        self.distance = (self.distance - scroll * self.zoom_speed)
            .clamp(self.min_distance, self.max_distance);
    }

    /// Returns the camera's world position.
    pub fn position(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target + self.distance * vec3(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    /// Converts to macroquad's Camera3D for rendering.
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: Vec3::Y,
            target: self.target,
            ..Default::default()
        }
    }

    /// Returns the eye position for BSP traversal.
    pub fn eye_point(&self) -> Point {
        let pos = self.position();
        Point::new(pos.x as Real, pos.y as Real, pos.z as Real)
    }
}
