//! Helpers shared by the integration tests.

#![allow(dead_code)]

use csg_bsp::{Point, Polygon, Real, Solid, Vector, Vertex};

/// Axis-aligned box centred at `center` with half-extents `radius`.
///
/// Faces are emitted in the order -X, +X, -Y, +Y, -Z, +Z with outward
/// winding; corner `i` sits at `center + radius * (±1, ±1, ±1)` with the
/// sign of each axis taken from bits 0, 1 and 2 of `i`.
pub fn cuboid<S: Clone>(center: [Real; 3], radius: [Real; 3], tag: Option<S>) -> Solid<S> {
    const FACES: [([usize; 4], [Real; 3]); 6] = [
        ([0, 4, 6, 2], [-1.0, 0.0, 0.0]),
        ([1, 3, 7, 5], [1.0, 0.0, 0.0]),
        ([0, 1, 5, 4], [0.0, -1.0, 0.0]),
        ([2, 6, 7, 3], [0.0, 1.0, 0.0]),
        ([0, 2, 3, 1], [0.0, 0.0, -1.0]),
        ([4, 5, 7, 6], [0.0, 0.0, 1.0]),
    ];

    let corner = |i: usize| {
        let sign = |bit: usize| if i & bit != 0 { 1.0 } else { -1.0 };
        Point::new(
            center[0] + radius[0] * sign(1),
            center[1] + radius[1] * sign(2),
            center[2] + radius[2] * sign(4),
        )
    };

    FACES
        .iter()
        .map(|(indices, normal)| {
            let normal = Vector::from(*normal);
            let vertices = indices
                .iter()
                .map(|&i| Vertex::new(corner(i), normal))
                .collect();
            Polygon::new(vertices, tag.clone())
        })
        .collect()
}

/// Unit cube with its minimum corner at `min`.
pub fn unit_cube(min: [Real; 3]) -> Solid<()> {
    cuboid([min[0] + 0.5, min[1] + 0.5, min[2] + 0.5], [0.5; 3], None)
}

/// Enclosed volume, computed from the boundary by the divergence theorem.
pub fn signed_volume<S>(solid: &Solid<S>) -> Real {
    solid
        .polygons()
        .iter()
        .map(|polygon| {
            let v = polygon.vertices();
            (1..v.len() - 1)
                .map(|i| v[0].pos.coords.dot(&v[i].pos.coords.cross(&v[i + 1].pos.coords)) / 6.0)
                .sum::<Real>()
        })
        .sum()
}

/// Total area of all polygons.
pub fn surface_area<S>(solid: &Solid<S>) -> Real {
    solid
        .polygons()
        .iter()
        .map(|polygon| {
            let v = polygon.vertices();
            let doubled: Vector = (1..v.len() - 1)
                .map(|i| (v[i].pos - v[0].pos).cross(&(v[i + 1].pos - v[0].pos)))
                .sum();
            doubled.norm() / 2.0
        })
        .sum()
}

/// Order-independent key of a polygon set: each polygon becomes its sorted,
/// rounded vertex positions and the list of polygons is sorted as well.
pub fn polygon_set<S>(polygons: &[Polygon<S>]) -> Vec<Vec<[i64; 3]>> {
    let mut set: Vec<Vec<[i64; 3]>> = polygons
        .iter()
        .map(|p| {
            let mut key: Vec<[i64; 3]> = p
                .vertices()
                .iter()
                .map(|v| {
                    [
                        (v.pos.x * 1e6).round() as i64,
                        (v.pos.y * 1e6).round() as i64,
                        (v.pos.z * 1e6).round() as i64,
                    ]
                })
                .collect();
            key.sort();
            key
        })
        .collect();
    set.sort();
    set
}

/// Installs a test subscriber so `RUST_LOG=csg_bsp=debug` shows the
/// operator spans. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
