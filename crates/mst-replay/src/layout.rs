//! Vertex placement for rendering.
//!
//! A layout is computed once per canvas so every step of a replay draws each
//! vertex in the same place.

use std::collections::HashMap;
use std::f64::consts::TAU;

use mst_graph::{VertexId, WeightedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A 2D position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Vertex positions produced by a [`Layout`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Positions(HashMap<VertexId, Point>);

impl Positions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, vertex: VertexId, point: Point) {
        self.0.insert(vertex, point);
    }

    /// Position of `vertex`, if placed.
    pub fn get(&self, vertex: &VertexId) -> Option<Point> {
        self.0.get(vertex).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Multiply every coordinate by `factor`.
    pub fn scaled(mut self, factor: f64) -> Self {
        for point in self.0.values_mut() {
            point.x *= factor;
            point.y *= factor;
        }
        self
    }
}

/// Assigns positions to every vertex of a graph.
///
/// Implementations must be deterministic for a given graph and seed.
pub trait Layout {
    fn positions<G: WeightedGraph>(&self, graph: &G, seed: u64) -> Positions;
}

/// Uniformly random placement in the unit square, reproducible per seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLayout;

impl Layout for RandomLayout {
    fn positions<G: WeightedGraph>(&self, graph: &G, seed: u64) -> Positions {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Positions::new();
        for vertex in graph.vertices() {
            positions.insert(vertex.clone(), Point::new(rng.gen(), rng.gen()));
        }
        positions
    }
}

/// Vertices evenly spaced on the unit circle in graph order.
///
/// Ignores the seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularLayout;

impl Layout for CircularLayout {
    fn positions<G: WeightedGraph>(&self, graph: &G, _seed: u64) -> Positions {
        let count = graph.vertex_count().max(1) as f64;
        let mut positions = Positions::new();
        for (i, vertex) in graph.vertices().enumerate() {
            let angle = TAU * i as f64 / count;
            positions.insert(vertex.clone(), Point::new(angle.cos(), angle.sin()));
        }
        positions
    }
}
