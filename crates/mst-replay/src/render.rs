//! Rendering boundary.
//!
//! The controller only knows [`RenderSink`]: it hands over a [`Frame`] on
//! every cursor move. [`Canvas`] adapts a graph, a [`Layout`] and a
//! [`Renderer`] into a sink, so renderers receive a fully classified
//! [`Scene`] and never query anything else.

use std::fmt::Write as _;

use mst_graph::{Edge, VertexId, WeightedGraph};
use mst_trace::Snapshot;

use crate::config::VisConfig;
use crate::layout::{Layout, Point, Positions};
use crate::style::{classify_edge, classify_vertex, EdgeState, VertexState};

/// The step handed to a sink.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Zero-based step index.
    pub step: usize,
    pub total_steps: usize,
    /// Root of the traced run.
    pub root: &'a VertexId,
    pub snapshot: &'a Snapshot,
}

/// Receives every snapshot the controller moves to.
pub trait RenderSink {
    fn render(&mut self, frame: Frame<'_>);
}

/// Headless replay: nothing is drawn.
impl RenderSink for () {
    fn render(&mut self, _frame: Frame<'_>) {}
}

/// An edge with its state at the current step.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeView {
    pub edge: Edge,
    pub state: EdgeState,
}

/// A vertex with its state and position at the current step.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexView {
    pub id: VertexId,
    pub state: VertexState,
    pub position: Option<Point>,
}

/// Everything a renderer needs to draw one step.
pub struct Scene<'a, G> {
    pub graph: &'a G,
    pub positions: &'a Positions,
    pub frame: Frame<'a>,
}

impl<'a, G: WeightedGraph> Scene<'a, G> {
    pub fn snapshot(&self) -> &'a Snapshot {
        self.frame.snapshot
    }

    /// "Step 3/15" (one-based).
    pub fn headline(&self) -> String {
        format!("Step {}/{}", self.frame.step + 1, self.frame.total_steps)
    }

    pub fn message(&self) -> &'a str {
        &self.frame.snapshot.message
    }

    /// Running weight before the final step, total weight at it.
    pub fn weight_label(&self) -> String {
        let snapshot = self.frame.snapshot;
        if snapshot.is_final() {
            format!("Total MST weight: {}", snapshot.total_weight)
        } else {
            format!("Accumulated MST weight: {}", snapshot.total_weight)
        }
    }

    /// Every graph edge, classified.
    pub fn edges(&self) -> Vec<EdgeView> {
        self.graph
            .edges()
            .into_iter()
            .map(|edge| {
                let state = classify_edge(self.frame.snapshot, &edge.from, &edge.to);
                EdgeView { edge, state }
            })
            .collect()
    }

    /// Every graph vertex, classified and positioned.
    pub fn vertices(&self) -> Vec<VertexView> {
        self.graph
            .vertices()
            .map(|id| VertexView {
                state: classify_vertex(self.frame.root, self.frame.snapshot, id),
                position: self.positions.get(id),
                id: id.clone(),
            })
            .collect()
    }
}

/// Draws a scene.
pub trait Renderer {
    fn draw<G: WeightedGraph>(&mut self, scene: &Scene<'_, G>);
}

/// A graph with fixed vertex positions and a renderer, usable as a sink.
pub struct Canvas<'g, G, R> {
    graph: &'g G,
    positions: Positions,
    renderer: R,
}

impl<'g, G: WeightedGraph, R: Renderer> Canvas<'g, G, R> {
    /// Lay out `graph` once with the configured seed and scale.
    pub fn new<L: Layout>(graph: &'g G, layout: &L, config: &VisConfig, renderer: R) -> Self {
        let positions = layout
            .positions(graph, config.layout_seed)
            .scaled(config.layout_scale);
        tracing::debug!(vertices = positions.len(), seed = config.layout_seed, "layout computed");
        Self {
            graph,
            positions,
            renderer,
        }
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<G: WeightedGraph, R: Renderer> RenderSink for Canvas<'_, G, R> {
    fn render(&mut self, frame: Frame<'_>) {
        let scene = Scene {
            graph: self.graph,
            positions: &self.positions,
            frame,
        };
        self.renderer.draw(&scene);
    }
}

/// Plain-text renderer. Keeps one text frame per draw.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    frames: Vec<String>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Renderer for TextRenderer {
    fn draw<G: WeightedGraph>(&mut self, scene: &Scene<'_, G>) {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Prim's Algorithm - Minimum Spanning Tree");
        let _ = writeln!(out, "{}", scene.headline());
        let _ = writeln!(out, "{}", scene.message());
        let _ = writeln!(out, "{}", scene.weight_label());
        for vertex in scene.vertices() {
            let _ = writeln!(out, "  vertex {} {:?}", vertex.id, vertex.state);
        }
        for view in scene.edges() {
            let _ = writeln!(
                out,
                "  edge {}-{} ({}) {:?}",
                view.edge.from, view.edge.to, view.edge.weight, view.state
            );
        }
        self.frames.push(out);
    }
}
