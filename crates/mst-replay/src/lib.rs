//! MST Replay
//!
//! Step-by-step replay of a traced Prim run.
//!
//! # Architecture
//!
//! - **Replay**: a cursor over a shared, read-only [`Trace`](mst_trace::Trace)
//! - **Style**: classifies edges and vertices at a snapshot
//! - **Layout**: fixed vertex positions, computed once per canvas
//! - **Render**: sinks and renderers signalled on every cursor move
//!
//! # Usage
//!
//! ```
//! use mst_graph::Graph;
//! use mst_replay::{Canvas, CircularLayout, ReplayController, TextRenderer, VisConfig};
//!
//! let graph = Graph::from_edges([("A", "B", 1.0), ("B", "C", 2.0)]).unwrap();
//! let trace = mst_trace::build_trace(&graph, "A").unwrap();
//!
//! let canvas = Canvas::new(&graph, &CircularLayout, &VisConfig::default(), TextRenderer::new());
//! let mut replay = ReplayController::with_sink(trace, canvas);
//! replay.step_to_end().unwrap();
//!
//! let frame = replay.sink().renderer().last_frame().unwrap();
//! assert!(frame.contains("Total MST weight: 3"));
//! ```

mod config;
mod error;
mod layout;
pub mod logging;
mod render;
mod replay;
mod style;

pub use config::VisConfig;
pub use error::{ConfigError, ReplayError, Result};
pub use layout::{CircularLayout, Layout, Point, Positions, RandomLayout};
pub use render::{Canvas, EdgeView, Frame, RenderSink, Renderer, Scene, TextRenderer, VertexView};
pub use replay::{InputEvent, ReplayController, ReplayState, ReplayStatus};
pub use style::{classify_edge, classify_vertex, EdgeState, VertexState};

#[cfg(test)]
mod tests {
    use super::*;
    use mst_graph::Graph;
    use mst_trace::build_trace;

    fn example() -> Graph {
        Graph::from_edges([
            ("A", "B", 4.0),
            ("A", "C", 2.0),
            ("B", "C", 1.0),
            ("B", "D", 5.0),
            ("C", "D", 8.0),
            ("C", "E", 10.0),
            ("D", "E", 2.0),
            ("D", "F", 6.0),
            ("E", "F", 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn replay_walks_whole_trace() {
        let graph = example();
        let trace = build_trace(&graph, "A").unwrap();
        let len = trace.len();
        let mut replay = ReplayController::new(trace);

        let mut seen = 1;
        while replay.step_forward().unwrap().is_some() {
            seen += 1;
        }
        assert_eq!(seen, len);
        assert_eq!(replay.current_snapshot().unwrap().total_weight, 13.0);
    }

    #[test]
    fn replay_can_seek() {
        let graph = example();
        let trace = build_trace(&graph, "A").unwrap();
        let len = trace.len();
        let mut replay = ReplayController::new(trace);

        // Seek to middle
        replay.jump_to((len / 2) as i64).unwrap();
        assert_eq!(replay.cursor().unwrap(), len / 2);

        // Can't seek past end
        replay.jump_to(1000).unwrap();
        assert_eq!(replay.cursor().unwrap(), len - 1);

        // Can't seek before start
        replay.jump_to(-1).unwrap();
        assert_eq!(replay.cursor().unwrap(), 0);
    }

    #[test]
    fn configured_canvas_scales_layout() {
        let graph = example();
        let config = VisConfig::from_json_str(r#"{"layout_seed": 1, "layout_scale": 10.0}"#).unwrap();
        let canvas = Canvas::new(&graph, &RandomLayout, &config, TextRenderer::new());
        let unscaled = RandomLayout.positions(&graph, 1);

        let a = "A".into();
        let scaled = canvas.positions().get(&a).unwrap();
        let base = unscaled.get(&a).unwrap();
        assert_eq!(scaled, Point::new(base.x * 10.0, base.y * 10.0));
    }
}
