//! Cursor-based replay over a recorded trace.

use std::ops::ControlFlow;
use std::sync::Arc;

use mst_trace::{Snapshot, Trace};
use serde::{Deserialize, Serialize};

use crate::error::{ReplayError, Result};
use crate::render::{Frame, RenderSink};

/// Lifecycle of a replay session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplayState {
    /// Accepting navigation.
    Active,
    /// Exited; every operation fails with [`ReplayError::SessionClosed`].
    Closed,
}

/// Discrete input delivered by the hosting session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    Advance,
    Back,
    Home,
    End,
    Quit,
}

/// Replay controller for a Prim trace.
///
/// Owns a shared, read-only trace and a cursor that always points at a valid
/// snapshot. Every cursor move hands the new snapshot to the render sink.
pub struct ReplayController<S: RenderSink = ()> {
    trace: Arc<Trace>,
    cursor: usize,
    state: ReplayState,
    sink: S,
}

impl ReplayController<()> {
    /// Create a controller with no renderer attached.
    pub fn new(trace: impl Into<Arc<Trace>>) -> Self {
        Self::with_sink(trace, ())
    }
}

impl<S: RenderSink> ReplayController<S> {
    /// Create a controller that signals `sink` on every cursor move.
    ///
    /// The cursor starts at step 0; call [`redraw`](Self::redraw) to draw it.
    pub fn with_sink(trace: impl Into<Arc<Trace>>, sink: S) -> Self {
        Self {
            trace: trace.into(),
            cursor: 0,
            state: ReplayState::Active,
            sink,
        }
    }

    /// Get the lifecycle state.
    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == ReplayState::Closed
    }

    /// The attached render sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Detach the render sink, ending the session.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn ensure_active(&self) -> Result<()> {
        match self.state {
            ReplayState::Active => Ok(()),
            ReplayState::Closed => Err(ReplayError::SessionClosed),
        }
    }

    fn last_index(&self) -> usize {
        self.trace.len() - 1
    }

    /// Move the cursor and signal the sink.
    fn show(&mut self, index: usize) -> &Snapshot {
        self.cursor = index;
        let snapshot = &self.trace.snapshots()[index];
        self.sink.render(Frame {
            step: index,
            total_steps: self.trace.len(),
            root: self.trace.root(),
            snapshot,
        });
        snapshot
    }

    /// The shared trace, for additional readers.
    pub fn trace(&self) -> Result<Arc<Trace>> {
        self.ensure_active()?;
        Ok(Arc::clone(&self.trace))
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> Result<usize> {
        self.ensure_active()?;
        Ok(self.cursor)
    }

    /// Get the number of steps in the trace.
    pub fn total_steps(&self) -> Result<usize> {
        self.ensure_active()?;
        Ok(self.trace.len())
    }

    /// Snapshot under the cursor. No side effects.
    pub fn current_snapshot(&self) -> Result<&Snapshot> {
        self.ensure_active()?;
        Ok(&self.trace.snapshots()[self.cursor])
    }

    /// Snapshot at `index` without moving the cursor. Does not clamp.
    pub fn snapshot_at(&self, index: usize) -> Result<&Snapshot> {
        self.ensure_active()?;
        self.trace.get(index).ok_or(ReplayError::IndexOutOfRange {
            index,
            len: self.trace.len(),
        })
    }

    /// Step forward one snapshot.
    ///
    /// Returns `None` without signalling the sink when already at the end.
    pub fn step_forward(&mut self) -> Result<Option<&Snapshot>> {
        self.ensure_active()?;
        if self.cursor >= self.last_index() {
            return Ok(None);
        }
        tracing::trace!(cursor = self.cursor + 1, "step forward");
        Ok(Some(self.show(self.cursor + 1)))
    }

    /// Step backward one snapshot.
    ///
    /// Returns `None` without signalling the sink when already at the start.
    pub fn step_backward(&mut self) -> Result<Option<&Snapshot>> {
        self.ensure_active()?;
        if self.cursor == 0 {
            return Ok(None);
        }
        tracing::trace!(cursor = self.cursor - 1, "step backward");
        Ok(Some(self.show(self.cursor - 1)))
    }

    /// Return to the first snapshot.
    pub fn step_to_start(&mut self) -> Result<&Snapshot> {
        self.jump_to(0)
    }

    /// Skip to the final snapshot.
    pub fn step_to_end(&mut self) -> Result<&Snapshot> {
        self.ensure_active()?;
        Ok(self.show(self.last_index()))
    }

    /// Jump to `index`, clamped into the trace.
    pub fn jump_to(&mut self, index: i64) -> Result<&Snapshot> {
        self.ensure_active()?;
        let last = self.last_index();
        let clamped = usize::try_from(index.max(0)).map_or(last, |i| i.min(last));
        tracing::debug!(requested = index, cursor = clamped, "jump");
        Ok(self.show(clamped))
    }

    /// Signal the sink with the current snapshot again.
    pub fn redraw(&mut self) -> Result<&Snapshot> {
        self.ensure_active()?;
        Ok(self.show(self.cursor))
    }

    /// Apply an input event. Returns `Break` once the session has exited.
    pub fn handle(&mut self, event: InputEvent) -> Result<ControlFlow<()>> {
        match event {
            InputEvent::Advance => {
                self.step_forward()?;
            }
            InputEvent::Back => {
                self.step_backward()?;
            }
            InputEvent::Home => {
                self.step_to_start()?;
            }
            InputEvent::End => {
                self.step_to_end()?;
            }
            InputEvent::Quit => {
                self.exit()?;
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Close the session. Irreversible.
    pub fn exit(&mut self) -> Result<()> {
        self.ensure_active()?;
        self.state = ReplayState::Closed;
        tracing::info!(cursor = self.cursor, steps = self.trace.len(), "replay session closed");
        Ok(())
    }

    /// Calculate progress through the trace (0.0 - 1.0).
    pub fn progress(&self) -> Result<f64> {
        self.ensure_active()?;
        let last = self.last_index();
        Ok(if last == 0 {
            1.0
        } else {
            self.cursor as f64 / last as f64
        })
    }

    /// Summary for a status line or a remote frontend.
    pub fn status(&self) -> Result<ReplayStatus> {
        Ok(ReplayStatus {
            cursor: self.cursor()?,
            total_steps: self.trace.len(),
            state: self.state,
            progress: self.progress()?,
            at_end: self.cursor == self.last_index(),
        })
    }
}

/// Replay position summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStatus {
    pub cursor: usize,
    pub total_steps: usize,
    pub state: ReplayState,
    pub progress: f64,
    pub at_end: bool,
}
