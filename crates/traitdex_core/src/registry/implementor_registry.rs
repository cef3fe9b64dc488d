//! Deferred-registration implementor registry.
//!
//! # Responsibility
//! - Forward submitted indexes to the installed sink synchronously.
//! - Buffer the most recent index submitted before any sink exists.
//!
//! # Invariants
//! - At most one pending index is buffered; a later pre-sink submission
//!   overwrites it, never merges with it.
//! - Once a sink is installed the registry is `Ready` for its lifetime;
//!   there is no uninstall.
//! - `submit` and `install_sink` never fail, never block, never retry.

use crate::model::index::ImplementorIndex;
use log::{debug, info, warn};
use std::fmt::{Display, Formatter};

/// Consumer seam: receives a completed index for rendering.
///
/// Blanket-implemented for closures, so any `FnMut(ImplementorIndex)`
/// works as a sink without a wrapper type.
pub trait ImplementorSink {
    fn accept(&mut self, index: ImplementorIndex);
}

impl<F: FnMut(ImplementorIndex)> ImplementorSink for F {
    fn accept(&mut self, index: ImplementorIndex) {
        self(index)
    }
}

/// Registry lifecycle state.
///
/// Data files and the renderer load in unspecified relative order; the two
/// states are what make the handoff correct without any ordering guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// No sink yet; submissions buffer into the pending slot.
    Uninitialized,
    /// Sink installed; submissions forward synchronously. Terminal.
    Ready,
}

impl Display for RegistryState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Ready => write!(f, "ready"),
        }
    }
}

/// Handoff point between per-trait data files and the page sink.
///
/// Constructed once at page/process start and passed by reference to both
/// the data-file loader and the renderer initializer.
#[derive(Default)]
pub struct ImplementorRegistry {
    sink: Option<Box<dyn ImplementorSink>>,
    pending: Option<ImplementorIndex>,
}

impl ImplementorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands one index to the sink, or buffers it until a sink exists.
    ///
    /// Never fails. The index is forwarded uninspected: shape validation
    /// belongs to the data-file boundary, and malformed content surfaces in
    /// the sink, not here.
    pub fn submit(&mut self, index: ImplementorIndex) {
        match self.sink.as_mut() {
            Some(sink) => {
                debug!(
                    "event=index_forwarded module=registry status=ok libraries={}",
                    index.len()
                );
                sink.accept(index);
            }
            None => {
                if self.pending.is_some() {
                    warn!(
                        "event=pending_overwritten module=registry status=ok libraries={}",
                        index.len()
                    );
                } else {
                    debug!(
                        "event=index_buffered module=registry status=ok libraries={}",
                        index.len()
                    );
                }
                self.pending = Some(index);
            }
        }
    }

    /// Installs the render sink, draining any pending index into it.
    ///
    /// The drain happens synchronously within this call, so an index that
    /// arrived before the sink is observed exactly as if it had arrived
    /// after. A repeated install silently replaces the prior sink; every
    /// later `submit` goes to the replacement.
    pub fn install_sink(&mut self, sink: impl ImplementorSink + 'static) {
        if self.sink.is_some() {
            warn!("event=sink_replaced module=registry status=ok");
        } else {
            info!("event=sink_installed module=registry status=ok");
        }

        let mut sink: Box<dyn ImplementorSink> = Box::new(sink);
        if let Some(pending) = self.pending.take() {
            debug!(
                "event=pending_drained module=registry status=ok libraries={}",
                pending.len()
            );
            sink.accept(pending);
        }
        self.sink = Some(sink);
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> RegistryState {
        if self.sink.is_some() {
            RegistryState::Ready
        } else {
            RegistryState::Uninitialized
        }
    }

    /// Returns whether an index is waiting for a sink.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
