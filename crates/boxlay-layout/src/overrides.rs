// crates/boxlay-layout/src/overrides.rs
//! Side table of explicit sizes keyed by element id.
//!
//! Entries are never evicted. An element that goes away keeps its entry, so a
//! long-lived process that keeps minting ids grows the table without bound.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use boxlay_core::ElementId;
use glam::Vec2;
use tracing::trace;

static GLOBAL_OVERRIDES: OnceLock<Arc<SizeOverrides>> = OnceLock::new();

/// Explicit (width, height) overrides, readable from many threads at once.
#[derive(Debug, Default)]
pub struct SizeOverrides {
    entries: RwLock<HashMap<ElementId, Vec2>>,
}

impl SizeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide table shared by layouts built with `BoxLayout::new`.
    pub fn global() -> Arc<SizeOverrides> {
        GLOBAL_OVERRIDES
            .get_or_init(|| Arc::new(SizeOverrides::new()))
            .clone()
    }

    /// Records `size` for `id`, replacing any earlier value.
    /// Negative components are stored as zero.
    pub fn set(&self, id: ElementId, size: Vec2) {
        let size = size.max(Vec2::ZERO);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = entries.insert(id, size) {
            trace!("Size override for {} replaced: {:?} -> {:?}", id, previous, size);
        } else {
            trace!("Size override for {} set to {:?}", id, size);
        }
    }

    pub fn get(&self, id: ElementId) -> Option<Vec2> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn extend(&self, overrides: impl IntoIterator<Item = (ElementId, Vec2)>) {
        for (id, size) in overrides {
            self.set(id, size);
        }
    }
}

/// Sets an override in the process-wide table.
pub fn set_size_override(id: ElementId, size: Vec2) {
    SizeOverrides::global().set(id, size);
}

/// Reads an override from the process-wide table.
pub fn size_override(id: ElementId) -> Option<Vec2> {
    SizeOverrides::global().get(id)
}
