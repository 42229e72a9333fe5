// SPDX-License-Identifier: MPL-2.0

//! Item identity.
//!
//! Every item built during a run gets a fresh id from one shared
//! [`IdAllocator`]. Ids start at 1 and are never handed out twice.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id source shared by everything that builds items.
///
/// Wrap it in an `Arc` to hand it to several fetch tasks; the counter is a
/// single atomic so concurrent callers never see the same value.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> u64 {
        let id = self.last.fetch_add(1, Ordering::SeqCst) + 1;
        log::trace!("allocated item id {id}");
        id
    }

    /// The most recently allocated id, or 0 if none has been handed out.
    pub fn last_id(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}
