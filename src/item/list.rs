// SPDX-License-Identifier: MPL-2.0

use crate::ident::IdAllocator;
use crate::model::List;
use std::sync::Arc;

/// A user-curated list in the list overview.
#[derive(Debug, Clone)]
pub struct ListItem {
    id: u64,
    list: Arc<List>,
}

impl ListItem {
    pub fn new(ids: &IdAllocator, list: Arc<List>) -> Self {
        Self {
            id: ids.next_id(),
            list,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn list(&self) -> &Arc<List> {
        &self.list
    }
}
