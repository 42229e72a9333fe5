// SPDX-License-Identifier: MPL-2.0

use super::elements::{self, Elements};
use crate::ident::IdAllocator;
use crate::model::{MarkupParser, User};
use std::sync::Arc;

/// An account, either as a row in a list of accounts or as the subject of a
/// profile page. The two only differ in how the item is classified.
#[derive(Debug, Clone)]
pub struct UserItem {
    id: u64,
    user: Arc<User>,
    profile: bool,
    elements: Elements,
}

impl UserItem {
    pub fn new(ids: &IdAllocator, markup: &dyn MarkupParser, user: Arc<User>, profile: bool) -> Self {
        let elements = elements::extract_profile(markup, &user.account);
        Self {
            id: ids.next_id(),
            user,
            profile,
            elements,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn user(&self) -> &Arc<User> {
        &self.user
    }

    pub fn is_profile(&self) -> bool {
        self.profile
    }

    pub fn elements(&self) -> &Elements {
        &self.elements
    }
}
