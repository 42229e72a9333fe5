// SPDX-License-Identifier: MPL-2.0

//! Feed snapshots stored as JSON, for inspecting how items come out.
//!
//! A fixture is a saved set of API responses: filters plus the statuses,
//! accounts, notifications and lists of one view.

use crate::filter::FilterRule;
use crate::item::{Item, ItemBuilder};
use crate::model::{Account, List, Notification, Status, User};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid fixture: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub filters: Vec<FilterRule>,
    #[serde(default)]
    pub statuses: Vec<Arc<Status>>,
    /// Ids of statuses pinned to the profile being viewed
    #[serde(default)]
    pub pinned: Vec<String>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub notifications: Vec<Arc<Notification>>,
    #[serde(default)]
    pub lists: Vec<Arc<List>>,
}

impl Fixture {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build items in fixture order: statuses, accounts, notifications,
    /// lists. Statuses are filtered in `context`; notifications always use
    /// the notifications context.
    pub fn build_items(&self, builder: &ItemBuilder<'_>, rules: &[FilterRule], context: &str) -> Vec<Item> {
        let mut items = Vec::with_capacity(
            self.statuses.len() + self.accounts.len() + self.notifications.len() + self.lists.len(),
        );

        for status in &self.statuses {
            let pinned = self.pinned.contains(&status.id);
            items.push(builder.status(Some(Arc::clone(status)), rules, context, pinned));
        }
        for account in &self.accounts {
            items.push(builder.user(Arc::new(User::new(account.clone())), false));
        }
        for notification in &self.notifications {
            let actor = Arc::new(User::new(notification.account.clone()));
            items.push(builder.notification(Arc::clone(notification), actor, rules));
        }
        for list in &self.lists {
            items.push(builder.list(Arc::clone(list)));
        }

        log::debug!("built {} items from fixture", items.len());
        items
    }
}
