// SPDX-License-Identifier: MPL-2.0

use super::status::StatusItem;
use super::user::UserItem;
use crate::config::context;
use crate::filter::FilterRule;
use crate::ident::IdAllocator;
use crate::model::{MarkupParser, Notification, User};
use std::sync::Arc;

/// A notification, wrapping an item for the post it is about and one for
/// the account that triggered it.
///
/// The nested status item is always present; for notifications without a
/// post (follows, follow requests) it wraps nothing.
#[derive(Debug, Clone)]
pub struct NotificationItem {
    id: u64,
    notification: Arc<Notification>,
    show_spoiler: bool,
    status: StatusItem,
    user: UserItem,
}

/// Everything a notification item wraps, handed out by `Item::raw`.
#[derive(Debug, Clone, Copy)]
pub struct NotificationData<'a> {
    pub notification: &'a Notification,
    pub status: &'a StatusItem,
    pub user: &'a UserItem,
}

impl NotificationItem {
    /// Build the nested items first, then the notification itself, so the
    /// notification's id is always the newest of the three.
    pub fn new(
        ids: &IdAllocator,
        markup: &dyn MarkupParser,
        notification: Arc<Notification>,
        actor: Arc<User>,
        rules: &[FilterRule],
    ) -> Self {
        let status = StatusItem::new(
            ids,
            markup,
            notification.status.clone(),
            rules,
            context::NOTIFICATIONS,
            false,
        );
        let user = UserItem::new(ids, markup, actor, false);

        Self {
            id: ids.next_id(),
            notification,
            show_spoiler: false,
            status,
            user,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn notification(&self) -> &Arc<Notification> {
        &self.notification
    }

    /// The item for the post the notification is about.
    pub fn status(&self) -> &StatusItem {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusItem {
        &mut self.status
    }

    /// The item for the account that triggered the notification.
    pub fn user(&self) -> &UserItem {
        &self.user
    }

    pub fn toggle_spoiler(&mut self) {
        self.show_spoiler = !self.show_spoiler;
    }

    pub fn spoiler_revealed(&self) -> bool {
        self.show_spoiler
    }

    pub fn data(&self) -> NotificationData<'_> {
        NotificationData {
            notification: &self.notification,
            status: &self.status,
            user: &self.user,
        }
    }
}
