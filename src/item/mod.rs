// SPDX-License-Identifier: MPL-2.0

//! Feed items.
//!
//! Everything the UI shows in a feed (posts, accounts, notifications, lists)
//! is wrapped in an [`Item`]. Items get a unique id when built, know whether
//! a filter hides them, and expose the links, mentions and tags the user can
//! select. Build them through an [`ItemBuilder`] so they all draw ids from
//! the same allocator.

pub mod elements;
mod list;
mod notification;
mod status;
mod user;

pub use elements::{Element, Elements, extract, extract_profile};
pub use list::ListItem;
pub use notification::{NotificationData, NotificationItem};
pub use status::StatusItem;
pub use user::UserItem;

use crate::filter::{FilterResult, FilterRule};
use crate::ident::IdAllocator;
use crate::model::{List, MarkupParser, Notification, Status, User};
use std::fmt;
use std::sync::Arc;

static UNFILTERED: FilterResult = FilterResult {
    matched: false,
    matched_phrase: String::new(),
};

static NO_ELEMENTS: Elements = Elements::EMPTY;

/// What an item is, as far as the UI is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Status,
    User,
    Profile,
    Notification,
    List,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemKind::Status => "status",
            ItemKind::User => "user",
            ItemKind::Profile => "profile",
            ItemKind::Notification => "notification",
            ItemKind::List => "list",
        };
        f.pad(name)
    }
}

/// The entry an item wraps.
#[derive(Debug, Clone, Copy)]
pub enum Raw<'a> {
    Status(Option<&'a Status>),
    User(&'a User),
    Notification(NotificationData<'a>),
    List(&'a List),
}

#[derive(Debug, Clone)]
pub enum Item {
    Status(StatusItem),
    User(UserItem),
    Notification(NotificationItem),
    List(ListItem),
}

impl Item {
    pub fn id(&self) -> u64 {
        match self {
            Item::Status(s) => s.id(),
            Item::User(u) => u.id(),
            Item::Notification(n) => n.id(),
            Item::List(l) => l.id(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Status(_) => ItemKind::Status,
            Item::User(u) if u.is_profile() => ItemKind::Profile,
            Item::User(_) => ItemKind::User,
            Item::Notification(_) => ItemKind::Notification,
            Item::List(_) => ItemKind::List,
        }
    }

    /// Flip the content warning. Accounts and lists have none to flip.
    pub fn toggle_spoiler(&mut self) {
        match self {
            Item::Status(s) => s.toggle_spoiler(),
            Item::Notification(n) => n.toggle_spoiler(),
            Item::User(_) | Item::List(_) => {}
        }
    }

    pub fn spoiler_revealed(&self) -> bool {
        match self {
            Item::Status(s) => s.spoiler_revealed(),
            Item::Notification(n) => n.spoiler_revealed(),
            Item::User(_) => false,
            Item::List(_) => true,
        }
    }

    pub fn raw(&self) -> Raw<'_> {
        match self {
            Item::Status(s) => Raw::Status(s.status().map(Arc::as_ref)),
            Item::User(u) => Raw::User(u.user()),
            Item::Notification(n) => Raw::Notification(n.data()),
            Item::List(l) => Raw::List(l.list()),
        }
    }

    /// Selectable elements. Notifications report none of their own; use the
    /// nested status item for those.
    pub fn elements(&self) -> &Elements {
        match self {
            Item::Status(s) => s.elements(),
            Item::User(u) => u.elements(),
            Item::Notification(_) | Item::List(_) => &NO_ELEMENTS,
        }
    }

    pub fn filter_result(&self) -> &FilterResult {
        match self {
            Item::Status(s) => s.filter_result(),
            _ => &UNFILTERED,
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.filter_result().matched
    }

    pub fn pinned(&self) -> bool {
        match self {
            Item::Status(s) => s.pinned(),
            _ => false,
        }
    }
}

impl From<StatusItem> for Item {
    fn from(item: StatusItem) -> Self {
        Item::Status(item)
    }
}

impl From<UserItem> for Item {
    fn from(item: UserItem) -> Self {
        Item::User(item)
    }
}

impl From<NotificationItem> for Item {
    fn from(item: NotificationItem) -> Self {
        Item::Notification(item)
    }
}

impl From<ListItem> for Item {
    fn from(item: ListItem) -> Self {
        Item::List(item)
    }
}

/// Builds items from fetched entries, sharing one id allocator and one
/// markup parser.
#[derive(Clone, Copy)]
pub struct ItemBuilder<'a> {
    ids: &'a IdAllocator,
    markup: &'a dyn MarkupParser,
}

impl<'a> ItemBuilder<'a> {
    pub fn new(ids: &'a IdAllocator, markup: &'a dyn MarkupParser) -> Self {
        Self { ids, markup }
    }

    /// A post seen in `context`, filtered by `rules`.
    pub fn status(
        &self,
        status: Option<Arc<Status>>,
        rules: &[FilterRule],
        context: &str,
        pinned: bool,
    ) -> Item {
        StatusItem::new(self.ids, self.markup, status, rules, context, pinned).into()
    }

    pub fn user(&self, user: Arc<User>, profile: bool) -> Item {
        UserItem::new(self.ids, self.markup, user, profile).into()
    }

    pub fn notification(
        &self,
        notification: Arc<Notification>,
        actor: Arc<User>,
        rules: &[FilterRule],
    ) -> Item {
        NotificationItem::new(self.ids, self.markup, notification, actor, rules).into()
    }

    pub fn list(&self, list: Arc<List>) -> Item {
        ListItem::new(self.ids, list).into()
    }
}
