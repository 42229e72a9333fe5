// SPDX-License-Identifier: MPL-2.0

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Decoupled from any client library's representation so we own the API
/// boundary. Field names follow the Mastodon REST API so fixtures and
/// responses deserialize directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    /// `user` for local accounts, `user@domain` for remote ones
    pub acct: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub url: String,
    /// Profile "about" text, as HTML
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub locked: bool,
}

/// A profile metadata row. `value` is HTML and may hold a link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub verified_at: Option<String>,
}

/// How the signed-in user relates to another account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,
    #[serde(default)]
    pub following: bool,
    #[serde(default)]
    pub followed_by: bool,
    #[serde(default)]
    pub blocking: bool,
    #[serde(default)]
    pub muting: bool,
    #[serde(default)]
    pub requested: bool,
}

/// An account together with the viewer's relationship to it, if fetched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub account: Account,
    #[serde(default)]
    pub relationship: Option<Relationship>,
}

impl User {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            relationship: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub id: String,
    pub username: String,
    pub acct: String,
    /// Profile URL of the mentioned account
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub url: Option<String>,
    pub account: Account,
    /// Body, as HTML
    #[serde(default)]
    pub content: String,
    /// Content warning / summary shown in front of the body
    #[serde(default)]
    pub spoiler_text: String,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub visibility: String,
    /// The boosted post when this status is a boost
    #[serde(default)]
    pub reblog: Option<Box<Status>>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Status {
    /// The post whose content is actually shown: the boosted one for a
    /// boost, otherwise this one.
    pub fn status_or_reblog(&self) -> &Status {
        self.reblog.as_deref().unwrap_or(self)
    }

    pub fn is_reblog(&self) -> bool {
        self.reblog.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Mention,
    Reblog,
    Favourite,
    Follow,
    FollowRequest,
    Poll,
    Status,
    Update,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub created_at: String,
    /// Who triggered the notification
    pub account: Account,
    /// The post it is about; follows have none
    #[serde(default)]
    pub status: Option<Arc<Status>>,
}

/// A user-curated list of accounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub replies_policy: Option<String>,
}
