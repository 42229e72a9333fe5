// SPDX-License-Identifier: MPL-2.0

pub mod markup;
mod types;

pub use markup::{HtmlMarkup, Link, MarkupFormat, MarkupParser, ParsedMarkup, PlainMarkup};
pub use types::{
    Account, Field, List, Mention, Notification, NotificationKind, Relationship, Status, Tag, User,
};
