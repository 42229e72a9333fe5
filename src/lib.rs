// SPDX-License-Identifier: MPL-2.0

//! Feed items and keyword filters for fediverse clients.
//!
//! Fetched posts, accounts, notifications and lists are wrapped in
//! [`Item`]s. Building an item assigns it a process-unique id, runs the
//! user's keyword filters over posts and collects the links, mentions and
//! tags the user can select. Fetching and rendering live elsewhere.

pub mod config;
pub mod filter;
pub mod fixture;
pub mod ident;
pub mod item;
pub mod model;
pub mod opener;
pub mod settings;

pub use filter::{FilterResult, FilterRule};
pub use ident::IdAllocator;
pub use item::{Element, Elements, Item, ItemBuilder, ItemKind, Raw};
pub use model::{HtmlMarkup, Link, MarkupFormat, MarkupParser, ParsedMarkup, PlainMarkup};
pub use settings::Settings;
