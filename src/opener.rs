// SPDX-License-Identifier: MPL-2.0

//! Opening an item's links, mentions and tags in the browser.

use crate::item::{Elements, Item};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenError {
    #[error("item {item} has no element {index}")]
    NoSuchElement { item: u64, index: usize },
    #[error("element {index} has no target url")]
    NoTarget { index: usize },
    #[error("failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
}

/// Elements the user can pick from on this item. A notification shows the
/// post it is about, so its post's elements are used.
pub fn selectable(item: &Item) -> &Elements {
    match item {
        Item::Notification(n) => n.status().elements(),
        other => other.elements(),
    }
}

/// URL of the element at zero-based `index`.
pub fn resolve_target(item: &Item, index: usize) -> Result<&str, OpenError> {
    let element = selectable(item)
        .get(index)
        .ok_or(OpenError::NoSuchElement {
            item: item.id(),
            index,
        })?;

    let target = element.target();
    if target.is_empty() {
        return Err(OpenError::NoTarget { index });
    }
    Ok(target)
}

/// Open the element at `index` with the system's default handler and return
/// the URL that was opened.
pub fn open_element(item: &Item, index: usize) -> Result<String, OpenError> {
    let target = resolve_target(item, index)?;
    log::info!("opening {target}");
    open::that(target)?;
    Ok(target.to_string())
}
