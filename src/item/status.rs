// SPDX-License-Identifier: MPL-2.0

use super::elements::{Elements, extract_links};
use crate::filter::{self, FilterResult, FilterRule};
use crate::ident::IdAllocator;
use crate::model::{MarkupParser, Status};
use std::sync::Arc;

/// A post in a timeline.
///
/// Filtering and element extraction run once, against the boosted post when
/// the status is a boost. A missing status is allowed (notifications without
/// a post) and behaves as an empty, unfiltered post.
#[derive(Debug, Clone)]
pub struct StatusItem {
    id: u64,
    status: Option<Arc<Status>>,
    show_spoiler: bool,
    filtered: FilterResult,
    pinned: bool,
    elements: Elements,
}

impl StatusItem {
    pub fn new(
        ids: &IdAllocator,
        markup: &dyn MarkupParser,
        status: Option<Arc<Status>>,
        rules: &[FilterRule],
        context: &str,
        pinned: bool,
    ) -> Self {
        let (filtered, elements) = match status.as_deref() {
            Some(status) => Self::inspect(markup, status, rules, context),
            None => (FilterResult::default(), Elements::default()),
        };

        Self {
            id: ids.next_id(),
            status,
            show_spoiler: false,
            filtered,
            pinned,
            elements,
        }
    }

    fn inspect(
        markup: &dyn MarkupParser,
        status: &Status,
        rules: &[FilterRule],
        context: &str,
    ) -> (FilterResult, Elements) {
        let shown = status.status_or_reblog();
        let body = markup.parse(&shown.content);

        // Content warnings are plain text; only the body carries markup
        let filtered = filter::evaluate(
            &body.text,
            &shown.spoiler_text,
            shown.sensitive,
            rules,
            context,
        );
        if filtered.matched {
            log::debug!(
                "status {} hidden in {} by \"{}\"",
                status.id,
                context,
                filtered.matched_phrase
            );
        }

        let elements = extract_links(
            markup,
            body.links,
            &shown.spoiler_text,
            shown.sensitive,
            &shown.mentions,
            &shown.tags,
        );

        (filtered, elements)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// The status as fetched, boost wrapper included.
    pub fn status(&self) -> Option<&Arc<Status>> {
        self.status.as_ref()
    }

    pub fn toggle_spoiler(&mut self) {
        self.show_spoiler = !self.show_spoiler;
    }

    pub fn spoiler_revealed(&self) -> bool {
        self.show_spoiler
    }

    pub fn filter_result(&self) -> &FilterResult {
        &self.filtered
    }

    pub fn pinned(&self) -> bool {
        self.pinned
    }

    pub fn elements(&self) -> &Elements {
        &self.elements
    }
}
