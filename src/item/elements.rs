// SPDX-License-Identifier: MPL-2.0

//! Interactive elements of an item: links, mentions and hashtags.
//!
//! The UI numbers elements so the user can pick one ("open link 3"). The
//! numbering always runs through links first, then mentions, then tags.

use crate::model::{Account, Link, MarkupParser, Mention, Tag};

/// Links, mentions and tags of one item, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Elements {
    pub links: Vec<Link>,
    pub mentions: Vec<Mention>,
    pub tags: Vec<Tag>,
}

/// One selectable element, borrowed from [`Elements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    Link(&'a Link),
    Mention(&'a Mention),
    Tag(&'a Tag),
}

impl<'a> Element<'a> {
    /// URL to open when the element is activated.
    pub fn target(&self) -> &'a str {
        match *self {
            Element::Link(link) => &link.url,
            Element::Mention(mention) => &mention.url,
            Element::Tag(tag) => &tag.url,
        }
    }

    /// Short human-readable label.
    pub fn label(&self) -> String {
        match self {
            Element::Link(link) if link.display_text.is_empty() => link.url.clone(),
            Element::Link(link) => link.display_text.clone(),
            Element::Mention(mention) => format!("@{}", mention.acct),
            Element::Tag(tag) => format!("#{}", tag.name),
        }
    }
}

impl Elements {
    pub const EMPTY: Elements = Elements {
        links: Vec::new(),
        mentions: Vec::new(),
        tags: Vec::new(),
    };

    /// Number of selectable elements across all three groups.
    pub fn total(&self) -> usize {
        self.links.len() + self.mentions.len() + self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The element at zero-based `index` in links → mentions → tags order.
    pub fn get(&self, index: usize) -> Option<Element<'_>> {
        let mut index = index;
        if index < self.links.len() {
            return Some(Element::Link(&self.links[index]));
        }
        index -= self.links.len();
        if index < self.mentions.len() {
            return Some(Element::Mention(&self.mentions[index]));
        }
        index -= self.mentions.len();
        self.tags.get(index).map(Element::Tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = Element<'_>> {
        self.links
            .iter()
            .map(Element::Link)
            .chain(self.mentions.iter().map(Element::Mention))
            .chain(self.tags.iter().map(Element::Tag))
    }

    /// Assemble elements from already-parsed links. Links pointing at a
    /// mentioned profile are dropped since the mention covers them.
    pub(crate) fn collect(links: Vec<Link>, mentions: &[Mention], tags: &[Tag]) -> Self {
        let links = links
            .into_iter()
            .filter(|link| !mentions.iter().any(|m| m.url == link.url))
            .collect();

        Self {
            links,
            mentions: mentions.to_vec(),
            tags: tags.to_vec(),
        }
    }
}

/// Extract the elements of a post.
///
/// `rich_text` is the body markup. The content warning only contributes
/// links when the post is marked `sensitive`.
pub fn extract(
    markup: &dyn MarkupParser,
    rich_text: &str,
    spoiler_text: &str,
    sensitive: bool,
    mentions: &[Mention],
    tags: &[Tag],
) -> Elements {
    extract_links(
        markup,
        markup.parse(rich_text).links,
        spoiler_text,
        sensitive,
        mentions,
        tags,
    )
}

/// Same as [`extract`] for a body the caller has already parsed.
pub(crate) fn extract_links(
    markup: &dyn MarkupParser,
    body_links: Vec<Link>,
    spoiler_text: &str,
    sensitive: bool,
    mentions: &[Mention],
    tags: &[Tag],
) -> Elements {
    let mut links = body_links;
    if sensitive {
        links.extend(markup.parse(spoiler_text).links);
    }
    Elements::collect(links, mentions, tags)
}

/// Extract the links of a profile: the note first, then each metadata
/// field value in order. Profiles carry no mentions or tags.
pub fn extract_profile(markup: &dyn MarkupParser, account: &Account) -> Elements {
    let mut links = markup.parse(&account.note).links;
    for field in &account.fields {
        links.extend(markup.parse(&field.value).links);
    }
    let elements = Elements::collect(links, &[], &[]);
    log::trace!(
        "profile {} has {} links",
        account.acct,
        elements.links.len()
    );
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, HtmlMarkup, ParsedMarkup};

    fn mention(acct: &str, url: &str) -> Mention {
        Mention {
            id: acct.to_string(),
            username: acct.to_string(),
            acct: acct.to_string(),
            url: url.to_string(),
        }
    }

    fn tag(name: &str) -> Tag {
        Tag {
            name: name.to_string(),
            url: format!("https://example.social/tags/{name}"),
        }
    }

    /// Every whitespace-separated word starting with `http` becomes a link.
    fn words_as_links(s: &str) -> ParsedMarkup {
        ParsedMarkup {
            text: s.to_string(),
            links: s
                .split_whitespace()
                .filter(|w| w.starts_with("http"))
                .map(|w| Link::new(w, w))
                .collect(),
        }
    }

    #[test]
    fn test_mention_links_removed() {
        let mentions = [mention("bob", "https://b.example/@bob")];
        let elements = extract(
            &words_as_links,
            "https://b.example/@bob https://a.example",
            "",
            false,
            &mentions,
            &[],
        );
        let urls: Vec<_> = elements.links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.example"]);
        assert_eq!(elements.mentions, mentions);
        assert_eq!(elements.total(), 2);
    }

    #[test]
    fn test_mention_dedup_with_duplicate_mention_urls() {
        // Two mentions share a URL; the matching link goes once, others stay
        let mentions = [
            mention("bob", "https://b.example/@bob"),
            mention("bob2", "https://b.example/@bob"),
        ];
        let elements = extract(
            &words_as_links,
            "https://b.example/@bob https://c.example https://d.example",
            "",
            false,
            &mentions,
            &[],
        );
        let urls: Vec<_> = elements.links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["https://c.example", "https://d.example"]);
        assert_eq!(elements.mentions.len(), 2);
        assert_eq!(elements.total(), 4);
    }

    #[test]
    fn test_spoiler_links_only_when_sensitive() {
        let with = extract(&words_as_links, "https://a.example", "https://cw.example", true, &[], &[]);
        assert_eq!(with.links.len(), 2);
        assert_eq!(with.links[1].url, "https://cw.example");

        let without =
            extract(&words_as_links, "https://a.example", "https://cw.example", false, &[], &[]);
        assert_eq!(without.links.len(), 1);
    }

    #[test]
    fn test_selection_order_links_mentions_tags() {
        let mentions = [mention("bob", "https://b.example/@bob")];
        let tags = [tag("rust"), tag("gtk")];
        let elements = extract(&words_as_links, "https://a.example", "", false, &mentions, &tags);

        assert_eq!(elements.total(), 4);
        assert!(matches!(elements.get(0), Some(Element::Link(_))));
        assert!(matches!(elements.get(1), Some(Element::Mention(_))));
        assert_eq!(elements.get(2).map(|e| e.label()), Some("#rust".to_string()));
        assert_eq!(elements.get(3).map(|e| e.label()), Some("#gtk".to_string()));
        assert!(elements.get(4).is_none());

        let targets: Vec<_> = elements.iter().map(|e| e.target().to_string()).collect();
        assert_eq!(
            targets,
            vec![
                "https://a.example",
                "https://b.example/@bob",
                "https://example.social/tags/rust",
                "https://example.social/tags/gtk",
            ]
        );
    }

    #[test]
    fn test_html_post_with_mention_anchor() {
        let html = r#"<p><span class="h-card"><a href="https://b.example/@bob" class="u-url mention">@<span>bob</span></a></span> look at <a href="https://news.example/a">news.example/a</a> <a href="https://example.social/tags/rust" class="mention hashtag">#<span>rust</span></a></p>"#;
        let mentions = [mention("bob@b.example", "https://b.example/@bob")];
        let tags = [tag("rust")];
        let elements = extract(&HtmlMarkup, html, "", false, &mentions, &tags);

        // Hashtag anchors are not mentions, so they stay as links
        let urls: Vec<_> = elements.links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["https://news.example/a", "https://example.social/tags/rust"]);
        assert_eq!(elements.get(2).map(|e| e.label()), Some("@bob@b.example".to_string()));
        assert_eq!(elements.total(), 4);
    }

    #[test]
    fn test_profile_note_then_fields() {
        let account = Account {
            acct: "ana".to_string(),
            note: r#"<p>Hi, see <a href="https://ana.example">ana.example</a></p>"#.to_string(),
            fields: vec![
                Field {
                    name: "Code".to_string(),
                    value: r#"<a href="https://git.example/ana">git.example/ana</a>"#.to_string(),
                    verified_at: None,
                },
                Field {
                    name: "Pronouns".to_string(),
                    value: "they/them".to_string(),
                    verified_at: None,
                },
            ],
            ..Default::default()
        };
        let elements = extract_profile(&HtmlMarkup, &account);
        let urls: Vec<_> = elements.links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["https://ana.example", "https://git.example/ana"]);
        assert!(elements.mentions.is_empty());
        assert!(elements.tags.is_empty());
        assert_eq!(elements.total(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(Elements::EMPTY.is_empty());
        assert_eq!(Elements::EMPTY.total(), 0);
        assert!(Elements::EMPTY.get(0).is_none());
        assert_eq!(Elements::default(), Elements::EMPTY);
    }

    #[test]
    fn test_link_label_falls_back_to_url() {
        let link = Link::new("https://a.example", "");
        assert_eq!(Element::Link(&link).label(), "https://a.example");
    }
}
