//! Feed document rendering.
//!
//! Takes validated, URL-resolved items plus the root record and produces the
//! RSS 2.0 XML as a `String`. The channel is built with the `rss` crate's
//! builders and run through its validator before being returned, so a
//! structurally broken feed never reaches disk. Writing the file is the
//! caller's job; this module performs no I/O.
//!
//! ## Ordering
//!
//! Items are emitted newest-first by `pubDate`. The sort is stable over
//! discovery order (directories in traversal order, records in file order),
//! which makes ties well-defined and output byte-identical across runs on an
//! unchanged tree.

use crate::records::RootRecord;
use chrono::{DateTime, FixedOffset};
use rss::validation::Validate;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("feed validation failed: {0}")]
    Validation(#[from] rss::validation::ValidationError),
}

/// One fully resolved entry, ready to serialize.
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub title: String,
    /// Absolute public URL, already derived from the item's directory.
    pub link: String,
    pub description: String,
    /// Effective author: the item's own, else the root's default, else none.
    pub author: Option<String>,
    pub pub_date: DateTime<FixedOffset>,
}

/// Render the complete feed document.
///
/// `items` is expected in discovery order; this function applies the
/// newest-first sort itself so every caller gets the same ordering rule.
pub fn render(root: &RootRecord, items: &[FeedItem]) -> Result<String, RenderError> {
    let mut ordered: Vec<&FeedItem> = items.iter().collect();
    // stable: equal dates keep discovery order
    ordered.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));

    let rss_items: Vec<rss::Item> = ordered.iter().map(|item| to_rss_item(item)).collect();

    let channel = ChannelBuilder::default()
        .title(&root.title)
        .link(&root.link)
        .description(&root.description)
        .generator("feedwright".to_string())
        .items(rss_items)
        .build();

    channel.validate()?;
    Ok(channel.to_string())
}

fn to_rss_item(item: &FeedItem) -> rss::Item {
    ItemBuilder::default()
        .title(item.title.clone())
        .link(Some(item.link.clone()))
        .guid(
            GuidBuilder::default()
                .permalink(true)
                .value(item.link.clone())
                .build(),
        )
        .description(Some(unwrap_cdata(&item.description).to_string()))
        .pub_date(item.pub_date.to_rfc2822())
        .author(item.author.clone())
        .build()
}

/// Strip a `<![CDATA[...]]>` wrapper the `img` command may have added.
///
/// The serializer entity-escapes description text itself, so the inner HTML
/// goes in bare; leaving the wrapper would double-wrap it into literal
/// markup in feed readers.
fn unwrap_cdata(description: &str) -> &str {
    description
        .strip_prefix("<![CDATA[")
        .and_then(|rest| rest.strip_suffix("]]>"))
        .unwrap_or(description)
}
