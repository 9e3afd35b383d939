//! Stats command - Count images by tag state

use anyhow::Result;

use super::utils;
use crate::config::Config;
use crate::tags::{Session, TagState};

/// Tag counts for the images in a folder
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Images found in the folder
    pub images: usize,

    pub public: usize,

    pub private: usize,

    pub untagged: usize,

    /// Records in the preferences file, including ones for images no longer listed
    pub records: usize,
}

/// Execute the stats command
pub fn execute(config: &Config) -> Result<Option<String>> {
    let Some(session) = utils::open_session(config)? else {
        return Ok(None);
    };
    Ok(Some(format_stats(&stats(&session))))
}

/// Count tag states across the session
pub fn stats(session: &Session) -> Stats {
    let mut stats = Stats {
        images: session.image_count(),
        records: session.store().records().count(),
        ..Stats::default()
    };

    for path in session.images() {
        match TagState::of(session.store(), path) {
            TagState::Public => stats.public += 1,
            TagState::Private => stats.private += 1,
            TagState::Untagged => stats.untagged += 1,
        }
    }

    stats
}

/// Format stats for display
pub fn format_stats(stats: &Stats) -> String {
    let mut lines = vec![];

    lines.push(format!("Images: {}", stats.images));
    lines.push(format!(
        "  {}: {}",
        utils::format_state(TagState::Public),
        stats.public
    ));
    lines.push(format!(
        "  {}: {}",
        utils::format_state(TagState::Private),
        stats.private
    ));
    lines.push(format!(
        "  {}: {}",
        utils::format_state(TagState::Untagged),
        stats.untagged
    ));
    lines.push(String::new()); // blank line
    lines.push(format!("Saved records: {}", stats.records));

    lines.join("\n")
}
