//! List command - Show images in review order with their tags

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};

use super::utils;
use crate::config::Config;
use crate::tags::{Session, TagState};

/// Options for the list command
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Only show images in this state
    pub state: Option<TagState>,
}

/// One row of the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based position in the review order
    pub position: usize,
    pub image_path: String,
    pub state: TagState,
}

/// Execute the list command
pub fn execute(config: &Config, options: &ListOptions) -> Result<Option<String>> {
    let Some(session) = utils::open_session(config)? else {
        return Ok(None);
    };

    let entries = entries(&session, options);
    if entries.is_empty() {
        return Ok(Some("No images match.".to_string()));
    }

    Ok(Some(format_table(&entries)))
}

/// Review order, filtered by `options`
pub fn entries(session: &Session, options: &ListOptions) -> Vec<Entry> {
    session
        .images()
        .iter()
        .enumerate()
        .map(|(i, path)| Entry {
            position: i + 1,
            image_path: path.clone(),
            state: TagState::of(session.store(), path),
        })
        .filter(|e| options.state.map_or(true, |s| s == e.state))
        .collect()
}

fn format_table(entries: &[Entry]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Image", "Tag"]);

    for entry in entries {
        let color = match entry.state {
            TagState::Public => Color::Green,
            TagState::Private => Color::Red,
            TagState::Untagged => Color::DarkGrey,
        };
        table.add_row(vec![
            Cell::new(entry.position),
            Cell::new(&entry.image_path),
            Cell::new(entry.state).fg(color),
        ]);
    }

    table.to_string()
}
