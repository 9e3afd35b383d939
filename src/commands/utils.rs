//! Shared utilities for commands

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::tags::{Session, SessionError, TagState};

/// Start a session, or report that there is nothing to review
///
/// An empty image folder is a setup problem rather than a failure, so it is
/// reported on stderr and yields `None` instead of an error.
pub fn open_session(config: &Config) -> Result<Option<Session>> {
    match Session::initialize(config) {
        Ok(session) => Ok(Some(session)),
        Err(SessionError::NoImages { dir }) => {
            eprintln!(
                "{} {} is empty, expected one or more .png files",
                "Note:".yellow(),
                dir.display()
            );
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Colored label for a tag state
pub fn format_state(state: TagState) -> String {
    match state {
        TagState::Public => state.green().to_string(),
        TagState::Private => state.red().to_string(),
        TagState::Untagged => state.dimmed().to_string(),
    }
}

/// `[2/10] images/foo.png (public)`
pub fn format_position(session: &Session) -> String {
    format!(
        "[{}/{}] {} ({})",
        session.cursor() + 1,
        session.image_count(),
        session.current_image(),
        format_state(session.current_tag_state())
    )
}
