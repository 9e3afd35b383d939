//! tag-review library
//!
//! Core of the image tagging tool: the preference store backed by
//! `preferences.json`, the review order of `images/*.png`, and the
//! session that applies review commands.

pub mod config;
pub mod tags;
