//! Tag command - Set or remove the tag of a single image

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;

use super::utils;
use crate::config::Config;
use crate::tags::{PreferenceStore, TagState};

/// Execute the tag command
///
/// `image` is the key as listed by `list` (e.g. `images/foo.png`). The
/// image has to exist under the root so a typo cannot create a record for
/// nothing.
pub fn execute(config: &Config, image: &str, state: TagState) -> Result<()> {
    let location = config.image_location(image);
    if !location.is_file() {
        bail!("Image does not exist: {}", location.display());
    }

    let mut store = PreferenceStore::load(config.preferences_file())?;
    let previous = apply(&mut store, image, state)
        .with_context(|| format!("Failed to save preferences for {}", image))?;

    println!(
        "{} {}: {} -> {}",
        "Tagged".green(),
        image,
        utils::format_state(previous),
        utils::format_state(state)
    );

    Ok(())
}

/// Set `image` to `state` and persist; returns the state it had before
pub fn apply(store: &mut PreferenceStore, image: &str, state: TagState) -> Result<TagState> {
    let previous = TagState::of(store, image);
    match state {
        TagState::Public => store.set(image, true)?,
        TagState::Private => store.set(image, false)?,
        TagState::Untagged => store.delete(image)?,
    }
    Ok(previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_apply_returns_previous_state() {
        let dir = tempdir().unwrap();
        let mut store = PreferenceStore::empty(dir.path().join("preferences.json"));

        let previous = apply(&mut store, "images/a.png", TagState::Private).unwrap();
        assert_eq!(previous, TagState::Untagged);

        let previous = apply(&mut store, "images/a.png", TagState::Untagged).unwrap();
        assert_eq!(previous, TagState::Private);
        assert!(store.is_empty());
    }

    #[test]
    fn test_execute_persists() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images").join("a.png"), b"").unwrap();
        let config = Config::from_root(dir.path());

        execute(&config, "images/a.png", TagState::Public).unwrap();

        let store = PreferenceStore::load(config.preferences_file()).unwrap();
        assert!(store.get("images/a.png").unwrap().is_public);
    }

    #[test]
    fn test_execute_rejects_missing_image() {
        let dir = tempdir().unwrap();
        let config = Config::from_root(dir.path());

        assert!(execute(&config, "images/nope.png", TagState::Public).is_err());
        assert!(!config.preferences_file().exists());
    }
}
