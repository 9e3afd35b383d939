//! Review session: the store, the review order and the cursor

use log::debug;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use super::sequence::{self, Direction, SequenceError};
use super::store::{PreferenceStore, StoreError};
use crate::config::{Config, IMAGES_DIR, IMAGE_EXTENSION};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No images found in {}", dir.display())]
    NoImages { dir: PathBuf },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Tag state of one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagState {
    Untagged,
    Public,
    Private,
}

impl TagState {
    pub fn of(store: &PreferenceStore, image_path: &str) -> Self {
        match store.get(image_path) {
            Some(record) if record.is_public => Self::Public,
            Some(_) => Self::Private,
            None => Self::Untagged,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "untagged" | "none" => Some(Self::Untagged),
            _ => None,
        }
    }
}

impl fmt::Display for TagState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untagged => write!(f, "untagged"),
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// Something the user asked the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TagPublic,
    TagPrivate,
    Untag,
    Next,
    Previous,
    JumpUntagged,
}

impl Command {
    /// Key bindings: u(public) r(private) d(untag) n(ext) p(revious) j(ump)
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'u' => Some(Self::TagPublic),
            'r' => Some(Self::TagPrivate),
            'd' => Some(Self::Untag),
            'n' => Some(Self::Next),
            'p' => Some(Self::Previous),
            'j' => Some(Self::JumpUntagged),
            _ => None,
        }
    }
}

/// Owned state of one review
#[derive(Debug)]
pub struct Session {
    store: PreferenceStore,
    images: Vec<String>,
    cursor: usize,
}

impl Session {
    /// Load the preferences, list the images and put tagged ones first
    pub fn initialize(config: &Config) -> Result<Self, SessionError> {
        let store = PreferenceStore::load(config.preferences_file())?;
        let images = sequence::list_images(config.root(), IMAGES_DIR, IMAGE_EXTENSION)?;
        Self::new(store, images).ok_or_else(|| SessionError::NoImages {
            dir: config.images_dir(),
        })
    }

    /// Group `images` by tag state; `None` if there is nothing to review
    pub fn new(store: PreferenceStore, images: Vec<String>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let images = sequence::group_by_tagged(&images, &store);
        debug!(
            "Session with {} image(s), {} tagged",
            images.len(),
            images.iter().filter(|p| store.contains(p)).count()
        );
        Some(Self {
            store,
            images,
            cursor: 0,
        })
    }

    pub fn current_image(&self) -> &str {
        &self.images[self.cursor]
    }

    pub fn current_tag_state(&self) -> TagState {
        TagState::of(&self.store, self.current_image())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Never zero
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Review order
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    /// Run one command; tag changes are on disk before this returns
    pub fn apply(&mut self, command: Command) -> Result<(), StoreError> {
        debug!("{:?} at {}", command, self.current_image());

        match command {
            Command::TagPublic => {
                let image = self.current_image().to_string();
                self.store.set(&image, true)?;
                self.step(Direction::Forward);
            }
            Command::TagPrivate => {
                let image = self.current_image().to_string();
                self.store.set(&image, false)?;
                self.step(Direction::Forward);
            }
            Command::Untag => {
                let image = self.current_image().to_string();
                self.store.delete(&image)?;
                self.step(Direction::Forward);
            }
            Command::Next => self.step(Direction::Forward),
            Command::Previous => self.step(Direction::Backward),
            Command::JumpUntagged => {
                self.cursor = sequence::find_next_untagged(self.cursor, &self.images, &self.store);
            }
        }

        Ok(())
    }

    fn step(&mut self, direction: Direction) {
        self.cursor = sequence::advance(self.cursor, self.images.len(), direction);
    }
}
