//! Image listing and cursor movement
//!
//! The review order puts images that already have a tag before the ones
//! that don't, so a resumed session starts with the previously reviewed
//! images. The cursor wraps in both directions.

use std::path::{Path, PathBuf};
use thiserror::Error;

use super::store::PreferenceStore;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("Failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Cursor step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// List files in `root/dir` whose name ends in `.<extension>`, sorted by name
///
/// Matches like a `*.png` glob, so a file named just `.png` counts.
/// Directories, including symlinks to directories, are skipped.
///
/// Paths come back relative to `root` (`images/a.png`), which is also how
/// they are keyed in the preferences file. A missing directory lists as
/// empty.
pub fn list_images(root: &Path, dir: &str, extension: &str) -> Result<Vec<String>, SequenceError> {
    let images_dir = root.join(dir);
    if !images_dir.is_dir() {
        return Ok(Vec::new());
    }

    let suffix = format!(".{}", extension);
    let mut images = Vec::new();

    for entry in walkdir::WalkDir::new(&images_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| SequenceError::Scan {
            path: images_dir.clone(),
            source,
        })?;

        if entry.path().is_dir() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(&suffix) {
            continue;
        }

        let key = Path::new(dir).join(entry.file_name());
        images.push(key.to_string_lossy().into_owned());
    }

    Ok(images)
}

/// Stable partition: tagged paths first, then untagged, each in input order
pub fn group_by_tagged(paths: &[String], store: &PreferenceStore) -> Vec<String> {
    let (mut tagged, untagged): (Vec<String>, Vec<String>) =
        paths.iter().cloned().partition(|p| store.contains(p));
    tagged.extend(untagged);
    tagged
}

/// Move the cursor one step, wrapping at both ends
///
/// `len` must be at least 1.
pub fn advance(cursor: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Forward => (cursor + 1) % len,
        Direction::Backward => (cursor + len - 1) % len,
    }
}

/// Find the next untagged image, starting at the cursor itself
///
/// An untagged image under the cursor stops the search immediately, so the
/// cursor only moves when the current image is tagged. If every image is
/// tagged the cursor comes back unchanged, as does a cursor outside
/// `paths`.
pub fn find_next_untagged(cursor: usize, paths: &[String], store: &PreferenceStore) -> usize {
    if cursor >= paths.len() {
        return cursor;
    }

    let start = cursor;
    let mut cursor = cursor;

    loop {
        if !store.contains(&paths[cursor]) {
            return cursor;
        }
        cursor = advance(cursor, paths.len(), Direction::Forward);
        if cursor == start {
            return start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn paths(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn store_with(dir: &Path, tags: &[(&str, bool)]) -> PreferenceStore {
        let mut store = PreferenceStore::empty(dir.join("preferences.json"));
        for (path, is_public) in tags {
            store.set(path, *is_public).unwrap();
        }
        store
    }

    #[test]
    fn test_list_images_filters_and_sorts() {
        let dir = tempdir().unwrap();
        let images = dir.path().join("images");
        fs::create_dir(&images).unwrap();
        for name in ["c.png", "a.png", "b.jpg", "d.PNG", "b.png"] {
            fs::write(images.join(name), b"").unwrap();
        }
        fs::create_dir(images.join("nested.png")).unwrap();

        let listed = list_images(dir.path(), "images", "png").unwrap();
        assert_eq!(
            listed,
            paths(&["images/a.png", "images/b.png", "images/c.png"])
        );
    }

    #[test]
    fn test_list_images_bare_extension_name() {
        let dir = tempdir().unwrap();
        let images = dir.path().join("images");
        fs::create_dir(&images).unwrap();
        fs::write(images.join(".png"), b"").unwrap();
        fs::write(images.join("a.png"), b"").unwrap();

        let listed = list_images(dir.path(), "images", "png").unwrap();
        assert_eq!(listed, paths(&["images/.png", "images/a.png"]));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_images_skips_linked_dirs() {
        let dir = tempdir().unwrap();
        let images = dir.path().join("images");
        fs::create_dir(&images).unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("target"), images.join("link.png")).unwrap();
        fs::write(images.join("a.png"), b"").unwrap();

        let listed = list_images(dir.path(), "images", "png").unwrap();
        assert_eq!(listed, paths(&["images/a.png"]));
    }

    #[test]
    fn test_list_images_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(list_images(dir.path(), "images", "png").unwrap().is_empty());
    }

    #[test]
    fn test_group_all_untagged_keeps_order() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path(), &[]);
        let input = paths(&["a.png", "b.png", "c.png"]);
        assert_eq!(group_by_tagged(&input, &store), input);
    }

    #[test]
    fn test_group_tagged_first() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path(), &[("b.png", false)]);
        let input = paths(&["a.png", "b.png", "c.png"]);
        assert_eq!(
            group_by_tagged(&input, &store),
            paths(&["b.png", "a.png", "c.png"])
        );
    }

    #[test]
    fn test_group_is_stable_partition() {
        let dir = tempdir().unwrap();
        let store = store_with(
            dir.path(),
            &[("e.png", true), ("b.png", false), ("d.png", true)],
        );
        let input = paths(&["a.png", "b.png", "c.png", "d.png", "e.png", "f.png"]);
        let grouped = group_by_tagged(&input, &store);

        assert_eq!(
            grouped,
            paths(&["b.png", "d.png", "e.png", "a.png", "c.png", "f.png"])
        );
        let split = grouped.iter().take_while(|p| store.contains(p)).count();
        assert_eq!(split, 3);
        assert!(grouped[split..].iter().all(|p| store.get(p).is_none()));
    }

    #[test]
    fn test_advance_wraps() {
        assert_eq!(advance(2, 3, Direction::Forward), 0);
        assert_eq!(advance(0, 3, Direction::Backward), 2);
        assert_eq!(advance(0, 1, Direction::Forward), 0);
        assert_eq!(advance(0, 1, Direction::Backward), 0);
    }

    #[test]
    fn test_advance_is_invertible() {
        for n in 1..8 {
            for c in 0..n {
                let forward = advance(c, n, Direction::Forward);
                assert_eq!(advance(forward, n, Direction::Backward), c);
            }
        }
    }

    #[test]
    fn test_find_next_untagged_stays_on_untagged() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path(), &[("a.png", true)]);
        let input = paths(&["a.png", "b.png", "c.png"]);
        assert_eq!(find_next_untagged(1, &input, &store), 1);
    }

    #[test]
    fn test_find_next_untagged_skips_tagged() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path(), &[("a.png", true), ("b.png", false)]);
        let input = paths(&["a.png", "b.png", "c.png"]);
        assert_eq!(find_next_untagged(0, &input, &store), 2);
    }

    #[test]
    fn test_find_next_untagged_wraps() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path(), &[("b.png", true), ("c.png", false)]);
        let input = paths(&["a.png", "b.png", "c.png"]);
        assert_eq!(find_next_untagged(1, &input, &store), 0);
    }

    #[test]
    fn test_find_next_untagged_cursor_out_of_range() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path(), &[("a.png", true)]);
        assert_eq!(find_next_untagged(5, &paths(&["a.png"]), &store), 5);
        assert_eq!(find_next_untagged(0, &[], &store), 0);
    }

    #[test]
    fn test_find_next_untagged_all_tagged() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path(), &[("a.png", true), ("b.png", false)]);
        let input = paths(&["a.png", "b.png"]);
        assert_eq!(find_next_untagged(1, &input, &store), 1);
    }
}
