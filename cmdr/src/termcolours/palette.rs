// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Palettes are color files (see [`crate::termcolours::parse_color_lines`]) kept in one
//! folder, with the `.ssv` extension. The name of a palette is its file stem, and its
//! description is the text of its first `#` comment line.

use std::{fs,
          io::ErrorKind,
          path::{Path, PathBuf}};

use miette::IntoDiagnostic;

pub const PALETTE_FILE_EXTENSION: &str = "ssv";
pub const PALETTES_FOLDER_NAME: &str = "palettes";
pub const APP_DATA_FOLDER_NAME: &str = "termcolours";

/// Sample palettes that ship with the source tree.
pub const BUNDLED_PALETTES_FOLDER: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/palettes");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: String,
    pub description: String,
    pub path: PathBuf,
}

/// Abstraction for the palette storage, for dependency injection.
pub trait PaletteRegistry {
    /// Sorted by name.
    ///
    /// # Errors
    ///
    /// If the palettes can't be listed, eg: the folder isn't readable.
    fn list_palettes(&self) -> miette::Result<Vec<PaletteEntry>>;

    /// Where the palettes are kept, for messages.
    fn location(&self) -> PathBuf;

    /// Resolve a palette name (as listed) to the path of its color file.
    ///
    /// # Errors
    ///
    /// See [`PaletteRegistry::list_palettes`].
    fn resolve(&self, name: &str) -> miette::Result<Option<PathBuf>> {
        let palettes = self.list_palettes()?;
        Ok(palettes
            .into_iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.path))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteFolder {
    pub folder: PathBuf,
}

impl PaletteFolder {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// First match wins:
    /// 1. `maybe_override`, from `--palette-dir` or `TERMCOLOURS_PALETTE_DIR`.
    /// 2. `<data dir>/termcolours/palettes`, if it exists.
    /// 3. [`BUNDLED_PALETTES_FOLDER`].
    #[must_use]
    pub fn resolve_folder(maybe_override: Option<PathBuf>) -> PathBuf {
        if let Some(folder) = maybe_override {
            return folder;
        }

        let maybe_data_folder = dirs::data_dir()
            .map(|it| it.join(APP_DATA_FOLDER_NAME).join(PALETTES_FOLDER_NAME))
            .filter(|it| it.is_dir());

        maybe_data_folder.unwrap_or_else(|| PathBuf::from(BUNDLED_PALETTES_FOLDER))
    }
}

impl PaletteRegistry for PaletteFolder {
    /// A missing folder has no palettes.
    fn list_palettes(&self) -> miette::Result<Vec<PaletteEntry>> {
        let read_dir = match fs::read_dir(&self.folder) {
            Ok(it) => it,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(error) => return Err(error).into_diagnostic(),
        };

        let mut acc = vec![];
        for dir_entry in read_dir {
            let path = dir_entry.into_diagnostic()?.path();

            let is_palette = path.is_file()
                && path.extension().and_then(|it| it.to_str())
                    == Some(PALETTE_FILE_EXTENSION);
            if !is_palette {
                continue;
            }

            let Some(name) = path.file_stem().and_then(|it| it.to_str()) else {
                continue;
            };

            acc.push(PaletteEntry {
                name: name.to_string(),
                description: read_description(&path),
                path,
            });
        }

        acc.sort_by(|lhs, rhs| lhs.name.cmp(&rhs.name));

        tracing::debug!(
            message = "Listed palettes",
            folder = %self.folder.display(),
            count = acc.len()
        );

        Ok(acc)
    }

    fn location(&self) -> PathBuf { self.folder.clone() }
}

/// Text of the first `#` comment line, or empty.
fn read_description(path: &Path) -> String {
    let Ok(content) = fs::read_to_string(path) else {
        return String::new();
    };

    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix('#'))
        .map(|it| it.trim().to_string())
        .unwrap_or_default()
}

pub mod palette_test_fixtures {
    use std::path::PathBuf;

    use super::{PaletteEntry, PaletteRegistry};

    /// Palettes that are already known, backed by color files that the test creates.
    #[derive(Debug, Default)]
    pub struct TestPalettes {
        pub entries: Vec<PaletteEntry>,
        pub is_unreadable: bool,
    }

    impl TestPalettes {
        #[must_use]
        pub fn with_entry(
            mut self,
            name: &str,
            description: &str,
            path: impl Into<PathBuf>,
        ) -> Self {
            self.entries.push(PaletteEntry {
                name: name.to_string(),
                description: description.to_string(),
                path: path.into(),
            });
            self
        }
    }

    impl PaletteRegistry for TestPalettes {
        fn list_palettes(&self) -> miette::Result<Vec<PaletteEntry>> {
            if self.is_unreadable {
                miette::bail!("palette storage is not readable");
            }
            Ok(self.entries.clone())
        }

        fn location(&self) -> PathBuf { PathBuf::from("<test palettes>") }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn folder_lists_ssv_files_sorted_with_descriptions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zebra.ssv"), "#  Black and white \n0;0;0;decm\n").unwrap();
        fs::write(dir.path().join("amber.ssv"), "255;191;0;decm\n# late comment\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "# not a palette").unwrap();
        fs::create_dir(dir.path().join("nested.ssv")).unwrap();

        let registry = PaletteFolder::new(dir.path());
        let palettes = registry.list_palettes().unwrap();

        let names: Vec<_> = palettes.iter().map(|it| it.name.as_str()).collect();
        assert_eq!(names, vec!["amber", "zebra"]);
        assert_eq!(palettes[0].description, "late comment");
        assert_eq!(palettes[1].description, "Black and white");

        assert_eq!(
            registry.resolve("zebra").unwrap(),
            Some(dir.path().join("zebra.ssv"))
        );
        assert_eq!(registry.resolve("missing").unwrap(), None);
    }

    #[test]
    fn missing_folder_has_no_palettes() {
        let dir = tempfile::tempdir().unwrap();
        let registry = PaletteFolder::new(dir.path().join("does-not-exist"));
        assert_eq!(registry.list_palettes().unwrap(), vec![]);
    }

    #[test]
    fn override_wins() {
        let folder = PaletteFolder::resolve_folder(Some(PathBuf::from("/my/palettes")));
        assert_eq!(folder, PathBuf::from("/my/palettes"));
    }

    #[test]
    fn bundled_palettes_are_readable() {
        let registry = PaletteFolder::new(BUNDLED_PALETTES_FOLDER);
        let palettes = registry.list_palettes().unwrap();
        assert!(!palettes.is_empty());
        assert!(palettes.iter().all(|it| !it.description.is_empty()));
    }
}
