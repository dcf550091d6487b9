//! Font registry seam.
//!
//! The browser only needs a flat list of family names, queried once at
//! startup, plus enough detail about a family to fill the preview pane.
//! `SystemFontRegistry` answers both from a `fontdb::Database`;
//! `StaticFontRegistry` serves a fixed list.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use fontdb::{Database, Family, Query, Source, Style};
use tracing::{debug, info, warn};

use crate::error::{FontshelfError, Result};

/// Summary of the faces installed for one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySummary {
    pub family: String,
    /// Face names (PostScript names when available), sorted.
    pub faces: Vec<String>,
    /// Distinct weights across faces, ascending.
    pub weights: Vec<u16>,
    pub has_italic: bool,
    pub monospaced: bool,
    /// Backing file of the regular face, when it is file-backed.
    pub path: Option<PathBuf>,
}

/// Supplies installed font family names.
pub trait FontRegistry {
    /// Flat, unordered list of family names. May be empty.
    fn family_names(&self) -> Vec<String>;

    /// Details for `family`, or `None` when the registry cannot resolve it
    /// and rendering falls back to the default typeface.
    fn describe(&self, family: &str) -> Option<FamilySummary>;
}

/// Registry backed by the fonts installed on this machine.
pub struct SystemFontRegistry {
    db: Database,
}

impl SystemFontRegistry {
    /// Load system fonts plus every font found under `extra_dirs`.
    pub fn load(load_system: bool, extra_dirs: &[PathBuf]) -> Result<Self> {
        let mut db = Database::new();

        if load_system {
            db.load_system_fonts();
        }

        for dir in extra_dirs {
            if !dir.exists() {
                warn!("font directory {} does not exist, skipping", dir.display());
                continue;
            }
            if !dir.is_dir() {
                return Err(FontshelfError::NotADirectory(dir.clone()));
            }
            db.load_fonts_dir(dir);
        }

        info!(faces = db.len(), "loaded font database");

        Ok(Self { db })
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }
}

impl FontRegistry for SystemFontRegistry {
    fn family_names(&self) -> Vec<String> {
        // One entry per family, first-seen order. Each face lists its
        // localized names; the first one is the default.
        let mut seen = HashSet::new();
        let names: Vec<String> = self
            .db
            .faces()
            .filter_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .filter(|name| seen.insert(name.clone()))
            .collect();

        debug!(families = names.len(), "enumerated font families");
        names
    }

    fn describe(&self, family: &str) -> Option<FamilySummary> {
        let faces: Vec<_> = self
            .db
            .faces()
            .filter(|face| face.families.iter().any(|(name, _)| name == family))
            .collect();

        if faces.is_empty() {
            return None;
        }

        let mut face_names: Vec<String> = faces
            .iter()
            .map(|face| {
                if face.post_script_name.is_empty() {
                    family.to_string()
                } else {
                    face.post_script_name.clone()
                }
            })
            .collect();
        face_names.sort();
        face_names.dedup();

        let mut weights: Vec<u16> = faces.iter().map(|face| face.weight.0).collect();
        weights.sort_unstable();
        weights.dedup();

        let families = [Family::Name(family)];
        let regular = self.db.query(&Query {
            families: &families,
            ..Query::default()
        });
        let path = regular
            .and_then(|id| self.db.face(id))
            .and_then(|face| match &face.source {
                Source::File(path) => Some(path.clone()),
                _ => None,
            });

        Some(FamilySummary {
            family: family.to_string(),
            faces: face_names,
            weights,
            has_italic: faces.iter().any(|face| face.style != Style::Normal),
            monospaced: faces.iter().any(|face| face.monospaced),
            path,
        })
    }
}

/// Registry serving a fixed list of family names.
#[derive(Debug, Clone, Default)]
pub struct StaticFontRegistry {
    families: Vec<String>,
}

impl StaticFontRegistry {
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            families: families.into_iter().map(Into::into).collect(),
        }
    }

    /// Read one family per line. Blank lines are skipped; surrounding
    /// whitespace is trimmed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| FontshelfError::FontListRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        ))
    }
}

impl FontRegistry for StaticFontRegistry {
    fn family_names(&self) -> Vec<String> {
        self.families.clone()
    }

    fn describe(&self, family: &str) -> Option<FamilySummary> {
        self.families.iter().any(|f| f == family).then(|| FamilySummary {
            family: family.to_string(),
            faces: vec![family.to_string()],
            weights: vec![400],
            has_italic: false,
            monospaced: false,
            path: None,
        })
    }
}
