// 📁 Asset Index - Build-Time Photo Discovery
// Scans the photo directory convention once and produces an immutable index

use anyhow::{Context as AnyhowContext, Result};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Image extensions accepted by the scanner (case-insensitive)
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// File name of the optional per-year metadata document
const METADATA_FILE: &str = "members.json";

/// Length of the content-fingerprint suffix on image hrefs
const FINGERPRINT_LEN: usize = 12;

// ============================================================================
// INDEX ENTRIES
// ============================================================================

/// A discovered image, ready to reference from a rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Original file name, e.g. "jane_doe.jpg"
    pub file_name: String,

    /// Web href including a content-fingerprint query for cache busting
    pub href: String,
}

/// A metadata-sourced claim that a named person corresponds to an image file
#[derive(Debug, Clone, Deserialize)]
pub struct RoleDeclaration {
    /// Expected image file name within the same year
    #[serde(default)]
    pub file: String,

    /// Display name; empty falls back to a name derived from the file name
    #[serde(default)]
    pub name: String,

    /// Optional title, e.g. "Co-President"
    pub position: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MembersDoc {
    roles: Option<serde_json::Value>,
}

// ============================================================================
// ASSET INDEX
// ============================================================================

/// Immutable index of every photo and metadata document under the scan root.
///
/// Layout convention:
///   `<root>/board/<year>/<file>`  - board photos, one directory per year
///   `<root>/board/<year>/members.json` - optional role metadata
///   `<root>/events/<file>`        - event photos, flat
///
/// Paths that do not match the expected shape are silently skipped.
#[derive(Debug, Default)]
pub struct AssetIndex {
    board: BTreeMap<String, Vec<ImageAsset>>,
    roles: BTreeMap<String, Vec<RoleDeclaration>>,
    events: Vec<ImageAsset>,
}

impl AssetIndex {
    /// Scan the photo root. A missing root yields an empty index, not an
    /// error; only an unreadable directory entry listing fails.
    pub fn scan<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let mut index = AssetIndex::default();

        let board_root = root.join("board");
        if board_root.is_dir() {
            for year_dir in sorted_entries(&board_root)? {
                if !year_dir.is_dir() {
                    continue;
                }
                let year = match year_dir.file_name().and_then(|n| n.to_str()) {
                    Some(name) => name.to_string(),
                    None => continue,
                };
                index.scan_year(&year, &year_dir)?;
            }
        }

        let events_root = root.join("events");
        if events_root.is_dir() {
            for path in sorted_entries(&events_root)? {
                let file = match path.file_name().and_then(|n| n.to_str()) {
                    Some(name) if path.is_file() => name.to_string(),
                    _ => continue,
                };
                if !is_image_file(&file) {
                    continue;
                }
                if let Some(asset) = make_asset(&path, &file, &format!("/photos/events/{}", file)) {
                    index.events.push(asset);
                }
            }
        }

        Ok(index)
    }

    fn scan_year(&mut self, year: &str, dir: &Path) -> Result<()> {
        for path in sorted_entries(dir)? {
            let file = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) if path.is_file() => name.to_string(),
                _ => continue, // nested directories are outside the convention
            };

            if file == METADATA_FILE {
                if let Some(roles) = parse_roles(&path) {
                    self.roles.insert(year.to_string(), roles);
                }
                continue;
            }

            if !is_image_file(&file) {
                continue;
            }

            let href = format!("/photos/board/{}/{}", year, file);
            if let Some(asset) = make_asset(&path, &file, &href) {
                self.board.entry(year.to_string()).or_default().push(asset);
            }
        }
        Ok(())
    }

    /// Distinct board year tokens, including years that only have metadata
    pub fn board_years(&self) -> Vec<&str> {
        let mut years: Vec<&str> = self
            .board
            .keys()
            .chain(self.roles.keys())
            .map(|y| y.as_str())
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Board images for a year, in file-system scan order
    pub fn board_images(&self, year: &str) -> &[ImageAsset] {
        self.board.get(year).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Role declarations for a year, verbatim from its metadata document
    pub fn roles_for(&self, year: &str) -> Option<&[RoleDeclaration]> {
        self.roles.get(year).map(|v| v.as_slice())
    }

    /// Event photos, sorted ascending by file name
    pub fn event_images(&self) -> &[ImageAsset] {
        &self.events
    }

    /// Total number of indexed images across all sections
    pub fn image_count(&self) -> usize {
        self.board.values().map(|v| v.len()).sum::<usize>() + self.events.len()
    }
}

// ============================================================================
// SCAN HELPERS
// ============================================================================

fn sorted_entries(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {:?}", dir))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    entries.sort();
    Ok(entries)
}

fn is_image_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Fingerprint the file contents and attach the digest as a cache-busting
/// query. Unreadable files are skipped rather than surfaced.
fn make_asset(path: &Path, file_name: &str, href: &str) -> Option<ImageAsset> {
    let bytes = fs::read(path).ok()?;
    let digest = Sha256::digest(&bytes);
    let mut fingerprint = String::with_capacity(FINGERPRINT_LEN);
    for byte in digest.iter() {
        fingerprint.push_str(&format!("{:02x}", byte));
        if fingerprint.len() >= FINGERPRINT_LEN {
            break;
        }
    }
    fingerprint.truncate(FINGERPRINT_LEN);

    Some(ImageAsset {
        file_name: file_name.to_string(),
        href: format!("{}?v={}", href, fingerprint),
    })
}

/// Parse a members.json document. A missing, unparseable, or non-array
/// `roles` field is treated as "no roles" rather than an error.
fn parse_roles(path: &Path) -> Option<Vec<RoleDeclaration>> {
    let content = fs::read_to_string(path).ok()?;
    let doc: MembersDoc = serde_json::from_str(&content).ok()?;
    match doc.roles {
        Some(value) if value.is_array() => serde_json::from_value(value).ok(),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
