//! Deterministic identifier generation.
//!
//! An identifier is `_` followed by the sanitised entity name and the first
//! 16 hex digits of SHA-256 over the entity kind and its staging-relative
//! path. Re-running on the same tree yields the same identifiers.

use super::Identifier;
use sha2::{Digest, Sha256};
use std::{collections::HashSet, path::Path};

/// MSI identifier columns hold at most 72 characters.
pub const MAX_ID_LEN: usize = 72;

const PREFIX: char = '_';
const HASH_LEN: usize = 16;

/// What an identifier names; part of the hash input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityKind {
    /// A file component.
    File,
    /// A directory.
    Directory,
    /// A shortcut.
    Shortcut,
}

impl EntityKind {
    fn tag(self) -> &'static str {
        match self {
            EntityKind::File => "file",
            EntityKind::Directory => "dir",
            EntityKind::Shortcut => "shortcut",
        }
    }
}

/// Issues identifiers that are unique within one package model.
#[derive(Debug, Default)]
pub struct IdGenerator {
    issued: HashSet<String>,
}

impl IdGenerator {
    /// Creates a generator with no identifiers issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identifiers issued so far.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    /// Whether no identifier has been issued yet.
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    /// Identifier for `name` located at `relative_path` in the staging tree.
    pub fn generate(&mut self, kind: EntityKind, name: &str, relative_path: &Path) -> Identifier {
        let digest = Sha256::new()
            .chain_update(kind.tag())
            .chain_update([0u8])
            .chain_update(portable_path(relative_path))
            .finalize();
        let hash = &hex::encode(digest)[..HASH_LEN];

        let budget = MAX_ID_LEN - PREFIX.len_utf8() - 1 - HASH_LEN;
        let stem: String = sanitize(name).chars().take(budget).collect();
        let base = format!("{PREFIX}{stem}_{hash}");

        let mut candidate = base.clone();
        let mut n = 1;
        while self.issued.contains(&candidate) {
            // base is ASCII after sanitising
            let suffix = format!("_{n}");
            let keep = base.len().min(MAX_ID_LEN - suffix.len());
            candidate = format!("{}{suffix}", &base[..keep]);
            n += 1;
        }
        if n > 1 {
            log::warn!("Identifier collision for {}, using {candidate}", relative_path.display());
        }

        log::debug!("{} -> {candidate}", relative_path.display());
        self.issued.insert(candidate.clone());
        Identifier::from_generated(candidate)
    }
}

/// Replace every character outside `[A-Za-z0-9_]` (including `-`, `@` and
/// `.`) with `_`.
pub fn sanitize(source: &str) -> String {
    source
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// `/`-joined components so hashes match across host platforms.
fn portable_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
