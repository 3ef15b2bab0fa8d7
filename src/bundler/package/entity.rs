//! Package entity tree.

use crate::bundler::error::{Error, Result};
use std::{fmt, path::PathBuf};

/// Installer-legal component identifier.
///
/// Only produced by [`IdGenerator`](super::IdGenerator) or taken from the
/// reserved set, so every value starts with a letter or underscore and
/// contains only `[A-Za-z0-9_]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Directory property the WiX `InstallDir` dialog set binds to.
    pub const INSTALL_DIR: &'static str = "INSTALLDIR";

    pub(super) fn from_generated(value: String) -> Self {
        Self(value)
    }

    /// The install-root directory identifier.
    pub fn install_dir() -> Self {
        Self(Self::INSTALL_DIR.to_string())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A packaged file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    /// Component and file identifier.
    pub id: Identifier,
    /// Installed file name.
    pub name: String,
    /// Absolute path of the staged source file.
    pub source: PathBuf,
}

/// A packaged directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directory {
    /// Directory identifier.
    pub id: Identifier,
    /// Installed directory name.
    pub name: String,
    children: Vec<Entity>,
}

/// A node of the package tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A directory with its own children.
    Directory(Directory),
    /// A file leaf.
    File(File),
}

impl Entity {
    /// Name of the entity inside its parent.
    pub fn name(&self) -> &str {
        match self {
            Entity::Directory(d) => &d.name,
            Entity::File(f) => &f.name,
        }
    }
}

impl Directory {
    /// Creates an empty directory.
    pub fn new(id: Identifier, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Adds a child, rejecting a second child with the same name.
    pub fn push(&mut self, child: Entity) -> Result<()> {
        if self.children.iter().any(|c| c.name() == child.name()) {
            return Err(Error::DuplicateEntry {
                directory: self.name.clone(),
                name: child.name().to_string(),
            });
        }
        self.children.push(child);
        Ok(())
    }

    /// All children in insertion order.
    pub fn children(&self) -> &[Entity] {
        &self.children
    }

    /// Immediate file children.
    pub fn files(&self) -> impl Iterator<Item = &File> {
        self.children.iter().filter_map(|c| match c {
            Entity::File(f) => Some(f),
            Entity::Directory(_) => None,
        })
    }

    /// Immediate directory children.
    pub fn directories(&self) -> impl Iterator<Item = &Directory> {
        self.children.iter().filter_map(|c| match c {
            Entity::Directory(d) => Some(d),
            Entity::File(_) => None,
        })
    }

    /// Every file in this subtree, depth first.
    pub fn all_files(&self) -> Vec<&File> {
        let mut files: Vec<&File> = self.files().collect();
        for dir in self.directories() {
            files.extend(dir.all_files());
        }
        files
    }

    /// Finds an immediate file child by name.
    pub fn file(&self, name: &str) -> Option<&File> {
        self.files().find(|f| f.name == name)
    }
}
