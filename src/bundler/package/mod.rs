//! Package model construction.
//!
//! Turns a staged directory tree into the entity graph the installer
//! compiler consumes.
//!
//! # Module Organization
//!
//! - `entity` - [`Directory`] / [`File`] tree and [`Identifier`]
//! - `id` - deterministic, installer-legal identifier generation
//! - `tree` - recursive directory mapping
//! - `model` - [`PackageModel`] and shortcuts
//! - `assemble` - composition of the model from the staged tree

mod assemble;
mod entity;
mod id;
mod model;
mod tree;

pub use assemble::assemble;
pub use entity::{Directory, Entity, File, Identifier};
pub use id::{EntityKind, IdGenerator, MAX_ID_LEN, sanitize};
pub use model::{PackageModel, Shortcut, ShortcutLocation, ShortcutTarget};
pub use tree::{map_directory, map_file};
