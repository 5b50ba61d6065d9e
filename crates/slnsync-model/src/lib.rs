//! Solution model for slnsync.
//!
//! A solution exists twice on disk during a migration: once in the legacy
//! text format (`.sln`) and once in the XML format (`.slnx`). This crate holds
//! the format-independent in-memory view of one such file, plus the seam
//! through which models are loaded and persisted.
//!
//! # Key Types
//!
//! - [`SolutionModel`] -- platforms, build types, and member items of one file
//! - [`SolutionItem`] -- a [`ProjectItem`] or a [`FolderItem`]
//! - [`ItemIdentity`] -- the identity used to match items across two files
//! - [`SolutionFormat`] -- which of the two file formats a path belongs to
//! - [`SolutionProvider`] -- load/save seam for the external model provider
//!
//! # Providers
//!
//! - [`InMemoryProvider`] -- `HashMap`-backed provider for tests and embedding
//! - [`CommandProvider`] -- bridges to an external program over JSON
//!
//! The file grammars themselves are never parsed here.

pub mod command;
pub mod error;
pub mod format;
pub mod item;
pub mod memory;
pub mod model;
pub mod provider;

pub use command::CommandProvider;
pub use error::{ProviderError, ProviderResult};
pub use format::SolutionFormat;
pub use item::{FolderItem, ItemId, ItemIdentity, ItemKind, ProjectItem, SolutionItem};
pub use memory::InMemoryProvider;
pub use model::SolutionModel;
pub use provider::SolutionProvider;
