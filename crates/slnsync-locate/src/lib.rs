//! File pair locator for slnsync.
//!
//! Decides which legacy (`.sln`) and XML (`.slnx`) file form the pair to
//! reconcile, either by scanning one directory or by picking from explicit
//! paths. Nothing is parsed here.

pub mod error;
pub mod locator;

pub use error::{LocateError, LocateResult};
pub use locator::{find_pair_in_directory, locate, pick_from_paths, SolutionPair};
