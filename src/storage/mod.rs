//! JSON-backed persistence for catalog data and submitted applications.
//!
//! In-progress drafts are never written to disk; they live and die with the
//! wizard that owns them.

pub mod json_backend;
pub mod paths;

pub use json_backend::JsonStorage;
