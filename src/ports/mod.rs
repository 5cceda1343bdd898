//! Port traits defining external boundaries.
//!
//! The compiler core performs no I/O. Everything it reads or writes goes
//! through these traits; implementations live in `src/adapters/`.

pub mod artifacts;

pub use artifacts::ArtifactStore;

/// Error type returned across port boundaries.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
