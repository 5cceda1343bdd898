//! In-memory representation of a draft: entities and action containers.
//!
//! Entities and containers are built once by the draft lexer and read-only
//! afterwards; every later stage borrows them through the [`crate::tree::Tree`].

mod column;
mod controller;
mod entity;
mod relation;

pub use column::{Column, Modifier};
pub use controller::ActionContainer;
pub use entity::{Entity, KeyKind, PSEUDO_COLUMNS};
pub use relation::{KeyedReference, RawReference, RelationshipKind};
