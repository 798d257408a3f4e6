//! Linkflow Store — roster persistence and the seen-identity registry.
//!
//! Persistence here is deliberately a whole-collection boundary: the roster
//! is read and overwritten as one JSON document, never patched. On a missing
//! or unreadable roster file the store falls back to the bundled default
//! dataset so a fresh deployment renders something immediately.

pub mod identity;
pub mod roster;

pub use identity::IdentityRegistry;
pub use roster::RosterStore;
