//! Signature roster - the curated list of names that go on the ball

pub mod database;

pub use database::{DEFAULT_NAMES, SIGNATURES_FILE, SignatureRoster};

/// One signature entry. Only `(id, name)` of enabled entries participate in
/// layout; the id is an opaque string that never changes once minted.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub id: String,
    pub name: String,
    pub enabled: bool,
}
