//! Shared entity contract: identity and cloning.
//!
//! Every model type in the draft graph carries an immutable identifier
//! assigned at construction. Duplicating an entity yields a structurally
//! independent deep copy; whether the copy keeps the source identifier is
//! declared per call site via [`IdPolicy`]. Keeping the identifier (the
//! default) enables replace semantics through [`Repository::upsert`];
//! callers that need a genuinely distinct entity request [`IdPolicy::NewId`].
//!
//! The serialization side of the contract is fulfilled by `serde::Serialize`
//! on every entity, with the identifier embedded in the serialized form.
//!
//! [`Repository::upsert`]: crate::model::Repository::upsert

use std::fmt::Display;
use std::hash::Hash;

/// Identifier reuse policy when duplicating an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// The copy keeps the source entity's identifier.
    #[default]
    KeepId,
    /// The copy receives a freshly generated identifier.
    NewId,
}

/// Identity and cloning contract shared by every draft model entity.
pub trait Entity: Clone + serde::Serialize {
    /// The typed identifier for this entity family.
    type Id: Copy + Eq + Hash + Display;

    /// The entity's immutable identifier.
    fn id(&self) -> Self::Id;

    /// Deep, structurally independent copy of this entity.
    fn duplicate(&self, policy: IdPolicy) -> Self;
}
