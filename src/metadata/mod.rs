//! Out-of-band metadata attached to controllers and their handlers.
//!
//! Entries are keyed by a [`Subject`] (a controller type or one handler of a
//! controller) and a [`MetadataKind`]. Each pair holds at most one value and a
//! later write replaces the earlier one.

mod store;
mod subject;

pub use store::MetadataStore;
pub use subject::{ControllerId, HandlerId, Subject};

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The kind of metadata stored for a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MetadataKind {
    /// Base path on a controller, sub-path on a handler.
    Path,
    /// HTTP verb on a handler.
    Method,
}
