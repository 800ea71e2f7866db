//! In-memory replica of the OVN Southbound database.
//!
//! This crate holds the read side of the southbound replication layer:
//! typed row snapshots, unique indexes over them, and the [`SbReplica`]
//! bundle that the resolution layer queries. The replication/transaction
//! engine that keeps the replica current lives elsewhere; it drives the
//! write path here (`insert_*`/`remove_*`) as rows appear, change, and
//! vanish in the southbound database.
//!
//! # Architecture
//!
//! ```text
//! [OVN Southbound DB] ──replication──> [SbReplica] ──queries── [resolvers]
//!                                       (this crate)           (ovn-controller)
//! ```
//!
//! # Key Components
//!
//! - [`UniqueIndex`]: a keyed map enforcing the schema's uniqueness
//!   constraints; lookups take a complete key and return at most one row
//! - [`SbReplica`]: the concrete indexes over port bindings, datapath
//!   bindings, and multicast groups
//! - [`types`]: row snapshot types mirroring the southbound schema
//!
//! All reads are synchronous and non-blocking. A replica snapshot must be
//! immutable for the duration of a query chain; interleaving writes with
//! reads is the caller's bug, not this crate's.

mod index;
mod replica;
pub mod types;

pub use index::{IndexError, UniqueIndex};
pub use replica::{ReplicaError, SbReplica};
pub use types::{
    options, ChassisId, DatapathBinding, DatapathId, HaChassisGroupId, McGroupKey,
    MulticastGroup, PortBinding, PortBindingKey, PortType,
};
