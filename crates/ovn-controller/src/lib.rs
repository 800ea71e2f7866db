//! Logical-port resolution for the OVN controller rewrite.
//!
//! This crate answers the controller's topology questions against the
//! in-memory southbound replica: which row is behind a logical port name
//! or a (datapath key, port key) pair, which chassis currently processes
//! a port's traffic, and which port sits on the other side of a patch or
//! gateway link.
//!
//! # Key Components
//!
//! - [`LportResolver`]: port binding lookup by name or composite key
//! - [`DatapathResolver`]: datapath binding lookup by tunnel key
//! - [`McGroupResolver`]: multicast group lookup by (datapath, name)
//! - [`ResidencyEvaluator`]: decides chassis residency for a port,
//!   delegating HA group election to an external [`HaChassisOracle`]
//! - [`PeerResolver`]: peer discovery for patch and l3gateway ports
//!
//! Every lookup is a synchronous read of the replica snapshot and signals
//! a missing row, option, or dangling reference as `None`. Those are
//! ordinary outcomes while the topology converges; callers re-run on the
//! next replication update rather than retrying here.

mod datapath;
mod ha;
mod lport;
mod mcgroup;
mod peer;
mod residency;

pub use datapath::DatapathResolver;
pub use ha::HaChassisOracle;
pub use lport::LportResolver;
pub use mcgroup::McGroupResolver;
pub use peer::PeerResolver;
pub use residency::ResidencyEvaluator;
