//! Datapath binding resolution.

use ovn_sb_replica::{DatapathBinding, SbReplica};

/// Resolves datapath bindings by tunnel key.
///
/// Used standalone and as the first step of port lookup by key.
#[derive(Debug, Clone, Copy)]
pub struct DatapathResolver<'a> {
    sb: &'a SbReplica,
}

impl<'a> DatapathResolver<'a> {
    /// Creates a resolver over the given replica snapshot.
    pub fn new(sb: &'a SbReplica) -> Self {
        Self { sb }
    }

    /// Looks up the datapath binding with the given tunnel key.
    pub fn lookup_by_key(&self, tunnel_key: u64) -> Option<&'a DatapathBinding> {
        self.sb.datapath_by_key().find(&tunnel_key)
    }
}
