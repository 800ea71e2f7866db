//! Multicast group resolution.

use ovn_sb_replica::{DatapathBinding, McGroupKey, MulticastGroup, SbReplica};

/// Resolves multicast groups by (datapath, name).
///
/// Takes an already-resolved datapath binding, not a key; callers that
/// start from a datapath tunnel key go through
/// [`DatapathResolver`](crate::DatapathResolver) first.
#[derive(Debug, Clone, Copy)]
pub struct McGroupResolver<'a> {
    sb: &'a SbReplica,
}

impl<'a> McGroupResolver<'a> {
    /// Creates a resolver over the given replica snapshot.
    pub fn new(sb: &'a SbReplica) -> Self {
        Self { sb }
    }

    /// Looks up the multicast group named `name` within `datapath`.
    pub fn lookup_by_dp_name(
        &self,
        datapath: &DatapathBinding,
        name: &str,
    ) -> Option<&'a MulticastGroup> {
        self.sb
            .mcgroup_by_name_dp()
            .find(&McGroupKey::new(name, datapath.id))
    }
}
