//! Logical port (Port_Binding) resolution.

use ovn_sb_replica::{PortBinding, PortBindingKey, SbReplica};
use tracing::trace;

use crate::datapath::DatapathResolver;

/// Resolves port bindings by name or by (datapath key, port key).
#[derive(Debug, Clone, Copy)]
pub struct LportResolver<'a> {
    sb: &'a SbReplica,
}

impl<'a> LportResolver<'a> {
    /// Creates a resolver over the given replica snapshot.
    pub fn new(sb: &'a SbReplica) -> Self {
        Self { sb }
    }

    /// Looks up the port binding with the given logical port name.
    pub fn lookup_by_name(&self, name: &str) -> Option<&'a PortBinding> {
        self.sb.port_binding_by_name().find(name)
    }

    /// Looks up the port binding with tunnel key `port_key` inside the
    /// datapath with tunnel key `dp_key`.
    ///
    /// A port cannot be identified without its datapath, so an unknown
    /// `dp_key` makes the whole lookup absent regardless of `port_key`.
    pub fn lookup_by_key(&self, dp_key: u64, port_key: u64) -> Option<&'a PortBinding> {
        let Some(db) = DatapathResolver::new(self.sb).lookup_by_key(dp_key) else {
            trace!(dp_key, port_key, "port lookup against unknown datapath");
            return None;
        };

        self.sb
            .port_binding_by_key()
            .find(&PortBindingKey::new(db.id, port_key))
    }
}
