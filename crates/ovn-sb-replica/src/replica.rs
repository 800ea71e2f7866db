//! The southbound replica: concrete unique indexes over the row tables.

use std::sync::Arc;

use thiserror::Error;
use tracing::trace;

use crate::index::UniqueIndex;
use crate::types::{
    DatapathBinding, McGroupKey, MulticastGroup, PortBinding, PortBindingKey,
};

/// Error type for replica maintenance operations.
///
/// These surface schema violations on the write path only; lookups signal
/// absence through `Option`, never through an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicaError {
    /// A port binding with this logical port name is already present.
    #[error("duplicate logical port name: {0}")]
    DuplicatePortName(String),
    /// Another port binding already holds this (datapath, tunnel_key).
    #[error("duplicate port tunnel key {} in datapath {}", .0.tunnel_key, .0.datapath)]
    DuplicatePortKey(PortBindingKey),
    /// A datapath binding with this tunnel key is already present.
    #[error("duplicate datapath tunnel key: {0}")]
    DuplicateDatapathKey(u64),
    /// A multicast group with this (name, datapath) is already present.
    #[error("duplicate multicast group {} in datapath {}", .0.name, .0.datapath)]
    DuplicateMcGroup(McGroupKey),
}

/// Result type for replica maintenance operations.
pub type Result<T> = std::result::Result<T, ReplicaError>;

/// In-memory replica of the southbound tables this core queries.
///
/// The external replication layer applies row updates through the
/// `insert_*`/`remove_*` methods as change notifications arrive; the
/// resolution layer reads through the index accessors. The replica must
/// not be mutated while a query chain is in flight — the replication
/// layer provides that guarantee, not this type.
#[derive(Debug, Clone, Default)]
pub struct SbReplica {
    /// `Port_Binding` by logical port name (primary; holds every row).
    port_binding_by_name: UniqueIndex<String, PortBinding>,
    /// `Port_Binding` by (datapath, tunnel_key); only bound rows.
    port_binding_by_key: UniqueIndex<PortBindingKey, PortBinding>,
    /// `Datapath_Binding` by tunnel key.
    datapath_by_key: UniqueIndex<u64, DatapathBinding>,
    /// `Multicast_Group` by (name, datapath).
    mcgroup_by_name_dp: UniqueIndex<McGroupKey, MulticastGroup>,
}

impl SbReplica {
    /// Creates an empty replica.
    pub fn new() -> Self {
        Self::default()
    }

    /// Port binding index keyed by logical port name.
    pub fn port_binding_by_name(&self) -> &UniqueIndex<String, PortBinding> {
        &self.port_binding_by_name
    }

    /// Port binding index keyed by (datapath, tunnel_key).
    pub fn port_binding_by_key(&self) -> &UniqueIndex<PortBindingKey, PortBinding> {
        &self.port_binding_by_key
    }

    /// Datapath binding index keyed by tunnel key.
    pub fn datapath_by_key(&self) -> &UniqueIndex<u64, DatapathBinding> {
        &self.datapath_by_key
    }

    /// Multicast group index keyed by (name, datapath).
    pub fn mcgroup_by_name_dp(&self) -> &UniqueIndex<McGroupKey, MulticastGroup> {
        &self.mcgroup_by_name_dp
    }

    /// Adds a port binding row.
    ///
    /// A row without a datapath enters only the by-name index; it gains a
    /// by-key entry once the replication layer re-inserts it with a
    /// datapath reference.
    pub fn insert_port_binding(&mut self, pb: PortBinding) -> Result<()> {
        let pb = Arc::new(pb);
        let name = pb.logical_port.clone();

        self.port_binding_by_name
            .insert(name.clone(), Arc::clone(&pb))
            .map_err(|_| ReplicaError::DuplicatePortName(name.clone()))?;

        if let Some(datapath) = pb.datapath {
            let key = PortBindingKey::new(datapath, pb.tunnel_key);
            if self.port_binding_by_key.insert(key, Arc::clone(&pb)).is_err() {
                // Unwind the by-name entry so the paired indexes agree.
                self.port_binding_by_name.remove(&name);
                return Err(ReplicaError::DuplicatePortKey(key));
            }
        }

        trace!(port = %name, "port binding inserted");
        Ok(())
    }

    /// Removes the port binding with the given logical port name.
    pub fn remove_port_binding(&mut self, name: &str) -> Option<Arc<PortBinding>> {
        let pb = self.port_binding_by_name.remove(name)?;
        if let Some(datapath) = pb.datapath {
            self.port_binding_by_key
                .remove(&PortBindingKey::new(datapath, pb.tunnel_key));
        }
        trace!(port = name, "port binding removed");
        Some(pb)
    }

    /// Adds a datapath binding row.
    pub fn insert_datapath(&mut self, db: DatapathBinding) -> Result<()> {
        let tunnel_key = db.tunnel_key;
        self.datapath_by_key
            .insert(tunnel_key, Arc::new(db))
            .map_err(|_| ReplicaError::DuplicateDatapathKey(tunnel_key))
    }

    /// Removes the datapath binding with the given tunnel key.
    pub fn remove_datapath(&mut self, tunnel_key: u64) -> Option<Arc<DatapathBinding>> {
        self.datapath_by_key.remove(&tunnel_key)
    }

    /// Adds a multicast group row.
    pub fn insert_multicast_group(&mut self, mg: MulticastGroup) -> Result<()> {
        let key = McGroupKey::new(mg.name.clone(), mg.datapath);
        self.mcgroup_by_name_dp
            .insert(key.clone(), Arc::new(mg))
            .map_err(|_| ReplicaError::DuplicateMcGroup(key))
    }

    /// Removes the multicast group with the given (name, datapath).
    pub fn remove_multicast_group(&mut self, key: &McGroupKey) -> Option<Arc<MulticastGroup>> {
        self.mcgroup_by_name_dp.remove(key)
    }

    /// Drops every row, e.g. on replication reconnect.
    pub fn clear(&mut self) {
        self.port_binding_by_name.clear();
        self.port_binding_by_key.clear();
        self.datapath_by_key.clear();
        self.mcgroup_by_name_dp.clear();
    }
}
