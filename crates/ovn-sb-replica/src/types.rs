//! Row snapshot types mirroring the OVN Southbound schema.
//!
//! These are read-only snapshots of the rows this layer consumes:
//! `Port_Binding`, `Datapath_Binding`, and `Multicast_Group`. The
//! replication layer owns the rows and their lifecycle; everything here
//! is plain data with no behavior beyond field access.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Option keys used on `Port_Binding` rows.
pub mod options {
    /// Names the port binding on the other side of a patch or gateway link.
    pub const PEER: &str = "peer";
}

/// Type tag of a `Port_Binding` row.
///
/// The southbound schema stores this as a free-form string; the rewrite
/// closes it into an enum. An empty tag is a plain VIF. Tags this core
/// does not model parse as [`PortType::Unknown`] and behave like plain
/// ports everywhere the resolvers branch on type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PortType {
    /// Plain VM/container interface (empty tag in the schema).
    Vif,
    /// One side of a logical switch/router patch link.
    Patch,
    /// One side of an L3 gateway link, pinned to a gateway chassis.
    L3Gateway,
    /// L2 gateway attachment point.
    L2Gateway,
    /// Redirect port whose owner is elected within an HA chassis group.
    ChassisRedirect,
    /// Bridged attachment to a physical network.
    Localnet,
    /// Port present on every chassis.
    LocalPort,
    /// Virtual port claimed on behalf of a VIF.
    Virtual,
    /// Port owned by a remote availability zone.
    Remote,
    /// Port with its configuration outside OVN.
    External,
    /// Hardware VTEP gateway port.
    Vtep,
    /// Tag not modeled by this core.
    Unknown,
}

impl PortType {
    /// Parses a southbound type tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "" => PortType::Vif,
            "patch" => PortType::Patch,
            "l3gateway" => PortType::L3Gateway,
            "l2gateway" => PortType::L2Gateway,
            "chassisredirect" => PortType::ChassisRedirect,
            "localnet" => PortType::Localnet,
            "localport" => PortType::LocalPort,
            "virtual" => PortType::Virtual,
            "remote" => PortType::Remote,
            "external" => PortType::External,
            "vtep" => PortType::Vtep,
            _ => PortType::Unknown,
        }
    }

    /// Returns the southbound type tag.
    pub const fn as_tag(&self) -> &'static str {
        match self {
            PortType::Vif => "",
            PortType::Patch => "patch",
            PortType::L3Gateway => "l3gateway",
            PortType::L2Gateway => "l2gateway",
            PortType::ChassisRedirect => "chassisredirect",
            PortType::Localnet => "localnet",
            PortType::LocalPort => "localport",
            PortType::Virtual => "virtual",
            PortType::Remote => "remote",
            PortType::External => "external",
            PortType::Vtep => "vtep",
            PortType::Unknown => "unknown",
        }
    }
}

impl From<String> for PortType {
    fn from(tag: String) -> Self {
        PortType::from_tag(&tag)
    }
}

impl From<PortType> for String {
    fn from(ty: PortType) -> Self {
        ty.as_tag().to_string()
    }
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Row identity of a `Datapath_Binding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatapathId(pub Uuid);

impl DatapathId {
    /// Generates a fresh identity (normally done by the database).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DatapathId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DatapathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Row identity of a `Chassis`.
///
/// This core never dereferences a chassis; residency compares identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChassisId(pub Uuid);

impl ChassisId {
    /// Generates a fresh identity (normally done by the database).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChassisId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChassisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Row identity of an `HA_Chassis_Group`, consumed opaquely by the
/// external active-member predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HaChassisGroupId(pub Uuid);

impl HaChassisGroupId {
    /// Generates a fresh identity (normally done by the database).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HaChassisGroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HaChassisGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Snapshot of a `Port_Binding` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortBinding {
    /// Logical port name, unique across the table.
    pub logical_port: String,
    /// Port type tag.
    pub port_type: PortType,
    /// Containing datapath; absent while the port is not yet bound into
    /// the topology.
    pub datapath: Option<DatapathId>,
    /// Tunnel key, unique within the port's datapath.
    pub tunnel_key: u64,
    /// Chassis currently claiming the port, if any.
    pub chassis: Option<ChassisId>,
    /// HA chassis group electing the owner of a redirect port.
    pub ha_chassis_group: Option<HaChassisGroupId>,
    /// Auxiliary key/value options (e.g. the peer link).
    pub options: HashMap<String, String>,
}

impl PortBinding {
    /// Creates an unbound port binding with the given name and type.
    pub fn new(logical_port: impl Into<String>, port_type: PortType) -> Self {
        Self {
            logical_port: logical_port.into(),
            port_type,
            datapath: None,
            tunnel_key: 0,
            chassis: None,
            ha_chassis_group: None,
            options: HashMap::new(),
        }
    }

    /// Sets the containing datapath.
    pub fn with_datapath(mut self, datapath: DatapathId) -> Self {
        self.datapath = Some(datapath);
        self
    }

    /// Sets the tunnel key.
    pub fn with_tunnel_key(mut self, tunnel_key: u64) -> Self {
        self.tunnel_key = tunnel_key;
        self
    }

    /// Sets the claiming chassis.
    pub fn with_chassis(mut self, chassis: ChassisId) -> Self {
        self.chassis = Some(chassis);
        self
    }

    /// Sets the HA chassis group.
    pub fn with_ha_chassis_group(mut self, group: HaChassisGroupId) -> Self {
        self.ha_chassis_group = Some(group);
        self
    }

    /// Adds an option entry.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Returns the declared peer port name, if any.
    ///
    /// The value is untrusted input from the options map and may not
    /// resolve to an existing port.
    pub fn peer_option(&self) -> Option<&str> {
        self.options.get(options::PEER).map(String::as_str)
    }
}

/// Snapshot of a `Datapath_Binding` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatapathBinding {
    /// Row identity, referenced by ports and multicast groups.
    pub id: DatapathId,
    /// Tunnel key, globally unique among datapaths.
    pub tunnel_key: u64,
}

impl DatapathBinding {
    /// Creates a datapath binding.
    pub fn new(id: DatapathId, tunnel_key: u64) -> Self {
        Self { id, tunnel_key }
    }
}

/// Snapshot of a `Multicast_Group` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulticastGroup {
    /// Group name, unique within its datapath.
    pub name: String,
    /// Containing datapath.
    pub datapath: DatapathId,
    /// Tunnel key, unique within the datapath alongside port keys.
    pub tunnel_key: u64,
}

impl MulticastGroup {
    /// Creates a multicast group snapshot.
    pub fn new(name: impl Into<String>, datapath: DatapathId, tunnel_key: u64) -> Self {
        Self {
            name: name.into(),
            datapath,
            tunnel_key,
        }
    }
}

/// Composite key of the by-(datapath, tunnel_key) port binding index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortBindingKey {
    /// Containing datapath.
    pub datapath: DatapathId,
    /// Tunnel key within that datapath.
    pub tunnel_key: u64,
}

impl PortBindingKey {
    pub fn new(datapath: DatapathId, tunnel_key: u64) -> Self {
        Self {
            datapath,
            tunnel_key,
        }
    }
}

/// Composite key of the by-(name, datapath) multicast group index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct McGroupKey {
    /// Group name.
    pub name: String,
    /// Containing datapath.
    pub datapath: DatapathId,
}

impl McGroupKey {
    pub fn new(name: impl Into<String>, datapath: DatapathId) -> Self {
        Self {
            name: name.into(),
            datapath,
        }
    }
}
