//! Peer discovery for patch and gateway ports.

use ovn_sb_replica::{PortBinding, PortType, SbReplica};
use tracing::debug;

use crate::lport::LportResolver;

/// Resolves the port on the other side of a patch or l3gateway link.
///
/// The link is declared through the `peer` option rather than a
/// structural column, so the target name is untrusted: it may be absent,
/// name a port that does not exist, or name a port not yet bound into a
/// datapath. All of those resolve to absence, never to a fault.
#[derive(Debug, Clone, Copy)]
pub struct PeerResolver<'a> {
    lports: LportResolver<'a>,
}

impl<'a> PeerResolver<'a> {
    /// Creates a resolver over the given replica snapshot.
    pub fn new(sb: &'a SbReplica) -> Self {
        Self {
            lports: LportResolver::new(sb),
        }
    }

    /// Returns the peer of a patch port. Absence for any other type.
    pub fn peer(&self, pb: &PortBinding) -> Option<&'a PortBinding> {
        if pb.port_type != PortType::Patch {
            return None;
        }
        self.options_peer(pb)
    }

    /// Returns the peer of an l3gateway port. Absence for any other type.
    pub fn l3gw_peer(&self, pb: &PortBinding) -> Option<&'a PortBinding> {
        if pb.port_type != PortType::L3Gateway {
            return None;
        }
        self.options_peer(pb)
    }

    /// Resolves the `peer` option to a usable port binding.
    ///
    /// A declared-but-unbound peer (no datapath yet) is withheld: it is
    /// not part of the topology until the replication layer binds it.
    fn options_peer(&self, pb: &PortBinding) -> Option<&'a PortBinding> {
        let peer_name = pb.peer_option()?;

        match self.lports.lookup_by_name(peer_name) {
            Some(peer) if peer.datapath.is_some() => Some(peer),
            Some(_) => {
                debug!(
                    port = %pb.logical_port,
                    peer = peer_name,
                    "peer port not yet bound to a datapath"
                );
                None
            }
            None => {
                debug!(
                    port = %pb.logical_port,
                    peer = peer_name,
                    "dangling peer reference"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovn_sb_replica::{options, DatapathBinding, DatapathId};
    use pretty_assertions::assert_eq;

    fn replica_with_patch_pair() -> SbReplica {
        let mut sb = SbReplica::new();
        let dp1 = DatapathId::new();
        let dp2 = DatapathId::new();
        sb.insert_datapath(DatapathBinding::new(dp1, 1)).unwrap();
        sb.insert_datapath(DatapathBinding::new(dp2, 2)).unwrap();
        sb.insert_port_binding(
            PortBinding::new("lsp1", PortType::Patch)
                .with_datapath(dp1)
                .with_tunnel_key(1)
                .with_option(options::PEER, "lsp2"),
        )
        .unwrap();
        sb.insert_port_binding(
            PortBinding::new("lsp2", PortType::Patch)
                .with_datapath(dp2)
                .with_tunnel_key(1)
                .with_option(options::PEER, "lsp1"),
        )
        .unwrap();
        sb
    }

    #[test]
    fn test_patch_peer_both_directions() {
        let sb = replica_with_patch_pair();
        let resolver = PeerResolver::new(&sb);
        let lports = LportResolver::new(&sb);

        let lsp1 = lports.lookup_by_name("lsp1").unwrap();
        let lsp2 = lports.lookup_by_name("lsp2").unwrap();

        assert_eq!(resolver.peer(lsp1).map(|p| p.logical_port.as_str()), Some("lsp2"));
        assert_eq!(resolver.peer(lsp2).map(|p| p.logical_port.as_str()), Some("lsp1"));
    }

    #[test]
    fn test_peer_type_guard() {
        let sb = replica_with_patch_pair();
        let resolver = PeerResolver::new(&sb);

        // A peer option on a non-patch port is ignored by peer().
        let vif = PortBinding::new("vif1", PortType::Vif).with_option(options::PEER, "lsp2");
        assert!(resolver.peer(&vif).is_none());
        assert!(resolver.l3gw_peer(&vif).is_none());

        // And peer()/l3gw_peer() do not accept each other's types.
        let lports = LportResolver::new(&sb);
        let lsp1 = lports.lookup_by_name("lsp1").unwrap();
        assert!(resolver.l3gw_peer(lsp1).is_none());
    }

    #[test]
    fn test_no_peer_option_is_inert() {
        let mut sb = SbReplica::new();
        let dp = DatapathId::new();
        sb.insert_port_binding(PortBinding::new("lsp1", PortType::Patch).with_datapath(dp))
            .unwrap();
        let resolver = PeerResolver::new(&sb);
        let lports = LportResolver::new(&sb);

        let lsp1 = lports.lookup_by_name("lsp1").unwrap();
        assert!(resolver.peer(lsp1).is_none());
    }

    #[test]
    fn test_dangling_peer_reference() {
        let mut sb = SbReplica::new();
        let dp = DatapathId::new();
        sb.insert_port_binding(
            PortBinding::new("lsp1", PortType::Patch)
                .with_datapath(dp)
                .with_option(options::PEER, "gone"),
        )
        .unwrap();
        let resolver = PeerResolver::new(&sb);
        let lports = LportResolver::new(&sb);

        let lsp1 = lports.lookup_by_name("lsp1").unwrap();
        assert!(resolver.peer(lsp1).is_none());
    }

    #[test]
    fn test_unbound_peer_withheld() {
        let mut sb = SbReplica::new();
        let dp = DatapathId::new();
        sb.insert_port_binding(
            PortBinding::new("lsp1", PortType::Patch)
                .with_datapath(dp)
                .with_option(options::PEER, "lsp2"),
        )
        .unwrap();
        // lsp2 exists but has no datapath yet.
        sb.insert_port_binding(PortBinding::new("lsp2", PortType::Patch))
            .unwrap();
        let resolver = PeerResolver::new(&sb);
        let lports = LportResolver::new(&sb);

        let lsp1 = lports.lookup_by_name("lsp1").unwrap();
        assert!(resolver.peer(lsp1).is_none());
    }

    #[test]
    fn test_l3gw_peer() {
        let mut sb = SbReplica::new();
        let dp1 = DatapathId::new();
        let dp2 = DatapathId::new();
        sb.insert_port_binding(
            PortBinding::new("lrp1", PortType::L3Gateway)
                .with_datapath(dp1)
                .with_option(options::PEER, "lrp2"),
        )
        .unwrap();
        sb.insert_port_binding(PortBinding::new("lrp2", PortType::L3Gateway).with_datapath(dp2))
            .unwrap();
        let resolver = PeerResolver::new(&sb);
        let lports = LportResolver::new(&sb);

        let lrp1 = lports.lookup_by_name("lrp1").unwrap();
        assert_eq!(
            resolver.l3gw_peer(lrp1).map(|p| p.logical_port.as_str()),
            Some("lrp2")
        );
        assert!(resolver.peer(lrp1).is_none());
    }
}
