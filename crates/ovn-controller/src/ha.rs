//! External HA chassis group predicate.

use std::collections::HashSet;

use ovn_sb_replica::{ChassisId, HaChassisGroupId};

/// Predicate deciding whether a chassis is the currently active member of
/// an HA chassis group.
///
/// The election algorithm lives in the HA chassis module elsewhere in the
/// controller; this trait is its seam. The resolution layer hands over the
/// group identity, the set of chassis names currently reachable over
/// tunnels, and the candidate chassis, and takes the verdict as-is.
pub trait HaChassisOracle: Send + Sync {
    /// Returns true if `chassis` is the active member of `group` given
    /// the currently reachable tunnel peers.
    ///
    /// `group` is `None` when the port binding carries no HA chassis
    /// group reference; implementations answer false for that case.
    fn active_member_is_chassis(
        &self,
        group: Option<&HaChassisGroupId>,
        active_tunnels: &HashSet<String>,
        chassis: &ChassisId,
    ) -> bool;
}
