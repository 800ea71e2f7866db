//! Chassis residency evaluation.

use std::collections::HashSet;

use ovn_sb_replica::{ChassisId, PortType, SbReplica};
use tracing::debug;

use crate::ha::HaChassisOracle;
use crate::lport::LportResolver;

/// Decides whether a chassis currently processes traffic for a port.
///
/// Ordinary ports have a single static owner recorded on the row; a
/// `chassisredirect` port's owner is elected dynamically among its HA
/// chassis group, which the external [`HaChassisOracle`] adjudicates.
/// The two cases must not be conflated.
#[derive(Clone, Copy)]
pub struct ResidencyEvaluator<'a> {
    lports: LportResolver<'a>,
    ha: &'a dyn HaChassisOracle,
}

impl<'a> ResidencyEvaluator<'a> {
    /// Creates an evaluator over the given replica snapshot and HA
    /// predicate.
    pub fn new(sb: &'a SbReplica, ha: &'a dyn HaChassisOracle) -> Self {
        Self {
            lports: LportResolver::new(sb),
            ha,
        }
    }

    /// Returns true if `chassis` is where traffic for `port_name` is
    /// processed right now.
    ///
    /// An unknown port name or a port with no chassis assigned at all is
    /// resident nowhere.
    pub fn is_chassis_resident(
        &self,
        port_name: &str,
        chassis: &ChassisId,
        active_tunnels: &HashSet<String>,
    ) -> bool {
        let Some(pb) = self.lports.lookup_by_name(port_name) else {
            debug!(port = port_name, "residency check for unknown port");
            return false;
        };
        if pb.chassis.is_none() {
            debug!(port = port_name, "residency check for unbound port");
            return false;
        }

        match pb.port_type {
            PortType::ChassisRedirect => {
                self.ha
                    .active_member_is_chassis(pb.ha_chassis_group.as_ref(), active_tunnels, chassis)
            }
            _ => pb.chassis == Some(*chassis),
        }
    }
}
