//! Change notifications for build hosts.
//!
//! Observers run after every successful slot mutation, once the build is in its
//! new state. Rejected operations notify nobody. Hosts typically recompute
//! stats and persist the build from here.

use super::Build;
use crate::catalog::ItemId;

/// What changed in a build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildChange {
    Equipped {
        slot: usize,
        item: ItemId,
        /// Occupant displaced under the overwrite policy.
        replaced: Option<ItemId>,
    },
    Unequipped {
        slot: usize,
        item: ItemId,
    },
    Reset,
    Loaded {
        loaded: usize,
        migrated_legacy: bool,
    },
}

impl BuildChange {
    /// Slot touched by the change, `None` for whole-build changes.
    pub fn slot(&self) -> Option<usize> {
        match self {
            BuildChange::Equipped { slot, .. } | BuildChange::Unequipped { slot, .. } => {
                Some(*slot)
            }
            BuildChange::Reset | BuildChange::Loaded { .. } => None,
        }
    }
}

/// Receives build change notifications.
///
/// Any `FnMut(&Build, &BuildChange)` closure is an observer.
pub trait BuildObserver {
    /// Name used in logs.
    fn name(&self) -> &'static str {
        "observer"
    }

    fn on_change(&mut self, build: &Build, change: &BuildChange);
}

impl<F> BuildObserver for F
where
    F: FnMut(&Build, &BuildChange),
{
    fn on_change(&mut self, build: &Build, change: &BuildChange) {
        self(build, change)
    }
}
