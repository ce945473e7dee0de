//! The 12-slot build state machine.

use std::fmt;

use arrayvec::ArrayVec;

use super::error::BuildError;
use super::format::{BuildData, LoadReport};
use super::observer::{BuildChange, BuildObserver};
use crate::catalog::{Item, ItemId, ItemLookup};
use crate::config::{ALWAYS_OPEN_SLOTS, FLEX_SLOT_COUNT, PlannerConfig, SLOT_COUNT, SlotPolicy};

/// Result of a successful [`Build::equip`].
#[derive(Clone, Debug, PartialEq)]
pub struct EquipOutcome {
    pub slot: usize,
    /// Previous occupant of the slot (overwrite policy only).
    pub replaced: Option<Item>,
}

/// Equipped items of one character.
///
/// Invariants:
/// - exactly [`SLOT_COUNT`] slots; indices beyond 11 are never addressable
/// - no item id occupies more than one slot
/// - a locked slot never *receives* an item; items already in a slot that
///   becomes locked stay put
pub struct Build {
    slots: [Option<Item>; SLOT_COUNT],
    unlock_thresholds: [i64; FLEX_SLOT_COUNT],
    policy: SlotPolicy,
    observers: Vec<Box<dyn BuildObserver>>,
}

impl Build {
    /// Empty build with the live slot thresholds and the overwrite policy.
    pub fn new() -> Self {
        Self::with_config(&PlannerConfig::default())
    }

    pub fn with_config(config: &PlannerConfig) -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            unlock_thresholds: config.tables.slot_unlock_thresholds,
            policy: config.slot_policy,
            observers: Vec::new(),
        }
    }

    /// Registers a change observer.
    pub fn subscribe(&mut self, observer: impl BuildObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn slot(&self, slot: usize) -> Option<&Item> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn slots(&self) -> &[Option<Item>; SLOT_COUNT] {
        &self.slots
    }

    /// Occupied slots in slot order.
    pub fn equipped_items(&self) -> ArrayVec<&Item, SLOT_COUNT> {
        self.slots.iter().flatten().collect()
    }

    /// Slot holding `id`, if equipped.
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|item| &item.id == id))
    }

    /// Sum of item costs over occupied slots, saturating at the `i64` bounds.
    pub fn total_souls(&self) -> i64 {
        self.slots
            .iter()
            .flatten()
            .map(|item| item.cost)
            .fold(0, i64::saturating_add)
    }

    /// Total souls required before `slot` accepts items; `None` out of range.
    pub fn unlock_threshold(&self, slot: usize) -> Option<i64> {
        match slot {
            s if s < ALWAYS_OPEN_SLOTS => Some(0),
            s if s < SLOT_COUNT => Some(self.unlock_thresholds[s - ALWAYS_OPEN_SLOTS]),
            _ => None,
        }
    }

    /// Whether `slot` currently refuses new items. Out-of-range slots are locked.
    pub fn is_locked(&self, slot: usize) -> bool {
        match self.unlock_threshold(slot) {
            Some(threshold) => self.total_souls() < threshold,
            None => true,
        }
    }

    pub fn unlocked_slot_count(&self) -> usize {
        (0..SLOT_COUNT).filter(|&slot| !self.is_locked(slot)).count()
    }

    /// Current-format snapshot of the slot contents.
    pub fn build_data(&self) -> BuildData {
        BuildData::Slots(
            self.slots
                .iter()
                .map(|slot| slot.as_ref().map(|item| item.id.clone()))
                .collect(),
        )
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Places `item` into `slot`.
    ///
    /// Checked in order: slot range, duplicate id anywhere in the build
    /// (including `slot` itself), slot lock, then occupancy under
    /// [`SlotPolicy::Strict`].
    pub fn equip(&mut self, slot: usize, item: Item) -> Result<EquipOutcome, BuildError> {
        if slot >= SLOT_COUNT {
            return Err(BuildError::SlotOutOfRange {
                slot,
                count: SLOT_COUNT,
            });
        }

        if let Some(equipped_in) = self.position(&item.id) {
            return Err(BuildError::DuplicateItem {
                item: item.id,
                equipped_in,
            });
        }

        if self.is_locked(slot) {
            return Err(BuildError::SlotLocked {
                slot,
                required: self.unlock_threshold(slot).unwrap_or_default(),
                current: self.total_souls(),
            });
        }

        if self.policy == SlotPolicy::Strict {
            if let Some(occupant) = &self.slots[slot] {
                return Err(BuildError::SlotOccupied {
                    slot,
                    occupant: occupant.id.clone(),
                });
            }
        }

        let item_id = item.id.clone();
        let replaced = self.slots[slot].replace(item);

        tracing::debug!(
            slot,
            item = %item_id,
            replaced = ?replaced.as_ref().map(|r| &r.id),
            total_souls = self.total_souls(),
            "equipped item"
        );

        self.notify(BuildChange::Equipped {
            slot,
            item: item_id,
            replaced: replaced.as_ref().map(|r| r.id.clone()),
        });

        Ok(EquipOutcome { slot, replaced })
    }

    /// Clears `slot`, returning its item. Never blocked by locks.
    ///
    /// Clearing an empty slot succeeds with `None` and notifies nobody.
    pub fn unequip(&mut self, slot: usize) -> Result<Option<Item>, BuildError> {
        let entry = self.slots.get_mut(slot).ok_or(BuildError::SlotOutOfRange {
            slot,
            count: SLOT_COUNT,
        })?;

        let Some(item) = entry.take() else {
            return Ok(None);
        };

        tracing::debug!(slot, item = %item.id, "unequipped item");
        self.notify(BuildChange::Unequipped {
            slot,
            item: item.id.clone(),
        });
        Ok(Some(item))
    }

    /// Empties every slot.
    pub fn reset(&mut self) {
        self.slots = std::array::from_fn(|_| None);
        tracing::debug!("build reset");
        self.notify(BuildChange::Reset);
    }

    /// Replaces the whole build with `data`, resolving ids through `lookup`.
    ///
    /// Slot locks are not consulted. Ids the lookup does not know leave their
    /// slot empty, and a repeated id keeps only its first slot so that no two
    /// slots ever hold the same item, even for hand-edited data.
    pub fn load<L>(&mut self, data: &BuildData, lookup: &L) -> LoadReport
    where
        L: ItemLookup + ?Sized,
    {
        let normalized = data.normalize();
        let mut report = LoadReport {
            overflow: normalized.overflow,
            migrated_legacy: normalized.legacy,
            ..LoadReport::default()
        };

        if normalized.overflow > 0 {
            tracing::warn!(
                dropped = normalized.overflow,
                "build data has more entries than slots"
            );
        }

        let mut slots: [Option<Item>; SLOT_COUNT] = std::array::from_fn(|_| None);
        for (index, id) in normalized.slots.iter().enumerate() {
            let Some(id) = id else { continue };

            let Some(item) = lookup.item(id) else {
                tracing::warn!(slot = index, item = %id, "unknown item id in build data");
                report.unknown.push(id.clone());
                continue;
            };

            if slots[..index].iter().flatten().any(|placed| &placed.id == id) {
                tracing::warn!(slot = index, item = %id, "duplicate item id in build data");
                report.duplicates.push(id.clone());
                continue;
            }

            slots[index] = Some(item.clone());
            report.loaded += 1;
        }
        self.slots = slots;

        tracing::debug!(
            loaded = report.loaded,
            legacy = report.migrated_legacy,
            total_souls = self.total_souls(),
            "build loaded"
        );
        self.notify(BuildChange::Loaded {
            loaded: report.loaded,
            migrated_legacy: report.migrated_legacy,
        });
        report
    }

    fn notify(&mut self, change: BuildChange) {
        if self.observers.is_empty() {
            return;
        }
        let mut observers = std::mem::take(&mut self.observers);
        for observer in &mut observers {
            tracing::trace!(observer = observer.name(), ?change, "notifying observer");
            observer.on_change(self, &change);
        }
        self.observers = observers;
    }
}

impl Default for Build {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<Option<&str>> = self
            .slots
            .iter()
            .map(|slot| slot.as_ref().map(|item| item.id.as_str()))
            .collect();
        f.debug_struct("Build")
            .field("slots", &ids)
            .field("unlock_thresholds", &self.unlock_thresholds)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::PlannerError;
    use crate::build::LegacyBuild;
    use crate::catalog::{ItemCatalog, ItemCategory};

    fn item(id: &str, cost: i64) -> Item {
        Item::new(id, id, ItemCategory::Weapon, cost)
    }

    /// Build with `count` items of `cost` each in slots 0.., all always-open.
    fn filled(count: usize, cost: i64) -> Build {
        let mut build = Build::new();
        for i in 0..count {
            build.equip(i, item(&format!("item_{i}"), cost)).unwrap();
        }
        build
    }

    #[test]
    fn empty_build_spends_nothing() {
        let build = Build::new();
        assert_eq!(build.total_souls(), 0);
        assert!(build.equipped_items().is_empty());
        assert_eq!(build.unlocked_slot_count(), ALWAYS_OPEN_SLOTS);
    }

    #[test]
    fn total_souls_sums_occupied_slots() {
        let mut build = Build::new();
        build.equip(0, item("a", 500)).unwrap();
        build.equip(4, item("b", 1250)).unwrap();
        build.equip(8, item("c", 3000)).unwrap();
        assert_eq!(build.total_souls(), 4750);
        assert_eq!(build.equipped_items().len(), 3);
    }

    #[test]
    fn extreme_costs_saturate_total_souls() {
        let mut build = Build::new();
        build.equip(0, item("huge", i64::MAX)).unwrap();
        build.equip(1, item("tiny", 1)).unwrap();
        assert_eq!(build.total_souls(), i64::MAX);
        assert!(!build.is_locked(11));
        build.equip(11, item("flex", i64::MAX)).unwrap();
        assert_eq!(build.total_souls(), i64::MAX);

        build.reset();
        build.equip(0, item("debt", i64::MIN)).unwrap();
        build.equip(1, item("more_debt", -1)).unwrap();
        assert_eq!(build.total_souls(), i64::MIN);
    }

    #[test]
    fn lock_thresholds_follow_total_souls() {
        for slot in 0..ALWAYS_OPEN_SLOTS {
            assert!(!Build::new().is_locked(slot));
        }

        // 6 × 499 = 2994
        let mut build = filled(6, 499);
        assert!(build.is_locked(9));
        build.equip(6, item("top_up", 6)).unwrap();
        assert_eq!(build.total_souls(), 3000);
        assert!(!build.is_locked(9));
        assert!(build.is_locked(10));

        build.equip(7, item("big", 3000)).unwrap();
        assert!(!build.is_locked(10));
        assert!(build.is_locked(11));

        build.equip(8, item("bigger", 2999)).unwrap();
        assert!(build.is_locked(11));
        build.equip(9, item("last", 1)).unwrap();
        assert_eq!(build.total_souls(), 9000);
        assert!(!build.is_locked(11));
        assert_eq!(build.unlocked_slot_count(), SLOT_COUNT);
    }

    #[test]
    fn out_of_range_slots_are_rejected() {
        let mut build = Build::new();
        assert!(build.is_locked(12));
        assert_eq!(
            build.equip(12, item("a", 100)),
            Err(BuildError::SlotOutOfRange { slot: 12, count: 12 })
        );
        assert!(build.unequip(40).is_err());
        assert!(build.slot(12).is_none());
    }

    #[test]
    fn locked_slot_rejects_and_leaves_state() {
        let mut build = filled(2, 500);
        let err = build.equip(9, item("late", 500)).unwrap_err();
        assert_eq!(
            err,
            BuildError::SlotLocked {
                slot: 9,
                required: 3000,
                current: 1000
            }
        );
        assert_eq!(err.error_code(), "BUILD_SLOT_LOCKED");
        assert!(err.severity().is_recoverable());
        assert!(build.slot(9).is_none());
        assert_eq!(build.total_souls(), 1000);
    }

    #[test]
    fn duplicates_are_rejected_for_any_target_slot() {
        let mut build = Build::new();
        build.equip(3, item("dup", 500)).unwrap();
        for target in [0, 3, 8, 11] {
            let err = build.equip(target, item("dup", 500)).unwrap_err();
            assert_eq!(
                err,
                BuildError::DuplicateItem {
                    item: ItemId::new("dup"),
                    equipped_in: 3
                }
            );
        }
        assert_eq!(build.equipped_items().len(), 1);
    }

    #[test]
    fn occupied_slot_is_overwritten_by_default() {
        let mut build = Build::new();
        build.equip(0, item("first", 500)).unwrap();
        let outcome = build.equip(0, item("second", 800)).unwrap();
        assert_eq!(outcome.replaced.map(|i| i.id), Some(ItemId::new("first")));
        assert_eq!(build.slot(0).map(|i| i.id.as_str()), Some("second"));
        assert_eq!(build.total_souls(), 800);
    }

    #[test]
    fn strict_policy_rejects_occupied_slot() {
        let config = PlannerConfig::new().with_slot_policy(SlotPolicy::Strict);
        let mut build = Build::with_config(&config);
        build.equip(0, item("first", 500)).unwrap();
        assert_eq!(
            build.equip(0, item("second", 800)),
            Err(BuildError::SlotOccupied {
                slot: 0,
                occupant: ItemId::new("first")
            })
        );
        assert!(build.equip(1, item("second", 800)).unwrap().replaced.is_none());
    }

    #[test]
    fn unequip_ignores_locks_and_never_evicts() {
        let mut build = filled(6, 500);
        build.equip(9, item("flex", 500)).unwrap();

        // Dropping spend below 3000 locks slot 9 but keeps its item
        assert_eq!(build.unequip(0).unwrap().map(|i| i.cost), Some(500));
        build.unequip(1).unwrap();
        assert_eq!(build.total_souls(), 2500);
        assert!(build.is_locked(9));
        assert!(build.slot(9).is_some());

        assert!(build.unequip(9).unwrap().is_some());
        assert_eq!(build.unequip(9), Ok(None));
    }

    #[test]
    fn reset_clears_every_slot() {
        let mut build = filled(9, 1000);
        build.equip(9, item("flex", 100)).unwrap();
        build.reset();
        assert!(build.slots().iter().all(Option::is_none));
        assert_eq!(build.total_souls(), 0);
    }

    #[test]
    fn load_round_trips_build_data() {
        let mut build = filled(9, 500);
        build.unequip(2).unwrap();
        build.equip(9, item("flex", 2500)).unwrap();
        let data = build.build_data();
        let catalog: ItemCatalog = build.equipped_items().into_iter().cloned().collect();

        let mut restored = Build::new();
        let report = restored.load(&data, &catalog);
        assert!(report.is_clean());
        assert_eq!(report.loaded, 9);
        assert_eq!(restored.slots(), build.slots());
        assert_eq!(restored.build_data(), data);
    }

    #[test]
    fn load_migrates_legacy_groups() {
        let catalog = vec![item("w", 500), item("v", 1250), item("f", 3000)];
        let data = BuildData::Legacy(LegacyBuild {
            weapon: vec![Some(ItemId::new("w"))],
            vitality: vec![None, Some(ItemId::new("v"))],
            spirit: vec![],
            flex: vec![Some(ItemId::new("f"))],
        });

        let mut build = Build::new();
        let report = build.load(&data, &catalog);
        assert!(report.migrated_legacy);
        assert_eq!(build.slot(0).map(|i| i.id.as_str()), Some("w"));
        assert_eq!(build.slot(1).map(|i| i.id.as_str()), Some("v"));
        assert_eq!(build.slot(2).map(|i| i.id.as_str()), Some("f"));
        assert_eq!(build.total_souls(), 4750);
    }

    #[test]
    fn load_skips_lock_rules_but_reports_anomalies() {
        let catalog = vec![item("a", 100), item("b", 100)];
        let mut ids: Vec<Option<ItemId>> = vec![None; SLOT_COUNT];
        ids[0] = Some(ItemId::new("a"));
        ids[5] = Some(ItemId::new("missing"));
        ids[6] = Some(ItemId::new("a"));
        ids[11] = Some(ItemId::new("b"));

        let mut build = filled(3, 100);
        let report = build.load(&BuildData::Slots(ids), catalog.as_slice());
        assert_eq!(report.loaded, 2);
        assert_eq!(report.unknown, vec![ItemId::new("missing")]);
        assert_eq!(report.duplicates, vec![ItemId::new("a")]);
        assert!(!report.is_clean());
        // Slot 11 is locked at 200 souls yet holds the loaded item
        assert!(build.is_locked(11));
        assert_eq!(build.slot(11).map(|i| i.id.as_str()), Some("b"));
        assert!(build.slot(1).is_none());
    }

    #[test]
    fn observers_see_successful_mutations_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut build = Build::new();
        let sink = Rc::clone(&seen);
        build.subscribe(move |build: &Build, change: &BuildChange| {
            sink.borrow_mut().push((change.clone(), build.total_souls()));
        });

        build.equip(0, item("a", 500)).unwrap();
        build.equip(1, item("a", 500)).unwrap_err();
        build.equip(9, item("b", 500)).unwrap_err();
        build.unequip(5).unwrap();
        build.unequip(0).unwrap();
        build.reset();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[0],
            (
                BuildChange::Equipped {
                    slot: 0,
                    item: ItemId::new("a"),
                    replaced: None
                },
                500
            )
        );
        assert_eq!(seen[1].0.slot(), Some(0));
        assert_eq!(seen[1].1, 0);
        assert_eq!(seen[2].0, BuildChange::Reset);
    }
}
