//! Command validation and execution.
//!
//! [`InventoryEngine`] is the authoritative reducer for
//! [`InventoryState`]. Every mutation flows through [`InventoryEngine::execute`],
//! which re-validates the command against the environment, applies it, and
//! reports which replicated fields changed.
//!
//! Rejections are typed so the caller can trace them, but none of them is
//! ever surfaced to the remote requester: a rejected request simply
//! produces no state change and no notification.

use thiserror::Error;

use crate::command::Command;
use crate::env::{Env, OracleError};
use crate::locator::{LocateReading, resolve_distance_band};
use crate::state::{
    BagEntry, InventoryState, ItemHandle, PlayerId, StateDelta, ToolId, TrackedTool, Vec3,
};

/// Why a command did not execute.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Reject {
    /// The executing context does not own this inventory's simulation.
    #[error("command executed on a non-authoritative instance")]
    NotAuthoritative,

    #[error("slot index {index} outside [0, {count})")]
    SlotOutOfRange { index: usize, count: usize },

    #[error("quantity must be positive")]
    QuantityNotPositive,

    #[error("no definition behind {item}")]
    UnknownItem { item: ItemHandle },

    #[error("bag weight {current} + {incoming} would exceed cap {max}")]
    OverWeight {
        current: f32,
        incoming: f32,
        max: f32,
    },

    #[error("no bag entry for {item}")]
    ItemNotInBag { item: ItemHandle },

    #[error("tool id is not valid")]
    InvalidToolId,

    #[error("no tracked record for tool {tool_id}")]
    UnknownTool { tool_id: ToolId },

    #[error("locate cooldown active for another {remaining:.2}s")]
    CooldownActive { remaining: f64 },

    #[error("tool {tool_id} is not locatable by player {requester}")]
    NotLocatable {
        tool_id: ToolId,
        requester: PlayerId,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Complete outcome of command execution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExecutionOutcome {
    /// Which replicated fields changed.
    pub delta: StateDelta,

    /// Present only for an accepted locate; the runtime routes it to the
    /// requesting player over the addressed reply channel.
    pub locate: Option<LocateReading>,
}

/// Inventory engine that validates and applies commands.
///
/// Mutations happen in place on the borrowed state; the delta is produced
/// by comparing against a pre-execution clone, so a rejected command
/// leaves no trace at all.
pub struct InventoryEngine<'a> {
    state: &'a mut InventoryState,
}

impl<'a> InventoryEngine<'a> {
    pub fn new(state: &'a mut InventoryState) -> Self {
        Self { state }
    }

    /// Executes a command against the environment.
    ///
    /// The authority check runs first for every command, regardless of
    /// variant: a non-authoritative context cannot mutate anything even
    /// if it reaches this entry point directly instead of through the
    /// request path.
    pub fn execute(
        &mut self,
        env: &Env<'_>,
        command: &Command,
    ) -> Result<ExecutionOutcome, Reject> {
        if !env.host()?.is_authoritative() {
            return Err(Reject::NotAuthoritative);
        }

        let before = self.state.clone();
        let locate = self.apply(env, command)?;
        let delta = StateDelta::from_states(&before, self.state);

        Ok(ExecutionOutcome { delta, locate })
    }

    fn apply(&mut self, env: &Env<'_>, command: &Command) -> Result<Option<LocateReading>, Reject> {
        match *command {
            Command::AssignSlot {
                item,
                tool_id,
                slot_index,
            } => self.assign_slot(item, tool_id, slot_index)?,
            Command::ClearSlot { slot_index } => self.clear_slot(slot_index)?,
            Command::AddBagItem { item, quantity } => self.add_bag_item(env, item, quantity)?,
            Command::RemoveBagItem { item, quantity } => {
                self.remove_bag_item(env, item, quantity)?
            }
            Command::RegisterDropped {
                tool_id,
                owner,
                position,
            } => self.register_dropped(tool_id, owner, position)?,
            Command::UpdateDroppedLocation { tool_id, position } => {
                self.update_dropped_location(tool_id, position)?
            }
            Command::RemoveDropped { tool_id } => self.remove_dropped(tool_id)?,
            Command::Locate { tool_id } => return self.locate(env, tool_id).map(Some),
        }

        Ok(None)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut crate::state::ToolSlot, Reject> {
        let count = self.state.tool_slots.len();
        self.state
            .tool_slots
            .get_mut(index)
            .ok_or(Reject::SlotOutOfRange { index, count })
    }

    fn assign_slot(
        &mut self,
        item: ItemHandle,
        tool_id: ToolId,
        slot_index: usize,
    ) -> Result<(), Reject> {
        // Overwrites an occupied slot without any displaced-item event.
        self.slot_mut(slot_index)?.assign(item, tool_id);
        Ok(())
    }

    fn clear_slot(&mut self, slot_index: usize) -> Result<(), Reject> {
        self.slot_mut(slot_index)?.clear();
        Ok(())
    }

    fn add_bag_item(
        &mut self,
        env: &Env<'_>,
        item: ItemHandle,
        quantity: u32,
    ) -> Result<(), Reject> {
        if quantity == 0 {
            return Err(Reject::QuantityNotPositive);
        }

        let items = env.items()?;
        let definition = items
            .definition(item)
            .ok_or(Reject::UnknownItem { item })?;

        let max = env.balance()?.max_bag_weight;
        let incoming = definition.unit_weight * quantity as f32;
        // A cap at or below zero means the bag is unlimited. Landing
        // exactly on the cap is allowed; only exceeding it rejects.
        if max > 0.0 && self.state.bag_weight + incoming > max {
            return Err(Reject::OverWeight {
                current: self.state.bag_weight,
                incoming,
                max,
            });
        }

        match self.state.find_bag_entry(item) {
            Some(index) => self.state.bag[index].quantity += quantity,
            None => self.state.bag.push(BagEntry::new(item, quantity)),
        }

        self.state.recalculate_bag_weight(items);
        Ok(())
    }

    fn remove_bag_item(
        &mut self,
        env: &Env<'_>,
        item: ItemHandle,
        quantity: u32,
    ) -> Result<(), Reject> {
        if quantity == 0 {
            return Err(Reject::QuantityNotPositive);
        }

        let items = env.items()?;
        let index = self
            .state
            .find_bag_entry(item)
            .ok_or(Reject::ItemNotInBag { item })?;

        // Floor at zero; an emptied entry is removed, never kept.
        let entry = &mut self.state.bag[index];
        entry.quantity = entry.quantity.saturating_sub(quantity);
        if entry.quantity == 0 {
            self.state.bag.remove(index);
        }

        self.state.recalculate_bag_weight(items);
        Ok(())
    }

    fn register_dropped(
        &mut self,
        tool_id: ToolId,
        owner: PlayerId,
        position: Vec3,
    ) -> Result<(), Reject> {
        if !tool_id.is_valid() {
            return Err(Reject::InvalidToolId);
        }

        match self.state.find_tracked(tool_id) {
            Some(index) => {
                let tracked = &mut self.state.tracked_tools[index];
                tracked.owner = owner;
                tracked.position = position;
                tracked.dropped = true;
            }
            None => self.state.tracked_tools.push(TrackedTool {
                tool_id,
                owner,
                position,
                dropped: true,
            }),
        }

        Ok(())
    }

    fn update_dropped_location(&mut self, tool_id: ToolId, position: Vec3) -> Result<(), Reject> {
        if !tool_id.is_valid() {
            return Err(Reject::InvalidToolId);
        }

        // Unlike registration this never creates a record.
        let index = self
            .state
            .find_tracked(tool_id)
            .ok_or(Reject::UnknownTool { tool_id })?;
        let tracked = &mut self.state.tracked_tools[index];
        tracked.position = position;
        tracked.dropped = true;
        Ok(())
    }

    fn remove_dropped(&mut self, tool_id: ToolId) -> Result<(), Reject> {
        if !tool_id.is_valid() {
            return Err(Reject::InvalidToolId);
        }

        let index = self
            .state
            .find_tracked(tool_id)
            .ok_or(Reject::UnknownTool { tool_id })?;
        self.state.tracked_tools.remove(index);
        Ok(())
    }

    fn locate(&mut self, env: &Env<'_>, tool_id: ToolId) -> Result<LocateReading, Reject> {
        if !tool_id.is_valid() {
            return Err(Reject::InvalidToolId);
        }

        let host = env.host()?;
        let balance = env.balance()?;
        let now = host.world_time_seconds();

        // Rate limit is global per inventory instance, not per target,
        // and only an accepted request ever arms it.
        let cooldown = balance.locate_cooldown_seconds as f64;
        if cooldown > 0.0
            && let Some(last) = self.state.last_locate_time
            && now - last < cooldown
        {
            return Err(Reject::CooldownActive {
                remaining: cooldown - (now - last),
            });
        }

        let requester = host.owner_player_id();
        let tracked = self
            .state
            .tracked_tools
            .iter()
            .find(|tracked| {
                tracked.tool_id == tool_id && tracked.dropped && tracked.owner == requester
            })
            .copied()
            .ok_or(Reject::NotLocatable { tool_id, requester })?;

        let offset = tracked.position - host.world_position();
        let distance = offset.length();
        let direction = if offset.is_nearly_zero() {
            Vec3::ZERO
        } else {
            offset.normalized()
        };
        let band = resolve_distance_band(distance, balance.near_distance, balance.medium_distance);

        self.state.last_locate_time = Some(now);

        Ok(LocateReading {
            tool_id,
            direction,
            band,
            distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InventoryConfig;
    use crate::env::{HostOracle, ItemCategory, ItemDefinition, ItemOracle};
    use crate::locator::DistanceBand;
    use crate::state::InventoryFields;
    use std::collections::HashMap;

    struct StubItems(HashMap<ItemHandle, ItemDefinition>);

    impl StubItems {
        fn with(definitions: &[(u32, f32)]) -> Self {
            let map = definitions
                .iter()
                .map(|&(handle, weight)| {
                    let handle = ItemHandle::new(handle);
                    (
                        handle,
                        ItemDefinition {
                            handle,
                            id: format!("item-{}", handle.0),
                            display_name: format!("Item {}", handle.0),
                            category: ItemCategory::Cleanup,
                            unit_weight: weight,
                            stackable: true,
                            max_stack: 99,
                        },
                    )
                })
                .collect();
            Self(map)
        }
    }

    impl ItemOracle for StubItems {
        fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
            self.0.get(&handle).cloned()
        }
    }

    struct StubHost {
        authoritative: bool,
        position: Vec3,
        player: PlayerId,
        time: f64,
    }

    impl StubHost {
        fn authority() -> Self {
            Self {
                authoritative: true,
                position: Vec3::ZERO,
                player: PlayerId::new(7),
                time: 0.0,
            }
        }

        fn at_time(time: f64) -> Self {
            Self {
                time,
                ..Self::authority()
            }
        }
    }

    impl HostOracle for StubHost {
        fn is_authoritative(&self) -> bool {
            self.authoritative
        }

        fn world_position(&self) -> Vec3 {
            self.position
        }

        fn owner_player_id(&self) -> PlayerId {
            self.player
        }

        fn world_time_seconds(&self) -> f64 {
            self.time
        }
    }

    fn balance() -> InventoryConfig {
        InventoryConfig {
            max_tool_slots: 3,
            max_bag_weight: 10.0,
            locate_cooldown_seconds: 2.0,
            near_distance: 5.0,
            medium_distance: 15.0,
            ..InventoryConfig::default()
        }
    }

    fn execute(
        state: &mut InventoryState,
        items: &StubItems,
        host: &StubHost,
        config: &InventoryConfig,
        command: Command,
    ) -> Result<ExecutionOutcome, Reject> {
        let env = Env::with_all(items, host, config);
        InventoryEngine::new(state).execute(&env, &command)
    }

    const SHOVEL: ItemHandle = ItemHandle(1);
    const DEBRIS: ItemHandle = ItemHandle(2);

    #[test]
    fn non_authoritative_context_mutates_nothing() {
        let config = balance();
        let items = StubItems::with(&[(2, 4.0)]);
        let host = StubHost {
            authoritative: false,
            ..StubHost::authority()
        };
        let mut state = InventoryState::new(&config);

        let result = execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::AddBagItem {
                item: DEBRIS,
                quantity: 1,
            },
        );

        assert_eq!(result, Err(Reject::NotAuthoritative));
        assert!(state.bag.is_empty());
    }

    #[test]
    fn assign_slot_sets_item_and_occupancy() {
        let config = balance();
        let items = StubItems::with(&[(1, 3.0)]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        let outcome = execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::AssignSlot {
                item: SHOVEL,
                tool_id: ToolId::new(0xabc),
                slot_index: 0,
            },
        )
        .unwrap();

        assert_eq!(outcome.delta.fields, InventoryFields::TOOL_SLOTS);
        let slot = state.tool_slots[0];
        assert!(slot.occupied);
        assert_eq!(slot.item, Some(SHOVEL));
        assert_eq!(slot.tool_id, ToolId::new(0xabc));
    }

    #[test]
    fn assign_slot_overwrites_previous_occupant_silently() {
        let config = balance();
        let items = StubItems::with(&[(1, 3.0)]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        for id in [1u128, 2] {
            execute(
                &mut state,
                &items,
                &host,
                &config,
                Command::AssignSlot {
                    item: SHOVEL,
                    tool_id: ToolId::new(id),
                    slot_index: 1,
                },
            )
            .unwrap();
        }

        assert_eq!(state.tool_slots[1].tool_id, ToolId::new(2));
        assert!(state.tool_slots[0].item.is_none());
    }

    #[test]
    fn slot_index_out_of_range_is_rejected() {
        let config = balance();
        let items = StubItems::with(&[(1, 3.0)]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        let result = execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::ClearSlot { slot_index: 3 },
        );
        assert_eq!(result, Err(Reject::SlotOutOfRange { index: 3, count: 3 }));
    }

    #[test]
    fn clear_slot_resets_occupancy() {
        let config = balance();
        let items = StubItems::with(&[(1, 3.0)]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::AssignSlot {
                item: SHOVEL,
                tool_id: ToolId::new(5),
                slot_index: 2,
            },
        )
        .unwrap();
        let outcome = execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::ClearSlot { slot_index: 2 },
        )
        .unwrap();

        assert_eq!(outcome.delta.fields, InventoryFields::TOOL_SLOTS);
        let slot = state.tool_slots[2];
        assert!(!slot.occupied);
        assert_eq!(slot.tool_id, ToolId::NIL);
        assert!(slot.item.is_none());
    }

    #[test]
    fn add_bag_item_stacks_and_recomputes_weight() {
        let config = balance();
        let items = StubItems::with(&[(2, 4.0)]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        for _ in 0..2 {
            let outcome = execute(
                &mut state,
                &items,
                &host,
                &config,
                Command::AddBagItem {
                    item: DEBRIS,
                    quantity: 1,
                },
            )
            .unwrap();
            assert_eq!(
                outcome.delta.fields,
                InventoryFields::BAG_ENTRIES | InventoryFields::BAG_WEIGHT
            );
        }

        assert_eq!(state.bag.len(), 1);
        assert_eq!(state.bag[0].quantity, 2);
        assert_eq!(state.bag_weight, 8.0);
    }

    #[test]
    fn add_bag_item_exactly_at_cap_is_accepted() {
        let config = InventoryConfig {
            max_bag_weight: 8.0,
            ..balance()
        };
        let items = StubItems::with(&[(2, 4.0)]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::AddBagItem {
                item: DEBRIS,
                quantity: 2,
            },
        )
        .unwrap();
        assert_eq!(state.bag_weight, 8.0);
    }

    #[test]
    fn add_bag_item_over_cap_is_rejected_without_side_effects() {
        let config = balance();
        let items = StubItems::with(&[(2, 4.0)]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::AddBagItem {
                item: DEBRIS,
                quantity: 2,
            },
        )
        .unwrap();
        let result = execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::AddBagItem {
                item: DEBRIS,
                quantity: 1,
            },
        );

        assert!(matches!(result, Err(Reject::OverWeight { .. })));
        assert_eq!(state.bag_weight, 8.0);
        assert_eq!(state.bag[0].quantity, 2);
    }

    #[test]
    fn non_positive_cap_means_unlimited() {
        let config = InventoryConfig {
            max_bag_weight: 0.0,
            ..balance()
        };
        let items = StubItems::with(&[(2, 4.0)]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::AddBagItem {
                item: DEBRIS,
                quantity: 1000,
            },
        )
        .unwrap();
        assert_eq!(state.bag_weight, 4000.0);
    }

    #[test]
    fn remove_bag_item_floors_at_zero_and_drops_entry() {
        let config = balance();
        let items = StubItems::with(&[(2, 1.0)]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::AddBagItem {
                item: DEBRIS,
                quantity: 3,
            },
        )
        .unwrap();
        execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::RemoveBagItem {
                item: DEBRIS,
                quantity: 5,
            },
        )
        .unwrap();

        assert!(state.bag.is_empty());
        assert_eq!(state.bag_weight, 0.0);
    }

    #[test]
    fn remove_missing_item_is_rejected() {
        let config = balance();
        let items = StubItems::with(&[(2, 1.0)]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        let result = execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::RemoveBagItem {
                item: DEBRIS,
                quantity: 1,
            },
        );
        assert_eq!(result, Err(Reject::ItemNotInBag { item: DEBRIS }));
    }

    #[test]
    fn register_twice_updates_in_place() {
        let config = balance();
        let items = StubItems::with(&[]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);
        let id = ToolId::new(9);

        for (owner, x) in [(7, 1.0f32), (8, 2.0)] {
            execute(
                &mut state,
                &items,
                &host,
                &config,
                Command::RegisterDropped {
                    tool_id: id,
                    owner: PlayerId::new(owner),
                    position: Vec3::new(x, 0.0, 0.0),
                },
            )
            .unwrap();
        }

        assert_eq!(state.tracked_tools.len(), 1);
        assert_eq!(state.tracked_tools[0].owner, PlayerId::new(8));
        assert_eq!(state.tracked_tools[0].position.x, 2.0);
    }

    #[test]
    fn update_location_never_creates_a_record() {
        let config = balance();
        let items = StubItems::with(&[]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        let result = execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::UpdateDroppedLocation {
                tool_id: ToolId::new(9),
                position: Vec3::new(1.0, 0.0, 0.0),
            },
        );

        assert_eq!(
            result,
            Err(Reject::UnknownTool {
                tool_id: ToolId::new(9)
            })
        );
        assert!(state.tracked_tools.is_empty());
    }

    #[test]
    fn remove_dropped_deletes_the_record() {
        let config = balance();
        let items = StubItems::with(&[]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);
        let id = ToolId::new(4);

        execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::RegisterDropped {
                tool_id: id,
                owner: PlayerId::new(7),
                position: Vec3::ZERO,
            },
        )
        .unwrap();
        execute(
            &mut state,
            &items,
            &host,
            &config,
            Command::RemoveDropped { tool_id: id },
        )
        .unwrap();

        assert!(state.tracked_tools.is_empty());
    }

    #[test]
    fn nil_tool_id_is_treated_as_not_found() {
        let config = balance();
        let items = StubItems::with(&[]);
        let host = StubHost::authority();
        let mut state = InventoryState::new(&config);

        for command in [
            Command::RegisterDropped {
                tool_id: ToolId::NIL,
                owner: PlayerId::new(7),
                position: Vec3::ZERO,
            },
            Command::RemoveDropped {
                tool_id: ToolId::NIL,
            },
            Command::Locate {
                tool_id: ToolId::NIL,
            },
        ] {
            let result = execute(&mut state, &items, &host, &config, command);
            assert_eq!(result, Err(Reject::InvalidToolId));
        }
    }

    fn register_for_locate(
        state: &mut InventoryState,
        items: &StubItems,
        config: &InventoryConfig,
        id: ToolId,
    ) {
        execute(
            state,
            items,
            &StubHost::authority(),
            config,
            Command::RegisterDropped {
                tool_id: id,
                owner: PlayerId::new(7),
                position: Vec3::new(10.0, 0.0, 0.0),
            },
        )
        .unwrap();
    }

    #[test]
    fn locate_reads_distance_band_and_direction() {
        let config = balance();
        let items = StubItems::with(&[]);
        let mut state = InventoryState::new(&config);
        let id = ToolId::new(0xfeed);
        register_for_locate(&mut state, &items, &config, id);

        let outcome = execute(
            &mut state,
            &items,
            &StubHost::at_time(0.0),
            &config,
            Command::Locate { tool_id: id },
        )
        .unwrap();

        let reading = outcome.locate.unwrap();
        assert_eq!(reading.tool_id, id);
        assert_eq!(reading.distance, 10.0);
        assert_eq!(reading.band, DistanceBand::Medium);
        assert_eq!(reading.direction, Vec3::new(1.0, 0.0, 0.0));
        // Locate mutates no replicated field.
        assert!(outcome.delta.is_empty());
        assert_eq!(state.last_locate_time, Some(0.0));
    }

    #[test]
    fn locate_cooldown_blocks_and_rearms_only_on_accept() {
        let config = balance();
        let items = StubItems::with(&[]);
        let mut state = InventoryState::new(&config);
        let id = ToolId::new(0xfeed);
        register_for_locate(&mut state, &items, &config, id);

        execute(
            &mut state,
            &items,
            &StubHost::at_time(0.0),
            &config,
            Command::Locate { tool_id: id },
        )
        .unwrap();

        let blocked = execute(
            &mut state,
            &items,
            &StubHost::at_time(1.0),
            &config,
            Command::Locate { tool_id: id },
        );
        assert!(matches!(blocked, Err(Reject::CooldownActive { .. })));
        // A rejected request must not push the window forward.
        assert_eq!(state.last_locate_time, Some(0.0));

        execute(
            &mut state,
            &items,
            &StubHost::at_time(2.0),
            &config,
            Command::Locate { tool_id: id },
        )
        .unwrap();
        assert_eq!(state.last_locate_time, Some(2.0));
    }

    #[test]
    fn locate_rejects_foreign_or_undropped_tools() {
        let config = balance();
        let items = StubItems::with(&[]);
        let mut state = InventoryState::new(&config);
        let id = ToolId::new(3);

        execute(
            &mut state,
            &items,
            &StubHost::authority(),
            &config,
            Command::RegisterDropped {
                tool_id: id,
                owner: PlayerId::new(99),
                position: Vec3::new(1.0, 0.0, 0.0),
            },
        )
        .unwrap();

        let result = execute(
            &mut state,
            &items,
            &StubHost::authority(),
            &config,
            Command::Locate { tool_id: id },
        );
        assert!(matches!(result, Err(Reject::NotLocatable { .. })));
        // No accepted request, so the cooldown stays unarmed.
        assert_eq!(state.last_locate_time, None);
    }

    #[test]
    fn locate_on_top_of_tool_reports_zero_direction() {
        let config = balance();
        let items = StubItems::with(&[]);
        let mut state = InventoryState::new(&config);
        let id = ToolId::new(3);

        execute(
            &mut state,
            &items,
            &StubHost::authority(),
            &config,
            Command::RegisterDropped {
                tool_id: id,
                owner: PlayerId::new(7),
                position: Vec3::ZERO,
            },
        )
        .unwrap();

        let outcome = execute(
            &mut state,
            &items,
            &StubHost::authority(),
            &config,
            Command::Locate { tool_id: id },
        )
        .unwrap();

        let reading = outcome.locate.unwrap();
        assert_eq!(reading.direction, Vec3::ZERO);
        assert_eq!(reading.distance, 0.0);
        assert_eq!(reading.band, DistanceBand::Near);
    }

    #[test]
    fn zero_cooldown_never_blocks() {
        let config = InventoryConfig {
            locate_cooldown_seconds: 0.0,
            ..balance()
        };
        let items = StubItems::with(&[]);
        let mut state = InventoryState::new(&config);
        let id = ToolId::new(5);
        register_for_locate(&mut state, &items, &config, id);

        for _ in 0..3 {
            execute(
                &mut state,
                &items,
                &StubHost::at_time(0.0),
                &config,
                Command::Locate { tool_id: id },
            )
            .unwrap();
        }
    }
}
