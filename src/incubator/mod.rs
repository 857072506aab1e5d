//! Incubator domain — the eight-slot egg bank.
//!
//! Each slot walks Empty → EggPlaced → (time passes) → hatch → Empty.
//! Readiness is derived from the wall clock at query time; nothing about the
//! countdown is stored beyond the placement timestamp.
//!
//! All cross-domain communication goes through `crate::shared::*` events and
//! resources. No other domain module is imported here.

use bevy::prelude::*;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Events (internal — used to drive the bank from UI input)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Event, Debug, Clone)]
pub struct PlaceEggEvent {
    pub slot: usize,
    pub item_id: ItemId,
}

#[derive(Event, Debug, Clone)]
pub struct HatchEggEvent {
    pub slot: usize,
}

#[derive(Event, Debug, Clone)]
pub struct UnlockIncubatorEvent {
    pub slot: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncubatorError {
    InvalidSlot,
    SlotLocked,
    SlotOccupied,
    SlotEmpty,
    NotAnEgg,
    NotInInventory,
    NotReady,
    AlreadyUnlocked,
    InsufficientFunds,
    NoValidSpecies,
}

impl IncubatorError {
    pub fn message(&self) -> &'static str {
        match self {
            IncubatorError::InvalidSlot => "There's no incubator there.",
            IncubatorError::SlotLocked => "That incubator is still locked.",
            IncubatorError::SlotOccupied => "That incubator already holds an egg.",
            IncubatorError::SlotEmpty => "Nothing is incubating there.",
            IncubatorError::NotAnEgg => "Only eggs go in the incubator.",
            IncubatorError::NotInInventory => "You don't have that egg.",
            IncubatorError::NotReady => "The egg isn't ready yet.",
            IncubatorError::AlreadyUnlocked => "That incubator is already open.",
            IncubatorError::InsufficientFunds => "Not enough coins to unlock it.",
            IncubatorError::NoValidSpecies => "The egg shivers, then goes still.",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bank operations
// ─────────────────────────────────────────────────────────────────────────────

/// Moves an egg from the inventory into an unlocked, empty slot.
/// Nothing is consumed unless every check passes.
pub fn place_egg(
    bank: &mut IncubatorBank,
    inventory: &mut Inventory,
    registry: &ItemRegistry,
    slot: usize,
    item_id: &str,
    now: f64,
) -> Result<(), IncubatorError> {
    if slot >= INCUBATOR_SLOTS {
        return Err(IncubatorError::InvalidSlot);
    }
    if !bank.is_unlocked(slot) {
        return Err(IncubatorError::SlotLocked);
    }
    if bank.slots[slot].is_some() {
        return Err(IncubatorError::SlotOccupied);
    }
    let def = registry.get(item_id).ok_or(IncubatorError::NotAnEgg)?;
    if def.hatch.is_none() {
        return Err(IncubatorError::NotAnEgg);
    }
    if !inventory.try_remove_item(item_id, 1) {
        return Err(IncubatorError::NotInInventory);
    }

    bank.slots[slot] = Some(PlacedEgg {
        item_id: item_id.to_string(),
        start_time: now,
    });
    Ok(())
}

/// Whether the egg in `slot` has incubated long enough.
pub fn is_ready(bank: &IncubatorBank, registry: &ItemRegistry, slot: usize, now: f64) -> bool {
    let Some(Some(egg)) = bank.slots.get(slot) else {
        return false;
    };
    let hatch_time = registry
        .get(&egg.item_id)
        .and_then(|d| d.hatch.as_ref())
        .map(|h| h.hatch_time_seconds)
        .unwrap_or(DEFAULT_HATCH_SECONDS);
    (now - egg.start_time).max(0.0) >= hatch_time
}

/// Resolves a species from the egg's weighted table. Entries pointing at
/// unknown pets are skipped with a warning rather than failing the hatch.
pub fn resolve_species<R: Rng + ?Sized>(
    hatch: &HatchData,
    pets: &PetRegistry,
    rng: &mut R,
) -> Option<PetId> {
    let valid: Vec<&(PetId, f32)> = hatch
        .possible_pets
        .iter()
        .filter(|(pet_id, _)| {
            let known = pets.get(pet_id).is_some();
            if !known {
                warn!("[Incubator] Egg references unknown pet '{pet_id}', skipping");
            }
            known
        })
        .collect();
    if valid.is_empty() {
        return None;
    }
    let dist = WeightedIndex::new(valid.iter().map(|(_, w)| *w)).ok()?;
    Some(valid[dist.sample(rng)].0.clone())
}

/// Hatches a ready egg: clears the slot and adds the newborn to the
/// inventory. The slot is left untouched on any failure.
pub fn hatch_egg(
    bank: &mut IncubatorBank,
    inventory: &mut Inventory,
    items: &ItemRegistry,
    pets: &PetRegistry,
    slot: usize,
    now: f64,
) -> Result<(u64, PetId), IncubatorError> {
    if slot >= INCUBATOR_SLOTS {
        return Err(IncubatorError::InvalidSlot);
    }
    let Some(egg) = bank.slots[slot].clone() else {
        return Err(IncubatorError::SlotEmpty);
    };
    if !is_ready(bank, items, slot, now) {
        return Err(IncubatorError::NotReady);
    }
    let hatch = items
        .get(&egg.item_id)
        .and_then(|d| d.hatch.as_ref())
        .ok_or(IncubatorError::NotAnEgg)?;

    let species = resolve_species(hatch, pets, &mut rand::thread_rng())
        .ok_or(IncubatorError::NoValidSpecies)?;

    bank.slots[slot] = None;
    let instance_id = inventory.add_pet(&species, None);
    Ok((instance_id, species))
}

/// Buys open a locked slot. The wallet is untouched on failure.
pub fn unlock_slot(
    bank: &mut IncubatorBank,
    wallet: &mut Wallet,
    slot: usize,
) -> Result<u64, IncubatorError> {
    if slot >= INCUBATOR_SLOTS {
        return Err(IncubatorError::InvalidSlot);
    }
    if bank.is_unlocked(slot) {
        return Err(IncubatorError::AlreadyUnlocked);
    }
    let price = bank.unlock_price(slot).ok_or(IncubatorError::InvalidSlot)?;
    if !wallet.try_debit(price) {
        return Err(IncubatorError::InsufficientFunds);
    }
    bank.unlocked[slot] = true;
    Ok(price)
}

/// Fallback incubation period for eggs whose definition lost its hatch data.
const DEFAULT_HATCH_SECONDS: f64 = 3600.0;

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_place_egg(
    mut events: EventReader<PlaceEggEvent>,
    mut bank: ResMut<IncubatorBank>,
    mut inventory: ResMut<Inventory>,
    registry: Res<ItemRegistry>,
    wall: Res<WallClock>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match place_egg(&mut bank, &mut inventory, &registry, ev.slot, &ev.item_id, wall.now) {
            Ok(()) => {
                info!("[Incubator] Placed '{}' in slot {}", ev.item_id, ev.slot);
                toasts.send(ToastEvent::new("The egg settles into the warmth."));
            }
            Err(e) => {
                warn!("[Incubator] Place rejected for slot {}: {:?}", ev.slot, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

pub fn handle_hatch(
    mut events: EventReader<HatchEggEvent>,
    mut bank: ResMut<IncubatorBank>,
    mut inventory: ResMut<Inventory>,
    items: Res<ItemRegistry>,
    pets: Res<PetRegistry>,
    wall: Res<WallClock>,
    mut hatched_events: EventWriter<PetHatchedEvent>,
    mut quest_events: EventWriter<QuestActionEvent>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match hatch_egg(&mut bank, &mut inventory, &items, &pets, ev.slot, wall.now) {
            Ok((instance_id, pet_id)) => {
                let name = inventory
                    .pet(instance_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                info!("[Incubator] Slot {} hatched a {} named {}", ev.slot, pet_id, name);
                hatched_events.send(PetHatchedEvent {
                    instance_id,
                    pet_id: pet_id.clone(),
                });
                quest_events.send(QuestActionEvent {
                    action: QuestAction::Hatch,
                    amount: 1,
                });
                toasts.send(ToastEvent::new(format!("{name} hatched!")));
            }
            Err(e) => {
                warn!("[Incubator] Hatch rejected for slot {}: {:?}", ev.slot, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

pub fn handle_unlock_incubator(
    mut events: EventReader<UnlockIncubatorEvent>,
    mut bank: ResMut<IncubatorBank>,
    mut wallet: ResMut<Wallet>,
    mut money_events: EventWriter<MoneyChangeEvent>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match unlock_slot(&mut bank, &mut wallet, ev.slot) {
            Ok(price) => {
                info!("[Incubator] Unlocked slot {} for {} coins", ev.slot, price);
                money_events.send(MoneyChangeEvent {
                    amount: -(price as i64),
                    reason: format!("incubator slot {}", ev.slot),
                });
                toasts.send(ToastEvent::new("A new incubator hums to life."));
            }
            Err(e) => {
                warn!("[Incubator] Unlock rejected for slot {}: {:?}", ev.slot, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct IncubatorPlugin;

impl Plugin for IncubatorPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlaceEggEvent>()
            .add_event::<HatchEggEvent>()
            .add_event::<UnlockIncubatorEvent>();

        app.add_systems(
            Update,
            (handle_place_egg, handle_hatch, handle_unlock_incubator)
                .run_if(in_state(GameState::Playing)),
        );

        info!("[Incubator] IncubatorPlugin registered.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registries() -> (ItemRegistry, PetRegistry) {
        let mut items = ItemRegistry::default();
        let mut pets = PetRegistry::default();
        crate::data::items::populate_items(&mut items);
        crate::data::pets::populate_pets(&mut pets);
        (items, pets)
    }

    fn inventory_with_egg() -> Inventory {
        let mut inv = Inventory::default();
        inv.add_item(GUARANTEED_EGG, 1);
        inv
    }

    #[test]
    fn placing_consumes_the_egg_and_stamps_the_time() {
        let (items, _) = registries();
        let mut bank = IncubatorBank::default();
        let mut inv = inventory_with_egg();

        place_egg(&mut bank, &mut inv, &items, 0, GUARANTEED_EGG, 500.0).unwrap();
        assert_eq!(inv.count(GUARANTEED_EGG), 0);
        let egg = bank.slots[0].as_ref().unwrap();
        assert_eq!(egg.item_id, GUARANTEED_EGG);
        assert_eq!(egg.start_time, 500.0);
    }

    #[test]
    fn locked_and_occupied_slots_reject() {
        let (items, _) = registries();
        let mut bank = IncubatorBank::default();
        let mut inv = inventory_with_egg();
        inv.add_item(GUARANTEED_EGG, 1);

        assert_eq!(
            place_egg(&mut bank, &mut inv, &items, INCUBATOR_FREE_SLOTS, GUARANTEED_EGG, 0.0),
            Err(IncubatorError::SlotLocked)
        );
        place_egg(&mut bank, &mut inv, &items, 0, GUARANTEED_EGG, 0.0).unwrap();
        assert_eq!(
            place_egg(&mut bank, &mut inv, &items, 0, GUARANTEED_EGG, 0.0),
            Err(IncubatorError::SlotOccupied)
        );
        // One consumed, one rejected attempt leaves one egg.
        assert_eq!(inv.count(GUARANTEED_EGG), 1);
    }

    #[test]
    fn non_eggs_are_refused() {
        let (items, _) = registries();
        let mut bank = IncubatorBank::default();
        let mut inv = Inventory::default();
        inv.add_item("food_apple", 1);
        assert_eq!(
            place_egg(&mut bank, &mut inv, &items, 0, "food_apple", 0.0),
            Err(IncubatorError::NotAnEgg)
        );
        assert_eq!(inv.count("food_apple"), 1);
    }

    #[test]
    fn readiness_follows_the_hatch_timer() {
        let (items, _) = registries();
        let mut bank = IncubatorBank::default();
        let mut inv = inventory_with_egg();
        place_egg(&mut bank, &mut inv, &items, 0, GUARANTEED_EGG, 1000.0).unwrap();

        assert!(!is_ready(&bank, &items, 0, 1000.0 + 3599.0));
        assert!(is_ready(&bank, &items, 0, 1000.0 + 3600.0));
        // Clock rewound past the start: elapsed clamps to zero.
        assert!(!is_ready(&bank, &items, 0, 0.0));
    }

    #[test]
    fn hatching_early_leaves_the_slot_intact() {
        let (items, pets) = registries();
        let mut bank = IncubatorBank::default();
        let mut inv = inventory_with_egg();
        place_egg(&mut bank, &mut inv, &items, 0, GUARANTEED_EGG, 1000.0).unwrap();

        let err = hatch_egg(&mut bank, &mut inv, &items, &pets, 0, 1500.0).unwrap_err();
        assert_eq!(err, IncubatorError::NotReady);
        assert!(bank.slots[0].is_some());
        assert!(inv.pets.is_empty());
    }

    #[test]
    fn hatching_clears_the_slot_and_adds_a_pet() {
        let (items, pets) = registries();
        let mut bank = IncubatorBank::default();
        let mut inv = inventory_with_egg();
        place_egg(&mut bank, &mut inv, &items, 0, GUARANTEED_EGG, 1000.0).unwrap();

        let (instance_id, pet_id) =
            hatch_egg(&mut bank, &mut inv, &items, &pets, 0, 1000.0 + 3600.0).unwrap();
        assert!(bank.slots[0].is_none());
        let pet = inv.pet(instance_id).unwrap();
        assert_eq!(pet.pet_id, pet_id);
        assert!(pets.get(&pet_id).is_some());
    }

    #[test]
    fn species_roll_skips_unknown_pets() {
        let (_, pets) = registries();
        let hatch = HatchData {
            hatch_time_seconds: 1.0,
            possible_pets: vec![("ghost_pet".into(), 1000.0), ("piglet".into(), 0.001)],
        };
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            assert_eq!(
                resolve_species(&hatch, &pets, &mut rng).as_deref(),
                Some("piglet")
            );
        }
    }

    #[test]
    fn species_roll_with_no_valid_entries_is_none() {
        let (_, pets) = registries();
        let hatch = HatchData {
            hatch_time_seconds: 1.0,
            possible_pets: vec![("ghost_pet".into(), 1.0)],
        };
        assert_eq!(resolve_species(&hatch, &pets, &mut rand::thread_rng()), None);
    }

    #[test]
    fn unlock_prices_follow_the_ladder() {
        let mut bank = IncubatorBank::default();
        let mut wallet = Wallet { money: 1000 };

        assert_eq!(
            unlock_slot(&mut bank, &mut wallet, 0),
            Err(IncubatorError::AlreadyUnlocked)
        );
        assert_eq!(unlock_slot(&mut bank, &mut wallet, 4).unwrap(), 20);
        assert_eq!(unlock_slot(&mut bank, &mut wallet, 7).unwrap(), 50);
        assert_eq!(wallet.money, 930);
        assert!(bank.is_unlocked(4));
        assert!(bank.is_unlocked(7));
    }

    #[test]
    fn unlock_without_funds_changes_nothing() {
        let mut bank = IncubatorBank::default();
        let mut wallet = Wallet { money: 10 };
        assert_eq!(
            unlock_slot(&mut bank, &mut wallet, 4),
            Err(IncubatorError::InsufficientFunds)
        );
        assert!(!bank.is_unlocked(4));
        assert_eq!(wallet.money, 10);
    }
}
