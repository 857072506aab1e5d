//! Storage domain — the vault every profile shares.
//!
//! Items and pets move between the current profile's inventory and the
//! shared vault. Active pets never transfer: bench a pet before boxing it.
//!
//! All cross-domain communication goes through `crate::shared::*` events and
//! resources. No other domain module is imported here.

use bevy::prelude::*;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Events (internal — used to drive transfers from UI input)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Event, Debug, Clone)]
pub struct StoreItemEvent {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Event, Debug, Clone)]
pub struct RetrieveItemEvent {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Event, Debug, Clone)]
pub struct StorePetEvent {
    pub instance_id: u64,
}

#[derive(Event, Debug, Clone)]
pub struct RetrievePetEvent {
    pub instance_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    NotEnoughItems,
    NoSuchPet,
    PetActive,
    NotInStorage,
}

impl StorageError {
    pub fn message(&self) -> &'static str {
        match self {
            StorageError::NotEnoughItems => "You don't have that many.",
            StorageError::NoSuchPet => "That pet isn't here.",
            StorageError::PetActive => "Cannot move an active pet!",
            StorageError::NotInStorage => "Storage doesn't hold that.",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transfers
// ─────────────────────────────────────────────────────────────────────────────

/// Inventory → vault. All-or-nothing.
pub fn store_item(
    inventory: &mut Inventory,
    storage: &mut SharedStorage,
    item_id: &str,
    quantity: u32,
) -> Result<(), StorageError> {
    if !inventory.try_remove_item(item_id, quantity) {
        return Err(StorageError::NotEnoughItems);
    }
    storage.add_item(item_id, quantity);
    Ok(())
}

/// Vault → inventory. All-or-nothing.
pub fn retrieve_item(
    inventory: &mut Inventory,
    storage: &mut SharedStorage,
    item_id: &str,
    quantity: u32,
) -> Result<(), StorageError> {
    if !storage.try_remove_item(item_id, quantity) {
        return Err(StorageError::NotInStorage);
    }
    inventory.add_item(item_id, quantity);
    Ok(())
}

/// Boxes a pet into the vault. The pet keeps its identity and stats; its
/// roster exclusivity is what blocks the move.
pub fn store_pet(
    inventory: &mut Inventory,
    storage: &mut SharedStorage,
    roster: &ActiveRoster,
    instance_id: u64,
) -> Result<(), StorageError> {
    if inventory.pet(instance_id).is_none() {
        return Err(StorageError::NoSuchPet);
    }
    if roster.contains(instance_id) {
        return Err(StorageError::PetActive);
    }
    let pet = inventory
        .remove_pet(instance_id)
        .ok_or(StorageError::NoSuchPet)?;
    storage.pets.push(pet);
    Ok(())
}

/// Takes a pet back out of the vault into the current profile. Returns the
/// id it landed on, which differs from `instance_id` when another profile's
/// pet collides with one this inventory already numbered.
pub fn retrieve_pet(
    inventory: &mut Inventory,
    storage: &mut SharedStorage,
    instance_id: u64,
) -> Result<u64, StorageError> {
    let pet = storage
        .remove_pet(instance_id)
        .ok_or(StorageError::NotInStorage)?;
    Ok(inventory.adopt_pet(pet))
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_store_item(
    mut events: EventReader<StoreItemEvent>,
    mut inventory: ResMut<Inventory>,
    mut storage: ResMut<SharedStorage>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match store_item(&mut inventory, &mut storage, &ev.item_id, ev.quantity) {
            Ok(()) => info!("[Storage] Stored {}x {}", ev.quantity, ev.item_id),
            Err(e) => {
                warn!("[Storage] Store rejected for '{}': {:?}", ev.item_id, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

pub fn handle_retrieve_item(
    mut events: EventReader<RetrieveItemEvent>,
    mut inventory: ResMut<Inventory>,
    mut storage: ResMut<SharedStorage>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match retrieve_item(&mut inventory, &mut storage, &ev.item_id, ev.quantity) {
            Ok(()) => info!("[Storage] Retrieved {}x {}", ev.quantity, ev.item_id),
            Err(e) => {
                warn!("[Storage] Retrieve rejected for '{}': {:?}", ev.item_id, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

pub fn handle_store_pet(
    mut events: EventReader<StorePetEvent>,
    mut inventory: ResMut<Inventory>,
    mut storage: ResMut<SharedStorage>,
    roster: Res<ActiveRoster>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match store_pet(&mut inventory, &mut storage, &roster, ev.instance_id) {
            Ok(()) => info!("[Storage] Boxed pet #{}", ev.instance_id),
            Err(e) => {
                warn!("[Storage] Box rejected for #{}: {:?}", ev.instance_id, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

pub fn handle_retrieve_pet(
    mut events: EventReader<RetrievePetEvent>,
    mut inventory: ResMut<Inventory>,
    mut storage: ResMut<SharedStorage>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match retrieve_pet(&mut inventory, &mut storage, ev.instance_id) {
            Ok(id) => info!("[Storage] Unboxed pet #{} as #{}", ev.instance_id, id),
            Err(e) => {
                warn!("[Storage] Unbox rejected for #{}: {:?}", ev.instance_id, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct StoragePlugin;

impl Plugin for StoragePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<StoreItemEvent>()
            .add_event::<RetrieveItemEvent>()
            .add_event::<StorePetEvent>()
            .add_event::<RetrievePetEvent>();

        app.add_systems(
            Update,
            (
                handle_store_item,
                handle_retrieve_item,
                handle_store_pet,
                handle_retrieve_pet,
            )
                .run_if(in_state(GameState::Playing)),
        );

        info!("[Storage] StoragePlugin registered.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_transfers_round_trip() {
        let mut inv = Inventory::default();
        let mut vault = SharedStorage::default();
        inv.add_item("food_apple", 5);

        store_item(&mut inv, &mut vault, "food_apple", 3).unwrap();
        assert_eq!(inv.count("food_apple"), 2);
        assert_eq!(vault.items.get("food_apple"), Some(&3));

        retrieve_item(&mut inv, &mut vault, "food_apple", 3).unwrap();
        assert_eq!(inv.count("food_apple"), 5);
        assert!(vault.items.is_empty());
    }

    #[test]
    fn short_stacks_reject_without_partial_moves() {
        let mut inv = Inventory::default();
        let mut vault = SharedStorage::default();
        inv.add_item("food_apple", 2);

        assert_eq!(
            store_item(&mut inv, &mut vault, "food_apple", 3),
            Err(StorageError::NotEnoughItems)
        );
        assert_eq!(inv.count("food_apple"), 2);
        assert!(vault.items.is_empty());
    }

    #[test]
    fn active_pets_cannot_be_boxed() {
        let mut inv = Inventory::default();
        let mut vault = SharedStorage::default();
        let mut roster = ActiveRoster::default();
        let id = inv.add_pet("piglet", Some("Ham".into()));
        roster.instance_ids.push(id);

        assert_eq!(
            store_pet(&mut inv, &mut vault, &roster, id),
            Err(StorageError::PetActive)
        );
        assert!(inv.pet(id).is_some());
        assert!(vault.pets.is_empty());
    }

    #[test]
    fn benched_pets_keep_identity_through_the_vault() {
        let mut inv = Inventory::default();
        let mut vault = SharedStorage::default();
        let roster = ActiveRoster::default();
        let id = inv.add_pet("piglet", Some("Ham".into()));
        inv.pet_mut(id).unwrap().level = 4;

        store_pet(&mut inv, &mut vault, &roster, id).unwrap();
        assert!(inv.pet(id).is_none());

        retrieve_pet(&mut inv, &mut vault, id).unwrap();
        let pet = inv.pet(id).unwrap();
        assert_eq!(pet.name, "Ham");
        assert_eq!(pet.level, 4);
    }

    #[test]
    fn retrieved_pets_never_collide_with_new_ids() {
        let mut inv = Inventory::default();
        let mut vault = SharedStorage::default();
        let roster = ActiveRoster::default();
        let id = inv.add_pet("piglet", Some("Ham".into()));
        store_pet(&mut inv, &mut vault, &roster, id).unwrap();

        // A different profile with its own counter adopts the boxed pet.
        let mut other = Inventory::default();
        retrieve_pet(&mut other, &mut vault, id).unwrap();
        let fresh = other.add_pet("bunny", None);
        assert_ne!(fresh, id);
    }

    #[test]
    fn colliding_ids_are_retagged_on_retrieval() {
        // Profile B boxes its pet #1.
        let mut inv_b = Inventory::default();
        let mut vault = SharedStorage::default();
        let roster = ActiveRoster::default();
        let boxed = inv_b.add_pet("piglet", Some("Ham".into()));
        store_pet(&mut inv_b, &mut vault, &roster, boxed).unwrap();

        // Profile A numbered its own pets independently and owns #1 too.
        let mut inv_a = Inventory::default();
        let local = inv_a.add_pet("bunny", Some("Clover".into()));
        assert_eq!(local, boxed);

        let landed = retrieve_pet(&mut inv_a, &mut vault, boxed).unwrap();
        assert_ne!(landed, local);
        assert_eq!(
            inv_a
                .pets
                .iter()
                .filter(|p| p.instance_id == local)
                .count(),
            1
        );
        assert_eq!(inv_a.pet(local).unwrap().name, "Clover");
        assert_eq!(inv_a.pet(landed).unwrap().name, "Ham");

        // The re-tagged id never gets reissued either.
        let fresh = inv_a.add_pet("bunny", None);
        assert_ne!(fresh, landed);
    }
}
