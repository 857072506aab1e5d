//! Active roster membership and pet-slot unlocks.
//!
//! The roster is the list of pets currently out in the world. A pet appears
//! at most once; capacity grows by buying slots, from 5 up to 15.

use bevy::prelude::*;
use crate::shared::*;

#[derive(Event, Debug, Clone)]
pub struct ActivatePetEvent {
    pub instance_id: u64,
}

#[derive(Event, Debug, Clone)]
pub struct DeactivatePetEvent {
    pub instance_id: u64,
}

/// Buy the next pet slot, if any remain.
#[derive(Event, Debug, Clone)]
pub struct UnlockPetSlotEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    NoSuchPet,
    AlreadyActive,
    NotActive,
    RosterFull,
    AllSlotsUnlocked,
    InsufficientFunds,
}

impl RosterError {
    pub fn message(&self) -> &'static str {
        match self {
            RosterError::NoSuchPet => "That pet isn't here.",
            RosterError::AlreadyActive => "That pet is already out.",
            RosterError::NotActive => "That pet isn't out right now.",
            RosterError::RosterFull => "No free pet slots. Unlock another!",
            RosterError::AllSlotsUnlocked => "Every pet slot is already unlocked.",
            RosterError::InsufficientFunds => "Not enough coins for that slot.",
        }
    }
}

/// Puts a pet on the roster. Rejects duplicates and overflow.
pub fn activate(
    roster: &mut ActiveRoster,
    inventory: &Inventory,
    instance_id: u64,
) -> Result<(), RosterError> {
    if inventory.pet(instance_id).is_none() {
        return Err(RosterError::NoSuchPet);
    }
    if roster.contains(instance_id) {
        return Err(RosterError::AlreadyActive);
    }
    if roster.is_full() {
        return Err(RosterError::RosterFull);
    }
    roster.instance_ids.push(instance_id);
    Ok(())
}

pub fn deactivate(roster: &mut ActiveRoster, instance_id: u64) -> Result<(), RosterError> {
    let idx = roster
        .instance_ids
        .iter()
        .position(|&id| id == instance_id)
        .ok_or(RosterError::NotActive)?;
    roster.instance_ids.remove(idx);
    Ok(())
}

/// Debits the next slot price and widens the roster. The wallet is untouched
/// on any failure.
pub fn unlock_next_slot(roster: &mut ActiveRoster, wallet: &mut Wallet) -> Result<u64, RosterError> {
    let price = roster.next_slot_price().ok_or(RosterError::AllSlotsUnlocked)?;
    if !wallet.try_debit(price) {
        return Err(RosterError::InsufficientFunds);
    }
    roster.unlocked_slots += 1;
    Ok(price)
}

pub fn handle_activate(
    mut events: EventReader<ActivatePetEvent>,
    mut roster: ResMut<ActiveRoster>,
    inventory: Res<Inventory>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match activate(&mut roster, &inventory, ev.instance_id) {
            Ok(()) => info!("[Pets] Pet #{} is now active", ev.instance_id),
            Err(e) => {
                warn!("[Pets] Activate rejected for #{}: {:?}", ev.instance_id, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

pub fn handle_deactivate(
    mut events: EventReader<DeactivatePetEvent>,
    mut roster: ResMut<ActiveRoster>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match deactivate(&mut roster, ev.instance_id) {
            Ok(()) => info!("[Pets] Pet #{} benched", ev.instance_id),
            Err(e) => {
                warn!("[Pets] Deactivate rejected for #{}: {:?}", ev.instance_id, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

pub fn handle_unlock_pet_slot(
    mut events: EventReader<UnlockPetSlotEvent>,
    mut roster: ResMut<ActiveRoster>,
    mut wallet: ResMut<Wallet>,
    mut money_events: EventWriter<MoneyChangeEvent>,
    mut quest_events: EventWriter<QuestActionEvent>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for _ in events.read() {
        match unlock_next_slot(&mut roster, &mut wallet) {
            Ok(price) => {
                info!(
                    "[Pets] Unlocked pet slot {} for {} coins",
                    roster.unlocked_slots, price
                );
                money_events.send(MoneyChangeEvent {
                    amount: -(price as i64),
                    reason: "pet slot unlock".into(),
                });
                quest_events.send(QuestActionEvent {
                    action: QuestAction::UnlockPetSlot,
                    amount: 1,
                });
                toasts.send(ToastEvent::new(format!(
                    "Pet slot {} unlocked!",
                    roster.unlocked_slots
                )));
            }
            Err(e) => {
                warn!("[Pets] Slot unlock rejected: {:?}", e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}
