//! Using items on pets. Food and toys share one path: the item's stat
//! effects apply (clamped to the gauge), the item is consumed, and the
//! category decides the reaction effect and the quest verb.

use bevy::prelude::*;
use crate::shared::*;

/// Request from the interaction layer: use `item_id` on pet `instance_id`.
#[derive(Event, Debug, Clone)]
pub struct FeedPetEvent {
    pub instance_id: u64,
    pub item_id: ItemId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedError {
    UnknownItem,
    NotUsable,
    NotInInventory,
    NoSuchPet,
}

impl FeedError {
    pub fn message(&self) -> &'static str {
        match self {
            FeedError::UnknownItem => "That item doesn't exist.",
            FeedError::NotUsable => "Your pet sniffs it and walks away.",
            FeedError::NotInInventory => "You don't have any of those.",
            FeedError::NoSuchPet => "That pet isn't here.",
        }
    }
}

/// Validates and applies a feed/play request against the inventory.
/// Nothing is consumed unless every check passes.
pub fn use_item_on_pet(
    inventory: &mut Inventory,
    registry: &ItemRegistry,
    instance_id: u64,
    item_id: &str,
) -> Result<ItemCategory, FeedError> {
    let def = registry.get(item_id).ok_or(FeedError::UnknownItem)?;
    if !matches!(def.category, ItemCategory::Food | ItemCategory::Toy) {
        return Err(FeedError::NotUsable);
    }
    if !inventory.has(item_id, 1) {
        return Err(FeedError::NotInInventory);
    }
    if inventory.pet(instance_id).is_none() {
        return Err(FeedError::NoSuchPet);
    }

    // Checks done; commit.
    inventory.try_remove_item(item_id, 1);
    let pet = inventory
        .pet_mut(instance_id)
        .ok_or(FeedError::NoSuchPet)?;
    for (&stat, &delta) in &def.effects {
        pet.adjust_stat(stat, delta);
    }
    Ok(def.category)
}

pub fn handle_feed(
    mut events: EventReader<FeedPetEvent>,
    mut inventory: ResMut<Inventory>,
    registry: Res<ItemRegistry>,
    mut effect_events: EventWriter<PetEffectEvent>,
    mut quest_events: EventWriter<QuestActionEvent>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match use_item_on_pet(&mut inventory, &registry, ev.instance_id, &ev.item_id) {
            Ok(ItemCategory::Food) => {
                effect_events.send(PetEffectEvent {
                    instance_id: ev.instance_id,
                    effect: PetEffect::Heart,
                });
                quest_events.send(QuestActionEvent {
                    action: QuestAction::Feed,
                    amount: 1,
                });
                info!("[Pets] Fed pet #{} with {}", ev.instance_id, ev.item_id);
            }
            Ok(_) => {
                // Toys are the only other usable category.
                effect_events.send(PetEffectEvent {
                    instance_id: ev.instance_id,
                    effect: PetEffect::Smile,
                });
                quest_events.send(QuestActionEvent {
                    action: QuestAction::Play,
                    amount: 1,
                });
                info!("[Pets] Played with pet #{} using {}", ev.instance_id, ev.item_id);
            }
            Err(e) => {
                warn!("[Pets] Feed request rejected: {:?}", e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn setup() -> (Inventory, ItemRegistry, u64) {
        let mut inv = Inventory::default();
        let id = inv.add_pet("piglet", Some("Testy".into()));
        let mut reg = ItemRegistry::default();
        crate::data::items::populate_items(&mut reg);
        (inv, reg, id)
    }

    #[test]
    fn feeding_applies_effects_and_consumes_item() {
        let (mut inv, reg, id) = setup();
        inv.add_item("food_apple", 2);
        inv.pet_mut(id).unwrap().hunger = 50.0;

        let cat = use_item_on_pet(&mut inv, &reg, id, "food_apple").unwrap();
        assert_eq!(cat, ItemCategory::Food);
        assert_eq!(inv.count("food_apple"), 1);
        assert_eq!(inv.pet(id).unwrap().hunger, 70.0);
    }

    #[test]
    fn effects_clamp_at_the_gauge_cap() {
        let (mut inv, reg, id) = setup();
        inv.add_item("food_apple", 1);
        inv.pet_mut(id).unwrap().hunger = 95.0;

        use_item_on_pet(&mut inv, &reg, id, "food_apple").unwrap();
        assert_eq!(inv.pet(id).unwrap().hunger, STAT_MAX);
    }

    #[test]
    fn missing_item_rejects_without_side_effects() {
        let (mut inv, reg, id) = setup();
        let before = inv.pet(id).unwrap().clone();
        let err = use_item_on_pet(&mut inv, &reg, id, "food_apple").unwrap_err();
        assert_eq!(err, FeedError::NotInInventory);
        assert_eq!(*inv.pet(id).unwrap(), before);
    }

    #[test]
    fn eggs_cannot_be_fed() {
        let (mut inv, reg, id) = setup();
        inv.add_item("egg_common", 1);
        let err = use_item_on_pet(&mut inv, &reg, id, "egg_common").unwrap_err();
        assert_eq!(err, FeedError::NotUsable);
        assert_eq!(inv.count("egg_common"), 1);
    }
}
