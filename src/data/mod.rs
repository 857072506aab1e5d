//! Data layer — populates all registries at game startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), fills every registry
//! (ItemRegistry, PetRegistry, MissionRegistry, EnemyRegistry) from the
//! hard-coded game-design data defined in submodules, validates that every
//! cross-reference between them resolves, then transitions the game into
//! GameState::MainMenu.
//!
//! No other domain needs to seed these resources. All domain plugins can
//! safely read them once GameState has advanced past Loading.

pub mod enemies;
pub mod items;
pub mod missions;
pub mod pets;

use bevy::prelude::*;
use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Single system that populates every registry and then transitions to MainMenu.
///
/// Registries only reference each other by string ID, so population order is
/// free — validation runs once at the end, over the complete set.
fn load_all_data(
    mut item_registry: ResMut<ItemRegistry>,
    mut pet_registry: ResMut<PetRegistry>,
    mut mission_registry: ResMut<MissionRegistry>,
    mut enemy_registry: ResMut<EnemyRegistry>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("DataPlugin: populating registries…");

    items::populate_items(&mut item_registry);
    info!("  Items loaded: {}", item_registry.items.len());

    pets::populate_pets(&mut pet_registry);
    info!("  Pets loaded: {}", pet_registry.pets.len());

    missions::populate_missions(&mut mission_registry);
    info!("  Missions loaded: {}", mission_registry.missions.len());

    enemies::populate_enemies(&mut enemy_registry);
    info!("  Enemies loaded: {}", enemy_registry.enemies.len());

    let errors = validate_catalog(
        &item_registry,
        &pet_registry,
        &mission_registry,
        &enemy_registry,
    );
    if !errors.is_empty() {
        for e in &errors {
            error!("  Catalog error: {e}");
        }
        panic!("DataPlugin: catalog validation failed with {} error(s)", errors.len());
    }

    info!("DataPlugin: all registries populated. Transitioning to MainMenu.");
    next_state.set(GameState::MainMenu);
}

/// Checks every ID reference between the registries. The tables are compiled
/// in, so a dangling reference is a build-time content mistake and stopping
/// here beats a runtime lookup miss mid-session.
fn validate_catalog(
    items: &ItemRegistry,
    pets: &PetRegistry,
    missions: &MissionRegistry,
    enemies: &EnemyRegistry,
) -> Vec<String> {
    let mut errors = Vec::new();

    for item in items.items.values() {
        if let Some(hatch) = &item.hatch {
            if item.category != ItemCategory::Egg {
                errors.push(format!("item '{}' has hatch data but is not an egg", item.id));
            }
            if hatch.possible_pets.is_empty() {
                errors.push(format!("egg '{}' has an empty species table", item.id));
            }
            for (pet_id, weight) in &hatch.possible_pets {
                if pets.get(pet_id).is_none() {
                    errors.push(format!("egg '{}' references unknown pet '{}'", item.id, pet_id));
                }
                if *weight <= 0.0 {
                    errors.push(format!("egg '{}' has non-positive weight for '{}'", item.id, pet_id));
                }
            }
        } else if item.category == ItemCategory::Egg {
            errors.push(format!("egg '{}' is missing hatch data", item.id));
        }
    }

    if items.get(GUARANTEED_EGG).is_none() {
        errors.push(format!("guaranteed shop egg '{GUARANTEED_EGG}' is not defined"));
    }

    for mission in missions.missions.values() {
        for (item_id, _) in &mission.reward_items {
            if items.get(item_id).is_none() {
                errors.push(format!(
                    "mission '{}' rewards unknown item '{}'",
                    mission.id, item_id
                ));
            }
        }
        if mission.target == 0 {
            errors.push(format!("mission '{}' has a zero target", mission.id));
        }
    }

    for enemy in enemies.enemies.values() {
        if items.get(&enemy.drop_item).is_none() {
            errors.push(format!(
                "enemy '{}' drops unknown item '{}'",
                enemy.id, enemy.drop_item
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> (ItemRegistry, PetRegistry, MissionRegistry, EnemyRegistry) {
        let mut items = ItemRegistry::default();
        let mut pets = PetRegistry::default();
        let mut missions = MissionRegistry::default();
        let mut enemies = EnemyRegistry::default();
        items::populate_items(&mut items);
        pets::populate_pets(&mut pets);
        missions::populate_missions(&mut missions);
        enemies::populate_enemies(&mut enemies);
        (items, pets, missions, enemies)
    }

    #[test]
    fn shipped_catalog_is_internally_consistent() {
        let (items, pets, missions, enemies) = populated();
        let errors = validate_catalog(&items, &pets, &missions, &enemies);
        assert!(errors.is_empty(), "catalog errors: {errors:?}");
    }

    #[test]
    fn guaranteed_egg_exists_and_is_priced() {
        let (items, ..) = populated();
        let egg = items.get(GUARANTEED_EGG).unwrap();
        assert_eq!(egg.category, ItemCategory::Egg);
        assert!(egg.price.is_some());
    }

    #[test]
    fn validation_catches_dangling_pet_reference() {
        let (mut items, pets, missions, enemies) = populated();
        items
            .items
            .get_mut(GUARANTEED_EGG)
            .unwrap()
            .hatch
            .as_mut()
            .unwrap()
            .possible_pets
            .push(("no_such_pet".into(), 1.0));
        let errors = validate_catalog(&items, &pets, &missions, &enemies);
        assert!(errors.iter().any(|e| e.contains("no_such_pet")));
    }
}
