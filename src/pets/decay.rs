//! Per-frame stat decay and experience for active pets.
//!
//! Benched pets are not touched here; they accrue batch decay once per
//! minute sweep in the economy domain. Which regime a pet is under is
//! decided by roster membership at the moment the system runs.

use bevy::prelude::*;
use crate::shared::*;

/// Ticks every pet on the active roster: drains stats per its species decay
/// rates, then accrues experience while the pet is thriving.
pub fn tick_active_pets(
    time: Res<Time>,
    roster: Res<ActiveRoster>,
    registry: Res<PetRegistry>,
    mut inventory: ResMut<Inventory>,
    mut level_up_events: EventWriter<PetLevelUpEvent>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for &instance_id in &roster.instance_ids {
        let Some(pet) = inventory.pet_mut(instance_id) else {
            warn!("[Pets] Active roster references missing pet #{instance_id}");
            continue;
        };
        let Some(def) = registry.get(&pet.pet_id) else {
            warn!("[Pets] No definition for species '{}'", pet.pet_id);
            continue;
        };

        pet.decay(&def.stat_decay_rate, dt);

        if let Some(new_level) = gain_experience(pet, dt) {
            info!("[Pets] {} leveled up to {}!", pet.name, new_level);
            level_up_events.send(PetLevelUpEvent {
                instance_id,
                new_level,
            });
        }
    }
}

/// Adds XP for `seconds` of thriving time. Returns the new level if a
/// threshold was crossed. The overshoot past the threshold carries over.
pub fn gain_experience(pet: &mut PetInstance, seconds: f32) -> Option<u32> {
    if pet.level >= MAX_PET_LEVEL || !pet.is_thriving() {
        return None;
    }

    pet.experience += EXP_GAIN_RATE * seconds;
    let needed = EXP_FOR_NEXT_LEVEL[pet.level as usize];
    if pet.experience >= needed {
        pet.level += 1;
        pet.experience -= needed;
        Some(pet.level)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet() -> PetInstance {
        PetInstance::new(1, "piglet", "Testy")
    }

    #[test]
    fn decay_drains_hunger_and_happiness_but_not_health() {
        let mut p = pet();
        let rates = DecayRates { hunger: 1.0, happiness: 0.5, health: 2.0 };
        p.decay(&rates, 10.0);
        assert_eq!(p.hunger, 90.0);
        assert_eq!(p.happiness, 95.0);
        assert_eq!(p.health, 100.0); // hunger still above zero
    }

    #[test]
    fn health_drains_only_after_starvation() {
        let mut p = pet();
        p.hunger = 0.0;
        let rates = DecayRates { hunger: 1.0, happiness: 0.5, health: 2.0 };
        p.decay(&rates, 5.0);
        assert_eq!(p.health, 90.0);
    }

    #[test]
    fn stats_clamp_at_zero() {
        let mut p = pet();
        let rates = DecayRates { hunger: 10.0, happiness: 10.0, health: 10.0 };
        p.decay(&rates, 1000.0);
        assert_eq!(p.hunger, 0.0);
        assert_eq!(p.happiness, 0.0);
        assert!(p.health >= 0.0);
    }

    #[test]
    fn experience_accrues_and_carries_remainder() {
        let mut p = pet();
        p.experience = 599.0;
        let leveled = gain_experience(&mut p, 3.0);
        assert_eq!(leveled, Some(1));
        assert_eq!(p.level, 1);
        assert!((p.experience - 2.0).abs() < 1e-4);
    }

    #[test]
    fn no_experience_while_any_stat_is_empty() {
        let mut p = pet();
        p.happiness = 0.0;
        assert_eq!(gain_experience(&mut p, 60.0), None);
        assert_eq!(p.experience, 0.0);
    }

    #[test]
    fn no_experience_at_level_cap() {
        let mut p = pet();
        p.level = MAX_PET_LEVEL;
        assert_eq!(gain_experience(&mut p, 60.0), None);
    }
}
