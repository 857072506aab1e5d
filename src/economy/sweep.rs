//! The minute sweep: once per 60 seconds of accumulated play, every active
//! pet pays out coins scaled by its condition and level, and every benched
//! pet catches up with one batch minute of decay.
//!
//! The accumulator keeps its remainder across fires, so a long frame never
//! loses partial-minute progress. Roster membership is sampled at the
//! boundary: whichever side of the roster a pet is on when the sweep fires
//! decides which treatment it gets for that minute.

use bevy::prelude::*;
use crate::shared::*;

#[derive(Resource, Debug, Clone, Default)]
pub struct MoneySweepTimer {
    pub accumulated_ms: f64,
}

/// Coins one pet produces for one sweep minute.
pub fn sweep_payout(pet: &PetInstance, def: &PetDef) -> u64 {
    let level_bonus = 1.0 + (pet.level as f32 / 10.0);
    let payout = def.base_money_per_minute as f32 * pet.condition_ratio() * level_bonus;
    payout as u64
}

pub fn run_money_sweep(
    time: Res<Time>,
    mut timer: ResMut<MoneySweepTimer>,
    roster: Res<ActiveRoster>,
    registry: Res<PetRegistry>,
    mut inventory: ResMut<Inventory>,
    mut wallet: ResMut<Wallet>,
    mut money_events: EventWriter<MoneyChangeEvent>,
    mut quest_events: EventWriter<QuestActionEvent>,
) {
    timer.accumulated_ms += time.delta().as_secs_f64() * 1000.0;

    while timer.accumulated_ms >= MONEY_SWEEP_INTERVAL_MS {
        timer.accumulated_ms -= MONEY_SWEEP_INTERVAL_MS;

        let mut total_generated: u64 = 0;
        for pet in &inventory.pets {
            if !roster.contains(pet.instance_id) {
                continue;
            }
            let Some(def) = registry.get(&pet.pet_id) else {
                warn!("[Economy] No definition for species '{}'", pet.pet_id);
                continue;
            };
            total_generated += sweep_payout(pet, def);
        }

        if total_generated > 0 {
            wallet.credit(total_generated);
            money_events.send(MoneyChangeEvent {
                amount: total_generated as i64,
                reason: "pet earnings".into(),
            });
            quest_events.send(QuestActionEvent {
                action: QuestAction::EarnMoney,
                amount: total_generated.min(u32::MAX as u64) as u32,
            });
            info!("[Economy] Active pets generated {} coins", total_generated);
        }

        // Benched pets get their minute of decay in one lump.
        for pet in inventory.pets.iter_mut() {
            if roster.contains(pet.instance_id) {
                continue;
            }
            if let Some(def) = registry.get(&pet.pet_id) {
                pet.decay(&def.stat_decay_rate, BATCH_DECAY_SECONDS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piglet_def() -> PetDef {
        PetDef {
            id: "piglet".into(),
            name: "Piglet".into(),
            rarity: Rarity::Common,
            stat_decay_rate: DecayRates { hunger: 0.1, happiness: 0.1, health: 0.1 },
            base_money_per_minute: 10,
            can_attack: false,
            damage: 0.0,
        }
    }

    #[test]
    fn payout_scales_with_condition() {
        let def = piglet_def();
        let mut pet = PetInstance::new(1, "piglet", "P");
        assert_eq!(sweep_payout(&pet, &def), 10); // perfect condition

        pet.health = 50.0;
        pet.happiness = 50.0;
        pet.hunger = 50.0;
        assert_eq!(sweep_payout(&pet, &def), 5);
    }

    #[test]
    fn payout_scales_with_level() {
        let def = piglet_def();
        let mut pet = PetInstance::new(1, "piglet", "P");
        pet.level = 10;
        assert_eq!(sweep_payout(&pet, &def), 20); // 10 * 1.0 * 2.0
    }

    #[test]
    fn payout_truncates_fractions() {
        let def = piglet_def();
        let mut pet = PetInstance::new(1, "piglet", "P");
        pet.level = 1; // bonus 1.1
        pet.health = 90.0;
        pet.happiness = 90.0;
        pet.hunger = 90.0;
        // 10 * 0.9 * 1.1 = 9.9 → 9
        assert_eq!(sweep_payout(&pet, &def), 9);
    }

    #[test]
    fn zeroed_pet_pays_nothing() {
        let def = piglet_def();
        let mut pet = PetInstance::new(1, "piglet", "P");
        pet.health = 0.0;
        pet.happiness = 0.0;
        pet.hunger = 0.0;
        assert_eq!(sweep_payout(&pet, &def), 0);
    }
}
