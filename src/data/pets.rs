use crate::shared::*;

/// Populate the PetRegistry with every species definition.
///
/// Decay rates are points per second; an untouched pet runs its hunger gauge
/// dry in roughly 1-3 hours of play depending on species. Money figures are
/// the per-minute base before condition and level scaling. Only some species
/// can be fielded in the challenge yard.
pub fn populate_pets(registry: &mut PetRegistry) {
    let pets: Vec<PetDef> = vec![
        // ── Common ─────────────────────────────────────────────────────────

        PetDef {
            id: "piglet".into(),
            name: "Piglet".into(),
            rarity: Rarity::Common,
            stat_decay_rate: DecayRates { hunger: 0.020, happiness: 0.015, health: 0.010 },
            base_money_per_minute: 5,
            can_attack: false,
            damage: 0.0,
        },
        PetDef {
            id: "bunny".into(),
            name: "Bunny".into(),
            rarity: Rarity::Common,
            stat_decay_rate: DecayRates { hunger: 0.025, happiness: 0.012, health: 0.010 },
            base_money_per_minute: 6,
            can_attack: false,
            damage: 0.0,
        },
        PetDef {
            id: "kitten".into(),
            name: "Kitten".into(),
            rarity: Rarity::Common,
            stat_decay_rate: DecayRates { hunger: 0.018, happiness: 0.020, health: 0.010 },
            base_money_per_minute: 7,
            can_attack: true,
            damage: 8.0,
        },

        // ── Uncommon ───────────────────────────────────────────────────────

        PetDef {
            id: "puppy".into(),
            name: "Puppy".into(),
            rarity: Rarity::Uncommon,
            stat_decay_rate: DecayRates { hunger: 0.022, happiness: 0.018, health: 0.008 },
            base_money_per_minute: 10,
            can_attack: true,
            damage: 12.0,
        },
        PetDef {
            id: "fawn".into(),
            name: "Fawn".into(),
            rarity: Rarity::Uncommon,
            stat_decay_rate: DecayRates { hunger: 0.015, happiness: 0.015, health: 0.008 },
            base_money_per_minute: 12,
            can_attack: false,
            damage: 0.0,
        },

        // ── Rare ───────────────────────────────────────────────────────────

        PetDef {
            id: "fox_kit".into(),
            name: "Fox Kit".into(),
            rarity: Rarity::Rare,
            stat_decay_rate: DecayRates { hunger: 0.020, happiness: 0.022, health: 0.006 },
            base_money_per_minute: 18,
            can_attack: true,
            damage: 20.0,
        },
        PetDef {
            id: "owlet".into(),
            name: "Owlet".into(),
            rarity: Rarity::Rare,
            stat_decay_rate: DecayRates { hunger: 0.012, happiness: 0.016, health: 0.006 },
            base_money_per_minute: 22,
            can_attack: false,
            damage: 0.0,
        },

        // ── Legendary ──────────────────────────────────────────────────────

        PetDef {
            id: "dragonet".into(),
            name: "Dragonet".into(),
            rarity: Rarity::Legendary,
            stat_decay_rate: DecayRates { hunger: 0.030, happiness: 0.020, health: 0.004 },
            base_money_per_minute: 40,
            can_attack: true,
            damage: 35.0,
        },
        PetDef {
            id: "unicorn_foal".into(),
            name: "Unicorn Foal".into(),
            rarity: Rarity::Legendary,
            stat_decay_rate: DecayRates { hunger: 0.010, happiness: 0.010, health: 0.004 },
            base_money_per_minute: 50,
            can_attack: false,
            damage: 0.0,
        },
    ];

    for pet in pets {
        registry.pets.insert(pet.id.clone(), pet);
    }
}
