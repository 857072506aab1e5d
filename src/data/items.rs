use crate::shared::*;
use std::collections::HashMap;

fn effects(pairs: &[(StatKind, f32)]) -> HashMap<StatKind, f32> {
    pairs.iter().copied().collect()
}

/// Populate the ItemRegistry with every item definition.
///
/// Categories:
///   Food  — restores hunger (and usually a little happiness) when fed.
///   Toy   — restores happiness when played with.
///   Egg   — placed in an incubator; carries a hatch table.
///   Material — challenge-map loot, sold rather than used.
///
/// `price: None` means the shop never stocks the item.
pub fn populate_items(registry: &mut ItemRegistry) {
    let items: Vec<ItemDef> = vec![
        // ── Food ───────────────────────────────────────────────────────────

        ItemDef {
            id: "food_kibble".into(),
            name: "Kibble".into(),
            description: "Dry, crunchy, dependable.".into(),
            category: ItemCategory::Food,
            price: Some(5),
            effects: effects(&[(StatKind::Hunger, 15.0)]),
            hatch: None,
        },
        ItemDef {
            id: "food_apple".into(),
            name: "Apple".into(),
            description: "Crisp and sweet. Pets fight over the core.".into(),
            category: ItemCategory::Food,
            price: Some(8),
            effects: effects(&[(StatKind::Hunger, 20.0), (StatKind::Happiness, 5.0)]),
            hatch: None,
        },
        ItemDef {
            id: "food_sandwich".into(),
            name: "Sandwich".into(),
            description: "A full meal between two slices.".into(),
            category: ItemCategory::Food,
            price: Some(15),
            effects: effects(&[(StatKind::Hunger, 35.0), (StatKind::Happiness, 5.0)]),
            hatch: None,
        },
        ItemDef {
            id: "food_steak".into(),
            name: "Steak".into(),
            description: "Seared on both sides. Reserved for good pets.".into(),
            category: ItemCategory::Food,
            price: Some(30),
            effects: effects(&[
                (StatKind::Hunger, 60.0),
                (StatKind::Happiness, 10.0),
                (StatKind::Health, 5.0),
            ]),
            hatch: None,
        },
        ItemDef {
            id: "food_tonic".into(),
            name: "Herbal Tonic".into(),
            description: "Bitter, but it works.".into(),
            category: ItemCategory::Food,
            price: Some(45),
            effects: effects(&[(StatKind::Health, 40.0), (StatKind::Hunger, 5.0)]),
            hatch: None,
        },

        // ── Toys ───────────────────────────────────────────────────────────

        ItemDef {
            id: "toy_ball".into(),
            name: "Rubber Ball".into(),
            description: "Bounces in directions nobody predicted.".into(),
            category: ItemCategory::Toy,
            price: Some(10),
            effects: effects(&[(StatKind::Happiness, 20.0)]),
            hatch: None,
        },
        ItemDef {
            id: "toy_frisbee".into(),
            name: "Frisbee".into(),
            description: "Comes back eventually, pet attached.".into(),
            category: ItemCategory::Toy,
            price: Some(18),
            effects: effects(&[(StatKind::Happiness, 35.0)]),
            hatch: None,
        },
        ItemDef {
            id: "toy_plush".into(),
            name: "Plush Companion".into(),
            description: "Soft enough to nap against.".into(),
            category: ItemCategory::Toy,
            price: Some(35),
            effects: effects(&[(StatKind::Happiness, 55.0), (StatKind::Health, 5.0)]),
            hatch: None,
        },

        // ── Eggs ───────────────────────────────────────────────────────────

        ItemDef {
            id: "egg_common".into(),
            name: "Common Egg".into(),
            description: "Warm to the touch. Something ordinary inside.".into(),
            category: ItemCategory::Egg,
            price: Some(50),
            effects: HashMap::new(),
            hatch: Some(HatchData {
                hatch_time_seconds: 3600.0,
                possible_pets: vec![
                    ("piglet".into(), 40.0),
                    ("bunny".into(), 30.0),
                    ("kitten".into(), 20.0),
                    ("puppy".into(), 10.0),
                ],
            }),
        },
        ItemDef {
            id: "egg_forest".into(),
            name: "Forest Egg".into(),
            description: "Speckled with moss. It hums at dusk.".into(),
            category: ItemCategory::Egg,
            price: Some(120),
            effects: HashMap::new(),
            hatch: Some(HatchData {
                hatch_time_seconds: 7200.0,
                possible_pets: vec![
                    ("fawn".into(), 45.0),
                    ("fox_kit".into(), 35.0),
                    ("owlet".into(), 20.0),
                ],
            }),
        },
        ItemDef {
            id: "egg_mythic".into(),
            name: "Mythic Egg".into(),
            description: "The shell shifts color when nobody is looking.".into(),
            category: ItemCategory::Egg,
            price: Some(400),
            effects: HashMap::new(),
            hatch: Some(HatchData {
                hatch_time_seconds: 14400.0,
                possible_pets: vec![
                    ("owlet".into(), 50.0),
                    ("dragonet".into(), 35.0),
                    ("unicorn_foal".into(), 15.0),
                ],
            }),
        },

        // ── Materials ──────────────────────────────────────────────────────

        ItemDef {
            id: "chicken_meat".into(),
            name: "Chicken Meat".into(),
            description: "Spoils of the challenge yard. Sells by the cut.".into(),
            category: ItemCategory::Material,
            price: None,
            effects: HashMap::new(),
            hatch: None,
        },
        ItemDef {
            id: "dark_feather".into(),
            name: "Dark Feather".into(),
            description: "Shed by the meaner birds.".into(),
            category: ItemCategory::Material,
            price: None,
            effects: HashMap::new(),
            hatch: None,
        },
    ];

    for item in items {
        registry.items.insert(item.id.clone(), item);
    }
}
