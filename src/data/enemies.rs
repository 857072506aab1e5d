use crate::shared::*;

/// Populate the EnemyRegistry with the challenge-yard roster.
pub fn populate_enemies(registry: &mut EnemyRegistry) {
    let enemies: Vec<EnemyDef> = vec![
        EnemyDef {
            id: "chicken".into(),
            name: "Chicken".into(),
            health: 20.0,
            drop_chance: 0.5,
            drop_item: "chicken_meat".into(),
        },
        EnemyDef {
            id: "light_brown_chicken".into(),
            name: "Light Brown Chicken".into(),
            health: 30.0,
            drop_chance: 0.5,
            drop_item: "chicken_meat".into(),
        },
        EnemyDef {
            id: "dark_brown_chicken".into(),
            name: "Dark Brown Chicken".into(),
            health: 45.0,
            drop_chance: 0.6,
            drop_item: "chicken_meat".into(),
        },
        EnemyDef {
            id: "dark_chicken".into(),
            name: "Dark Chicken".into(),
            health: 60.0,
            drop_chance: 0.4,
            drop_item: "dark_feather".into(),
        },
    ];

    for enemy in enemies {
        registry.enemies.insert(enemy.id.clone(), enemy);
    }
}
