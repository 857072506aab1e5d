//! Combat domain — the challenge yard.
//!
//! A wave of enemies spawns on a fixed cadence. A fielded pet swings a
//! directional hitbox; anything it overlaps takes the pet's damage, and
//! kills roll for loot. Loot sells at a flat per-unit price.
//!
//! All cross-domain communication goes through `crate::shared::*` events and
//! resources. No other domain module is imported here.

use bevy::prelude::*;
use rand::prelude::*;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Events (internal — used to drive the session from UI input)
// ─────────────────────────────────────────────────────────────────────────────

/// A fielded pet swings at whatever is in front of it.
#[derive(Event, Debug, Clone)]
pub struct AttackEvent {
    pub instance_id: u64,
    pub attacker_rect: Rect,
    pub facing: Facing,
}

/// Sell challenge loot from the inventory.
#[derive(Event, Debug, Clone)]
pub struct SellLootEvent {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatError {
    NoSuchPet,
    NotActive,
    CannotFight,
    NotLoot,
    NotEnoughItems,
}

impl CombatError {
    pub fn message(&self) -> &'static str {
        match self {
            CombatError::NoSuchPet => "That pet isn't here.",
            CombatError::NotActive => "Only an active pet can fight.",
            CombatError::CannotFight => "That pet is a lover, not a fighter.",
            CombatError::NotLoot => "The buyer only wants challenge spoils.",
            CombatError::NotEnoughItems => "You don't have that many to sell.",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wave spawning
// ─────────────────────────────────────────────────────────────────────────────

/// Replaces whatever is left of the previous wave with a fresh one.
pub fn spawn_wave(session: &mut ChallengeSession, registry: &EnemyRegistry) {
    session.enemies.clear();
    let pool: Vec<&EnemyDef> = registry.enemies.values().collect();
    if pool.is_empty() {
        warn!("[Combat] No enemy definitions; wave skipped");
        return;
    }
    let mut rng = rand::thread_rng();
    for _ in 0..WAVE_SIZE {
        let def = pool[rng.gen_range(0..pool.len())];
        let half = ENEMY_SIZE / 2.0;
        let center = Vec2::new(
            rng.gen_range(half..ARENA_WIDTH - half),
            rng.gen_range(half..ARENA_HEIGHT - half),
        );
        session.enemies.push(EnemyUnit {
            enemy_id: def.id.clone(),
            health: def.health,
            rect: Rect::from_center_size(center, Vec2::splat(ENEMY_SIZE)),
        });
    }
    session.waves_spawned += 1;
}

pub fn tick_wave_spawner(
    time: Res<Time>,
    registry: Res<EnemyRegistry>,
    mut session: ResMut<ChallengeSession>,
) {
    session.spawn_timer_ms += time.delta().as_secs_f64() * 1000.0;
    if session.spawn_timer_ms >= WAVE_INTERVAL_MS {
        session.spawn_timer_ms = 0.0;
        spawn_wave(&mut session, &registry);
        info!(
            "[Combat] Wave {} spawned with {} enemies",
            session.waves_spawned,
            session.enemies.len()
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Attacks
// ─────────────────────────────────────────────────────────────────────────────

/// The swing area: the attacker's rect grown by (50, 20), then cut down to
/// the half on the side being faced.
pub fn attack_hitbox(attacker: Rect, facing: Facing) -> Rect {
    let mut hit = Rect::from_corners(
        attacker.min - Vec2::new(50.0, 20.0),
        attacker.max + Vec2::new(50.0, 20.0),
    );
    let center = attacker.center();
    match facing {
        Facing::Right => hit.min.x = center.x,
        Facing::Left => hit.max.x = center.x,
        Facing::Up => hit.min.y = center.y,
        Facing::Down => hit.max.y = center.y,
    }
    hit
}

/// Applies one swing to the session. Enemies overlapping the hitbox take
/// `damage`; anything reduced to zero dies and rolls its drop. Returns the
/// kills as (enemy id, loot).
pub fn resolve_attack(
    session: &mut ChallengeSession,
    registry: &EnemyRegistry,
    hitbox: Rect,
    damage: f32,
) -> Vec<(EnemyId, Option<ItemId>)> {
    let mut rng = rand::thread_rng();
    let mut kills = Vec::new();

    session.enemies.retain_mut(|enemy| {
        if hitbox.intersect(enemy.rect).is_empty() {
            return true;
        }
        enemy.health -= damage;
        if enemy.health > 0.0 {
            return true;
        }
        let drop = registry.get(&enemy.enemy_id).and_then(|def| {
            (rng.gen::<f32>() < def.drop_chance).then(|| def.drop_item.clone())
        });
        kills.push((enemy.enemy_id.clone(), drop));
        false
    });

    kills
}

pub fn handle_attack(
    mut events: EventReader<AttackEvent>,
    mut session: ResMut<ChallengeSession>,
    registry: Res<EnemyRegistry>,
    pets: Res<PetRegistry>,
    roster: Res<ActiveRoster>,
    mut inventory: ResMut<Inventory>,
    mut defeated_events: EventWriter<EnemyDefeatedEvent>,
    mut quest_events: EventWriter<QuestActionEvent>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        let damage = match fielded_damage(&inventory, &pets, &roster, ev.instance_id) {
            Ok(d) => d,
            Err(e) => {
                warn!("[Combat] Attack rejected for #{}: {:?}", ev.instance_id, e);
                toasts.send(ToastEvent::new(e.message()));
                continue;
            }
        };

        let hitbox = attack_hitbox(ev.attacker_rect, ev.facing);
        let kills = resolve_attack(&mut session, &registry, hitbox, damage);
        for (enemy_id, drop) in kills {
            if let Some(item_id) = &drop {
                inventory.add_item(item_id, 1);
            }
            info!("[Combat] Defeated '{}', drop: {:?}", enemy_id, drop);
            defeated_events.send(EnemyDefeatedEvent { enemy_id, drop });
            quest_events.send(QuestActionEvent {
                action: QuestAction::DefeatEnemy,
                amount: 1,
            });
        }
    }
}

/// Checks that the attacker is owned, fielded, and a fighting species, and
/// returns its damage.
pub fn fielded_damage(
    inventory: &Inventory,
    pets: &PetRegistry,
    roster: &ActiveRoster,
    instance_id: u64,
) -> Result<f32, CombatError> {
    let pet = inventory.pet(instance_id).ok_or(CombatError::NoSuchPet)?;
    if !roster.contains(instance_id) {
        return Err(CombatError::NotActive);
    }
    let def = pets.get(&pet.pet_id).ok_or(CombatError::NoSuchPet)?;
    if !def.can_attack {
        return Err(CombatError::CannotFight);
    }
    Ok(def.damage)
}

// ─────────────────────────────────────────────────────────────────────────────
// Loot sales
// ─────────────────────────────────────────────────────────────────────────────

/// Sells challenge loot at the flat unit price. All-or-nothing.
pub fn sell_loot(
    inventory: &mut Inventory,
    wallet: &mut Wallet,
    registry: &ItemRegistry,
    item_id: &str,
    quantity: u32,
) -> Result<u64, CombatError> {
    let def = registry.get(item_id).ok_or(CombatError::NotLoot)?;
    if def.category != ItemCategory::Material {
        return Err(CombatError::NotLoot);
    }
    if !inventory.try_remove_item(item_id, quantity) {
        return Err(CombatError::NotEnoughItems);
    }
    let total = LOOT_UNIT_PRICE * quantity as u64;
    wallet.credit(total);
    Ok(total)
}

pub fn handle_sell_loot(
    mut events: EventReader<SellLootEvent>,
    mut inventory: ResMut<Inventory>,
    mut wallet: ResMut<Wallet>,
    registry: Res<ItemRegistry>,
    mut money_events: EventWriter<MoneyChangeEvent>,
    mut quest_events: EventWriter<QuestActionEvent>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match sell_loot(&mut inventory, &mut wallet, &registry, &ev.item_id, ev.quantity) {
            Ok(total) => {
                info!(
                    "[Combat] Sold {}x {} for {} coins",
                    ev.quantity, ev.item_id, total
                );
                money_events.send(MoneyChangeEvent {
                    amount: total as i64,
                    reason: format!("sold {}", ev.item_id),
                });
                quest_events.send(QuestActionEvent {
                    action: QuestAction::EarnMoney,
                    amount: total.min(u32::MAX as u64) as u32,
                });
                toasts.send(ToastEvent::new(format!("Sold for {total} coins!")));
            }
            Err(e) => {
                warn!("[Combat] Sale rejected for '{}': {:?}", ev.item_id, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChallengeSession>();

        app.add_event::<AttackEvent>().add_event::<SellLootEvent>();

        app.add_systems(
            Update,
            (tick_wave_spawner, handle_attack, handle_sell_loot)
                .run_if(in_state(GameState::Playing)),
        );

        info!("[Combat] CombatPlugin registered.");
    }
}
