//! Shared components, resources, events, and states for Petstead.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    MainMenu,
    Playing,
}

// ═══════════════════════════════════════════════════════════════════════
// CLOCKS
// ═══════════════════════════════════════════════════════════════════════

/// Wall-clock seconds (unix epoch), seeded at startup and advanced every
/// frame. Incubator eggs, shop restocks, and quest resets persist absolute
/// timestamps against this clock so progress survives across sessions.
#[derive(Resource, Debug, Clone)]
pub struct WallClock {
    pub now: f64,
}

impl Default for WallClock {
    fn default() -> Self {
        Self { now: unix_now() }
    }
}

impl WallClock {
    /// Seconds elapsed since `start`. A clock that went backwards reads as 0.
    pub fn elapsed_since(&self, start: f64) -> f64 {
        (self.now - start).max(0.0)
    }

    /// Days since the epoch, used as the daily-reset ordinal.
    pub fn day_ordinal(&self) -> i64 {
        (self.now / 86_400.0).floor() as i64
    }

    /// Ordinal of the Monday starting the current week.
    pub fn week_ordinal(&self) -> i64 {
        let day = self.day_ordinal();
        // Day 0 of the epoch was a Thursday.
        day - (day + 3).rem_euclid(7)
    }
}

pub fn unix_now() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Total time played, split into the persisted total and the live session.
/// The session is folded into the total exactly once, at save time.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayClock {
    pub total_played: f64,
    pub session: f64,
}

impl PlayClock {
    pub fn current_play_time(&self) -> f64 {
        self.total_played + self.session
    }

    /// Rolls the live session into the persisted total. Called by the save
    /// path only, so play time is never counted twice.
    pub fn fold_session(&mut self) -> f64 {
        self.total_played += self.session;
        self.session = 0.0;
        self.total_played
    }
}

// ═══════════════════════════════════════════════════════════════════════
// IDS & CATALOG DEFINITIONS
// ═══════════════════════════════════════════════════════════════════════

/// String IDs throughout, for data-driven flexibility.
pub type ItemId = String;
pub type PetId = String;
pub type MissionId = String;
pub type EnemyId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Food,
    Toy,
    Egg,
    Material,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Health,
    Happiness,
    Hunger,
}

/// Egg-only payload: how long until it can hatch, and the weighted species
/// table it resolves against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HatchData {
    pub hatch_time_seconds: f64,
    /// (pet id, weight). Weights need not sum to anything in particular.
    pub possible_pets: Vec<(PetId, f32)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub price: Option<u32>, // None = not sold in the shop
    /// Stat deltas applied when the item is used on a pet.
    pub effects: HashMap<StatKind, f32>,
    pub hatch: Option<HatchData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Per-stat drain speeds, in points per second.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DecayRates {
    pub hunger: f32,
    pub happiness: f32,
    pub health: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetDef {
    pub id: PetId,
    pub name: String,
    pub rarity: Rarity,
    pub stat_decay_rate: DecayRates,
    /// Payout base for the minute sweep, before condition and level scaling.
    pub base_money_per_minute: u32,
    pub can_attack: bool,
    pub damage: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDef {
    pub id: EnemyId,
    pub name: String,
    pub health: f32,
    pub drop_chance: f32,
    pub drop_item: ItemId,
}

/// The player actions quests count. Every tracked verb in the game maps to
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestAction {
    Feed,
    Play,
    EarnMoney,
    SpendMoney,
    BuyEgg,
    BuyFood,
    BuyToy,
    Hatch,
    UnlockPetSlot,
    DefeatEnemy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionDef {
    pub id: MissionId,
    pub title: String,
    pub description: String,
    pub action: QuestAction,
    pub target: u32,
    pub reward_money: u32,
    pub reward_items: Vec<(ItemId, u32)>,
    /// Weekly points granted when the daily reward is claimed.
    pub points: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// REGISTRIES — populated by the data plugin during Loading
// ═══════════════════════════════════════════════════════════════════════

#[derive(Resource, Debug, Clone, Default)]
pub struct ItemRegistry {
    pub items: HashMap<ItemId, ItemDef>,
}

impl ItemRegistry {
    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    /// Everything with a price tag, i.e. the shop's candidate pool.
    pub fn sellable(&self) -> impl Iterator<Item = &ItemDef> {
        self.items.values().filter(|d| d.price.is_some())
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct PetRegistry {
    pub pets: HashMap<PetId, PetDef>,
}

impl PetRegistry {
    pub fn get(&self, id: &str) -> Option<&PetDef> {
        self.pets.get(id)
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct MissionRegistry {
    pub missions: HashMap<MissionId, MissionDef>,
}

impl MissionRegistry {
    pub fn get(&self, id: &str) -> Option<&MissionDef> {
        self.missions.get(id)
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct EnemyRegistry {
    pub enemies: HashMap<EnemyId, EnemyDef>,
}

impl EnemyRegistry {
    pub fn get(&self, id: &str) -> Option<&EnemyDef> {
        self.enemies.get(id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PETS & INVENTORY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetInstance {
    pub instance_id: u64,
    pub pet_id: PetId,
    pub name: String,
    pub health: f32,    // 0-100
    pub happiness: f32, // 0-100
    pub hunger: f32,    // 0-100
    pub level: u32,     // 0-10
    pub experience: f32,
}

impl PetInstance {
    pub fn new(instance_id: u64, pet_id: impl Into<PetId>, name: impl Into<String>) -> Self {
        Self {
            instance_id,
            pet_id: pet_id.into(),
            name: name.into(),
            health: STAT_MAX,
            happiness: STAT_MAX,
            hunger: STAT_MAX,
            level: 0,
            experience: 0.0,
        }
    }

    pub fn stat(&self, kind: StatKind) -> f32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Happiness => self.happiness,
            StatKind::Hunger => self.hunger,
        }
    }

    pub fn adjust_stat(&mut self, kind: StatKind, delta: f32) {
        let slot = match kind {
            StatKind::Health => &mut self.health,
            StatKind::Happiness => &mut self.happiness,
            StatKind::Hunger => &mut self.hunger,
        };
        *slot = (*slot + delta).clamp(0.0, STAT_MAX);
    }

    /// True while every stat is above zero — the condition for earning XP.
    pub fn is_thriving(&self) -> bool {
        self.health > 0.0 && self.happiness > 0.0 && self.hunger > 0.0
    }

    /// Average condition in 0..=1, the payout multiplier.
    pub fn condition_ratio(&self) -> f32 {
        (self.health + self.happiness + self.hunger) / 3.0 / STAT_MAX
    }

    /// Applies one span of decay: hunger and happiness drain freely, health
    /// only once the hunger gauge has hit bottom.
    pub fn decay(&mut self, rates: &DecayRates, seconds: f32) {
        self.hunger = (self.hunger - rates.hunger * seconds).max(0.0);
        self.happiness = (self.happiness - rates.happiness * seconds).max(0.0);
        if self.hunger <= 0.0 {
            self.health = (self.health - rates.health * seconds).max(0.0);
        }
    }
}

/// Everything a profile owns: item stacks plus the pet roster. Item counts
/// never sit at zero — a stack that empties is removed outright.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    pub items: HashMap<ItemId, u32>,
    pub pets: Vec<PetInstance>,
    next_instance_id: u64,
}

impl Inventory {
    pub fn add_item(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.items.entry(item_id.to_string()).or_insert(0) += quantity;
    }

    /// Removes exactly `quantity` or nothing at all.
    pub fn try_remove_item(&mut self, item_id: &str, quantity: u32) -> bool {
        match self.items.get_mut(item_id) {
            Some(count) if *count >= quantity => {
                *count -= quantity;
                if *count == 0 {
                    self.items.remove(item_id);
                }
                true
            }
            _ => false,
        }
    }

    pub fn count(&self, item_id: &str) -> u32 {
        self.items.get(item_id).copied().unwrap_or(0)
    }

    pub fn has(&self, item_id: &str, quantity: u32) -> bool {
        self.count(item_id) >= quantity
    }

    /// Adds a pet, assigning the next instance id. Pass `None` for the name
    /// to roll one from the stock pool.
    pub fn add_pet(&mut self, pet_id: &str, name: Option<String>) -> u64 {
        use rand::seq::SliceRandom;
        // Ids stay monotonic even after loading an older file that predates
        // the counter field.
        let floor = self.pets.iter().map(|p| p.instance_id).max().unwrap_or(0);
        self.next_instance_id = self.next_instance_id.max(floor) + 1;
        let id = self.next_instance_id;
        let name = name.unwrap_or_else(|| {
            PET_NAMES
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or("Pet")
                .to_string()
        });
        self.pets.push(PetInstance::new(id, pet_id, name));
        id
    }

    /// Re-homes an existing pet (storage retrieval). The pet keeps its id
    /// unless this inventory already holds that id — every profile numbers
    /// pets independently, so a boxed pet can land on a taken id. In that
    /// case it gets re-tagged with a fresh one. Returns the id it landed on.
    pub fn adopt_pet(&mut self, mut pet: PetInstance) -> u64 {
        if self.pets.iter().any(|p| p.instance_id == pet.instance_id) {
            let floor = self.pets.iter().map(|p| p.instance_id).max().unwrap_or(0);
            self.next_instance_id = self.next_instance_id.max(floor) + 1;
            pet.instance_id = self.next_instance_id;
        } else {
            self.next_instance_id = self.next_instance_id.max(pet.instance_id);
        }
        let id = pet.instance_id;
        self.pets.push(pet);
        id
    }

    pub fn remove_pet(&mut self, instance_id: u64) -> Option<PetInstance> {
        let idx = self.pets.iter().position(|p| p.instance_id == instance_id)?;
        Some(self.pets.remove(idx))
    }

    pub fn pet(&self, instance_id: u64) -> Option<&PetInstance> {
        self.pets.iter().find(|p| p.instance_id == instance_id)
    }

    pub fn pet_mut(&mut self, instance_id: u64) -> Option<&mut PetInstance> {
        self.pets.iter_mut().find(|p| p.instance_id == instance_id)
    }
}

/// The pets currently out in the world. At most one entry per instance id,
/// capped by the number of unlocked slots.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct ActiveRoster {
    pub instance_ids: Vec<u64>,
    pub unlocked_slots: usize,
}

impl Default for ActiveRoster {
    fn default() -> Self {
        Self {
            instance_ids: Vec::new(),
            unlocked_slots: STARTING_PET_SLOTS,
        }
    }
}

impl ActiveRoster {
    pub fn contains(&self, instance_id: u64) -> bool {
        self.instance_ids.contains(&instance_id)
    }

    pub fn is_full(&self) -> bool {
        self.instance_ids.len() >= self.unlocked_slots
    }

    /// Price of the next slot, or None once every slot is open. A slot
    /// count below the starting five (hand-edited save) prices as if at
    /// the start rather than underflowing the index.
    pub fn next_slot_price(&self) -> Option<u64> {
        PET_SLOT_UNLOCK_PRICES
            .get(self.unlocked_slots.saturating_sub(STARTING_PET_SLOTS))
            .copied()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WALLET
// ═══════════════════════════════════════════════════════════════════════

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub money: u64,
}

impl Default for Wallet {
    fn default() -> Self {
        Self {
            money: STARTING_MONEY,
        }
    }
}

impl Wallet {
    pub fn can_afford(&self, cost: u64) -> bool {
        self.money >= cost
    }

    pub fn credit(&mut self, amount: u64) {
        self.money = self.money.saturating_add(amount);
    }

    /// Debits exactly `cost` or nothing at all.
    pub fn try_debit(&mut self, cost: u64) -> bool {
        if self.money >= cost {
            self.money -= cost;
            true
        } else {
            false
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INCUBATORS
// ═══════════════════════════════════════════════════════════════════════

/// An egg sitting in a slot. Readiness is derived from the wall clock, never
/// stored, so a rewound clock simply delays the hatch instead of corrupting it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacedEgg {
    pub item_id: ItemId,
    pub start_time: f64,
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct IncubatorBank {
    pub slots: Vec<Option<PlacedEgg>>,
    pub unlocked: Vec<bool>,
}

impl Default for IncubatorBank {
    fn default() -> Self {
        Self {
            slots: vec![None; INCUBATOR_SLOTS],
            unlocked: (0..INCUBATOR_SLOTS)
                .map(|i| i < INCUBATOR_FREE_SLOTS)
                .collect(),
        }
    }
}

impl IncubatorBank {
    pub fn is_unlocked(&self, slot: usize) -> bool {
        self.unlocked.get(slot).copied().unwrap_or(false)
    }

    /// Unlock price for a locked slot. Free slots and out-of-range indices
    /// return None.
    pub fn unlock_price(&self, slot: usize) -> Option<u64> {
        if slot < INCUBATOR_FREE_SLOTS || slot >= INCUBATOR_SLOTS {
            return None;
        }
        INCUBATOR_UNLOCK_PRICES.get(slot - INCUBATOR_FREE_SLOTS).copied()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SHOP
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockEntry {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopState {
    pub stock: Vec<StockEntry>,
    pub last_restock: f64,
}

impl ShopState {
    pub fn stock_of(&self, item_id: &str) -> Option<&StockEntry> {
        self.stock.iter().find(|e| e.item_id == item_id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// QUESTS
// ═══════════════════════════════════════════════════════════════════════

/// The daily/weekly mission ledger. Progress only accrues on missions that
/// are assigned today and not yet claimed.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestLedger {
    pub daily: Vec<MissionId>,
    pub progress: HashMap<MissionId, u32>,
    pub claimed: Vec<MissionId>,
    pub accepted_today: bool,
    pub last_reset_day: i64,
    pub weekly_points: u32,
    pub claimed_weekly: Vec<u32>,
    pub last_weekly_reset: i64,
}

impl QuestLedger {
    pub fn is_claimed(&self, mission_id: &str) -> bool {
        self.claimed.iter().any(|m| m == mission_id)
    }

    pub fn progress_of(&self, mission_id: &str) -> u32 {
        self.progress.get(mission_id).copied().unwrap_or(0)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SHARED STORAGE — one vault across all profiles
// ═══════════════════════════════════════════════════════════════════════

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct SharedStorage {
    pub items: HashMap<ItemId, u32>,
    pub pets: Vec<PetInstance>,
}

impl SharedStorage {
    pub fn add_item(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.items.entry(item_id.to_string()).or_insert(0) += quantity;
    }

    pub fn try_remove_item(&mut self, item_id: &str, quantity: u32) -> bool {
        match self.items.get_mut(item_id) {
            Some(count) if *count >= quantity => {
                *count -= quantity;
                if *count == 0 {
                    self.items.remove(item_id);
                }
                true
            }
            _ => false,
        }
    }

    pub fn remove_pet(&mut self, instance_id: u64) -> Option<PetInstance> {
        let idx = self.pets.iter().position(|p| p.instance_id == instance_id)?;
        Some(self.pets.remove(idx))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// COMBAT
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct EnemyUnit {
    pub enemy_id: EnemyId,
    pub health: f32,
    pub rect: Rect,
}

/// The live challenge wave. Session-only: never persisted, a fresh wave
/// spawns on its own schedule.
#[derive(Resource, Debug, Clone, Default)]
pub struct ChallengeSession {
    pub enemies: Vec<EnemyUnit>,
    pub spawn_timer_ms: f64,
    pub waves_spawned: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

/// Informational money delta. The wallet is mutated at the transaction site;
/// this event feeds the running stats.
#[derive(Event, Debug, Clone)]
pub struct MoneyChangeEvent {
    pub amount: i64, // positive = gain, negative = spend
    pub reason: String,
}

/// A quest-countable player action happened somewhere in the simulation.
#[derive(Event, Debug, Clone)]
pub struct QuestActionEvent {
    pub action: QuestAction,
    pub amount: u32,
}

/// Toast notification for player feedback.
#[derive(Event, Debug, Clone)]
pub struct ToastEvent {
    pub message: String,
    pub duration_secs: f32,
}

impl ToastEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration_secs: 2.5,
        }
    }
}

#[derive(Event, Debug, Clone)]
pub struct PetLevelUpEvent {
    pub instance_id: u64,
    pub new_level: u32,
}

#[derive(Event, Debug, Clone)]
pub struct PetHatchedEvent {
    pub instance_id: u64,
    pub pet_id: PetId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetEffect {
    Heart,
    Smile,
}

/// Visual cue hook: a pet reacted to food (heart) or a toy (smile).
#[derive(Event, Debug, Clone)]
pub struct PetEffectEvent {
    pub instance_id: u64,
    pub effect: PetEffect,
}

#[derive(Event, Debug, Clone)]
pub struct EnemyDefeatedEvent {
    pub enemy_id: EnemyId,
    pub drop: Option<ItemId>,
}

// ── Save / load requests & completions ─────────────────────────────────

#[derive(Event, Debug, Clone)]
pub struct SaveRequestEvent {
    pub slot: usize,
}

#[derive(Event, Debug, Clone)]
pub struct LoadRequestEvent {
    pub slot: usize,
}

#[derive(Event, Debug, Clone)]
pub struct NewGameEvent {
    pub slot: usize,
    pub profile_name: String,
}

#[derive(Event, Debug, Clone)]
pub struct SaveCompleteEvent {
    pub slot: usize,
    pub success: bool,
    pub error_message: Option<String>,
}

#[derive(Event, Debug, Clone)]
pub struct LoadCompleteEvent {
    pub slot: usize,
    pub success: bool,
    pub error_message: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════
// PROFILE — the serialized shape of one save slot
// ═══════════════════════════════════════════════════════════════════════

/// One profile slot on disk. Every field defaults, so files written by older
/// builds gain new fields silently at load.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Profile {
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub wallet: Wallet,
    #[serde(default)]
    pub play_time: f64,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub roster: ActiveRoster,
    #[serde(default)]
    pub incubators: IncubatorBank,
    #[serde(default)]
    pub shop: ShopState,
    #[serde(default)]
    pub quests: QuestLedger,
    #[serde(default)]
    pub last_map: String,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const STAT_MAX: f32 = 100.0;
pub const STARTING_MONEY: u64 = 10;

pub const MAX_PET_LEVEL: u32 = 10;
/// XP per second while a pet is thriving.
pub const EXP_GAIN_RATE: f32 = 1.0;
/// XP needed to leave level N (index 0 = level 0 → 1).
pub const EXP_FOR_NEXT_LEVEL: [f32; 10] = [
    600.0, 1200.0, 1800.0, 2400.0, 3600.0, 5400.0, 7200.0, 9000.0, 10800.0, 14400.0,
];

pub const STARTING_PET_SLOTS: usize = 5;
pub const MAX_PET_SLOTS: usize = 15;
pub const PET_SLOT_UNLOCK_PRICES: [u64; 10] = [
    50, 150, 400, 1000, 2500, 5000, 10000, 20000, 50000, 100000,
];
// The price table is what actually caps unlocks; keep the cap in sync.
const _: () = assert!(STARTING_PET_SLOTS + PET_SLOT_UNLOCK_PRICES.len() == MAX_PET_SLOTS);

pub const INCUBATOR_SLOTS: usize = 8;
pub const INCUBATOR_FREE_SLOTS: usize = 4;
pub const INCUBATOR_UNLOCK_PRICES: [u64; 4] = [20, 30, 40, 50];

/// The minute sweep: payouts for active pets, batch decay for benched ones.
pub const MONEY_SWEEP_INTERVAL_MS: f64 = 60_000.0;
/// Seconds of decay a benched pet accrues per sweep.
pub const BATCH_DECAY_SECONDS: f32 = 60.0;

pub const SHOP_RESTOCK_SECONDS: f64 = 300.0;
/// Random listings per restock, on top of the guaranteed common egg.
pub const SHOP_SAMPLE_SIZE: usize = 7;
pub const GUARANTEED_EGG: &str = "egg_common";

pub const WAVE_INTERVAL_MS: f64 = 300_000.0;
pub const WAVE_SIZE: usize = 10;
pub const LOOT_UNIT_PRICE: u64 = 20;
/// Arena bounds for enemy placement, in world units.
pub const ARENA_WIDTH: f32 = 1280.0;
pub const ARENA_HEIGHT: f32 = 720.0;
pub const ENEMY_SIZE: f32 = 48.0;

pub const DAILY_QUEST_COUNT: usize = 3;
pub const WEEKLY_MILESTONES: [u32; 3] = [200, 500, 1000];

pub const PET_NAMES: &[&str] = &[
    "Biscuit", "Clover", "Pepper", "Maple", "Waffles", "Mochi", "Pickle", "Nugget",
    "Sprout", "Tofu", "Pumpkin", "Noodle", "Acorn", "Bubbles", "Ziggy", "Pippin",
];
