//! Persistence — three profile slots plus the cross-profile shared vault.
//!
//! Profiles serialize to `saves/slot_N.json` with a version stamp; every
//! field of the inner `Profile` defaults, so files from older builds gain
//! new fields silently at load. The shared vault lives in its own file and
//! is written alongside every profile save.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// PUBLIC TYPES
// ═══════════════════════════════════════════════════════════════════════

pub const SAVE_VERSION: u32 = 1;
pub const NUM_SAVE_SLOTS: usize = 3;
pub const SHARED_STORAGE_FILE: &str = "shared_storage.json";

/// Info about a save slot shown on the profile-select screen.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SaveSlotInfo {
    pub slot: usize,
    pub exists: bool,
    pub profile_name: String,
    pub money: u64,
    pub pet_count: usize,
    pub play_time_seconds: u64,
    pub save_timestamp: u64,
}

// ═══════════════════════════════════════════════════════════════════════
// RESOURCES
// ═══════════════════════════════════════════════════════════════════════

/// Which profile slot is currently active, and its display name.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveProfile {
    pub slot: usize,
    pub name: String,
}

/// Cached metadata for all 3 save slots, refreshed on the menu.
#[derive(Resource, Debug, Clone, Default)]
pub struct SaveSlotInfoCache {
    pub slots: Vec<SaveSlotInfo>,
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveProfile>()
            .init_resource::<SaveSlotInfoCache>()
            .add_event::<SaveRequestEvent>()
            .add_event::<LoadRequestEvent>()
            .add_event::<SaveCompleteEvent>()
            .add_event::<LoadCompleteEvent>()
            .add_event::<NewGameEvent>()
            // Startup: the vault is global, load it before anything plays.
            .add_systems(Startup, (scan_save_slots, load_shared_storage))
            .add_systems(
                Update,
                (handle_save_request, handle_load_request)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (handle_load_request, handle_new_game).run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnEnter(GameState::MainMenu), scan_save_slots);

        info!("[Save] SavePlugin registered.");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FILESYSTEM HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn saves_directory() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join("saves")
}

fn slot_path(slot: usize) -> PathBuf {
    saves_directory().join(format!("slot_{}.json", slot))
}

fn shared_storage_path() -> PathBuf {
    saves_directory().join(SHARED_STORAGE_FILE)
}

fn ensure_saves_dir() -> Result<(), std::io::Error> {
    let dir = saves_directory();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(())
}

/// Serialize + temp-file + rename, so a crash mid-write never clobbers the
/// previous good file.
fn write_json_atomic<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    ensure_saves_dir().map_err(|e| format!("Could not create saves directory: {}", e))?;
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("Serialization failed: {}", e))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)
        .map_err(|e| format!("Write failed for {}: {}", tmp_path.display(), e))?;
    fs::rename(&tmp_path, path).map_err(|e| format!("Rename failed: {}", e))?;
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// PROFILE FILE
// ═══════════════════════════════════════════════════════════════════════

/// Wrapper that adds save-metadata around the shared Profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileFile {
    pub version: u32,
    pub slot: usize,
    pub save_timestamp: u64,
    #[serde(default)]
    pub profile: Profile,
}

impl ProfileFile {
    fn to_save_slot_info(&self) -> SaveSlotInfo {
        SaveSlotInfo {
            slot: self.slot,
            exists: true,
            profile_name: self.profile.profile_name.clone(),
            money: self.profile.wallet.money,
            pet_count: self.profile.inventory.pets.len(),
            play_time_seconds: self.profile.play_time as u64,
            save_timestamp: self.save_timestamp,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SAVE / LOAD LOGIC
// ═══════════════════════════════════════════════════════════════════════

fn write_profile(slot: usize, profile: Profile) -> Result<(), String> {
    let file = ProfileFile {
        version: SAVE_VERSION,
        slot,
        save_timestamp: unix_now() as u64,
        profile,
    };
    write_json_atomic(&slot_path(slot), &file)
}

fn read_profile(slot: usize) -> Result<ProfileFile, String> {
    let path = slot_path(slot);
    if !path.exists() {
        return Err(format!("Save slot {} does not exist", slot));
    }
    let json = fs::read_to_string(&path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    let file: ProfileFile =
        serde_json::from_str(&json).map_err(|e| format!("Deserialization failed: {}", e))?;

    // Version check — future versions can add migration here. Field-level
    // backfill already happens through the serde defaults on Profile.
    if file.version != SAVE_VERSION {
        warn!(
            "[Save] Slot {} has version {} but current version is {}. Attempting to load anyway.",
            slot, file.version, SAVE_VERSION
        );
    }

    Ok(file)
}

fn peek_save(slot: usize) -> SaveSlotInfo {
    match read_profile(slot) {
        Ok(file) => file.to_save_slot_info(),
        Err(_) => SaveSlotInfo {
            slot,
            ..Default::default()
        },
    }
}

fn write_shared_storage(storage: &SharedStorage) -> Result<(), String> {
    write_json_atomic(&shared_storage_path(), storage)
}

fn read_shared_storage() -> Result<SharedStorage, String> {
    let path = shared_storage_path();
    if !path.exists() {
        return Ok(SharedStorage::default());
    }
    let json = fs::read_to_string(&path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    serde_json::from_str(&json).map_err(|e| format!("Deserialization failed: {}", e))
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

fn scan_save_slots(mut cache: ResMut<SaveSlotInfoCache>) {
    cache.slots.clear();
    for slot in 0..NUM_SAVE_SLOTS {
        cache.slots.push(peek_save(slot));
    }
    info!("[Save] Slot scan complete. Found {} slots.", NUM_SAVE_SLOTS);
}

fn load_shared_storage(mut storage: ResMut<SharedStorage>) {
    match read_shared_storage() {
        Ok(loaded) => {
            info!(
                "[Save] Shared storage loaded: {} item stacks, {} pets",
                loaded.items.len(),
                loaded.pets.len()
            );
            *storage = loaded;
        }
        Err(e) => {
            warn!("[Save] Shared storage unreadable, starting empty: {}", e);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_save_request(
    mut save_events: EventReader<SaveRequestEvent>,
    mut complete_events: EventWriter<SaveCompleteEvent>,
    mut cache: ResMut<SaveSlotInfoCache>,
    mut active: ResMut<ActiveProfile>,
    mut play_clock: ResMut<PlayClock>,
    wallet: Res<Wallet>,
    inventory: Res<Inventory>,
    roster: Res<ActiveRoster>,
    incubators: Res<IncubatorBank>,
    shop: Res<ShopState>,
    quests: Res<QuestLedger>,
    storage: Res<SharedStorage>,
) {
    for ev in save_events.read() {
        let slot = ev.slot;
        active.slot = slot;

        info!("[Save] Saving to slot {}...", slot);
        let profile = Profile {
            profile_name: active.name.clone(),
            wallet: wallet.clone(),
            play_time: play_clock.fold_session(),
            inventory: inventory.clone(),
            roster: roster.clone(),
            incubators: incubators.clone(),
            shop: shop.clone(),
            quests: quests.clone(),
            last_map: String::new(),
        };

        let result = write_profile(slot, profile)
            .and_then(|()| write_shared_storage(&storage));
        match result {
            Ok(()) => {
                info!("[Save] Save to slot {} succeeded.", slot);
                let info = peek_save(slot);
                if let Some(cached) = cache.slots.get_mut(slot) {
                    *cached = info;
                }
                complete_events.send(SaveCompleteEvent {
                    slot,
                    success: true,
                    error_message: None,
                });
            }
            Err(e) => {
                warn!("[Save] Save to slot {} FAILED: {}", slot, e);
                complete_events.send(SaveCompleteEvent {
                    slot,
                    success: false,
                    error_message: Some(e),
                });
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_load_request(
    mut load_events: EventReader<LoadRequestEvent>,
    mut complete_events: EventWriter<LoadCompleteEvent>,
    mut active: ResMut<ActiveProfile>,
    mut play_clock: ResMut<PlayClock>,
    mut wallet: ResMut<Wallet>,
    mut inventory: ResMut<Inventory>,
    mut roster: ResMut<ActiveRoster>,
    mut incubators: ResMut<IncubatorBank>,
    mut shop: ResMut<ShopState>,
    mut quests: ResMut<QuestLedger>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for ev in load_events.read() {
        let slot = ev.slot;
        info!("[Save] Loading from slot {}...", slot);

        match read_profile(slot) {
            Ok(file) => {
                active.slot = slot;
                active.name = file.profile.profile_name.clone();

                *wallet = file.profile.wallet;
                *inventory = file.profile.inventory;
                *roster = file.profile.roster;
                // Hand-edited files can carry a nonsense slot count.
                roster.unlocked_slots = roster
                    .unlocked_slots
                    .clamp(STARTING_PET_SLOTS, MAX_PET_SLOTS);
                *incubators = file.profile.incubators;
                *shop = file.profile.shop;
                *quests = file.profile.quests;
                *play_clock = PlayClock {
                    total_played: file.profile.play_time,
                    session: 0.0,
                };

                next_state.set(GameState::Playing);
                info!("[Save] Load from slot {} succeeded.", slot);
                complete_events.send(LoadCompleteEvent {
                    slot,
                    success: true,
                    error_message: None,
                });
            }
            Err(e) => {
                warn!("[Save] Load from slot {} FAILED: {}", slot, e);
                complete_events.send(LoadCompleteEvent {
                    slot,
                    success: false,
                    error_message: Some(e),
                });
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_new_game(
    mut new_game_events: EventReader<NewGameEvent>,
    mut active: ResMut<ActiveProfile>,
    mut play_clock: ResMut<PlayClock>,
    mut wallet: ResMut<Wallet>,
    mut inventory: ResMut<Inventory>,
    mut roster: ResMut<ActiveRoster>,
    mut incubators: ResMut<IncubatorBank>,
    mut shop: ResMut<ShopState>,
    mut quests: ResMut<QuestLedger>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for ev in new_game_events.read() {
        info!(
            "[Save] Starting new game in slot {} for '{}'",
            ev.slot, ev.profile_name
        );

        active.slot = ev.slot;
        active.name = ev.profile_name.clone();

        *wallet = Wallet::default();
        *inventory = Inventory::default();
        *roster = ActiveRoster::default();
        *incubators = IncubatorBank::default();
        *shop = ShopState::default();
        *quests = QuestLedger::default();
        *play_clock = PlayClock::default();

        next_state.set(GameState::Playing);
        info!("[Save] New game initialized.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_fields_backfill_from_older_files() {
        // A file written before most fields existed.
        let json = r#"{
            "version": 1,
            "slot": 0,
            "save_timestamp": 0,
            "profile": { "profile_name": "Old Hand" }
        }"#;
        let file: ProfileFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.profile.profile_name, "Old Hand");
        assert_eq!(file.profile.wallet.money, STARTING_MONEY);
        assert_eq!(file.profile.roster.unlocked_slots, STARTING_PET_SLOTS);
        assert_eq!(file.profile.incubators.slots.len(), INCUBATOR_SLOTS);
        assert!(!file.profile.quests.accepted_today);
    }

    #[test]
    fn profile_round_trips_through_json() {
        let mut profile = Profile::default();
        profile.profile_name = "Tester".into();
        profile.wallet.money = 777;
        profile.inventory.add_item("food_apple", 3);
        let id = profile.inventory.add_pet("piglet", Some("Ham".into()));
        profile.roster.instance_ids.push(id);
        profile.incubators.slots[1] = Some(PlacedEgg {
            item_id: "egg_common".into(),
            start_time: 123.0,
        });
        profile.quests.weekly_points = 250;

        let json = serde_json::to_string_pretty(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.profile_name, "Tester");
        assert_eq!(back.wallet.money, 777);
        assert_eq!(back.inventory.count("food_apple"), 3);
        assert_eq!(back.inventory.pet(id).unwrap().name, "Ham");
        assert_eq!(back.roster.instance_ids, vec![id]);
        assert_eq!(
            back.incubators.slots[1],
            Some(PlacedEgg {
                item_id: "egg_common".into(),
                start_time: 123.0
            })
        );
        assert_eq!(back.quests.weekly_points, 250);
    }

    #[test]
    fn shared_storage_round_trips_through_json() {
        let mut vault = SharedStorage::default();
        vault.add_item("chicken_meat", 9);
        vault.pets.push(PetInstance::new(7, "bunny", "Mallow"));

        let json = serde_json::to_string_pretty(&vault).unwrap();
        let back: SharedStorage = serde_json::from_str(&json).unwrap();
        assert_eq!(back.items.get("chicken_meat"), Some(&9));
        assert_eq!(back.pets[0].name, "Mallow");
    }
}
