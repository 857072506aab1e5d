//! Pets domain — stat decay, experience, feeding, and the active roster.
//!
//! All cross-domain communication goes through `crate::shared::*` events and
//! resources. No other domain module is imported here.

use bevy::prelude::*;
use crate::shared::*;

pub mod decay;
pub mod feeding;
pub mod roster;

use decay::tick_active_pets;
use feeding::{FeedPetEvent, handle_feed};
use roster::{
    ActivatePetEvent, DeactivatePetEvent, UnlockPetSlotEvent,
    handle_activate, handle_deactivate, handle_unlock_pet_slot,
};

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct PetsPlugin;

impl Plugin for PetsPlugin {
    fn build(&self, app: &mut App) {
        // ── Internal Events ────────────────────────────────────────────────
        app.add_event::<FeedPetEvent>()
            .add_event::<ActivatePetEvent>()
            .add_event::<DeactivatePetEvent>()
            .add_event::<UnlockPetSlotEvent>();

        // ── Systems: Playing state ─────────────────────────────────────────
        app.add_systems(
            Update,
            (
                // Continuous decay + XP for every pet on the active roster.
                tick_active_pets,
                // Item use on a pet (food and toys share one path).
                handle_feed,
                // Roster membership and slot unlocks.
                handle_activate,
                handle_deactivate,
                handle_unlock_pet_slot,
            )
                .run_if(in_state(GameState::Playing)),
        );

        info!("[Pets] PetsPlugin registered.");
    }
}
