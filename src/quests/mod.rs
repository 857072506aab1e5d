//! Quests domain — the daily mission ledger and the weekly milestone track.
//!
//! All cross-domain communication goes through `crate::shared::*` events and
//! resources. No other domain module is imported here.

use bevy::prelude::*;
use crate::shared::*;

pub mod daily;
pub mod weekly;

use daily::{ClaimQuestEvent, handle_claim_quest, roll_over_ledger, track_quest_progress};
use weekly::{ClaimWeeklyEvent, handle_claim_weekly};

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct QuestsPlugin;

impl Plugin for QuestsPlugin {
    fn build(&self, app: &mut App) {
        // ── Internal Events ────────────────────────────────────────────────
        app.add_event::<ClaimQuestEvent>()
            .add_event::<ClaimWeeklyEvent>();

        // ── Systems: Playing state ─────────────────────────────────────────
        app.add_systems(
            Update,
            (
                // Midnight/Monday rollovers, then today's assignment.
                roll_over_ledger,
                // Quest action events can arrive from any domain at any time.
                track_quest_progress,
                // Reward claims from the UI.
                handle_claim_quest,
                handle_claim_weekly,
            )
                .run_if(in_state(GameState::Playing)),
        );

        info!("[Quests] QuestsPlugin registered.");
    }
}
