//! Economy domain — wallet bookkeeping, the minute money sweep, the shop,
//! and the play/wall clocks.
//!
//! All cross-domain communication goes through `crate::shared::*` events and
//! resources. No other domain module is imported here.

use bevy::prelude::*;
use crate::shared::*;

pub mod playtime;
pub mod shop;
pub mod sweep;
pub mod wallet;

use playtime::tick_clocks;
use shop::{BuyRequestEvent, handle_buy, tick_restock};
use sweep::{MoneySweepTimer, run_money_sweep};
use wallet::{EconomyStats, track_money_changes};

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        // ── Resources ──────────────────────────────────────────────────────
        app.init_resource::<EconomyStats>()
            .init_resource::<MoneySweepTimer>();

        // ── Internal Events ────────────────────────────────────────────────
        app.add_event::<BuyRequestEvent>();

        // ── Systems: Playing state ─────────────────────────────────────────
        app.add_systems(
            Update,
            (
                // Clocks first; everything downstream reads them.
                tick_clocks,
                // Money change events can arrive from any domain at any time.
                track_money_changes,
                // The 60-second payout/batch-decay sweep.
                run_money_sweep,
                // Shop shelf rotation against the wall clock.
                tick_restock,
                // Purchase requests from the UI.
                handle_buy,
            )
                .run_if(in_state(GameState::Playing)),
        );

        info!("[Economy] EconomyPlugin registered.");
    }
}
