//! Daily mission bookkeeping: the midnight reset, the once-a-day assignment,
//! action tracking, and reward claims.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use crate::shared::*;

/// Fired by the UI when the player claims a completed mission.
#[derive(Event, Debug, Clone)]
pub struct ClaimQuestEvent {
    pub mission_id: MissionId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestError {
    UnknownMission,
    NotAssigned,
    NotComplete,
    AlreadyClaimed,
}

impl QuestError {
    pub fn message(&self) -> &'static str {
        match self {
            QuestError::UnknownMission => "No such mission.",
            QuestError::NotAssigned => "That mission isn't on today's board.",
            QuestError::NotComplete => "That mission isn't finished yet.",
            QuestError::AlreadyClaimed => "Already claimed!",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ledger operations
// ─────────────────────────────────────────────────────────────────────────────

/// Destructive daily reset, plus the weekly wipe when the week turns over.
/// Returns true if the day changed.
pub fn reset_if_needed(ledger: &mut QuestLedger, today: i64, this_week: i64) -> bool {
    if ledger.last_weekly_reset != this_week {
        ledger.weekly_points = 0;
        ledger.claimed_weekly.clear();
        ledger.last_weekly_reset = this_week;
    }

    if ledger.last_reset_day == today {
        return false;
    }
    ledger.daily.clear();
    ledger.progress.clear();
    ledger.claimed.clear();
    ledger.accepted_today = false;
    ledger.last_reset_day = today;
    true
}

/// Draws today's missions, once. Repeat calls on the same day are no-ops.
pub fn assign_daily_quests(ledger: &mut QuestLedger, registry: &MissionRegistry) {
    if ledger.accepted_today {
        return;
    }
    let mut pool: Vec<&MissionId> = registry.missions.keys().collect();
    pool.sort(); // stable draw order regardless of map iteration
    let mut rng = rand::thread_rng();
    ledger.daily = pool
        .choose_multiple(&mut rng, DAILY_QUEST_COUNT)
        .map(|id| (*id).clone())
        .collect();
    ledger.accepted_today = true;
}

/// Adds `amount` toward every assigned, unclaimed mission watching `action`.
pub fn track_action(
    ledger: &mut QuestLedger,
    registry: &MissionRegistry,
    action: QuestAction,
    amount: u32,
) {
    for mission_id in ledger.daily.clone() {
        if ledger.is_claimed(&mission_id) {
            continue;
        }
        let Some(def) = registry.get(&mission_id) else {
            continue;
        };
        if def.action != action {
            continue;
        }
        let entry = ledger.progress.entry(mission_id).or_insert(0);
        *entry = entry.saturating_add(amount);
    }
}

/// Claims a finished mission: pays out money and items, marks it claimed,
/// and banks its weekly points. Every ledger is untouched on failure.
pub fn claim_reward(
    ledger: &mut QuestLedger,
    registry: &MissionRegistry,
    wallet: &mut Wallet,
    inventory: &mut Inventory,
    mission_id: &str,
) -> Result<u32, QuestError> {
    let def = registry.get(mission_id).ok_or(QuestError::UnknownMission)?;
    if !ledger.daily.iter().any(|m| m == mission_id) {
        return Err(QuestError::NotAssigned);
    }
    if ledger.is_claimed(mission_id) {
        return Err(QuestError::AlreadyClaimed);
    }
    if ledger.progress_of(mission_id) < def.target {
        return Err(QuestError::NotComplete);
    }

    wallet.credit(def.reward_money as u64);
    for (item_id, qty) in &def.reward_items {
        inventory.add_item(item_id, *qty);
    }
    ledger.claimed.push(mission_id.to_string());
    ledger.weekly_points = ledger.weekly_points.saturating_add(def.points);
    Ok(def.reward_money)
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Applies the midnight/Monday rollovers against the wall clock, then draws
/// today's board if it hasn't been drawn yet.
pub fn roll_over_ledger(
    wall: Res<WallClock>,
    registry: Res<MissionRegistry>,
    mut ledger: ResMut<QuestLedger>,
) {
    let today = wall.day_ordinal();
    let this_week = wall.week_ordinal();
    if reset_if_needed(&mut ledger, today, this_week) {
        info!("[Quests] Daily reset for day {today}");
    }
    if !ledger.accepted_today {
        assign_daily_quests(&mut ledger, &registry);
        info!("[Quests] Assigned today's missions: {:?}", ledger.daily);
    }
}

pub fn track_quest_progress(
    mut events: EventReader<QuestActionEvent>,
    registry: Res<MissionRegistry>,
    mut ledger: ResMut<QuestLedger>,
) {
    for ev in events.read() {
        track_action(&mut ledger, &registry, ev.action, ev.amount);
    }
}

pub fn handle_claim_quest(
    mut events: EventReader<ClaimQuestEvent>,
    registry: Res<MissionRegistry>,
    mut ledger: ResMut<QuestLedger>,
    mut wallet: ResMut<Wallet>,
    mut inventory: ResMut<Inventory>,
    mut money_events: EventWriter<MoneyChangeEvent>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        match claim_reward(&mut ledger, &registry, &mut wallet, &mut inventory, &ev.mission_id) {
            Ok(money) => {
                info!("[Quests] Claimed '{}' for {} coins", ev.mission_id, money);
                if money > 0 {
                    money_events.send(MoneyChangeEvent {
                        amount: money as i64,
                        reason: format!("mission {}", ev.mission_id),
                    });
                }
                toasts.send(ToastEvent::new("Mission complete!"));
            }
            Err(e) => {
                warn!("[Quests] Claim rejected for '{}': {:?}", ev.mission_id, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}
