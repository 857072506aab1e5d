use bevy::prelude::*;
use crate::shared::*;

/// Running money statistics for save summaries and the weekly recap.
#[derive(Resource, Debug, Clone, Default)]
pub struct EconomyStats {
    pub total_earned: u64,
    pub total_spent: u64,
    pub total_transactions: u64,
}

/// Folds MoneyChangeEvents into the running stats. The wallet itself is
/// mutated at the transaction site (after an affordability check), so this
/// listener only keeps the books.
pub fn track_money_changes(
    mut money_events: EventReader<MoneyChangeEvent>,
    wallet: Res<Wallet>,
    mut stats: ResMut<EconomyStats>,
) {
    for ev in money_events.read() {
        if ev.amount >= 0 {
            stats.total_earned = stats.total_earned.saturating_add(ev.amount as u64);
            info!(
                "[Economy] Coins +{}: {}. Balance: {}",
                ev.amount,
                ev.reason,
                format_coins(wallet.money)
            );
        } else {
            stats.total_spent = stats.total_spent.saturating_add((-ev.amount) as u64);
            info!(
                "[Economy] Coins {}: {}. Balance: {}",
                ev.amount,
                ev.reason,
                format_coins(wallet.money)
            );
        }
        stats.total_transactions += 1;
    }
}

/// Format a coin amount as a display string (e.g. "1,234c").
#[allow(dead_code)]
pub fn format_coins(amount: u64) -> String {
    let s = amount.to_string();
    let mut result = String::new();
    let digits: Vec<char> = s.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result.push('c');
    result
}
