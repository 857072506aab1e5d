use bevy::prelude::*;
use crate::shared::*;

/// Advances the live-session play clock and the wall clock each frame.
/// The session total folds into the persisted total only at save time.
pub fn tick_clocks(time: Res<Time>, mut play: ResMut<PlayClock>, mut wall: ResMut<WallClock>) {
    let dt = time.delta_secs_f64();
    play.session += dt;
    wall.now += dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_time_includes_the_live_session() {
        let clock = PlayClock {
            total_played: 100.0,
            session: 25.0,
        };
        assert_eq!(clock.current_play_time(), 125.0);
    }

    #[test]
    fn folding_moves_session_into_total_once() {
        let mut clock = PlayClock {
            total_played: 100.0,
            session: 25.0,
        };
        assert_eq!(clock.fold_session(), 125.0);
        assert_eq!(clock.session, 0.0);
        // A second fold with no new session time changes nothing.
        assert_eq!(clock.fold_session(), 125.0);
    }

    #[test]
    fn wall_clock_clamps_negative_elapsed() {
        let wall = WallClock { now: 1000.0 };
        assert_eq!(wall.elapsed_since(2000.0), 0.0);
        assert_eq!(wall.elapsed_since(400.0), 600.0);
    }

    #[test]
    fn week_ordinal_is_stable_within_a_week() {
        // Day 4 of the epoch was the first Monday.
        let monday = WallClock { now: 4.0 * 86_400.0 };
        let sunday = WallClock { now: 10.9 * 86_400.0 };
        let next_monday = WallClock { now: 11.0 * 86_400.0 };
        assert_eq!(monday.week_ordinal(), sunday.week_ordinal());
        assert_ne!(sunday.week_ordinal(), next_monday.week_ordinal());
    }
}
