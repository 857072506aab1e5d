mod shared;
mod pets;
mod economy;
mod incubator;
mod quests;
mod storage;
mod combat;
mod save;
mod data;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use shared::*;

fn main() {
    App::new()
        // Headless runtime: the simulation ticks at a fixed cadence with no
        // window or renderer attached.
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(StatesPlugin)
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<WallClock>()
        .init_resource::<PlayClock>()
        .init_resource::<Wallet>()
        .init_resource::<Inventory>()
        .init_resource::<ActiveRoster>()
        .init_resource::<IncubatorBank>()
        .init_resource::<ShopState>()
        .init_resource::<QuestLedger>()
        .init_resource::<SharedStorage>()
        .init_resource::<ItemRegistry>()
        .init_resource::<PetRegistry>()
        .init_resource::<MissionRegistry>()
        .init_resource::<EnemyRegistry>()
        // Events
        .add_event::<MoneyChangeEvent>()
        .add_event::<QuestActionEvent>()
        .add_event::<ToastEvent>()
        .add_event::<PetLevelUpEvent>()
        .add_event::<PetHatchedEvent>()
        .add_event::<PetEffectEvent>()
        .add_event::<EnemyDefeatedEvent>()
        // Domain plugins
        .add_plugins(pets::PetsPlugin)
        .add_plugins(economy::EconomyPlugin)
        .add_plugins(incubator::IncubatorPlugin)
        .add_plugins(quests::QuestsPlugin)
        .add_plugins(storage::StoragePlugin)
        .add_plugins(combat::CombatPlugin)
        .add_plugins(save::SavePlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        .run();
}
