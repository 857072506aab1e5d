use crate::shared::*;

/// Populate the MissionRegistry with the daily mission pool.
///
/// Three of these are drawn each day. `points` feed the weekly milestone
/// track when the daily reward is claimed.
pub fn populate_missions(registry: &mut MissionRegistry) {
    let missions: Vec<MissionDef> = vec![
        MissionDef {
            id: "daily_feed_5".into(),
            title: "Breakfast Service".into(),
            description: "Feed your pets 5 times.".into(),
            action: QuestAction::Feed,
            target: 5,
            reward_money: 30,
            reward_items: vec![("food_apple".into(), 2)],
            points: 40,
        },
        MissionDef {
            id: "daily_play_3".into(),
            title: "Recess".into(),
            description: "Play with your pets 3 times.".into(),
            action: QuestAction::Play,
            target: 3,
            reward_money: 25,
            reward_items: vec![],
            points: 40,
        },
        MissionDef {
            id: "daily_earn_100".into(),
            title: "Pocket Money".into(),
            description: "Earn 100 coins.".into(),
            action: QuestAction::EarnMoney,
            target: 100,
            reward_money: 40,
            reward_items: vec![],
            points: 50,
        },
        MissionDef {
            id: "daily_spend_150".into(),
            title: "Big Spender".into(),
            description: "Spend 150 coins at the shop.".into(),
            action: QuestAction::SpendMoney,
            target: 150,
            reward_money: 50,
            reward_items: vec![],
            points: 50,
        },
        MissionDef {
            id: "daily_buy_egg".into(),
            title: "Future Friend".into(),
            description: "Buy an egg from the shop.".into(),
            action: QuestAction::BuyEgg,
            target: 1,
            reward_money: 35,
            reward_items: vec![("food_kibble".into(), 3)],
            points: 60,
        },
        MissionDef {
            id: "daily_buy_food_3".into(),
            title: "Stocking the Pantry".into(),
            description: "Buy 3 food items.".into(),
            action: QuestAction::BuyFood,
            target: 3,
            reward_money: 20,
            reward_items: vec![],
            points: 30,
        },
        MissionDef {
            id: "daily_buy_toy".into(),
            title: "Toy Run".into(),
            description: "Buy a toy.".into(),
            action: QuestAction::BuyToy,
            target: 1,
            reward_money: 20,
            reward_items: vec![],
            points: 30,
        },
        MissionDef {
            id: "daily_hatch_1".into(),
            title: "Hello, World".into(),
            description: "Hatch an egg.".into(),
            action: QuestAction::Hatch,
            target: 1,
            reward_money: 60,
            reward_items: vec![("toy_ball".into(), 1)],
            points: 80,
        },
        MissionDef {
            id: "daily_unlock_slot".into(),
            title: "Room for One More".into(),
            description: "Unlock a pet slot.".into(),
            action: QuestAction::UnlockPetSlot,
            target: 1,
            reward_money: 80,
            reward_items: vec![],
            points: 80,
        },
        MissionDef {
            id: "daily_defeat_10".into(),
            title: "Yard Patrol".into(),
            description: "Defeat 10 challenge chickens.".into(),
            action: QuestAction::DefeatEnemy,
            target: 10,
            reward_money: 70,
            reward_items: vec![("food_steak".into(), 1)],
            points: 70,
        },
    ];

    for mission in missions {
        registry.missions.insert(mission.id.clone(), mission);
    }
}
