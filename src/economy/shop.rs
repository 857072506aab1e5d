//! The shop: a rotating stock list on a five-minute restock cycle, and the
//! purchase flow.
//!
//! Restocking always lists one common egg, then fills the shelf with a
//! random sample of the priced catalog. Eggs are rationed to one per cycle,
//! everything else stacks to three.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Events (internal — used to drive transactions from UI input)
// ─────────────────────────────────────────────────────────────────────────────

/// Fired by the UI when the player confirms a purchase.
#[derive(Event, Debug, Clone)]
pub struct BuyRequestEvent {
    pub item_id: ItemId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopError {
    UnknownItem,
    NotStocked,
    SoldOut,
    InsufficientFunds,
}

impl ShopError {
    pub fn message(&self) -> &'static str {
        match self {
            ShopError::UnknownItem => "Nobody has ever heard of that item.",
            ShopError::NotStocked => "The shop isn't carrying that right now.",
            ShopError::SoldOut => "Sold out! Check back after the restock.",
            ShopError::InsufficientFunds => "Not enough coins.",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Restock
// ─────────────────────────────────────────────────────────────────────────────

/// Rebuilds the shelf: the guaranteed common egg plus a sample of distinct
/// priced items drawn without replacement.
pub fn restock(shop: &mut ShopState, registry: &ItemRegistry, now: f64) {
    shop.stock.clear();
    shop.last_restock = now;

    shop.stock.push(StockEntry {
        item_id: GUARANTEED_EGG.to_string(),
        quantity: 1,
    });

    let pool: Vec<&ItemDef> = registry
        .sellable()
        .filter(|d| d.id != GUARANTEED_EGG)
        .collect();
    let mut rng = rand::thread_rng();
    for def in pool.choose_multiple(&mut rng, SHOP_SAMPLE_SIZE) {
        let quantity = if def.category == ItemCategory::Egg { 1 } else { 3 };
        shop.stock.push(StockEntry {
            item_id: def.id.clone(),
            quantity,
        });
    }
}

/// Polls the restock timer against the wall clock.
pub fn tick_restock(
    wall: Res<WallClock>,
    registry: Res<ItemRegistry>,
    mut shop: ResMut<ShopState>,
) {
    if wall.elapsed_since(shop.last_restock) >= SHOP_RESTOCK_SECONDS {
        restock(&mut shop, &registry, wall.now);
        info!("[Economy] Shop restocked with {} listings", shop.stock.len());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Purchase
// ─────────────────────────────────────────────────────────────────────────────

/// The core purchase flow: validate, then commit debit + stock decrement +
/// inventory add as one step. Returns the price paid.
pub fn buy_item(
    shop: &mut ShopState,
    wallet: &mut Wallet,
    inventory: &mut Inventory,
    registry: &ItemRegistry,
    item_id: &str,
) -> Result<u64, ShopError> {
    let def = registry.get(item_id).ok_or(ShopError::UnknownItem)?;
    let price = def.price.ok_or(ShopError::NotStocked)? as u64;

    let entry = shop
        .stock
        .iter_mut()
        .find(|e| e.item_id == item_id)
        .ok_or(ShopError::NotStocked)?;
    if entry.quantity == 0 {
        return Err(ShopError::SoldOut);
    }
    if !wallet.try_debit(price) {
        return Err(ShopError::InsufficientFunds);
    }

    entry.quantity -= 1;
    inventory.add_item(item_id, 1);
    Ok(price)
}

/// Processes BuyRequestEvents from the UI.
pub fn handle_buy(
    mut buy_events: EventReader<BuyRequestEvent>,
    mut shop: ResMut<ShopState>,
    mut wallet: ResMut<Wallet>,
    mut inventory: ResMut<Inventory>,
    registry: Res<ItemRegistry>,
    mut money_writer: EventWriter<MoneyChangeEvent>,
    mut quest_writer: EventWriter<QuestActionEvent>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for ev in buy_events.read() {
        match buy_item(&mut shop, &mut wallet, &mut inventory, &registry, &ev.item_id) {
            Ok(price) => {
                info!("[Economy] Bought '{}' for {} coins", ev.item_id, price);
                money_writer.send(MoneyChangeEvent {
                    amount: -(price as i64),
                    reason: format!("bought {}", ev.item_id),
                });
                quest_writer.send(QuestActionEvent {
                    action: QuestAction::SpendMoney,
                    amount: price.min(u32::MAX as u64) as u32,
                });
                // Category-specific quest verbs ride along with the purchase.
                if let Some(def) = registry.get(&ev.item_id) {
                    let action = match def.category {
                        ItemCategory::Egg => Some(QuestAction::BuyEgg),
                        ItemCategory::Food => Some(QuestAction::BuyFood),
                        ItemCategory::Toy => Some(QuestAction::BuyToy),
                        ItemCategory::Material => None,
                    };
                    if let Some(action) = action {
                        quest_writer.send(QuestActionEvent { action, amount: 1 });
                    }
                    toasts.send(ToastEvent::new(format!("Bought {}!", def.name)));
                }
            }
            Err(e) => {
                warn!("[Economy] Buy failed for '{}': {:?}", ev.item_id, e);
                toasts.send(ToastEvent::new(e.message()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ItemRegistry {
        let mut reg = ItemRegistry::default();
        crate::data::items::populate_items(&mut reg);
        reg
    }

    fn stocked_shop() -> ShopState {
        let mut shop = ShopState::default();
        restock(&mut shop, &registry(), 1000.0);
        shop
    }

    #[test]
    fn restock_always_lists_the_common_egg_first() {
        let shop = stocked_shop();
        assert_eq!(shop.stock[0].item_id, GUARANTEED_EGG);
        assert_eq!(shop.stock[0].quantity, 1);
        assert_eq!(shop.last_restock, 1000.0);
    }

    #[test]
    fn restock_listings_are_distinct() {
        let shop = stocked_shop();
        for (i, a) in shop.stock.iter().enumerate() {
            for b in &shop.stock[i + 1..] {
                assert_ne!(a.item_id, b.item_id);
            }
        }
    }

    #[test]
    fn restock_rations_eggs_to_one() {
        let reg = registry();
        let shop = stocked_shop();
        for entry in &shop.stock {
            let def = reg.get(&entry.item_id).unwrap();
            if def.category == ItemCategory::Egg {
                assert_eq!(entry.quantity, 1, "egg {} over-stocked", entry.item_id);
            } else {
                assert_eq!(entry.quantity, 3);
            }
        }
    }

    #[test]
    fn buying_commits_all_three_ledgers() {
        let reg = registry();
        let mut shop = stocked_shop();
        let mut wallet = Wallet { money: 100 };
        let mut inv = Inventory::default();

        let price = buy_item(&mut shop, &mut wallet, &mut inv, &reg, GUARANTEED_EGG).unwrap();
        assert_eq!(price, 50);
        assert_eq!(wallet.money, 50);
        assert_eq!(inv.count(GUARANTEED_EGG), 1);
        assert_eq!(shop.stock_of(GUARANTEED_EGG).unwrap().quantity, 0);
    }

    #[test]
    fn sold_out_rejects_before_the_wallet_is_touched() {
        let reg = registry();
        let mut shop = stocked_shop();
        let mut wallet = Wallet { money: 1000 };
        let mut inv = Inventory::default();

        buy_item(&mut shop, &mut wallet, &mut inv, &reg, GUARANTEED_EGG).unwrap();
        let err = buy_item(&mut shop, &mut wallet, &mut inv, &reg, GUARANTEED_EGG).unwrap_err();
        assert_eq!(err, ShopError::SoldOut);
        assert_eq!(wallet.money, 950);
        assert_eq!(inv.count(GUARANTEED_EGG), 1);
    }

    #[test]
    fn broke_buyer_leaves_stock_untouched() {
        let reg = registry();
        let mut shop = stocked_shop();
        let mut wallet = Wallet { money: 5 };
        let mut inv = Inventory::default();

        let err = buy_item(&mut shop, &mut wallet, &mut inv, &reg, GUARANTEED_EGG).unwrap_err();
        assert_eq!(err, ShopError::InsufficientFunds);
        assert_eq!(shop.stock_of(GUARANTEED_EGG).unwrap().quantity, 1);
        assert_eq!(wallet.money, 5);
    }

    #[test]
    fn unlisted_item_is_rejected() {
        let reg = registry();
        let mut shop = ShopState::default(); // empty shelf
        let mut wallet = Wallet { money: 1000 };
        let mut inv = Inventory::default();
        let err = buy_item(&mut shop, &mut wallet, &mut inv, &reg, "food_apple").unwrap_err();
        assert_eq!(err, ShopError::NotStocked);
    }
}
