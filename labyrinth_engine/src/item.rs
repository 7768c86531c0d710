//! Item identities known to the engine.
//!
//! Rooms and the inventory hold plain item ids (the symbols used in
//! `world.ron`). Anything the engine attaches behavior to is named here so
//! handlers can `match` on it instead of comparing strings.

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    AncientBook,
    BronzeBox,
    Coin,
    RustyKey,
    Sword,
    Torch,
    TreasureChest,
    TreasureKey,
}

impl ItemKind {
    pub const ALL: [ItemKind; 8] = [
        ItemKind::AncientBook,
        ItemKind::BronzeBox,
        ItemKind::Coin,
        ItemKind::RustyKey,
        ItemKind::Sword,
        ItemKind::Torch,
        ItemKind::TreasureChest,
        ItemKind::TreasureKey,
    ];

    /// The id used for this item in world data and the inventory.
    pub fn symbol(self) -> &'static str {
        match self {
            ItemKind::AncientBook => "ancient_book",
            ItemKind::BronzeBox => "bronze_box",
            ItemKind::Coin => "coin",
            ItemKind::RustyKey => "rusty_key",
            ItemKind::Sword => "sword",
            ItemKind::Torch => "torch",
            ItemKind::TreasureChest => "treasure_chest",
            ItemKind::TreasureKey => "treasure_key",
        }
    }

    /// Look up a known item by id, ignoring case.
    pub fn from_symbol(symbol: &str) -> Option<ItemKind> {
        let lc = symbol.trim().to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.symbol() == lc)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Anything that holds an ordered list of item ids (rooms, the player).
pub trait ItemHolder {
    fn items(&self) -> &[String];
    fn items_mut(&mut self) -> &mut Vec<String>;

    /// Append an item unless it is already held. Returns `true` if it was added.
    fn add_item(&mut self, item_id: &str) -> bool {
        if self.contains_item(item_id) {
            return false;
        }
        self.items_mut().push(item_id.to_string());
        true
    }

    /// Remove an item, keeping the order of the rest. Returns `true` if it was held.
    fn remove_item(&mut self, item_id: &str) -> bool {
        let items = self.items_mut();
        if let Some(pos) = items.iter().position(|held| held == item_id) {
            items.remove(pos);
            true
        } else {
            false
        }
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.items().iter().any(|held| held == item_id)
    }

    fn has(&self, kind: ItemKind) -> bool {
        self.contains_item(kind.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bag(Vec<String>);
    impl ItemHolder for Bag {
        fn items(&self) -> &[String] {
            &self.0
        }
        fn items_mut(&mut self) -> &mut Vec<String> {
            &mut self.0
        }
    }

    #[test]
    fn holder_keeps_order_and_rejects_duplicates() {
        let mut bag = Bag(Vec::new());
        assert!(bag.add_item("torch"));
        assert!(bag.add_item("sword"));
        assert!(!bag.add_item("torch"));
        assert_eq!(bag.items(), ["torch", "sword"]);
        assert!(bag.remove_item("torch"));
        assert!(!bag.remove_item("torch"));
        assert!(bag.has(ItemKind::Sword));
        assert!(!bag.has(ItemKind::Torch));
    }

    #[test]
    fn symbols_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_symbol(kind.symbol()), Some(kind));
        }
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(ItemKind::from_symbol(" Bronze_Box "), Some(ItemKind::BronzeBox));
        assert_eq!(ItemKind::from_symbol("lantern"), None);
    }
}
