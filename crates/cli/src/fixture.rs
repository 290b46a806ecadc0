//! Built-in starting stock used when no inventory file is given.

use gildedrose_inventory::{EVENT_TICKET_NAME, ItemRecord, LEGENDARY_NAME, RIPENING_NAME};

pub fn default_records() -> Vec<ItemRecord> {
    vec![
        ItemRecord::new("+5 Dexterity Vest", 10, 20),
        ItemRecord::new(RIPENING_NAME, 2, 0),
        ItemRecord::new("Elixir of the Mongoose", 5, 7),
        ItemRecord::new(LEGENDARY_NAME, 0, 80),
        ItemRecord::new(LEGENDARY_NAME, -1, 80),
        ItemRecord::new(EVENT_TICKET_NAME, 15, 20),
        ItemRecord::new(EVENT_TICKET_NAME, 10, 49),
        ItemRecord::new(EVENT_TICKET_NAME, 5, 49),
        ItemRecord::new("Conjured Mana Cake", 3, 6),
    ]
}
