//! Plain-text daily stock report.

use std::io::{self, Write};

use gildedrose_inventory::Inventory;

/// Write the block for one day: header, column line, one line per item, blank line.
pub fn write_day<W: Write>(out: &mut W, day: u32, inventory: &Inventory) -> io::Result<()> {
    writeln!(out, "-------- day {day} --------")?;
    writeln!(out, "name, sellIn, quality")?;
    for item in inventory {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gildedrose_inventory::Item;

    #[test]
    fn day_block_layout() {
        let inventory: Inventory = vec![Item::new("Aged Brie", 2, 0), Item::new("foo", -1, 3)]
            .into_iter()
            .collect();
        let mut out = Vec::new();
        write_day(&mut out, 4, &inventory).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "-------- day 4 --------\nname, sellIn, quality\nAged Brie, 2, 0\nfoo, -1, 3\n\n"
        );
    }
}
