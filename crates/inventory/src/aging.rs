//! Daily aging rules.
//!
//! One tick runs four steps in a fixed order:
//! 1. decrement `sell_in` (legendary items never age),
//! 2. apply the category's daily quality change,
//! 3. check expiry against the decremented `sell_in`,
//! 4. if expired, apply the category's post-expiry adjustment on top of step 2.

use crate::category::Category;
use crate::item::Item;
use crate::quality::{MIN_QUALITY, clamped_decrease, clamped_increase};

/// Age a single item by one day, in place.
pub fn tick(item: &mut Item) {
    let (sell_in, quality) = transition(item.category(), item.sell_in, item.quality);
    item.sell_in = sell_in;
    item.quality = quality;
}

/// Pure one-day transition `(sell_in, quality) -> (sell_in', quality')` for a category.
pub fn transition(category: Category, sell_in: i32, quality: i32) -> (i32, i32) {
    let sell_in = next_sell_in(category, sell_in);
    let mut quality = daily_quality(category, sell_in, quality);
    if sell_in < 0 {
        quality = outdated_quality(category, quality);
    }
    (sell_in, quality)
}

fn next_sell_in(category: Category, sell_in: i32) -> i32 {
    match category {
        Category::Legendary => sell_in,
        Category::Ripening | Category::EventTicket | Category::Generic => sell_in.saturating_sub(1),
    }
}

fn daily_quality(category: Category, sell_in: i32, quality: i32) -> i32 {
    match category {
        Category::Legendary => quality,
        Category::Ripening => clamped_increase(quality),
        Category::Generic => clamped_decrease(quality),
        Category::EventTicket => {
            (0..ticket_increase(sell_in)).fold(quality, |q, _| clamped_increase(q))
        }
    }
}

fn outdated_quality(category: Category, quality: i32) -> i32 {
    match category {
        Category::Legendary => quality,
        Category::Ripening => clamped_increase(quality),
        Category::Generic => clamped_decrease(quality),
        Category::EventTicket => MIN_QUALITY,
    }
}

/// Number of clamped +1 steps a ticket gains, given its decremented `sell_in`.
///
/// One step per 5-day stride from `sell_in` that still lands below 15, so
/// 0 from day 15 on, then 1, 2, 3 for `[10, 15)`, `[5, 10)`, `[0, 5)`.
/// Below zero the result is irrelevant: expiry resets the ticket to 0.
fn ticket_increase(sell_in: i32) -> u32 {
    match sell_in {
        s if s >= 15 => 0,
        s if s >= 10 => 1,
        s if s >= 5 => 2,
        _ => 3,
    }
}
