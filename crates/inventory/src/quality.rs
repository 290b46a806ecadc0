//! Quality bounds and the clamped ±1 steps shared by every aging rule.

/// Lowest quality a non-legendary item can decay to.
pub const MIN_QUALITY: i32 = 0;
/// Highest quality a non-legendary item can reach by aging.
pub const MAX_QUALITY: i32 = 50;
/// Fixed quality of a legendary item.
pub const LEGENDARY_QUALITY: i32 = 80;

/// One quality point up, unless already at (or above) the ceiling.
pub fn clamped_increase(quality: i32) -> i32 {
    if quality < MAX_QUALITY { quality + 1 } else { quality }
}

/// One quality point down, unless already at (or below) the floor.
pub fn clamped_decrease(quality: i32) -> i32 {
    if quality > MIN_QUALITY { quality - 1 } else { quality }
}
