//! # Rule Table
//!
//! Conway's B3/S23 rule as a fixed lookup indexed by `(alive, neighbours)`.
//! Every backend consults this table, the device kernel included (it uploads
//! [`RULE_TABLE`] flattened), so the per-cell cost is one indexed load.

/// Next state by `[alive as usize][live_neighbours]`.
///
/// ```text
/// dead:  . . . B . . . . .
/// alive: . . S S . . . . .
/// ```
pub const RULE_TABLE: [[bool; 9]; 2] = [
    [false, false, false, true, false, false, false, false, false],
    [false, false, true, true, false, false, false, false, false],
];

/// Largest possible live-neighbour count in a Moore neighbourhood.
pub const MAX_NEIGHBOURS: u8 = 8;

/// Next state of a cell given its current state and live-neighbour count.
///
/// `count` must be in `0..=8`.
#[inline(always)]
pub fn next(alive: bool, count: u8) -> bool {
    RULE_TABLE[alive as usize][count as usize]
}

/// [`RULE_TABLE`] flattened row-major, as `0`/`1` integers.
///
/// Entry `alive * 9 + count` holds the next state.
pub fn flattened() -> [i32; 18] {
    let mut table = [0; 18];
    for (alive, row) in RULE_TABLE.iter().enumerate() {
        for (count, &next) in row.iter().enumerate() {
            table[alive * 9 + count] = next as i32;
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_eighteen_combinations() {
        for count in 0..=MAX_NEIGHBOURS {
            assert_eq!(next(false, count), count == 3, "dead cell, {count} neighbours");
            assert_eq!(
                next(true, count),
                count == 2 || count == 3,
                "live cell, {count} neighbours"
            );
        }
    }

    #[test]
    fn flattened_matches_table() {
        let flat = flattened();
        for alive in [false, true] {
            for count in 0..=MAX_NEIGHBOURS {
                let idx = alive as usize * 9 + count as usize;
                assert_eq!(flat[idx] == 1, next(alive, count));
            }
        }
    }
}
