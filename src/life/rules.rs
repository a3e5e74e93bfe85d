use crate::Rule;

/// Conway's rule: B3/S23.
///
/// 1. A living cell with fewer than 2 living neighbors dies.
/// 2. A living cell with 2 or 3 living neighbors lives on.
/// 3. A living cell with more than 3 living neighbors dies.
/// 4. A dead cell with exactly 3 living neighbors becomes alive.
#[derive(Clone, Copy, Debug, Default)]
pub struct Standard;

impl Standard {
    pub const UNDERPOPULATION: usize = 2;
    pub const OVERCROWDING: usize = 3;
    pub const REVIVE: usize = 3;
}

impl Rule for Standard {
    fn next_state(&self, live_neighbors: usize, alive: bool) -> bool {
        if alive {
            (Self::UNDERPOPULATION..=Self::OVERCROWDING).contains(&live_neighbors)
        } else {
            live_neighbors == Self::REVIVE
        }
    }
}
