use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartLayout {
    /// Every cell lit independently, the board may have no solution.
    Random,
    /// Like `Random`, but rerolls layouts that start out already dark.
    Unsolved,
    /// Presses random cells on a dark board, so the result is always solvable.
    Scrambled,
}
