use rand::seq::SliceRandom;
use rand::Rng;

use crate::puzzle::Board;

/// Number of random slides used when no count is given.
pub const DEFAULT_SHUFFLE_STEPS: usize = 50;

/// Walk `steps` uniformly random legal slides away from `board`.
///
/// Every slide is reversible, so the result is always solvable when the
/// input is. Immediate backtracking is allowed.
pub fn shuffle<R: Rng + ?Sized>(board: &Board, steps: usize, rng: &mut R) -> Board {
    let mut current = board.clone();

    for _ in 0..steps {
        match random_move(&current, rng) {
            Some(next) => current = next,
            None => break,
        }
    }

    current
}

/// Pick one legal slide at random, if any exists.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Board> {
    board
        .legal_moves()
        .choose(rng)
        .map(|(_, next)| next.clone())
}
