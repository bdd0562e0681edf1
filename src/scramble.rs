//! Random walks through the configuration graph, for making new puzzles.
//!
//! Every slide can be undone, so a board reached by a random walk from a
//! solvable board is solvable too.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::Board;
use crate::move_generator::MoveGenerator;

/// The classic piece set with the goal piece already at the exit. Used as
/// the default starting point for scrambling.
pub const SOLVED_LAYOUT: &str = "^^^^\nvvvv\n2<>2\n2112\n.11.\n";

/// Applies up to `steps` random slides to `board`. The same seed always
/// produces the same board. Stops early if a board has no legal slides.
pub fn scramble(board: &Board, steps: usize, seed: u64) -> Board {
    let move_generator = MoveGenerator::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut current = board.clone();

    for step in 0..steps {
        let successors = move_generator.successors(&current);
        match successors.choose(&mut rng) {
            Some((slide, next)) => {
                debug!("scramble step {}: {}", step, slide);
                current = next.clone();
            }
            None => break,
        }
    }

    current
}
