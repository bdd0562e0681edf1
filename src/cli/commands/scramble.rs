//! Scramble command - make a new puzzle with a seeded random walk.

use std::path::PathBuf;
use std::process;

use huarong::board::Board;
use huarong::scramble::{scramble, SOLVED_LAYOUT};
use structopt::StructOpt;

use super::util::load_board_or_exit;
use super::Command;

#[derive(StructOpt)]
pub struct ScrambleArgs {
    #[structopt(long, parse(from_os_str))]
    pub inputfile: Option<PathBuf>,
    #[structopt(long, default_value = "100")]
    pub steps: usize,
    #[structopt(long, default_value = "0")]
    pub seed: u64,
}

impl Command for ScrambleArgs {
    fn execute(self) {
        let board = match &self.inputfile {
            Some(path) => load_board_or_exit(path),
            None => match SOLVED_LAYOUT.parse::<Board>() {
                Ok(board) => board,
                Err(error) => {
                    eprintln!("Failed to load the solved layout: {}", error);
                    process::exit(1);
                }
            },
        };
        print!("{}", scramble(&board, self.steps, self.seed));
    }
}
