//! Count states command - count every configuration reachable from a puzzle.

use std::path::PathBuf;
use std::time::Instant;

use huarong::move_generator::MoveGenerator;
use structopt::StructOpt;

use super::util::load_board_or_exit;
use super::Command;

#[derive(StructOpt)]
pub struct CountStatesArgs {
    #[structopt(long, parse(from_os_str))]
    pub inputfile: PathBuf,
}

impl Command for CountStatesArgs {
    fn execute(self) {
        let board = load_board_or_exit(&self.inputfile);
        let start = Instant::now();
        let count = MoveGenerator::new().count_reachable(&board);
        let duration = start.elapsed();
        println!(
            "reachable configurations: {}, took {:?} ({:.0} configurations/s)",
            count,
            duration,
            count as f64 / duration.as_secs_f64().max(f64::EPSILON)
        );
    }
}
