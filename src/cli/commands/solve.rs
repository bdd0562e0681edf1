//! Solve command - find a path from the puzzle in a file to the goal.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use huarong::input_handler::write_solution;
use huarong::search::Strategy;
use huarong::solver::{Solver, SolverConfig};
use log::info;
use structopt::StructOpt;

use super::util::{create_limits, load_board_or_exit};
use super::Command;

#[derive(StructOpt)]
pub struct SolveArgs {
    #[structopt(long, parse(from_os_str))]
    pub inputfile: PathBuf,
    #[structopt(long, parse(from_os_str))]
    pub outputfile: Option<PathBuf>,
    #[structopt(long, default_value = "astar")]
    pub algo: Strategy,
    #[structopt(long)]
    pub max_expansions: Option<usize>,
}

impl Command for SolveArgs {
    fn execute(self) {
        let board = load_board_or_exit(&self.inputfile);
        let solver = Solver::with_config(SolverConfig {
            strategy: self.algo,
            limits: create_limits(self.max_expansions),
        });

        let report = match solver.solve(&board) {
            Ok(report) => report,
            Err(error) => {
                eprintln!("Failed to solve puzzle: {}", error);
                process::exit(1);
            }
        };
        info!(
            "{}: {:?} moves, {} states expanded",
            report.strategy,
            report.move_count(),
            report.stats.expanded
        );

        let written = match &self.outputfile {
            Some(path) => File::create(path).and_then(|file| {
                let mut out = BufWriter::new(file);
                write_solution(&mut out, &board, report.solution.as_ref())?;
                out.flush()
            }),
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                write_solution(&mut out, &board, report.solution.as_ref())
            }
        };
        if let Err(error) = written {
            eprintln!("Failed to write solution: {}", error);
            process::exit(1);
        }
    }
}
