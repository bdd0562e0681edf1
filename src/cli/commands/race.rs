//! Race command - run depth-first and A* search side by side.

use std::path::PathBuf;

use huarong::solver::{SolveReport, Solver, SolverConfig, SolverError};
use structopt::StructOpt;

use super::util::{create_limits, load_board_or_exit};
use super::Command;

#[derive(StructOpt)]
pub struct RaceArgs {
    #[structopt(long, parse(from_os_str))]
    pub inputfile: PathBuf,
    #[structopt(long)]
    pub max_expansions: Option<usize>,
}

impl Command for RaceArgs {
    fn execute(self) {
        let board = load_board_or_exit(&self.inputfile);
        let solver = Solver::with_config(SolverConfig {
            limits: create_limits(self.max_expansions),
            ..SolverConfig::default()
        });

        let report = solver.race(&board);
        println!(
            "{:<6} {:>8} {:>10} {:>10} {:>12}",
            "algo", "moves", "expanded", "generated", "time"
        );
        print_row(&report.depth_first);
        print_row(&report.best_first);
    }
}

fn print_row(result: &Result<SolveReport, SolverError>) {
    match result {
        Ok(report) => {
            let moves = report
                .move_count()
                .map_or_else(|| "-".to_string(), |count| count.to_string());
            let time = report
                .duration
                .map_or_else(|| "-".to_string(), |duration| format!("{:.2?}", duration));
            println!(
                "{:<6} {:>8} {:>10} {:>10} {:>12}",
                report.strategy.to_string(),
                moves,
                report.stats.expanded,
                report.stats.generated,
                time
            );
        }
        Err(error) => println!("{}", error),
    }
}
