//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    count_states::CountStatesArgs, race::RaceArgs, scramble::ScrambleArgs, solve::SolveArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "huarong",
    about = "A Hua Rong Dao (Klotski) sliding-block puzzle solver"
)]
pub enum Huarong {
    #[structopt(
        name = "solve",
        about = "Solve the puzzle in `--inputfile` with the search chosen by `--algo` (dfs, astar or bfs; default: astar) and write every board of the solution path to `--outputfile`. Without `--outputfile` the path is printed to stdout."
    )]
    Solve(SolveArgs),
    #[structopt(
        name = "race",
        about = "Run depth-first and A* search on the puzzle in `--inputfile` at the same time and compare their path lengths, work and timing."
    )]
    Race(RaceArgs),
    #[structopt(
        name = "count-states",
        about = "Count every configuration reachable from the puzzle in `--inputfile`, and report the time it took to do so."
    )]
    CountStates(CountStatesArgs),
    #[structopt(
        name = "scramble",
        about = "Print a new puzzle made by applying `--steps` random slides (default: 100) to the puzzle in `--inputfile`, or to the solved classic layout when no file is given. The same `--seed` always gives the same puzzle."
    )]
    Scramble(ScrambleArgs),
}

impl crate::cli::commands::Command for Huarong {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Solve(cmd),
            Race(cmd),
            CountStates(cmd),
            Scramble(cmd),
        }
    }
}
