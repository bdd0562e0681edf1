mod cli;

use cli::commands::Command;
use cli::Huarong;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Huarong::from_args().execute();
}
