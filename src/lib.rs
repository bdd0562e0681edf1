pub mod board;
pub mod evaluate;
pub mod input_handler;
pub mod move_generator;
pub mod prelude;
pub mod scramble;
pub mod search;
pub mod slide;
pub mod solution;
pub mod solver;
