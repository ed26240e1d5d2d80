pub mod commands;
pub mod print;
pub mod setup;
pub mod shell;

pub use commands::run;
