pub mod cli;
pub mod colors;
pub mod commands;
pub mod console;

pub use cli::{Cli, Commands};
pub use colors::Colors;
pub use console::Console;
