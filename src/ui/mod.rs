mod app;
pub mod breakpoints;
mod console;
pub mod input;
mod view;

pub use app::{drive, run_plain, Debugger, Mode};
pub use console::{Console, ConsoleLine, Script, Terminal};
