pub mod terminal;

pub use terminal::{Line, help_text, render_screen, run_repl};
