//! Keypad layout used for help output.

/// Button grid, top row first.
pub const KEYPAD: &[&[&str]] = &[
    &["sin", "cos", "tan", "AC", "⌫"],
    &["log", "ln", "^", "√", "÷"],
    &["7", "8", "9", "±", "×"],
    &["4", "5", "6", "%", "-"],
    &["1", "2", "3", "CE", "+"],
    &["0", ".", "=", "", ""],
];

/// Typed alternatives for keypad labels.
pub const ALIASES: &[(&str, &str)] = &[
    ("*", "×"),
    ("/", "÷"),
    ("sqrt", "√"),
    ("neg", "±"),
    ("bs", "⌫"),
    ("ac", "AC"),
    ("ce", "CE"),
];

const CELL_WIDTH: usize = 5;

/// Render the keypad as a text grid.
pub fn render_keypad() -> String {
    let mut out = String::new();
    for row in KEYPAD {
        let line = row
            .iter()
            .map(|label| format!("{:^width$}", label, width = CELL_WIDTH))
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
