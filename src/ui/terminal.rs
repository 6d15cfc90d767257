//! Interactive terminal front end.
//!
//! Each input line is either a meta-command (`help`, `copy`, `quit`) or a
//! sequence of key labels fed to the session in order.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::calculator::{BinaryOp, UnaryFn, copy_to_clipboard};
use crate::config::Config;
use crate::input::{ALIASES, Key, TokenError, render_keypad, tokenize};
use crate::session::{Screen, Session};

/// One parsed line of terminal input.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Help,
    Copy,
    Quit,
    Keys(Vec<Key>),
}

impl Line {
    pub fn parse(input: &str) -> Result<Self, TokenError> {
        match input.trim() {
            "help" | "?" => Ok(Self::Help),
            "copy" => Ok(Self::Copy),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => tokenize(other).map(Self::Keys),
        }
    }
}

/// Render a screen as the lines printed after each input.
pub fn render_screen(screen: &Screen, show_history: bool) -> String {
    let mut out = String::new();
    if (show_history || screen.is_error) && !screen.history.is_empty() {
        out.push_str(&format!("  {}\n", screen.history));
    }
    out.push_str(&format!("= {}\n", screen.display));
    out
}

pub fn help_text() -> String {
    let operators: Vec<_> = BinaryOp::ALL.iter().map(|op| op.symbol()).collect();
    let functions: Vec<_> = UnaryFn::ALL.iter().map(|func| func.label()).collect();
    let aliases: Vec<_> = ALIASES
        .iter()
        .map(|(alias, label)| format!("{alias} = {label}"))
        .collect();

    format!(
        "{}\nOperators: {}\nFunctions: {}\nAliases:   {}\nCommands:  help, copy, quit\n",
        render_keypad(),
        operators.join(" "),
        functions.join(" "),
        aliases.join(", "),
    )
}

/// Run the prompt loop until `quit` or end of input.
pub fn run_repl(
    session: &mut Session,
    config: &Config,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    write!(output, "{}", render_screen(&session.screen(), config.show_history))?;
    write!(output, "{}", config.prompt)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        debug!(line = %line, "input line");

        match Line::parse(&line) {
            Ok(Line::Quit) => break,
            Ok(Line::Help) => write!(output, "{}", help_text())?,
            Ok(Line::Copy) => copy_result(session, &mut output)?,
            Ok(Line::Keys(keys)) => {
                let evaluates = keys.contains(&Key::Evaluate);
                let screen = session.press_all(keys);
                write!(output, "{}", render_screen(&screen, config.show_history))?;
                if evaluates && config.copy_on_evaluate && !screen.is_error {
                    copy_result(session, &mut output)?;
                }
            }
            Err(err) => writeln!(output, "{err}")?,
        }

        write!(output, "{}", config.prompt)?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

fn copy_result(session: &Session, output: &mut impl Write) -> Result<()> {
    let Some(result) = session.last_result() else {
        writeln!(output, "Nothing to copy")?;
        return Ok(());
    };

    match copy_to_clipboard(result) {
        Ok(()) => writeln!(output, "Copied {result}")?,
        Err(err) => {
            warn!("{err:#}");
            writeln!(output, "{err}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, config: &Config) -> String {
        let mut session = Session::new();
        let mut output = Vec::new();
        run_repl(&mut session, config, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_line_parsing() {
        assert_eq!(Line::parse(" help "), Ok(Line::Help));
        assert_eq!(Line::parse("exit"), Ok(Line::Quit));
        assert_eq!(Line::parse("copy"), Ok(Line::Copy));
        assert_eq!(
            Line::parse("4√"),
            Ok(Line::Keys(vec![Key::Digit(4), Key::Function(UnaryFn::Sqrt)]))
        );
        assert!(Line::parse("hello").is_err());
    }

    #[test]
    fn test_render_screen() {
        let screen = Screen {
            display: "3".to_string(),
            history: "2 +".to_string(),
            is_error: false,
        };
        assert_eq!(render_screen(&screen, true), "  2 +\n= 3\n");
        assert_eq!(render_screen(&screen, false), "= 3\n");

        let error = Screen {
            display: "Error".to_string(),
            history: "Cannot divide by zero".to_string(),
            is_error: true,
        };
        assert_eq!(
            render_screen(&error, false),
            "  Cannot divide by zero\n= Error\n"
        );
    }

    #[test]
    fn test_repl_session() {
        let output = run("12+\n3=\nquit\n4\n", &Config::default());
        assert!(output.contains("  12 +\n= 12\n"));
        assert!(output.contains("= 15\n"));
        // Input after quit is never read
        assert!(!output.contains("= 4\n"));
    }

    #[test]
    fn test_repl_reports_unknown_keys_and_errors() {
        let output = run("2 + x\n5/0=\n", &Config::default());
        assert!(output.contains("Unknown key: x"));
        assert!(output.contains("  Cannot divide by zero\n= Error\n"));
    }

    #[test]
    fn test_repl_uses_configured_prompt() {
        let config = Config {
            prompt: "calc> ".to_string(),
            ..Config::default()
        };
        let output = run("1\n", &config);
        assert_eq!(output.matches("calc> ").count(), 2);
    }

    #[test]
    fn test_help_lists_keys() {
        let help = help_text();
        assert!(help.contains("sqrt = √"));
        assert!(help.contains("sin cos tan"));
    }
}
