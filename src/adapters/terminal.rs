use crate::core::{AnswerSource, Notice, NoticeKind, Notifier};
use crate::utils::error::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Enables or disables colour for every terminal adapter in the process.
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled && atty::is(atty::Stream::Stdout));
}

/// Prints notices to the terminal; errors go to stderr.
#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    clear_screen: bool,
}

impl TerminalNotifier {
    pub fn new(clear_screen: bool) -> Self {
        Self {
            clear_screen: clear_screen && atty::is(atty::Stream::Stdout),
        }
    }
}

pub fn render(notice: &Notice<'_>) -> String {
    match notice {
        Notice::PropertyFound(name) => format!(
            "{}{}{}",
            "Property ".green(),
            name.blue(),
            " found.".green()
        ),
        Notice::PropertyNotFound(name) => format!(
            "{}{}{}",
            "Property ".red(),
            name.blue(),
            " not found.".red()
        ),
        Notice::SelectionStatus(fields) => format!(
            "{}{}",
            format!("{} Option(s) Selected ", fields.len()).bold().green(),
            fields.to_string().underline()
        ),
        Notice::Question(name) => {
            format!("Do you need {}", format!("{}? ", name).bold().blue())
        }
        _ => {
            let text = notice.to_string();
            match notice.kind() {
                NoticeKind::Good => text.green().to_string(),
                NoticeKind::Bad | NoticeKind::Error => text.red().to_string(),
                NoticeKind::Status | NoticeKind::Question => text,
            }
        }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice<'_>) {
        let line = render(&notice);
        match notice {
            Notice::Error(_) => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }

    fn clear(&mut self) {
        if self.clear_screen {
            print!("{}", CLEAR_SCREEN);
            let _ = std::io::stdout().flush();
        }
    }
}

fn answer_prompt() -> String {
    format!(
        "{}{}{}[{}{}]:",
        "y/".green(),
        "n/".red(),
        "q(uit)".blue(),
        "default: ".purple(),
        "y".green()
    )
}

/// Reads y/n/q answers from stdin.
#[derive(Debug, Default)]
pub struct StdinAnswers;

impl StdinAnswers {
    pub fn new() -> Self {
        Self
    }
}

impl AnswerSource for StdinAnswers {
    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", answer_prompt())?;
        stdout.flush()?;

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
