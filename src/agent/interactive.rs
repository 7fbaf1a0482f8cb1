//! Interactive form - two bit fields, a submit step and the experience view
//!
//! Bad input is reported and dropped without touching the experience log.

use anyhow::Result;
use crossterm::{execute, style::{Color, Print, ResetColor, SetForegroundColor}};
use std::io;

use super::{Agent, Outcome};
use crate::learning::ExperienceLog;
use crate::types::BitPair;

pub const INPUT_ERROR_MESSAGE: &str = "Введите только 0 или 1!";

/// Result of submitting the form
#[derive(Debug)]
pub enum Submission {
    Decided(Outcome),
    Rejected(String),
}

/// Validate both fields and run the pipeline
pub fn submit(agent: &mut Agent, first: &str, second: &str) -> Result<Submission> {
    let input = match BitPair::parse(first, second) {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!("Rejected form input: {}", e);
            return Ok(Submission::Rejected(INPUT_ERROR_MESSAGE.to_string()));
        }
    };
    Ok(Submission::Decided(agent.process_input(input)?))
}

/// One line per record, oldest first
pub fn experience_view(log: &ExperienceLog) -> String {
    let mut view = String::new();
    for record in log.records() {
        view.push_str(&record.to_string());
        view.push('\n');
    }
    view
}

/// Text shown for a decision
pub fn decision_label(outcome: &Outcome) -> String {
    format!("Решение агента: {}", outcome.choice)
}

/// Print colored output
fn print_colored(text: &str, color: Color) {
    let _ = execute!(
        io::stdout(),
        SetForegroundColor(color),
        Print(text),
        ResetColor
    );
}

fn print_success(text: &str) {
    print_colored(&format!("{}\n", text), Color::Green);
}

fn print_error(text: &str) {
    print_colored(&format!("{}\n", text), Color::Red);
}

fn print_dim(text: &str) {
    print_colored(&format!("{}\n", text), Color::DarkGrey);
}

/// Print the experience view, or a note when it's empty
pub fn print_experience(log: &ExperienceLog) {
    if log.is_empty() {
        print_dim("Опыт пока пуст.");
    } else {
        print!("{}", experience_view(log));
    }
}

/// Print the outcome of a submission
pub fn print_submission(submission: &Submission) {
    match submission {
        Submission::Decided(outcome) => print_success(&decision_label(outcome)),
        Submission::Rejected(message) => print_error(&format!("Ошибка: {}", message)),
    }
}

enum Command {
    Experience,
    Exit,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    match line {
        "/опыт" | "/experience" => Some(Command::Experience),
        "/exit" | "/quit" => Some(Command::Exit),
        "/help" | "?" => Some(Command::Help),
        _ => None,
    }
}

fn print_help() {
    print_dim("Введите 2 бита (0 или 1): по одному на строку или оба через пробел.");
    print_dim("  /опыт, /experience   показать опыт агента");
    print_dim("  /exit                выход");
}

/// Run the terminal form until EOF or /exit
pub fn run_form(agent: &mut Agent) -> Result<()> {
    let config = rustyline::Config::builder()
        .edit_mode(rustyline::EditMode::Emacs)
        .auto_add_history(true)
        .build();
    let mut rl = rustyline::DefaultEditor::with_config(config)?;

    print_colored("Квантовый Интеллектуальный Ассистент\n", Color::Cyan);
    print_help();

    loop {
        let first = match rl.readline("бит 1 ❯ ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(err) => {
                print_error(&format!("Error: {}", err));
                break;
            }
        };
        let first = first.trim();
        if first.is_empty() {
            continue;
        }

        if let Some(command) = parse_command(first) {
            match command {
                Command::Experience => print_experience(agent.experience()),
                Command::Help => print_help(),
                Command::Exit => break,
            }
            continue;
        }

        // Both fields on one line
        let (first, second) = match first.split_once(char::is_whitespace) {
            Some((a, b)) => (a.to_string(), b.trim().to_string()),
            None => match rl.readline("бит 2 ❯ ") {
                Ok(line) => (first.to_string(), line),
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(err) => {
                    print_error(&format!("Error: {}", err));
                    break;
                }
            },
        };

        let submission = submit(agent, &first, &second)?;
        print_submission(&submission);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::planner::Planner;
    use crate::decision::ChoiceSelector;
    use crate::neuron::Neuron;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn agent_in(dir: &TempDir) -> Agent {
        Agent::with_components(
            Neuron::from_weights(vec![1.0, 0.0]),
            ChoiceSelector::new(["ответ A", "ответ B", "ответ C"]).unwrap(),
            "ответ A",
            Planner::new(Vec::new()),
            ExperienceLog::open(dir.path().join("experience.json")),
            StdRng::seed_from_u64(5),
        )
    }

    #[test]
    fn test_invalid_input_leaves_log_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let mut agent = agent_in(&temp_dir);
        for (a, b) in [("2", "0"), ("x", "1"), ("", "1"), ("1", "0.5"), ("-1", "0")] {
            match submit(&mut agent, a, b).unwrap() {
                Submission::Rejected(message) => assert_eq!(message, INPUT_ERROR_MESSAGE),
                Submission::Decided(_) => panic!("accepted {:?}", (a, b)),
            }
        }
        assert!(agent.experience().is_empty());
        assert!(!temp_dir.path().join("experience.json").exists());
    }

    #[test]
    fn test_valid_input_decides() {
        let temp_dir = TempDir::new().unwrap();
        let mut agent = agent_in(&temp_dir);
        match submit(&mut agent, "1", " 1 ").unwrap() {
            Submission::Decided(outcome) => {
                assert!(decision_label(&outcome).starts_with("Решение агента: ответ "));
            }
            Submission::Rejected(message) => panic!("rejected: {}", message),
        }
        assert_eq!(agent.experience().len(), 1);
    }

    #[test]
    fn test_experience_view_lines() {
        let temp_dir = TempDir::new().unwrap();
        let mut agent = agent_in(&temp_dir);
        submit(&mut agent, "0", "1").unwrap();
        submit(&mut agent, "1", "0").unwrap();

        let view = experience_view(agent.experience());
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Ввод: [0, 1], Обратная связь: "));
        assert!(lines[1].starts_with("Ввод: [1, 0], Обратная связь: "));
    }

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command("/опыт"), Some(Command::Experience)));
        assert!(matches!(parse_command("/exit"), Some(Command::Exit)));
        assert!(parse_command("1").is_none());
    }
}
