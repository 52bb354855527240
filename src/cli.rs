//! Line-oriented command front-end for a canvas session.
//!
//! `parse` turns one input line into a `Command`; `execute` runs it against
//! a `CanvasService` and returns the text to show.

use std::fmt::Write as _;

use thiserror::Error;

use crate::application::CanvasService;
use crate::domain::canvas::{CanvasState, StageStatus};
use crate::domain::catalog::{DefinitionChoice, ValueChoice};
use crate::domain::foundation::DomainError;
use crate::domain::suggestion::SuggestionOutcome;

pub const HELP: &str = "\
Commands:
  status                          show progress and the document
  vision <text>                   set the vision (stage 1)
  mission <text>                  set the mission (stage 1)
  confirm                         confirm vision & mission, unlock values
  values                          list predefined values
  pick <value> <n>                add a predefined value with suggested definition n
  pick <value> = <definition>     add a predefined value with your own definition
  custom <name> = <definition>    add a value of your own
  scenarios                       list guideline scenarios
  suggest <scenario>              show suggestions matching your values
  adopt <scenario> <value>        add a scenario suggestion as a guideline
  guideline <text>                add a guideline of your own
  finalize                        finish the canvas
  help                            show this help
  quit                            leave (progress is saved)";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status,
    Vision(String),
    Mission(String),
    Confirm,
    Values,
    Choose(ValueChoice),
    Scenarios,
    Suggest(String),
    Adopt { scenario: String, value: String },
    Guideline(String),
    Finalize,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a definition number")]
    InvalidNumber(String),
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "status" => Command::Status,
        "vision" => Command::Vision(rest.to_string()),
        "mission" => Command::Mission(rest.to_string()),
        "confirm" => Command::Confirm,
        "values" => Command::Values,
        "pick" => Command::Choose(parse_pick(rest)?),
        "custom" => {
            let (name, definition) = split_assignment(rest)
                .ok_or(ParseError::Usage("custom <name> = <definition>"))?;
            Command::Choose(ValueChoice::Custom { name, definition })
        }
        "scenarios" => Command::Scenarios,
        "suggest" if !rest.is_empty() => Command::Suggest(rest.to_string()),
        "suggest" => return Err(ParseError::Usage("suggest <scenario>")),
        "adopt" => {
            let (scenario, value) = rest
                .split_once(char::is_whitespace)
                .ok_or(ParseError::Usage("adopt <scenario> <value>"))?;
            Command::Adopt {
                scenario: scenario.to_string(),
                value: value.trim().to_string(),
            }
        }
        "guideline" => Command::Guideline(rest.to_string()),
        "finalize" => Command::Finalize,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_pick(rest: &str) -> Result<ValueChoice, ParseError> {
    const USAGE: &str = "pick <value> <n> | pick <value> = <definition>";

    if let Some((name, definition)) = split_assignment(rest) {
        return Ok(ValueChoice::Predefined {
            name,
            definition: DefinitionChoice::Custom(definition),
        });
    }

    let (name, number) = rest
        .rsplit_once(char::is_whitespace)
        .ok_or(ParseError::Usage(USAGE))?;
    let n: usize = number
        .parse()
        .map_err(|_| ParseError::InvalidNumber(number.to_string()))?;
    if n == 0 {
        return Err(ParseError::InvalidNumber(number.to_string()));
    }
    Ok(ValueChoice::Predefined {
        name: name.trim().to_string(),
        definition: DefinitionChoice::Suggested(n - 1),
    })
}

fn split_assignment(rest: &str) -> Option<(String, String)> {
    let (name, definition) = rest.split_once('=')?;
    Some((name.trim().to_string(), definition.trim().to_string()))
}

/// Runs a command against the session.
pub async fn execute(service: &mut CanvasService, command: Command) -> Result<Flow, DomainError> {
    let reply = match command {
        Command::Status => render_status(service),
        Command::Vision(text) => {
            service.set_vision(text).await?;
            "Vision updated.".to_string()
        }
        Command::Mission(text) => {
            service.set_mission(text).await?;
            "Mission updated.".to_string()
        }
        Command::Confirm => {
            service.confirm_vision_mission().await?;
            "Vision & mission confirmed. Core values are unlocked.".to_string()
        }
        Command::Values => render_value_options(service),
        Command::Choose(choice) => {
            let before = service.state();
            let after = service.choose_value(&choice).await?;
            let mut reply = format!("Added value {}.", service.document().values().len());
            if before != after && after == CanvasState::Stage3Active {
                reply.push_str(" Guidelines are unlocked.");
            }
            reply
        }
        Command::Scenarios => render_scenarios(service),
        Command::Suggest(scenario) => render_suggestions(&service.suggestions(&scenario)?),
        Command::Adopt { scenario, value } => {
            let adopted = service.adopt_suggestion(&scenario, &value).await?;
            format!("Added guideline {}: {}", adopted.index + 1, adopted.text)
        }
        Command::Guideline(text) => {
            let index = service.add_guideline(text).await?;
            format!("Added guideline {}.", index + 1)
        }
        Command::Finalize => {
            service.finalize().await?;
            "Your north star is complete.".to_string()
        }
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(Flow::Quit),
    };
    Ok(Flow::Continue(reply))
}

// ───────────────────────────────────────────────────────────────
// Rendering
// ───────────────────────────────────────────────────────────────

fn render_status(service: &CanvasService) -> String {
    let view = service.view();
    let doc = service.document();
    let mut out = String::new();

    let _ = writeln!(out, "State: {} ({}% complete)", view.state, view.percent_complete);
    for stage in &view.stages {
        let mark = match stage.status {
            StageStatus::Active => ">",
            StageStatus::Complete => "x",
            StageStatus::Open => " ",
            StageStatus::Locked => "-",
        };
        let lock = if stage.editable { "" } else { " (read-only)" };
        let _ = writeln!(out, "[{}] {}. {}{}", mark, stage.stage.number(), stage.stage, lock);
    }

    let _ = writeln!(out, "Vision:  {}", doc.vision());
    let _ = writeln!(out, "Mission: {}", doc.mission());
    let _ = writeln!(out, "Values:");
    for value in doc.values() {
        let _ = writeln!(out, "  - {}: {}", value.name(), value.definition());
    }
    let _ = writeln!(out, "Guidelines:");
    for (i, guideline) in doc.guidelines().iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, guideline);
    }
    if view.can_finalize {
        let _ = writeln!(out, "Ready to finalize.");
    }
    out.trim_end().to_string()
}

fn render_value_options(service: &CanvasService) -> String {
    let mut out = String::new();
    for option in service.value_options() {
        let added = if option.already_added { " (added)" } else { "" };
        let _ = writeln!(out, "{}{}", option.name, added);
        for (i, definition) in option.definitions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, definition);
        }
    }
    out.trim_end().to_string()
}

fn render_scenarios(service: &CanvasService) -> String {
    let mut out = String::new();
    for scenario in service.scenarios() {
        let _ = writeln!(out, "{}  {}", scenario.name, scenario.description);
    }
    out.trim_end().to_string()
}

fn render_suggestions(outcome: &SuggestionOutcome) -> String {
    match outcome {
        SuggestionOutcome::NoApplicableSuggestion => {
            "No suggestion for this scenario matches your values.".to_string()
        }
        SuggestionOutcome::Available(suggestions) => {
            let mut out = String::new();
            for s in suggestions {
                let _ = writeln!(out, "[{}] {}", s.value_name, s.text);
            }
            out.trim_end().to_string()
        }
    }
}
