use browser_core::{Category, Msg};

pub const HELP: &str = "commands: search <text> | size <n> | type <ID> | next | prev | page <n> | refresh | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` expects a positive number, got `{value}`")]
    NotANumber { command: &'static str, value: String },
    #[error("unknown type `{0}`")]
    UnknownType(String),
}

/// Parses one input line. Blank lines are a no-op.
///
/// `search` keeps everything after the first space verbatim, so
/// `search` alone clears the search text.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    let command = match word {
        "" => Command::Dispatch(Msg::NoOp),
        "search" => Command::Dispatch(Msg::SearchChanged(rest.to_string())),
        "size" => Command::Dispatch(Msg::PageSizeChanged(number("size", rest)?)),
        "page" => Command::Dispatch(Msg::PageRequested(number("page", rest)?)),
        "type" => {
            let id = rest.trim();
            let category = Category::from_id(&id.to_ascii_uppercase())
                .ok_or_else(|| CommandError::UnknownType(id.to_string()))?;
            Command::Dispatch(Msg::TypeToggled(category))
        }
        "next" => Command::Dispatch(Msg::NextClicked),
        "prev" => Command::Dispatch(Msg::PreviousClicked),
        "refresh" => Command::Dispatch(Msg::RefreshRequested),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn number(command: &'static str, value: &str) -> Result<u32, CommandError> {
    value
        .trim()
        .parse()
        .map_err(|_| CommandError::NotANumber {
            command,
            value: value.trim().to_string(),
        })
}
