//! Command parsing
//!
//! Parses a raw input line into a `Command`. Verbs are case-insensitive;
//! a known verb with missing operands parses as `Unknown` so the handler
//! can answer with usage help instead of guessing.

use crate::shell::commands::Command;

/// Parses a raw command line into the `Command` enum.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "RM" if !arg.is_empty() => Command::Remove(arg.to_string()),
        "MKDIR" if !arg.is_empty() => Command::CreateFolder(arg.to_string()),
        "MV" if !arg.is_empty() => parse_rename(trimmed, arg),
        "EXPORT" if !arg.is_empty() => parse_export(arg),
        "LIST" => Command::List(if arg.is_empty() {
            None
        } else {
            Some(arg.to_string())
        }),
        "HELP" => Command::Help,
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn parse_rename(raw: &str, arg: &str) -> Command {
    let mut parts = arg.splitn(2, char::is_whitespace);
    let from = parts.next().unwrap_or("").trim();
    let to = parts.next().unwrap_or("").trim();

    if from.is_empty() || to.is_empty() {
        Command::Unknown(raw.to_string())
    } else {
        Command::Rename {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

fn parse_export(arg: &str) -> Command {
    let mut parts = arg.splitn(2, char::is_whitespace);
    let source = parts.next().unwrap_or("").trim();
    let name = parts.next().unwrap_or("").trim();

    Command::Export {
        source: source.to_string(),
        name: if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("Q"), Command::Quit);
        assert_eq!(parse_command("EXIT"), Command::Quit);
        assert_eq!(parse_command("HELP"), Command::Help);
        assert_eq!(parse_command("LIST"), Command::List(None));
    }

    #[test]
    fn test_parse_commands_with_operands() {
        assert_eq!(
            parse_command("RM results/model_v13"),
            Command::Remove("results/model_v13".to_string())
        );
        assert_eq!(
            parse_command("MKDIR predictions/part2"),
            Command::CreateFolder("predictions/part2".to_string())
        );
        assert_eq!(
            parse_command("MV results/model_v16 results/model1_part1"),
            Command::Rename {
                from: "results/model_v16".to_string(),
                to: "results/model1_part1".to_string(),
            }
        );
        assert_eq!(
            parse_command("LIST results"),
            Command::List(Some("results".to_string()))
        );
    }

    #[test]
    fn test_parse_export_with_and_without_name() {
        assert_eq!(
            parse_command("EXPORT runs/train/weights/best.pt"),
            Command::Export {
                source: "runs/train/weights/best.pt".to_string(),
                name: None,
            }
        );
        assert_eq!(
            parse_command("EXPORT runs/train/weights/last.pt last.pt"),
            Command::Export {
                source: "runs/train/weights/last.pt".to_string(),
                name: Some("last.pt".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_command("rm data.yaml"), Command::Remove("data.yaml".to_string()));
        assert_eq!(parse_command("quit"), Command::Quit);
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_command("  QUIT  "), Command::Quit);
        assert_eq!(
            parse_command("RM   data.yaml  "),
            Command::Remove("data.yaml".to_string())
        );
        assert_eq!(
            parse_command("MV  a   b "),
            Command::Rename {
                from: "a".to_string(),
                to: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_misused_known_commands_are_unknown() {
        assert_eq!(parse_command("RM"), Command::Unknown("RM".to_string()));
        assert_eq!(parse_command("MKDIR"), Command::Unknown("MKDIR".to_string()));
        assert_eq!(parse_command("MV onlyone"), Command::Unknown("MV onlyone".to_string()));
        assert_eq!(parse_command("EXPORT"), Command::Unknown("EXPORT".to_string()));
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(
            parse_command("FROBNICATE x"),
            Command::Unknown("FROBNICATE x".to_string())
        );
        assert_eq!(parse_command(""), Command::Unknown("".to_string()));
    }
}
