//! REPL command parsing.

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the catalog with connection state
    List,
    /// Toggle the editor of a catalog entry
    Select(String),
    /// Replace the draft address
    Address(String),
    /// Connect or disconnect, depending on the phase
    Submit,
    Disconnect,
    /// Continue to the next stage
    Proceed,
    /// Re-fetch the association from the store
    Refresh,
    Help,
    Quit,
}

/// Parse a line; `Ok(None)` for blank input
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "select" | "s" => {
            if rest.is_empty() {
                return Err("usage: select <method-id>".to_string());
            }
            Command::Select(rest.to_string())
        }
        // the address may legitimately be blank; validity is decided by the controller
        "address" | "a" => Command::Address(rest.to_string()),
        "submit" | "connect" => Command::Submit,
        "disconnect" => Command::Disconnect,
        "proceed" | "next" => Command::Proceed,
        "refresh" => Command::Refresh,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}', type 'help'")),
    };
    Ok(Some(command))
}

pub const HELP: &str = "\
Commands:
  list                 show payment methods
  select <id>          open / close the address editor of a method
  address <text>       set the payment address being edited
  submit               connect the selected method, or disconnect the connected one
  disconnect           disconnect the connected method
  proceed              continue to the next step (requires a connected method)
  refresh              reload the current association from the server
  help                 show this help
  quit                 exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        // テスト項目: 各コマンドが正しく解釈される
        assert_eq!(parse_command("list"), Ok(Some(Command::List)));
        assert_eq!(
            parse_command("select  kucoin "),
            Ok(Some(Command::Select("kucoin".to_string())))
        );
        assert_eq!(
            parse_command("address user@upi"),
            Ok(Some(Command::Address("user@upi".to_string())))
        );
        assert_eq!(parse_command("SUBMIT"), Ok(Some(Command::Submit)));
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_blank_and_invalid() {
        // テスト項目: 空行は無視、不明なコマンドと引数不足はエラー
        assert_eq!(parse_command("   "), Ok(None));
        assert!(parse_command("select").is_err());
        assert!(parse_command("pay now").is_err());
    }

    #[test]
    fn test_address_without_text_is_blank_draft() {
        // テスト項目: 引数なしの address は空の下書きとして扱う
        assert_eq!(
            parse_command("address"),
            Ok(Some(Command::Address(String::new())))
        );
    }
}
