use jobboard_core::{FilterKey, Msg};

/// One line of user input, decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    /// Flip the local-jobs toggle relative to its current value.
    ToggleLocal,
    ShowOptions(FilterKey),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub const HELP: &str = "\
Commands:
  search <text>         search jobs or companies (empty clears)
  set <filter> <value>  country, category, industry, jobType, experienceLevel,
                        remoteType, visaSupport or sort; `all` removes a filter
  options <filter>      list the values offered for a filter
  local [on|off]        local jobs only (toggles without an argument)
  clear                 reset every filter
  next | prev           move one page
  page <n>              jump to page n
  retry                 re-run a failed search
  apply                 jump to quick apply
  resources             open career resources
  help | quit";

/// Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Dispatch(Msg::FilterChanged {
            key: FilterKey::Search,
            value: rest.to_string(),
        }),
        "set" => {
            let (name, value) = rest
                .split_once(char::is_whitespace)
                .map(|(name, value)| (name, value.trim()))
                .unwrap_or((rest, ""));
            let key = parse_key(name)?;
            if key != FilterKey::Search && value.is_empty() {
                return Err(ParseError(format!("`set {key}` needs a value")));
            }
            Command::Dispatch(Msg::FilterChanged {
                key,
                value: value.to_string(),
            })
        }
        "options" => Command::ShowOptions(parse_key(rest)?),
        "local" => match rest.to_ascii_lowercase().as_str() {
            "" => Command::ToggleLocal,
            "on" | "true" | "yes" => Command::Dispatch(Msg::LocalToggled(true)),
            "off" | "false" | "no" => Command::Dispatch(Msg::LocalToggled(false)),
            other => return Err(ParseError(format!("expected on or off, got `{other}`"))),
        },
        "clear" | "reset" => Command::Dispatch(Msg::ClearAllClicked),
        "next" | "n" | "more" => Command::Dispatch(Msg::NextPageClicked),
        "prev" | "p" => Command::Dispatch(Msg::PrevPageClicked),
        "page" => {
            let number: usize = rest
                .parse()
                .map_err(|_| ParseError(format!("`{rest}` is not a page number")))?;
            if number == 0 {
                return Err(ParseError("pages are numbered from 1".to_string()));
            }
            Command::Dispatch(Msg::PageSelected(number - 1))
        }
        "retry" => Command::Dispatch(Msg::RetryClicked),
        "apply" => Command::Dispatch(Msg::QuickApplyClicked),
        "resources" => Command::Dispatch(Msg::ResourcesClicked),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ParseError(format!("unknown command `{other}`; try help"))),
    };
    Ok(Some(command))
}

fn parse_key(name: &str) -> Result<FilterKey, ParseError> {
    FilterKey::from_wire(name).ok_or_else(|| ParseError(format!("unknown filter `{name}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatched(line: &str) -> Msg {
        match parse_command(line) {
            Ok(Some(Command::Dispatch(msg))) => msg,
            other => panic!("expected a message for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn set_keeps_multi_word_values() {
        assert_eq!(
            dispatched("set country United Arab Emirates"),
            Msg::FilterChanged {
                key: FilterKey::Country,
                value: "United Arab Emirates".to_string()
            }
        );
        assert_eq!(
            dispatched("SET job_type full-time"),
            Msg::FilterChanged {
                key: FilterKey::JobType,
                value: "full-time".to_string()
            }
        );
    }

    #[test]
    fn bare_search_clears_text() {
        assert_eq!(
            dispatched("search"),
            Msg::FilterChanged {
                key: FilterKey::Search,
                value: String::new()
            }
        );
    }

    #[test]
    fn pages_are_one_based_for_users() {
        assert_eq!(dispatched("page 3"), Msg::PageSelected(2));
        assert!(parse_command("page 0").is_err());
        assert!(parse_command("page x").is_err());
    }

    #[test]
    fn local_forms() {
        assert_eq!(parse_command("local"), Ok(Some(Command::ToggleLocal)));
        assert_eq!(dispatched("local on"), Msg::LocalToggled(true));
        assert_eq!(dispatched("local OFF"), Msg::LocalToggled(false));
        assert!(parse_command("local maybe").is_err());
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!(parse_command("   "), Ok(None));
        assert!(parse_command("set salary 100").is_err());
        assert!(parse_command("set country").is_err());
        assert!(parse_command("dance").is_err());
        assert_eq!(
            parse_command("options remoteType"),
            Ok(Some(Command::ShowOptions(FilterKey::RemoteType)))
        );
    }
}
