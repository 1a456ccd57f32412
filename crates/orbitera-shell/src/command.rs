//! Parsing of REPL input lines.

use anyhow::{Result, anyhow, bail};
use orbitera_core::record::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    List,
    Add,
    Delete(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboxAction {
    List,
    Show(RecordId),
    Delete(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Goto(String),
    Login { email: String, password: String },
    Logout,
    Whoami,
    Contact,
    Dashboard,
    Projects(CatalogAction),
    Services(CatalogAction),
    Messages(InboxAction),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            bail!("Empty command");
        };
        let args: Vec<&str> = words.collect();

        let command = match (head, args.as_slice()) {
            ("quit" | "exit", []) => Command::Quit,
            ("/goto", [path]) => Command::Goto(path.to_string()),
            ("/goto", _) => bail!("Usage: /goto <path>"),
            ("/login", [email, password]) => Command::Login {
                email: email.to_string(),
                password: password.to_string(),
            },
            ("/login", _) => bail!("Usage: /login <email> <password>"),
            ("/logout", []) => Command::Logout,
            ("/whoami", []) => Command::Whoami,
            ("/contact", []) => Command::Contact,
            ("/dashboard", []) => Command::Dashboard,
            ("/projects", rest) => Command::Projects(parse_catalog("/projects", rest)?),
            ("/services", rest) => Command::Services(parse_catalog("/services", rest)?),
            ("/messages", rest) => Command::Messages(parse_inbox(rest)?),
            ("/help", []) => Command::Help,
            _ => bail!("Unknown command: {} (try /help)", line.trim()),
        };
        Ok(command)
    }

    /// Lines that must not land in history.
    pub fn is_sensitive(line: &str) -> bool {
        line.trim_start().starts_with("/login")
    }
}

fn parse_catalog(name: &str, args: &[&str]) -> Result<CatalogAction> {
    match args {
        [] => Ok(CatalogAction::List),
        ["add"] => Ok(CatalogAction::Add),
        ["delete", id] => Ok(CatalogAction::Delete(parse_id(id)?)),
        _ => bail!("Usage: {} [add | delete <id>]", name),
    }
}

fn parse_inbox(args: &[&str]) -> Result<InboxAction> {
    match args {
        [] => Ok(InboxAction::List),
        ["show", id] => Ok(InboxAction::Show(parse_id(id)?)),
        ["delete", id] => Ok(InboxAction::Delete(parse_id(id)?)),
        _ => bail!("Usage: /messages [show <id> | delete <id>]"),
    }
}

fn parse_id(raw: &str) -> Result<RecordId> {
    raw.parse::<RecordId>()
        .map_err(|_| anyhow!("Not a valid id: {}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        assert_eq!(
            Command::parse("/login a@b.com 123").unwrap(),
            Command::Login {
                email: "a@b.com".to_string(),
                password: "123".to_string()
            }
        );
        assert!(Command::parse("/login a@b.com").is_err());
    }

    #[test]
    fn test_parse_catalog_actions() {
        assert_eq!(
            Command::parse("/projects").unwrap(),
            Command::Projects(CatalogAction::List)
        );
        assert_eq!(
            Command::parse("/services add").unwrap(),
            Command::Services(CatalogAction::Add)
        );
        assert_eq!(
            Command::parse("/projects delete 1700000000123").unwrap(),
            Command::Projects(CatalogAction::Delete(RecordId(1_700_000_000_123)))
        );
        assert!(Command::parse("/projects delete x").is_err());
    }

    #[test]
    fn test_parse_inbox_actions() {
        assert_eq!(
            Command::parse("/messages show 5").unwrap(),
            Command::Messages(InboxAction::Show(RecordId(5)))
        );
        assert!(Command::parse("/messages purge").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(Command::parse(" exit ").unwrap(), Command::Quit);
        assert_eq!(
            Command::parse("/goto /admin").unwrap(),
            Command::Goto("/admin".to_string())
        );
        assert!(Command::parse("/dance").is_err());
    }

    #[test]
    fn test_login_lines_are_sensitive() {
        assert!(Command::is_sensitive("/login a@b.com 123"));
        assert!(!Command::is_sensitive("/logout"));
    }
}
