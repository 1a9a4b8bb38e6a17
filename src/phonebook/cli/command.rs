use phonebook::error::PhonebookError;
use std::fmt;
use std::str::FromStr;

/// Commands accepted at the loop prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Add,
    All,
    Find,
    Edit,
    Delete,
    Save,
    ShowStorage,
    Exit,
}

impl ReplCommand {
    /// Help listing order.
    pub const ALL: [ReplCommand; 9] = [
        ReplCommand::Help,
        ReplCommand::Add,
        ReplCommand::All,
        ReplCommand::Find,
        ReplCommand::Edit,
        ReplCommand::Delete,
        ReplCommand::Save,
        ReplCommand::ShowStorage,
        ReplCommand::Exit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReplCommand::Help => "help",
            ReplCommand::Add => "add",
            ReplCommand::All => "all",
            ReplCommand::Find => "find",
            ReplCommand::Edit => "edit",
            ReplCommand::Delete => "delete",
            ReplCommand::Save => "save",
            ReplCommand::ShowStorage => "show_storage",
            ReplCommand::Exit => "exit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReplCommand::Help => "get help",
            ReplCommand::Add => "add contact",
            ReplCommand::All => "show all contacts",
            ReplCommand::Find => "find contacts by name, phone or comment",
            ReplCommand::Edit => "edit contact",
            ReplCommand::Delete => "delete contact",
            ReplCommand::Save => "save changes to file",
            ReplCommand::ShowStorage => "show raw storage",
            ReplCommand::Exit => "exit",
        }
    }
}

impl fmt::Display for ReplCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReplCommand {
    type Err = PhonebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ReplCommand::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| PhonebookError::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_parses_back() {
        for cmd in ReplCommand::ALL {
            assert_eq!(cmd.name().parse::<ReplCommand>().unwrap(), cmd);
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            "  show_storage ".parse::<ReplCommand>().unwrap(),
            ReplCommand::ShowStorage
        );
    }

    #[test]
    fn unknown_names_carry_the_input() {
        let err = "Add".parse::<ReplCommand>().unwrap_err();
        assert!(matches!(err, PhonebookError::UnknownCommand(ref name) if name == "Add"));
    }
}
