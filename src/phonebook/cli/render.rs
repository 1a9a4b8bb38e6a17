//! # Rendering Module
//!
//! Turns `CmdResult` contents into terminal text through the templates in
//! `templates/`. Column alignment is computed here with `unicode-width`, so
//! names in any script line up; the templates only choose styles.

use super::command::ReplCommand;
use super::styles::{names, PHONEBOOK_THEME};
use super::templates::{CONTACTS_TEMPLATE, HELP_TEMPLATE, MESSAGES_TEMPLATE};
use minijinja::{Environment, Error, Value};
use phonebook::api::{CmdMessage, MessageLevel};
use phonebook::error::PhonebookError;
use phonebook::model::Contact;
use serde::Serialize;
use tracing::warn;
use unicode_width::UnicodeWidthStr;

const CONTACTS: &str = "contacts";
const MESSAGES: &str = "messages";
const HELP: &str = "help";

#[derive(Serialize)]
struct ContactLine {
    id: String,
    name: String,
    name_padding: String,
    phone: String,
    comment: Option<String>,
}

#[derive(Serialize)]
struct ContactsData {
    contacts: Vec<ContactLine>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct HelpLine {
    name: String,
    padding: String,
    description: String,
}

#[derive(Serialize)]
struct HelpData {
    commands: Vec<HelpLine>,
}

/// Holds the compiled templates and the `style` filter for one session.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        let mut env = Environment::new();
        let theme = PHONEBOOK_THEME.clone();
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        for (name, source) in [
            (CONTACTS, CONTACTS_TEMPLATE),
            (MESSAGES, MESSAGES_TEMPLATE),
            (HELP, HELP_TEMPLATE),
        ] {
            if let Err(e) = env.add_template(name, source) {
                warn!(template = name, error = %e, "template failed to compile");
            }
        }
        Self { env }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }

    /// One aligned line per contact, or `empty_message` when there are none.
    pub fn render_contacts(&self, contacts: &[Contact], empty_message: &str) -> String {
        let id_width = contacts
            .iter()
            .map(|c| id_label(c).width())
            .max()
            .unwrap_or(0);
        let name_width = contacts
            .iter()
            .map(|c| c.name.width())
            .max()
            .unwrap_or(0);

        let lines = contacts
            .iter()
            .map(|c| ContactLine {
                id: format!("{:<width$}", id_label(c), width = id_width),
                name: c.name.clone(),
                name_padding: " ".repeat(name_width.saturating_sub(c.name.width())),
                phone: c.phone.clone(),
                comment: c.comment.clone(),
            })
            .collect();

        let data = ContactsData {
            contacts: lines,
            empty_message: empty_message.to_string(),
        };
        self.render(CONTACTS, &data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn render_messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }

        let messages_data = messages
            .iter()
            .map(|msg| {
                let style = match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                };
                MessageData {
                    content: msg.content.clone(),
                    style: style.to_string(),
                }
            })
            .collect();

        let data = MessagesData {
            messages: messages_data,
        };
        self.render(MESSAGES, &data).unwrap_or_else(|_| {
            messages
                .iter()
                .map(|m| format!("{}\n", m.content))
                .collect()
        })
    }

    pub fn render_error(&self, error: &PhonebookError) -> String {
        self.render_messages(&[CmdMessage::error(format!("Error: {}", error))])
    }

    pub fn render_help(&self, commands: &[ReplCommand]) -> String {
        let width = commands.iter().map(|c| c.name().len()).max().unwrap_or(0);
        let data = HelpData {
            commands: commands
                .iter()
                .map(|c| HelpLine {
                    name: c.name().to_string(),
                    padding: " ".repeat(width - c.name().len()),
                    description: c.description().to_string(),
                })
                .collect(),
        };
        self.render(HELP, &data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }
}

fn id_label(contact: &Contact) -> String {
    format!("ID={}", contact.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: u64, name: &str, phone: &str, comment: Option<&str>) -> Contact {
        Contact::new(id, name.into(), phone.into(), comment.map(str::to_string))
    }

    #[test]
    fn empty_listing_shows_the_message() {
        let output = Renderer::new(false).render_contacts(&[], "No contacts found.");
        assert_eq!(output, "No contacts found.\n");
    }

    #[test]
    fn contacts_render_one_per_line() {
        let output = Renderer::new(false).render_contacts(
            &[
                contact(1, "Ann", "123", None),
                contact(2, "Bob", "456", Some("work")),
            ],
            "",
        );
        assert_eq!(output, "ID=1  Ann  123\nID=2  Bob  456  work\n");
    }

    #[test]
    fn columns_align_on_display_width() {
        let output = Renderer::new(false).render_contacts(
            &[
                contact(9, "李雷", "1", None),
                contact(10, "Alexandra", "2", None),
            ],
            "",
        );
        let lines: Vec<&str> = output.lines().collect();
        // "李雷" is four columns wide, padded to the nine of "Alexandra"
        assert_eq!(lines[0], "ID=9   李雷       1");
        assert_eq!(lines[1], "ID=10  Alexandra  2");
        assert_eq!(lines[0].width(), lines[1].width());
    }

    #[test]
    fn colored_output_keeps_the_text() {
        let output = Renderer::new(true).render_contacts(&[contact(1, "Ann", "123", None)], "");
        assert!(output.contains("Ann"));
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn messages_render_each_level() {
        let output = Renderer::new(false).render_messages(&[
            CmdMessage::info("Info message"),
            CmdMessage::success("Contact added"),
            CmdMessage::warning("Warning message"),
        ]);
        assert_eq!(output, "Info message\nContact added\nWarning message\n");
    }

    #[test]
    fn no_messages_renders_nothing() {
        assert!(Renderer::new(false).render_messages(&[]).is_empty());
    }

    #[test]
    fn errors_are_prefixed() {
        let output = Renderer::new(false).render_error(&PhonebookError::ContactNotFound(4));
        assert_eq!(output, "Error: Contact with ID=4 not found\n");
    }

    #[test]
    fn help_lists_every_command() {
        let output = Renderer::new(false).render_help(&ReplCommand::ALL);
        assert!(output.starts_with("Phonebook commands:\n"));
        for cmd in ReplCommand::ALL {
            assert!(output.contains(cmd.name()));
            assert!(output.contains(cmd.description()));
        }
        assert!(output.contains("  show_storage  show raw storage\n"));
        assert!(output.contains("  add           add contact\n"));
    }
}
