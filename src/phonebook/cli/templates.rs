//! Output templates, kept as standalone minijinja files so layout can be edited
//! and diffed apart from code. Line breaks in the templates are explicit; the
//! single trailing newline of each file is dropped by minijinja.
//!
//! Width math (column padding) happens in Rust, templates only pick styles.

pub const CONTACTS_TEMPLATE: &str = include_str!("templates/contacts.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
