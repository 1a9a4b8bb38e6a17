//! The command loop.
//!
//! Reads a command name, prompts for whatever that command needs, calls the
//! API and prints the rendered result. Ordinary errors are printed and the
//! loop goes on; only a broken terminal ends it early. On exit, unsaved
//! changes are offered for saving.

use super::command::ReplCommand;
use super::render::Renderer;
use super::terminal::Terminal;
use phonebook::api::{CmdResult, PhonebookApi};
use phonebook::error::{PhonebookError, Result};
use phonebook::model::ContactUpdate;
use phonebook::store::ContactStore;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const NO_CONTACTS: &str = "No contacts found.";

pub struct Controller<S: ContactStore, R, W> {
    api: PhonebookApi<S>,
    terminal: Terminal<R, W>,
    renderer: Renderer,
    autosave_on_exit: bool,
}

impl<S: ContactStore, R: BufRead, W: Write> Controller<S, R, W> {
    pub fn new(api: PhonebookApi<S>, terminal: Terminal<R, W>, renderer: Renderer) -> Self {
        Self {
            api,
            terminal,
            renderer,
            autosave_on_exit: false,
        }
    }

    /// Save on exit without asking.
    pub fn autosave_on_exit(mut self, autosave: bool) -> Self {
        self.autosave_on_exit = autosave;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let line = match self.terminal.ask_command()? {
                Some(line) => line,
                None => {
                    // End of input: finish the prompt line before leaving
                    self.terminal.write("\n")?;
                    break;
                }
            };
            if line.is_empty() {
                continue;
            }

            let command = match line.parse::<ReplCommand>() {
                Ok(command) => command,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };
            if command == ReplCommand::Exit {
                break;
            }

            debug!(%command, "dispatching");
            match self.dispatch(command) {
                Ok(()) => {}
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => self.report(&e)?,
            }
        }
        self.finish()
    }

    fn dispatch(&mut self, command: ReplCommand) -> Result<()> {
        match command {
            ReplCommand::Help => {
                let help = self.renderer.render_help(&ReplCommand::ALL);
                self.terminal.write(&help)
            }
            ReplCommand::Add => {
                let name = self.terminal.ask_required("Name")?;
                let phone = self.terminal.ask_required("Phone")?;
                let comment = self.terminal.ask_optional("Comment")?;
                let result = self.api.add_contact(&name, &phone, comment.as_deref())?;
                self.show(&result)
            }
            ReplCommand::All => {
                let result = self.api.list_contacts()?;
                self.show_listing(&result)
            }
            ReplCommand::Find => {
                let query = self.terminal.ask_required("Search")?;
                let result = self.api.find_contacts(&query)?;
                self.show_listing(&result)
            }
            ReplCommand::Edit => {
                let id = self.terminal.ask_id("ID")?;
                let current = self.api.get_contact(id)?.clone();
                let listing = self
                    .renderer
                    .render_contacts(std::slice::from_ref(&current), NO_CONTACTS);
                self.terminal.write(&listing)?;

                let update = ContactUpdate {
                    name: self.terminal.ask_update("name", false)?,
                    phone: self.terminal.ask_update("phone", false)?,
                    comment: self.terminal.ask_update("comment", true)?,
                };
                let result = self.api.edit_contact(id, update)?;
                self.show(&result)
            }
            ReplCommand::Delete => {
                let id = self.terminal.ask_id("ID")?;
                let result = self.api.delete_contact(id)?;
                self.show(&result)
            }
            ReplCommand::Save => {
                let result = self.api.save()?;
                self.show(&result)
            }
            ReplCommand::ShowStorage => {
                let mut raw = self.api.show_storage()?.raw_storage.unwrap_or_default();
                if !raw.ends_with('\n') {
                    raw.push('\n');
                }
                self.terminal.write(&raw)
            }
            ReplCommand::Exit => Ok(()),
        }
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        let text = self.renderer.render_messages(&result.messages);
        self.terminal.write(&text)
    }

    fn show_listing(&mut self, result: &CmdResult) -> Result<()> {
        let listing = self
            .renderer
            .render_contacts(&result.listed_contacts, NO_CONTACTS);
        self.terminal.write(&listing)?;
        self.show(result)
    }

    fn report(&mut self, error: &PhonebookError) -> Result<()> {
        debug!(error = ?error, "command failed");
        let text = self.renderer.render_error(error);
        self.terminal.write(&text)
    }

    /// Offers to save when the cache differs from storage. A failed save is
    /// returned so the process can exit non-zero.
    fn finish(&mut self) -> Result<()> {
        let dirty = self.api.has_unsaved_changes().unwrap_or_else(|e| {
            warn!(error = %e, "could not compare with storage, assuming unsaved changes");
            true
        });
        if !dirty {
            return Ok(());
        }

        if self.autosave_on_exit || self.terminal.confirm_save()? {
            let result = self.api.save()?;
            self.show(&result)?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (PhonebookApi<S>, W) {
        (self.api, self.terminal.into_output())
    }
}
