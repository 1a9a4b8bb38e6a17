//! Styles for the phonebook CLI.
//!
//! Templates refer to styles by semantic name (`name`, `phone`, `error`, ...)
//! through the `style` filter. This module maps those names onto concrete
//! `console::Style` values, so the look can change without touching a template.
//!
//! A name the theme does not know renders with a `(!?)` prefix, which makes
//! typos in templates visible instead of silently unstyled.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const PHONE: &str = "phone";
    pub const COMMENT: &str = "comment";
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const COMMAND: &str = "command";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// A named collection of styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any previous one with that name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    #[cfg(test)]
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Styles `text`, or only checks the name when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static PHONEBOOK_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::ID, Style::new().yellow())
        .add(names::NAME, Style::new().bold())
        .add(names::PHONE, Style::new().cyan())
        .add(names::COMMENT, Style::new().dim().italic())
        .add(names::MUTED, Style::new().dim())
        .add(names::TITLE, Style::new().bold().underlined())
        .add(names::COMMAND, Style::new().green())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red().bold())
});
