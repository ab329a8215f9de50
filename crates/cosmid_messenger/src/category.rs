//! Message categories and their colored labels

use owo_colors::OwoColorize;
use std::fmt;

/// Classification of a message. Determines the label printed after the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Yellow bold `WARN`
    Warning,
    /// Red bold `ERROR`
    Error,
    /// Green bold `UPDATE`
    Update,
    /// Dimmed `NOTE`, for messages that should stay in the background
    Ghost,
    /// White bold `NOTE`; also used for any unrecognized name
    #[default]
    Note,
}

impl Category {
    /// Resolve a category name. Unknown names fall back to `Note`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "warning" => Category::Warning,
            "error" => Category::Error,
            "update" => Category::Update,
            "ghost" => Category::Ghost,
            _ => Category::Note,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Warning => "warning",
            Category::Error => "error",
            Category::Update => "update",
            Category::Ghost => "ghost",
            Category::Note => "note",
        }
    }

    /// Plain label text
    pub fn label(&self) -> &'static str {
        match self {
            Category::Warning => "WARN",
            Category::Error => "ERROR",
            Category::Update => "UPDATE",
            Category::Ghost | Category::Note => "NOTE",
        }
    }

    /// Label with ANSI styling when `use_color` is set
    pub fn render(&self, use_color: bool) -> String {
        let label = self.label();
        if !use_color {
            return label.to_string();
        }

        match self {
            Category::Warning => label.yellow().bold().to_string(),
            Category::Error => label.red().bold().to_string(),
            Category::Update => label.green().bold().to_string(),
            Category::Ghost => label.white().bold().dimmed().to_string(),
            Category::Note => label.white().bold().to_string(),
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Category::from_name(name)
    }
}

impl From<&String> for Category {
    fn from(name: &String) -> Self {
        Category::from_name(name)
    }
}

impl From<Option<&str>> for Category {
    fn from(name: Option<&str>) -> Self {
        name.map(Category::from_name).unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
