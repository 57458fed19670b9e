use std::fmt;

use super::content::{Category, Updates};

/// The five mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Splash screen.
    #[default]
    Home,
    /// Login / guest gate.
    Login,
    /// The updates feed and comment box.
    Posts,
    /// Read-only view of one category.
    Detail,
    /// Content and credential editor.
    Admin,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Login => "login",
            View::Posts => "posts",
            View::Detail => "detail",
            View::Admin => "admin",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title and text shown by the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPayload {
    pub title: String,
    pub content: String,
}

impl DetailPayload {
    pub fn for_category(updates: &Updates, category: Category) -> Self {
        Self {
            title: category.title().to_string(),
            content: updates.get(category).to_string(),
        }
    }
}
