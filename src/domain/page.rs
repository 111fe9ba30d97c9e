//! The closed set of dashboard pages.

use std::fmt;
use std::str::FromStr;

/// A dashboard page reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    StartTask,
    MetaData,
    Glossary,
    Demonstration,
    About,
}

impl Page {
    /// All pages in sidebar order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::StartTask,
        Page::MetaData,
        Page::Glossary,
        Page::Demonstration,
        Page::About,
    ];

    /// Label shown in the sidebar select.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::StartTask => "Start Task",
            Self::MetaData => "Meta Data",
            Self::Glossary => "Glossary",
            Self::Demonstration => "Demonstration",
            Self::About => "About",
        }
    }

    /// Route path serving the page.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::StartTask => "/start-task",
            Self::MetaData => "/metadata",
            Self::Glossary => "/glossary",
            Self::Demonstration => "/demonstration",
            Self::About => "/about",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a page label is not one of [`Page::ALL`].
#[derive(Debug, thiserror::Error)]
#[error("Unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.label() == label)
            .ok_or_else(|| UnknownPage(label.to_string()))
    }
}
