//! Navigation menu models

/// A top-level menu entry. Entries with a submenu render as a group.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub text: &'static str,
    pub href: Option<&'static str>,
    pub page: Option<&'static str>,
    pub submenu: &'static [SubMenuItem],
}

#[derive(Debug, Clone, Copy)]
pub struct SubMenuItem {
    pub text: &'static str,
    pub href: &'static str,
}
