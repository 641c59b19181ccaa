//! Navigation catalog built from the content catalog.
//!
//! Read-only after construction; consumed by slug attachment and by page
//! composition.

use std::collections::BTreeMap;

/// The site navigation tree.
#[derive(Debug, Clone, Default)]
pub struct NavigationCatalog {
    /// Menus grouped by component name.
    menus: BTreeMap<String, Vec<NavMenu>>,
}

/// One navigation menu, in navigation-file order.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    /// Menu heading, when the navigation file declares one.
    pub title: Option<String>,
    /// Top-level entries.
    pub entries: Vec<NavEntry>,
}

/// A navigation tree node.
#[derive(Debug, Clone, Default)]
pub struct NavEntry {
    pub title: String,
    /// Target URL. Absent for grouping-only entries.
    pub url: Option<String>,
    /// Child entries.
    pub entries: Vec<NavEntry>,
}

impl NavigationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a menu to a component's navigation.
    pub fn insert_menu(&mut self, component: impl Into<String>, menu: NavMenu) {
        self.menus.entry(component.into()).or_default().push(menu);
    }

    /// Menus of a component, empty when the component has no navigation.
    pub fn menus(&self, component: &str) -> &[NavMenu] {
        self.menus.get(component).map_or(&[], Vec::as_slice)
    }

    /// Components with navigation, in name order.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.menus.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}
