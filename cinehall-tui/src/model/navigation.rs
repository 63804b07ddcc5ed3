//! Navigation panel state.

/// Navigation item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Orders,
    Movies,
    Users,
}

/// One entry of the navigation menu.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Navigation panel state.
pub struct NavigationState {
    /// Menu entries.
    pub items: Vec<NavItem>,
    /// Index of the highlighted entry.
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Orders,
                    label: "Tickets",
                    icon: "▤",
                },
                NavItem {
                    id: NavItemId::Movies,
                    label: "Movies",
                    icon: "●",
                },
                NavItem {
                    id: NavItemId::Users,
                    label: "Users data",
                    icon: "@",
                },
            ],
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    pub fn current_id(&self) -> Option<NavItemId> {
        self.current_item().map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
