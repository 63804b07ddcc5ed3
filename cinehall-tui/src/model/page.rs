//! Page routing state.

/// The page shown in the content panel.
///
/// Mirrors the dashboard's three routes: ticket orders (the landing page),
/// the movie catalogue, and registered users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Ticket orders (landing page).
    #[default]
    Orders,
    /// Movie catalogue with create/edit/delete.
    Movies,
    /// Registered users.
    Users,
}

impl Page {
    /// Page title for the content block.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Orders => "Available Tickets",
            Page::Movies => "Movies List",
            Page::Users => "Registered Users",
        }
    }
}
