//! Leptos UI components

mod empty_state;
mod guard;
mod header;
mod icons;
mod sidebar;

pub use empty_state::EmptyState;
pub use guard::{RequireSession, HOME_ROUTE};
pub use header::Header;
pub use sidebar::Sidebar;
