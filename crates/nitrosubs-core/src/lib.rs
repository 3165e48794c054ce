//! nitrosubs-core - Core library for the NitroSubs application shell
//!
//! Provides roles and capabilities, the static navigation table with its
//! role filter, the header identity model, the sidebar state machine and the
//! provider traits the web layer implements.

pub mod error;
pub mod header;
pub mod models;
pub mod navigation;
pub mod panel;
pub mod preferences;
pub mod providers;

pub use error::CoreError;
pub use header::{display_initial, logout_and_redirect, HeaderModel, LOGIN_ROUTE, PLACEHOLDER_INITIAL};
pub use models::{Capability, CapabilitySet, Role, Session, Theme};
pub use navigation::{build_menu, is_active, route_requirement, Icon, NavEntry, NavItem, NavMenu, NavSectionView};
pub use panel::{PanelState, PanelWidth, RenderMode, Viewport, MOBILE_BREAKPOINT_PX};
pub use preferences::Preferences;
pub use providers::{toggle_theme, Navigator, SessionProvider, ThemeProvider};
