//! Data models for the NitroSubs shell

pub mod role;
pub mod session;
pub mod theme;

pub use role::{Capability, CapabilitySet, Role};
pub use session::Session;
pub use theme::Theme;
