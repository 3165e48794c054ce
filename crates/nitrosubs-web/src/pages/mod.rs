//! Page components

mod login;
mod section;

pub use login::Login;
pub use section::{NotFound, SectionPage};
