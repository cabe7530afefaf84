pub mod session;
pub mod theme;

pub use session::{AppView, Session};
pub use theme::{provide_theme_context, use_theme, Theme};
