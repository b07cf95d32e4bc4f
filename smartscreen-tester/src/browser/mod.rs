pub mod session;

pub use session::{BrowserConfig, BrowserKind, new_session, parse_browser_kind};
