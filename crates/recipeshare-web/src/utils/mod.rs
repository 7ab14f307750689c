pub mod browser;

pub use browser::{alert, confirm, copy_to_clipboard, current_url};
