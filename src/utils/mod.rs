pub mod format_utils;
pub mod url_utils;

pub use format_utils::{format_number, round_to};
pub use url_utils::{is_blank, truncate_url, with_scheme};
