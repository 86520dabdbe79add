/// Trims the input and adds `https://` when no http(s) scheme is given.
pub fn with_scheme(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

pub fn is_blank(url: &str) -> bool {
    url.trim().is_empty()
}

/// Shortens a URL for display, appending "..." when cut.
pub fn truncate_url(url: &str, max_chars: usize) -> String {
    if url.chars().count() > max_chars {
        let head: String = url.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}
