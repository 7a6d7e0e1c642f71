pub const FRAGMENT_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const REVEAL_SECTION_SELECTOR: &str = "section:not(.hero)";
pub const REVEAL_CONTENT_SELECTOR: &str = ".skills, .projects, .platform-grid, .motivation-carousel";
pub const REVEAL_CLASS: &str = "animated";
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Element id named by an in-page `href`, or `None` for a bare `#` and for
/// links that leave the page.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

pub fn scroll_top_for(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_resolve_to_ids() {
        assert_eq!(fragment_target("#projects"), Some("projects"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/resume.pdf"), None);
        assert_eq!(fragment_target("https://example.com/#top"), None);
    }

    #[test]
    fn header_offset_is_subtracted() {
        assert_eq!(scroll_top_for(1_200.0, 80.0), 1_120.0);
        assert_eq!(scroll_top_for(40.0, 80.0), -40.0);
    }
}
