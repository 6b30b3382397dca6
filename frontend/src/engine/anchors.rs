use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

/// The in-page id an anchor points at. `#` alone and hrefs that leave the
/// document yield nothing.
pub fn fragment_of(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Resolves an activated `href` through `lookup`. The caller has already
/// suppressed default navigation, so `None` means nothing happens at all.
pub fn resolve<T>(href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    fragment_of(href).and_then(lookup)
}

pub fn smooth_scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn page() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("services", "section.services"),
            ("work", "section.work"),
            ("contact", "section.contact"),
        ])
    }

    #[test]
    fn fragment_extraction() {
        assert_eq!(fragment_of("#contact"), Some("contact"));
        assert_eq!(fragment_of("#"), None);
        assert_eq!(fragment_of(""), None);
        assert_eq!(fragment_of("/faq#try-service"), None);
        assert_eq!(fragment_of("https://example.com/#work"), None);
    }

    #[test]
    fn known_fragment_resolves_to_its_region() {
        let page = page();
        let hit = resolve("#contact", |id| page.get(id).copied());
        assert_eq!(hit, Some("section.contact"));
    }

    #[test]
    fn missing_fragment_is_a_silent_miss() {
        let page = page();
        assert_eq!(resolve("#missing", |id| page.get(id).copied()), None);
    }

    #[test]
    fn bare_hash_never_consults_the_page() {
        let mut looked_up = false;
        let hit: Option<()> = resolve("#", |_| {
            looked_up = true;
            None
        });
        assert_eq!(hit, None);
        assert!(!looked_up);
    }
}
