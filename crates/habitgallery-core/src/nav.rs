//! Mobile menu and in-page anchor scrolling.

/// Icon font glyph for the closed menu button
pub const MENU_GLYPH: char = '\u{e9af}';
/// Icon font glyph for the open menu button
pub const CLOSE_GLYPH: char = '\u{ea13}';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the panel; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!("Mobile menu {}", if self.open { "opened" } else { "closed" });
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Glyph shown on the toggle button
    pub fn glyph(&self) -> char {
        if self.open {
            CLOSE_GLYPH
        } else {
            MENU_GLYPH
        }
    }
}

/// Smooth scroll to an element on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target_id: String,
}

impl ScrollRequest {
    /// In-page target of `href`. `""`, `"#"` and external links yield `None`.
    pub fn from_href(href: &str) -> Option<Self> {
        let target = href.strip_prefix('#')?;
        if target.is_empty() {
            return None;
        }
        Some(Self {
            target_id: target.to_string(),
        })
    }

    /// Script that scrolls the target into view and reports whether it
    /// exists.
    pub fn script(&self) -> String {
        // serde_json quoting keeps the id a plain string literal
        let id = serde_json::Value::String(self.target_id.clone());
        format!(
            "const el = document.getElementById({id}); \
             if (el) {{ el.scrollIntoView({{ behavior: 'smooth', block: 'start' }}); }} \
             return el !== null;"
        )
    }

    /// Log an outcome reported by the script.
    pub fn report(&self, found: bool) {
        if !found {
            tracing::warn!("Smooth scroll target not found: #{}", self.target_id);
        }
    }
}

/// Handle a click on a navigation link. A link inside the open mobile menu
/// closes the menu.
pub fn nav_click(menu: &mut MobileMenu, href: &str, inside_menu: bool) -> Option<ScrollRequest> {
    let request = ScrollRequest::from_href(href)?;
    if inside_menu && menu.is_open() {
        menu.close();
    }
    Some(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_switches_glyph() {
        let mut menu = MobileMenu::new();
        assert_eq!(menu.glyph(), '\u{e9af}');
        assert!(menu.toggle());
        assert_eq!(menu.glyph(), '\u{ea13}');
        assert!(!menu.toggle());
        assert_eq!(menu.glyph(), MENU_GLYPH);
    }

    #[test]
    fn test_from_href() {
        assert_eq!(
            ScrollRequest::from_href("#gallery"),
            Some(ScrollRequest {
                target_id: "gallery".to_string()
            })
        );
        assert_eq!(ScrollRequest::from_href(""), None);
        assert_eq!(ScrollRequest::from_href("#"), None);
        assert_eq!(ScrollRequest::from_href("https://example.com"), None);
    }

    #[test]
    fn test_link_in_open_menu_closes_it() {
        let mut menu = MobileMenu::new();
        menu.toggle();

        let request = nav_click(&mut menu, "#upload", true).unwrap();
        assert_eq!(request.target_id, "upload");
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_outside_menu_leaves_it() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        nav_click(&mut menu, "#upload", false);
        assert!(menu.is_open());

        assert_eq!(nav_click(&mut menu, "#", true), None);
        assert!(menu.is_open());
    }

    #[test]
    fn test_script_quotes_id() {
        let request = ScrollRequest::from_href("#a\"b").unwrap();
        assert!(request.script().contains(r#"getElementById("a\"b")"#));
    }
}
