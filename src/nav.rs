#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

impl NavItem {
    /// Exact match against the router pathname. Fragments never reach the
    /// pathname, so only `/` can light up on this single-page site.
    pub fn is_active(&self, pathname: &str) -> bool {
        self.path == pathname
    }
}

/// Element id named by a `location.hash` value such as `#about`.
pub fn hash_target(hash: &str) -> Option<&str> {
    hash.strip_prefix('#').filter(|id| !id.is_empty())
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        name: "Home",
        path: "/",
    },
    NavItem {
        name: "About",
        path: "/#about",
    },
    NavItem {
        name: "Skills",
        path: "/#skills",
    },
    NavItem {
        name: "Services",
        path: "/#services",
    },
    NavItem {
        name: "Portfolio",
        path: "/#portfolio",
    },
    NavItem {
        name: "Contact",
        path: "/#contact",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Called when a link inside the menu is followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MobileMenu::default().is_open());
    }

    #[test]
    fn test_toggle_twice_is_closed() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_click_closes_menu() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());

        // closing an already closed menu is fine, reopening is always allowed
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
    }

    #[test]
    fn test_active_link() {
        let active = NAV_ITEMS
            .iter()
            .filter(|i| i.is_active("/"))
            .map(|i| i.name)
            .collect::<Vec<_>>();
        assert_eq!(active, vec!["Home"]);
        assert!(NAV_ITEMS.iter().all(|i| !i.is_active("/missing")));
    }

    #[test]
    fn test_section_ids() {
        let ids = NAV_ITEMS
            .iter()
            .filter_map(|i| i.path.split_once('#'))
            .filter_map(|(_, fragment)| hash_target(&format!("#{fragment}")).map(str::to_string))
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["about", "skills", "services", "portfolio", "contact"]);
    }

    #[test]
    fn test_hash_target() {
        assert_eq!(hash_target("#contact"), Some("contact"));
        assert_eq!(hash_target("#"), None);
        assert_eq!(hash_target(""), None);
        assert_eq!(hash_target("contact"), None);
    }
}
