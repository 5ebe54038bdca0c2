#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        title: "Home",
        path: "/",
    },
    NavItem {
        title: "About",
        path: "/about",
    },
    NavItem {
        title: "Skills",
        path: "/skills",
    },
    NavItem {
        title: "Projects",
        path: "/projects",
    },
    NavItem {
        title: "Contact",
        path: "/contact",
    },
];

const HOME: [Section; 5] = [
    Section::Hero,
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Contact,
];

/// Sections rendered for a path, in order. `None` for unknown paths.
pub fn sections_for_path(path: &str) -> Option<&'static [Section]> {
    let path = match path.strip_suffix('/') {
        Some(p) if !p.is_empty() => p,
        _ => path,
    };
    match path {
        "/" => Some(&HOME),
        "/about" => Some(&[Section::About]),
        "/skills" => Some(&[Section::Skills]),
        "/projects" => Some(&[Section::Projects]),
        "/contact" => Some(&[Section::Contact]),
        _ => None,
    }
}

pub fn page_title(path: &str) -> &'static str {
    match sections_for_path(path) {
        Some([single]) => single.title(),
        Some(_) => "Home",
        None => "Not Found",
    }
}

pub fn is_active(current: &str, item: &NavItem) -> bool {
    current == item.path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_root_renders_every_section_in_order() {
        assert_eq!(
            sections_for_path("/"),
            Some(
                &[
                    Section::Hero,
                    Section::About,
                    Section::Skills,
                    Section::Projects,
                    Section::Contact
                ][..]
            )
        );
    }

    #[test]
    fn test_each_nav_item_renders_its_section() {
        for item in NAV_ITEMS.iter().skip(1) {
            let sections = sections_for_path(item.path).expect("nav path should be routed");
            assert_eq!(sections.len(), 1);
            assert_eq!(sections[0].title(), item.title);
            assert_eq!(format!("/{}", sections[0].anchor()), item.path);
        }
    }

    #[test]
    fn test_nav_paths_are_unique() {
        let paths = NAV_ITEMS.iter().map(|n| n.path).collect::<HashSet<_>>();
        assert_eq!(paths.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_unknown_and_trailing_slash() {
        assert_eq!(sections_for_path("/blog"), None);
        assert_eq!(sections_for_path(""), None);
        assert_eq!(sections_for_path("/about/"), Some(&[Section::About][..]));
        assert_eq!(page_title("/nowhere"), "Not Found");
        assert_eq!(page_title("/"), "Home");
        assert_eq!(page_title("/skills"), "Skills");
    }

    #[test]
    fn test_active_is_exact_match() {
        let about = &NAV_ITEMS[1];
        assert!(is_active("/about", about));
        assert!(!is_active("/about/", about));
        assert!(!is_active("/", about));
        assert!(is_active("/", &NAV_ITEMS[0]));
        assert!(!is_active("/about", &NAV_ITEMS[0]));
    }
}
