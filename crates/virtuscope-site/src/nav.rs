use strum::{EnumIter, IntoEnumIterator as _};

/// A part of the site a link or voice command can lead to.
#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, PartialEq)]
pub enum Section {
    Home,
    Services,
    Animation,
    Architecture,
    About,
    Contact,
}

impl Section {
    pub fn all() -> impl Iterator<Item = Section> {
        Section::iter()
    }

    /// The header links, in display order. Home is reached through the logo.
    pub const fn header() -> [Section; 5] {
        [
            Section::Services,
            Section::Animation,
            Section::Architecture,
            Section::About,
            Section::Contact,
        ]
    }

    /// Catalog key of the link text.
    pub const fn label_key(self) -> &'static str {
        match self {
            Section::Home => "hero.title",
            Section::Services => "services",
            Section::Animation => "animation",
            Section::Architecture => "architecture",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub const fn href(self) -> &'static str {
        match self {
            Section::Home => "/",
            Section::Services => "#services",
            Section::Animation => "/animation",
            Section::Architecture => "/architecture",
            Section::About => "#about",
            Section::Contact => "#contact",
        }
    }

    /// The element id for sections living on the home page, `None` for pages.
    pub fn anchor(self) -> Option<&'static str> {
        self.href().strip_prefix('#')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Section::Home, None)]
    #[case(Section::Services, Some("services"))]
    #[case(Section::Animation, None)]
    #[case(Section::About, Some("about"))]
    #[case(Section::Contact, Some("contact"))]
    fn anchors_only_on_home_page_sections(#[case] section: Section, #[case] anchor: Option<&str>) {
        assert_eq!(section.anchor(), anchor);
    }

    #[test]
    fn header_skips_home() {
        assert!(!Section::header().contains(&Section::Home));
        assert_eq!(Section::all().count(), Section::header().len() + 1);
    }
}
