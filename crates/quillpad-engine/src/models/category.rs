/// Known article categories, used for icon and display mapping only.
///
/// Articles store their category as free text; values outside this list are
/// still valid and fall back to the default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Tech,
    Programming,
    Thoughts,
    Life,
    Learning,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Tech,
        Category::Programming,
        Category::Thoughts,
        Category::Life,
        Category::Learning,
        Category::Other,
    ];

    pub const DEFAULT_ICON: &'static str = "pen-nib";

    /// Looks a category up by its display name, ignoring case and
    /// surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Programming => "Programming",
            Category::Thoughts => "Thoughts",
            Category::Life => "Life",
            Category::Learning => "Learning",
            Category::Other => "Other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Tech => "cog",
            Category::Programming => "code",
            Category::Thoughts => "lightbulb",
            Category::Life => "heart",
            Category::Learning => "book",
            Category::Other => Self::DEFAULT_ICON,
        }
    }

    /// Icon for a stored category name, falling back for unknown names.
    pub fn icon_for(name: &str) -> &'static str {
        Self::from_name(name).map_or(Self::DEFAULT_ICON, Category::icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Tech", "cog")]
    #[case("programming", "code")]
    #[case(" Life ", "heart")]
    #[case("Gardening", "pen-nib")]
    #[case("", "pen-nib")]
    fn icon_for_name(#[case] name: &str, #[case] icon: &str) {
        assert_eq!(Category::icon_for(name), icon);
    }

    #[test]
    fn names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }
}
