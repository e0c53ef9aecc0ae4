/// Business category inferred from the search keyword.
///
/// Classification is a case-insensitive substring match against the known
/// tokens; anything unrecognized falls back to [`Category::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Restaurant,
    Hotel,
    Pharmacy,
    Shop,
    Gym,
    Default,
}

const KNOWN: [(&str, Category); 5] = [
    ("restaurant", Category::Restaurant),
    ("hotel", Category::Hotel),
    ("pharmacy", Category::Pharmacy),
    ("shop", Category::Shop),
    ("gym", Category::Gym),
];

impl Category {
    /// First matching token wins, mirroring the lookup order of the vocabulary.
    pub fn classify(keyword: &str) -> Self {
        let lower = keyword.to_lowercase();
        KNOWN
            .iter()
            .find(|(token, _)| lower.contains(token))
            .map(|&(_, cat)| cat)
            .unwrap_or(Category::Default)
    }

    /// Eight name fragments used to build display names for this category.
    pub fn type_fragments(self) -> [&'static str; 8] {
        match self {
            Category::Restaurant => [
                "Bistro",
                "Grill",
                "Kitchen",
                "Cafe",
                "Diner",
                "Eatery",
                "Tavern",
                "Brasserie",
            ],
            Category::Hotel => [
                "Hotel", "Inn", "Resort", "Lodge", "Suites", "Plaza", "Grand", "Royal",
            ],
            Category::Pharmacy => [
                "Pharmacy",
                "Drugstore",
                "Medical",
                "Health",
                "Care",
                "Wellness",
                "Rx",
                "Remedies",
            ],
            Category::Shop => [
                "Store", "Shop", "Market", "Boutique", "Outlet", "Emporium", "Gallery", "Corner",
            ],
            Category::Gym => [
                "Fitness",
                "Gym",
                "Health Club",
                "Training",
                "Workout",
                "Sports",
                "Athletic",
                "Wellness",
            ],
            Category::Default => [
                "Business",
                "Service",
                "Company",
                "Center",
                "Group",
                "Solutions",
                "Pro",
                "Plus",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_matches_substring_case_insensitively() {
        assert_eq!(Category::classify("Best Restaurants"), Category::Restaurant);
        assert_eq!(Category::classify("GYM near me"), Category::Gym);
        assert_eq!(Category::classify("hotels"), Category::Hotel);
    }

    #[test]
    fn classify_falls_back_to_default() {
        assert_eq!(Category::classify("plumber"), Category::Default);
        assert_eq!(Category::classify(""), Category::Default);
    }

    #[test]
    fn every_category_has_eight_fragments() {
        for cat in [
            Category::Restaurant,
            Category::Hotel,
            Category::Pharmacy,
            Category::Shop,
            Category::Gym,
            Category::Default,
        ] {
            assert_eq!(cat.type_fragments().len(), 8);
        }
    }
}
