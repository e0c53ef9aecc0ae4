/// City-derived bucket controlling area vocabulary, phone prefix and domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    London,
    NewYork,
    Dhaka,
    Paris,
    Tokyo,
    Default,
}

const KNOWN: [(&str, Locale); 5] = [
    ("london", Locale::London),
    ("new york", Locale::NewYork),
    ("dhaka", Locale::Dhaka),
    ("paris", Locale::Paris),
    ("tokyo", Locale::Tokyo),
];

impl Locale {
    /// Case-insensitive substring match over the known city names; unknown
    /// cities get the generic vocabulary.
    pub fn classify(city: &str) -> Self {
        let lower = city.to_lowercase();
        KNOWN
            .iter()
            .find(|(token, _)| lower.contains(token))
            .map(|&(_, loc)| loc)
            .unwrap_or(Locale::Default)
    }

    /// Eight area names combined with the input city to form addresses.
    pub fn areas(self) -> [&'static str; 8] {
        match self {
            Locale::London => [
                "Mayfair",
                "Kensington",
                "Chelsea",
                "Camden",
                "Shoreditch",
                "Canary Wharf",
                "Westminster",
                "Soho",
            ],
            Locale::NewYork => [
                "Manhattan",
                "Brooklyn",
                "Queens",
                "Bronx",
                "Staten Island",
                "Midtown",
                "Downtown",
                "Upper East Side",
            ],
            Locale::Dhaka => [
                "Gulshan",
                "Dhanmondi",
                "Uttara",
                "Banani",
                "Mirpur",
                "Wari",
                "Old Dhaka",
                "Tejgaon",
            ],
            Locale::Paris => [
                "Champs-Élysées",
                "Montmartre",
                "Le Marais",
                "Saint-Germain",
                "Bastille",
                "Belleville",
                "Pigalle",
                "Louvre",
            ],
            Locale::Tokyo => [
                "Shibuya",
                "Shinjuku",
                "Ginza",
                "Harajuku",
                "Akihabara",
                "Roppongi",
                "Asakusa",
                "Ikebukuro",
            ],
            Locale::Default => [
                "Downtown",
                "Central",
                "North Side",
                "South Side",
                "East End",
                "West End",
                "Old Town",
                "New District",
            ],
        }
    }

    pub fn phone_prefix(self) -> &'static str {
        match self {
            Locale::London => "+44-20-",
            Locale::NewYork => "+1-212-",
            Locale::Dhaka => "+880-1",
            Locale::Paris => "+33-1-",
            Locale::Tokyo => "+81-3-",
            Locale::Default => "+1-555-",
        }
    }

    pub fn domain(self) -> &'static str {
        match self {
            Locale::London => ".co.uk",
            Locale::NewYork => ".com",
            Locale::Dhaka => ".bd",
            Locale::Paris => ".fr",
            Locale::Tokyo => ".jp",
            Locale::Default => ".com",
        }
    }
}
