//! Seed record synthesis.
//!
//! Maps a validated (keyword, city) query to a fixed set of eight plausible
//! business records. Names, areas, phone prefixes and domains come from the
//! category/locale vocabularies; contact details are derived from the name so
//! every record is internally consistent. Phone digits, rating and review
//! counts are randomized per run.

mod category;
mod locale;

pub use category::Category;
pub use locale::Locale;

use crate::model::{BusinessRecord, SearchQuery};
use rand::Rng;

/// Number of template records generated per run.
pub const SEED_COUNT: usize = 8;

const ADJECTIVES: [&str; 10] = [
    "Premium", "Elite", "Golden", "Royal", "Modern", "Classic", "Urban", "Central", "Prime", "Best",
];

/// The per-run template records. Always exactly [`SEED_COUNT`] entries and
/// never mutated after creation; the emitter cycles over it forever.
#[derive(Debug, Clone)]
pub struct SeedSet {
    records: [BusinessRecord; SEED_COUNT],
}

impl SeedSet {
    pub fn get(&self, index: usize) -> &BusinessRecord {
        &self.records[index % SEED_COUNT]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BusinessRecord> {
        self.records.iter()
    }
}

/// Lowercased, whitespace-stripped form of a business name, shared by the
/// email and website fields.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Build the eight seed records for a query.
pub fn synthesize(query: &SearchQuery) -> SeedSet {
    let category = Category::classify(&query.keyword);
    let locale = Locale::classify(&query.city);
    let types = category.type_fragments();
    let areas = locale.areas();

    let mut rng = rand::thread_rng();
    let records = std::array::from_fn(|i| {
        let name = format!("{} {}", ADJECTIVES[i % ADJECTIVES.len()], types[i]);
        let slug = slugify(&name);
        BusinessRecord {
            id: (i + 1).to_string(),
            phone: format!("{}{}", locale.phone_prefix(), rng.gen_range(100_000..1_000_000)),
            email: format!("contact@{}{}", slug, locale.domain()),
            website: format!("https://{}{}", slug, locale.domain()),
            address: format!("{}, {}", areas[i], query.city),
            rating: (rng.gen_range(3.5..=5.0_f64) * 10.0).round() / 10.0,
            reviews: rng.gen_range(50..550),
            name,
        }
    });
    SeedSet { records }
}

/// Derive the presented record for one emission tick.
///
/// The cursor encodes `(cycle, position)` so ids stay unique across repeated
/// cycles through the seed set; after the first full cycle the name carries a
/// parenthetical cycle marker. Repeats are intentional simulation behavior,
/// not deduplicated against any upstream source.
pub fn derive(seed: &BusinessRecord, cursor: u64) -> BusinessRecord {
    let cycle = cursor / SEED_COUNT as u64;
    let position = cursor % SEED_COUNT as u64;
    let mut record = seed.clone();
    record.id = format!("{}-{}-{}", seed.id, cycle, position);
    if cursor > SEED_COUNT as u64 - 1 {
        record.name = format!("{} ({})", seed.name, cycle + 1);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchQuery;

    fn query(keyword: &str, city: &str) -> SearchQuery {
        SearchQuery::parse(keyword, city).unwrap()
    }

    #[test]
    fn produces_exactly_eight_records_in_range() {
        let seeds = synthesize(&query("restaurant", "Dhaka"));
        assert_eq!(seeds.iter().count(), SEED_COUNT);
        for r in seeds.iter() {
            assert!((3.5..=5.0).contains(&r.rating), "rating {}", r.rating);
            // One decimal place.
            assert!((r.rating * 10.0 - (r.rating * 10.0).round()).abs() < 1e-9);
            assert!((50..=549).contains(&r.reviews), "reviews {}", r.reviews);
        }
    }

    #[test]
    fn email_and_website_share_slug_and_domain() {
        let seeds = synthesize(&query("gym", "Tokyo"));
        for r in seeds.iter() {
            let slug = slugify(&r.name);
            assert_eq!(r.email, format!("contact@{slug}.jp"));
            assert_eq!(r.website, format!("https://{slug}.jp"));
        }
    }

    #[test]
    fn dhaka_locale_shapes_address_and_phone() {
        let seeds = synthesize(&query("restaurant", "Dhaka"));
        let areas = Locale::Dhaka.areas();
        for r in seeds.iter() {
            assert!(r.address.ends_with(", Dhaka"), "address {}", r.address);
            assert!(r.phone.starts_with("+880-1"), "phone {}", r.phone);
            let area = r.address.trim_end_matches(", Dhaka");
            assert!(areas.contains(&area), "unknown area {area}");
        }
    }

    #[test]
    fn unknown_inputs_fall_back_to_defaults() {
        let seeds = synthesize(&query("locksmith", "Springfield"));
        assert_eq!(seeds.iter().count(), SEED_COUNT);
        for r in seeds.iter() {
            assert!(r.phone.starts_with("+1-555-"));
            assert!(r.email.ends_with(".com"));
        }
    }

    #[test]
    fn address_keeps_city_as_typed() {
        // Classification is case-insensitive but the displayed city is not rewritten.
        let seeds = synthesize(&query("hotel", "DHAKA"));
        assert!(seeds.get(0).address.ends_with(", DHAKA"));
    }

    #[test]
    fn derive_encodes_cycle_and_position() {
        let seeds = synthesize(&query("shop", "Paris"));
        let first = derive(seeds.get(0), 0);
        assert_eq!(first.id, "1-0-0");
        assert_eq!(first.name, seeds.get(0).name);

        let wrapped = derive(seeds.get(2), 10);
        assert_eq!(wrapped.id, "3-1-2");
        assert_eq!(wrapped.name, format!("{} (2)", seeds.get(2).name));
    }

    #[test]
    fn derive_keeps_first_cycle_names_unsuffixed() {
        let seeds = synthesize(&query("shop", "Paris"));
        for cursor in 0..SEED_COUNT as u64 {
            let r = derive(seeds.get(cursor as usize), cursor);
            assert!(!r.name.ends_with(')'), "unexpected suffix at {cursor}");
        }
        let r = derive(seeds.get(0), SEED_COUNT as u64);
        assert!(r.name.ends_with("(2)"));
    }
}
