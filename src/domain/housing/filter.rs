use crate::domain::housing::listing::{GenderPolicy, Listing, ListingStatus, RoomType};
use crate::domain::locale::{Language, LocalizedText};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Conjunctive listing filter; `None`/empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    /// Case-insensitive match against title and location in `language`.
    pub search: String,
    pub language: Language,
    pub status: Option<ListingStatus>,
    /// Region label matched against the listing location, either language.
    pub region: Option<LocalizedText>,
    pub university: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub room_type: Option<RoomType>,
    pub gender: Option<GenderPolicy>,
    pub only_available: bool,
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() {
            let title = listing.title.get(self.language).to_lowercase();
            let location = listing.location.get(self.language).to_lowercase();
            if !title.contains(&search) && !location.contains(&search) {
                return false;
            }
        }
        if let Some(status) = self.status
            && listing.status != status
        {
            return false;
        }
        if let Some(region) = &self.region
            && !listing
                .location
                .uz
                .to_lowercase()
                .contains(&region.uz.to_lowercase())
            && !listing
                .location
                .ru
                .to_lowercase()
                .contains(&region.ru.to_lowercase())
        {
            return false;
        }
        if let Some(university) = &self.university
            && !university.is_empty()
            && listing.university != *university
        {
            return false;
        }
        if let Some(min) = self.min_price
            && listing.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && listing.price > max
        {
            return false;
        }
        if let Some(room_type) = self.room_type
            && listing.room_type != room_type
        {
            return false;
        }
        if let Some(gender) = self.gender
            && listing.gender != gender
        {
            return false;
        }
        if self.only_available && !listing.available {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    #[default]
    Rating,
    Distance,
}

impl SortKey {
    pub fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Rating => b
                .rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal),
            SortKey::Distance => a
                .distance_from_university_km
                .partial_cmp(&b.distance_from_university_km)
                .unwrap_or(Ordering::Equal),
        }
    }
}

/// Filter and sort in one pass, the way every listing view consumes it.
pub fn select<'a>(
    listings: &'a [Listing],
    filter: &ListingFilter,
    sort: SortKey,
) -> Vec<&'a Listing> {
    let mut selected: Vec<&Listing> = listings.iter().filter(|l| filter.matches(l)).collect();
    selected.sort_by(|a, b| sort.compare(a, b));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_filter_matches_all() {
        let listings = mock::sample_listings();
        let filter = ListingFilter::default();
        assert_eq!(select(&listings, &filter, SortKey::Rating).len(), listings.len());
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let listings = mock::sample_listings();
        let filter = ListingFilter {
            search: "zamonaviy".to_string(),
            ..Default::default()
        };
        let hits = select(&listings, &filter, SortKey::Rating);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].title.uz.contains("Zamonaviy"));
    }

    #[test]
    fn search_follows_selected_language() {
        let listings = mock::sample_listings();
        let filter = ListingFilter {
            search: "современная".to_string(),
            language: Language::Ru,
            ..Default::default()
        };
        assert_eq!(select(&listings, &filter, SortKey::Rating).len(), 1);
    }

    #[test]
    fn price_range_is_inclusive() {
        let listings = mock::sample_listings();
        let filter = ListingFilter {
            min_price: Some(dec!(900_000)),
            max_price: Some(dec!(1_200_000)),
            ..Default::default()
        };
        let hits = select(&listings, &filter, SortKey::PriceLow);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|l| l.price >= dec!(900_000) && l.price <= dec!(1_200_000)));
    }

    #[test]
    fn region_matches_location_in_both_languages() {
        let listings = mock::sample_listings();
        let region_of = |value: &str| {
            mock::regions()
                .into_iter()
                .find(|r| r.value == value)
                .unwrap()
                .label
        };

        let filter = ListingFilter {
            region: Some(region_of("toshkent")),
            ..Default::default()
        };
        assert_eq!(select(&listings, &filter, SortKey::Rating).len(), 3);

        let filter = ListingFilter {
            region: Some(region_of("samarqand")),
            language: Language::Ru,
            ..Default::default()
        };
        assert!(select(&listings, &filter, SortKey::Rating).is_empty());
    }

    #[test]
    fn university_and_gender_filters_conjoin() {
        let listings = mock::sample_listings();
        let filter = ListingFilter {
            university: Some("NUUz".to_string()),
            gender: Some(GenderPolicy::Female),
            ..Default::default()
        };
        let hits = select(&listings, &filter, SortKey::Rating);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].university, "NUUz");
    }

    #[test]
    fn sort_orders_each_key() {
        let listings = mock::sample_listings();
        let filter = ListingFilter::default();

        let by_price = select(&listings, &filter, SortKey::PriceLow);
        assert!(by_price.windows(2).all(|w| w[0].price <= w[1].price));

        let by_price_desc = select(&listings, &filter, SortKey::PriceHigh);
        assert!(by_price_desc.windows(2).all(|w| w[0].price >= w[1].price));

        let by_rating = select(&listings, &filter, SortKey::Rating);
        assert!(by_rating.windows(2).all(|w| w[0].rating >= w[1].rating));

        let by_distance = select(&listings, &filter, SortKey::Distance);
        assert!(by_distance.windows(2).all(|w| {
            w[0].distance_from_university_km <= w[1].distance_from_university_km
        }));
    }

    #[test]
    fn only_available_excludes_full_listings() {
        let listings = mock::sample_listings();
        let filter = ListingFilter {
            only_available: true,
            ..Default::default()
        };
        let hits = select(&listings, &filter, SortKey::Rating);
        assert!(hits.iter().all(|l| l.available));
        assert!(hits.len() < listings.len());
    }
}
