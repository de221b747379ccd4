use crate::domain::locale::LocalizedText;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Shared,
    Family,
}

/// Who the rooms are let to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPolicy {
    Male,
    Female,
    Coed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Inactive,
    Pending,
}

impl ListingStatus {
    /// Active <-> Inactive; a Pending listing stays pending until moderated.
    pub fn toggled(self) -> Self {
        match self {
            ListingStatus::Active => ListingStatus::Inactive,
            ListingStatus::Inactive => ListingStatus::Active,
            ListingStatus::Pending => ListingStatus::Pending,
        }
    }
}

/// A rentable housing unit published by a landlord.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// Monthly price in so'm.
    pub price: Decimal,
    pub location: LocalizedText,
    pub address: String,
    /// Short university code, e.g. "TATU".
    pub university: String,
    pub distance_from_university_km: f64,
    pub images: Vec<String>,
    pub amenities: Vec<LocalizedText>,
    pub rating: f64,
    pub review_count: u32,
    pub room_type: RoomType,
    pub gender: GenderPolicy,
    pub available: bool,
    pub total_rooms: u32,
    pub available_rooms: u32,
    pub landlord_id: Uuid,
    pub rules: Vec<LocalizedText>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: ListingStatus,
    pub featured: bool,
}

impl Listing {
    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }
}

/// Field checks applied before a listing form is accepted.
pub fn validate_listing(listing: &Listing) -> Result<(), crate::domain::errors::ValidationError> {
    use crate::domain::errors::ValidationError;

    if listing.title.uz.trim().is_empty() && listing.title.ru.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "title" });
    }
    if listing.price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice {
            price: listing.price,
        });
    }
    if listing.total_rooms == 0 {
        return Err(ValidationError::MissingField { field: "total_rooms" });
    }
    if listing.available_rooms > listing.total_rooms {
        return Err(ValidationError::RoomCountMismatch {
            available: listing.available_rooms,
            total: listing.total_rooms,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock;
    use rust_decimal_macros::dec;

    #[test]
    fn status_toggle_flips_between_active_and_inactive() {
        assert_eq!(ListingStatus::Active.toggled(), ListingStatus::Inactive);
        assert_eq!(ListingStatus::Inactive.toggled(), ListingStatus::Active);
        assert_eq!(ListingStatus::Pending.toggled(), ListingStatus::Pending);
    }

    #[test]
    fn validation_rejects_bad_room_counts() {
        let mut listing = mock::sample_listings()[0].clone();
        listing.available_rooms = listing.total_rooms + 1;
        assert!(validate_listing(&listing).is_err());
    }

    #[test]
    fn validation_rejects_non_positive_price() {
        let mut listing = mock::sample_listings()[0].clone();
        listing.price = dec!(0);
        assert!(validate_listing(&listing).is_err());
    }

    #[test]
    fn validation_accepts_seed_data() {
        for listing in mock::sample_listings() {
            assert!(validate_listing(&listing).is_ok());
        }
    }
}
