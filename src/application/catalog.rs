use crate::domain::errors::ValidationError;
use crate::domain::housing::filter::{ListingFilter, SortKey, select};
use crate::domain::housing::listing::{Listing, validate_listing};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// In-memory store of the landlord's listings.
///
/// Lives for the process; the catalog backend is out of scope, so mutations
/// only touch this copy.
pub struct ListingCatalog {
    listings: Vec<Listing>,
}

impl ListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: Uuid) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn select(&self, filter: &ListingFilter, sort: SortKey) -> Vec<&Listing> {
        select(&self.listings, filter, sort)
    }

    pub fn total(&self) -> usize {
        self.listings.len()
    }

    pub fn active_count(&self) -> usize {
        self.listings.iter().filter(|l| l.is_active()).count()
    }

    pub fn add(&mut self, listing: Listing) -> Result<(), ValidationError> {
        validate_listing(&listing)?;
        info!(listing = %listing.id, "listing added");
        self.listings.push(listing);
        Ok(())
    }

    /// Replace an existing listing, bumping its update timestamp.
    pub fn update(&mut self, mut listing: Listing) -> Result<(), ValidationError> {
        validate_listing(&listing)?;
        if let Some(slot) = self.listings.iter_mut().find(|l| l.id == listing.id) {
            listing.updated_at = Utc::now();
            *slot = listing;
        }
        Ok(())
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.listings.len();
        self.listings.retain(|l| l.id != id);
        let removed = self.listings.len() < before;
        if removed {
            info!(listing = %id, "listing removed");
        }
        removed
    }

    /// Flip a listing between active and inactive.
    pub fn toggle_status(&mut self, id: Uuid) {
        if let Some(listing) = self.listings.iter_mut().find(|l| l.id == id) {
            listing.status = listing.status.toggled();
            listing.updated_at = Utc::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::housing::listing::ListingStatus;
    use crate::infrastructure::mock;
    use rust_decimal_macros::dec;

    fn catalog() -> ListingCatalog {
        ListingCatalog::new(mock::sample_listings())
    }

    #[test]
    fn search_and_status_filter_combine() {
        let catalog = catalog();
        let filter = ListingFilter {
            search: "xonadon".to_string(),
            status: Some(ListingStatus::Active),
            ..Default::default()
        };
        assert_eq!(catalog.select(&filter, SortKey::Rating).len(), 3);
    }

    #[test]
    fn toggle_deactivates_and_reactivates() {
        let mut catalog = catalog();
        let id = catalog.all()[0].id;

        catalog.toggle_status(id);
        assert_eq!(catalog.get(id).unwrap().status, ListingStatus::Inactive);
        assert_eq!(catalog.active_count(), 2);

        catalog.toggle_status(id);
        assert_eq!(catalog.get(id).unwrap().status, ListingStatus::Active);
    }

    #[test]
    fn remove_deletes_exactly_one() {
        let mut catalog = catalog();
        let id = catalog.all()[1].id;
        assert!(catalog.remove(id));
        assert!(!catalog.remove(id));
        assert_eq!(catalog.total(), 2);
    }

    #[test]
    fn add_rejects_invalid_listing() {
        let mut catalog = catalog();
        let mut listing = catalog.all()[0].clone();
        listing.id = uuid::Uuid::new_v4();
        listing.price = dec!(-100);
        assert!(catalog.add(listing).is_err());
        assert_eq!(catalog.total(), 3);
    }

    #[test]
    fn update_replaces_and_touches_timestamp() {
        let mut catalog = catalog();
        let mut listing = catalog.all()[0].clone();
        let old_updated = listing.updated_at;
        listing.price = dec!(1_300_000);
        catalog.update(listing.clone()).unwrap();

        let stored = catalog.get(listing.id).unwrap();
        assert_eq!(stored.price, dec!(1_300_000));
        assert!(stored.updated_at > old_updated);
    }
}
