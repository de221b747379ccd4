use joybor::application::catalog::ListingCatalog;
use joybor::domain::housing::filter::{ListingFilter, SortKey};
use joybor::domain::housing::listing::{GenderPolicy, ListingStatus, RoomType};
use joybor::domain::locale::{Language, LocalizedText};
use joybor::infrastructure::mock;
use rust_decimal_macros::dec;
use uuid::Uuid;

#[test]
fn landlord_publishes_and_finds_a_new_listing() {
    let mut catalog = ListingCatalog::new(mock::sample_listings());
    let initial = catalog.total();

    let mut listing = mock::sample_listings()[0].clone();
    listing.id = Uuid::new_v4();
    listing.title = LocalizedText::new("Yangi yotoqxona Sergelida", "Новое общежитие в Сергели");
    listing.price = dec!(750_000);
    listing.university = "TDIU".to_string();
    listing.room_type = RoomType::Single;
    listing.gender = GenderPolicy::Male;
    catalog.add(listing.clone()).unwrap();
    assert_eq!(catalog.total(), initial + 1);

    // The tenant search narrows straight down to it
    let filter = ListingFilter {
        search: "sergeli".to_string(),
        language: Language::Uz,
        max_price: Some(dec!(800_000)),
        room_type: Some(RoomType::Single),
        ..Default::default()
    };
    let hits = catalog.select(&filter, SortKey::PriceLow);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, listing.id);
}

#[test]
fn deactivated_listing_disappears_from_active_filter() {
    let mut catalog = ListingCatalog::new(mock::sample_listings());
    let id = catalog.all()[0].id;

    catalog.toggle_status(id);

    let filter = ListingFilter {
        status: Some(ListingStatus::Active),
        ..Default::default()
    };
    let active = catalog.select(&filter, SortKey::Rating);
    assert!(active.iter().all(|l| l.id != id));

    catalog.toggle_status(id);
    let active = catalog.select(&filter, SortKey::Rating);
    assert!(active.iter().any(|l| l.id == id));
}

#[test]
fn price_edit_is_visible_through_selection() {
    let mut catalog = ListingCatalog::new(mock::sample_listings());
    let mut listing = catalog.all()[2].clone();
    listing.price = dec!(2_000_000);
    catalog.update(listing.clone()).unwrap();

    let filter = ListingFilter {
        min_price: Some(dec!(1_900_000)),
        ..Default::default()
    };
    let hits = catalog.select(&filter, SortKey::PriceHigh);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, listing.id);
}
