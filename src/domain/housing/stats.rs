use crate::domain::housing::application::{ApplicationStatus, RentalApplication};
use crate::domain::housing::listing::Listing;
use rust_decimal::Decimal;

/// Aggregates shown on the landlord dashboard, derived from the live data
/// rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_listings: usize,
    pub active_listings: usize,
    pub total_applications: usize,
    pub pending_applications: usize,
    pub accepted_applications: usize,
    /// Sum of monthly prices of occupied rooms, in so'm.
    pub monthly_revenue: Decimal,
    /// Occupied rooms as a percentage of all rooms, rounded.
    pub occupancy_rate: u32,
}

impl DashboardStats {
    pub fn compute(listings: &[Listing], applications: &[RentalApplication]) -> Self {
        let total_listings = listings.len();
        let active_listings = listings.iter().filter(|l| l.is_active()).count();

        let total_applications = applications.len();
        let pending_applications = applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .count();
        let accepted_applications = applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Accepted)
            .count();

        let mut monthly_revenue = Decimal::ZERO;
        let mut total_rooms: u64 = 0;
        let mut occupied_rooms: u64 = 0;
        for listing in listings {
            let occupied = listing.total_rooms.saturating_sub(listing.available_rooms);
            total_rooms += u64::from(listing.total_rooms);
            occupied_rooms += u64::from(occupied);
            // Revenue is price per room times occupied rooms.
            if listing.total_rooms > 0 {
                let per_room = listing.price / Decimal::from(listing.total_rooms);
                monthly_revenue += per_room * Decimal::from(occupied);
            }
        }

        let occupancy_rate = if total_rooms == 0 {
            0
        } else {
            ((occupied_rooms * 100 + total_rooms / 2) / total_rooms) as u32
        };

        Self {
            total_listings,
            active_listings,
            total_applications,
            pending_applications,
            accepted_applications,
            monthly_revenue,
            occupancy_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock;

    #[test]
    fn stats_reflect_seed_data() {
        let listings = mock::sample_listings();
        let applications = mock::sample_applications(&listings);
        let stats = DashboardStats::compute(&listings, &applications);

        assert_eq!(stats.total_listings, 3);
        assert_eq!(stats.active_listings, 3);
        assert_eq!(stats.total_applications, 3);
        assert_eq!(stats.pending_applications, 1);
        assert_eq!(stats.accepted_applications, 1);
        // 2+1+3 occupied of 4+2+3 rooms.
        assert_eq!(stats.occupancy_rate, 67);
        assert!(stats.monthly_revenue > Decimal::ZERO);
    }

    #[test]
    fn empty_portfolio_has_zero_occupancy() {
        let stats = DashboardStats::compute(&[], &[]);
        assert_eq!(stats.occupancy_rate, 0);
        assert_eq!(stats.monthly_revenue, Decimal::ZERO);
    }
}
