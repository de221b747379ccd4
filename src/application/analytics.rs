use crate::application::catalog::ListingCatalog;
use crate::application::inbox::ApplicationInbox;
use crate::domain::housing::stats::DashboardStats;
use crate::domain::locale::{Language, LocalizedText};
use crate::infrastructure::mock;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// One headline number on the analytics view.
#[derive(Debug, Clone)]
pub struct Kpi {
    pub title: LocalizedText,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

#[derive(Debug, Clone)]
pub struct PopularListing {
    pub title: String,
    pub views: u32,
    pub applications: usize,
}

/// Everything the analytics view renders, assembled in one place so the
/// UI layer stays declarative.
pub struct AnalyticsReport {
    pub stats: DashboardStats,
    pub kpis: Vec<Kpi>,
    /// (month label, revenue in so'm)
    pub revenue_by_month: Vec<(LocalizedText, Decimal)>,
    /// (month label, applications received)
    pub applications_by_month: Vec<(LocalizedText, u32)>,
    pub popular: Vec<PopularListing>,
}

impl AnalyticsReport {
    pub fn build(catalog: &ListingCatalog, inbox: &ApplicationInbox, language: Language) -> Self {
        let stats = DashboardStats::compute(catalog.all(), inbox.all());
        let revenue_by_month = mock::revenue_history();
        let applications_by_month = mock::application_history();

        let monthly_applications = applications_by_month
            .last()
            .map(|(_, n)| *n)
            .unwrap_or_default();

        let kpis = vec![
            Kpi {
                title: LocalizedText::new("Jami daromad", "Общий доход"),
                value: format!("{} so'm", format_sum(stats.monthly_revenue)),
                change: "+12.5%".to_string(),
                trend: Trend::Up,
            },
            Kpi {
                title: LocalizedText::new("Band bo'lish darajasi", "Уровень занятости"),
                value: format!("{}%", stats.occupancy_rate),
                change: "+5.2%".to_string(),
                trend: Trend::Up,
            },
            Kpi {
                title: LocalizedText::new("Oylik arizalar", "Заявки за месяц"),
                value: monthly_applications.to_string(),
                change: "+18.3%".to_string(),
                trend: Trend::Up,
            },
            Kpi {
                title: LocalizedText::new("O'rtacha javob vaqti", "Среднее время ответа"),
                value: "2.5 soat".to_string(),
                change: "-15.4%".to_string(),
                trend: Trend::Down,
            },
        ];

        let popular = mock::listing_views()
            .into_iter()
            .filter_map(|(listing_id, views)| {
                let listing = catalog.get(listing_id)?;
                let applications = inbox
                    .all()
                    .iter()
                    .filter(|a| a.listing_id == listing_id)
                    .count();
                Some(PopularListing {
                    title: listing.title.get(language).to_string(),
                    views,
                    applications,
                })
            })
            .collect();

        Self {
            stats,
            kpis,
            revenue_by_month,
            applications_by_month,
            popular,
        }
    }

    /// Revenue series scaled to millions for plotting.
    pub fn revenue_points(&self) -> Vec<[f64; 2]> {
        self.revenue_by_month
            .iter()
            .enumerate()
            .map(|(i, (_, revenue))| {
                [
                    i as f64,
                    (revenue / Decimal::from(1_000_000)).to_f64().unwrap_or(0.0),
                ]
            })
            .collect()
    }

    pub fn application_points(&self) -> Vec<[f64; 2]> {
        self.applications_by_month
            .iter()
            .enumerate()
            .map(|(i, (_, n))| [i as f64, f64::from(*n)])
            .collect()
    }
}

/// Thousands-separated so'm amount, e.g. "4 500 000".
pub fn format_sum(amount: Decimal) -> String {
    let rounded = amount.round();
    let raw = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if rounded < Decimal::ZERO {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn report() -> AnalyticsReport {
        let catalog = ListingCatalog::new(mock::sample_listings());
        let inbox = ApplicationInbox::new(mock::sample_applications(catalog.all()));
        AnalyticsReport::build(&catalog, &inbox, Language::Uz)
    }

    #[test]
    fn report_carries_four_kpis_and_six_months() {
        let report = report();
        assert_eq!(report.kpis.len(), 4);
        assert_eq!(report.revenue_by_month.len(), 6);
        assert_eq!(report.applications_by_month.len(), 6);
    }

    #[test]
    fn popular_listings_join_views_with_applications() {
        let report = report();
        assert_eq!(report.popular.len(), 3);
        assert_eq!(report.popular[0].views, 245);
        // Two seed applications target the first listing.
        assert_eq!(report.popular[0].applications, 2);
    }

    #[test]
    fn plot_points_are_indexed_by_month() {
        let report = report();
        let points = report.revenue_points();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0][0], 0.0);
        assert!((points[5][1] - 5.2).abs() < 1e-9);
    }

    #[test]
    fn sums_are_grouped_by_thousands() {
        assert_eq!(format_sum(dec!(4_500_000)), "4 500 000");
        assert_eq!(format_sum(dec!(900)), "900");
        assert_eq!(format_sum(dec!(-1_200_000)), "-1 200 000");
    }
}
