use crate::application::analytics::format_sum;
use crate::domain::housing::filter::{self, SortKey};
use crate::domain::housing::listing::{Listing, ListingStatus};
use crate::infrastructure::i18n::I18nService;
use crate::infrastructure::mock;
use crate::infrastructure::settings_persistence::ViewMode;
use crate::interfaces::dashboard_components::listing_form::{
    self, FormOutcome, ListingForm, gender_label, room_type_label,
};
use crate::interfaces::design_system::{DesignSystem, Palette};
use crate::interfaces::ui::LandlordApp;
use eframe::egui;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;

pub fn render_listings_view(ui: &mut egui::Ui, app: &mut LandlordApp) {
    let palette = DesignSystem::palette(app.settings.theme);
    let language = app.language();

    ui.horizontal(|ui| {
        ui.heading(app.i18n.t("nav_listings"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let add = egui::Button::new(
                egui::RichText::new(format!("➕ {}", app.i18n.t("add_listing"))).strong(),
            )
            .fill(palette.accent);
            if ui.add(add).clicked() {
                app.listing_form = Some(ListingForm::empty());
            }
        });
    });
    ui.add_space(8.0);

    render_filter_bar(ui, app);
    ui.add_space(12.0);

    app.filter.language = language;
    let selected: Vec<Listing> = filter::select(app.catalog.all(), &app.filter, app.sort)
        .into_iter()
        .cloned()
        .collect();

    if selected.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new(app.i18n.t("no_results"))
                    .italics()
                    .color(palette.text_muted),
            );
        });
        return;
    }

    let mut edit_requested: Option<Uuid> = None;
    let mut toggle_requested: Option<Uuid> = None;
    let mut delete_requested: Option<Uuid> = None;

    egui::ScrollArea::vertical()
        .id_salt("listings_scroll")
        .show(ui, |ui| match app.settings.view_mode {
            ViewMode::Grid => {
                let columns = 2;
                for row in selected.chunks(columns) {
                    ui.horizontal(|ui| {
                        for listing in row {
                            render_listing_card(
                                ui,
                                listing,
                                app,
                                &palette,
                                &mut edit_requested,
                                &mut toggle_requested,
                                &mut delete_requested,
                            );
                        }
                    });
                    ui.add_space(10.0);
                }
            }
            ViewMode::List => {
                for listing in &selected {
                    render_listing_card(
                        ui,
                        listing,
                        app,
                        &palette,
                        &mut edit_requested,
                        &mut toggle_requested,
                        &mut delete_requested,
                    );
                    ui.add_space(10.0);
                }
            }
        });

    if let Some(id) = edit_requested
        && let Some(listing) = app.catalog.get(id)
    {
        app.listing_form = Some(ListingForm::from_listing(listing));
    }
    if let Some(id) = toggle_requested {
        app.catalog.toggle_status(id);
    }
    if let Some(id) = delete_requested && !app.catalog.remove(id) {
        warn!(listing = %id, "delete requested for unknown listing");
    }

    // Modal add/edit form
    if let Some(mut form) = app.listing_form.take() {
        let landlord_id = mock::LANDLORD_ID;
        match listing_form::render_listing_form(ui.ctx(), &mut form, landlord_id, &app.i18n) {
            FormOutcome::Open => app.listing_form = Some(form),
            FormOutcome::Cancelled => {}
            FormOutcome::Submitted(listing) => {
                let result = if form.editing.is_some() {
                    app.catalog.update(listing)
                } else {
                    app.catalog.add(listing)
                };
                if let Err(e) = result {
                    form.error = Some(e.to_string());
                    app.listing_form = Some(form);
                }
            }
        }
    }
}

fn render_filter_bar(ui: &mut egui::Ui, app: &mut LandlordApp) {
    ui.horizontal_wrapped(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut app.filter.search)
                .hint_text(app.i18n.t("search_placeholder"))
                .desired_width(180.0),
        );

        let status_text = match app.filter.status {
            None => app.i18n.t("filter_all").to_string(),
            Some(status) => status_label(status, &app.i18n),
        };
        egui::ComboBox::from_id_salt("filter_status")
            .selected_text(status_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.filter.status, None, app.i18n.t("filter_all"));
                for status in [
                    ListingStatus::Active,
                    ListingStatus::Inactive,
                    ListingStatus::Pending,
                ] {
                    ui.selectable_value(
                        &mut app.filter.status,
                        Some(status),
                        status_label(status, &app.i18n),
                    );
                }
            });

        let university_text = app
            .filter
            .university
            .clone()
            .unwrap_or_else(|| app.i18n.t("filter_all").to_string());
        egui::ComboBox::from_id_salt("filter_university")
            .selected_text(university_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.filter.university, None, app.i18n.t("filter_all"));
                for university in mock::sample_universities() {
                    ui.selectable_value(
                        &mut app.filter.university,
                        Some(university.code.clone()),
                        university.code.clone(),
                    );
                }
            });

        let min_response = ui.add(
            egui::TextEdit::singleline(&mut app.price_min_input)
                .hint_text(app.i18n.t("filter_price_from"))
                .desired_width(100.0),
        );
        let max_response = ui.add(
            egui::TextEdit::singleline(&mut app.price_max_input)
                .hint_text(app.i18n.t("filter_price_to"))
                .desired_width(100.0),
        );
        if min_response.changed() {
            app.filter.min_price = Decimal::from_str(app.price_min_input.trim()).ok();
        }
        if max_response.changed() {
            app.filter.max_price = Decimal::from_str(app.price_max_input.trim()).ok();
        }

        ui.checkbox(
            &mut app.filter.only_available,
            app.i18n.t("filter_only_available"),
        );

        egui::ComboBox::from_id_salt("listing_sort")
            .selected_text(sort_label(app.sort, &app.i18n))
            .show_ui(ui, |ui| {
                for key in [
                    SortKey::Rating,
                    SortKey::PriceLow,
                    SortKey::PriceHigh,
                    SortKey::Distance,
                ] {
                    ui.selectable_value(&mut app.sort, key, sort_label(key, &app.i18n));
                }
            });
    });
}

#[allow(clippy::too_many_arguments)]
fn render_listing_card(
    ui: &mut egui::Ui,
    listing: &Listing,
    app: &LandlordApp,
    palette: &Palette,
    edit_requested: &mut Option<Uuid>,
    toggle_requested: &mut Option<Uuid>,
    delete_requested: &mut Option<Uuid>,
) {
    let language = app.language();
    DesignSystem::card_frame(app.settings.theme).show(ui, |ui| {
        ui.set_width(320.0);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(listing.title.get(language))
                        .strong()
                        .size(15.0)
                        .color(palette.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (color, label) = match listing.status {
                        ListingStatus::Active => (palette.success, app.i18n.t("status_active")),
                        ListingStatus::Inactive => (palette.text_muted, app.i18n.t("status_inactive")),
                        ListingStatus::Pending => (palette.warning, app.i18n.t("status_pending")),
                    };
                    ui.label(egui::RichText::new(format!("● {}", label)).size(10.0).color(color));
                    if listing.featured {
                        ui.label(egui::RichText::new("★").size(12.0).color(palette.warning));
                    }
                });
            });

            ui.label(
                egui::RichText::new(format!("📍 {}", listing.location.get(language)))
                    .size(11.0)
                    .color(palette.text_secondary),
            );
            ui.label(
                egui::RichText::new(format!(
                    "🎓 {} · {}",
                    listing.university,
                    app.i18n.tf(
                        "km_to_university",
                        &[("km", &listing.distance_from_university_km.to_string())],
                    )
                ))
                .size(11.0)
                .color(palette.text_secondary),
            );
            ui.label(
                egui::RichText::new(format!(
                    "{} · {}",
                    room_type_label(listing.room_type, &app.i18n),
                    gender_label(listing.gender, &app.i18n)
                ))
                .size(11.0)
                .color(palette.text_secondary),
            );

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}",
                        format_sum(listing.price),
                        app.i18n.t("per_month")
                    ))
                    .strong()
                    .color(palette.accent),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("⭐ {:.1} ({})", listing.rating, listing.review_count))
                            .size(11.0)
                            .color(palette.warning),
                    );
                });
            });
            ui.label(
                egui::RichText::new(app.i18n.tf(
                    "rooms_free",
                    &[("count", &listing.available_rooms.to_string())],
                ))
                .size(11.0)
                .color(if listing.available {
                    palette.success
                } else {
                    palette.danger
                }),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.small_button(format!("✏ {}", app.i18n.t("edit_listing"))).clicked() {
                    *edit_requested = Some(listing.id);
                }
                let toggle_label = match listing.status {
                    ListingStatus::Active => app.i18n.t("status_inactive"),
                    _ => app.i18n.t("status_active"),
                };
                if ui.small_button(format!("🔁 {}", toggle_label)).clicked() {
                    *toggle_requested = Some(listing.id);
                }
                if ui.small_button(format!("🗑 {}", app.i18n.t("delete_listing"))).clicked() {
                    *delete_requested = Some(listing.id);
                }
            });
        });
    });
}

pub fn status_label(status: ListingStatus, i18n: &I18nService) -> String {
    match status {
        ListingStatus::Active => i18n.t("status_active").to_string(),
        ListingStatus::Inactive => i18n.t("status_inactive").to_string(),
        ListingStatus::Pending => i18n.t("status_pending").to_string(),
    }
}

fn sort_label(sort: SortKey, i18n: &I18nService) -> String {
    match sort {
        SortKey::Rating => i18n.t("sort_rating").to_string(),
        SortKey::PriceLow => i18n.t("sort_price_low").to_string(),
        SortKey::PriceHigh => i18n.t("sort_price_high").to_string(),
        SortKey::Distance => i18n.t("sort_distance").to_string(),
    }
}
