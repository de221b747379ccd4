use crate::domain::errors::ValidationError;
use crate::domain::housing::listing::{
    GenderPolicy, Listing, ListingStatus, RoomType, validate_listing,
};
use crate::domain::locale::{Language, LocalizedText};
use crate::infrastructure::i18n::I18nService;
use crate::infrastructure::mock;
use chrono::Utc;
use eframe::egui;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

/// Add/edit listing form state. Text fields stay strings until submit.
pub struct ListingForm {
    pub editing: Option<Uuid>,
    pub title_uz: String,
    pub title_ru: String,
    pub description_uz: String,
    pub description_ru: String,
    pub price: String,
    pub location_uz: String,
    pub location_ru: String,
    pub address: String,
    pub university: String,
    pub distance_km: String,
    pub room_type: RoomType,
    pub gender: GenderPolicy,
    pub total_rooms: String,
    pub available_rooms: String,
    pub amenities_uz: String,
    pub amenities_ru: String,
    pub error: Option<String>,
}

impl ListingForm {
    pub fn empty() -> Self {
        Self {
            editing: None,
            title_uz: String::new(),
            title_ru: String::new(),
            description_uz: String::new(),
            description_ru: String::new(),
            price: String::new(),
            location_uz: String::new(),
            location_ru: String::new(),
            address: String::new(),
            university: mock::sample_universities()
                .first()
                .map(|u| u.code.clone())
                .unwrap_or_default(),
            distance_km: String::new(),
            room_type: RoomType::Shared,
            gender: GenderPolicy::Coed,
            total_rooms: String::new(),
            available_rooms: String::new(),
            amenities_uz: String::new(),
            amenities_ru: String::new(),
            error: None,
        }
    }

    pub fn from_listing(listing: &Listing) -> Self {
        let join = |items: &[LocalizedText], pick: fn(&LocalizedText) -> &str| {
            items.iter().map(pick).collect::<Vec<_>>().join(", ")
        };
        Self {
            editing: Some(listing.id),
            title_uz: listing.title.uz.clone(),
            title_ru: listing.title.ru.clone(),
            description_uz: listing.description.uz.clone(),
            description_ru: listing.description.ru.clone(),
            price: listing.price.to_string(),
            location_uz: listing.location.uz.clone(),
            location_ru: listing.location.ru.clone(),
            address: listing.address.clone(),
            university: listing.university.clone(),
            distance_km: listing.distance_from_university_km.to_string(),
            room_type: listing.room_type,
            gender: listing.gender,
            total_rooms: listing.total_rooms.to_string(),
            available_rooms: listing.available_rooms.to_string(),
            amenities_uz: join(&listing.amenities, |a| &a.uz),
            amenities_ru: join(&listing.amenities, |a| &a.ru),
            error: None,
        }
    }

    /// Parse and validate into a domain listing.
    pub fn to_listing(&self, landlord_id: Uuid) -> Result<Listing, ValidationError> {
        let price = Decimal::from_str(self.price.trim())
            .map_err(|_| ValidationError::MissingField { field: "price" })?;
        let total_rooms: u32 = self
            .total_rooms
            .trim()
            .parse()
            .map_err(|_| ValidationError::MissingField { field: "total_rooms" })?;
        let available_rooms: u32 = self
            .available_rooms
            .trim()
            .parse()
            .map_err(|_| ValidationError::MissingField { field: "available_rooms" })?;
        let distance = self.distance_km.trim().parse().unwrap_or(0.0);

        let split = |uz: &str, ru: &str| -> Vec<LocalizedText> {
            let uz_items: Vec<&str> = uz.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
            let ru_items: Vec<&str> = ru.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
            uz_items
                .iter()
                .enumerate()
                .map(|(i, item)| LocalizedText::new(*item, ru_items.get(i).copied().unwrap_or(item)))
                .collect()
        };

        let now = Utc::now();
        let listing = Listing {
            id: self.editing.unwrap_or_else(Uuid::new_v4),
            title: LocalizedText::new(self.title_uz.trim(), self.title_ru.trim()),
            description: LocalizedText::new(self.description_uz.trim(), self.description_ru.trim()),
            price,
            location: LocalizedText::new(self.location_uz.trim(), self.location_ru.trim()),
            address: self.address.trim().to_string(),
            university: self.university.clone(),
            distance_from_university_km: distance,
            images: Vec::new(),
            amenities: split(&self.amenities_uz, &self.amenities_ru),
            rating: 0.0,
            review_count: 0,
            room_type: self.room_type,
            gender: self.gender,
            available: available_rooms > 0,
            total_rooms,
            available_rooms,
            landlord_id,
            rules: Vec::new(),
            created_at: now,
            updated_at: now,
            status: ListingStatus::Active,
            featured: false,
        };
        validate_listing(&listing)?;
        Ok(listing)
    }
}

pub enum FormOutcome {
    Open,
    Submitted(Listing),
    Cancelled,
}

pub fn render_listing_form(
    ctx: &egui::Context,
    form: &mut ListingForm,
    landlord_id: Uuid,
    i18n: &I18nService,
) -> FormOutcome {
    let mut outcome = FormOutcome::Open;

    let title = if form.editing.is_some() {
        i18n.t("edit_listing")
    } else {
        i18n.t("add_listing")
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(480.0).show(ui, |ui| {
                egui::Grid::new("listing_form_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(format!("{} (uz)", i18n.t("listing_title")));
                        ui.text_edit_singleline(&mut form.title_uz);
                        ui.end_row();

                        ui.label(format!("{} (ru)", i18n.t("listing_title")));
                        ui.text_edit_singleline(&mut form.title_ru);
                        ui.end_row();

                        ui.label(format!("{} (uz)", i18n.t("listing_description")));
                        ui.text_edit_multiline(&mut form.description_uz);
                        ui.end_row();

                        ui.label(format!("{} (ru)", i18n.t("listing_description")));
                        ui.text_edit_multiline(&mut form.description_ru);
                        ui.end_row();

                        ui.label(i18n.t("listing_price"));
                        ui.text_edit_singleline(&mut form.price);
                        ui.end_row();

                        ui.label(format!("{} (uz)", i18n.t("listing_location")));
                        ui.text_edit_singleline(&mut form.location_uz);
                        ui.end_row();

                        ui.label(format!("{} (ru)", i18n.t("listing_location")));
                        ui.text_edit_singleline(&mut form.location_ru);
                        ui.end_row();

                        ui.label(i18n.t("listing_university"));
                        egui::ComboBox::from_id_salt("form_university")
                            .selected_text(form.university.clone())
                            .show_ui(ui, |ui| {
                                let language = Language::from_code(i18n.current_language_code())
                                    .unwrap_or_default();
                                for university in mock::sample_universities() {
                                    ui.selectable_value(
                                        &mut form.university,
                                        university.code.clone(),
                                        format!(
                                            "{} ({})",
                                            university.code,
                                            university.name.get(language)
                                        ),
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label(i18n.t("listing_distance"));
                        ui.text_edit_singleline(&mut form.distance_km);
                        ui.end_row();

                        ui.label(i18n.t("listing_room_type"));
                        egui::ComboBox::from_id_salt("form_room_type")
                            .selected_text(room_type_label(form.room_type, i18n))
                            .show_ui(ui, |ui| {
                                for rt in [RoomType::Single, RoomType::Shared, RoomType::Family] {
                                    ui.selectable_value(
                                        &mut form.room_type,
                                        rt,
                                        room_type_label(rt, i18n),
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label(i18n.t("listing_gender"));
                        egui::ComboBox::from_id_salt("form_gender")
                            .selected_text(gender_label(form.gender, i18n))
                            .show_ui(ui, |ui| {
                                for g in
                                    [GenderPolicy::Male, GenderPolicy::Female, GenderPolicy::Coed]
                                {
                                    ui.selectable_value(&mut form.gender, g, gender_label(g, i18n));
                                }
                            });
                        ui.end_row();

                        ui.label(i18n.t("listing_total_rooms"));
                        ui.text_edit_singleline(&mut form.total_rooms);
                        ui.end_row();

                        ui.label(i18n.t("listing_available_rooms"));
                        ui.text_edit_singleline(&mut form.available_rooms);
                        ui.end_row();

                        ui.label(format!("{} (uz)", i18n.t("listing_amenities")));
                        ui.text_edit_singleline(&mut form.amenities_uz);
                        ui.end_row();

                        ui.label(format!("{} (ru)", i18n.t("listing_amenities")));
                        ui.text_edit_singleline(&mut form.amenities_ru);
                        ui.end_row();
                    });
            });

            if let Some(error) = &form.error {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::from_rgb(248, 81, 73), error);
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button(i18n.t("save")).clicked() {
                    match form.to_listing(landlord_id) {
                        Ok(listing) => outcome = FormOutcome::Submitted(listing),
                        Err(e) => form.error = Some(e.to_string()),
                    }
                }
                if ui.button(i18n.t("cancel")).clicked() {
                    outcome = FormOutcome::Cancelled;
                }
            });
        });

    outcome
}

pub fn room_type_label(room_type: RoomType, i18n: &I18nService) -> String {
    match room_type {
        RoomType::Single => i18n.t("room_single").to_string(),
        RoomType::Shared => i18n.t("room_shared").to_string(),
        RoomType::Family => i18n.t("room_family").to_string(),
    }
}

pub fn gender_label(gender: GenderPolicy, i18n: &I18nService) -> String {
    match gender {
        GenderPolicy::Male => i18n.t("gender_male").to_string(),
        GenderPolicy::Female => i18n.t("gender_female").to_string(),
        GenderPolicy::Coed => i18n.t("gender_coed").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock;

    #[test]
    fn round_trips_a_seed_listing() {
        let original = &mock::sample_listings()[0];
        let form = ListingForm::from_listing(original);
        let rebuilt = form.to_listing(original.landlord_id).unwrap();

        assert_eq!(rebuilt.id, original.id);
        assert_eq!(rebuilt.title.uz, original.title.uz);
        assert_eq!(rebuilt.price, original.price);
        assert_eq!(rebuilt.total_rooms, original.total_rooms);
        assert_eq!(rebuilt.amenities.len(), original.amenities.len());
    }

    #[test]
    fn rejects_unparsable_price() {
        let mut form = ListingForm::from_listing(&mock::sample_listings()[0]);
        form.price = "arzon".to_string();
        assert!(form.to_listing(Uuid::new_v4()).is_err());
    }

    #[test]
    fn new_listing_gets_fresh_id_and_active_status() {
        let mut form = ListingForm::empty();
        form.title_uz = "Yangi yotoqxona".to_string();
        form.price = "1000000".to_string();
        form.total_rooms = "3".to_string();
        form.available_rooms = "2".to_string();
        let listing = form.to_listing(Uuid::new_v4()).unwrap();
        assert_eq!(listing.status, ListingStatus::Active);
        assert!(listing.available);
    }
}
