use crate::interfaces::design_system::Palette;
use eframe::egui;

/// Helper function to render a stat card
pub fn render_metric_card(
    ui: &mut egui::Ui,
    palette: &Palette,
    icon: &str,
    title: &str,
    value: &str,
    subtitle: Option<&str>,
    accent_color: egui::Color32,
) {
    let card_size = egui::vec2(190.0, 100.0);

    ui.allocate_ui_with_layout(card_size, egui::Layout::top_down(egui::Align::LEFT), |ui| {
        egui::Frame::NONE
            .fill(palette.bg_card)
            .inner_margin(egui::Margin::same(12))
            .corner_radius(8)
            .stroke(egui::Stroke::new(1.0, palette.border))
            .show(ui, |ui| {
                ui.set_width(166.0);
                ui.set_height(76.0);

                // Row 1: Title (Left) + Icon (Right)
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(title.to_uppercase())
                            .size(10.0)
                            .color(palette.text_muted)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(icon)
                                .size(14.0)
                                .color(accent_color.linear_multiply(0.8)),
                        );
                    });
                });

                ui.add_space(6.0);

                // Row 2: Value
                ui.label(
                    egui::RichText::new(value)
                        .size(22.0)
                        .strong()
                        .color(palette.text_primary),
                );

                // Row 3: Subtitle
                if let Some(sub) = subtitle {
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(sub)
                            .size(10.0)
                            .color(palette.text_secondary),
                    );
                }
            });
    });
}

pub fn render_mini_metric(ui: &mut egui::Ui, label: &str, value: &str, color: egui::Color32) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label.to_uppercase())
                .size(9.0)
                .color(egui::Color32::from_gray(120)),
        );
        ui.label(egui::RichText::new(value).size(16.0).strong().color(color));
    });
}
