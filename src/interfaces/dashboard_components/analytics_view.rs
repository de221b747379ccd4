use crate::application::analytics::{AnalyticsReport, Trend, format_sum};
use crate::interfaces::dashboard_components::metrics_card::render_mini_metric;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::ui::LandlordApp;
use eframe::egui;

pub fn render_analytics_view(ui: &mut egui::Ui, app: &mut LandlordApp) {
    let palette = DesignSystem::palette(app.settings.theme);
    let language = app.language();
    let report = AnalyticsReport::build(&app.catalog, &app.inbox, language);

    ui.vertical(|ui| {
        ui.add_space(10.0);
        ui.heading(
            egui::RichText::new(format!("📊 {}", app.i18n.t("nav_analytics")))
                .size(24.0)
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(20.0);

        egui::ScrollArea::vertical()
            .id_salt("analytics_scroll")
            .show(ui, |ui| {
                // KPI row
                ui.columns(4, |cols| {
                    for (col, kpi) in cols.iter_mut().zip(&report.kpis) {
                        let trend_color = match kpi.trend {
                            Trend::Up => palette.success,
                            Trend::Down => palette.danger,
                        };
                        render_mini_metric(col, kpi.title.get(language), &kpi.value, palette.text_primary);
                        col.label(
                            egui::RichText::new(&kpi.change).size(10.0).color(trend_color),
                        );
                    }
                });

                ui.add_space(30.0);

                // Revenue chart
                ui.label(
                    egui::RichText::new(app.i18n.t("analytics_revenue"))
                        .size(18.0)
                        .strong(),
                );
                ui.add_space(10.0);
                let revenue_line = egui_plot::Line::new(
                    app.i18n.t("stat_monthly_revenue").to_string(),
                    egui_plot::PlotPoints::from(report.revenue_points()),
                )
                .color(palette.accent)
                .width(2.0);
                egui_plot::Plot::new("revenue_plot")
                    .height(220.0)
                    .show_axes([true, true])
                    .show_grid([true, true])
                    .show(ui, |plot_ui| {
                        plot_ui.line(revenue_line);
                    });

                ui.add_space(30.0);

                // Applications chart
                ui.label(
                    egui::RichText::new(app.i18n.t("analytics_applications"))
                        .size(18.0)
                        .strong(),
                );
                ui.add_space(10.0);
                let applications_line = egui_plot::Line::new(
                    app.i18n.t("nav_applications").to_string(),
                    egui_plot::PlotPoints::from(report.application_points()),
                )
                .color(palette.success)
                .width(2.0);
                egui_plot::Plot::new("applications_plot")
                    .height(220.0)
                    .show_axes([true, true])
                    .show_grid([true, true])
                    .show(ui, |plot_ui| {
                        plot_ui.line(applications_line);
                    });

                ui.add_space(30.0);

                // Popular listings
                ui.label(
                    egui::RichText::new(app.i18n.t("analytics_popular"))
                        .size(18.0)
                        .strong(),
                );
                ui.add_space(10.0);
                if report.popular.is_empty() {
                    ui.label(
                        egui::RichText::new(app.i18n.t("no_results"))
                            .italics()
                            .color(palette.text_muted),
                    );
                } else {
                    egui::Grid::new("popular_grid")
                        .striped(true)
                        .spacing([20.0, 10.0])
                        .show(ui, |ui| {
                            ui.strong(app.i18n.t("listing_title"));
                            ui.strong(app.i18n.t("views"));
                            ui.strong(app.i18n.t("applications"));
                            ui.end_row();

                            for popular in &report.popular {
                                ui.label(&popular.title);
                                ui.label(popular.views.to_string());
                                ui.label(popular.applications.to_string());
                                ui.end_row();
                            }
                        });
                }

                ui.add_space(20.0);
                ui.label(
                    egui::RichText::new(format!(
                        "{}: {} so'm",
                        app.i18n.t("stat_monthly_revenue"),
                        format_sum(report.stats.monthly_revenue)
                    ))
                    .size(12.0)
                    .color(palette.text_secondary),
                );
            });
    });
}
