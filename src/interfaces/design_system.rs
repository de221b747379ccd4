use crate::infrastructure::settings_persistence::Theme;
use eframe::egui;

/// Resolved colors for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_window: egui::Color32,
    pub bg_card: egui::Color32,
    pub bg_card_hover: egui::Color32,
    pub bg_input: egui::Color32,
    pub accent: egui::Color32,
    pub accent_soft: egui::Color32,
    pub success: egui::Color32,
    pub danger: egui::Color32,
    pub warning: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,
    pub text_muted: egui::Color32,
    pub border: egui::Color32,
}

pub struct DesignSystem;

impl DesignSystem {
    // --- Metrics ---

    pub const ROUNDING_SMALL: f32 = 4.0;
    pub const ROUNDING_MEDIUM: f32 = 8.0;
    pub const ROUNDING_LARGE: f32 = 12.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    pub fn palette(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette {
                bg_window: egui::Color32::from_rgb(10, 12, 16),
                bg_card: egui::Color32::from_rgb(22, 27, 34),
                bg_card_hover: egui::Color32::from_rgb(28, 33, 40),
                bg_input: egui::Color32::from_rgb(15, 18, 24),
                accent: egui::Color32::from_rgb(37, 99, 235),
                accent_soft: egui::Color32::from_rgb(66, 135, 245),
                success: egui::Color32::from_rgb(0, 200, 118),
                danger: egui::Color32::from_rgb(248, 81, 73),
                warning: egui::Color32::from_rgb(255, 145, 0),
                text_primary: egui::Color32::from_rgb(240, 246, 252),
                text_secondary: egui::Color32::from_gray(160),
                text_muted: egui::Color32::from_gray(100),
                border: egui::Color32::from_rgb(48, 54, 61),
            },
            Theme::Light => Palette {
                bg_window: egui::Color32::from_rgb(245, 246, 250),
                bg_card: egui::Color32::WHITE,
                bg_card_hover: egui::Color32::from_rgb(236, 239, 244),
                bg_input: egui::Color32::from_rgb(240, 242, 246),
                accent: egui::Color32::from_rgb(37, 99, 235),
                accent_soft: egui::Color32::from_rgb(96, 145, 240),
                success: egui::Color32::from_rgb(22, 163, 74),
                danger: egui::Color32::from_rgb(220, 38, 38),
                warning: egui::Color32::from_rgb(217, 119, 6),
                text_primary: egui::Color32::from_rgb(17, 24, 39),
                text_secondary: egui::Color32::from_gray(90),
                text_muted: egui::Color32::from_gray(140),
                border: egui::Color32::from_rgb(209, 213, 219),
            },
        }
    }

    /// Visual style for the whole application.
    pub fn theme(theme: Theme) -> egui::Visuals {
        let palette = Self::palette(theme);
        let mut visuals = match theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };

        visuals.window_fill = palette.bg_window;
        visuals.panel_fill = palette.bg_window;
        visuals.extreme_bg_color = palette.bg_input;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.border);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, palette.text_primary);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, palette.text_secondary);
        visuals.widgets.inactive.weak_bg_fill = palette.bg_card;
        visuals.widgets.inactive.bg_fill = palette.bg_card;

        visuals.widgets.hovered.bg_fill = palette.bg_card_hover;
        visuals.widgets.active.bg_fill = palette.accent_soft;

        visuals.selection.bg_fill = palette.accent.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, palette.accent);

        visuals
    }

    /// Standard card styling
    pub fn card_frame(theme: Theme) -> egui::Frame {
        let palette = Self::palette(theme);
        egui::Frame::NONE
            .fill(palette.bg_card)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, palette.border))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Application main layout frame
    pub fn main_frame(theme: Theme) -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::palette(theme).bg_window)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
