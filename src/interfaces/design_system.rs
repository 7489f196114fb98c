use eframe::egui;

/// Dark theme palette and spacing shared by all panels
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(12, 16, 14);
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(16, 21, 18);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(24, 31, 27);
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(31, 40, 35);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(18, 24, 21);

    // Accents (NG green)
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(0, 135, 81); // #008751
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(52, 176, 120);

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 230, 118);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 82, 82);
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 171, 64);
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(79, 195, 247);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(236, 242, 238);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(165);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(110);

    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(44, 56, 49);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: u8 = 8;
    pub const ROUNDING_PILL: u8 = 12;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.4);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_SECONDARY);

        visuals
    }

    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Tinted banner used for insights and error messages.
    pub fn banner_frame(color: egui::Color32) -> egui::Frame {
        egui::Frame::NONE
            .fill(color.linear_multiply(0.12))
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.5)))
            .inner_margin(egui::Margin::symmetric(12, 8))
    }

    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
