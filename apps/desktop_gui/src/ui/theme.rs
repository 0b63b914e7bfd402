use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(88, 101, 242);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(148, 155, 164);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(237, 66, 69);
pub const TAG_FILL: egui::Color32 = egui::Color32::from_rgb(43, 45, 49);
pub const SIDEBAR_FILL: egui::Color32 = egui::Color32::from_rgb(30, 31, 34);
pub const CONTENT_FILL: egui::Color32 = egui::Color32::from_rgb(49, 51, 56);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(56, 58, 64);

pub const SIDEBAR_WIDTH: f32 = 320.0;
pub const AVATAR_SIZE: f32 = 112.0;
pub const CARD_MIN_WIDTH: f32 = 300.0;

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.hyperlink_color = ACCENT;
    visuals.panel_fill = CONTENT_FILL;
    visuals.selection.bg_fill = ACCENT;
    visuals
}

/// Installs the visuals on first use.
pub fn apply_if_needed(ctx: &egui::Context, applied: &mut bool) {
    if *applied {
        return;
    }
    ctx.set_visuals(visuals());
    *applied = true;
}
