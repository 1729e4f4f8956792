use eframe::egui;

use crate::gui::theme::{
    blend_colors,
    Theme,
};

/// Inline error text, announced assertively to screen readers.
pub fn error_banner(ui: &mut egui::Ui, theme: &Theme, message: &str) {
    let ctx = ui.ctx().clone();
    let color = theme.error(&ctx);
    let fill = blend_colors(ui.visuals().panel_fill, color, 0.12);

    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let response = ui.label(egui::RichText::new(format!("⚠ {}", message)).color(color));
            ctx.accesskit_node_builder(response.id, |node| {
                node.set_live(egui::accesskit::Live::Assertive);
            });
        });
}
