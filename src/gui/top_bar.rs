use eframe::egui::{
    self,
    containers,
};

use crate::gui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    OpenSettings,
    OpenCatalogue,
    CheckService,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        service_healthy: Option<bool>,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Example Names").clicked() {
                        action = Some(TopBarAction::OpenCatalogue);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Settings…").clicked() {
                        action = Some(TopBarAction::OpenSettings);
                    }
                    if ui.button("Check Service Now").clicked() {
                        action = Some(TopBarAction::CheckService);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, theme, service_healthy);
                });
            });
        });

        action
    }

    fn show_status_indicator(ui: &mut egui::Ui, theme: &Theme, service_healthy: Option<bool>) {
        let (color, tooltip) = match service_healthy {
            Some(true) => (theme.success(ui.ctx()), "Analysis service reachable"),
            Some(false) => (theme.error(ui.ctx()), "Analysis service unreachable"),
            None => (theme.muted(ui.ctx()), "Checking analysis service…"),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Service").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
