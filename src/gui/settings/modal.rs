use eframe::egui;

use crate::core::{
    config::{
        CatalogueView,
        Endpoints,
        DEFAULT_API_BASE,
    },
    rotation::{
        RotationMode,
        MAX_ROTATION_SECONDS,
        MIN_ROTATION_SECONDS,
    },
    Settings,
};

pub struct SettingsModal {
    open: bool,
    draft: Settings,
    original: Settings,
    interval_seconds: u64,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            draft: Settings::default(),
            original: Settings::default(),
            interval_seconds: 4,
        }
    }

    pub fn open_settings(&mut self, current: Settings) {
        self.interval_seconds = match current.rotation {
            RotationMode::Interval { seconds } => seconds,
            _ => 4,
        };
        self.draft = current.clone();
        self.original = current;
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<Settings> {
        if !self.open {
            return None;
        }

        let mut result: Option<Settings> = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(440.0);
            ui.heading("Settings");
            ui.add_space(10.0);

            let endpoint_error = self.ui_service(ui);
            ui.add_space(10.0);
            self.ui_display(ui);
            ui.add_space(10.0);
            self.ui_examples(ui);
            ui.add_space(10.0);

            ui.separator();

            let is_dirty = self.is_dirty();
            ui.horizontal(|ui| {
                if is_dirty {
                    ui.colored_label(egui::Color32::YELLOW, "⚠");
                    ui.label("Settings have been modified");
                } else {
                    ui.label("");
                }
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let can_save = is_dirty && endpoint_error.is_none();
                let save_clicked =
                    ui.add_enabled(can_save, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    self.original = self.draft.clone();
                    result = Some(self.draft.clone());
                    ui.close();
                } else if cancel_clicked {
                    self.draft = self.original.clone();
                    ui.close();
                } else if reset_clicked {
                    self.draft = Settings::default();
                    self.interval_seconds = 4;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }

    fn ui_service(&mut self, ui: &mut egui::Ui) -> Option<String> {
        ui.label(egui::RichText::new("Analysis service").strong());
        ui.horizontal(|ui| {
            ui.label("API address:");
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.api_base)
                    .hint_text(DEFAULT_API_BASE)
                    .desired_width(280.0),
            );
        });

        match Endpoints::resolve(&self.draft.api_base) {
            Ok(endpoints) => {
                ui.small(format!("Requests go to {}", endpoints.analyse));
                None
            }
            Err(e) => {
                let message = e.to_string();
                ui.colored_label(egui::Color32::RED, format!("⚠ {}", message));
                Some(message)
            }
        }
    }

    fn ui_display(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Display").strong());
        ui.checkbox(&mut self.draft.show_confidence, "Show language detection confidence");
        ui.checkbox(&mut self.draft.dark_mode, "Dark mode");
    }

    fn ui_examples(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Example names").strong());

        ui.horizontal(|ui| {
            ui.label("Rotate suggestion:");
            egui::ComboBox::from_id_salt("rotation_mode")
                .selected_text(self.draft.rotation.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.draft.rotation, RotationMode::Off, "Off");
                    ui.selectable_value(
                        &mut self.draft.rotation,
                        RotationMode::Interval { seconds: self.interval_seconds },
                        "On a timer",
                    );
                    ui.selectable_value(
                        &mut self.draft.rotation,
                        RotationMode::PerAnalysis,
                        "After each analysis",
                    );
                });
        });

        if let RotationMode::Interval { seconds } = &mut self.draft.rotation {
            ui.horizontal(|ui| {
                ui.label("Every");
                ui.add(
                    egui::DragValue::new(seconds)
                        .range(MIN_ROTATION_SECONDS..=MAX_ROTATION_SECONDS)
                        .suffix(" s"),
                );
            });
            self.interval_seconds = *seconds;
        }

        ui.horizontal(|ui| {
            ui.label("Suggest from:");
            ui.radio_value(&mut self.draft.catalogue_view, CatalogueView::Full, "All examples");
            ui.radio_value(
                &mut self.draft.catalogue_view,
                CatalogueView::Featured,
                "Featured only",
            );
        });
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
