use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::{
        config::CatalogueView,
        Catalogue,
    },
    gui::theme::Theme,
};

/// Browsable table of every example name.
pub struct CatalogueModal {
    open: bool,
    view: CatalogueView,
}

impl CatalogueModal {
    pub fn new() -> Self {
        Self { open: false, view: CatalogueView::Full }
    }

    pub fn open_modal(&mut self, view: CatalogueView) {
        self.view = view;
        self.open = true;
    }

    /// Returns the example the user chose to try.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
        catalogue: &Catalogue,
        busy: bool,
    ) -> Option<String> {
        if !self.open {
            return None;
        }

        let mut picked: Option<String> = None;

        let modal = egui::Modal::new(egui::Id::new("catalogue_modal")).show(ctx, |ui| {
            ui.set_width(640.0);
            ui.heading("Example names");
            ui.horizontal(|ui| {
                ui.radio_value(&mut self.view, CatalogueView::Full, "All");
                ui.radio_value(&mut self.view, CatalogueView::Featured, "Featured");
            });
            ui.add_space(6.0);

            let entries: Vec<_> = match self.view {
                CatalogueView::Full => catalogue.entries().iter().collect(),
                CatalogueView::Featured => catalogue.featured().collect(),
            };

            if entries.is_empty() {
                ui.label(theme.caption(ctx, "No examples available."));
            } else {
                let row_height = egui::TextStyle::Body
                    .resolve(ui.style())
                    .size
                    .max(ui.spacing().interact_size.y);

                TableBuilder::new(ui)
                    .striped(true)
                    .max_scroll_height(360.0)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::auto().at_least(140.0))
                    .column(Column::auto().at_least(140.0))
                    .column(Column::auto().at_least(90.0))
                    .column(Column::remainder())
                    .header(24.0, |mut header| {
                        header.col(|ui| {
                            ui.label(theme.heading(ctx, "Name"));
                        });
                        header.col(|ui| {
                            ui.label(theme.heading(ctx, "English"));
                        });
                        header.col(|ui| {
                            ui.label(theme.heading(ctx, "Culture"));
                        });
                        header.col(|ui| {
                            ui.label(theme.heading(ctx, ""));
                        });
                    })
                    .body(|body| {
                        body.rows(row_height, entries.len(), |mut row| {
                            let entry = entries[row.index()];
                            row.col(|ui| {
                                ui.label(&entry.name).on_hover_text(&entry.note);
                            });
                            row.col(|ui| {
                                ui.label(entry.english_name.as_deref().unwrap_or("—"));
                            });
                            row.col(|ui| {
                                ui.label(&entry.culture);
                            });
                            row.col(|ui| {
                                if ui.add_enabled(!busy, egui::Button::new("Use")).clicked() {
                                    picked = Some(entry.name.clone());
                                }
                                ui.hyperlink_to("Wikipedia", &entry.wikipedia);
                            });
                        });
                    });
            }

            ui.add_space(10.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    ui.close();
                }
            });
        });

        if picked.is_some() || modal.should_close() {
            self.open = false;
        }

        picked
    }
}

impl Default for CatalogueModal {
    fn default() -> Self {
        Self::new()
    }
}
