use eframe::egui::{
    self,
    RichText,
};

use crate::{
    core::view::{
        Notes,
        ResultView,
    },
    gui::theme::{
        Theme,
        Tint,
    },
};

fn section(ui: &mut egui::Ui, theme: &Theme, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    let ctx = ui.ctx().clone();
    ui.label(theme.caption(&ctx, title));
    ui.add_space(2.0);
    add_contents(ui);
    ui.add_space(6.0);
    ui.separator();
    ui.add_space(6.0);
}

fn tinted(ui: &mut egui::Ui, theme: &Theme, tint: Tint, add_contents: impl FnOnce(&mut egui::Ui)) {
    let fill = theme.panel(ui.ctx(), tint);
    egui::Frame::new()
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

pub fn results_panel(ui: &mut egui::Ui, theme: &Theme, view: &ResultView) {
    let ctx = ui.ctx().clone();

    egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(16)).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(theme.heading(&ctx, "Analysis Results").size(20.0));
        ui.add_space(10.0);

        section(ui, theme, "Original Name", |ui| {
            ui.label(RichText::new(&view.name).size(28.0));
        });

        section(ui, theme, "Detected Language", |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&view.language).size(18.0));
                if let Some(percent) = view.confidence_percent {
                    ui.label(theme.caption(&ctx, &format!("{}% confidence", percent)));
                }
            });
            if let Some(order) = &view.name_order {
                ui.label(theme.caption(&ctx, order.label()));
            }
        });

        section(ui, theme, "IPA Pronunciation", |ui| {
            tinted(ui, theme, Tint::Neutral, |ui| {
                ui.label(RichText::new(&view.ipa).monospace().size(22.0));
            });
            ui.label(theme.caption(&ctx, "International Phonetic Alphabet notation"));
            if let Some(system) = &view.romanization_system {
                ui.label(theme.caption(&ctx, &format!("Romanisation: {}", system)));
            }
            if view.tone_marks_added {
                ui.label(theme.caption(&ctx, "Tone marks added"));
            }
        });

        if let Some(respelling) = &view.respelling {
            section(ui, theme, "Macquarie Dictionary Pronunciation", |ui| {
                tinted(ui, theme, Tint::Blue, |ui| {
                    ui.label(RichText::new(respelling).size(22.0));
                });
                ui.label(theme.caption(&ctx, "Australian English phonetic respelling"));
            });
        }

        if let Some(guidance) = &view.guidance {
            section(ui, theme, "Pronunciation Guidance", |ui| {
                tinted(ui, theme, Tint::Green, |ui| {
                    ui.label(guidance);
                });
            });
        }

        if let Some(ambiguity) = &view.ambiguity {
            section(ui, theme, "Alternative Readings", |ui| {
                ui.label(ambiguity);
            });
        }

        if let Some(context) = &view.cultural_context {
            section(ui, theme, "Cultural Context", |ui| {
                tinted(ui, theme, Tint::Purple, |ui| {
                    ui.label(context);
                });
            });
        }

        match &view.notes {
            Some(Notes::Catalogue { culture, note, wikipedia }) => {
                ui.label(theme.caption(&ctx, &format!("Notes · {}", culture)));
                tinted(ui, theme, Tint::Purple, |ui| {
                    ui.label(note);
                    ui.hyperlink_to("Read more on Wikipedia", wikipedia);
                });
            }
            Some(Notes::Reported(notes)) => {
                ui.label(theme.caption(&ctx, "Notes"));
                tinted(ui, theme, Tint::Purple, |ui| {
                    ui.label(notes);
                });
            }
            None => {}
        }
    });
}
