use eframe::egui;

use crate::{
    core::{
        input::{
            NameInput,
            QUICK_EXAMPLES,
        },
        ExampleEntry,
    },
    gui::theme::Theme,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Submit,
    Clear,
}

pub struct NameInputPanel;

impl NameInputPanel {
    pub fn show(
        ui: &mut egui::Ui,
        theme: &Theme,
        input: &mut NameInput,
        busy: bool,
        suggestion: Option<&ExampleEntry>,
    ) -> Option<InputAction> {
        let ctx = ui.ctx().clone();
        let mut action = None;

        ui.label(theme.heading(&ctx, "Enter name to analyse"));
        ui.add_space(4.0);

        let response = ui.add_enabled(
            !busy,
            egui::TextEdit::singleline(input.text_mut())
                .hint_text("e.g., 张伟, Nguyễn Văn An, Smith")
                .font(egui::TextStyle::Heading)
                .desired_width(f32::INFINITY),
        );

        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter_pressed && input.can_submit(busy) {
            action = Some(InputAction::Submit);
        }

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let label = if busy { "Analysing..." } else { "Analyse Name" };
            if ui.add_enabled(input.can_submit(busy), egui::Button::new(label)).clicked() {
                action = Some(InputAction::Submit);
            }
            if ui.add_enabled(!busy, egui::Button::new("Clear")).clicked() {
                action = Some(InputAction::Clear);
            }
        });

        ui.add_space(12.0);
        ui.label(theme.caption(&ctx, "Example names to try:"));
        ui.horizontal_wrapped(|ui| {
            for example in QUICK_EXAMPLES {
                if ui.add_enabled(!busy, egui::Button::new(example).small()).clicked() {
                    input.pick_example(example);
                }
            }
        });

        if let Some(entry) = suggestion {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(theme.caption(&ctx, "Try:"));
                let link = ui
                    .add_enabled(!busy, egui::Link::new(entry.display_name()))
                    .on_hover_text(format!("{} · {}", entry.culture, entry.note));
                if link.clicked() {
                    input.pick_example(&entry.name);
                }
            });
        }

        action
    }
}
