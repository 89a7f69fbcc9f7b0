//! Idea input form

use eframe::egui::{self, RichText, Vec2};

use crate::app::PromptLabApp;

/// Render the heading, the input box and the Generate button
pub fn render_generate_panel(app: &mut PromptLabApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Perfect Your Sound.")
                .color(theme.text_primary)
                .size(30.0)
                .strong(),
        );
        ui.label(
            RichText::new("Describe an idea and get a Suno v5 style prompt with structured lyrics.")
                .color(theme.text_muted),
        );
    });
    ui.add_space(16.0);

    let is_generating = app.controller.is_generating();
    let mut submitted = false;

    egui::Frame::new()
        .fill(theme.bg_darkest)
        .corner_radius(12.0)
        .inner_margin(12.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let button_width = 120.0;
                let input = ui.add(
                    egui::TextEdit::singleline(&mut app.controller.input)
                        .hint_text("e.g. an emotional song with a 90s Korean city pop feel")
                        .desired_width(ui.available_width() - button_width - 8.0)
                        .font(egui::TextStyle::Heading),
                );
                if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }

                let can_submit = !is_generating && !app.controller.input.trim().is_empty();
                let button = if is_generating {
                    egui::Button::new(RichText::new("Generating...").color(theme.text_secondary))
                } else {
                    egui::Button::new(
                        RichText::new("Generate")
                            .color(theme.text_primary)
                            .strong(),
                    )
                    .fill(theme.accent_muted)
                };

                if ui
                    .add_enabled(
                        can_submit,
                        button.min_size(Vec2::new(button_width, 36.0)).corner_radius(8.0),
                    )
                    .clicked()
                {
                    submitted = true;
                }
                if is_generating {
                    ui.spinner();
                }
            });
        });

    if submitted {
        app.submit();
    }

    if let Some(error) = app.controller.error() {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(error).color(theme.error).size(13.0));
        });
    }
}
