//! Recent generations list

use eframe::egui::{self, RichText, Sense};

use crate::app::PromptLabApp;

/// Render the history list with load and clear actions
pub fn render_history_panel(app: &mut PromptLabApp, ui: &mut egui::Ui) {
    if app.controller.history().is_empty() {
        return;
    }

    let theme = app.ui.current_theme.clone();
    let mut load_id: Option<String> = None;
    let mut clear = false;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Recent experiments")
                .color(theme.text_secondary)
                .strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(RichText::new("Clear all").color(theme.text_muted).size(12.0))
                .clicked()
            {
                clear = true;
            }
        });
    });
    ui.add_space(8.0);

    for item in app.controller.history().items() {
        let response = egui::Frame::new()
            .fill(theme.bg_medium.gamma_multiply(0.6))
            .corner_radius(8.0)
            .inner_margin(12.0)
            .stroke(egui::Stroke::new(1.0, theme.border))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&item.result.title).color(theme.text_primary));
                        ui.add(
                            egui::Label::new(
                                RichText::new(&item.result.style)
                                    .color(theme.text_muted)
                                    .size(11.0),
                            )
                            .truncate(),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(item.time_display())
                                .color(theme.text_muted)
                                .size(11.0),
                        );
                    });
                });
            })
            .response
            .interact(Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            load_id = Some(item.id.clone());
        }
        ui.add_space(6.0);
    }

    if let Some(id) = load_id {
        if app.controller.load_history_item(&id) {
            app.status_message = "Loaded from history".to_string();
        }
    }

    if clear {
        let events = app.controller.clear_history();
        app.handle_events(events);
    }
}
