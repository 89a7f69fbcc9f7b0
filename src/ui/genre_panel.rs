//! Genre tabs and clickable example prompts

use eframe::egui::{self, Color32, CornerRadius, RichText, Vec2};

use crate::app::PromptLabApp;
use crate::catalog;

/// Render the genre tab row and the selected genre's examples
pub fn render_genre_panel(app: &mut PromptLabApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();
    let selected = app.controller.selected_genre();
    let is_generating = app.controller.is_generating();

    ui.horizontal_wrapped(|ui| {
        for genre in catalog::all() {
            let is_active = genre.id == selected.id;
            let (bg, text_color) = if is_active {
                let [r, g, b] = genre.color;
                (theme.bg_medium, Color32::from_rgb(r, g, b))
            } else {
                (Color32::TRANSPARENT, theme.text_secondary)
            };

            let button = egui::Button::new(
                RichText::new(format!("{} {}", genre.icon, genre.name)).color(text_color),
            )
            .fill(bg)
            .corner_radius(CornerRadius {
                nw: 6,
                ne: 6,
                sw: 0,
                se: 0,
            })
            .min_size(Vec2::new(96.0, 32.0));

            if ui.add(button).clicked() && !is_active {
                app.controller.select_genre(genre.id);
            }
        }
    });

    let mut clicked: Option<&'static str> = None;
    egui::Frame::new()
        .fill(theme.bg_medium)
        .corner_radius(CornerRadius {
            nw: 0,
            ne: 8,
            sw: 8,
            se: 8,
        })
        .inner_margin(12.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Click an example to generate it directly")
                    .color(theme.text_muted)
                    .size(11.0),
            );
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for prompt in app.controller.selected_genre().prompts {
                    let button = egui::Button::new(
                        RichText::new(*prompt).color(theme.text_secondary).size(12.0),
                    )
                    .fill(theme.bg_light.gamma_multiply(0.5))
                    .corner_radius(12.0);
                    if ui.add_enabled(!is_generating, button).clicked() {
                        clicked = Some(*prompt);
                    }
                }
            });
        });

    if let Some(prompt) = clicked {
        app.submit_example(prompt);
    }
}
