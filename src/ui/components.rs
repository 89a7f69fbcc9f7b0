//! Shared UI components for Prompt Lab

use eframe::egui::{self, RichText};

use crate::app::PromptLabApp;
use crate::ui::theme::Theme;

/// Render a framed section with a title
pub fn section_frame<R>(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: &str,
    content: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(theme.bg_medium)
        .corner_radius(8.0)
        .inner_margin(16.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if !title.is_empty() {
                ui.label(RichText::new(title).color(theme.accent).size(13.0).strong());
                ui.add_space(12.0);
            }
            content(ui)
        })
        .inner
}

/// Render a small rounded chip (tags, section markers)
pub fn chip(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    egui::Frame::new()
        .fill(theme.bg_light)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(theme.text_secondary).size(11.0));
        });
}

/// Feature blurbs shown before the first result
pub fn render_intro_cards(ui: &mut egui::Ui, theme: &Theme) {
    ui.columns(2, |columns| {
        section_frame(&mut columns[0], theme, "", |ui| {
            ui.label(RichText::new("Smart style tagging").color(theme.text_primary).strong());
            ui.add_space(4.0);
            ui.label(
                RichText::new(
                    "Combines genre, instrument and mood tags tuned for the Suno v5 style field.",
                )
                .color(theme.text_muted)
                .size(12.0),
            );
        });
        section_frame(&mut columns[1], theme, "", |ui| {
            ui.label(RichText::new("Structured lyrics").color(theme.text_primary).strong());
            ui.add_space(4.0);
            ui.label(
                RichText::new("Lyrics come with [Verse], [Chorus] and other Suno section markers.")
                    .color(theme.text_muted)
                    .size(12.0),
            );
        });
    });
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut PromptLabApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let theme = app.ui.current_theme.clone();

    egui::Window::new("About Prompt Lab")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 220.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("Prompt Lab").size(24.0).strong().color(theme.accent));
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);
                ui.label(
                    RichText::new("Style prompts and structured lyrics for Suno v5")
                        .color(theme.text_secondary),
                );

                ui.add_space(12.0);
                if ui.link("Open Suno").clicked() {
                    if let Err(e) = open::that("https://suno.com/") {
                        tracing::warn!("Failed to open browser: {}", e);
                    }
                }

                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    app.ui.show_about_dialog = false;
                }
                ui.add_space(8.0);
            });
        });
}
