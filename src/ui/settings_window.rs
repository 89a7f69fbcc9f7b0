//! Settings window

use eframe::egui::{self, RichText};

use crate::app::PromptLabApp;
use crate::ui::theme::ThemePreset;

const LOCALES: &[(&str, &str)] = &[("en", "English"), ("ko", "한국어")];

/// Render the settings window (theme, language, API info)
pub fn render_settings_window(app: &mut PromptLabApp, ctx: &egui::Context) {
    if !app.ui.show_settings {
        return;
    }

    let theme = app.ui.current_theme.clone();
    let mut open = true;
    let mut changed = false;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(RichText::new("Appearance").color(theme.accent).strong());
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Theme:").color(theme.text_muted));
                egui::ComboBox::from_id_salt("theme_select")
                    .selected_text(app.config.ui.theme.name())
                    .show_ui(ui, |ui| {
                        for preset in ThemePreset::all() {
                            if ui
                                .selectable_label(app.config.ui.theme == *preset, preset.name())
                                .clicked()
                            {
                                app.config.ui.theme = *preset;
                                app.ui.current_theme = preset.theme();
                                app.ui.theme_dirty = true;
                                changed = true;
                            }
                        }
                    });
            });

            ui.horizontal(|ui| {
                ui.label(RichText::new("Language:").color(theme.text_muted));
                let current = LOCALES
                    .iter()
                    .find(|(code, _)| *code == app.config.ui.locale)
                    .map(|(_, name)| *name)
                    .unwrap_or("English");
                egui::ComboBox::from_id_salt("locale_select")
                    .selected_text(current)
                    .show_ui(ui, |ui| {
                        for (code, name) in LOCALES {
                            if ui
                                .selectable_label(app.config.ui.locale == *code, *name)
                                .clicked()
                            {
                                app.config.ui.locale = code.to_string();
                                app.controller.set_locale(code);
                                changed = true;
                            }
                        }
                    });
            });

            ui.add_space(12.0);
            ui.label(RichText::new("API").color(theme.accent).strong());
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Model: {}", app.config.api.model))
                    .color(theme.text_secondary),
            );
            let key_status = if app.config.api.resolve_api_key().is_some() {
                "API key: configured"
            } else {
                "API key: missing (set GEMINI_API_KEY)"
            };
            ui.label(RichText::new(key_status).color(theme.text_secondary));
            ui.label(
                RichText::new("Model and key changes apply on next start (promptlab config set).")
                    .color(theme.text_muted)
                    .size(11.0),
            );
        });

    if changed {
        app.save_config();
    }
    app.ui.show_settings = open;
}
