use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use eframe::egui::{self, RichText};

use crate::config::Config;
use crate::controller::Controller;
use crate::gemini::GeminiClient;
use crate::history::HistoryStore;
use crate::state::{HistoryState, StateEvent, UiState};
use crate::ui;

/// Main application state
pub struct PromptLabApp {
    /// Application configuration
    pub config: Config,
    /// Generation, history and genre state
    pub controller: Controller,
    /// UI-only state (theme, dialogs, copy feedback)
    pub ui: UiState,
    /// Status message for the status bar
    pub status_message: String,
}

impl PromptLabApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load configuration, using defaults: {}", e);
            Config::default()
        });

        let store = match HistoryStore::open() {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::error!("History will not be persisted: {}", e);
                None
            }
        };
        let history = HistoryState::load(store);

        let client = GeminiClient::new(&config.api)?;
        let status_message = if config.api.resolve_api_key().is_some() {
            format!("Ready ({})", client.model())
        } else {
            "No API key configured - set GEMINI_API_KEY or api.api_key".to_string()
        };

        let controller = Controller::new(Arc::new(client), history, &config.ui.locale);
        let ui = UiState::new(config.ui.theme.theme());

        Ok(Self {
            config,
            controller,
            ui,
            status_message,
        })
    }

    /// Apply events returned by state methods
    pub fn handle_events(&mut self, events: Vec<StateEvent>) {
        for event in events {
            match event {
                StateEvent::StatusMessage(msg) => self.status_message = msg,
                StateEvent::LogError(msg) => tracing::error!("{}", msg),
                StateEvent::LogInfo(msg) => tracing::info!("{}", msg),
            }
        }
    }

    /// Submit the input box
    pub fn submit(&mut self) {
        if let Some(event) = self.controller.submit() {
            self.handle_events(vec![event]);
        }
    }

    /// Submit a catalog example
    pub fn submit_example(&mut self, text: &str) {
        if let Some(event) = self.controller.submit_example(text) {
            self.handle_events(vec![event]);
        }
    }

    /// Save configuration to disk
    pub fn save_config(&mut self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
            self.status_message = format!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for PromptLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        let events = self.controller.poll(ctx);
        self.handle_events(events);

        // Keep repainting until the last "Copied" label disappears
        if let Some(remaining) = self.ui.copy_feedback.prune(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }

        let theme = self.ui.current_theme.clone();

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(theme.bg_darkest)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("♪").color(theme.accent).size(22.0));
                    ui.label(
                        RichText::new("Suno v5 Prompt Lab")
                            .color(theme.text_primary)
                            .size(18.0)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("About").clicked() {
                            self.ui.show_about_dialog = true;
                        }
                        if ui.button("Settings").clicked() {
                            self.ui.show_settings = true;
                        }
                    });
                });
            });

        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::new()
                    .fill(theme.bg_darkest)
                    .inner_margin(egui::Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&self.status_message)
                            .color(theme.text_muted)
                            .size(11.0),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("Powered by {}", self.config.api.model))
                                .color(theme.text_muted)
                                .size(11.0),
                        );
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(16.0);
                    ui::render_generate_panel(self, ui);
                    ui.add_space(16.0);
                    ui::render_genre_panel(self, ui);
                    ui.add_space(16.0);

                    if let Some(result) = self.controller.result().cloned() {
                        ui::render_result_card(ui, &theme, &result, &mut self.ui.copy_feedback);
                    } else if !self.controller.is_generating() {
                        ui::render_intro_cards(ui, &theme);
                    }

                    ui.add_space(16.0);
                    ui::render_history_panel(self, ui);
                    ui.add_space(16.0);
                });
        });

        ui::render_settings_window(self, ctx);
        ui::render_about_dialog(self, ctx);
    }
}
