//! Result card: title, vibe, tags and the two copyable blocks

use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::history::PromptResult;
use crate::state::{CopyFeedback, CopyTarget};
use crate::ui::components::{chip, section_frame};
use crate::ui::theme::Theme;

/// Render a generated result
pub fn render_result_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    result: &PromptResult,
    copy_feedback: &mut CopyFeedback,
) {
    section_frame(ui, theme, "", |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&result.title)
                        .color(theme.text_primary)
                        .size(22.0)
                        .strong(),
                );
                ui.label(RichText::new(&result.vibe).color(theme.accent_hover));
            });
        });

        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for tag in &result.tags {
                chip(ui, theme, &format!("#{}", tag));
            }
        });

        let markers = result.section_markers();
        if !markers.is_empty() {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Sections:").color(theme.text_muted).size(11.0));
                for marker in markers {
                    chip(ui, theme, marker);
                }
            });
        }

        ui.add_space(16.0);
        render_copy_block(
            ui,
            theme,
            "STYLE PROMPT",
            "Copy Style",
            &result.style,
            CopyTarget::Style,
            copy_feedback,
            theme.accent_hover,
        );

        ui.add_space(16.0);
        render_copy_block(
            ui,
            theme,
            "LYRICS",
            "Copy Lyrics",
            &result.lyrics,
            CopyTarget::Lyrics,
            copy_feedback,
            theme.text_secondary,
        );
    });
}

#[allow(clippy::too_many_arguments)]
fn render_copy_block(
    ui: &mut egui::Ui,
    theme: &Theme,
    heading: &str,
    copy_label: &str,
    text: &str,
    target: CopyTarget,
    copy_feedback: &mut CopyFeedback,
    text_color: egui::Color32,
) {
    let now = Instant::now();

    ui.horizontal(|ui| {
        ui.label(RichText::new(heading).color(theme.text_muted).size(12.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if copy_feedback.is_active(target, now) {
                ui.label(RichText::new("✔ Copied").color(theme.success).size(12.0));
            } else if ui.small_button(copy_label).clicked() {
                ui.ctx().copy_text(text.to_string());
                copy_feedback.mark(target, now);
                ui.ctx().request_repaint();
            }
        });
    });

    ui.add_space(4.0);
    egui::Frame::new()
        .fill(theme.bg_darkest)
        .corner_radius(8.0)
        .inner_margin(12.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::ScrollArea::vertical()
                .id_salt(heading)
                .max_height(400.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(text).monospace().color(text_color));
                });
        });
}
