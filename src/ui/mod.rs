//! UI modules for Prompt Lab
//!
//! Rendering code for the single-page layout, one module per section.

mod components;
mod generate_panel;
mod genre_panel;
mod history_panel;
mod result_card;
mod settings_window;
pub mod theme;

pub use components::{render_about_dialog, render_intro_cards};
pub use generate_panel::render_generate_panel;
pub use genre_panel::render_genre_panel;
pub use history_panel::render_history_panel;
pub use result_card::render_result_card;
pub use settings_window::render_settings_window;
