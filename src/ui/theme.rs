use eframe::egui::{self, Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Indigo,
    Rose,
    Cyan,
    Amber,
    Catppuccin,
}

impl ThemePreset {
    /// Get all available presets
    pub fn all() -> &'static [ThemePreset] {
        &[
            ThemePreset::Indigo,
            ThemePreset::Rose,
            ThemePreset::Cyan,
            ThemePreset::Amber,
            ThemePreset::Catppuccin,
        ]
    }

    /// Get display name for the preset
    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Indigo => "Indigo Studio",
            ThemePreset::Rose => "Rose",
            ThemePreset::Cyan => "Cyan",
            ThemePreset::Amber => "Amber",
            ThemePreset::Catppuccin => "Catppuccin Mocha",
        }
    }

    /// Config key for the preset (matches the serde name)
    pub fn key(&self) -> &'static str {
        match self {
            ThemePreset::Indigo => "indigo",
            ThemePreset::Rose => "rose",
            ThemePreset::Cyan => "cyan",
            ThemePreset::Amber => "amber",
            ThemePreset::Catppuccin => "catppuccin",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.key() == key)
    }

    /// Get the theme colors for this preset
    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Indigo => Theme::slate(rgb(99, 102, 241), rgb(129, 140, 248), rgb(67, 56, 202)),
            ThemePreset::Rose => Theme::slate(rgb(244, 63, 94), rgb(251, 113, 133), rgb(190, 18, 60)),
            ThemePreset::Cyan => Theme::slate(rgb(6, 182, 212), rgb(34, 211, 238), rgb(8, 140, 165)),
            ThemePreset::Amber => Theme::slate(rgb(245, 158, 11), rgb(251, 191, 36), rgb(180, 116, 8)),
            ThemePreset::Catppuccin => Theme::catppuccin(),
        }
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg_darkest: Color32,
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_muted: Color32,

    // Semantic colors
    pub success: Color32,
    pub error: Color32,

    // UI element colors
    pub border: Color32,
    pub selection: Color32,
}

impl Theme {
    /// Slate background with the given accent family
    fn slate(accent: Color32, accent_hover: Color32, accent_muted: Color32) -> Self {
        Self {
            bg_darkest: rgb(2, 6, 23),    // Slate-950
            bg_dark: rgb(15, 23, 42),     // Slate-900
            bg_medium: rgb(30, 41, 59),   // Slate-800
            bg_light: rgb(51, 65, 85),    // Slate-700

            text_primary: rgb(248, 250, 252),
            text_secondary: rgb(203, 213, 225),
            text_muted: rgb(100, 116, 139),

            accent,
            accent_hover,
            accent_muted,

            success: rgb(74, 222, 128), // Green-400
            error: rgb(248, 113, 113),  // Red-400

            border: rgb(51, 65, 85),
            selection: accent.gamma_multiply(0.3),
        }
    }

    /// Catppuccin Mocha
    fn catppuccin() -> Self {
        Self {
            bg_darkest: rgb(17, 17, 27), // Crust
            bg_dark: rgb(24, 24, 37),    // Mantle
            bg_medium: rgb(30, 30, 46),  // Base
            bg_light: rgb(49, 50, 68),   // Surface0

            text_primary: rgb(205, 214, 244),
            text_secondary: rgb(186, 194, 222),
            text_muted: rgb(147, 153, 178),

            accent: rgb(203, 166, 247),       // Mauve
            accent_hover: rgb(180, 190, 254), // Lavender
            accent_muted: rgb(150, 120, 200),

            success: rgb(166, 227, 161),
            error: rgb(243, 139, 168),

            border: rgb(69, 71, 90),
            selection: rgb(203, 166, 247).gamma_multiply(0.3),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.bg_dark;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_medium;
        visuals.extreme_bg_color = self.bg_darkest;

        let widgets = &mut visuals.widgets;
        widgets.noninteractive.bg_fill = self.bg_medium;
        widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        widgets.inactive.bg_fill = self.bg_medium;
        widgets.inactive.weak_bg_fill = self.bg_light;
        widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        widgets.hovered.weak_bg_fill = self.bg_light;
        widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);

        widgets.active.weak_bg_fill = self.accent_muted;
        widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);

        widgets.open.weak_bg_fill = self.bg_light;
        widgets.open.bg_stroke = Stroke::new(1.0, self.accent);

        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;

        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}
