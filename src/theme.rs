//! Theme catalog: colors, spacing, and light/dark variable sets
//!
//! Styling values shared by every step view. Colors and spacing are fixed;
//! the scheme-dependent values are exposed both as a typed [`Palette`] and
//! as rendered CSS custom-property declarations for clients that inject
//! them into a document root.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Named colors of the visual identity
pub mod colors {
    /// Deep purple used for dark accents
    pub const PURPLE_DARK: &str = "#2a194d";
    /// Primary brand purple
    pub const PURPLE: &str = "#7247C4";
    /// Washed-out purple used as a background
    pub const PURPLE_BACKGROUND: &str = "#e1d8f3";
    /// Plain white
    pub const WHITE: &str = "#FFFFFF";
    /// Near-black used as the dark base
    pub const BLACK: &str = "#1A202C";
    /// Light grey page background
    pub const GREY_BACKGROUND: &str = "#EDF2F7";
    /// Light grey for secondary text on dark surfaces
    pub const GREY_LIGHT: &str = "#CBD5E0";
    /// Mid grey for secondary text
    pub const GREY: &str = "#718096";
    /// Dark grey surface color
    pub const GREY_DARK: &str = "#2D3748";
    /// Error red
    pub const RED: &str = "#f05252";
    /// Highlight yellow
    pub const YELLOW: &str = "#ffca64";
    /// Success green
    pub const GREEN: &str = "#5cb85c";
}

/// Converts a spacing step to a pixel length
///
/// The scale is linear with a 4 px unit: `spacings(3)` is `"12px"`.
pub fn spacings(n: u32) -> String {
    format!("{}px", n * constants::theme::SPACING_UNIT)
}

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    /// Light scheme (dark text on light surfaces)
    Light,
    /// Dark scheme (light text on dark surfaces)
    Dark,
}

/// Scheme-dependent color assignments
///
/// Field names match the CSS custom properties they render to, so the
/// typed palette and the rendered variable set cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Primary text color (`--text`)
    pub text: &'static str,
    /// Secondary text color (`--text-grey`)
    pub text_grey: &'static str,
    /// Page background (`--background`)
    pub background: &'static str,
    /// Muted section background (`--background-grey`)
    pub background_grey: &'static str,
    /// Purple-tinted background (`--background-purple`)
    pub background_purple: &'static str,
    /// Button label color (`--button-text`)
    pub button_text: &'static str,
    /// Button fill color (`--button-background`)
    pub button_background: &'static str,
    /// Button outline color (`--button-border`)
    pub button_border: &'static str,
    /// Fill of a selected button (`--button-selected`)
    pub button_selected: &'static str,
    /// Modal outline color (`--modal-border`)
    pub modal_border: &'static str,
    /// Modal fill color (`--modal-background`)
    pub modal_background: &'static str,
    /// Alert text color (`--alert-text`)
    pub alert_text: &'static str,
    /// Alert fill color (`--alert-background`)
    pub alert_background: &'static str,
    /// Default border color (`--border-color`)
    pub border_color: &'static str,
    /// Alternate border color (`--border-color-alternate`)
    pub border_color_alternate: &'static str,
}

impl Palette {
    /// Returns the palette of a scheme
    pub fn of(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Light => Self::LIGHT,
            Scheme::Dark => Self::DARK,
        }
    }

    /// Light-scheme assignments
    pub const LIGHT: Self = Self {
        text: colors::BLACK,
        text_grey: colors::GREY,
        background: colors::WHITE,
        background_grey: colors::GREY_BACKGROUND,
        background_purple: colors::PURPLE_BACKGROUND,
        button_text: colors::BLACK,
        button_background: colors::WHITE,
        button_border: colors::BLACK,
        button_selected: colors::PURPLE_BACKGROUND,
        modal_border: colors::BLACK,
        modal_background: colors::WHITE,
        alert_text: colors::WHITE,
        alert_background: colors::BLACK,
        border_color: colors::GREY_DARK,
        border_color_alternate: colors::GREY,
    };

    /// Dark-scheme assignments
    pub const DARK: Self = Self {
        text: colors::WHITE,
        text_grey: colors::GREY_LIGHT,
        background: colors::BLACK,
        background_grey: colors::GREY_DARK,
        background_purple: colors::PURPLE_DARK,
        button_text: colors::WHITE,
        button_background: colors::BLACK,
        button_border: colors::GREY_LIGHT,
        button_selected: colors::PURPLE,
        modal_border: colors::GREY_LIGHT,
        modal_background: colors::BLACK,
        alert_text: colors::BLACK,
        alert_background: colors::WHITE,
        border_color: colors::GREY_LIGHT,
        border_color_alternate: colors::GREY,
    };

    /// Renders the palette as CSS custom-property declarations
    ///
    /// One `--name: value;` declaration per line, suitable for injection
    /// into a `:root` rule.
    pub fn css_variables(&self) -> String {
        let pairs = [
            ("--text", self.text),
            ("--text-grey", self.text_grey),
            ("--background", self.background),
            ("--background-grey", self.background_grey),
            ("--background-purple", self.background_purple),
            ("--button-text", self.button_text),
            ("--button-background", self.button_background),
            ("--button-border", self.button_border),
            ("--button-selected", self.button_selected),
            ("--modal-border", self.modal_border),
            ("--modal-background", self.modal_background),
            ("--alert-text", self.alert_text),
            ("--alert-background", self.alert_background),
            ("--border-color", self.border_color),
            ("--border-color-alternate", self.border_color_alternate),
        ];

        let mut out = String::new();
        for (name, value) in pairs {
            let _ = writeln!(out, "{name}: {value};");
        }
        out
    }
}

/// Named animations referenced by step views
pub mod animations {
    /// A named animation from the keyframe library
    #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
    pub struct Animation {
        /// Keyframe name
        pub name: &'static str,
        /// Play time in milliseconds
        pub duration_ms: u64,
        /// Timing function
        pub easing: &'static str,
    }

    /// Springy scale-up used when an answer card enters
    pub const BOUNCE_IN: Animation = Animation {
        name: "bounce-in",
        duration_ms: 1000,
        easing: "linear",
    };

    /// Springy scale-down used on non-correct answer cards
    pub const BOUNCE_OUT: Animation = Animation {
        name: "bounce-out",
        duration_ms: 1000,
        easing: "linear",
    };

    /// Stroke draw-in on the correct-answer check mark
    pub const DRAW_IN: Animation = Animation {
        name: "draw-in",
        duration_ms: 600,
        easing: "cubic-bezier(0.7, 0, 0.3, 1)",
    };

    /// Slide-and-fade entrance of the submissions panel
    pub const FADE_UP_IN: Animation = Animation {
        name: "fade-up-in",
        duration_ms: 800,
        easing: "cubic-bezier(0.77, 0.1, 0.46, 1.22)",
    };

    /// Plain opacity fade
    pub const FADE_IN: Animation = Animation {
        name: "fade-in",
        duration_ms: 300,
        easing: "linear",
    };
}
