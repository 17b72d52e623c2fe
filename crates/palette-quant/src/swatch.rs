//! Palette swatches and overlay text colors
//!
//! A [`Swatch`] is one output color of the quantizer together with the
//! number of source pixels it represents. Each swatch can derive legible
//! title and body text overlays (pure white or pure black at a minimum
//! opacity) against WCAG contrast targets; the derivation runs once, on
//! first access.

use palette_core::color::{self, Color32};
use palette_core::colorspace::{rgb_to_hsl, Hsl};
use palette_core::contrast::min_alpha_for_contrast;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Minimum WCAG contrast for body text drawn over a swatch.
const MIN_CONTRAST_BODY_TEXT: f64 = 4.5;
/// Minimum WCAG contrast for large title text drawn over a swatch.
const MIN_CONTRAST_TITLE_TEXT: f64 = 3.0;

/// A white or black text overlay at the smallest opacity that reaches its
/// contrast target over a swatch color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColor {
    white: bool,
    alpha: u8,
}

impl TextColor {
    fn white(alpha: u8) -> Self {
        Self { white: true, alpha }
    }

    fn black(alpha: u8) -> Self {
        Self { white: false, alpha }
    }

    /// `true` for a white overlay, `false` for black.
    pub fn is_white(self) -> bool {
        self.white
    }

    /// Overlay opacity in [0.0, 1.0].
    pub fn opacity(self) -> f32 {
        f32::from(self.alpha) / 255.0
    }

    /// The overlay as a packed ARGB word.
    pub fn to_argb(self) -> Color32 {
        let base = if self.white { color::WHITE } else { color::BLACK };
        color::set_alpha(base, self.alpha)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct TextColors {
    title: Option<TextColor>,
    body: Option<TextColor>,
}

/// A single extracted color with its pixel population.
///
/// Two swatches are equal iff their colors and populations are equal; the
/// lazily derived text colors never participate in equality or hashing.
#[derive(Debug, Clone)]
pub struct Swatch {
    color: Color32,
    population: u32,
    text_colors: OnceLock<TextColors>,
}

impl Swatch {
    /// Create a swatch. The alpha byte of `color` is forced opaque.
    pub fn new(c: Color32, population: u32) -> Self {
        Self {
            color: color::set_alpha(c, 0xFF),
            population,
            text_colors: OnceLock::new(),
        }
    }

    /// The swatch color as a packed opaque ARGB word.
    pub fn rgb(&self) -> Color32 {
        self.color
    }

    /// The swatch color channels as (r, g, b).
    pub fn rgb_components(&self) -> (u8, u8, u8) {
        color::extract_rgb(self.color)
    }

    /// The swatch color in HSL space.
    pub fn hsl(&self) -> Hsl {
        let (r, g, b) = self.rgb_components();
        rgb_to_hsl(r, g, b)
    }

    /// Number of source pixels this swatch represents.
    pub fn population(&self) -> u32 {
        self.population
    }

    /// Overlay color for title text, if any overlay reaches 3.0:1 contrast.
    pub fn title_text_color(&self) -> Option<TextColor> {
        self.text_colors().title
    }

    /// Overlay color for body text, if any overlay reaches 4.5:1 contrast.
    pub fn body_text_color(&self) -> Option<TextColor> {
        self.text_colors().body
    }

    fn text_colors(&self) -> &TextColors {
        self.text_colors
            .get_or_init(|| generate_text_colors(self.color))
    }
}

/// Derive title and body overlays for a swatch color.
///
/// White is tried first for both roles; if either role fails, black is
/// tried for both. If neither overlay satisfies both roles, each role
/// independently takes whichever overlay produced a solution, and a role
/// with no solution stays unset.
fn generate_text_colors(background: Color32) -> TextColors {
    let light_body = min_alpha_for_contrast(color::WHITE, background, MIN_CONTRAST_BODY_TEXT);
    let light_title = min_alpha_for_contrast(color::WHITE, background, MIN_CONTRAST_TITLE_TEXT);
    if let (Some(body), Some(title)) = (light_body, light_title) {
        return TextColors {
            title: Some(TextColor::white(title)),
            body: Some(TextColor::white(body)),
        };
    }

    let dark_body = min_alpha_for_contrast(color::BLACK, background, MIN_CONTRAST_BODY_TEXT);
    let dark_title = min_alpha_for_contrast(color::BLACK, background, MIN_CONTRAST_TITLE_TEXT);
    if let (Some(body), Some(title)) = (dark_body, dark_title) {
        return TextColors {
            title: Some(TextColor::black(title)),
            body: Some(TextColor::black(body)),
        };
    }

    TextColors {
        title: light_title
            .map(TextColor::white)
            .or(dark_title.map(TextColor::black)),
        body: light_body
            .map(TextColor::white)
            .or(dark_body.map(TextColor::black)),
    }
}

impl PartialEq for Swatch {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && self.population == other.population
    }
}

impl Eq for Swatch {}

impl Hash for Swatch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.population.hash(state);
    }
}
