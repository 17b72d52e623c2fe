//! Palette generation and themed swatch selection
//!
//! [`Palette`] bundles the quantizer output with per-target selections.
//! Construction goes through [`PaletteBuilder`], which controls the
//! palette size, the filter list and the target list.

use crate::error::{PaletteError, PaletteResult};
use crate::filter::{DefaultFilter, Filter};
use crate::histogram::Histogram;
use crate::quantize::quantize_histogram;
use crate::swatch::Swatch;
use crate::target::Target;
use palette_core::Color32;
use std::collections::HashSet;

/// Default maximum palette size used by the builder.
const DEFAULT_MAX_COLORS: u32 = 16;

/// An extracted palette: the quantizer's swatches plus themed selections.
#[derive(Debug)]
pub struct Palette {
    swatches: Vec<Swatch>,
    targets: Vec<Target>,
    /// Selected swatch index per target, parallel to `targets`.
    selected: Vec<Option<usize>>,
    dominant: Option<usize>,
}

impl Palette {
    /// Start building a palette from a buffer of ARGB pixels.
    pub fn from_pixels(pixels: &[Color32]) -> PaletteBuilder {
        PaletteBuilder::new(pixels)
    }

    /// All swatches, in no particular order.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The swatch with the largest population.
    pub fn dominant_swatch(&self) -> Option<&Swatch> {
        self.dominant.map(|i| &self.swatches[i])
    }

    /// The swatch selected for `target`, if the palette was generated with
    /// that target and a swatch was eligible.
    pub fn swatch_for_target(&self, target: &Target) -> Option<&Swatch> {
        let index = self.targets.iter().position(|t| t == target)?;
        self.selected[index].map(|i| &self.swatches[i])
    }

    /// Saturated mid-lightness swatch.
    pub fn vibrant_swatch(&self) -> Option<&Swatch> {
        self.swatch_for_target(&Target::VIBRANT)
    }

    /// Saturated light swatch.
    pub fn light_vibrant_swatch(&self) -> Option<&Swatch> {
        self.swatch_for_target(&Target::LIGHT_VIBRANT)
    }

    /// Saturated dark swatch.
    pub fn dark_vibrant_swatch(&self) -> Option<&Swatch> {
        self.swatch_for_target(&Target::DARK_VIBRANT)
    }

    /// Desaturated mid-lightness swatch.
    pub fn muted_swatch(&self) -> Option<&Swatch> {
        self.swatch_for_target(&Target::MUTED)
    }

    /// Desaturated light swatch.
    pub fn light_muted_swatch(&self) -> Option<&Swatch> {
        self.swatch_for_target(&Target::LIGHT_MUTED)
    }

    /// Desaturated dark swatch.
    pub fn dark_muted_swatch(&self) -> Option<&Swatch> {
        self.swatch_for_target(&Target::DARK_MUTED)
    }

    /// Pick the best-scoring eligible swatch for each target, in target
    /// order. Exclusive targets claim their color.
    fn select_swatches(&mut self) {
        let max_population = self
            .dominant
            .map(|i| self.swatches[i].population())
            .unwrap_or(1)
            .max(1);

        let mut used: HashSet<Color32> = HashSet::new();
        let mut selected = Vec::with_capacity(self.targets.len());

        for target in &self.targets {
            let best = self
                .swatches
                .iter()
                .enumerate()
                .filter(|(_, swatch)| {
                    let hsl = swatch.hsl();
                    target.saturation.contains(hsl.s)
                        && target.lightness.contains(hsl.l)
                        && !used.contains(&swatch.rgb())
                })
                .max_by(|&(_, a), &(_, b)| {
                    let score_a = score(a, target, max_population);
                    let score_b = score(b, target, max_population);
                    score_a.partial_cmp(&score_b).unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|(i, _)| i);

            if let Some(i) = best {
                if target.is_exclusive {
                    used.insert(self.swatches[i].rgb());
                }
            }
            selected.push(best);
        }

        self.selected = selected;
    }
}

fn score(swatch: &Swatch, target: &Target, max_population: u32) -> f32 {
    let hsl = swatch.hsl();
    let saturation = target.saturation_weight * (1.0 - (hsl.s - target.saturation.target).abs());
    let lightness = target.lightness_weight * (1.0 - (hsl.l - target.lightness.target).abs());
    let population =
        target.population_weight * (swatch.population() as f32 / max_population as f32);
    saturation + lightness + population
}

/// Configures and runs palette extraction.
pub struct PaletteBuilder {
    pixels: Vec<Color32>,
    max_colors: u32,
    filters: Vec<Box<dyn Filter>>,
    targets: Vec<Target>,
}

impl PaletteBuilder {
    fn new(pixels: &[Color32]) -> Self {
        Self {
            pixels: pixels.to_vec(),
            max_colors: DEFAULT_MAX_COLORS,
            filters: vec![Box::new(DefaultFilter)],
            targets: Target::defaults(),
        }
    }

    /// Set the maximum number of colors in the quantized palette.
    pub fn maximum_color_count(mut self, max_colors: u32) -> Self {
        self.max_colors = max_colors;
        self
    }

    /// Add a filter to the policy chain.
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Remove all filters, including the default policy.
    pub fn clear_filters(mut self) -> Self {
        self.filters.clear();
        self
    }

    /// Add a selection target. Duplicates are ignored.
    pub fn add_target(mut self, target: Target) -> Self {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
        self
    }

    /// Remove all selection targets.
    pub fn clear_targets(mut self) -> Self {
        self.targets.clear();
        self
    }

    /// Run extraction and target selection.
    pub fn generate(self) -> PaletteResult<Palette> {
        if self.max_colors < 1 {
            return Err(PaletteError::InvalidMaxColors(self.max_colors));
        }

        let histogram = Histogram::from_pixels(&self.pixels);
        let filter_refs: Vec<&dyn Filter> = self.filters.iter().map(AsRef::as_ref).collect();
        let swatches = quantize_histogram(&histogram, self.max_colors, &filter_refs);

        let dominant = swatches
            .iter()
            .enumerate()
            .max_by_key(|(_, swatch)| swatch.population())
            .map(|(i, _)| i);

        let mut palette = Palette {
            swatches,
            targets: self.targets,
            selected: Vec::new(),
            dominant,
        };
        palette.select_swatches();
        Ok(palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_core::color;

    #[test]
    fn test_dominant_swatch_is_most_populated() {
        let mut pixels = vec![color::compose_rgb(51, 102, 204); 80];
        pixels.extend(vec![color::compose_rgb(0, 200, 80); 20]);

        let palette = Palette::from_pixels(&pixels).generate().unwrap();
        let dominant = palette.dominant_swatch().expect("dominant exists");
        assert_eq!(dominant.population(), 80);
    }

    #[test]
    fn test_vibrant_and_muted_selection() {
        // A saturated mid-lightness blue and a muted mid-lightness blue-gray.
        let mut pixels = vec![color::compose_rgb(32, 64, 224); 50];
        pixels.extend(vec![color::compose_rgb(104, 112, 136); 50]);

        let palette = Palette::from_pixels(&pixels).generate().unwrap();

        let vibrant = palette.vibrant_swatch().expect("vibrant selected");
        assert_eq!(vibrant.rgb_components(), (32, 64, 224));

        let muted = palette.muted_swatch().expect("muted selected");
        assert_eq!(muted.rgb_components(), (104, 112, 136));
    }

    #[test]
    fn test_exclusive_targets_do_not_share_a_swatch() {
        // s ≈ 0.38, l ≈ 0.5: eligible for both vibrant and muted.
        let pixels = vec![color::compose_rgb(80, 96, 176); 50];
        let palette = Palette::from_pixels(&pixels).generate().unwrap();

        // Vibrant runs first and claims the only swatch.
        assert!(palette.vibrant_swatch().is_some());
        assert!(palette.muted_swatch().is_none());
    }

    #[test]
    fn test_cleared_targets_select_nothing() {
        let pixels = vec![color::compose_rgb(32, 64, 224); 50];
        let palette = Palette::from_pixels(&pixels)
            .clear_targets()
            .generate()
            .unwrap();
        assert!(palette.vibrant_swatch().is_none());
        assert!(!palette.swatches().is_empty());
    }

    #[test]
    fn test_builder_rejects_zero_max_colors() {
        let result = Palette::from_pixels(&[]).maximum_color_count(0).generate();
        assert!(matches!(result, Err(PaletteError::InvalidMaxColors(0))));
    }
}
