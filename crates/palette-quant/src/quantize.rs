//! Modified median-cut color quantization
//!
//! Reduces the distinct colors of a pixel histogram to a bounded palette:
//!
//! - Colors passing the filter policy seed one box spanning the whole
//!   color array
//! - The box with the largest color-space volume is split along its
//!   longest channel at the channel midpoint
//! - Splitting repeats until the target palette size is reached, then each
//!   box collapses to its population-weighted average color
//!
//! Boxes are index ranges into one shared color vector that is sorted in
//! place slice by slice; live boxes always hold disjoint ranges that
//! together cover the whole vector.

use crate::error::{PaletteError, PaletteResult};
use crate::filter::{DefaultFilter, Filter};
use crate::histogram::{approximate_color, Histogram};
use crate::swatch::Swatch;
use palette_core::color::{self, Color32};
use palette_core::colorspace::rgb_to_hsl;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Extract a palette of at most `max_colors` swatches from an ARGB pixel
/// buffer, under the default filter policy.
///
/// Pixels are treated as opaque; the alpha byte is ignored. The returned
/// swatch list is unordered, and is empty when the buffer is empty or
/// every color is filtered out.
pub fn extract_palette(pixels: &[Color32], max_colors: u32) -> PaletteResult<Vec<Swatch>> {
    if max_colors < 1 {
        return Err(PaletteError::InvalidMaxColors(max_colors));
    }
    let histogram = Histogram::from_pixels(pixels);
    Ok(quantize_histogram(&histogram, max_colors, &[&DefaultFilter]))
}

/// Quantize a histogram down to at most `max_colors` swatches.
///
/// Filters run twice: over the histogram colors before quantization, and
/// over each averaged box color afterwards.
pub(crate) fn quantize_histogram(
    histogram: &Histogram,
    max_colors: u32,
    filters: &[&dyn Filter],
) -> Vec<Swatch> {
    let populations: HashMap<Color32, u32> = histogram.iter().collect();
    let mut colors: Vec<Color32> = histogram
        .colors()
        .iter()
        .copied()
        .filter(|&c| !should_ignore(c, filters))
        .collect();

    if colors.is_empty() {
        return Vec::new();
    }

    if colors.len() <= max_colors as usize {
        // Fewer distinct colors than the cap; one swatch per color.
        return colors
            .iter()
            .map(|&c| Swatch::new(approximate_color(c), populations[&c]))
            .collect();
    }

    split_boxes(&mut colors, max_colors as usize)
        .into_iter()
        .filter_map(|vbox| vbox.average_swatch(&colors, &populations))
        .filter(|swatch| {
            !filters
                .iter()
                .any(|f| !f.is_allowed(swatch.rgb(), swatch.hsl()))
        })
        .collect()
}

/// `true` when any filter rejects the (reduced) color.
fn should_ignore(reduced: Color32, filters: &[&dyn Filter]) -> bool {
    let rgb = approximate_color(reduced);
    let (r, g, b) = color::extract_rgb(rgb);
    let hsl = rgb_to_hsl(r, g, b);
    filters.iter().any(|f| !f.is_allowed(rgb, hsl))
}

/// Run the box-splitting loop until `max_colors` boxes exist or nothing
/// can be split further.
fn split_boxes(colors: &mut [Color32], max_colors: usize) -> Vec<Vbox> {
    let mut ordinal: u64 = 0;
    let mut queue: BinaryHeap<Vbox> = BinaryHeap::with_capacity(max_colors);
    queue.push(Vbox::new(0, colors.len() - 1, ordinal, colors));

    while queue.len() < max_colors {
        let Some(mut vbox) = queue.pop() else {
            break;
        };
        if !vbox.can_split() {
            // Largest box is a single color: nothing splittable remains.
            // Keep the box so the palette loses no colors.
            queue.push(vbox);
            break;
        }
        ordinal += 1;
        let right = vbox.split(colors, ordinal);
        queue.push(right);
        queue.push(vbox);
    }

    queue.into_vec()
}

/// Color channel along which a box can be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Red,
    Green,
    Blue,
}

#[inline]
fn channel(c: Color32, dim: Dimension) -> u8 {
    match dim {
        Dimension::Red => color::red(c),
        Dimension::Green => color::green(c),
        Dimension::Blue => color::blue(c),
    }
}

/// A box in reduced color space, backed by the slice `[lower, upper]` of
/// the quantizer's color array.
#[derive(Debug)]
struct Vbox {
    lower: usize,
    upper: usize,
    /// Creation order; only a heap tiebreaker.
    ordinal: u64,
    min_red: u8,
    max_red: u8,
    min_green: u8,
    max_green: u8,
    min_blue: u8,
    max_blue: u8,
}

impl Vbox {
    fn new(lower: usize, upper: usize, ordinal: u64, colors: &[Color32]) -> Self {
        let mut vbox = Self {
            lower,
            upper,
            ordinal,
            min_red: u8::MAX,
            max_red: 0,
            min_green: u8::MAX,
            max_green: 0,
            min_blue: u8::MAX,
            max_blue: 0,
        };
        vbox.fit(colors);
        vbox
    }

    /// Recompute tight channel bounds over the box slice.
    fn fit(&mut self, colors: &[Color32]) {
        let (mut min_red, mut max_red) = (u8::MAX, u8::MIN);
        let (mut min_green, mut max_green) = (u8::MAX, u8::MIN);
        let (mut min_blue, mut max_blue) = (u8::MAX, u8::MIN);

        for &c in &colors[self.lower..=self.upper] {
            let (r, g, b) = color::extract_rgb(c);
            min_red = min_red.min(r);
            max_red = max_red.max(r);
            min_green = min_green.min(g);
            max_green = max_green.max(g);
            min_blue = min_blue.min(b);
            max_blue = max_blue.max(b);
        }

        self.min_red = min_red;
        self.max_red = max_red;
        self.min_green = min_green;
        self.max_green = max_green;
        self.min_blue = min_blue;
        self.max_blue = max_blue;
    }

    fn volume(&self) -> u32 {
        (u32::from(self.max_red) - u32::from(self.min_red) + 1)
            * (u32::from(self.max_green) - u32::from(self.min_green) + 1)
            * (u32::from(self.max_blue) - u32::from(self.min_blue) + 1)
    }

    fn color_count(&self) -> usize {
        self.upper - self.lower + 1
    }

    fn can_split(&self) -> bool {
        self.color_count() > 1
    }

    /// Channel with the widest span; ties resolve red, then green, then
    /// blue.
    fn longest_dimension(&self) -> Dimension {
        let red = self.max_red - self.min_red;
        let green = self.max_green - self.min_green;
        let blue = self.max_blue - self.min_blue;

        if red >= green && red >= blue {
            Dimension::Red
        } else if green >= blue {
            Dimension::Green
        } else {
            Dimension::Blue
        }
    }

    /// Sort the box slice along the longest dimension and locate the split
    /// index.
    ///
    /// Red and green split at the first color at or past the channel
    /// midpoint; blue splits strictly past it (a quirk of the classic
    /// algorithm that downstream fixtures depend on). The scan stops one
    /// short of `upper` so the right half is never empty; if no index
    /// qualifies the split degenerates to `lower`.
    fn find_split_point(&self, colors: &mut [Color32]) -> usize {
        let dim = self.longest_dimension();

        colors[self.lower..=self.upper].sort_unstable_by_key(|&c| channel(c, dim));

        let midpoint = match dim {
            Dimension::Red => (u32::from(self.min_red) + u32::from(self.max_red)) / 2,
            Dimension::Green => (u32::from(self.min_green) + u32::from(self.max_green)) / 2,
            Dimension::Blue => (u32::from(self.min_blue) + u32::from(self.max_blue)) / 2,
        } as u8;

        for i in self.lower..self.upper {
            let value = channel(colors[i], dim);
            let past = match dim {
                Dimension::Red | Dimension::Green => value >= midpoint,
                Dimension::Blue => value > midpoint,
            };
            if past {
                return i;
            }
        }
        self.lower
    }

    /// Split off the upper half as a new box. `self` keeps `[lower, split]`
    /// and refits its bounds; the new box covers `[split + 1, upper]`.
    fn split(&mut self, colors: &mut [Color32], ordinal: u64) -> Vbox {
        debug_assert!(self.can_split(), "cannot split a single-color box");

        let split = self.find_split_point(colors);
        let right = Vbox::new(split + 1, self.upper, ordinal, colors);
        self.upper = split;
        self.fit(colors);
        right
    }

    /// Population-weighted average color of the slice, as a swatch.
    ///
    /// Returns `None` for a zero-population slice (cannot happen for boxes
    /// derived from a histogram, but guards the division).
    fn average_swatch(
        &self,
        colors: &[Color32],
        populations: &HashMap<Color32, u32>,
    ) -> Option<Swatch> {
        let mut red_sum: u64 = 0;
        let mut green_sum: u64 = 0;
        let mut blue_sum: u64 = 0;
        let mut total: u64 = 0;

        for &c in &colors[self.lower..=self.upper] {
            let population = u64::from(populations.get(&c).copied().unwrap_or(0));
            let (r, g, b) = color::extract_rgb(c);
            red_sum += population * u64::from(r);
            green_sum += population * u64::from(g);
            blue_sum += population * u64::from(b);
            total += population;
        }

        if total == 0 {
            return None;
        }

        let red = (red_sum as f64 / total as f64).round() as u8;
        let green = (green_sum as f64 / total as f64).round() as u8;
        let blue = (blue_sum as f64 / total as f64).round() as u8;
        let population = u32::try_from(total).unwrap_or(u32::MAX);

        Some(Swatch::new(
            approximate_color(color::compose_rgb(red, green, blue)),
            population,
        ))
    }
}

impl PartialEq for Vbox {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Vbox {}

impl Ord for Vbox {
    // Max-heap: largest volume pops first; earlier boxes win volume ties.
    fn cmp(&self, other: &Self) -> Ordering {
        self.volume()
            .cmp(&other.volume())
            .then_with(|| other.ordinal.cmp(&self.ordinal))
    }
}

impl PartialOrd for Vbox {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
