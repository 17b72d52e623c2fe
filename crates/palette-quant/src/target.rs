//! Swatch selection targets
//!
//! A [`Target`] describes a themed color profile (vibrant, muted, and
//! their dark/light variants) as preferred saturation and lightness
//! ranges plus scoring weights. The palette generator picks, for each
//! target, the eligible swatch with the best score.

/// A closed range with a preferred value, in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRange {
    pub min: f32,
    pub target: f32,
    pub max: f32,
}

impl TargetRange {
    /// Create a range; `min <= target <= max` is expected.
    pub const fn new(min: f32, target: f32, max: f32) -> Self {
        Self { min, target, max }
    }

    /// `true` when `value` lies inside the closed range.
    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }
}

const TARGET_DARK_LUMA: f32 = 0.26;
const MAX_DARK_LUMA: f32 = 0.45;

const MIN_LIGHT_LUMA: f32 = 0.55;
const TARGET_LIGHT_LUMA: f32 = 0.74;

const MIN_NORMAL_LUMA: f32 = 0.3;
const TARGET_NORMAL_LUMA: f32 = 0.5;
const MAX_NORMAL_LUMA: f32 = 0.7;

const TARGET_MUTED_SATURATION: f32 = 0.3;
const MAX_MUTED_SATURATION: f32 = 0.4;

const TARGET_VIBRANT_SATURATION: f32 = 1.0;
const MIN_VIBRANT_SATURATION: f32 = 0.35;

const WEIGHT_SATURATION: f32 = 0.24;
const WEIGHT_LUMA: f32 = 0.52;
const WEIGHT_POPULATION: f32 = 0.24;

const VIBRANT_SATURATION_RANGE: TargetRange =
    TargetRange::new(MIN_VIBRANT_SATURATION, TARGET_VIBRANT_SATURATION, 1.0);
const MUTED_SATURATION_RANGE: TargetRange =
    TargetRange::new(0.0, TARGET_MUTED_SATURATION, MAX_MUTED_SATURATION);

const DARK_LIGHTNESS_RANGE: TargetRange = TargetRange::new(0.0, TARGET_DARK_LUMA, MAX_DARK_LUMA);
const NORMAL_LIGHTNESS_RANGE: TargetRange =
    TargetRange::new(MIN_NORMAL_LUMA, TARGET_NORMAL_LUMA, MAX_NORMAL_LUMA);
const LIGHT_LIGHTNESS_RANGE: TargetRange =
    TargetRange::new(MIN_LIGHT_LUMA, TARGET_LIGHT_LUMA, 1.0);

/// A themed swatch profile scored over saturation, lightness and
/// population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Eligible saturation range and its preferred value.
    pub saturation: TargetRange,
    /// Eligible lightness range and its preferred value.
    pub lightness: TargetRange,
    /// Weight of saturation proximity in the score.
    pub saturation_weight: f32,
    /// Weight of lightness proximity in the score.
    pub lightness_weight: f32,
    /// Weight of relative population in the score.
    pub population_weight: f32,
    /// When set, a swatch claimed by this target cannot be selected by
    /// later targets.
    pub is_exclusive: bool,
}

impl Target {
    const fn with_ranges(saturation: TargetRange, lightness: TargetRange) -> Self {
        Self {
            saturation,
            lightness,
            saturation_weight: WEIGHT_SATURATION,
            lightness_weight: WEIGHT_LUMA,
            population_weight: WEIGHT_POPULATION,
            is_exclusive: true,
        }
    }

    /// Saturated, mid-lightness colors.
    pub const VIBRANT: Target = Target::with_ranges(VIBRANT_SATURATION_RANGE, NORMAL_LIGHTNESS_RANGE);
    /// Saturated, light colors.
    pub const LIGHT_VIBRANT: Target =
        Target::with_ranges(VIBRANT_SATURATION_RANGE, LIGHT_LIGHTNESS_RANGE);
    /// Saturated, dark colors.
    pub const DARK_VIBRANT: Target =
        Target::with_ranges(VIBRANT_SATURATION_RANGE, DARK_LIGHTNESS_RANGE);
    /// Desaturated, mid-lightness colors.
    pub const MUTED: Target = Target::with_ranges(MUTED_SATURATION_RANGE, NORMAL_LIGHTNESS_RANGE);
    /// Desaturated, light colors.
    pub const LIGHT_MUTED: Target =
        Target::with_ranges(MUTED_SATURATION_RANGE, LIGHT_LIGHTNESS_RANGE);
    /// Desaturated, dark colors.
    pub const DARK_MUTED: Target = Target::with_ranges(MUTED_SATURATION_RANGE, DARK_LIGHTNESS_RANGE);

    /// The six built-in targets, in selection order.
    pub fn defaults() -> Vec<Target> {
        vec![
            Target::LIGHT_VIBRANT,
            Target::VIBRANT,
            Target::DARK_VIBRANT,
            Target::LIGHT_MUTED,
            Target::MUTED,
            Target::DARK_MUTED,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_contain_their_targets() {
        for target in Target::defaults() {
            assert!(target.saturation.contains(target.saturation.target));
            assert!(target.lightness.contains(target.lightness.target));
        }
    }

    #[test]
    fn test_vibrant_excludes_desaturated() {
        assert!(!Target::VIBRANT.saturation.contains(0.2));
        assert!(Target::MUTED.saturation.contains(0.2));
    }
}
