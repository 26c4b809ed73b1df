/* src/metrics/ruanmei.rs */

use serde::Deserialize;

/// Break effect at which the A6 bonus starts, as a percentage.
pub const BREAK_EFFECT_THRESHOLD_PERCENT: f64 = 120.0;
/// Break effect at which the A6 bonus starts, as a ratio.
pub const BREAK_EFFECT_THRESHOLD: f64 = 1.2;
/// Cap on the additional damage from A6.
pub const MAX_ADDITIONAL_DAMAGE: f64 = 0.36;
/// Additional damage gained per 10% break effect over the threshold.
pub const DAMAGE_PER_TEN_PERCENT: f64 = 0.06;

/// One row of the ruanmei break-effect dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuanMeiRow {
	pub character: String,
	pub break_effect: f64,
	pub break_effect_percentage: f64,
	pub base_skill_dmg_increase: f64,
	pub additional_dmg_from_a6: f64,
	pub total_skill_dmg_increase: f64,
}

/// Headline numbers for the break-effect analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakEffectMetrics {
	pub threshold_break_effect: f64,
	pub threshold_percentage: f64,
	pub max_additional_damage: f64,
	pub damage_per_ten_percent: f64,
	/// Largest total skill damage increase observed in the data.
	pub max_total_damage: f64,
	/// Skill damage increase before any A6 contribution.
	pub base_damage: f64,
}

/// Rows grouped into the bands the analysis narrates.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakEffectRanges {
	/// 100% to just under the 120% threshold.
	pub low: Vec<RuanMeiRow>,
	/// 120% to 130%, where A6 starts paying off.
	pub threshold: Vec<RuanMeiRow>,
	/// 150% to 180%, the realistic gearing target.
	pub optimal: Vec<RuanMeiRow>,
	/// 180% to 200%, where the bonus saturates.
	pub max: Vec<RuanMeiRow>,
}

/// Headline metrics from the dataset. Returns `None` when it is empty.
pub fn break_effect_metrics(rows: &[RuanMeiRow]) -> Option<BreakEffectMetrics> {
	let first = rows.first()?;

	let max_total_damage = rows
		.iter()
		.map(|row| row.total_skill_dmg_increase)
		.fold(f64::NEG_INFINITY, f64::max);

	Some(BreakEffectMetrics {
		threshold_break_effect: BREAK_EFFECT_THRESHOLD,
		threshold_percentage: BREAK_EFFECT_THRESHOLD_PERCENT,
		max_additional_damage: MAX_ADDITIONAL_DAMAGE,
		damage_per_ten_percent: DAMAGE_PER_TEN_PERCENT,
		max_total_damage,
		base_damage: first.base_skill_dmg_increase,
	})
}

/// Splits rows into the narrated break-effect bands.
pub fn break_effect_ranges(rows: &[RuanMeiRow]) -> BreakEffectRanges {
	let band = |lo: f64, hi_exclusive: bool, hi: f64| {
		rows.iter()
			.filter(|r| {
				let p = r.break_effect_percentage;
				p >= lo && if hi_exclusive { p < hi } else { p <= hi }
			})
			.cloned()
			.collect::<Vec<_>>()
	};

	BreakEffectRanges {
		low: band(100.0, true, BREAK_EFFECT_THRESHOLD_PERCENT),
		threshold: band(BREAK_EFFECT_THRESHOLD_PERCENT, false, 130.0),
		optimal: band(150.0, false, 180.0),
		max: band(180.0, false, 200.0),
	}
}

/// Formats a break-effect ratio for display, e.g. `1.2` as `"120%"`.
pub fn format_break_effect(value: f64) -> String {
	format!("{:.0}%", value * 100.0)
}

/// Formats a damage-increase ratio for display, e.g. `0.365` as `"36.5%"`.
pub fn format_damage_increase(value: f64) -> String {
	format!("{:.1}%", value * 100.0)
}
