/* src/metrics/hyacine.rs */

use serde::Deserialize;

/// Speed at which the healing bonus starts scaling.
pub const HEALING_THRESHOLD: f64 = 200.0;

/// One row of the hyacine speed dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HyacineRow {
	pub character: String,
	pub speed: f64,
	pub increased_outgoing_healing: f64,
	pub base_speed: f64,
	pub speed_after_minor_traces: f64,
	pub speed_after_signature_lightcone: f64,
	pub speed_after_relics_and_planetary_sets: f64,
}

/// Speed progression across gear stages, with absolute deltas and relative
/// gains per stage.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedMetrics {
	pub base_speed: f64,
	pub with_traces: f64,
	pub with_relics: f64,
	pub with_lightcone: f64,
	/// Relative gain of each stage over the previous one.
	pub trace_gain: f64,
	pub relics_gain: f64,
	pub lightcone_gain: f64,
	/// Absolute speed added by each stage.
	pub from_traces: f64,
	pub from_relics: f64,
	pub from_lightcone: f64,
}

/// Stage-by-stage speed gains, read off the first row of the dataset.
///
/// The gear columns repeat per row, so one row carries the whole
/// progression. Returns `None` for an empty dataset.
pub fn speed_metrics(rows: &[HyacineRow]) -> Option<SpeedMetrics> {
	let first = rows.first()?;

	let base_speed = first.base_speed;
	let with_traces = first.speed_after_minor_traces;
	let with_relics = first.speed_after_relics_and_planetary_sets;
	let with_lightcone = first.speed_after_signature_lightcone;

	Some(SpeedMetrics {
		base_speed,
		with_traces,
		with_relics,
		with_lightcone,
		trace_gain: (with_traces - base_speed) / base_speed,
		relics_gain: (with_relics - with_traces) / with_traces,
		lightcone_gain: (with_lightcone - with_relics) / with_relics,
		from_traces: with_traces - base_speed,
		from_relics: with_relics - with_traces,
		from_lightcone: with_lightcone - with_relics,
	})
}

/// Healing bonus granted at the given speed: 1% per point over the
/// threshold, nothing at or below it.
pub fn healing_bonus_at_speed(speed: f64) -> f64 {
	if speed <= HEALING_THRESHOLD {
		return 0.0;
	}
	(speed - HEALING_THRESHOLD) / 100.0
}

/// Speed still missing to reach the healing threshold.
pub fn remaining_speed_to_threshold(speed: f64) -> f64 {
	if speed >= HEALING_THRESHOLD {
		return 0.0;
	}
	HEALING_THRESHOLD - speed
}
