/* src/metrics/castorice.rs */

use serde::Deserialize;

/// Castorice's own contribution to the combined HP pool.
pub const CASTORICE_BASE_HP: f64 = 9000.0;

/// Newbud energy required before the ultimate becomes available.
pub const NEWBUD_THRESHOLD: f64 = 34000.0;

/// One row of the castorice ultimate-charge dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastoriceRow {
	pub character: String,
	pub combined_allies_hp: f64,
	pub skill_count_before_getting_ult: f64,
	pub heal_count_before_getting_ult: f64,
}

/// A [`CastoriceRow`] with chart-ready derived columns.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancedCastoriceRow {
	pub row: CastoriceRow,
	/// Skill plus heal actions taken before the ultimate charged.
	pub total_actions: f64,
	/// Average newbud energy earned per action.
	pub energy_per_action: f64,
	/// Axis label for the HP pool, e.g. `"21k"`.
	pub hp_label: String,
}

/// Summary of a band of rows, expressed per teammate.
///
/// Teammate HP assumes the pool is Castorice's base HP plus three equal
/// teammates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeammateHpStats {
	pub min_actions: f64,
	pub max_actions: f64,
	pub average_actions: f64,
	pub min_teammate_hp: f64,
	pub max_teammate_hp: f64,
	pub avg_teammate_hp: f64,
}

/// Band summaries over the low / optimal / high HP pools, plus the relative
/// change in average action count against the low band.
#[derive(Debug, Clone, PartialEq)]
pub struct HpRangeStats {
	pub low: TeammateHpStats,
	pub optimal: TeammateHpStats,
	pub high: TeammateHpStats,
	pub optimal_change: f64,
	pub high_change: f64,
}

/// Adds the derived chart columns to each row.
pub fn enhance(rows: &[CastoriceRow]) -> Vec<EnhancedCastoriceRow> {
	rows.iter()
		.map(|row| {
			let total_actions =
				row.skill_count_before_getting_ult + row.heal_count_before_getting_ult;
			EnhancedCastoriceRow {
				total_actions,
				energy_per_action: NEWBUD_THRESHOLD / total_actions,
				hp_label: format!("{:.0}k", row.combined_allies_hp / 1000.0),
				row: row.clone(),
			}
		})
		.collect()
}

/// Summarizes one band of enhanced rows. An empty band yields zeroed stats.
pub fn teammate_hp_stats(band: &[EnhancedCastoriceRow]) -> TeammateHpStats {
	if band.is_empty() {
		return TeammateHpStats::default();
	}

	let teammate_hp =
		|row: &EnhancedCastoriceRow| (row.row.combined_allies_hp - CASTORICE_BASE_HP) / 3.0;

	let mut stats = TeammateHpStats {
		min_actions: f64::INFINITY,
		max_actions: f64::NEG_INFINITY,
		min_teammate_hp: f64::INFINITY,
		max_teammate_hp: f64::NEG_INFINITY,
		..TeammateHpStats::default()
	};

	for row in band {
		stats.min_actions = stats.min_actions.min(row.total_actions);
		stats.max_actions = stats.max_actions.max(row.total_actions);
		stats.average_actions += row.total_actions;

		let hp = teammate_hp(row);
		stats.min_teammate_hp = stats.min_teammate_hp.min(hp);
		stats.max_teammate_hp = stats.max_teammate_hp.max(hp);
		stats.avg_teammate_hp += hp;
	}

	let len = band.len() as f64;
	stats.average_actions /= len;
	stats.avg_teammate_hp = (stats.avg_teammate_hp / len).round();
	stats.min_teammate_hp = stats.min_teammate_hp.round();
	stats.max_teammate_hp = stats.max_teammate_hp.round();
	stats
}

/// Summarizes the three HP bands the analysis narrates: 15–19k, 20–26k and
/// 27–33k combined HP.
pub fn hp_range_stats(rows: &[EnhancedCastoriceRow]) -> HpRangeStats {
	let band = |lo: f64, hi: f64| {
		rows.iter()
			.filter(|r| r.row.combined_allies_hp >= lo && r.row.combined_allies_hp <= hi)
			.cloned()
			.collect::<Vec<_>>()
	};

	let low = teammate_hp_stats(&band(15000.0, 19000.0));
	let optimal = teammate_hp_stats(&band(20000.0, 26000.0));
	let high = teammate_hp_stats(&band(27000.0, 33000.0));

	let optimal_change =
		((optimal.average_actions - low.average_actions) / low.average_actions).abs();
	let high_change = ((high.average_actions - low.average_actions) / low.average_actions).abs();

	HpRangeStats {
		low,
		optimal,
		high,
		optimal_change,
		high_change,
	}
}
