/* tests/metrics_tests.rs */

use chartfeed::metrics::{castorice, hyacine, ruanmei};

fn approx(left: f64, right: f64) {
	assert!(
		(left - right).abs() < 1e-9,
		"expected {right}, got {left}"
	);
}

fn hyacine_row(base: f64, traces: f64, relics: f64, lightcone: f64) -> hyacine::HyacineRow {
	hyacine::HyacineRow {
		character: "hyacine".to_string(),
		speed: relics,
		increased_outgoing_healing: 0.0,
		base_speed: base,
		speed_after_minor_traces: traces,
		speed_after_signature_lightcone: lightcone,
		speed_after_relics_and_planetary_sets: relics,
	}
}

#[test]
fn test_hyacine_speed_metrics() {
	let rows = vec![hyacine_row(100.0, 110.0, 150.0, 170.0)];
	let metrics = hyacine::speed_metrics(&rows).unwrap();

	assert_eq!(metrics.base_speed, 100.0);
	assert_eq!(metrics.with_traces, 110.0);
	assert_eq!(metrics.with_relics, 150.0);
	assert_eq!(metrics.with_lightcone, 170.0);

	assert_eq!(metrics.from_traces, 10.0);
	assert_eq!(metrics.from_relics, 40.0);
	assert_eq!(metrics.from_lightcone, 20.0);

	approx(metrics.trace_gain, 0.1);
	approx(metrics.relics_gain, 40.0 / 110.0);
	approx(metrics.lightcone_gain, 20.0 / 150.0);
}

#[test]
fn test_hyacine_empty_dataset_has_no_metrics() {
	assert!(hyacine::speed_metrics(&[]).is_none());
}

#[test]
fn test_hyacine_healing_bonus_thresholds() {
	assert_eq!(hyacine::healing_bonus_at_speed(180.0), 0.0);
	assert_eq!(hyacine::healing_bonus_at_speed(hyacine::HEALING_THRESHOLD), 0.0);
	approx(hyacine::healing_bonus_at_speed(250.0), 0.5);

	assert_eq!(hyacine::remaining_speed_to_threshold(180.0), 20.0);
	assert_eq!(hyacine::remaining_speed_to_threshold(210.0), 0.0);
}

fn castorice_row(hp: f64, skills: f64, heals: f64) -> castorice::CastoriceRow {
	castorice::CastoriceRow {
		character: "castorice".to_string(),
		combined_allies_hp: hp,
		skill_count_before_getting_ult: skills,
		heal_count_before_getting_ult: heals,
	}
}

#[test]
fn test_castorice_enhance_derives_chart_columns() {
	let enhanced = castorice::enhance(&[castorice_row(15000.0, 10.0, 2.0)]);

	assert_eq!(enhanced.len(), 1);
	assert_eq!(enhanced[0].total_actions, 12.0);
	approx(enhanced[0].energy_per_action, castorice::NEWBUD_THRESHOLD / 12.0);
	assert_eq!(enhanced[0].hp_label, "15k");
}

#[test]
fn test_castorice_teammate_hp_stats() {
	let enhanced = castorice::enhance(&[
		castorice_row(15000.0, 10.0, 2.0),
		castorice_row(21000.0, 8.0, 2.0),
	]);
	let stats = castorice::teammate_hp_stats(&enhanced);

	assert_eq!(stats.min_actions, 10.0);
	assert_eq!(stats.max_actions, 12.0);
	approx(stats.average_actions, 11.0);
	assert_eq!(stats.min_teammate_hp, 2000.0);
	assert_eq!(stats.max_teammate_hp, 4000.0);
	assert_eq!(stats.avg_teammate_hp, 3000.0);
}

#[test]
fn test_castorice_empty_band_is_zeroed() {
	assert_eq!(
		castorice::teammate_hp_stats(&[]),
		castorice::TeammateHpStats::default()
	);
}

#[test]
fn test_castorice_hp_range_stats() {
	let enhanced = castorice::enhance(&[
		castorice_row(15000.0, 10.0, 2.0),
		castorice_row(21000.0, 8.0, 2.0),
		castorice_row(29000.0, 6.0, 2.0),
	]);
	let stats = castorice::hp_range_stats(&enhanced);

	approx(stats.low.average_actions, 12.0);
	approx(stats.optimal.average_actions, 10.0);
	approx(stats.high.average_actions, 8.0);
	assert_eq!(stats.high.avg_teammate_hp, 6667.0);

	approx(stats.optimal_change, 2.0 / 12.0);
	approx(stats.high_change, 4.0 / 12.0);
}

fn ruanmei_row(pct: f64, a6: f64, total: f64) -> ruanmei::RuanMeiRow {
	ruanmei::RuanMeiRow {
		character: "ruanmei".to_string(),
		break_effect: pct / 100.0,
		break_effect_percentage: pct,
		base_skill_dmg_increase: 0.32,
		additional_dmg_from_a6: a6,
		total_skill_dmg_increase: total,
	}
}

#[test]
fn test_ruanmei_break_effect_metrics() {
	let rows = vec![
		ruanmei_row(100.0, 0.0, 0.32),
		ruanmei_row(160.0, 0.24, 0.56),
		ruanmei_row(200.0, 0.36, 0.68),
	];
	let metrics = ruanmei::break_effect_metrics(&rows).unwrap();

	assert_eq!(metrics.base_damage, 0.32);
	assert_eq!(metrics.max_total_damage, 0.68);
	assert_eq!(metrics.threshold_percentage, 120.0);
	assert_eq!(metrics.threshold_break_effect, 1.2);
	assert_eq!(metrics.max_additional_damage, 0.36);
	assert_eq!(metrics.damage_per_ten_percent, 0.06);

	assert!(ruanmei::break_effect_metrics(&[]).is_none());
}

#[test]
fn test_ruanmei_band_boundaries() {
	let rows = vec![
		ruanmei_row(100.0, 0.0, 0.32),
		ruanmei_row(120.0, 0.0, 0.32),
		ruanmei_row(160.0, 0.24, 0.56),
		ruanmei_row(200.0, 0.36, 0.68),
	];
	let ranges = ruanmei::break_effect_ranges(&rows);

	// 120% sits in the threshold band, not the low band.
	assert_eq!(ranges.low.len(), 1);
	assert_eq!(ranges.low[0].break_effect_percentage, 100.0);
	assert_eq!(ranges.threshold.len(), 1);
	assert_eq!(ranges.threshold[0].break_effect_percentage, 120.0);
	assert_eq!(ranges.optimal.len(), 1);
	assert_eq!(ranges.max.len(), 1);
}

#[test]
fn test_ruanmei_display_formatting() {
	assert_eq!(ruanmei::format_break_effect(1.2), "120%");
	assert_eq!(ruanmei::format_damage_increase(0.365), "36.5%");
	assert_eq!(ruanmei::format_damage_increase(0.06), "6.0%");
}
