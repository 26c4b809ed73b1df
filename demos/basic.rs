/* demos/basic.rs */

use std::fs;

use chartfeed::metrics::hyacine::{self, HyacineRow};
use chartfeed::{Feed, FileSource};

const CSV_PATH: &str = "demo_hyacine.csv";

const CSV_BODY: &str = "\
character,speed,increased_outgoing_healing,base_speed,speed_after_minor_traces,speed_after_signature_lightcone,speed_after_relics_and_planetary_sets
hyacine,250,0.5,110,124,225,201
";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 0. Prepare a real file
	if std::path::Path::new(CSV_PATH).exists() {
		fs::remove_file(CSV_PATH)?;
	}
	fs::write(CSV_PATH, CSV_BODY)?;
	println!("Created {CSV_PATH}");

	// 1. Build a feed over the current directory with a metrics hook
	let feed = Feed::<HyacineRow>::builder()
		.source(FileSource::new("."))
		.locator(CSV_PATH)
		.on_loaded(|rows| {
			if let Some(metrics) = hyacine::speed_metrics(rows) {
				println!(
					"Speed progression: {:.0} -> {:.0} -> {:.0} -> {:.0}",
					metrics.base_speed,
					metrics.with_traces,
					metrics.with_relics,
					metrics.with_lightcone
				);
			}
		})
		.build()?;

	// 2. Subscribe, then run one load cycle
	let mut events = feed.subscribe();
	let state = feed.load().await;

	for row in state.data() {
		println!(
			"{} at speed {:.0}: +{:.0}% outgoing healing",
			row.character,
			row.speed,
			hyacine::healing_bonus_at_speed(row.speed) * 100.0
		);
	}

	// 3. Drain the committed transitions
	while let Ok(event) = events.try_recv() {
		println!("event: {event:?}");
	}

	// Cleanup
	fs::remove_file(CSV_PATH)?;
	println!("Done.");
	Ok(())
}
