/* tests/integration.rs */

use std::sync::{Arc, Mutex};

use chartfeed::metrics::hyacine::{self, HyacineRow, SpeedMetrics};
use chartfeed::{Feed, FileSource};

const HYACINE_CSV: &str = "\
character,speed,increased_outgoing_healing,base_speed,speed_after_minor_traces,speed_after_signature_lightcone,speed_after_relics_and_planetary_sets
hyacine,200,0.0,110,124,225,201
hyacine,250,0.5,110,124,225,201
";

#[tokio::test]
async fn test_file_feed_with_metrics_hook() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	tokio::fs::write(dir.path().join("hyacine.csv"), HYACINE_CSV).await?;

	let metrics: Arc<Mutex<Option<SpeedMetrics>>> = Arc::new(Mutex::new(None));

	let feed = Feed::<HyacineRow>::builder()
		.source(FileSource::new(dir.path()))
		.locator("/hyacine.csv")
		.on_loaded({
			let metrics = metrics.clone();
			move |rows| {
				*metrics.lock().unwrap() = hyacine::speed_metrics(rows);
			}
		})
		.build()?;

	let state = feed.load().await;
	assert!(state.is_ready());
	assert_eq!(state.data().len(), 2);
	assert_eq!(state.data()[1].speed, 250.0);

	let metrics = metrics.lock().unwrap().clone().expect("hook ran");
	assert_eq!(metrics.base_speed, 110.0);
	assert_eq!(metrics.from_traces, 14.0);
	assert_eq!(metrics.from_relics, 77.0);
	assert_eq!(metrics.from_lightcone, 24.0);

	// The healing bonus only starts over the threshold.
	assert_eq!(hyacine::healing_bonus_at_speed(state.data()[0].speed), 0.0);
	assert_eq!(hyacine::healing_bonus_at_speed(state.data()[1].speed), 0.5);

	Ok(())
}

#[tokio::test]
async fn test_locator_swap_reloads_new_resource() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	tokio::fs::write(dir.path().join("one.csv"), "a,b\n1,2").await?;
	tokio::fs::write(dir.path().join("two.csv"), "a,b\n3,4").await?;

	#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
	struct Row {
		a: i64,
		b: i64,
	}

	let feed: Feed<Row> = Feed::new(FileSource::new(dir.path()), "one.csv");
	let state = feed.load().await;
	assert_eq!(state.data().to_vec(), vec![Row { a: 1, b: 2 }]);

	feed.set_locator("two.csv");
	assert_eq!(*feed.locator(), "two.csv");
	let state = feed.load().await;
	assert_eq!(state.data().to_vec(), vec![Row { a: 3, b: 4 }]);

	Ok(())
}
