/* src/loader/records.rs */

use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// Parses a CSV body into typed records.
///
/// The first row provides field names, blank lines are skipped, and cell
/// typing follows the record type's fields via serde. Any reader or
/// deserialization failure maps to [`LoadError::Parse`].
pub fn parse_records<T>(text: &str) -> Result<Vec<T>, LoadError>
where
	T: DeserializeOwned,
{
	let mut reader = csv::ReaderBuilder::new()
		.has_headers(true)
		.trim(csv::Trim::All)
		.from_reader(text.as_bytes());

	let mut records = Vec::new();
	for row in reader.deserialize::<T>() {
		records.push(row.map_err(|e| LoadError::parse(e.to_string()))?);
	}
	Ok(records)
}
