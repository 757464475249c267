use crate::{RecordError, Resource};
use std::collections::BTreeMap;

/// Read-only copy of the resources defined in the current project,
/// indexed by whatever key the console uses to open the edit dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceCache {
	entries: BTreeMap<String, Resource>,
}

impl ResourceCache {
	/// Parses a JSON object of `key -> record`.
	/// Records that can't be understood are logged and skipped.
	pub fn from_json(json: &str) -> Result<Self, RecordError> {
		let raw = serde_json::from_str::<BTreeMap<String, serde_json::Value>>(json)?;
		let mut entries = BTreeMap::new();
		for (key, value) in raw {
			match serde_json::from_value::<Resource>(value) {
				Ok(resource) => {
					entries.insert(key, resource);
				}
				Err(err) => {
					log::warn!(target: "resource_cache", "Skipping resource {key:?}: {err}");
				}
			}
		}
		Ok(Self { entries })
	}

	pub fn insert(&mut self, key: impl Into<String>, resource: Resource) {
		self.entries.insert(key.into(), resource);
	}

	pub fn get(&self, key: &str) -> Option<&Resource> {
		self.entries.get(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &Resource)> + '_ {
		self.entries.iter()
	}

	/// Returns true if a resource other than the one with id `except_id` is named `name`.
	pub fn is_name_used(&self, name: &str, except_id: Option<&str>) -> bool {
		self.entries
			.values()
			.filter(|resource| Some(resource.id.as_str()) != except_id)
			.any(|resource| resource.name == name)
	}
}

/// Collects resources keyed by their names.
impl FromIterator<Resource> for ResourceCache {
	fn from_iter<T: IntoIterator<Item = Resource>>(iter: T) -> Self {
		let entries = iter.into_iter().map(|resource| (resource.name.clone(), resource));
		Self { entries: entries.collect() }
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::ResourceValue;

	fn resource(id: &str, name: &str) -> Resource {
		Resource {
			id: id.into(),
			name: name.into(),
			enabled: true,
			value: ResourceValue::Infinite,
		}
	}

	#[test]
	fn parse_skips_broken_records() {
		let cache = ResourceCache::from_json(
			r#"{
				"pool1": {"id":"R1","name":"pool1","type":"QUOTED","quota":5},
				"broken": {"name":"broken","type":"limited"}
			}"#,
		)
		.unwrap();
		assert_eq!(cache.len(), 1);
		assert_eq!(cache.get("pool1").map(|r| r.id.as_str()), Some("R1"));
		assert!(cache.get("broken").is_none());
	}

	#[test]
	fn parse_rejects_non_object() {
		assert!(ResourceCache::from_json("[1, 2]").is_err());
	}

	#[test]
	fn name_used_ignores_excluded_id() {
		let cache = ResourceCache::from_iter([resource("R1", "pool1"), resource("R2", "pool2")]);
		assert!(cache.is_name_used("pool1", None));
		assert!(!cache.is_name_used("pool1", Some("R1")));
		assert!(cache.is_name_used("pool2", Some("R1")));
		assert!(!cache.is_name_used("pool3", None));
	}
}
