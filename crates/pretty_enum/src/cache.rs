//! Per-type display-name caches and the process-wide cache registry.
//!
//! The registry maps a `TypeId` to that type's [`TypeCache`], constructed
//! lazily on the first format or parse call and kept until explicitly
//! cleared. Name resolution is a pure function of static metadata, so two
//! threads racing to build the same cache produce identical results and
//! last-writer-wins insertion is safe.

use std::any::TypeId;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::PrettyEnum;
use crate::descriptor::EnumDescriptor;
use crate::resolve::resolve;

/// Memoized display names for one type.
pub(crate) struct TypeCache {
	/// Pretty names in declaration order.
	names: Vec<String>,
	/// Member value to display name. Duplicate underlying values collapse
	/// to one entry; the last-resolved name wins.
	forward: FxHashMap<i64, String>,
	/// Display name back to member value.
	reverse: FxHashMap<String, i64>,
	/// Raw identifier back to member value, the literal fallback for parse.
	idents: FxHashMap<&'static str, i64>,
	/// (composite value, separator) to joined display string, on demand.
	multi: RwLock<FxHashMap<(i64, String), String>>,
}

impl TypeCache {
	/// Resolves every member's display name up front and indexes both
	/// directions.
	pub(crate) fn build(descriptor: &EnumDescriptor) -> Self {
		let members = descriptor.members();
		let mut names = Vec::with_capacity(members.len());
		let mut forward = FxHashMap::default();
		let mut reverse = FxHashMap::default();
		let mut idents = FxHashMap::default();

		for member in members {
			let pretty = resolve(descriptor, member);
			forward.insert(member.value(), pretty.clone());
			reverse.insert(pretty.clone(), member.value());
			idents.insert(member.ident(), member.value());
			names.push(pretty);
		}

		tracing::trace!(
			type_name = descriptor.type_name(),
			members = names.len(),
			"built display-name cache"
		);

		Self {
			names,
			forward,
			reverse,
			idents,
			multi: RwLock::new(FxHashMap::default()),
		}
	}

	/// Pretty names in declaration order.
	pub(crate) fn names(&self) -> &[String] {
		&self.names
	}

	/// Looks up the display name of an exact single-member value.
	pub(crate) fn single_name(&self, value: i64) -> Option<&str> {
		self.forward.get(&value).map(String::as_str)
	}

	/// Reverse lookup: display name first, then raw identifier fallback.
	pub(crate) fn lookup_single(&self, name: &str) -> Option<i64> {
		self.reverse.get(name).copied().or_else(|| self.idents.get(name).copied())
	}

	/// Returns a memoized multi-flag string, if one was composed before.
	pub(crate) fn multi_get(&self, value: i64, separator: &str) -> Option<String> {
		self.multi.read().get(&(value, separator.to_owned())).cloned()
	}

	/// Memoizes a composed multi-flag string.
	pub(crate) fn multi_insert(&self, value: i64, separator: &str, name: String) {
		self.multi.write().insert((value, separator.to_owned()), name);
	}

	/// Wipes only the composite-value map.
	pub(crate) fn clear_multi(&self) {
		self.multi.write().clear();
	}
}

static REGISTRY: LazyLock<RwLock<FxHashMap<TypeId, Arc<TypeCache>>>> =
	LazyLock::new(|| RwLock::new(FxHashMap::default()));

/// Returns the cache for `T`, building it on first access.
pub(crate) fn cache_for<T: PrettyEnum>() -> Arc<TypeCache> {
	if let Some(cache) = REGISTRY.read().get(&TypeId::of::<T>()) {
		return Arc::clone(cache);
	}

	// Built outside the write lock; a racing thread may build the same
	// cache, and whichever entry lands first stays.
	let cache = Arc::new(TypeCache::build(T::descriptor()));
	let mut registry = REGISTRY.write();
	Arc::clone(registry.entry(TypeId::of::<T>()).or_insert(cache))
}

/// Drops all cached names for `T`. The next format or parse call rebuilds
/// them from the descriptor. Intended for test isolation when override
/// metadata changes at runtime, not for steady-state use.
pub fn clear_cache<T: PrettyEnum>() {
	if REGISTRY.write().remove(&TypeId::of::<T>()).is_some() {
		tracing::debug!(type_name = T::descriptor().type_name(), "cleared display-name cache");
	}
}

/// Wipes only the memoized composite-value strings for `T`, keeping the
/// single-value names.
pub fn clear_multi_flag_cache<T: PrettyEnum>() {
	if let Some(cache) = REGISTRY.read().get(&TypeId::of::<T>()) {
		cache.clear_multi();
	}
}

/// Drops every type's cache.
pub fn clear_all_caches() {
	REGISTRY.write().clear();
	tracing::debug!("cleared all display-name caches");
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::descriptor::MemberOverrides;

	fn sample_descriptor() -> EnumDescriptor {
		EnumDescriptor::builder("Sample")
			.member("FirstValue", 1)
			.member_with("SecondValue", 2, MemberOverrides::NONE.name("Second"))
			.member_with("Hidden", 4, MemberOverrides::NONE.raw())
			.build()
	}

	#[test]
	fn test_forward_and_reverse_agree() {
		let cache = TypeCache::build(&sample_descriptor());

		assert_eq!(cache.single_name(1), Some("First Value"));
		assert_eq!(cache.single_name(2), Some("Second"));
		assert_eq!(cache.single_name(4), Some("Hidden"));
		assert_eq!(cache.single_name(8), None);

		assert_eq!(cache.lookup_single("First Value"), Some(1));
		assert_eq!(cache.lookup_single("Second"), Some(2));
		assert_eq!(cache.lookup_single("Hidden"), Some(4));
		assert_eq!(cache.lookup_single("Nope"), None);
	}

	#[test]
	fn test_identifier_fallback_lookup() {
		let cache = TypeCache::build(&sample_descriptor());

		// The raw identifier is accepted even when the display name differs.
		assert_eq!(cache.lookup_single("FirstValue"), Some(1));
		assert_eq!(cache.lookup_single("SecondValue"), Some(2));
	}

	#[test]
	fn test_names_in_declaration_order() {
		let cache = TypeCache::build(&sample_descriptor());
		assert_eq!(cache.names(), ["First Value", "Second", "Hidden"]);
	}

	// Duplicate underlying values collapse to one forward entry with the
	// last-resolved name. This mirrors the reference behavior; see
	// DESIGN.md before relying on the precedence.
	#[test]
	fn test_duplicate_values_collapse_to_last_declared() {
		let descriptor = EnumDescriptor::builder("Dup")
			.member("FirstAlias", 1)
			.member("SecondAlias", 1)
			.build();
		let cache = TypeCache::build(&descriptor);

		assert_eq!(cache.single_name(1), Some("Second Alias"));
		// Both display names still parse back to the shared value.
		assert_eq!(cache.lookup_single("First Alias"), Some(1));
		assert_eq!(cache.lookup_single("Second Alias"), Some(1));
	}

	#[test]
	fn test_multi_flag_memoization() {
		let cache = TypeCache::build(&sample_descriptor());

		assert_eq!(cache.multi_get(3, " | "), None);
		cache.multi_insert(3, " | ", "First Value | Second".to_string());
		assert_eq!(cache.multi_get(3, " | ").as_deref(), Some("First Value | Second"));
		// Keyed by separator too.
		assert_eq!(cache.multi_get(3, ", "), None);

		cache.clear_multi();
		assert_eq!(cache.multi_get(3, " | "), None);
	}

	#[test]
	fn test_concurrent_readers_and_writers() {
		let cache = TypeCache::build(&sample_descriptor());

		std::thread::scope(|scope| {
			for i in 0..8 {
				let cache = &cache;
				scope.spawn(move || {
					for _ in 0..100 {
						cache.multi_insert(3, " | ", "First Value | Second".to_string());
						if let Some(joined) = cache.multi_get(3, " | ") {
							assert_eq!(joined, "First Value | Second");
						}
						assert_eq!(cache.single_name(1), Some("First Value"));
					}
					i
				});
			}
		});
	}
}
