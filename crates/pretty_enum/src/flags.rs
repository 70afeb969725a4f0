//! Bitmask composition and decomposition.
//!
//! Composition turns a composite value into a separator-joined list of the
//! display names of every declared member whose bits intersect it;
//! decomposition is the inverse, ORing together the values of every
//! recognized token. `parse(format(v)) == v` holds; the formatted order is
//! declaration order, not input order.

use crate::cache::TypeCache;
use crate::descriptor::EnumDescriptor;

/// Joins the display names of all members intersecting `value`.
///
/// Members are scanned in declaration order and selected when
/// `(value & member.value) != 0`; overlapping bit patterns may therefore
/// produce redundant entries, which are kept as-is. Zero-valued members
/// never match here; they are only reachable through the exact-equality
/// path in the facade. Returns `None` when no member matches, which the
/// caller reports as an undefined value.
pub(crate) fn compose(
	descriptor: &EnumDescriptor,
	cache: &TypeCache,
	value: i64,
	separator: &str,
) -> Option<String> {
	let mut parts: Vec<&str> = Vec::new();

	for member in descriptor.members() {
		if member.value() != 0
			&& value & member.value() != 0
			&& let Some(name) = cache.single_name(member.value())
		{
			parts.push(name);
		}
	}

	if parts.is_empty() { None } else { Some(parts.join(separator)) }
}

/// Parses a separator-delimited list of flag names back into a raw value.
///
/// The input is split on the literal separator with no trimming; every
/// token must resolve through the single-value reverse lookup or the whole
/// parse fails.
pub(crate) fn decompose(cache: &TypeCache, input: &str, separator: &str) -> Option<i64> {
	let mut bits = 0i64;
	for token in input.split(separator) {
		bits |= cache.lookup_single(token)?;
	}
	Some(bits)
}
