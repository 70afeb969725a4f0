//! Naming strategy selection for a single declared member.
//!
//! Exactly one strategy applies per member, picked by fixed precedence:
//! suppress (type- or member-level), explicit name, description text, then
//! computed segmentation. The result is a pure function of the descriptor,
//! so it is cached per type by [`crate::cache`].

use crate::descriptor::{EnumDescriptor, Member};
use crate::segment::segment;

fn non_blank(text: Option<&'static str>) -> Option<&'static str> {
	text.filter(|t| !t.trim().is_empty())
}

/// Resolves the display name for one member of `descriptor`.
pub(crate) fn resolve(descriptor: &EnumDescriptor, member: &Member) -> String {
	let overrides = member.overrides();

	if descriptor.suppresses_formatting() || overrides.suppress {
		return member.ident().to_string();
	}

	if let Some(name) = non_blank(overrides.name) {
		return name.to_string();
	}

	if let Some(description) = non_blank(overrides.description) {
		return description.to_string();
	}

	let preserve_case = descriptor.preserves_case() || overrides.preserve_case;

	// Underscore-delimited segments are segmented independently, then all
	// resulting words joined with single spaces.
	let mut words = Vec::new();
	for part in member.ident().split('_').filter(|p| !p.is_empty()) {
		words.extend(segment(part, preserve_case));
	}
	words.join(" ")
}
