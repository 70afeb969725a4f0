//! Error types for formatting and parsing.

use thiserror::Error;

/// Errors reported by the formatting and parsing entry points.
///
/// Every failure is deterministic given the same inputs; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// The value matches no declared member and, for bitmask types,
	/// decomposes to zero matched members.
	#[error("value {value} is not defined for enum type {type_name}")]
	UndefinedValue {
		/// Name of the type being formatted.
		type_name: &'static str,
		/// The offending raw value.
		value: i64,
	},

	/// The input matches no known display name and, for bitmask types, does
	/// not fully tokenize into recognized flag names.
	#[error("{input:?} does not match any pretty name of {type_name}")]
	ParseFailed {
		/// Name of the type being parsed into.
		type_name: &'static str,
		/// The input that failed to parse.
		input: String,
	},

	/// The input was empty or whitespace-only; rejected before any lookup.
	#[error("cannot parse an empty or blank string")]
	EmptyInput,

	/// A parsed raw value could not be reconstructed by the concrete type.
	/// This indicates a descriptor that declares values the type's
	/// `from_raw` does not accept, which is a contract violation between
	/// the type and its descriptor.
	#[error("parsed value {value} is not representable by {type_name}")]
	Unrepresentable {
		/// Name of the type being parsed into.
		type_name: &'static str,
		/// The raw value produced by the reverse lookup.
		value: i64,
	},
}

/// Result type for formatting and parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
