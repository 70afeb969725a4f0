//! Human-readable display names for enum and bitflag values, with
//! round-trip parsing.
//!
//! Identifiers are segmented at case, digit, and underscore boundaries and
//! title-cased (`PascalCase` becomes `"Pascal Case"`, `UPPER_SNAKE_CASE`
//! becomes `"Upper Snake Case"`), with per-member and per-type overrides for
//! explicit names, description text, raw passthrough, and case
//! preservation. Bitmask types format composite values as separator-joined
//! flag lists and parse them back, so `parse(format(v)) == v`.
//!
//! Types are declared with [`pretty_enum!`], which generates the type and
//! its [`EnumDescriptor`] in one place, or registered explicitly through
//! [`EnumDescriptor::builder`]. Display names are memoized per type in a
//! process-wide cache; [`clear_cache`] exists for test isolation.
//!
//! ```ignore
//! pretty_enum! {
//! 	pub struct Channels: u8 {
//! 		const FrontLeft = 1;
//! 		const FrontRight = 2;
//! 	}
//! }
//!
//! let both = Channels::FrontLeft | Channels::FrontRight;
//! assert_eq!(pretty_print(both).unwrap(), "Front Left | Front Right");
//! assert_eq!(parse::<Channels>("Front Left | Front Right").unwrap(), both);
//! ```

mod cache;
mod descriptor;
mod error;
mod flags;
mod macros;
mod resolve;
mod segment;

pub use cache::{clear_all_caches, clear_cache, clear_multi_flag_cache};
pub use descriptor::{DescriptorBuilder, EnumDescriptor, Member, MemberOverrides};
pub use error::{Error, Result};

#[doc(hidden)]
pub use bitflags;

/// The default separator between flag names: exactly `" | "`.
pub const DEFAULT_FLAG_SEPARATOR: &str = " | ";

/// A type with a pretty-name descriptor.
///
/// Implemented by [`pretty_enum!`]; a hand-written impl must keep
/// [`descriptor`](PrettyEnum::descriptor), [`raw_value`](PrettyEnum::raw_value),
/// and [`from_raw`](PrettyEnum::from_raw) mutually consistent: every declared
/// member value must survive the `raw_value`/`from_raw` round trip, and
/// bitmask types must additionally accept any OR of declared member values.
pub trait PrettyEnum: Copy + 'static {
	/// Returns the descriptor table for this type.
	fn descriptor() -> &'static EnumDescriptor;

	/// Returns the underlying integer value.
	fn raw_value(self) -> i64;

	/// Reconstructs a value from its underlying integer, or `None` if this
	/// type cannot represent it.
	fn from_raw(raw: i64) -> Option<Self>;

	/// Formats this value with the default flag separator. See
	/// [`pretty_print`].
	fn pretty_print(self) -> Result<String> {
		pretty_print(self)
	}

	/// Formats this value with a custom flag separator. See
	/// [`pretty_print_with`].
	fn pretty_print_with(self, separator: &str) -> Result<String> {
		pretty_print_with(self, separator)
	}

	/// Formats this value, rendering undefined values as a sentinel string.
	/// See [`pretty_print_lossy`].
	fn pretty_print_lossy(self, separator: &str) -> String {
		pretty_print_lossy(self, separator)
	}
}

/// Formats `value` as its display name, joining flags with
/// [`DEFAULT_FLAG_SEPARATOR`].
///
/// # Errors
///
/// Returns [`Error::UndefinedValue`] if `value` matches no declared member
/// and, for bitmask types, decomposes to zero matched members.
pub fn pretty_print<T: PrettyEnum>(value: T) -> Result<String> {
	pretty_print_with(value, DEFAULT_FLAG_SEPARATOR)
}

/// Formats `value` as its display name, joining flags with `separator`.
///
/// An exact single-member match takes precedence over flag decomposition,
/// even for bitmask types.
///
/// # Errors
///
/// Returns [`Error::UndefinedValue`] if `value` matches no declared member
/// and, for bitmask types, decomposes to zero matched members.
pub fn pretty_print_with<T: PrettyEnum>(value: T, separator: &str) -> Result<String> {
	let descriptor = T::descriptor();
	let cache = cache::cache_for::<T>();
	let raw = value.raw_value();

	if let Some(name) = cache.single_name(raw) {
		return Ok(name.to_string());
	}

	if descriptor.is_bitmask() {
		if let Some(joined) = cache.multi_get(raw, separator) {
			return Ok(joined);
		}
		if let Some(joined) = flags::compose(descriptor, &cache, raw, separator) {
			cache.multi_insert(raw, separator, joined.clone());
			return Ok(joined);
		}
	}

	Err(Error::UndefinedValue {
		type_name: descriptor.type_name(),
		value: raw,
	})
}

/// Formats `value` like [`pretty_print_with`], but renders an undefined
/// value as the sentinel string `Undefined[<raw-value>]` instead of failing.
pub fn pretty_print_lossy<T: PrettyEnum>(value: T, separator: &str) -> String {
	pretty_print_with(value, separator)
		.unwrap_or_else(|_| format!("Undefined[{}]", value.raw_value()))
}

/// Parses a display name back into a value, splitting flag lists on
/// [`DEFAULT_FLAG_SEPARATOR`].
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse<T: PrettyEnum>(input: &str) -> Result<T> {
	parse_with(input, DEFAULT_FLAG_SEPARATOR)
}

/// Parses a display name back into a value, splitting flag lists on the
/// literal `separator`.
///
/// The whole input is first matched as a single display name (or raw
/// identifier); for bitmask types the input is then split on `separator`
/// and every token must resolve. Token order does not affect the resulting
/// value.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for blank input (rejected before any
/// lookup), [`Error::ParseFailed`] when the input matches nothing, and
/// [`Error::Unrepresentable`] if the type cannot reconstruct the matched
/// raw value.
pub fn parse_with<T: PrettyEnum>(input: &str, separator: &str) -> Result<T> {
	if input.trim().is_empty() {
		return Err(Error::EmptyInput);
	}

	let descriptor = T::descriptor();
	let cache = cache::cache_for::<T>();

	let raw = if let Some(raw) = cache.lookup_single(input) {
		raw
	} else if descriptor.is_bitmask()
		&& let Some(raw) = flags::decompose(&cache, input, separator)
	{
		raw
	} else {
		return Err(Error::ParseFailed {
			type_name: descriptor.type_name(),
			input: input.to_string(),
		});
	};

	T::from_raw(raw).ok_or(Error::Unrepresentable {
		type_name: descriptor.type_name(),
		value: raw,
	})
}

/// Returns the display names of all declared members of `T`, in declaration
/// order.
pub fn pretty_names<T: PrettyEnum>() -> Vec<String> {
	cache::cache_for::<T>().names().to_vec()
}
