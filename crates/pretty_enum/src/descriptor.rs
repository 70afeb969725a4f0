//! Static descriptor tables for pretty-printable types.
//!
//! A descriptor is the single source of truth the formatter and parser read
//! from: the ordered member list with underlying integer values, whether the
//! type combines via bitwise OR, and the per-type and per-member naming
//! overrides. Descriptors are built once per type (typically behind a
//! `LazyLock` emitted by [`pretty_enum!`](crate::pretty_enum)) and live for
//! the rest of the process.

/// Naming overrides for a single member, or for a whole type.
///
/// All fields default to "no override". At type level only [`raw`] and
/// [`preserve_case`] are meaningful.
///
/// [`raw`]: MemberOverrides::raw
/// [`preserve_case`]: MemberOverrides::preserve_case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberOverrides {
	pub(crate) suppress: bool,
	pub(crate) preserve_case: bool,
	pub(crate) name: Option<&'static str>,
	pub(crate) description: Option<&'static str>,
}

impl MemberOverrides {
	/// No overrides; the computed segmentation applies.
	pub const NONE: Self = Self {
		suppress: false,
		preserve_case: false,
		name: None,
		description: None,
	};

	/// Bypasses formatting entirely; the raw identifier is used verbatim.
	pub const fn raw(self) -> Self {
		Self { suppress: true, ..self }
	}

	/// Keeps the original character casing; only segmentation boundaries
	/// change.
	pub const fn preserve_case(self) -> Self {
		Self { preserve_case: true, ..self }
	}

	/// Sets an explicit display name, used verbatim.
	///
	/// A blank value is treated as absent at resolve time and falls through
	/// to the next naming strategy.
	pub const fn name(self, name: &'static str) -> Self {
		Self { name: Some(name), ..self }
	}

	/// Sets description text, used verbatim when no explicit name is set.
	///
	/// A blank value is treated as absent at resolve time.
	pub const fn description(self, description: &'static str) -> Self {
		Self { description: Some(description), ..self }
	}
}

/// One declared member: identifier, underlying integer value, and overrides.
///
/// Values need not be unique or contiguous; identifiers must be unique
/// within a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
	ident: &'static str,
	value: i64,
	overrides: MemberOverrides,
}

impl Member {
	/// Returns the raw identifier as declared in source.
	pub fn ident(&self) -> &'static str {
		self.ident
	}

	/// Returns the underlying integer value.
	pub fn value(&self) -> i64 {
		self.value
	}

	/// Returns the naming overrides for this member.
	pub fn overrides(&self) -> &MemberOverrides {
		&self.overrides
	}
}

/// Read-only metadata for one pretty-printable type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
	type_name: &'static str,
	bitmask: bool,
	suppress_all: bool,
	preserve_case_all: bool,
	members: Vec<Member>,
}

impl EnumDescriptor {
	/// Starts building a descriptor for the named type.
	pub fn builder(type_name: &'static str) -> DescriptorBuilder {
		DescriptorBuilder {
			inner: EnumDescriptor {
				type_name,
				bitmask: false,
				suppress_all: false,
				preserve_case_all: false,
				members: Vec::new(),
			},
		}
	}

	/// Returns the type name used in diagnostics.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Returns `true` if values of this type combine via bitwise OR.
	pub fn is_bitmask(&self) -> bool {
		self.bitmask
	}

	/// Returns `true` if every member of this type bypasses formatting.
	pub fn suppresses_formatting(&self) -> bool {
		self.suppress_all
	}

	/// Returns `true` if every member of this type keeps its original casing.
	pub fn preserves_case(&self) -> bool {
		self.preserve_case_all
	}

	/// Returns the declared members in declaration order.
	pub fn members(&self) -> &[Member] {
		&self.members
	}
}

/// Builder for [`EnumDescriptor`]; the explicit-registration counterpart of
/// the [`pretty_enum!`](crate::pretty_enum) macro.
#[derive(Debug)]
pub struct DescriptorBuilder {
	inner: EnumDescriptor,
}

impl DescriptorBuilder {
	/// Marks the type as bitmask-style.
	pub fn bitmask(mut self) -> Self {
		self.inner.bitmask = true;
		self
	}

	/// Applies type-level overrides. Only the suppress and preserve-case
	/// flags are read; an explicit name or description has no meaning for a
	/// whole type and is ignored.
	pub fn type_overrides(mut self, overrides: MemberOverrides) -> Self {
		self.inner.suppress_all |= overrides.suppress;
		self.inner.preserve_case_all |= overrides.preserve_case;
		self
	}

	/// Declares a member with no overrides.
	pub fn member(self, ident: &'static str, value: i64) -> Self {
		self.member_with(ident, value, MemberOverrides::NONE)
	}

	/// Declares a member with the given overrides.
	pub fn member_with(mut self, ident: &'static str, value: i64, overrides: MemberOverrides) -> Self {
		debug_assert!(
			!self.inner.members.iter().any(|m| m.ident == ident),
			"duplicate member identifier `{ident}` in descriptor `{}`",
			self.inner.type_name,
		);
		self.inner.members.push(Member { ident, value, overrides });
		self
	}

	/// Finishes the descriptor.
	pub fn build(self) -> EnumDescriptor {
		self.inner
	}
}
