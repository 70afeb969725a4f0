//! Declarative registration macros for pretty-printable types.
//!
//! [`pretty_enum!`](crate::pretty_enum) declares a type and its descriptor
//! table in one place, so the formatter and parser share a single source of
//! truth with the declaration itself.

/// Builds a [`MemberOverrides`](crate::MemberOverrides) value from a
/// comma-separated option list: `raw`, `preserve_case`, `name: "..."`,
/// `description: "..."`, in any order.
#[doc(hidden)]
#[macro_export]
macro_rules! __pretty_overrides {
	(@build $acc:expr $(,)?) => { $acc };
	(@build $acc:expr, raw $(, $($rest:tt)*)?) => {
		$crate::__pretty_overrides!(@build $acc.raw() $(, $($rest)*)?)
	};
	(@build $acc:expr, preserve_case $(, $($rest:tt)*)?) => {
		$crate::__pretty_overrides!(@build $acc.preserve_case() $(, $($rest)*)?)
	};
	(@build $acc:expr, name: $value:literal $(, $($rest:tt)*)?) => {
		$crate::__pretty_overrides!(@build $acc.name($value) $(, $($rest)*)?)
	};
	(@build $acc:expr, description: $value:literal $(, $($rest:tt)*)?) => {
		$crate::__pretty_overrides!(@build $acc.description($value) $(, $($rest)*)?)
	};
	() => { $crate::MemberOverrides::NONE };
	($($opts:tt)+) => {
		$crate::__pretty_overrides!(@build $crate::MemberOverrides::NONE, $($opts)+)
	};
}

/// Declares a pretty-printable type together with its descriptor.
///
/// Two forms are supported. The `enum` form declares a fieldless enum:
///
/// ```ignore
/// pretty_enum! {
/// 	pub enum Level {
/// 		LowPower,
/// 		HighPower { name: "Full Power" },
/// 		DebugOnly { raw },
/// 	}
/// }
/// ```
///
/// The `struct` form declares a bitmask type through [`bitflags!`] and marks
/// the descriptor as bitmask-style:
///
/// ```ignore
/// pretty_enum! {
/// 	pub struct Channels: u8 {
/// 		const Left = 1;
/// 		const Right = 2;
/// 		const Both = 3 { name: "Stereo" };
/// 	}
/// }
/// ```
///
/// Each member takes an optional `{ ... }` override group with any of
/// `raw`, `preserve_case`, `name: "..."`, `description: "..."`. Type-level
/// overrides go in a `#[pretty(...)]` attribute, which must be the first
/// attribute when present:
///
/// ```ignore
/// pretty_enum! {
/// 	#[pretty(raw)]
/// 	pub enum Opcode { Nop, LoadImmediate }
/// }
/// ```
///
/// Both forms derive `Debug, Clone, Copy, PartialEq, Eq, Hash` and implement
/// [`PrettyEnum`](crate::PrettyEnum).
///
/// [`bitflags!`]: bitflags::bitflags
#[macro_export]
macro_rules! pretty_enum {
	(@enum [$($tyov:tt)*] $(#[$attr:meta])* $vis:vis $Name:ident {
		$( $Variant:ident $(= $value:literal)? $({ $($ov:tt)* })? ),+ $(,)?
	}) => {
		$(#[$attr])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $Name {
			$( $Variant $(= $value)? ),+
		}

		impl $crate::PrettyEnum for $Name {
			fn descriptor() -> &'static $crate::EnumDescriptor {
				static DESCRIPTOR: ::std::sync::LazyLock<$crate::EnumDescriptor> =
					::std::sync::LazyLock::new(|| {
						$crate::EnumDescriptor::builder(stringify!($Name))
							.type_overrides($crate::__pretty_overrides!($($tyov)*))
							$(
								.member_with(
									stringify!($Variant),
									$Name::$Variant as i64,
									$crate::__pretty_overrides!($($($ov)*)?),
								)
							)+
							.build()
					});
				&DESCRIPTOR
			}

			fn raw_value(self) -> i64 {
				self as i64
			}

			fn from_raw(raw: i64) -> ::core::option::Option<Self> {
				$(
					if raw == $Name::$Variant as i64 {
						return ::core::option::Option::Some($Name::$Variant);
					}
				)+
				::core::option::Option::None
			}
		}
	};

	(@flags [$($tyov:tt)*] $(#[$attr:meta])* $vis:vis $Name:ident : $repr:ty {
		$( const $Flag:ident = $value:literal $({ $($ov:tt)* })? ; )+
	}) => {
		$crate::bitflags::bitflags! {
			$(#[$attr])*
			#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
			$vis struct $Name: $repr {
				$(
					#[allow(non_upper_case_globals)]
					const $Flag = $value;
				)+
			}
		}

		impl $crate::PrettyEnum for $Name {
			fn descriptor() -> &'static $crate::EnumDescriptor {
				static DESCRIPTOR: ::std::sync::LazyLock<$crate::EnumDescriptor> =
					::std::sync::LazyLock::new(|| {
						$crate::EnumDescriptor::builder(stringify!($Name))
							.bitmask()
							.type_overrides($crate::__pretty_overrides!($($tyov)*))
							$(
								.member_with(
									stringify!($Flag),
									$Name::$Flag.bits() as i64,
									$crate::__pretty_overrides!($($($ov)*)?),
								)
							)+
							.build()
					});
				&DESCRIPTOR
			}

			fn raw_value(self) -> i64 {
				self.bits() as i64
			}

			fn from_raw(raw: i64) -> ::core::option::Option<Self> {
				::core::option::Option::Some(Self::from_bits_retain(raw as $repr))
			}
		}
	};

	(
		#[pretty($($tyov:tt)*)]
		$(#[$attr:meta])*
		$vis:vis enum $Name:ident { $($body:tt)* }
	) => {
		$crate::pretty_enum!(@enum [$($tyov)*] $(#[$attr])* $vis $Name { $($body)* });
	};

	(
		$(#[$attr:meta])*
		$vis:vis enum $Name:ident { $($body:tt)* }
	) => {
		$crate::pretty_enum!(@enum [] $(#[$attr])* $vis $Name { $($body)* });
	};

	(
		#[pretty($($tyov:tt)*)]
		$(#[$attr:meta])*
		$vis:vis struct $Name:ident : $repr:ty { $($body:tt)* }
	) => {
		$crate::pretty_enum!(@flags [$($tyov)*] $(#[$attr])* $vis $Name : $repr { $($body)* });
	};

	(
		$(#[$attr:meta])*
		$vis:vis struct $Name:ident : $repr:ty { $($body:tt)* }
	) => {
		$crate::pretty_enum!(@flags [] $(#[$attr])* $vis $Name : $repr { $($body)* });
	};
}
