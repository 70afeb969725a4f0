//! Shared test types.
#![allow(dead_code)]

use std::sync::LazyLock;

use pretty_enum::{EnumDescriptor, PrettyEnum, pretty_enum};

pretty_enum! {
	#[allow(non_camel_case_types)]
	pub enum FormatterTest {
		PascalCase,
		camelCase,
		UPPER_SNAKE_CASE,
		lower_snake_case,
		Mixed_SNAKE_And_Camel_case,
		Capitalized,
		uncapitalized,
		Numbers123,
		Numbers456Between,
	}
}

pretty_enum! {
	#[allow(non_camel_case_types)]
	pub enum AttributesTest {
		NoAttributes,
		IgnorePrinting { raw },
		ExplicitCustomName { name: "Custom Name" },
		DescriptionAndName { name: "Overridden Name", description: "Description Name" },
		DescriptionOnly { description: "Some Description" },
		Explicit_preserveCase_ATTRIBUTE { preserve_case },
	}
}

pretty_enum! {
	#[repr(i16)]
	pub enum SignedLevel {
		BelowZero = -10,
		GroundLevel = 0,
		AboveZero = 10,
	}
}

pretty_enum! {
	pub struct FlagsTest: u8 {
		const Flag1 = 1;
		const Flag2 = 2;
		const Flag4 = 4;
		const Flag8 = 8 { name: "Flag Eight" };
		const Flag16 = 16 { raw };
	}
}

pretty_enum! {
	pub struct Channels: u8 {
		const FrontLeft = 1;
		const FrontRight = 2;
		const Stereo = 3;
	}
}

pretty_enum! {
	#[pretty(raw)]
	pub struct FullyIgnored: u32 {
		const Ignore1 = 1;
		const Ignore2 = 2;
		const Ignore4 = 4;
		const Ignore8 = 8;
	}
}

/// Exercises the explicit-registration path instead of the macro; the
/// newtype can hold raw values outside the declared members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measured(pub i64);

impl PrettyEnum for Measured {
	fn descriptor() -> &'static EnumDescriptor {
		static DESCRIPTOR: LazyLock<EnumDescriptor> = LazyLock::new(|| {
			EnumDescriptor::builder("Measured")
				.member("SampleRate", 1)
				.member("BitDepth", 2)
				.build()
		});
		&DESCRIPTOR
	}

	fn raw_value(self) -> i64 {
		self.0
	}

	fn from_raw(raw: i64) -> Option<Self> {
		Some(Self(raw))
	}
}
