mod common;

use common::{FlagsTest, FormatterTest};
use pretty_enum::{parse, parse_with, pretty_print, pretty_print_with};
use proptest::prelude::*;

const VARIANTS: [FormatterTest; 9] = [
	FormatterTest::PascalCase,
	FormatterTest::camelCase,
	FormatterTest::UPPER_SNAKE_CASE,
	FormatterTest::lower_snake_case,
	FormatterTest::Mixed_SNAKE_And_Camel_case,
	FormatterTest::Capitalized,
	FormatterTest::uncapitalized,
	FormatterTest::Numbers123,
	FormatterTest::Numbers456Between,
];

proptest! {
	#[test]
	fn enum_values_round_trip(index in 0usize..VARIANTS.len()) {
		let value = VARIANTS[index];
		let printed = pretty_print(value).unwrap();
		prop_assert_eq!(parse::<FormatterTest>(&printed).unwrap(), value);
	}

	// Any non-empty subset of declared flags survives format -> parse.
	#[test]
	fn flag_combinations_round_trip(bits in 1u8..=31) {
		let value = FlagsTest::from_bits_retain(bits);
		let printed = pretty_print(value).unwrap();
		prop_assert_eq!(parse::<FlagsTest>(&printed).unwrap(), value);
	}

	#[test]
	fn flag_combinations_round_trip_with_custom_separator(bits in 1u8..=31) {
		let value = FlagsTest::from_bits_retain(bits);
		let printed = pretty_print_with(value, " ||| ").unwrap();
		prop_assert_eq!(parse_with::<FlagsTest>(&printed, " ||| ").unwrap(), value);
	}

	#[test]
	fn format_is_deterministic(bits in 1u8..=31) {
		let value = FlagsTest::from_bits_retain(bits);
		prop_assert_eq!(pretty_print(value).unwrap(), pretty_print(value).unwrap());
	}
}
