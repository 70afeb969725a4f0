//! Word segmentation for identifier-to-display-name conversion.
//!
//! Splits a raw identifier such as `Numbers456Between` or `UPPER_SNAKE_CASE`
//! into its constituent words in a single left-to-right scan, classifying
//! each character and cutting at case, digit, and underscore boundaries.

/// Character classes that drive segmentation boundaries.
///
/// Classification is ASCII-only; non-ASCII characters fall into [`Other`]
/// and are carried through without case folding.
///
/// [`Other`]: CharClass::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
	/// An explicit separator, consumed and never emitted.
	Underscore,
	/// An ASCII uppercase letter.
	Upper,
	/// An ASCII lowercase letter.
	Lower,
	/// An ASCII digit. Digits group together into their own word.
	Digit,
	/// Anything else, including punctuation and non-ASCII characters.
	Other,
}

fn classify(ch: char) -> CharClass {
	if ch == '_' {
		CharClass::Underscore
	} else if ch.is_ascii_uppercase() {
		CharClass::Upper
	} else if ch.is_ascii_lowercase() {
		CharClass::Lower
	} else if ch.is_ascii_digit() {
		CharClass::Digit
	} else {
		CharClass::Other
	}
}

/// Returns `true` if a character of class `class` starts a new word when it
/// follows a character of class `prev`.
///
/// Consecutive uppercase letters continue the current word, so acronyms fold
/// into a single word rather than one word per letter.
fn starts_new_word(prev: CharClass, class: CharClass) -> bool {
	match class {
		CharClass::Upper => !matches!(prev, CharClass::Upper),
		CharClass::Lower => !matches!(prev, CharClass::Upper | CharClass::Lower),
		CharClass::Digit => !matches!(prev, CharClass::Digit),
		// Punctuation sticks to whatever word is in progress.
		CharClass::Other => false,
		// Underscores never reach this point; they are consumed by the scan.
		CharClass::Underscore => false,
	}
}

/// Folds a single word to display case: first letter uppercased, the rest
/// lowercased. Words that do not start with an ASCII letter (digit groups)
/// are returned unchanged.
fn fold_word(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {
			let mut folded = String::with_capacity(word.len());
			folded.push(first.to_ascii_uppercase());
			folded.extend(chars.map(|c| c.to_ascii_lowercase()));
			folded
		}
		_ => word.to_string(),
	}
}

/// Splits `raw` into display words at case, digit, and underscore
/// boundaries.
///
/// When `preserve_case` is set, the original casing of every character is
/// retained and only the segmentation boundaries change; otherwise each word
/// is folded to first-upper, rest-lower. Empty input yields no words.
pub(crate) fn segment(raw: &str, preserve_case: bool) -> Vec<String> {
	let mut words = Vec::new();
	let mut current = String::new();
	let mut prev: Option<CharClass> = None;

	let mut flush = |current: &mut String| {
		if !current.is_empty() {
			if preserve_case {
				words.push(std::mem::take(current));
			} else {
				words.push(fold_word(current));
				current.clear();
			}
		}
	};

	for ch in raw.chars() {
		let class = classify(ch);

		if class == CharClass::Underscore {
			flush(&mut current);
			prev = None;
			continue;
		}

		if let Some(prev) = prev
			&& starts_new_word(prev, class)
		{
			flush(&mut current);
		}

		current.push(ch);
		prev = Some(class);
	}

	flush(&mut current);
	words
}
