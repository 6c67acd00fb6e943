//! Digit-stream primitives shared by the formatter, the caret reconciler and
//! the edit policy.

use crate::text::clamp_to_char_boundary;

/// Strip everything but ASCII digits.
///
/// # Examples
///
/// ```
/// use mask_core::extract_digits;
///
/// assert_eq!(extract_digits("+7(999) 123-45"), "799912345");
/// assert_eq!(extract_digits("call me"), "");
/// ```
pub fn extract_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Number of ASCII digits in `text`.
#[inline]
pub fn count_digits(text: &str) -> usize {
    text.bytes().filter(u8::is_ascii_digit).count()
}

/// Number of digits strictly to the left of `offset`.
///
/// This is the caret intent the edit policy carries across a reformat.
/// `offset` is clamped to a character boundary first.
///
/// # Examples
///
/// ```
/// use mask_core::digits_before;
///
/// assert_eq!(digits_before("+7(999) 1", 0), 0);
/// assert_eq!(digits_before("+7(999) 1", 4), 2);
/// assert_eq!(digits_before("+7(999) 1", 100), 5);
/// ```
pub fn digits_before(text: &str, offset: usize) -> usize {
    let offset = clamp_to_char_boundary(text, offset);
    count_digits(&text[..offset])
}

/// An ordered run of ASCII digits with every separator removed.
///
/// Built fresh from the displayed text on every edit; never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitStream(String);

impl DigitStream {
    /// Collect the digits of `text`, discarding everything else.
    pub fn from_text(text: &str) -> Self {
        Self(extract_digits(text))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First digit, if any.
    #[inline]
    pub fn first(&self) -> Option<char> {
        self.0.chars().next()
    }

    /// Insert `digit` so that exactly `index` digits precede it.
    ///
    /// `index` past the end appends. Non-digits are ignored.
    pub fn insert(&mut self, index: usize, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        let index = index.min(self.0.len());
        self.0.insert(index, digit);
    }

    /// Append every digit found in `text`.
    pub fn extend_from_text(&mut self, text: &str) {
        self.0.extend(text.chars().filter(char::is_ascii_digit));
    }
}

impl std::fmt::Display for DigitStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_ignores_non_ascii_digits() {
        // Arabic-Indic digits are numeric but never part of a phone stream.
        assert_eq!(extract_digits("١٢3"), "3");
        assert_eq!(count_digits("١٢3"), 1);
    }

    #[test]
    fn digits_before_clamps_mid_char_offsets() {
        let s = "1€2";
        assert_eq!(digits_before(s, 2), 1);
        assert_eq!(digits_before(s, 4), 1);
        assert_eq!(digits_before(s, 5), 2);
    }

    #[test]
    fn stream_insert_and_extend() {
        let mut stream = DigitStream::from_text("+7(999)");
        assert_eq!(stream.as_str(), "7999");
        assert_eq!(stream.first(), Some('7'));

        stream.insert(1, '5');
        assert_eq!(stream.as_str(), "75999");

        stream.insert(100, '1');
        assert_eq!(stream.as_str(), "759991");

        stream.insert(0, 'x');
        assert_eq!(stream.len(), 6);

        stream.extend_from_text("tel: 2-3");
        assert_eq!(stream.to_string(), "75999123");
    }
}
