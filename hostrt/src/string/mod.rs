//! UTF-16 string primitive with scripting-language semantics.
//!
//! [`JsString`] stores a sequence of 16-bit code units. Its length, indices
//! and slicing bounds all count code units, never bytes or code points, so a
//! character outside the Basic Multilingual Plane occupies two positions.
//!
//! # Permissive indexing
//!
//! Accessors such as [`JsString::char_at`] and [`JsString::char_code_at`]
//! never fail: an out-of-range index yields an empty string or `0`. Only
//! [`JsString::from_code_point`] reports a range error.
//!
//! # Examples
//!
//! ```
//! use hostrt::JsString;
//!
//! let s = JsString::from("a\u{1D306}b");
//! assert_eq!(s.length(), 4);
//! assert_eq!(s.char_code_at(1), 0xD834);
//! assert_eq!(s.code_point_at(1), 0x1D306);
//! assert_eq!(s.char_code_at(99), 0);
//! ```

mod codec;
mod search;
pub mod surrogate;
mod transform;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut};

use crate::error::{Error, Result};
use surrogate::{decode_surrogate_pair, is_lead_surrogate, is_trail_surrogate, CODE_POINT_LIMIT};

/// A string of UTF-16 code units.
///
/// Equality, hashing and ordering compare code units ordinally.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JsString {
    units: Vec<u16>,
}

impl JsString {
    /// Creates an empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Creates a string from raw code units. Unpaired surrogates are kept as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from_code_units(vec![0x68, 0x69]);
    /// assert_eq!(s, "hi");
    /// ```
    #[must_use]
    pub fn from_code_units(units: impl Into<Vec<u16>>) -> Self {
        Self {
            units: units.into(),
        }
    }

    pub(crate) fn from_slice(units: &[u16]) -> Self {
        Self {
            units: units.to_vec(),
        }
    }

    /// Returns the code units of this string.
    #[must_use]
    pub fn code_units(&self) -> &[u16] {
        &self.units
    }

    /// Consumes the string and returns its code units.
    #[must_use]
    pub fn into_code_units(self) -> Vec<u16> {
        self.units
    }

    /// Returns the number of code units.
    #[must_use]
    pub fn length(&self) -> usize {
        self.units.len()
    }

    /// Returns true if the string holds no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns the code unit at `index` as a one-unit string.
    ///
    /// Out-of-range indices yield an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("abc");
    /// assert_eq!(s.char_at(1), "b");
    /// assert!(s.char_at(3).is_empty());
    /// ```
    #[must_use]
    pub fn char_at(&self, index: usize) -> Self {
        self.units
            .get(index)
            .map_or_else(Self::new, |&unit| Self { units: vec![unit] })
    }

    /// Returns the raw code unit at `index`, or `0` when out of range.
    #[must_use]
    pub fn char_code_at(&self, index: usize) -> u16 {
        self.units.get(index).copied().unwrap_or(0)
    }

    /// Returns the code point starting at `index`.
    ///
    /// A lead surrogate followed by a trail surrogate combines into one
    /// supplementary code point; any other unit is returned as-is. Out-of-range
    /// indices yield `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from_code_units(vec![0xD87E, 0xDC04]);
    /// assert_eq!(s.code_point_at(0), 0x2F804);
    /// assert_eq!(s.code_point_at(1), 0xDC04);
    /// ```
    #[must_use]
    pub fn code_point_at(&self, index: usize) -> u32 {
        let Some(&unit) = self.units.get(index) else {
            return 0;
        };
        if is_lead_surrogate(unit) {
            if let Some(&trail) = self.units.get(index + 1) {
                if is_trail_surrogate(trail) {
                    return decode_surrogate_pair(unit, trail);
                }
            }
        }
        u32::from(unit)
    }

    /// Overwrites the code unit at `index`.
    ///
    /// Returns false and leaves the string untouched when `index` is out of
    /// range.
    pub fn set_code_unit(&mut self, index: usize, unit: u16) -> bool {
        match self.units.get_mut(index) {
            Some(slot) => {
                *slot = unit;
                true
            }
            None => false,
        }
    }

    /// Appends a single code unit.
    pub fn push_unit(&mut self, unit: u16) {
        self.units.push(unit);
    }

    /// Appends the UTF-16 encoding of `s`.
    pub fn push_str(&mut self, s: &str) {
        self.units.extend(s.encode_utf16());
    }

    /// Appends the code units of another string.
    pub fn append(&mut self, other: &Self) {
        self.units.extend_from_slice(&other.units);
    }

    /// Builds a string from numeric code units, keeping the low 16 bits of each.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// assert_eq!(JsString::from_char_code(&[0x12014]), "\u{2014}");
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_char_code(codes: &[u32]) -> Self {
        Self {
            units: codes.iter().map(|&code| code as u16).collect(),
        }
    }

    /// Builds a string from code points.
    ///
    /// Code points above `0xFFFF` are stored as surrogate pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCodePoint`] for the first value that is not
    /// below `0x110000`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from_code_point(&[0x2F804]).unwrap();
    /// assert_eq!(s.code_units(), &[0xD87E, 0xDC04]);
    /// assert!(JsString::from_code_point(&[0x110000]).is_err());
    /// ```
    pub fn from_code_point(code_points: &[u32]) -> Result<Self> {
        let mut units = Vec::with_capacity(code_points.len());
        for &code_point in code_points {
            if code_point >= CODE_POINT_LIMIT {
                return Err(Error::InvalidCodePoint { value: code_point });
            }
            surrogate::push_code_point(&mut units, code_point);
        }
        Ok(Self { units })
    }

    /// Returns the units between `start` and `end`.
    ///
    /// Both bounds are clamped to `[0, length]` and swapped when `start` is
    /// greater than `end`. A missing `end` means the string length.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("Mozilla");
    /// assert_eq!(s.substring(1, Some(3)), "oz");
    /// assert_eq!(s.substring(3, Some(1)), "oz");
    /// assert_eq!(s.substring(-5, Some(2)), "Mo");
    /// ```
    #[must_use]
    pub fn substring(&self, start: isize, end: Option<isize>) -> Self {
        let len = self.units.len();
        let clamp = |value: isize| usize::try_from(value).map_or(0, |v| v.min(len));
        let start = clamp(start);
        let end = end.map_or(len, clamp);
        let (from, to) = if start > end { (end, start) } else { (start, end) };
        Self::from_slice(&self.units[from..to])
    }

    /// Returns the units between `begin` and `end` with negative offsets
    /// counted from the end.
    ///
    /// Unlike [`substring`](Self::substring), out-of-order bounds are never
    /// swapped: the result is empty whenever `begin` resolves at or past `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("The morning is upon us.");
    /// assert_eq!(s.slice(1, Some(8)), "he morn");
    /// assert_eq!(s.slice(4, Some(-2)), "morning is upon u");
    /// assert_eq!(s.slice(-3, None), "us.");
    /// assert!(s.slice(8, Some(1)).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, begin: isize, end: Option<isize>) -> Self {
        let len = self.units.len();
        let from = relative_index(begin, len);
        let to = end.map_or(len, |end| relative_index(end, len));
        if from >= to {
            return Self::new();
        }
        Self::from_slice(&self.units[from..to])
    }

    /// Returns this string followed by every string in `parts`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("Hello");
    /// assert_eq!(s.concat([", ", "World"]), "Hello, World");
    /// ```
    #[must_use]
    pub fn concat<I, S>(&self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Self>,
    {
        let mut out = self.clone();
        for part in parts {
            out.append(&part.into());
        }
        out
    }

    /// Compares two strings code unit by code unit.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.units.cmp(&other.units)
    }
}

/// Resolves a possibly negative offset against `len`, clamping into range.
fn relative_index(index: isize, len: usize) -> usize {
    match usize::try_from(index) {
        Ok(index) => index.min(len),
        Err(_) => len.saturating_sub(index.unsigned_abs()),
    }
}

impl fmt::Debug for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsString({:?})", self.to_utf8_lossy())
    }
}

/// Direct access to a code unit.
///
/// # Panics
///
/// Panics when `index` is not below [`JsString::length`]. Use
/// [`JsString::char_code_at`] for the non-panicking read.
impl Index<usize> for JsString {
    type Output = u16;

    fn index(&self, index: usize) -> &u16 {
        &self.units[index]
    }
}

/// Overwrites a code unit in place.
///
/// # Panics
///
/// Panics when `index` is not below [`JsString::length`].
impl IndexMut<usize> for JsString {
    fn index_mut(&mut self, index: usize) -> &mut u16 {
        &mut self.units[index]
    }
}

impl AsRef<[u16]> for JsString {
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}

impl From<Vec<u16>> for JsString {
    fn from(units: Vec<u16>) -> Self {
        Self { units }
    }
}

impl From<&[u16]> for JsString {
    fn from(units: &[u16]) -> Self {
        Self::from_slice(units)
    }
}

impl From<&JsString> for JsString {
    fn from(s: &JsString) -> Self {
        s.clone()
    }
}

impl FromIterator<u16> for JsString {
    fn from_iter<T: IntoIterator<Item = u16>>(iter: T) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

impl Extend<u16> for JsString {
    fn extend<T: IntoIterator<Item = u16>>(&mut self, iter: T) {
        self.units.extend(iter);
    }
}

impl PartialEq<str> for JsString {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for JsString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<JsString> for &str {
    fn eq(&self, other: &JsString) -> bool {
        other == *self
    }
}

impl PartialEq<JsString> for str {
    fn eq(&self, other: &JsString) -> bool {
        other == self
    }
}

impl Add<&JsString> for JsString {
    type Output = JsString;

    fn add(mut self, rhs: &JsString) -> JsString {
        self.append(rhs);
        self
    }
}

impl Add<JsString> for JsString {
    type Output = JsString;

    fn add(mut self, rhs: JsString) -> JsString {
        self.append(&rhs);
        self
    }
}

impl Add<&str> for JsString {
    type Output = JsString;

    fn add(mut self, rhs: &str) -> JsString {
        self.push_str(rhs);
        self
    }
}

impl AddAssign<&JsString> for JsString {
    fn add_assign(&mut self, rhs: &JsString) {
        self.append(rhs);
    }
}

impl AddAssign<JsString> for JsString {
    fn add_assign(&mut self, rhs: JsString) {
        self.append(&rhs);
    }
}

impl AddAssign<&str> for JsString {
    fn add_assign(&mut self, rhs: &str) {
        self.push_str(rhs);
    }
}
