//! Searching and splitting.

use super::JsString;

/// Finds `needle` in `haystack` at or after `from`.
pub(crate) fn find_units(haystack: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    let from = from.min(haystack.len());
    if needle.is_empty() {
        return Some(from);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&i| haystack[i..].starts_with(needle))
}

/// Finds the last `needle` in `haystack` starting at or before `from`.
pub(crate) fn rfind_units(haystack: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    let last_start = haystack.len().checked_sub(needle.len())?;
    (0..=from.min(last_start))
        .rev()
        .find(|&i| haystack[i..].starts_with(needle))
}

impl JsString {
    /// Returns the index of the first occurrence of `search` at or after `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("Blue Whale, Killer Whale");
    /// assert_eq!(s.index_of("Whale", 0), Some(5));
    /// assert_eq!(s.index_of("Whale", 6), Some(19));
    /// assert_eq!(s.index_of("Blute", 0), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, search: impl Into<JsString>, from: usize) -> Option<usize> {
        find_units(&self.units, &search.into().units, from)
    }

    /// Returns the index of the last occurrence of `search` that starts at or
    /// before `from` (the whole string when `None`).
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("canal");
    /// assert_eq!(s.last_index_of("a", None), Some(3));
    /// assert_eq!(s.last_index_of("a", Some(2)), Some(1));
    /// assert_eq!(s.last_index_of("x", None), None);
    /// ```
    #[must_use]
    pub fn last_index_of(&self, search: impl Into<JsString>, from: Option<usize>) -> Option<usize> {
        rfind_units(&self.units, &search.into().units, from.unwrap_or(usize::MAX))
    }

    /// Returns true if `search` occurs at or after `position`.
    #[must_use]
    pub fn includes(&self, search: impl Into<JsString>, position: usize) -> bool {
        self.index_of(search, position).is_some()
    }

    /// Returns true if the string continues with `search` at `position`.
    #[must_use]
    pub fn starts_with(&self, search: impl Into<JsString>, position: usize) -> bool {
        let position = position.min(self.units.len());
        self.units[position..].starts_with(&search.into().units)
    }

    /// Returns true if the first `end_position` units (the whole string when
    /// `None`) end with `search`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("To be, or not to be, that is the question.");
    /// assert!(s.ends_with("question.", None));
    /// assert!(!s.ends_with("to be", None));
    /// assert!(s.ends_with("to be", Some(19)));
    /// ```
    #[must_use]
    pub fn ends_with(&self, search: impl Into<JsString>, end_position: Option<usize>) -> bool {
        let end = end_position.map_or(self.units.len(), |end| end.min(self.units.len()));
        self.units[..end].ends_with(&search.into().units)
    }

    /// Splits the string around `separator`.
    ///
    /// An empty separator yields one entry per code unit. When `limit` is
    /// given, scanning stops as soon as that many entries exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("Oh brave new world");
    /// let words = s.split(" ", Some(3));
    /// assert_eq!(words, vec!["Oh", "brave", "new"]);
    /// assert_eq!(JsString::from("ab").split("", None), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn split(&self, separator: impl Into<JsString>, limit: Option<usize>) -> Vec<JsString> {
        let separator = separator.into();
        let limit = limit.unwrap_or(usize::MAX);
        if limit == 0 {
            return Vec::new();
        }

        if separator.is_empty() {
            return self
                .units
                .iter()
                .take(limit)
                .map(|&unit| JsString { units: vec![unit] })
                .collect();
        }

        let mut parts = Vec::new();
        let mut start = 0;
        while let Some(found) = find_units(&self.units, &separator.units, start) {
            parts.push(JsString::from_slice(&self.units[start..found]));
            if parts.len() == limit {
                return parts;
            }
            start = found + separator.units.len();
        }
        parts.push(JsString::from_slice(&self.units[start..]));
        parts
    }
}
