//! Transformations that return new strings.

use regex::Regex;

use super::search::find_units;
use super::JsString;

/// Longest string `repeat` will build, in code units.
pub const MAX_LENGTH: usize = 1 << 28;

/// ECMAScript `WhiteSpace` and `LineTerminator` code units.
fn is_js_whitespace(unit: u16) -> bool {
    matches!(
        unit,
        0x0009..=0x000D
            | 0x0020
            | 0x00A0
            | 0x1680
            | 0x2000..=0x200A
            | 0x2028
            | 0x2029
            | 0x202F
            | 0x205F
            | 0x3000
            | 0xFEFF
    )
}

impl JsString {
    /// Pads the start with `pad` (a space when `None`) until the string is
    /// `target_length` units long.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("abc");
    /// assert_eq!(s.pad_start(10, Some(&"foo".into())), "foofoofabc");
    /// assert_eq!(s.pad_start(6, Some(&"123465".into())), "123abc");
    /// assert_eq!(s.pad_start(5, None), "  abc");
    /// ```
    #[must_use]
    pub fn pad_start(&self, target_length: usize, pad: Option<&JsString>) -> JsString {
        match self.padding(target_length, pad) {
            Some(mut filler) => {
                filler.append(self);
                filler
            }
            None => self.clone(),
        }
    }

    /// Pads the end with `pad` (a space when `None`) until the string is
    /// `target_length` units long.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("abc");
    /// assert_eq!(s.pad_end(10, Some(&"foo".into())), "abcfoofoof");
    /// assert_eq!(s.pad_end(1, None), "abc");
    /// ```
    #[must_use]
    pub fn pad_end(&self, target_length: usize, pad: Option<&JsString>) -> JsString {
        match self.padding(target_length, pad) {
            Some(filler) => self.clone() + filler,
            None => self.clone(),
        }
    }

    fn padding(&self, target_length: usize, pad: Option<&JsString>) -> Option<JsString> {
        let space = JsString::from(" ");
        let pad = pad.unwrap_or(&space);
        if target_length <= self.length() || pad.is_empty() {
            return None;
        }
        let fill = target_length - self.length();
        Some(pad.units.iter().copied().cycle().take(fill).collect())
    }

    /// Returns the string repeated `count` times.
    ///
    /// Results that would exceed [`MAX_LENGTH`] code units come back empty.
    #[must_use]
    pub fn repeat(&self, count: usize) -> JsString {
        match self.length().checked_mul(count) {
            Some(total) if total < MAX_LENGTH => JsString {
                units: self.units.repeat(count),
            },
            _ => JsString::new(),
        }
    }

    /// Replaces the first occurrence of `needle`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("a-b-c");
    /// assert_eq!(s.replace("-", "+"), "a+b-c");
    /// ```
    #[must_use]
    pub fn replace(&self, needle: impl Into<JsString>, replacement: impl Into<JsString>) -> JsString {
        let needle = needle.into();
        match find_units(&self.units, &needle.units, 0) {
            Some(at) => {
                let mut out = JsString::from_slice(&self.units[..at]);
                out.append(&replacement.into());
                out.units.extend_from_slice(&self.units[at + needle.length()..]);
                out
            }
            None => self.clone(),
        }
    }

    /// Replaces every non-overlapping occurrence of `needle`.
    ///
    /// An empty needle inserts the replacement around every code unit.
    #[must_use]
    pub fn replace_all(
        &self,
        needle: impl Into<JsString>,
        replacement: impl Into<JsString>,
    ) -> JsString {
        let needle = needle.into();
        let replacement = replacement.into();

        if needle.is_empty() {
            let mut out = replacement.clone();
            for &unit in &self.units {
                out.units.push(unit);
                out.append(&replacement);
            }
            return out;
        }

        let mut out = JsString::new();
        let mut start = 0;
        while let Some(at) = find_units(&self.units, &needle.units, start) {
            out.units.extend_from_slice(&self.units[start..at]);
            out.append(&replacement);
            start = at + needle.length();
        }
        out.units.extend_from_slice(&self.units[start..]);
        out
    }

    /// Replaces every match of `pattern`.
    ///
    /// Matching runs over the UTF-8 view of the string, so unpaired
    /// surrogates are seen as U+FFFD. `$1`-style group references in
    /// `replacement` are expanded.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    /// use regex::Regex;
    ///
    /// let re = Regex::new(r"\d+").unwrap();
    /// let s = JsString::from("a1b22c333");
    /// assert_eq!(s.replace_pattern(&re, "#"), "a#b#c#");
    /// ```
    #[must_use]
    pub fn replace_pattern(&self, pattern: &Regex, replacement: &str) -> JsString {
        let text = self.to_utf8_lossy();
        JsString::from(pattern.replace_all(&text, replacement).as_ref())
    }

    /// Removes leading and trailing whitespace and line terminators.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from("\u{FEFF} \t hi \u{A0}\n");
    /// assert_eq!(s.trim(), "hi");
    /// ```
    #[must_use]
    pub fn trim(&self) -> JsString {
        self.trim_start().trim_end()
    }

    /// Removes leading whitespace and line terminators.
    #[must_use]
    pub fn trim_start(&self) -> JsString {
        let start = self
            .units
            .iter()
            .position(|&unit| !is_js_whitespace(unit))
            .unwrap_or(self.units.len());
        JsString::from_slice(&self.units[start..])
    }

    /// Removes trailing whitespace and line terminators.
    #[must_use]
    pub fn trim_end(&self) -> JsString {
        let end = self
            .units
            .iter()
            .rposition(|&unit| !is_js_whitespace(unit))
            .map_or(0, |i| i + 1);
        JsString::from_slice(&self.units[..end])
    }

    /// Alias of [`trim_start`](Self::trim_start).
    #[must_use]
    pub fn trim_left(&self) -> JsString {
        self.trim_start()
    }

    /// Alias of [`trim_end`](Self::trim_end).
    #[must_use]
    pub fn trim_right(&self) -> JsString {
        self.trim_end()
    }

    /// Upper-cases ASCII letters. Every other code unit is left alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// assert_eq!(JsString::from("stra\u{df}e").to_upper_case(), "STRA\u{df}E");
    /// ```
    #[must_use]
    pub fn to_upper_case(&self) -> JsString {
        self.units
            .iter()
            .map(|&unit| match unit {
                0x61..=0x7A => unit - 32,
                _ => unit,
            })
            .collect()
    }

    /// Lower-cases ASCII letters. Every other code unit is left alone.
    #[must_use]
    pub fn to_lower_case(&self) -> JsString {
        self.units
            .iter()
            .map(|&unit| match unit {
                0x41..=0x5A => unit + 32,
                _ => unit,
            })
            .collect()
    }
}
