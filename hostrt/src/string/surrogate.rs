//! UTF-16 surrogate pair arithmetic.
//!
//! A code point above `0xFFFF` is stored as two code units: a lead surrogate
//! in `0xD800..=0xDBFF` followed by a trail surrogate in `0xDC00..=0xDFFF`.

/// First code point that needs a surrogate pair.
pub const SUPPLEMENTARY_START: u32 = 0x1_0000;

/// One past the largest Unicode code point.
pub const CODE_POINT_LIMIT: u32 = 0x11_0000;

const LEAD_START: u16 = 0xD800;
const TRAIL_START: u16 = 0xDC00;

/// Returns true if `unit` is a lead (high) surrogate.
///
/// # Examples
///
/// ```
/// use hostrt::string::surrogate::is_lead_surrogate;
///
/// assert!(is_lead_surrogate(0xD834));
/// assert!(!is_lead_surrogate(0xDF06));
/// ```
#[must_use]
pub const fn is_lead_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// Returns true if `unit` is a trail (low) surrogate.
#[must_use]
pub const fn is_trail_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Splits a supplementary code point into its lead and trail surrogates.
///
/// `code_point` must lie in `0x10000..=0x10FFFF`.
///
/// # Examples
///
/// ```
/// use hostrt::string::surrogate::encode_surrogate_pair;
///
/// assert_eq!(encode_surrogate_pair(0x2F804), (0xD87E, 0xDC04));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn encode_surrogate_pair(code_point: u32) -> (u16, u16) {
    debug_assert!(code_point >= SUPPLEMENTARY_START && code_point < CODE_POINT_LIMIT);
    let offset = code_point - SUPPLEMENTARY_START;
    (
        LEAD_START + (offset >> 10) as u16,
        TRAIL_START + (offset & 0x3FF) as u16,
    )
}

/// Combines a lead and trail surrogate into one code point.
///
/// # Examples
///
/// ```
/// use hostrt::string::surrogate::decode_surrogate_pair;
///
/// assert_eq!(decode_surrogate_pair(0xD834, 0xDF06), 0x1D306);
/// ```
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn decode_surrogate_pair(lead: u16, trail: u16) -> u32 {
    debug_assert!(is_lead_surrogate(lead) && is_trail_surrogate(trail));
    ((lead - LEAD_START) as u32) * 0x400 + (trail - TRAIL_START) as u32 + SUPPLEMENTARY_START
}

/// Appends the UTF-16 encoding of `code_point` to `out`.
///
/// `code_point` must be below [`CODE_POINT_LIMIT`].
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn push_code_point(out: &mut Vec<u16>, code_point: u32) {
    if code_point < SUPPLEMENTARY_START {
        out.push(code_point as u16);
    } else {
        let (lead, trail) = encode_surrogate_pair(code_point);
        out.push(lead);
        out.push(trail);
    }
}
