//! Miller index notation parser

use crate::error::ParseError;

/// A parsed crystallographic notation
#[derive(Debug, Clone, PartialEq)]
pub enum Notation {
    /// A lattice plane, e.g. `(100)`
    Plane {
        /// Signed Miller indices in left-to-right scan order (axis order)
        indices: Vec<i32>,
        /// Per-axis intercepts for visualization, aligned with `indices`
        intercepts: Vec<f64>,
    },
    /// A lattice direction, e.g. `[111]`
    Direction {
        /// Signed Miller indices in left-to-right scan order (axis order)
        indices: Vec<i32>,
    },
}

impl Notation {
    /// Name of the notation kind, matching the wire discriminant
    pub fn kind(&self) -> &'static str {
        match self {
            Notation::Plane { .. } => "plane",
            Notation::Direction { .. } => "direction",
        }
    }

    /// Parsed indices in axis order
    pub fn indices(&self) -> &[i32] {
        match self {
            Notation::Plane { indices, .. } => indices,
            Notation::Direction { indices } => indices,
        }
    }
}

/// Parse a Miller index notation string.
///
/// Surrounding whitespace is ignored. `(...)` denotes a plane and `[...]`
/// a direction; any other framing is rejected. The interior is scanned for
/// single-digit indices, each optionally preceded by `-`; every other
/// character is skipped. Plane results carry one intercept per index: the
/// reciprocal `1/index`, or `0.5` for a zero index so a plane parallel to
/// that axis still renders centered.
///
/// Only single-digit magnitudes are recognized: `(12)` parses as the two
/// indices `[1, 2]`, never as twelve.
///
/// # Examples
///
/// ```
/// use miller_core::parse;
///
/// let plane = parse("(100)").unwrap();
/// assert_eq!(plane.indices(), &[1, 0, 0]);
///
/// let direction = parse("[111]").unwrap();
/// assert_eq!(direction.kind(), "direction");
/// ```
pub fn parse(input: &str) -> Result<Notation, ParseError> {
    let input = input.trim();

    let notation = if let Some(content) = delimited(input, '(', ')') {
        let indices = scan_indices(content);
        if indices.is_empty() {
            return Err(ParseError::NoValidIndices);
        }
        let intercepts = indices.iter().map(|&v| intercept(v)).collect();
        Notation::Plane { indices, intercepts }
    } else if let Some(content) = delimited(input, '[', ']') {
        let indices = scan_indices(content);
        if indices.is_empty() {
            return Err(ParseError::NoValidIndices);
        }
        Notation::Direction { indices }
    } else {
        return Err(ParseError::InvalidFormat);
    };

    tracing::debug!(
        kind = notation.kind(),
        count = notation.indices().len(),
        "parsed notation"
    );

    Ok(notation)
}

/// Strip exactly one leading `open` and one trailing `close`, if both are present
fn delimited(input: &str, open: char, close: char) -> Option<&str> {
    input.strip_prefix(open)?.strip_suffix(close)
}

/// Scan signed single-digit index tokens left to right.
///
/// A `-` binds to the immediately following character and both are consumed:
/// a digit emits its negated value, anything else emits nothing (the sign is
/// silently dropped). A bare digit emits its positive value. All other
/// characters are skipped without error.
fn scan_indices(content: &str) -> Vec<i32> {
    let mut indices = Vec::new();
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        let (digit, negative) = match c {
            '-' => match chars.next() {
                Some(d) if d.is_ascii_digit() => (d, true),
                _ => continue,
            },
            d if d.is_ascii_digit() => (d, false),
            _ => continue,
        };

        let value = i32::from(digit as u8 - b'0');
        indices.push(if negative { -value } else { value });
    }

    indices
}

/// Axis intercept for a plane index: the reciprocal, with a fixed `0.5`
/// sentinel for a zero index
fn intercept(index: i32) -> f64 {
    if index != 0 {
        1.0 / f64::from(index)
    } else {
        0.5
    }
}
