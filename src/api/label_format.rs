use std::fmt::Write as _;

use chrono::NaiveDateTime;
use tracing::warn;

/// Formats a value readout: two decimals followed by the unit, if any.
#[must_use]
pub fn format_value_label(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{value:.2}")
    } else {
        format!("{value:.2} {unit}")
    }
}

/// Formats the label captured alongside a sample.
///
/// A format that cannot be rendered for `time` yields an empty label, which
/// the renderer skips.
#[must_use]
pub fn format_timestamp_label(time: NaiveDateTime, format: &str) -> String {
    let mut label = String::new();
    if write!(label, "{}", time.format(format)).is_err() {
        warn!(format, "timestamp format could not be rendered");
        label.clear();
    }
    label
}

/// Decodes HTML character references in unit text (`&deg;C` -> `°C`).
///
/// Numeric references (`&#176;`, `&#xB0;`) and the named entities commonly
/// used for units are supported; anything else is kept verbatim.
#[must_use]
pub fn decode_html_entities(input: &str) -> String {
    let mut decoded = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        decoded.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match candidate
            .find(';')
            .and_then(|end| decode_reference(&candidate[1..end]).map(|ch| (ch, end)))
        {
            Some((ch, end)) => {
                decoded.push(ch);
                rest = &candidate[end + 1..];
            }
            None => {
                decoded.push('&');
                rest = &candidate[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

fn decode_reference(reference: &str) -> Option<char> {
    if let Some(numeric) = reference.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    let ch = match reference {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "deg" => '°',
        "micro" => 'µ',
        "plusmn" => '±',
        "sup1" => '¹',
        "sup2" => '²',
        "sup3" => '³',
        "middot" => '·',
        "times" => '×',
        "divide" => '÷',
        "permil" => '‰',
        "frac12" => '½',
        "frac14" => '¼',
        "frac34" => '¾',
        "Omega" => 'Ω',
        "ohm" => 'Ω',
        "mu" => 'μ',
        "euro" => '€',
        "pound" => '£',
        "yen" => '¥',
        "cent" => '¢',
        "copy" => '©',
        "reg" => '®',
        _ => return None,
    };
    Some(ch)
}
