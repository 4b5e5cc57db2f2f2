//! Quoted JavaScript string literals.
//!
//! The encoder picks whichever quote character occurs less often in the value,
//! escapes everything outside printable ASCII with the shortest escape that
//! still decodes unambiguously, and finally breaks up `</` so the literal can
//! sit inside an HTML `<script>` element.
//!
//! Work happens on UTF-16 code units: characters outside the BMP become a
//! surrogate pair of `\uHHHH` escapes, which decode back to the same character.

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encode `value` as a JavaScript string literal, quotes included.
///
/// Double quotes are used unless the value contains strictly fewer single
/// quotes than double quotes and `force_double_quote` is unset.
pub fn javascript_string(value: &str, force_double_quote: bool) -> String {
    let units: Vec<u16> = value.encode_utf16().collect();

    let mut double_count = 0usize;
    let mut single_count = 0usize;
    for &unit in &units {
        match unit {
            0x22 => double_count += 1,
            0x27 => single_count += 1,
            _ => {}
        }
    }

    let quote = if single_count < double_count && !force_double_quote {
        b'\''
    } else {
        b'"'
    };

    let mut result = String::with_capacity(units.len() + 16);
    result.push(char::from(quote));

    for (i, &unit) in units.iter().enumerate() {
        if (0x20..=0x7E).contains(&unit) && unit != u16::from(quote) && unit != 0x5C {
            result.push(char::from(unit as u8));
            continue;
        }

        let short_escape = match unit {
            0x08 => Some('b'),
            0x0C => Some('f'),
            0x0A => Some('n'),
            0x0D => Some('r'),
            0x09 => Some('t'),
            // Quotes only reach here when they match the chosen quote.
            0x22 => Some('"'),
            0x27 => Some('\''),
            0x5C => Some('\\'),
            _ => None,
        };
        if let Some(escape) = short_escape {
            result.push('\\');
            result.push(escape);
            continue;
        }

        // A short octal escape would swallow a following digit.
        let next_is_digit = units
            .get(i + 1)
            .is_some_and(|&next| (0x30..=0x39).contains(&next));
        if unit < 0x20 && !next_is_digit {
            result.push('\\');
            if unit > 0x7 {
                result.push(char::from(b'0' + ((unit >> 3) & 0x7) as u8));
            }
            result.push(char::from(b'0' + (unit & 0x7) as u8));
        } else if unit < 0x100 {
            result.push_str("\\x");
            push_hex(&mut result, unit, 2);
        } else {
            result.push_str("\\u");
            push_hex(&mut result, unit, 4);
        }
    }

    result.push(char::from(quote));
    escape_closing_tags(result)
}

/// Append `width` uppercase hex digits of `value`, left-padded with zeros.
fn push_hex(out: &mut String, value: u16, width: u32) {
    for shift in (0..width).rev() {
        let digit = (value >> (shift * 4)) & 0xF;
        out.push(char::from(HEX_DIGITS[digit as usize]));
    }
}

/// Turn every `</` into `<\/`. The decoded value is unchanged.
fn escape_closing_tags(literal: String) -> String {
    if literal.contains("</") {
        literal.replace("</", "<\\/")
    } else {
        literal
    }
}

#[cfg(test)]
#[path = "../tests/string_literal.rs"]
mod tests;
