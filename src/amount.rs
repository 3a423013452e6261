/**
 * Whole-unit money amounts, read from and written as short human strings
 * ("5M", "2.5K"). The ledger never deals in fractions of a unit: anything
 * below one unit is truncated.
 */
use crate::error::AmountError;

const SUFFIXES: [(i64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

/// Largest fraction precision that can still matter with the `B` suffix.
const MAX_FRACTION_DIGITS: usize = 9;

pub fn format_amount(amount: i64) -> String {
    for (threshold, postfix) in SUFFIXES {
        if amount >= threshold {
            return format!("{:.1}{}", amount as f64 / threshold as f64, postfix);
        }
    }
    amount.to_string()
}

fn multiplier_for(suffix: char) -> Option<i64> {
    let wanted = suffix.to_ascii_uppercase().to_string();
    SUFFIXES
        .iter()
        .find(|(_, postfix)| *postfix == wanted)
        .map(|(threshold, _)| *threshold)
}

fn parse_digits(digits: &str, original: &str) -> Result<i64, AmountError> {
    if digits.is_empty() {
        return Ok(0);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::NotANumber(original.to_string()));
    }
    digits
        .parse()
        .map_err(|_| AmountError::Overflow(original.to_string()))
}

/// Parses "5000000", "5_000_000", "5M" or "2.5K" into whole units.
pub fn parse_amount(string: &str) -> Result<i64, AmountError> {
    let cleaned: String = string.trim().chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() {
        return Err(AmountError::Empty);
    }
    if cleaned.starts_with('-') {
        return Err(AmountError::Negative);
    }

    let (number, multiplier) = match cleaned.chars().last().and_then(multiplier_for) {
        Some(multiplier) => (&cleaned[..cleaned.len() - 1], multiplier),
        None => (cleaned.as_str(), 1),
    };

    let split_amount: Vec<&str> = number.split('.').collect();
    if split_amount.len() > 2 {
        return Err(AmountError::TooManyDots);
    }
    if split_amount.iter().all(|part| part.is_empty()) {
        return Err(AmountError::NotANumber(string.to_string()));
    }

    let units = parse_digits(split_amount[0], string)?
        .checked_mul(multiplier)
        .ok_or_else(|| AmountError::Overflow(string.to_string()))?;

    let fraction = match split_amount.get(1) {
        Some(digits) => {
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AmountError::NotANumber(string.to_string()));
            }
            let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
            let scale = 10i64.pow(digits.len() as u32);
            parse_digits(digits, string)? * multiplier / scale
        }
        None => 0,
    };

    units
        .checked_add(fraction)
        .ok_or_else(|| AmountError::Overflow(string.to_string()))
}
