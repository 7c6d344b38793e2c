use fraction::Fraction;

/// Upper bound for any single stored or deducted amount.
pub const MAX_AMOUNT: f64 = 100_000.0;

/// Parse a numeric-as-text quantity into a Fraction
///
/// Supports formats:
/// - Whole numbers: "2" → 2/1
/// - Pure fractions: "1/2" → 1/2
/// - Mixed fractions: "1 1/2" → 3/2
/// - Decimals: "0.5" → 1/2
pub fn parse_quantity(quantity_str: &str) -> Result<Fraction, String> {
    let trimmed = quantity_str.trim();

    // "1 1/2"
    if trimmed.contains(' ') && trimmed.contains('/') {
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(format!("Invalid mixed fraction format: {}", quantity_str));
        }

        let whole: u64 = parts[0]
            .parse()
            .map_err(|_| format!("Invalid whole number: {}", parts[0]))?;

        return Ok(Fraction::new(whole, 1u64) + parse_fraction(parts[1])?);
    }

    if trimmed.contains('/') {
        return parse_fraction(trimmed);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| format!("Invalid number format: {}", quantity_str))?;

    if !value.is_finite() || value < 0.0 {
        return Err("Negative quantities are not allowed".to_string());
    }

    Ok(Fraction::from(value))
}

fn parse_fraction(value: &str) -> Result<Fraction, String> {
    let Some((numerator, denominator)) = value.split_once('/') else {
        return Err(format!("Invalid fraction format: {}", value));
    };

    let numerator: u64 = numerator
        .trim()
        .parse()
        .map_err(|_| format!("Invalid numerator: {}", numerator))?;
    let denominator: u64 = denominator
        .trim()
        .parse()
        .map_err(|_| format!("Invalid denominator: {}", denominator))?;

    if denominator == 0 {
        return Err("Denominator cannot be zero".to_string());
    }

    Ok(Fraction::new(numerator, denominator))
}

/// Format a Fraction as a human-readable quantity
///
/// - Whole numbers: 2/1 → "2"
/// - Mixed fractions: 3/2 → "1 1/2"
/// - Pure fractions: 1/2 → "1/2"
///
/// NaN and infinite fractions are rejected.
pub fn format_quantity(fraction: Fraction) -> Result<String, String> {
    let (Some(numer), Some(denom)) = (fraction.numer(), fraction.denom()) else {
        return Err("Quantity is out of range".to_string());
    };

    if *denom == 1 {
        return Ok(numer.to_string());
    }

    let whole = numer / denom;
    let remainder = numer % denom;

    Ok(match (whole, remainder) {
        (whole, 0) => whole.to_string(),
        (0, remainder) => format!("{}/{}", remainder, denom),
        (whole, remainder) => format!("{} {}/{}", whole, remainder, denom),
    })
}

/// Parse a quantity that must be strictly above zero.
pub fn parse_positive(quantity_str: &str) -> Result<Fraction, String> {
    let value = parse_quantity(quantity_str)?;

    if value.numer().is_none_or(|numer| *numer == 0) {
        return Err(format!("Quantity must be greater than zero: {}", quantity_str));
    }

    Ok(value)
}

/// Subtract `amount` from a stored quantity, clamping at zero.
pub fn deduct(current: &str, amount: f64) -> Result<String, String> {
    let amount = to_fraction(amount)?;
    let current = parse_quantity(current)?;

    if amount >= current {
        return Ok("0".to_string());
    }

    format_quantity(current - amount)
}

/// Text form of a validated, positive input quantity.
pub fn from_amount(amount: f64) -> Result<String, String> {
    format_quantity(to_fraction(amount)?)
}

/// Exact fraction of a positive amount; amounts too small or too large
/// for the fraction type are rejected rather than rounded.
fn to_fraction(amount: f64) -> Result<Fraction, String> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be positive".to_string());
    }
    if amount > MAX_AMOUNT {
        return Err(format!("Amount is out of range: {}", amount));
    }

    let fraction = Fraction::from(amount);
    if fraction.numer().is_none_or(|numer| *numer == 0) || fraction.denom().is_none() {
        return Err(format!("Amount is out of range: {}", amount));
    }

    Ok(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fraction() {
        assert_eq!(parse_quantity("2").unwrap(), Fraction::new(2u64, 1u64));
        assert_eq!(parse_quantity("1/2").unwrap(), Fraction::new(1u64, 2u64));
        assert_eq!(parse_quantity("1 1/2").unwrap(), Fraction::new(3u64, 2u64));
        assert_eq!(parse_quantity("0.5").unwrap(), Fraction::new(1u64, 2u64));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_quantity("a pinch").is_err());
        assert!(parse_quantity("1/0").is_err());
        assert!(parse_quantity("-2").is_err());
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(Fraction::new(4u64, 2u64)).unwrap(), "2");
        assert_eq!(format_quantity(Fraction::new(3u64, 2u64)).unwrap(), "1 1/2");
        assert_eq!(format_quantity(Fraction::new(1u64, 4u64)).unwrap(), "1/4");
        assert!(format_quantity(Fraction::nan()).is_err());
        assert!(format_quantity(Fraction::infinity()).is_err());
    }

    #[test]
    fn test_deduct() {
        assert_eq!(deduct("3", 1.0).unwrap(), "2");
        assert_eq!(deduct("1 1/2", 0.5).unwrap(), "1");
        assert_eq!(deduct("2", 5.0).unwrap(), "0");
        assert!(deduct("2", 0.0).is_err());
        assert!(deduct("lots", 1.0).is_err());
    }

    #[test]
    fn test_from_amount() {
        assert_eq!(from_amount(2.0).unwrap(), "2");
        assert_eq!(from_amount(0.25).unwrap(), "1/4");
    }

    #[test]
    fn test_unrepresentable_amounts_are_rejected() {
        assert!(from_amount(1e-30).is_err());
        assert!(from_amount(3e19).is_err());
        assert!(from_amount(f64::NAN).is_err());
        assert!(deduct("2", 3e19).is_err());
        assert!(deduct("2", 1e-30).is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("1 1/2").unwrap(), Fraction::new(3u64, 2u64));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("0/3").is_err());
        assert!(parse_positive("-3").is_err());
        assert!(parse_positive("lots").is_err());
    }
}
