//! Textual coordinate grammar
//!
//! Parses the coordinate expressions users type at the command line.
//! Absolute cartesian input is `"x,y"`; the relative (`@`) and bare-magnitude
//! forms are handled by the entity accepting the input, because their
//! validity depends on how many points the entity already holds.

use glam::Vec2;
use thiserror::Error;

/// Errors produced by the coordinate grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("invalid coordinate format: '{0}'")]
    Format(String),

    #[error("coordinates must be valid numbers: '{0}'")]
    NotANumber(String),
}

/// Convert a screen-space position to model space.
///
/// Positive y means up in model space, so the screen y sign is inverted.
/// Every incoming position (typed, clicked, or cursor motion) passes through
/// this convention exactly once.
pub fn screen_to_model(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

/// Parse an absolute cartesian pair `"x,y"` into a model-space point.
///
/// The y sign is inverted (screen to model). Inputs without a comma, with
/// more than one comma, or with non-numeric components are rejected. The
/// `@` prefix and single-number forms are rejected here and must be stripped
/// or routed by the caller.
pub fn parse_coords(input: &str) -> Result<Vec2, CoordError> {
    let trimmed = input.trim();

    if !trimmed.contains(',') {
        return Err(CoordError::Format(input.to_string()));
    }

    let parts: Vec<&str> = trimmed.split(',').collect();
    if parts.len() != 2 {
        return Err(CoordError::Format(input.to_string()));
    }

    let x: f32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| CoordError::NotANumber(input.to_string()))?;
    let y: f32 = parts[1]
        .trim()
        .parse()
        .map_err(|_| CoordError::NotANumber(input.to_string()))?;

    Ok(Vec2::new(x, -y))
}

/// Check whether a token is a plain signed decimal number.
///
/// A trailing `.` is tolerated (`"5."` reads as 5.0); exponents, `+` signs
/// and other float spellings are not part of the grammar.
pub fn is_bare_number(input: &str) -> bool {
    let body = input.strip_prefix('-').unwrap_or(input);
    if body.is_empty() || body == "." {
        return false;
    }

    let mut parts = body.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next();

    if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    match frac_part {
        // Trailing '.' is fine, anything after it must be digits
        Some(frac) => frac.is_empty() || frac.chars().all(|c| c.is_ascii_digit()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_absolute_inverts_y() {
        let p = parse_coords("10.05,25.").unwrap();
        assert_relative_eq!(p.x, 10.05);
        assert_relative_eq!(p.y, -25.0);
    }

    #[test]
    fn test_parse_negative_components() {
        let p = parse_coords("-3,-4").unwrap();
        assert_relative_eq!(p.x, -3.0);
        assert_relative_eq!(p.y, 4.0);
    }

    #[test]
    fn test_parse_rejects_missing_comma() {
        assert!(matches!(parse_coords("10"), Err(CoordError::Format(_))));
    }

    #[test]
    fn test_parse_rejects_extra_comma() {
        assert!(matches!(parse_coords("1,2,3"), Err(CoordError::Format(_))));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            parse_coords("@3,4"),
            Err(CoordError::NotANumber(_))
        ));
        assert!(matches!(
            parse_coords("a,b"),
            Err(CoordError::NotANumber(_))
        ));
    }

    #[test]
    fn test_bare_number() {
        assert!(is_bare_number("5"));
        assert!(is_bare_number("-5"));
        assert!(is_bare_number("5.25"));
        assert!(is_bare_number("5."));
        assert!(!is_bare_number(""));
        assert!(!is_bare_number("."));
        assert!(!is_bare_number("5,5"));
        assert!(!is_bare_number("1e5"));
        assert!(!is_bare_number("5.3.2"));
        assert!(!is_bare_number("+5"));
    }

    #[test]
    fn test_screen_to_model() {
        let p = screen_to_model(Vec2::new(10.0, 10.0));
        assert_relative_eq!(p.x, 10.0);
        assert_relative_eq!(p.y, -10.0);
    }
}
