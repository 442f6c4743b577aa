//! Human-readable coordinates ("D4", "pass").
//!
//! Columns use letters A-Z, skipping 'I' to avoid confusion with 'J'. Rows are
//! numbered from the bottom edge, so the same text maps to different points
//! on boards of different heights.

use crate::error::{Result, SgfError};
use crate::property::Point;

/// Parse a coordinate on a board `height` rows tall.
///
/// Returns `Ok(None)` for "pass".
pub fn parse_coord(s: &str, height: u8) -> Result<Option<Point>> {
    if s.eq_ignore_ascii_case("pass") {
        return Ok(None);
    }
    let invalid = || SgfError::InvalidCoordinate(s.to_string());

    let mut chars = s.chars();
    let col_char = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == 'I' {
        return Err(invalid());
    }
    let mut col = col_char as u8 - b'A' + 1;
    if col_char > 'I' {
        col -= 1;
    }

    let row: u8 = chars.as_str().parse().map_err(|_| invalid())?;
    if row == 0 || row > height {
        return Err(invalid());
    }
    Point::new(col, height - row + 1).map(Some)
}

/// Widest column a letter can name once 'I' is skipped.
const MAX_LETTER_COLUMN: u8 = 25;

/// Format a point on a board `height` rows tall. `None` prints as "pass".
///
/// Fails for points this notation cannot express: columns past 'Z' and rows
/// outside the board.
pub fn str_coord(point: Option<Point>, height: u8) -> Result<String> {
    let Some(point) = point else {
        return Ok("pass".into());
    };
    if point.x == 0 || point.x > MAX_LETTER_COLUMN || point.y == 0 || point.y > height {
        return Err(SgfError::InvalidCoordinate(format!(
            "{point} on a board {height} rows tall"
        )));
    }
    let mut c = b'@' + point.x;
    if c >= b'I' {
        c += 1;
    }
    let row = height - point.y + 1;
    Ok(format!("{}{row}", c as char))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corners() {
        assert_eq!(parse_coord("A1", 19).unwrap(), Some(Point::new(1, 19).unwrap()));
        assert_eq!(parse_coord("a19", 19).unwrap(), Some(Point::new(1, 1).unwrap()));
        assert_eq!(parse_coord("T19", 19).unwrap(), Some(Point::new(19, 1).unwrap()));
        assert_eq!(parse_coord("J9", 9).unwrap(), Some(Point::new(9, 1).unwrap()));
    }

    #[test]
    fn test_parse_pass_and_errors() {
        assert_eq!(parse_coord("PASS", 19).unwrap(), None);
        assert!(parse_coord("I5", 19).is_err());
        assert!(parse_coord("D0", 19).is_err());
        assert!(parse_coord("D20", 19).is_err());
        assert!(parse_coord("", 19).is_err());
        assert!(parse_coord("4D", 19).is_err());
    }

    #[test]
    fn test_skips_i() {
        let h = parse_coord("H5", 9).unwrap().unwrap();
        let j = parse_coord("J5", 9).unwrap().unwrap();
        assert_eq!(j.x - h.x, 1);
    }

    #[test]
    fn test_roundtrip() {
        for coord in ["A1", "D4", "G7", "H5", "J5", "T19", "K10"] {
            let point = parse_coord(coord, 19).unwrap();
            assert_eq!(str_coord(point, 19).unwrap(), coord);
        }
        assert_eq!(str_coord(None, 19).unwrap(), "pass");
    }

    #[test]
    fn test_format_limits() {
        let z = Point::new(25, 1).unwrap();
        assert_eq!(str_coord(Some(z), 25).unwrap(), "Z25");
        assert_eq!(parse_coord("Z25", 25).unwrap(), Some(z));

        let past_z = Point::new(26, 1).unwrap();
        assert!(matches!(
            str_coord(Some(past_z), 26),
            Err(SgfError::InvalidCoordinate(_))
        ));
        let below_board = Point::new(3, 10).unwrap();
        assert!(str_coord(Some(below_board), 9).is_err());
    }
}
