//! A1-style cell references (`D1:DX3`).

use std::fmt;
use std::str::FromStr;

/// A rectangular cell range, 0-based and inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRange {
    pub first_row: u32,
    pub first_col: u32,
    pub last_row: u32,
    pub last_col: u32,
}

impl HeaderRange {
    /// Item header region of the item-bank workbook: difficulty, max score and
    /// identifier rows over columns D through DX.
    pub const DEFAULT: HeaderRange = HeaderRange {
        first_row: 0,
        first_col: 3,
        last_row: 2,
        last_col: 127,
    };

    /// Parse `"D1:DX3"` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, String> {
        let (start, end) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("Invalid range '{s}': expected e.g. D1:DX3"))?;
        let (first_row, first_col) = parse_cell_ref(start)?;
        let (last_row, last_col) = parse_cell_ref(end)?;

        if last_row < first_row || last_col < first_col {
            return Err(format!("Invalid range '{s}': end precedes start"));
        }
        Ok(Self {
            first_row,
            first_col,
            last_row,
            last_col,
        })
    }

    pub fn width(&self) -> usize {
        (self.last_col - self.first_col) as usize + 1
    }

    pub fn height(&self) -> usize {
        (self.last_row - self.first_row) as usize + 1
    }
}

impl Default for HeaderRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for HeaderRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HeaderRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}{}",
            column_letters(self.first_col as usize),
            self.first_row + 1,
            column_letters(self.last_col as usize),
            self.last_row + 1
        )
    }
}

/// `"DX3"` -> `(2, 127)`.
fn parse_cell_ref(s: &str) -> Result<(u32, u32), String> {
    let s = s.trim();
    let split = s
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| format!("Invalid cell reference '{s}': missing row number"))?;
    let (letters, digits) = s.split_at(split);

    let col = column_index(letters).ok_or_else(|| format!("Invalid cell reference '{s}': bad column"))?;
    let row: u32 = digits
        .parse()
        .ok()
        .filter(|r| *r >= 1)
        .ok_or_else(|| format!("Invalid cell reference '{s}': bad row"))?;

    Ok((row - 1, col))
}

/// Column letters to a 0-based index (`"A"` -> 0, `"AA"` -> 26).
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() || letters.len() > 3 {
        return None;
    }
    let mut idx: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
        idx = idx * 26 + digit;
    }
    Some(idx - 1)
}

/// 0-based column index to letters (`0` -> `"A"`, `127` -> `"DX"`).
pub fn column_letters(mut idx: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (idx % 26) as u8);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_matches_item_header() {
        assert_eq!(HeaderRange::parse("D1:DX3").unwrap(), HeaderRange::DEFAULT);
        assert_eq!(HeaderRange::DEFAULT.to_string(), "D1:DX3");
        assert_eq!(HeaderRange::DEFAULT.width(), 125);
        assert_eq!(HeaderRange::DEFAULT.height(), 3);
    }

    #[test]
    fn column_letters_and_index_agree() {
        for (idx, letters) in [(0, "A"), (3, "D"), (25, "Z"), (26, "AA"), (127, "DX"), (701, "ZZ"), (702, "AAA")] {
            assert_eq!(column_letters(idx), letters);
            assert_eq!(column_index(letters), Some(idx as u32));
        }
        assert_eq!(column_index("dx"), Some(127));
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!(HeaderRange::parse("D1").is_err());
        assert!(HeaderRange::parse("D0:E3").is_err());
        assert!(HeaderRange::parse("1:E3").is_err());
        assert!(HeaderRange::parse("E3:D1").is_err());
        assert!(HeaderRange::parse("D1:E-3").is_err());
    }
}
