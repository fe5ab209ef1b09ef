// Spreadsheet column letters <-> zero-based indexes

/// Largest column spreadsheets address (XFD).
pub const MAX_COLUMN: u16 = 16_383;

/// `A` -> 0, `Z` -> 25, `AA` -> 26. Case-insensitive.
pub fn letter_to_col(letters: &str) -> Option<u16> {
    let letters = letters.trim();
    if letters.is_empty() || letters.len() > 3 {
        return None;
    }
    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }
    let col = col - 1;
    (col <= MAX_COLUMN as u32).then_some(col as u16)
}

/// 0 -> `A`, 26 -> `AA`.
pub fn col_to_letter(col: u16) -> String {
    let mut result = String::new();
    let mut n = col as u32 + 1;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_to_indexes() {
        assert_eq!(letter_to_col("A"), Some(0));
        assert_eq!(letter_to_col("t"), Some(19));
        assert_eq!(letter_to_col("AA"), Some(26));
        assert_eq!(letter_to_col("XFD"), Some(MAX_COLUMN));
        assert_eq!(letter_to_col("XFE"), None);
        assert_eq!(letter_to_col("A1"), None);
        assert_eq!(letter_to_col(""), None);
    }

    #[test]
    fn indexes_to_letters() {
        assert_eq!(col_to_letter(0), "A");
        assert_eq!(col_to_letter(20), "U");
        assert_eq!(col_to_letter(701), "ZZ");
        assert_eq!(col_to_letter(702), "AAA");
    }
}
