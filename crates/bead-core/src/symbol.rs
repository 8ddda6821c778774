//! Pattern symbols for palette indices.
//!
//! Printed patterns label each cell with a short symbol instead of a
//! color. Symbols follow spreadsheet column naming: `A`..`Z`, then
//! `AA`, `AB`, ... `ZZ`, `AAA`, ...

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Symbol for the palette color at `index`.
///
/// ```
/// use bead_core::symbol_for_index;
///
/// assert_eq!(symbol_for_index(0), "A");
/// assert_eq!(symbol_for_index(26), "AA");
/// ```
pub fn symbol_for_index(index: usize) -> String {
    let mut chars = Vec::new();
    let mut n = index;
    loop {
        chars.push(ALPHABET[n % 26]);
        n /= 26;
        if n == 0 {
            break;
        }
        n -= 1;
    }
    chars.reverse();
    // ALPHABET is ASCII
    chars.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        assert_eq!(symbol_for_index(0), "A");
        assert_eq!(symbol_for_index(1), "B");
        assert_eq!(symbol_for_index(25), "Z");
    }

    #[test]
    fn test_multi_letter_boundaries() {
        assert_eq!(symbol_for_index(26), "AA");
        assert_eq!(symbol_for_index(27), "AB");
        assert_eq!(symbol_for_index(51), "AZ");
        assert_eq!(symbol_for_index(52), "BA");
        assert_eq!(symbol_for_index(701), "ZZ");
        assert_eq!(symbol_for_index(702), "AAA");
    }

    #[test]
    fn test_symbols_are_unique() {
        let symbols: std::collections::HashSet<String> =
            (0..2000).map(symbol_for_index).collect();
        assert_eq!(symbols.len(), 2000);
    }
}
