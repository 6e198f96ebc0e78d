pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.trim().to_string()
}

/// Category labels match exactly; only surrounding whitespace is dropped.
pub(crate) fn normalize_category(value: &str) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_drops_byte_order_mark() {
        assert_eq!(normalize_header("\u{feff}english_word "), "english_word");
    }

    #[test]
    fn category_keeps_case_and_inner_spacing() {
        assert_eq!(normalize_category(" false_friends "), "false_friends");
        assert_eq!(normalize_category("False_Friends"), "False_Friends");
        assert_eq!(normalize_category("family  kinship"), "family  kinship");
    }
}
