//! GS1 Application Identifier table.

/// Known Application Identifiers, sorted for binary search.
pub const APPLICATION_IDENTIFIERS: &[&str] = &[
    "00", "01", "02", "10", "11", "12", "13", "15", "17", "20", "21", "22", "240", "241", "242",
    "250", "251", "253", "254", "255", "30", "310", "311", "312", "313", "314", "315", "316",
    "320", "321", "322", "323", "324", "325", "326", "327", "328", "329", "330", "331", "332",
    "333", "334", "335", "336", "337", "340", "341", "342", "343", "344", "345", "346", "347",
    "348", "349", "350", "351", "352", "353", "354", "355", "356", "357", "360", "361", "362",
    "363", "364", "365", "366", "367", "368", "369", "37", "390", "391", "392", "393", "394",
    "395", "400", "401", "402", "403", "410", "411", "412", "413", "414", "415", "416", "417",
    "420", "421", "422", "423", "424", "425", "426", "427", "7001", "7002", "7003", "7004",
    "7005", "7006", "7007", "7008", "7009", "7010", "7020", "7021", "7022", "7023", "7030",
    "7031", "7032", "7033", "7034", "7035", "7036", "7037", "7038", "7039", "710", "711", "712",
    "713", "714", "715", "723", "8001", "8002", "8003", "8004", "8005", "8006", "8007", "8008",
    "8009", "8010", "8011", "8012", "8013", "8017", "8018", "8019", "8020", "8026", "8110",
    "8111", "8112", "8200", "90", "91", "92", "93", "94", "95", "96", "97", "98", "99",
];

pub fn is_known(code: &str) -> bool {
    APPLICATION_IDENTIFIERS.binary_search(&code).is_ok()
}

/// Longest known AI (4, then 3, then 2 digits) that prefixes `field`.
///
/// ```
/// use zpl_label::gs1::longest_ai;
///
/// assert_eq!(longest_ai("3102000150"), Some("310"));
/// assert_eq!(longest_ai("7003250101"), Some("7003"));
/// assert_eq!(longest_ai("5512"), None);
/// ```
pub fn longest_ai(field: &str) -> Option<&str> {
    (2..=4).rev().find_map(|len| {
        let prefix = field.get(..len)?;
        is_known(prefix).then_some(prefix)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in APPLICATION_IDENTIFIERS.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_codes_are_two_to_four_digits() {
        for code in APPLICATION_IDENTIFIERS {
            assert!((2..=4).contains(&code.len()), "{}", code);
            assert!(code.chars().all(|c| c.is_ascii_digit()), "{}", code);
        }
    }

    #[test]
    fn test_longest_prefix_wins() {
        assert_eq!(longest_ai("3101234"), Some("310"));
        assert_eq!(longest_ai("30123"), Some("30"));
        assert_eq!(longest_ai("8020ABC"), Some("8020"));
        assert_eq!(longest_ai("0112345678901231"), Some("01"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(longest_ai("5"), None);
        assert_eq!(longest_ai(""), None);
        assert_eq!(longest_ai("ABCD"), None);
    }
}
