/// Digit value of a character, case-insensitive: '0'-'9' map to 0-9,
/// 'a'-'z' and 'A'-'Z' to 10-35. Anything else is not a digit.
pub fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        'a'..='z' => Some(10 + ch as u32 - 'a' as u32),
        'A'..='Z' => Some(10 + ch as u32 - 'A' as u32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_digits_case_insensitively() {
        assert_eq!(digit_value('0'), Some(0));
        assert_eq!(digit_value('9'), Some(9));
        assert_eq!(digit_value('a'), Some(10));
        assert_eq!(digit_value('A'), Some(10));
        assert_eq!(digit_value('z'), Some(35));
        assert_eq!(digit_value('Z'), Some(35));
        assert_eq!(digit_value('_'), None);
        assert_eq!(digit_value(' '), None);
    }
}
