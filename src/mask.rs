//! Masking helpers for personal data that may end up in log messages
//!
//! All helpers count characters, not bytes, so multi-byte text is never
//! split mid-character.
//!
//! ```
//! use logx::mask;
//!
//! assert_eq!(mask::hide_phone("13812345678"), "138****5678");
//! assert_eq!(mask::hide_email("alice@example.com"), "al****@example.com");
//! ```

/// Number of mask characters placed between the kept head and tail.
const MASK_WIDTH: usize = 4;

/// Keep the first `keep_prefix` and last `keep_suffix` characters of `s` and
/// replace the middle with exactly four `mask` characters.
///
/// Strings no longer than `keep_prefix + keep_suffix` are masked entirely.
pub fn hide(s: &str, keep_prefix: usize, keep_suffix: usize, mask: char) -> String {
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();

    if len <= keep_prefix.saturating_add(keep_suffix) {
        return std::iter::repeat(mask).take(len).collect();
    }

    chars[..keep_prefix]
        .iter()
        .copied()
        .chain(std::iter::repeat(mask).take(MASK_WIDTH))
        .chain(chars[len - keep_suffix..].iter().copied())
        .collect()
}

pub fn hide_phone(phone: &str) -> String {
    hide(phone, 3, 4, '*')
}

/// Mask the local part of an address after its first two characters.
///
/// Addresses without an `@`, or whose local part is two bytes or shorter,
/// come back unchanged.
pub fn hide_email(email: &str) -> String {
    match email.find('@') {
        Some(at) if at > 2 => {
            let (local, domain) = email.split_at(at);
            hide(local, 2, 0, '*') + domain
        }
        _ => email.to_string(),
    }
}

pub fn hide_id_card(id: &str) -> String {
    hide(id, 6, 4, '*')
}

pub fn hide_bank_card(card: &str) -> String {
    hide(card, 4, 4, '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_keeps_head_and_tail() {
        assert_eq!(hide("abcdefghij", 2, 3, '#'), "ab####hij");
        assert_eq!(hide("abcdefghij", 0, 0, '*'), "****");
    }

    #[test]
    fn test_hide_short_input_is_fully_masked() {
        assert_eq!(hide("abc", 2, 2, '*'), "***");
        assert_eq!(hide("abcd", 2, 2, '*'), "****");
        assert_eq!(hide("", 1, 1, '*'), "");
    }

    #[test]
    fn test_hide_huge_keep_counts_do_not_overflow() {
        assert_eq!(hide("secret", usize::MAX, 1, '*'), "******");
        assert_eq!(hide("secret", 1, usize::MAX, '*'), "******");
    }

    #[test]
    fn test_hide_counts_characters() {
        assert_eq!(hide("张三丰李四王五", 1, 1, '*'), "张****五");
        assert_eq!(hide("张三", 1, 1, '*'), "**");
    }

    #[test]
    fn test_hide_phone() {
        assert_eq!(hide_phone("13812345678"), "138****5678");
        assert_eq!(hide_phone("1234567"), "*******");
    }

    #[test]
    fn test_hide_email() {
        assert_eq!(hide_email("alice@example.com"), "al****@example.com");
        assert_eq!(hide_email("bob@example.com"), "bo****@example.com");
        assert_eq!(hide_email("ab@example.com"), "ab@example.com");
        assert_eq!(hide_email("not-an-address"), "not-an-address");
    }

    #[test]
    fn test_hide_id_card() {
        assert_eq!(hide_id_card("110101199003071234"), "110101****1234");
    }

    #[test]
    fn test_hide_bank_card() {
        assert_eq!(hide_bank_card("6222020200112233445"), "6222****3445");
        assert_eq!(hide_bank_card("12345678"), "********");
    }
}
