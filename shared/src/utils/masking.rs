//! Masking helpers for identifiers that end up in logs

/// Mask a login identifier for display (e.g., `alice` -> `a***e`)
///
/// Emails keep the first character of the local part and the full domain
/// (`alice@example.com` -> `a***@example.com`). Works on characters, not bytes.
pub fn mask_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();

    if let Some((local, domain)) = trimmed.split_once('@') {
        let first = local.chars().next().map(String::from).unwrap_or_default();
        return format!("{}***@{}", first, domain);
    }

    let chars: Vec<char> = trimmed.chars().collect();
    match chars.as_slice() {
        [] => String::new(),
        [_] | [_, _] => "***".to_string(),
        [first, .., last] => format!("{}***{}", first, last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_plain_username() {
        assert_eq!(mask_identifier("alice"), "a***e");
        assert_eq!(mask_identifier("  bob "), "b***b");
        assert_eq!(mask_identifier("ab"), "***");
        assert_eq!(mask_identifier(""), "");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_identifier("alice@example.com"), "a***@example.com");
        assert_eq!(mask_identifier("@example.com"), "***@example.com");
    }

    #[test]
    fn test_mask_multibyte() {
        assert_eq!(mask_identifier("joão"), "j***o");
    }
}
