/// Derives the domain portion of a raw email string.
///
/// Splits on `@` and takes the final segment, lowercased, with surrounding
/// whitespace and any trailing dot stripped. This never fails: input without
/// an `@` comes back as the normalized input itself, and an address ending
/// in `@` yields the empty string. Callers decide what an empty or
/// nonsensical domain means (for this service, the MX check rejects it).
///
/// # Examples
/// ```
/// use mailprobe::handlers::validation::domain::extract_domain;
///
/// assert_eq!(extract_domain("user@Example.COM"), "example.com");
/// assert_eq!(extract_domain("a@b@mail.example.org."), "mail.example.org");
/// assert_eq!(extract_domain("not-an-email"), "not-an-email");
/// ```
pub fn extract_domain(email: &str) -> String {
    let host = email.rsplit('@').next().unwrap_or(email);
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::extract_domain;

    #[test]
    fn test_plain_address() {
        assert_eq!(extract_domain("user@example.com"), "example.com");
    }

    #[test]
    fn test_lowercases_host() {
        assert_eq!(extract_domain("User@GMAIL.Com"), "gmail.com");
    }

    #[test]
    fn test_takes_last_segment_on_multiple_at() {
        assert_eq!(extract_domain("\"odd@local\"@example.org"), "example.org");
    }

    #[test]
    fn test_trailing_dot_stripped() {
        assert_eq!(extract_domain("user@example.com."), "example.com");
    }

    #[test]
    fn test_no_at_symbol_returns_input() {
        assert_eq!(extract_domain("plainstring"), "plainstring");
    }

    #[test]
    fn test_trailing_at_yields_empty() {
        assert_eq!(extract_domain("user@"), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_domain(""), "");
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(extract_domain("user@ example.com "), "example.com");
    }
}
