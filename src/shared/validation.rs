use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Syntactic pre-check for reporter email addresses, applied before the
    /// deliverability verifier is consulted
    /// - Valid: "ana@example.com", "joao+mar@praia.org"
    /// - Invalid: "sem-arroba", "@dominio", ""
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_regex_valid() {
        assert!(EMAIL_REGEX.is_match("ana@example.com"));
        assert!(EMAIL_REGEX.is_match("joao+mar@praia.org"));
        assert!(EMAIL_REGEX.is_match("a.b-c_d@x"));
    }

    #[test]
    fn test_email_regex_invalid() {
        assert!(!EMAIL_REGEX.is_match("sem-arroba"));
        assert!(!EMAIL_REGEX.is_match("@dominio"));
        assert!(!EMAIL_REGEX.is_match(""));
        assert!(!EMAIL_REGEX.is_match("espaço aqui@x.com"));
    }
}
