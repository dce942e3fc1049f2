/// Alias parsing
///
/// An alias has the form `name$domain`. Only the domain is extracted here; the
/// full alias string is forwarded untouched to the resolver endpoint.
use crate::error::{ResolveError, ResolveResult};

/// Separator between the local name and the routing domain
pub const ALIAS_SEPARATOR: char = '$';

/// Extract the routing domain from an alias
///
/// The domain is everything after the last `$`. It is used verbatim: no case
/// folding, no IDNA conversion.
pub fn parse_domain(alias: &str) -> ResolveResult<&str> {
    match alias.rfind(ALIAS_SEPARATOR) {
        Some(idx) if idx + ALIAS_SEPARATOR.len_utf8() < alias.len() => {
            Ok(&alias[idx + ALIAS_SEPARATOR.len_utf8()..])
        }
        _ => Err(ResolveError::Format(
            "alias must be in the format alias$domain".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domain() {
        assert_eq!(parse_domain("donations$example.com").unwrap(), "example.com");
        assert_eq!(parse_domain("$example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_last_separator_wins() {
        assert_eq!(parse_domain("a$b$c.example").unwrap(), "c.example");
    }

    #[test]
    fn test_domain_used_verbatim() {
        assert_eq!(parse_domain("Alice$Example.COM").unwrap(), "Example.COM");
    }

    #[test]
    fn test_rejects_missing_separator() {
        assert!(matches!(parse_domain("alice"), Err(ResolveError::Format(_))));
    }

    #[test]
    fn test_rejects_empty_domain() {
        assert!(matches!(parse_domain("alice$"), Err(ResolveError::Format(_))));
        assert!(matches!(parse_domain("$"), Err(ResolveError::Format(_))));
    }
}
