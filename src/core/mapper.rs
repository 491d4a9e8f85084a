//! Parameter naming conventions.
//!
//! Translates between parameter ARNs, bare parameter paths and the short
//! keys used in `.env` files.

/// Extract the parameter path from an SSM parameter ARN.
///
/// `arn:aws:ssm:<region>:<account>:parameter/<path>` becomes `/<path>`.
/// Returns `None` unless the ARN has at least six `:`-separated parts, the
/// service part is `ssm`, and the sixth part starts with `parameter/`.
pub fn extract_parameter_path(arn: &str) -> Option<String> {
    let parts: Vec<&str> = arn.split(':').collect();
    if parts.len() < 6 || parts[2] != "ssm" {
        return None;
    }
    let path = parts[5].strip_prefix("parameter/")?;
    Some(format!("/{}", path))
}

/// Resolve a secret's `valueFrom` to a parameter path.
///
/// Accepts a full ARN or a bare path starting with `/`.
pub fn resolve_value_from(value_from: &str) -> Option<String> {
    if value_from.starts_with("arn:") {
        return extract_parameter_path(value_from);
    }
    if value_from.starts_with('/') {
        return Some(value_from.to_string());
    }
    None
}

/// Reference used when no real ARN exists yet: `prefix` + `key`, unmodified.
pub fn fallback_value_from(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, key)
}

/// Short key for a parameter listed under `prefix`.
///
/// Paths outside the prefix are returned whole.
pub fn strip_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    match path.strip_prefix(prefix) {
        Some(short) if !prefix.is_empty() => short,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_parameter_path() {
        assert_eq!(
            extract_parameter_path("arn:aws:ssm:ap-southeast-3:123456789012:parameter/app/db/password"),
            Some("/app/db/password".to_string())
        );
    }

    #[test]
    fn test_extract_rejects_wrong_service() {
        assert_eq!(
            extract_parameter_path("arn:aws:kms:ap-southeast-3:123456789012:parameter/app"),
            None
        );
    }

    #[test]
    fn test_extract_rejects_short_arn() {
        assert_eq!(extract_parameter_path("arn:aws:ssm:ap-southeast-3:parameter/app"), None);
        assert_eq!(extract_parameter_path(""), None);
        assert_eq!(extract_parameter_path("/app/db/password"), None);
    }

    #[test]
    fn test_extract_rejects_non_parameter_resource() {
        assert_eq!(
            extract_parameter_path("arn:aws:ssm:ap-southeast-3:123456789012:document/app"),
            None
        );
    }

    #[test]
    fn test_resolve_value_from_accepts_arn_and_path() {
        assert_eq!(
            resolve_value_from("arn:aws:ssm:us-east-1:1:parameter/x/y"),
            Some("/x/y".to_string())
        );
        assert_eq!(resolve_value_from("/x/y"), Some("/x/y".to_string()));
        assert_eq!(resolve_value_from("x/y"), None);
        assert_eq!(resolve_value_from("arn:aws:s3:::bucket"), None);
    }

    #[test]
    fn test_fallback_value_from_keeps_key_as_is() {
        assert_eq!(
            fallback_value_from("/preprod/testing/", "DB_Password"),
            "/preprod/testing/DB_Password"
        );
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_prefix("/prod/app/DB_HOST", "/prod/app/"), "DB_HOST");
        assert_eq!(strip_prefix("/prod/app/nested/KEY", "/prod/app/"), "nested/KEY");
        assert_eq!(strip_prefix("/other/KEY", "/prod/app/"), "/other/KEY");
        assert_eq!(strip_prefix("/prod/app/KEY", ""), "/prod/app/KEY");
    }
}
