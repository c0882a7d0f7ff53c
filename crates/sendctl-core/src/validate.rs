// SPDX-License-Identifier: Apache-2.0

//! Local input validation.
//!
//! Everything here runs before the client is touched, so a malformed flag
//! never reaches the remote service.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::error::SendctlError;
use crate::models::WEBHOOK_EVENTS;

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)([a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}$")
        .expect("domain regex is valid")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

static SCOPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(messages|domains|accounts|webhooks|routes|suppressions|smtp-credentials|statistics-transactional|api-keys):(read|write|delete|send|cancel|wipe|billing|members)(:(all|\{[a-z0-9.-]+\}))?$",
    )
    .expect("scope regex is valid")
});

/// Scope resources whose grants must name a target (`all` or `{domain}`).
const TARGETED_RESOURCES: [&str; 2] = ["messages", "statistics-transactional"];

/// Checks that `domain` is a syntactically valid host name.
pub fn domain(domain: &str) -> Result<(), SendctlError> {
    if domain.len() <= 253 && DOMAIN_RE.is_match(domain) {
        Ok(())
    } else {
        Err(SendctlError::Validation {
            message: format!("Invalid domain: {domain}"),
            details: Some("expected a fully qualified name such as mail.example.com".to_string()),
        })
    }
}

/// Checks that `email` looks like an address.
pub fn email(email: &str) -> Result<(), SendctlError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(SendctlError::validation(format!(
            "Invalid email address: {email}"
        )))
    }
}

/// Checks that `url` is an absolute http(s) URL.
pub fn url(url: &str) -> Result<(), SendctlError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err(SendctlError::Validation {
            message: format!("Invalid URL: {url}"),
            details: Some("expected an http:// or https:// URL".to_string()),
        }),
    }
}

/// Parses a comma-separated list of API-key scopes.
///
/// Empty entries are ignored; at least one scope is required.
pub fn scopes(input: &str) -> Result<Vec<String>, SendctlError> {
    let parsed: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        return Err(SendctlError::validation("At least one scope is required"));
    }

    for scope in &parsed {
        let Some(caps) = SCOPE_RE.captures(scope) else {
            return Err(SendctlError::Validation {
                message: format!("Invalid scope: {scope}"),
                details: Some(
                    "expected resource:action[:all|{domain}], e.g. messages:send:all".to_string(),
                ),
            });
        };
        let resource = &caps[1];
        if TARGETED_RESOURCES.contains(&resource) && caps.get(3).is_none() {
            return Err(SendctlError::Validation {
                message: format!("Scope {scope} must name a target"),
                details: Some(format!("use {scope}:all or {scope}:{{example.com}}")),
            });
        }
    }

    Ok(parsed)
}

/// Parses a comma-separated list of webhook event names.
pub fn webhook_events(input: &str) -> Result<Vec<String>, SendctlError> {
    let events: Vec<String> = input
        .split(',')
        .map(|s| s.trim().to_lowercase().replace('-', "_"))
        .filter(|s| !s.is_empty())
        .collect();

    if events.is_empty() {
        return Err(SendctlError::validation("At least one event is required"));
    }
    if let Some(unknown) = events.iter().find(|e| !WEBHOOK_EVENTS.contains(&e.as_str())) {
        return Err(SendctlError::Validation {
            message: format!("Unknown webhook event: {unknown}"),
            details: Some(format!("known events: {}", WEBHOOK_EVENTS.join(", "))),
        });
    }
    Ok(events)
}

/// Checks that a statistics window is not inverted.
pub fn date_range(
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Result<(), SendctlError> {
    if let (Some(from), Some(to)) = (from, to)
        && from > to
    {
        return Err(SendctlError::Validation {
            message: "--from must not be later than --to".to_string(),
            details: Some(format!("from={} to={}", from.to_rfc3339(), to.to_rfc3339())),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_date;

    #[test]
    fn test_domain_accepts_subdomains() {
        assert!(domain("example.com").is_ok());
        assert!(domain("mail.example.co.uk").is_ok());
        assert!(domain("Mail-1.Example.com").is_ok());
    }

    #[test]
    fn test_domain_rejects_bad_syntax() {
        for bad in ["example", "-bad.com", "exa mple.com", "example..com", ""] {
            let err = domain(bad).unwrap_err();
            assert!(matches!(err, SendctlError::Validation { .. }), "{bad}");
        }
    }

    #[test]
    fn test_email() {
        assert!(email("jane@example.com").is_ok());
        assert!(email("jane.example.com").is_err());
        assert!(email("jane@example").is_err());
    }

    #[test]
    fn test_url() {
        assert!(url("https://hooks.example.com/in").is_ok());
        assert!(url("http://localhost:8080").is_ok());
        assert!(url("ftp://example.com").is_err());
        assert!(url("https://").is_err());
    }

    #[test]
    fn test_scopes_parses_list() {
        let parsed = scopes("messages:send:all, domains:read,,messages:read:{example.com}").unwrap();
        assert_eq!(
            parsed,
            vec![
                "messages:send:all",
                "domains:read",
                "messages:read:{example.com}"
            ]
        );
    }

    #[test]
    fn test_scopes_rejects_malformed() {
        assert!(scopes("").is_err());
        assert!(scopes("messages").is_err());
        assert!(scopes("mailboxes:read").is_err());
        let err = scopes("messages:send").unwrap_err();
        assert!(err.to_string().contains("must name a target"));
    }

    #[test]
    fn test_webhook_events() {
        assert_eq!(
            webhook_events("delivered, Bounced,dns-error").unwrap(),
            vec!["delivered", "bounced", "dns_error"]
        );
        assert!(webhook_events("exploded").is_err());
        assert!(webhook_events(" , ").is_err());
    }

    #[test]
    fn test_date_range() {
        let early = parse_date("2024-01-01").unwrap();
        let late = parse_date("2024-02-01").unwrap();
        assert!(date_range(Some(early), Some(late)).is_ok());
        assert!(date_range(Some(early), None).is_ok());
        assert!(date_range(Some(late), Some(early)).is_err());
    }
}
