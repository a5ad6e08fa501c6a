use std::env;

/// Allow-list of e-mail addresses that always resolve to the admin role.
///
/// Entries are trimmed and lowercased on load, and lookups lowercase the
/// candidate, so `Ops@Servly.com` and `ops@servly.com` match.
#[derive(Clone, Debug, Default)]
pub struct AdminConfig {
    pub admin_emails: Vec<String>,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        let raw = env::var("ADMIN_EMAILS").unwrap_or_default();
        Self::from_list(&raw)
    }

    pub fn from_list(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let admin_emails = emails
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        Self { admin_emails }
    }

    pub fn is_admin_email(&self, email: &str) -> bool {
        let candidate = email.trim().to_lowercase();
        !candidate.is_empty() && self.admin_emails.iter().any(|e| *e == candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_list_normalizes_entries() {
        let config = AdminConfig::from_list(" Ops@Servly.com ,, root@servly.com");
        assert_eq!(
            config.admin_emails,
            vec!["ops@servly.com".to_string(), "root@servly.com".to_string()]
        );
    }

    #[test]
    fn test_is_admin_email_case_insensitive() {
        let config = AdminConfig::new(["ops@servly.com"]);
        assert!(config.is_admin_email("OPS@servly.com"));
        assert!(config.is_admin_email("  ops@servly.com "));
        assert!(!config.is_admin_email("ops@servly.co"));
    }

    #[test]
    fn test_empty_list_matches_nothing() {
        let config = AdminConfig::default();
        assert!(!config.is_admin_email("ops@servly.com"));
        assert!(!config.is_admin_email(""));
    }
}
