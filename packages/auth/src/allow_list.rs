// ABOUTME: Static allow-list of admin email addresses
// ABOUTME: Entries and candidates are trimmed and lowercased before comparison

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct AdminAllowList {
    emails: HashSet<String>,
}

impl AdminAllowList {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let emails = emails
            .into_iter()
            .map(|email| normalize(email.as_ref()))
            .filter(|email| !email.is_empty())
            .collect();
        Self { emails }
    }

    /// Parse a comma-separated list such as the `ADMIN_EMAILS` variable
    pub fn from_env_value(value: &str) -> Self {
        Self::new(value.split(','))
    }

    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(&normalize(email))
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}
