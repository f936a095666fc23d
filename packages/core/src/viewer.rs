//! Viewer identity resolution.

use serde::{Deserialize, Serialize};

/// Administrator identity used when no override is configured.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@vaultfut.com";

/// A resolved viewer identity.
///
/// `is_admin` is derived once at resolution time by exact match against the
/// configured administrator email. Admins are exempt from the maintenance
/// gate (so they can toggle it back off) but not from broadcast reveals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// Email-like identity string.
    pub email: String,
    /// Whether this viewer is the administrator.
    pub is_admin: bool,
}

impl Viewer {
    /// Resolve a viewer against the administrator identity.
    pub fn resolve(email: impl Into<String>, admin_email: &str) -> Self {
        let email = email.into();
        let is_admin = email == admin_email;
        Self { email, is_admin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_makes_admin() {
        let viewer = Viewer::resolve("admin@vaultfut.com", DEFAULT_ADMIN_EMAIL);
        assert!(viewer.is_admin);
    }

    #[test]
    fn near_match_is_not_admin() {
        let viewer = Viewer::resolve("Admin@vaultfut.com", DEFAULT_ADMIN_EMAIL);
        assert!(!viewer.is_admin);
        let viewer = Viewer::resolve("admin@vaultfut.com ", DEFAULT_ADMIN_EMAIL);
        assert!(!viewer.is_admin);
    }
}
