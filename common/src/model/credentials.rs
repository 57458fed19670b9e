use serde::{Deserialize, Serialize};

/// The configurable admin login. Exactly one pair is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

impl AdminCredentials {
    /// Exact, case-sensitive comparison against a submitted pair.
    pub fn matches(&self, account: &str, password: &str) -> bool {
        self.username == account && self.password == password
    }
}

/// Login remembered by the "Save login information" checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLogin {
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub password: String,
}

/// Draft state of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub account: String,
    pub password: String,
    pub save_login: bool,
}

impl LoginForm {
    /// Pre-fills the form from a remembered login, ticking the checkbox.
    pub fn from_saved(saved: Option<&SavedLogin>) -> Self {
        match saved {
            Some(saved) => Self {
                account: saved.account.clone(),
                password: saved.password.clone(),
                save_login: true,
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_login_tolerates_missing_fields() {
        let saved: SavedLogin = serde_json::from_str(r#"{"account":"amy"}"#).unwrap();
        assert_eq!(saved.account, "amy");
        assert_eq!(saved.password, "");
    }

    #[test]
    fn form_from_saved_login_ticks_the_checkbox() {
        let saved = SavedLogin {
            account: "amy".into(),
            password: "pw".into(),
        };
        let form = LoginForm::from_saved(Some(&saved));
        assert!(form.save_login);
        assert_eq!(form.account, "amy");
        assert_eq!(LoginForm::from_saved(None), LoginForm::default());
    }

    #[test]
    fn credentials_match_is_exact() {
        let creds = AdminCredentials::default();
        assert!(creds.matches("admin", "admin"));
        assert!(!creds.matches("Admin", "admin"));
        assert!(!creds.matches("admin", "admin "));
    }
}
