//! Admin login check.

use crate::config::AuthConfig;
use crate::error::ActionError;
use crate::model::credentials::AdminCredentials;

/// Which pair let the user in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// The stored admin credentials.
    Admin,
    /// The fixed pair from [`AuthConfig`].
    Bypass,
}

/// Checks a submitted pair against the bypass pair and the active credentials.
///
/// No attempt counting and no lockout.
pub fn authenticate(
    config: &AuthConfig,
    active: &AdminCredentials,
    account: &str,
    password: &str,
) -> Result<Grant, ActionError> {
    if config.allow_bypass && account == config.bypass_account && password == config.bypass_password
    {
        log::warn!("admin login through the fixed bypass account");
        return Ok(Grant::Bypass);
    }
    if active.matches(account, password) {
        log::info!("admin login as `{account}`");
        return Ok(Grant::Admin);
    }
    log::info!("rejected login for `{account}`");
    Err(ActionError::InvalidLogin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bypass_pair_survives_credential_changes() {
        let active = AdminCredentials {
            username: "root".into(),
            password: "secret".into(),
        };
        let config = AuthConfig::default();
        assert_eq!(
            authenticate(&config, &active, "Wilsontkay", "KayP"),
            Ok(Grant::Bypass)
        );
        assert_eq!(authenticate(&config, &active, "root", "secret"), Ok(Grant::Admin));
        assert_eq!(
            authenticate(&config, &active, "admin", "admin"),
            Err(ActionError::InvalidLogin)
        );
    }

    #[test]
    fn bypass_can_be_switched_off() {
        let config = AuthConfig {
            allow_bypass: false,
            ..AuthConfig::default()
        };
        assert_eq!(
            authenticate(&config, &AdminCredentials::default(), "Wilsontkay", "KayP"),
            Err(ActionError::InvalidLogin)
        );
    }

    #[test]
    fn mixed_pairs_are_rejected() {
        let config = AuthConfig::default();
        let active = AdminCredentials::default();
        for (account, password) in [("Wilsontkay", "admin"), ("admin", "KayP"), ("", ""), ("wilsontkay", "KayP")] {
            assert_eq!(
                authenticate(&config, &active, account, password),
                Err(ActionError::InvalidLogin),
                "{account}/{password}"
            );
        }
    }
}
