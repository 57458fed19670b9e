//! Persistent store for the durable records.
//!
//! The store owns the in-memory copy of every record and mirrors each change
//! to its storage key immediately, as one whole-record overwrite. Keys are
//! independent: there are no cross-key transactions and nothing is batched.
//!
//! Loading is best effort per key. A missing key keeps the built-in default;
//! a key whose value does not parse also falls back to the default, but the
//! failure is returned to the caller and the stored value is left untouched
//! until that record is next mutated.

mod backend;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use backend::{KeyValueBackend, MemoryBackend};

use crate::config::StorageKeys;
use crate::error::{ActionError, StoreError};
use crate::model::content::Updates;
use crate::model::credentials::{AdminCredentials, SavedLogin};

pub struct Store<B> {
    backend: B,
    keys: StorageKeys,
    updates: Updates,
    guest_count: u64,
    comments: Vec<String>,
    credentials: AdminCredentials,
    saved_login: Option<SavedLogin>,
}

impl<B: KeyValueBackend> Store<B> {
    /// Reads every record from `backend`, then writes the intact ones back so
    /// that defaults are present in storage after the first run.
    ///
    /// Returns the store together with every read, parse or write-back error
    /// encountered. None of them is fatal.
    pub fn load(backend: B, keys: StorageKeys, default_content: Updates) -> (Self, Vec<StoreError>) {
        let mut errors = Vec::new();

        let updates = read_record(&backend, &keys.updates, parse_json::<Updates>);
        let guest_count = read_record(&backend, &keys.guest_count, parse_count);
        let comments = read_record(&backend, &keys.comments, parse_json::<Vec<String>>);
        let credentials = read_record(&backend, &keys.credentials, parse_json::<AdminCredentials>);
        let saved_login = read_record(&backend, &keys.saved_login, parse_json::<SavedLogin>);

        let updates_intact = updates.is_ok();
        let guest_count_intact = guest_count.is_ok();
        let comments_intact = comments.is_ok();
        let credentials_intact = credentials.is_ok();

        let mut store = Self {
            updates: settle(updates, &mut errors).unwrap_or(default_content),
            guest_count: settle(guest_count, &mut errors).unwrap_or(0),
            comments: settle(comments, &mut errors).unwrap_or_default(),
            credentials: settle(credentials, &mut errors).unwrap_or_default(),
            saved_login: settle(saved_login, &mut errors),
            backend,
            keys,
        };

        if updates_intact {
            errors.extend(store.write_updates().err());
        }
        if guest_count_intact {
            errors.extend(store.write_guest_count().err());
        }
        if comments_intact {
            errors.extend(store.write_comments().err());
        }
        if credentials_intact {
            errors.extend(store.write_credentials().err());
        }

        for err in &errors {
            log::warn!("{err}");
        }
        log::info!(
            "loaded store: {} comments, {} guests, saved login: {}",
            store.comments.len(),
            store.guest_count,
            store.saved_login.is_some()
        );

        (store, errors)
    }

    pub fn updates(&self) -> &Updates {
        &self.updates
    }

    pub fn guest_count(&self) -> u64 {
        self.guest_count
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn credentials(&self) -> &AdminCredentials {
        &self.credentials
    }

    pub fn saved_login(&self) -> Option<&SavedLogin> {
        self.saved_login.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Gives the backend back, e.g. to reload it as a fresh session.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Replaces the content record wholesale.
    pub fn save_content(&mut self, updates: Updates) -> Result<(), StoreError> {
        self.updates = updates;
        self.write_updates()
    }

    /// Adds one guest visit and returns the new count.
    ///
    /// The in-memory value is authoritative; another tab writing the same key
    /// in between is overwritten.
    pub fn increment_guest_counter(&mut self) -> Result<u64, StoreError> {
        self.guest_count = self.guest_count.saturating_add(1);
        self.write_guest_count()?;
        Ok(self.guest_count)
    }

    /// Appends a comment exactly as typed. Blank input is rejected.
    pub fn append_comment(&mut self, text: impl Into<String>) -> Result<(), ActionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ActionError::EmptyComment);
        }
        self.comments.push(text);
        self.write_comments()?;
        Ok(())
    }

    /// Replaces the admin credentials. Blank fields leave the old pair active.
    pub fn replace_credentials(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), ActionError> {
        let (username, password) = (username.into(), password.into());
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(ActionError::EmptyCredentials);
        }
        self.credentials = AdminCredentials { username, password };
        self.write_credentials()?;
        log::info!("admin credentials replaced");
        Ok(())
    }

    pub fn set_saved_login(
        &mut self,
        account: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), StoreError> {
        let saved = SavedLogin {
            account: account.into(),
            password: password.into(),
        };
        let raw = to_json(&self.keys.saved_login, &saved)?;
        self.saved_login = Some(saved);
        write_raw(&mut self.backend, &self.keys.saved_login, &raw)
    }

    pub fn clear_saved_login(&mut self) -> Result<(), StoreError> {
        self.saved_login = None;
        self.backend.remove(&self.keys.saved_login)
    }

    fn write_updates(&mut self) -> Result<(), StoreError> {
        let raw = to_json(&self.keys.updates, &self.updates)?;
        write_raw(&mut self.backend, &self.keys.updates, &raw)
    }

    fn write_guest_count(&mut self) -> Result<(), StoreError> {
        let raw = self.guest_count.to_string();
        write_raw(&mut self.backend, &self.keys.guest_count, &raw)
    }

    fn write_comments(&mut self) -> Result<(), StoreError> {
        let raw = to_json(&self.keys.comments, &self.comments)?;
        write_raw(&mut self.backend, &self.keys.comments, &raw)
    }

    fn write_credentials(&mut self) -> Result<(), StoreError> {
        let raw = to_json(&self.keys.credentials, &self.credentials)?;
        write_raw(&mut self.backend, &self.keys.credentials, &raw)
    }
}

/// `Ok(None)` when the key is absent.
fn read_record<B, T>(
    backend: &B,
    key: &str,
    parse: fn(&str) -> Result<T, String>,
) -> Result<Option<T>, StoreError>
where
    B: KeyValueBackend,
{
    match backend.get(key)? {
        Some(raw) => parse(&raw).map(Some).map_err(|reason| StoreError::Corrupt {
            key: key.to_string(),
            reason,
        }),
        None => Ok(None),
    }
}

fn settle<T>(read: Result<Option<T>, StoreError>, errors: &mut Vec<StoreError>) -> Option<T> {
    read.unwrap_or_else(|err| {
        errors.push(err);
        None
    })
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

fn parse_count(raw: &str) -> Result<u64, String> {
    raw.trim().parse::<u64>().map_err(|e| e.to_string())
}

fn to_json<T: Serialize>(key: &str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|e| StoreError::Write {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn write_raw<B: KeyValueBackend>(backend: &mut B, key: &str, raw: &str) -> Result<(), StoreError> {
    backend.set(key, raw)?;
    log::debug!("wrote `{key}` ({} bytes)", raw.len());
    Ok(())
}
