//! Application state and the handlers behind every user action.
//!
//! [`AppState`] owns the persistent [`Store`], the [`ViewController`] and the
//! network flag. UI layers call one method per user action and render from
//! the accessors; nothing here touches the DOM.

use crate::auth::{self, Grant};
use crate::config::AppConfig;
use crate::controller::ViewController;
use crate::error::{ActionError, Result, StoreError};
use crate::model::content::{Category, Updates};
use crate::model::credentials::LoginForm;
use crate::model::view::{DetailPayload, View};
use crate::store::{KeyValueBackend, Store};

pub const LOGIN_SUCCESS: &str = "Login successful! You can now edit updates.";
pub const CONTENT_SAVED: &str = "Updates saved successfully!";
pub const CREDENTIALS_SAVED: &str = "Admin credentials updated successfully!";
pub const OFFLINE_BANNER: &str = "📱 You are currently offline - All data is saved locally";

pub struct AppState<B> {
    config: AppConfig,
    store: Store<B>,
    controller: ViewController,
    online: bool,
}

impl<B: KeyValueBackend> AppState<B> {
    /// Loads the store and starts on the splash screen.
    ///
    /// Load errors are returned for display; the state is usable regardless.
    pub fn new(backend: B, config: AppConfig) -> (Self, Vec<StoreError>) {
        let (store, errors) = Store::load(backend, config.storage.clone(), config.content.clone());
        let state = Self {
            config,
            store,
            controller: ViewController::new(),
            online: true,
        };
        (state, errors)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &Store<B> {
        &self.store
    }

    pub fn view(&self) -> View {
        self.controller.current()
    }

    pub fn detail(&self) -> Option<&DetailPayload> {
        self.controller.detail()
    }

    /// Login form as it should look when the app opens.
    pub fn initial_login_form(&self) -> LoginForm {
        LoginForm::from_saved(self.store.saved_login())
    }

    /// Splash screen "Next".
    pub fn advance(&mut self) -> Result<()> {
        self.controller.goto(View::Login, None)?;
        Ok(())
    }

    /// "Continue as Guest": counts the visit and opens the feed.
    ///
    /// The view changes even if persisting the counter fails; that failure is
    /// still returned so it can be shown. The in-memory count keeps the visit.
    pub fn guest_access(&mut self) -> Result<u64> {
        if !self.controller.can_goto(View::Posts) {
            return Err(self.unreachable(View::Posts));
        }
        let counted = self.store.increment_guest_counter();
        self.controller.goto(View::Posts, None)?;
        Ok(counted?)
    }

    /// "Login": applies the remember-me choice, then checks the credentials.
    ///
    /// The remember-me choice is stored whatever the outcome of the check.
    pub fn login(&mut self, form: &LoginForm) -> Result<Grant> {
        if !self.controller.can_goto(View::Admin) {
            return Err(self.unreachable(View::Admin));
        }
        let remembered = if form.save_login {
            self.store.set_saved_login(&form.account, &form.password)
        } else {
            self.store.clear_saved_login()
        };
        if let Err(err) = remembered {
            log::warn!("could not update the saved login: {err}");
        }

        let grant = auth::authenticate(
            &self.config.auth,
            self.store.credentials(),
            &form.account,
            &form.password,
        )?;
        self.controller.goto(View::Admin, None)?;
        Ok(grant)
    }

    /// Opens one category in the detail view.
    pub fn view_detail(&mut self, category: Category) -> Result<()> {
        let payload = DetailPayload::for_category(self.store.updates(), category);
        self.controller.goto(View::Detail, Some(payload))?;
        Ok(())
    }

    /// "Back" / "Close".
    pub fn back(&mut self) -> Result<View> {
        Ok(self.controller.back()?)
    }

    /// Appends a review. On [`ActionError::Store`] the comment is already in
    /// the log; see [`ActionError::change_kept`].
    pub fn submit_comment(&mut self, text: &str) -> Result<()> {
        self.store.append_comment(text)
    }

    /// "Save Changes" in the admin panel.
    pub fn save_updates(&mut self, updates: Updates) -> Result<()> {
        self.require_admin("the updates")?;
        self.store.save_content(updates)?;
        log::info!("content updated");
        Ok(())
    }

    /// "Change Credentials" in the admin panel.
    pub fn update_credentials(&mut self, username: &str, password: &str) -> Result<()> {
        self.require_admin("the credentials")?;
        self.store.replace_credentials(username, password)
    }

    pub fn set_online(&mut self, online: bool) {
        if self.online != online {
            log::info!("network is {}", if online { "online" } else { "offline" });
        }
        self.online = online;
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Banner text while offline. Nothing is gated on it: storage is local.
    pub fn offline_banner(&self) -> Option<&'static str> {
        (!self.online).then_some(OFFLINE_BANNER)
    }

    fn require_admin(&self, what: &'static str) -> Result<()> {
        if self.controller.current() == View::Admin {
            Ok(())
        } else {
            Err(ActionError::AdminOnly(what))
        }
    }

    fn unreachable(&self, to: View) -> ActionError {
        crate::error::TransitionError::Unreachable {
            from: self.controller.current(),
            to,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;

    /// Reads from memory, refuses every write.
    struct QuotaExceeded(MemoryBackend);

    impl KeyValueBackend for QuotaExceeded {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &str) -> std::result::Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }

        fn remove(&mut self, key: &str) -> std::result::Result<(), StoreError> {
            self.0.remove(key)
        }
    }

    fn full_storage_on_login() -> AppState<QuotaExceeded> {
        let (mut app, errors) =
            AppState::new(QuotaExceeded(MemoryBackend::new()), AppConfig::default());
        assert!(!errors.is_empty());
        app.advance().unwrap();
        app
    }

    fn on_login() -> AppState<MemoryBackend> {
        let (mut app, errors) = AppState::new(MemoryBackend::new(), AppConfig::default());
        assert!(errors.is_empty());
        app.advance().unwrap();
        app
    }

    fn form(account: &str, password: &str, save_login: bool) -> LoginForm {
        LoginForm {
            account: account.into(),
            password: password.into(),
            save_login,
        }
    }

    #[test]
    fn guest_access_only_from_login() {
        let (mut app, _) = AppState::new(MemoryBackend::new(), AppConfig::default());
        assert!(matches!(
            app.guest_access(),
            Err(ActionError::Transition(_))
        ));
        assert_eq!(app.store().guest_count(), 0);
        assert_eq!(app.view(), View::Home);
    }

    #[test]
    fn guest_access_opens_posts_when_the_counter_cannot_be_saved() {
        let mut app = full_storage_on_login();
        let result = app.guest_access();
        assert!(matches!(result, Err(ActionError::Store(StoreError::Write { .. }))));
        assert_eq!(app.view(), View::Posts);
        assert_eq!(app.store().guest_count(), 1);
    }

    #[test]
    fn unsaved_comment_is_logged_once_and_not_resubmitted() {
        let mut app = full_storage_on_login();
        app.guest_access().unwrap_err();

        let mut draft = "Great job!".to_string();
        let err = app.submit_comment(&draft).unwrap_err();
        assert!(err.change_kept());
        draft.clear();
        assert_eq!(app.store().comments(), ["Great job!"]);
        assert_eq!(app.submit_comment(&draft), Err(ActionError::EmptyComment));
        assert_eq!(app.store().comments(), ["Great job!"]);
    }

    #[test]
    fn failed_login_still_applies_remember_me() {
        let mut app = on_login();
        assert_eq!(
            app.login(&form("amy", "wrong", true)),
            Err(ActionError::InvalidLogin)
        );
        assert_eq!(app.view(), View::Login);
        assert_eq!(app.store().saved_login().map(|s| s.account.as_str()), Some("amy"));
    }

    #[test]
    fn content_and_credentials_are_admin_only() {
        let mut app = on_login();
        assert_eq!(
            app.save_updates(Updates::default()),
            Err(ActionError::AdminOnly("the updates"))
        );
        assert_eq!(
            app.update_credentials("root", "secret"),
            Err(ActionError::AdminOnly("the credentials"))
        );
    }

    #[test]
    fn detail_shows_the_current_text() {
        let mut app = on_login();
        app.guest_access().unwrap();
        app.view_detail(Category::WeeklyReview).unwrap();
        let detail = app.detail().unwrap();
        assert_eq!(detail.title, "Weekly Review (Vlog)");
        assert_eq!(detail.content, Updates::default().weekly_review);
    }

    #[test]
    fn offline_banner_follows_network_state() {
        let mut app = on_login();
        assert_eq!(app.offline_banner(), None);
        app.set_online(false);
        assert_eq!(app.offline_banner(), Some(OFFLINE_BANNER));
        app.set_online(true);
        assert!(app.is_online());
    }
}
