//! Component state for the school updates app.
//!
//! Durable records live in [`AppState`]; everything else here is transient UI
//! state (form drafts, the active admin tab, the welcome animation) that is
//! never written to storage directly.

use common::app::AppState;
use common::config::AppConfig;
use common::error::StoreError;
use common::model::content::Updates;
use common::model::credentials::LoginForm;
use common::typing::TypingEffect;

use crate::browser::events::WindowListener;
use crate::browser::platform;
use crate::browser::speech::BrowserSpeech;
use crate::browser::storage::BrowserBackend;

/// Tabs of the admin panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdminTab {
    Edit,
    Reviews,
    Account,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Edit, AdminTab::Reviews, AdminTab::Account];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Edit => "Edit Updates",
            AdminTab::Reviews => "Reviews",
            AdminTab::Account => "Account",
        }
    }
}

pub struct SchoolUpdatesComponent {
    /// Store, view controller and network flag.
    pub app: AppState<BrowserBackend>,

    /// Login form draft, pre-filled from the saved login.
    pub login_form: LoginForm,

    /// Text of the comment box on the posts view.
    pub comment_draft: String,

    /// Admin edit draft; copied from the store when the admin panel opens.
    pub edited_updates: Updates,

    pub new_username: String,
    pub new_password: String,

    pub admin_tab: AdminTab,

    /// "Welcome Parent" popup shown after guest access.
    pub welcome: TypingEffect,

    pub speech: BrowserSpeech,

    /// Load problems, shown once after the first render.
    pub load_errors: Vec<StoreError>,

    /// `online`/`offline` subscriptions, released with the component.
    pub listeners: Vec<WindowListener>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl SchoolUpdatesComponent {
    /// Opens `localStorage` (falling back to memory) and loads every record.
    pub fn new(config: AppConfig) -> Self {
        let mut load_errors = Vec::new();
        let backend = BrowserBackend::local().unwrap_or_else(|err| {
            load_errors.push(err);
            BrowserBackend::memory()
        });

        let welcome = TypingEffect::from_config(&config.typing);
        let (mut app, errors) = AppState::new(backend, config);
        load_errors.extend(errors);
        app.set_online(platform::is_online());

        Self {
            login_form: app.initial_login_form(),
            edited_updates: app.store().updates().clone(),
            app,
            comment_draft: String::new(),
            new_username: String::new(),
            new_password: String::new(),
            admin_tab: AdminTab::Edit,
            welcome,
            speech: BrowserSpeech::detect(),
            load_errors,
            listeners: Vec::new(),
            loaded: false,
        }
    }
}
