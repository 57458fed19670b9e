use common::app::AppState;
use common::auth::Grant;
use common::config::AppConfig;
use common::error::ActionError;
use common::model::content::{Category, Updates};
use common::model::credentials::LoginForm;
use common::model::view::View;
use common::store::MemoryBackend;

fn boot(backend: MemoryBackend) -> AppState<MemoryBackend> {
    let (app, errors) = AppState::new(backend, AppConfig::default());
    assert!(errors.is_empty(), "unexpected load errors: {errors:?}");
    app
}

/// Simulates closing and reopening the page.
fn restart(app: AppState<MemoryBackend>) -> AppState<MemoryBackend> {
    let backend = app.store().backend().clone();
    drop(app);
    boot(backend)
}

fn login_page() -> AppState<MemoryBackend> {
    let mut app = boot(MemoryBackend::new());
    app.advance().unwrap();
    app
}

fn form(account: &str, password: &str) -> LoginForm {
    LoginForm {
        account: account.into(),
        password: password.into(),
        save_login: false,
    }
}

fn admin_page() -> AppState<MemoryBackend> {
    let mut app = login_page();
    app.login(&form("admin", "admin")).unwrap();
    app
}

#[test]
fn valid_pairs_open_admin_and_others_stay_on_login() {
    for (account, password, grant) in [
        ("admin", "admin", Grant::Admin),
        ("Wilsontkay", "KayP", Grant::Bypass),
    ] {
        let mut app = login_page();
        assert_eq!(app.login(&form(account, password)), Ok(grant));
        assert_eq!(app.view(), View::Admin);
    }

    for (account, password) in [("admin", "nope"), ("guest", "admin"), ("", ""), ("ADMIN", "admin")] {
        let mut app = login_page();
        assert_eq!(
            app.login(&form(account, password)),
            Err(ActionError::InvalidLogin)
        );
        assert_eq!(app.view(), View::Login);
    }
}

#[test]
fn comment_log_grows_by_exactly_one() {
    let mut app = login_page();
    app.guest_access().unwrap();

    assert_eq!(app.submit_comment("   "), Err(ActionError::EmptyComment));
    assert!(app.store().comments().is_empty());

    app.submit_comment("Nice work").unwrap();
    let before = app.store().comments().len();
    app.submit_comment("Great job!").unwrap();
    assert_eq!(app.store().comments().len(), before + 1);
    assert_eq!(app.store().comments().last().map(String::as_str), Some("Great job!"));
}

#[test]
fn each_guest_entry_counts_once_and_opens_posts() {
    let mut app = login_page();
    for expected in 1..=3 {
        assert_eq!(app.guest_access(), Ok(expected));
        assert_eq!(app.view(), View::Posts);
        app.back().unwrap();
    }

    let app = restart(app);
    assert_eq!(app.store().guest_count(), 3);
    assert_eq!(app.view(), View::Home);
}

#[test]
fn saved_content_is_read_back_per_category() {
    let mut app = admin_page();
    let updates = Updates {
        upcoming_events: "Sports day moved to March 22nd".into(),
        weekly_review: "Drama club rehearsals went well".into(),
        about_club: "We make short films".into(),
        announcements: "Uniform check on Monday".into(),
    };
    app.save_updates(updates.clone()).unwrap();
    app.back().unwrap();

    let mut app = restart(app);
    assert_eq!(app.store().updates(), &updates);

    app.advance().unwrap();
    app.guest_access().unwrap();
    for category in Category::ALL {
        app.view_detail(category).unwrap();
        let detail = app.detail().unwrap();
        assert_eq!(detail.title, category.title());
        assert_eq!(detail.content, updates.get(category));
        app.back().unwrap();
    }
}

#[test]
fn replaced_credentials_take_over_from_the_old_pair() {
    let mut app = admin_page();
    assert_eq!(
        app.update_credentials("", "secret"),
        Err(ActionError::EmptyCredentials)
    );
    assert_eq!(
        app.update_credentials("root", ""),
        Err(ActionError::EmptyCredentials)
    );
    assert_eq!(app.store().credentials().username, "admin");

    app.update_credentials("root", "secret").unwrap();
    app.back().unwrap();

    let mut app = restart(app);
    app.advance().unwrap();
    assert_eq!(
        app.login(&form("admin", "admin")),
        Err(ActionError::InvalidLogin)
    );
    assert_eq!(app.login(&form("root", "secret")), Ok(Grant::Admin));
}

#[test]
fn remember_me_persists_or_removes_the_login() {
    let mut app = login_page();
    let remembered = LoginForm {
        account: "staff".into(),
        password: "p@ss word".into(),
        save_login: true,
    };
    let _ = app.login(&remembered);

    let mut app = restart(app);
    assert_eq!(app.initial_login_form(), remembered);

    app.advance().unwrap();
    let _ = app.login(&form("staff", "p@ss word"));
    assert!(app.store().saved_login().is_none());

    let app = restart(app);
    assert_eq!(app.initial_login_form(), LoginForm::default());
}

#[test]
fn corrupt_record_is_reported_and_others_still_load() {
    let backend = MemoryBackend::with_entries([
        ("schoolUpdates", "{not json"),
        ("comments", r#"["kept"]"#),
        ("guestCount", "12"),
    ]);
    let (app, errors) = AppState::new(backend, AppConfig::default());

    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("schoolUpdates"));
    assert_eq!(app.store().updates(), &Updates::default());
    assert_eq!(app.store().comments(), ["kept"]);
    assert_eq!(app.store().guest_count(), 12);
    assert_eq!(app.store().backend().raw("schoolUpdates"), Some("{not json"));
}

#[test]
fn there_is_no_shortcut_from_admin_to_posts() {
    let mut app = admin_page();
    assert_eq!(app.back(), Ok(View::Login));
    assert_eq!(app.guest_access(), Ok(1));
    assert_eq!(app.view(), View::Posts);
    assert!(matches!(
        app.login(&form("admin", "admin")),
        Err(ActionError::Transition(_))
    ));
}
