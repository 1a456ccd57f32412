//! End-to-end flows through the composed application.

use std::sync::Arc;

use orbitera_application::OrbiteraApp;
use orbitera_core::auth::{ADMIN_EMAIL, ADMIN_PASSWORD};
use orbitera_core::config::AppConfig;
use orbitera_core::record::{ContactSubmission, ProjectDraft, RecordStore};
use orbitera_core::routing::{Navigation, Route};
use orbitera_core::storage::{KeyValueStore, MESSAGES_KEY};
use orbitera_infrastructure::FileKeyValueStore;
use tempfile::TempDir;

fn open_app(dir: &TempDir) -> OrbiteraApp {
    let storage = FileKeyValueStore::open(dir.path().join("local_storage.json")).unwrap();
    OrbiteraApp::bootstrap(&AppConfig::without_delays(), Arc::new(storage)).unwrap()
}

#[tokio::test]
async fn wrong_password_keeps_admin_locked() {
    let dir = TempDir::new().unwrap();
    let app = open_app(&dir);

    assert!(app.auth.submit_login(ADMIN_EMAIL, "wrong").await.is_err());
    assert!(!app.session.is_authenticated());
    assert_eq!(
        app.navigate("/admin/messages").unwrap(),
        Navigation::Redirect {
            from: Route::AdminMessages,
            to: Route::Login
        }
    );
}

#[tokio::test]
async fn session_survives_restart_until_logout() {
    let dir = TempDir::new().unwrap();
    {
        let app = open_app(&dir);
        let nav = app.auth.submit_login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
        assert_eq!(nav.destination(), Route::AdminDashboard);
    }

    let app = open_app(&dir);
    assert!(app.session.is_authenticated());
    assert_eq!(app.dashboard().unwrap().welcome_name, "Thoyyib");
    assert_eq!(
        app.navigate("/admin/projects").unwrap(),
        Navigation::Render(Route::AdminProjects)
    );

    app.auth.logout().unwrap();
    let reopened = open_app(&dir);
    assert!(!reopened.session.is_authenticated());
    assert!(reopened.navigate("/admin").unwrap().is_redirect());
}

#[tokio::test]
async fn contact_message_persists_and_reaches_inbox() {
    let dir = TempDir::new().unwrap();
    let sent = {
        let app = open_app(&dir);
        app.contact
            .submit(ContactSubmission::new("A", "a@b.com", "S", "M"))
            .await
            .unwrap()
    };

    let app = open_app(&dir);
    let stored = app.messages.list().unwrap();
    assert_eq!(stored, vec![sent.clone()]);
    assert!(chrono::DateTime::parse_from_rfc3339(&sent.timestamp).is_ok());

    let inbox = app.inbox().unwrap();
    assert_eq!(inbox.count_label(), "1 message");
    assert_eq!(app.dashboard().unwrap().message_count, 1);
}

#[tokio::test]
async fn transient_catalog_resets_on_restart() {
    let dir = TempDir::new().unwrap();
    {
        let app = open_app(&dir);
        app.projects.submit(ProjectDraft::new("Orbit", "Landing")).unwrap();
        assert_eq!(app.dashboard().unwrap().project_count, 3);
    }

    let storage = FileKeyValueStore::open(dir.path().join("local_storage.json")).unwrap();
    assert_eq!(storage.get_item(MESSAGES_KEY).unwrap(), None);

    let app = open_app(&dir);
    assert_eq!(app.dashboard().unwrap().project_count, 2);
    assert_eq!(app.dashboard().unwrap().service_count, 3);
}
