// Common test utilities for integration tests
#![allow(dead_code)]

use poem::http::header;
use poem::test::{TestClient, TestResponse};
use poem::Endpoint;
use std::sync::{Arc, Mutex};
use storefront_backend::api::build_app;
use storefront_backend::app_data::AppData;
use storefront_backend::config::{MockEnvironment, SecretManager, Settings, init_database};
use tempfile::TempDir;

pub const TEST_PEPPER: &str = "test-pepper-for-integration";
pub const ADMIN_USERNAME: &str = "fouzi";
pub const ADMIN_PASSWORD: &str = "admin-V1";
pub const LANDING_HTML: &str = "<h1>Welcome to the shop</h1>";
pub const ADMIN_HTML: &str = "<h1>Admin dashboard</h1>";

/// Directories backing one test server
pub struct TestDirs {
    pub pages: TempDir,
    pub styles: TempDir,
    pub uploads: TempDir,
}

impl TestDirs {
    pub fn new() -> Self {
        let pages = TempDir::new().expect("Failed to create pages dir");
        std::fs::create_dir_all(pages.path().join("admin")).expect("Failed to create admin dir");
        std::fs::write(pages.path().join("intro.html"), LANDING_HTML)
            .expect("Failed to write landing page");
        std::fs::write(pages.path().join("admin").join("admin.html"), ADMIN_HTML)
            .expect("Failed to write admin page");

        let styles = TempDir::new().expect("Failed to create styles dir");
        std::fs::write(styles.path().join("style.css"), "body { margin: 0; }")
            .expect("Failed to write stylesheet");

        let uploads = TempDir::new().expect("Failed to create uploads dir");

        Self {
            pages,
            styles,
            uploads,
        }
    }

    /// Environment pointing every setting at these directories and an in-memory store
    pub fn environment(&self) -> MockEnvironment {
        MockEnvironment::empty()
            .with_var("DATABASE_URL", "sqlite::memory:")
            .with_var("PAGES_DIR", &self.pages.path().display().to_string())
            .with_var("STYLES_DIR", &self.styles.path().display().to_string())
            .with_var("UPLOADS_DIR", &self.uploads.path().display().to_string())
            .with_var("PASSWORD_PEPPER", TEST_PEPPER)
    }
}

/// Creates AppData over a fresh in-memory database, bootstrapped
pub async fn setup_app_data(dirs: &TestDirs) -> Arc<AppData> {
    let env = dirs.environment();
    let settings = Settings::from_env_provider(&env).expect("Invalid test settings");
    let secrets = SecretManager::from_env_provider(&env).expect("Invalid test secrets");

    let db = init_database(&settings.database_url)
        .await
        .expect("Failed to create test database");
    let app_data = AppData::init(db, settings, &secrets)
        .await
        .expect("Failed to init AppData");
    app_data.bootstrap().await.expect("Failed to bootstrap schema");

    Arc::new(app_data)
}

/// Creates a test client over the fully assembled route tree
pub async fn setup_test_client() -> (TestClient<impl Endpoint>, TestDirs) {
    let dirs = TestDirs::new();
    let app_data = setup_app_data(&dirs).await;
    (TestClient::new(build_app(app_data)), dirs)
}

/// Extract the `name=value` pair of the session cookie from a response
pub fn session_cookie(resp: &TestResponse) -> String {
    let set_cookie = resp
        .0
        .headers()
        .get(header::SET_COOKIE)
        .expect("Response did not set a cookie")
        .to_str()
        .expect("Cookie is not ASCII");

    set_cookie
        .split(';')
        .next()
        .expect("Empty cookie")
        .trim()
        .to_string()
}

/// Log in with the default admin and return the session cookie
pub async fn login<E: Endpoint>(cli: &TestClient<E>) -> String {
    let resp = cli
        .post("/login")
        .form(&[("username", ADMIN_USERNAME), ("password", ADMIN_PASSWORD)])
        .send()
        .await;
    resp.assert_status_is_ok();
    session_cookie(&resp)
}

/// Read a response body as JSON
pub async fn json_body(resp: TestResponse) -> serde_json::Value {
    resp.0
        .into_body()
        .into_json()
        .await
        .expect("Response body is not JSON")
}

/// The response's `Content-Type`, or empty
pub fn content_type(resp: &TestResponse) -> String {
    resp.0
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Read a response body as text
pub async fn text_body(resp: TestResponse) -> String {
    resp.0
        .into_body()
        .into_string()
        .await
        .expect("Response body is not text")
}

/// Helper to manage environment variables in tests
///
/// Cleans up specified environment variables on creation and drop,
/// ensuring test isolation when dealing with global environment state.
pub struct EnvGuard {
    vars: Vec<String>,
}

impl EnvGuard {
    pub fn new(vars: Vec<&str>) -> Self {
        for var in &vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
        Self {
            vars: vars.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in &self.vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }
}

/// Global mutex for tests that modify environment variables
///
/// Environment variables are process-global, so tests that modify them
/// must run serially to avoid race conditions.
pub static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());
