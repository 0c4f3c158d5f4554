use super::*;

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::executor::block_on;

use crate::util::storage::MemoryStore;

// =============================================================
// Scripted transport fake
// =============================================================

#[derive(Default)]
struct FakeAuthApi {
    login_results: RefCell<VecDeque<Result<LoginSuccess, ApiError>>>,
    logout_result: RefCell<Option<Result<(), ApiError>>>,
    me_results: RefCell<VecDeque<Result<User, ApiError>>>,
    me_calls: RefCell<usize>,
}

impl FakeAuthApi {
    fn with_login(outcome: Result<LoginSuccess, ApiError>) -> Self {
        let api = Self::default();
        api.login_results.borrow_mut().push_back(outcome);
        api
    }

    fn with_me(outcome: Result<User, ApiError>) -> Self {
        let api = Self::default();
        api.me_results.borrow_mut().push_back(outcome);
        api
    }
}

impl AuthApi for FakeAuthApi {
    async fn login(&self, _credentials: &LoginCredentials) -> Result<LoginSuccess, ApiError> {
        self.login_results
            .borrow_mut()
            .pop_front()
            .expect("unexpected login call")
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_result.borrow_mut().take().unwrap_or(Ok(()))
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        *self.me_calls.borrow_mut() += 1;
        self.me_results
            .borrow_mut()
            .pop_front()
            .expect("unexpected current_user call")
    }
}

fn admin_user() -> User {
    User {
        id: 1,
        email: "admin@example.com".to_owned(),
        name: "Admin".to_owned(),
        role: Role::Admin,
        active: Some(true),
        created_at: None,
        updated_at: None,
    }
}

fn member_user() -> User {
    User {
        id: 2,
        email: "member@example.com".to_owned(),
        name: "Member".to_owned(),
        role: Role::User,
        active: Some(true),
        created_at: None,
        updated_at: None,
    }
}

fn credentials() -> LoginCredentials {
    LoginCredentials {
        email: "admin@example.com".to_owned(),
        password: "hunter22".to_owned(),
    }
}

fn success(token: &str, user: User) -> Result<LoginSuccess, ApiError> {
    Ok(LoginSuccess {
        token: token.to_owned(),
        user,
    })
}

/// A store whose storage already holds a valid signed-in session.
fn signed_in_store() -> (SessionStore<MemoryStore>, MemoryStore) {
    let storage = MemoryStore::default();
    storage.set(TOKEN_KEY, "seed-token");
    storage.set(
        USER_KEY,
        &serde_json::to_string(&admin_user()).expect("encode user"),
    );
    let mut store = SessionStore::new(storage.clone());
    store.initialize_auth();
    assert!(store.session.is_authenticated());
    (store, storage)
}

// =============================================================
// Construction and derived flags
// =============================================================

#[test]
fn default_session_is_not_authenticated() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert!(!session.loading);
}

#[test]
fn new_store_seeds_token_but_not_user() {
    let storage = MemoryStore::default();
    storage.set(TOKEN_KEY, "survivor");
    let store = SessionStore::new(storage);
    assert_eq!(store.session.token.as_deref(), Some("survivor"));
    assert_eq!(store.session.user, None);
    assert!(!store.session.is_authenticated());
}

#[test]
fn is_admin_requires_admin_role() {
    let mut session = Session {
        user: Some(member_user()),
        token: Some("t".to_owned()),
        ..Session::default()
    };
    assert!(session.is_authenticated());
    assert!(!session.is_admin());

    session.user = Some(admin_user());
    assert!(session.is_admin());
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_stores_session_and_persists_both_keys() {
    let storage = MemoryStore::default();
    let mut store = SessionStore::new(storage.clone());
    let api = FakeAuthApi::with_login(success("abc123", admin_user()));

    assert!(block_on(store.login(&api, &credentials())));

    assert!(store.session.is_authenticated());
    assert!(!store.session.loading);
    assert_eq!(store.session.error, None);
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc123"));
    let stored: User =
        serde_json::from_str(&storage.get(USER_KEY).expect("user persisted")).expect("valid json");
    assert_eq!(stored, admin_user());
}

#[test]
fn begin_login_raises_loading_and_clears_error() {
    let mut store = SessionStore::new(MemoryStore::default());
    store.session.error = Some("stale".to_owned());

    store.begin_login();

    assert!(store.session.loading);
    assert_eq!(store.session.error, None);
}

#[test]
fn login_failure_releases_loading_and_keeps_previous_session() {
    let (mut store, storage) = signed_in_store();
    let api = FakeAuthApi::with_login(Err(ApiError::Transport("connection refused".to_owned())));

    assert!(!block_on(store.login(&api, &credentials())));

    assert!(!store.session.loading);
    assert!(store.session.is_authenticated(), "previous session survives");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("seed-token"));
    assert!(storage.get(USER_KEY).is_some());
}

#[test]
fn login_missing_header_sets_no_header_message() {
    let mut store = SessionStore::new(MemoryStore::default());
    let api = FakeAuthApi::with_login(Err(ApiError::NoAuthHeader));

    assert!(!block_on(store.login(&api, &credentials())));

    assert_eq!(
        store.session.error.as_deref(),
        Some("no authorization token received from server")
    );
}

#[test]
fn login_invalid_body_sets_distinct_format_message() {
    let mut store = SessionStore::new(MemoryStore::default());
    let api = FakeAuthApi::with_login(Err(ApiError::InvalidResponseFormat));

    assert!(!block_on(store.login(&api, &credentials())));

    let message = store.session.error.expect("error recorded");
    assert_eq!(message, "invalid response format from server");
    assert_ne!(message, ApiError::NoAuthHeader.to_string());
}

#[test]
fn login_prefers_server_payload_message() {
    let mut store = SessionStore::new(MemoryStore::default());
    let api = FakeAuthApi::with_login(Err(ApiError::Server {
        status: 401,
        message: "Invalid email or password.".to_owned(),
    }));

    assert!(!block_on(store.login(&api, &credentials())));

    assert_eq!(store.session.error.as_deref(), Some("Invalid email or password."));
}

#[test]
fn login_falls_back_to_generic_message() {
    let mut store = SessionStore::new(MemoryStore::default());
    let api = FakeAuthApi::with_login(Err(ApiError::Server {
        status: 500,
        message: String::new(),
    }));

    assert!(!block_on(store.login(&api, &credentials())));
    assert_eq!(store.session.error.as_deref(), Some(GENERIC_LOGIN_FAILURE));

    let api = FakeAuthApi::with_login(Err(ApiError::Transport("timed out".to_owned())));
    assert!(!block_on(store.login(&api, &credentials())));
    assert_eq!(store.session.error.as_deref(), Some(GENERIC_LOGIN_FAILURE));
}

#[test]
fn failed_then_successful_login_clears_error() {
    let mut store = SessionStore::new(MemoryStore::default());

    let api = FakeAuthApi::with_login(Err(ApiError::NoAuthHeader));
    assert!(!block_on(store.login(&api, &credentials())));
    assert!(store.session.error.is_some());

    let api = FakeAuthApi::with_login(success("abc123", admin_user()));
    assert!(block_on(store.login(&api, &credentials())));
    assert_eq!(store.session.error, None);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_memory_and_storage() {
    let (mut store, storage) = signed_in_store();
    let api = FakeAuthApi::default();

    block_on(store.logout(&api));

    assert!(!store.session.is_authenticated());
    assert_eq!(store.session.token, None);
    assert_eq!(store.session.user, None);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn logout_clears_even_when_remote_call_fails() {
    let (mut store, storage) = signed_in_store();
    let api = FakeAuthApi::default();
    *api.logout_result.borrow_mut() =
        Some(Err(ApiError::Transport("connection reset".to_owned())));

    block_on(store.logout(&api));

    assert!(!store.session.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

// =============================================================
// Check auth
// =============================================================

#[test]
fn check_auth_without_token_skips_network() {
    let mut store = SessionStore::new(MemoryStore::default());
    let api = FakeAuthApi::default();

    assert!(!block_on(store.check_auth(&api)));
    assert_eq!(*api.me_calls.borrow(), 0, "no network call without a token");
}

#[test]
fn check_auth_replaces_user_on_success() {
    let (mut store, _storage) = signed_in_store();
    let api = FakeAuthApi::with_me(Ok(member_user()));

    assert!(block_on(store.check_auth(&api)));

    assert_eq!(*api.me_calls.borrow(), 1);
    assert_eq!(store.session.user, Some(member_user()));
    assert!(store.session.is_authenticated());
}

#[test]
fn check_auth_failure_invalidates_session() {
    let (mut store, storage) = signed_in_store();
    let api = FakeAuthApi::with_me(Err(ApiError::Server {
        status: 401,
        message: "unauthorized".to_owned(),
    }));

    assert!(!block_on(store.check_auth(&api)));

    assert_eq!(store.session.token, None);
    assert_eq!(store.session.user, None);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn initialize_adopts_stored_pair() {
    let storage = MemoryStore::default();
    storage.set(TOKEN_KEY, "abc123");
    storage.set(
        USER_KEY,
        &serde_json::to_string(&member_user()).expect("encode user"),
    );
    let mut store = SessionStore::new(storage);

    store.initialize_auth();

    assert!(store.session.is_authenticated());
    assert_eq!(store.session.token.as_deref(), Some("abc123"));
    assert_eq!(store.session.user, Some(member_user()));
}

#[test]
fn initialize_with_corrupt_user_purges_storage() {
    let storage = MemoryStore::default();
    storage.set(TOKEN_KEY, "abc123");
    storage.set(USER_KEY, "{not valid json");
    let mut store = SessionStore::new(storage.clone());

    store.initialize_auth();

    assert_eq!(store.session.token, None);
    assert_eq!(store.session.user, None);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn initialize_after_corruption_is_idempotent() {
    let storage = MemoryStore::default();
    storage.set(TOKEN_KEY, "abc123");
    storage.set(USER_KEY, "[]");
    let mut store = SessionStore::new(storage.clone());

    store.initialize_auth();
    store.initialize_auth();

    assert_eq!(store.session, Session::default());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn initialize_with_missing_user_record_clears_stale_token() {
    let storage = MemoryStore::default();
    storage.set(TOKEN_KEY, "abc123");
    let mut store = SessionStore::new(storage.clone());
    assert!(store.session.token.is_some());

    store.initialize_auth();

    assert_eq!(store.session, Session::default());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn decode_stored_user_reports_corruption() {
    assert_eq!(
        decode_stored_user("not json").unwrap_err(),
        ApiError::CorruptStoredSession
    );
    assert!(decode_stored_user(&serde_json::to_string(&admin_user()).expect("encode")).is_ok());
}
