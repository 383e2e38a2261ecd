//! Submit Flow Tests
//!
//! Exercises validation and the modal submit flows against an in-memory API.

use std::cell::RefCell;

use async_trait::async_trait;

use super::*;
use crate::api::ApiResult;
use crate::models::{AuthToken, ContentPage, ContentQuery};
use crate::session::make_token;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Create(CreateContent),
    Update(u32, UpdateContent),
    Delete(u32),
    Login(LoginRequest),
    Signup(SignupRequest),
}

/// Records calls; fails every mutation when `failure` is set
#[derive(Default)]
struct MockApi {
    calls: RefCell<Vec<Call>>,
    failure: Option<ApiError>,
    token: String,
}

impl MockApi {
    fn failing(message: &str, errors: Option<&str>) -> Self {
        Self {
            failure: Some(ApiError {
                status: Some(400),
                message: message.to_string(),
                errors: errors.map(str::to_string),
            }),
            ..Default::default()
        }
    }

    fn with_token(token: String) -> Self {
        Self { token, ..Default::default() }
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ContentApi for MockApi {
    async fn list_contents(&self, _query: &ContentQuery) -> ApiResult<ContentPage> {
        Err(ApiError::new("not used"))
    }

    async fn create_content(&self, payload: &CreateContent) -> ApiResult<()> {
        self.record(Call::Create(payload.clone()))
    }

    async fn update_content(&self, id: u32, payload: &UpdateContent) -> ApiResult<()> {
        self.record(Call::Update(id, payload.clone()))
    }

    async fn delete_content(&self, id: u32) -> ApiResult<()> {
        self.record(Call::Delete(id))
    }
}

#[async_trait(?Send)]
impl AuthApi for MockApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthToken> {
        self.record(Call::Login(request.clone()))?;
        Ok(AuthToken { token: self.token.clone() })
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<AuthToken> {
        self.record(Call::Signup(request.clone()))?;
        Ok(AuthToken { token: self.token.clone() })
    }
}

fn filled_form() -> ContentForm {
    ContentForm {
        title: "React Hooks Guide".into(),
        content: "A comprehensive guide to hooks".into(),
        url: "https://react.dev".into(),
        tag_id: "3".into(),
    }
}

fn sample_tags() -> Vec<Tag> {
    vec![
        Tag { id: 1, name: "Twitter".into() },
        Tag { id: 3, name: "Docs".into() },
    ]
}

// ========================
// Validation
// ========================

#[test]
fn test_empty_content_form_reports_every_field() {
    let errors = ContentForm::default().validate().expect_err("should fail");
    assert_eq!(errors.field(TITLE), Some("Title is required"));
    assert_eq!(errors.field(CONTENT), Some("Content is required"));
    assert_eq!(errors.field(URL), Some("URL is required"));
    assert_eq!(errors.field(TAG), Some("Tag is required"));
    assert_eq!(
        errors.to_string(),
        "Title is required. Content is required. URL is required. Tag is required"
    );
}

#[test]
fn test_whitespace_only_counts_as_empty() {
    let form = ContentForm { title: "   ".into(), ..filled_form() };
    let errors = form.validate().expect_err("should fail");
    assert_eq!(errors.iter().count(), 1);
    assert_eq!(errors.field(TITLE), Some("Title is required"));
}

#[test]
fn test_tag_id_is_coerced_to_number() {
    let draft = filled_form().validate().expect("valid");
    assert_eq!(draft.tag_id, 3);

    let form = ContentForm { tag_id: "docs".into(), ..filled_form() };
    assert_eq!(form.validate().expect_err("non-numeric").field(TAG), Some("Tag is required"));
}

#[test]
fn test_edit_form_prefill_matches_tag_by_name() {
    let content = Content {
        id: 8,
        title: "Hooks".into(),
        content: "Guide".into(),
        url: None,
        link: None,
        tag: "Docs".into(),
        user_id: None,
        unique_id: None,
    };
    let form = ContentForm::from_content(&content, &sample_tags());
    assert_eq!(form.tag_id, "3");
    assert_eq!(form.url, "");

    let unknown = Content { tag: "Podcasts".into(), ..content };
    assert_eq!(ContentForm::from_content(&unknown, &sample_tags()).tag_id, "");
}

#[test]
fn test_late_tag_list_fills_only_an_empty_selection() {
    let content = Content {
        id: 8,
        title: "Hooks".into(),
        content: "Guide".into(),
        url: Some("https://react.dev".into()),
        link: None,
        tag: "Docs".into(),
        user_id: None,
        unique_id: None,
    };
    // opened before tags arrived, then the user edited the title
    let mut form = ContentForm::from_content(&content, &[]);
    assert_eq!(form.tag_id, "");
    form.title = "Hooks, revised".into();

    form.fill_missing_tag(&content, &sample_tags());
    assert_eq!(form.tag_id, "3");
    assert_eq!(form.title, "Hooks, revised");

    form.tag_id = "1".into();
    form.fill_missing_tag(&content, &sample_tags());
    assert_eq!(form.tag_id, "1");
}

#[test]
fn test_auth_name_required_only_for_sign_up() {
    let form = AuthForm { name: String::new(), email: "a@b.c".into(), password: "pw".into() };
    assert!(matches!(form.validate(AuthMode::SignIn), Ok(AuthRequest::Login(_))));

    let errors = form.validate(AuthMode::SignUp).expect_err("name missing");
    assert_eq!(errors.field(NAME), Some("Name is required"));

    let errors = AuthForm::default().validate(AuthMode::SignIn).expect_err("empty");
    assert_eq!(errors.to_string(), "Email is required. Password is required");
}

// ========================
// Create / Update / Delete
// ========================

#[tokio::test]
async fn test_create_calls_api_once_with_key_and_numeric_tag() {
    let api = MockApi::default();
    let mut state = FormState::new(filled_form());

    let form = state.begin_submit().expect("not pending");
    let result = submit_create(&api, &form).await;
    assert_eq!(state.finish_and_clear(result), Some(()));

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        Call::Create(payload) => {
            assert!(!payload.unique_id.is_empty());
            assert_eq!(payload.tag_id, 3);
            assert_eq!(payload.title, "React Hooks Guide");
        }
        other => panic!("unexpected call {:?}", other),
    }
    // success closes: form cleared, no error, not pending
    assert_eq!(state.form, ContentForm::default());
    assert!(state.error.is_none());
    assert!(!state.pending);
}

#[tokio::test]
async fn test_each_create_gets_a_fresh_idempotency_key() {
    let api = MockApi::default();
    submit_create(&api, &filled_form()).await.expect("first");
    submit_create(&api, &filled_form()).await.expect("second");
    let keys: Vec<String> = api
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            Call::Create(p) => Some(p.unique_id),
            _ => None,
        })
        .collect();
    assert_eq!(keys.len(), 2);
    assert_ne!(keys[0], keys[1]);
}

#[tokio::test]
async fn test_missing_field_blocks_remote_call() {
    let api = MockApi::default();
    let mut state = FormState::new(ContentForm { url: String::new(), ..filled_form() });

    let form = state.begin_submit().expect("not pending");
    let result = submit_create(&api, &form).await;
    assert_eq!(state.finish_and_clear(result), None);

    assert!(api.calls().is_empty());
    // nothing was sent, so the typed values stay
    assert_eq!(state.form.title, "React Hooks Guide");
    assert_eq!(state.field_error(URL), Some("URL is required"));
    assert_eq!(state.summary().as_deref(), Some("URL is required"));
    assert_eq!(state.general_error(), None);
}

#[tokio::test]
async fn test_failed_create_clears_fields_and_shows_server_error() {
    let api = MockApi::failing("Content already exists", Some("duplicate url"));
    let mut state = FormState::new(filled_form());

    let form = state.begin_submit().expect("not pending");
    let result = submit_create(&api, &form).await;
    assert_eq!(state.finish_and_clear(result), None);

    assert_eq!(api.calls().len(), 1);
    assert_eq!(state.form, ContentForm::default());
    assert_eq!(state.general_error().as_deref(), Some("Content already exists: duplicate url"));
    assert_eq!(state.summary().as_deref(), Some("Content already exists: duplicate url"));
    assert!(!state.pending);
}

#[tokio::test]
async fn test_failed_update_keeps_fields() {
    let api = MockApi::failing("Content not found", None);
    let mut state = FormState::new(filled_form());

    let form = state.begin_submit().expect("not pending");
    let result = submit_update(&api, 8, &form).await;
    assert_eq!(state.finish(result), None);

    assert_eq!(state.form, filled_form());
    assert_eq!(state.general_error().as_deref(), Some("Content not found"));
}

#[tokio::test]
async fn test_update_sends_normalized_payload() {
    let api = MockApi::default();
    let form = ContentForm { title: "  Hooks v2 ".into(), ..filled_form() };
    submit_update(&api, 8, &form).await.expect("update");

    assert_eq!(
        api.calls(),
        vec![Call::Update(
            8,
            UpdateContent {
                title: "Hooks v2".into(),
                content: "A comprehensive guide to hooks".into(),
                url: "https://react.dev".into(),
                tag_id: 3,
            }
        )]
    );
}

#[tokio::test]
async fn test_failed_delete_surfaces_message() {
    let api = MockApi::failing("Content not found", None);
    let mut state: FormState<()> = FormState::default();

    state.begin_submit().expect("not pending");
    let result = submit_delete(&api, 5).await;
    assert_eq!(state.finish(result), None);

    assert_eq!(api.calls(), vec![Call::Delete(5)]);
    assert_eq!(state.general_error().as_deref(), Some("Content not found"));
}

#[test]
fn test_second_submit_ignored_while_pending() {
    let mut state = FormState::new(filled_form());
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
    state.finish::<()>(Err(ApiError::new("boom").into()));
    assert!(state.begin_submit().is_some());
}

// ========================
// Auth
// ========================

#[tokio::test]
async fn test_sign_in_decodes_session() {
    let token = make_token(r#"{"name":"Ada","uniqueId":"u-7"}"#);
    let api = MockApi::with_token(token.clone());
    let form = AuthForm { name: String::new(), email: " ada@example.com ".into(), password: "secret".into() };

    let session = submit_auth(&api, AuthMode::SignIn, &form).await.expect("login");
    assert_eq!(session.name, "Ada");
    assert_eq!(session.user_id, "u-7");
    assert_eq!(session.token, token);
    assert_eq!(
        api.calls(),
        vec![Call::Login(LoginRequest { email: "ada@example.com".into(), password: "secret".into() })]
    );
}

#[tokio::test]
async fn test_sign_up_uses_signup_endpoint() {
    let api = MockApi::with_token(make_token(r#"{"name":"Bo","uniqueId":1}"#));
    let form = AuthForm { name: "Bo".into(), email: "bo@example.com".into(), password: "pw".into() };

    let session = submit_auth(&api, AuthMode::SignUp, &form).await.expect("signup");
    assert_eq!(session.user_id, "1");
    assert!(matches!(api.calls().as_slice(), [Call::Signup(_)]));
}

#[tokio::test]
async fn test_auth_failure_reports_server_message() {
    let api = MockApi::failing("Invalid credentials", None);
    let mut dialog = AuthDialog::default();
    dialog.state.form = AuthForm { name: String::new(), email: "a@b.c".into(), password: "bad".into() };

    let form = dialog.state.begin_submit().expect("not pending");
    let result = submit_auth(&api, dialog.mode, &form).await;
    assert!(dialog.state.finish(result).is_none());
    assert_eq!(dialog.state.summary().as_deref(), Some("Invalid credentials"));
    assert_eq!(dialog.state.form.email, "a@b.c");
}

#[tokio::test]
async fn test_undecodable_token_is_a_failure() {
    let api = MockApi::with_token("garbage".into());
    let form = AuthForm { name: String::new(), email: "a@b.c".into(), password: "pw".into() };
    let err = submit_auth(&api, AuthMode::SignIn, &form).await.expect_err("bad token");
    assert!(matches!(err, FormError::Session(_)));
}

#[test]
fn test_toggle_mode_resets_fields_and_error() {
    let mut dialog = AuthDialog::default();
    dialog.state.form.email = "a@b.c".into();
    dialog.state.error = Some(ApiError::new("Login failed").into());

    dialog.toggle_mode();
    assert_eq!(dialog.mode, AuthMode::SignUp);
    assert_eq!(dialog.state.form, AuthForm::default());
    assert!(dialog.state.error.is_none());

    dialog.toggle_mode();
    assert_eq!(dialog.mode, AuthMode::SignIn);
}

#[test]
fn test_toggle_mode_ignored_while_pending() {
    let mut dialog = AuthDialog::default();
    dialog.state.begin_submit();
    dialog.toggle_mode();
    assert_eq!(dialog.mode, AuthMode::SignIn);
}
