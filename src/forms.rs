//! Form Validation and Submission
//!
//! Field validation, payload normalization and the submit flows behind each
//! modal. Flows are generic over the API traits so the same code runs
//! against [`crate::api::HttpApi`] and in-memory doubles.

use thiserror::Error;
use uuid::Uuid;

use crate::api::{ApiError, AuthApi, ContentApi};
use crate::models::{Content, CreateContent, LoginRequest, SignupRequest, Tag, UpdateContent};
use crate::session::{Session, SessionError};

// ========================
// Field Names
// ========================

pub const TITLE: &str = "title";
pub const CONTENT: &str = "content";
pub const URL: &str = "url";
pub const TAG: &str = "tagId";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

// ========================
// Validation
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Failed fields in form order
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .0.iter().map(|e| e.message).collect::<Vec<_>>().join(". "))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.0.push(FieldError { field, message });
        }
    }

    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// Why a submission did not go through
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl FormError {
    pub fn field(&self, field: &str) -> Option<&'static str> {
        match self {
            FormError::Invalid(errors) => errors.field(field),
            _ => None,
        }
    }

    /// Message not tied to a single field
    pub fn general(&self) -> Option<String> {
        match self {
            FormError::Invalid(_) => None,
            other => Some(other.to_string()),
        }
    }
}

// ========================
// Modal Form State
// ========================

/// Field values plus submission status for one modal
#[derive(Debug, Default)]
pub struct FormState<F> {
    pub form: F,
    pub error: Option<FormError>,
    pub pending: bool,
}

impl<F: Default + Clone> FormState<F> {
    pub fn new(form: F) -> Self {
        Self { form, error: None, pending: false }
    }

    /// Snapshot the fields for submission; `None` while one is in flight
    pub fn begin_submit(&mut self) -> Option<F> {
        if self.pending {
            return None;
        }
        self.pending = true;
        self.error = None;
        Some(self.form.clone())
    }

    /// Success clears the form; failure keeps the fields and records the error
    pub fn finish<T>(&mut self, result: Result<T, FormError>) -> Option<T> {
        self.pending = false;
        match result {
            Ok(value) => {
                self.form = F::default();
                self.error = None;
                Some(value)
            }
            Err(err) => {
                log::warn!("[FORM] Submission failed: {}", err);
                self.error = Some(err);
                None
            }
        }
    }

    /// Create-path variant of [`finish`](Self::finish): a failure reported by
    /// the server also clears the fields. Validation failures keep them.
    pub fn finish_and_clear<T>(&mut self, result: Result<T, FormError>) -> Option<T> {
        let server_failure = matches!(&result, Err(e) if !matches!(e, FormError::Invalid(_)));
        let value = self.finish(result);
        if server_failure {
            self.form = F::default();
        }
        value
    }

    pub fn reset(&mut self) {
        *self = Self::new(F::default());
    }

    pub fn field_error(&self, field: &str) -> Option<&'static str> {
        self.error.as_ref().and_then(|e| e.field(field))
    }

    pub fn general_error(&self) -> Option<String> {
        self.error.as_ref().and_then(FormError::general)
    }

    /// Every message joined for single-line display
    pub fn summary(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

// ========================
// Content Forms
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentForm {
    pub title: String,
    pub content: String,
    pub url: String,
    /// Raw select value; empty until a tag is picked
    pub tag_id: String,
}

/// Validated, normalized content fields
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDraft {
    pub title: String,
    pub content: String,
    pub url: String,
    pub tag_id: u32,
}

impl ContentForm {
    /// Pre-fill from an existing item, matching its tag by name
    pub fn from_content(content: &Content, tags: &[Tag]) -> Self {
        Self {
            title: content.title.clone(),
            content: content.content.clone(),
            url: content.url.clone().unwrap_or_default(),
            tag_id: matching_tag_id(content, tags),
        }
    }

    /// Select the item's tag once the tag list is known, unless one is
    /// already selected
    pub fn fill_missing_tag(&mut self, content: &Content, tags: &[Tag]) {
        if self.tag_id.is_empty() {
            self.tag_id = matching_tag_id(content, tags);
        }
    }

    pub fn validate(&self) -> Result<ContentDraft, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require(TITLE, &self.title, "Title is required");
        errors.require(CONTENT, &self.content, "Content is required");
        errors.require(URL, &self.url, "URL is required");
        let tag_id = self.tag_id.trim().parse::<u32>().ok();
        if tag_id.is_none() {
            errors.push(TAG, "Tag is required");
        }
        errors.into_result(|| ContentDraft {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            url: self.url.trim().to_string(),
            tag_id: tag_id.unwrap_or_default(),
        })
    }
}

fn matching_tag_id(content: &Content, tags: &[Tag]) -> String {
    tags.iter()
        .find(|t| t.name == content.tag)
        .map(|t| t.id.to_string())
        .unwrap_or_default()
}

impl ContentDraft {
    pub fn into_create(self, unique_id: String) -> CreateContent {
        CreateContent {
            unique_id,
            title: self.title,
            content: self.content,
            url: self.url,
            tag_id: self.tag_id,
        }
    }

    pub fn into_update(self) -> UpdateContent {
        UpdateContent {
            title: self.title,
            content: self.content,
            url: self.url,
            tag_id: self.tag_id,
        }
    }
}

/// Fresh key so the server can drop duplicate create requests
pub fn idempotency_key() -> String {
    Uuid::new_v4().to_string()
}

pub async fn submit_create<A: ContentApi + ?Sized>(api: &A, form: &ContentForm) -> Result<(), FormError> {
    let payload = form.validate()?.into_create(idempotency_key());
    api.create_content(&payload).await?;
    log::info!("[FORM] Created content {:?}", payload.title);
    Ok(())
}

pub async fn submit_update<A: ContentApi + ?Sized>(api: &A, id: u32, form: &ContentForm) -> Result<(), FormError> {
    let payload = form.validate()?.into_update();
    api.update_content(id, &payload).await?;
    log::info!("[FORM] Updated content #{}", id);
    Ok(())
}

pub async fn submit_delete<A: ContentApi + ?Sized>(api: &A, id: u32) -> Result<(), FormError> {
    api.delete_content(id).await?;
    log::info!("[FORM] Deleted content #{}", id);
    Ok(())
}

// ========================
// Auth Form
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthRequest {
    Login(LoginRequest),
    Signup(SignupRequest),
}

impl AuthForm {
    /// Name is only required when signing up
    pub fn validate(&self, mode: AuthMode) -> Result<AuthRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if mode == AuthMode::SignUp {
            errors.require(NAME, &self.name, "Name is required");
        }
        errors.require(EMAIL, &self.email, "Email is required");
        errors.require(PASSWORD, &self.password, "Password is required");
        errors.into_result(|| {
            let email = self.email.trim().to_string();
            let password = self.password.clone();
            match mode {
                AuthMode::SignIn => AuthRequest::Login(LoginRequest { email, password }),
                AuthMode::SignUp => AuthRequest::Signup(SignupRequest {
                    name: self.name.trim().to_string(),
                    email,
                    password,
                }),
            }
        })
    }
}

/// Sign-in/sign-up dialog: current mode plus its form
#[derive(Debug, Default)]
pub struct AuthDialog {
    pub mode: AuthMode,
    pub state: FormState<AuthForm>,
}

impl AuthDialog {
    /// Switch mode, dropping entered fields and any error
    pub fn toggle_mode(&mut self) {
        if self.state.pending {
            return;
        }
        self.mode = self.mode.toggled();
        self.state.reset();
    }
}

/// Log in or sign up and decode the returned token
pub async fn submit_auth<A: AuthApi + ?Sized>(api: &A, mode: AuthMode, form: &AuthForm) -> Result<Session, FormError> {
    let token = match form.validate(mode)? {
        AuthRequest::Login(request) => api.login(&request).await?,
        AuthRequest::Signup(request) => api.signup(&request).await?,
    };
    let session = Session::from_token(&token.token)?;
    log::info!("[FORM] Signed in as {}", session.name);
    Ok(session)
}

#[cfg(test)]
mod tests;
