// ============================================================================
// SIGNUP VIEWMODEL - form state + submit flow
// ============================================================================
// Returns values / emits actions; the hook owns the Yew state
// ============================================================================

use crate::models::{AuthToken, Credentials};
use crate::services::{ApiClient, SignupApi};
use crate::utils::constants::{LABEL_SUBMIT, LABEL_SUBMITTING};
use crate::viewmodels::password_policy::validate;

/// Everything the form owns
#[derive(Debug, Clone, PartialEq)]
pub struct SignupFormState {
    pub username: String,
    pub password: String,
    pub validation_errors: Vec<String>,
    /// Empty when there is nothing to show
    pub api_error: String,
    pub is_submitting: bool,
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetUsername(String),
    SetPassword(String),
    SubmitStarted,
    SubmitFinished { api_error: Option<String> },
}

impl SignupFormState {
    /// Empty form with its errors already computed
    pub fn new() -> Self {
        let mut state = Self {
            username: String::new(),
            password: String::new(),
            validation_errors: Vec::new(),
            api_error: String::new(),
            is_submitting: false,
        };
        state.revalidate();
        state
    }

    fn revalidate(&mut self) {
        self.validation_errors = validate(&self.username, &self.password);
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetUsername(username) => {
                self.username = username;
                self.revalidate();
            }
            FormAction::SetPassword(password) => {
                self.password = password;
                self.revalidate();
            }
            FormAction::SubmitStarted => {
                self.api_error.clear();
                self.is_submitting = true;
            }
            FormAction::SubmitFinished { api_error } => {
                self.is_submitting = false;
                if let Some(message) = api_error {
                    self.api_error = message;
                }
            }
        }
    }

    /// Validation passed and the username is not blank
    pub fn is_valid(&self) -> bool {
        self.validation_errors.is_empty() && !self.username.trim().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.is_submitting
    }

    pub fn is_submit_disabled(&self) -> bool {
        !self.can_submit()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            LABEL_SUBMITTING
        } else {
            LABEL_SUBMIT
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created,
    Failed(String),
    /// Form was invalid or a request is already in flight
    Skipped,
}

/// ViewModel for the sign-up form
pub struct SignupViewModel<A: SignupApi = ApiClient> {
    api: A,
}

impl SignupViewModel<ApiClient> {
    pub fn new() -> Self {
        Self::with_api(ApiClient::new())
    }
}

impl Default for SignupViewModel<ApiClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: SignupApi> SignupViewModel<A> {
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// Runs one submission against `state`.
    ///
    /// `dispatch` receives `SubmitStarted` before the request and exactly one
    /// `SubmitFinished` after it, whatever the result. `on_created` runs after
    /// the final dispatch, and only when the server accepted the user.
    pub async fn submit<D, C>(
        &self,
        state: &SignupFormState,
        token: &AuthToken,
        dispatch: D,
        on_created: C,
    ) -> SubmitOutcome
    where
        D: Fn(FormAction),
        C: FnOnce(),
    {
        if !state.can_submit() {
            log::debug!("Submit ignored: form invalid or request in flight");
            return SubmitOutcome::Skipped;
        }

        let credentials = state.credentials();
        dispatch(FormAction::SubmitStarted);
        log::info!("🔐 Submitting sign-up for {}", credentials.username);

        let outcome = match self.api.create_user(token, &credentials).await {
            Ok(()) => SubmitOutcome::Created,
            Err(e) => {
                log::error!("❌ Sign-up failed: {}", e);
                SubmitOutcome::Failed(e.user_message().to_string())
            }
        };

        let api_error = match &outcome {
            SubmitOutcome::Failed(message) => Some(message.clone()),
            _ => None,
        };
        dispatch(FormAction::SubmitFinished { api_error });

        if outcome == SubmitOutcome::Created {
            on_created();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::services::ApiError;
    use crate::utils::constants::*;

    struct FakeApi {
        result: Result<(), ApiError>,
        calls: RefCell<Vec<(String, Credentials)>>,
    }

    impl FakeApi {
        fn returning(result: Result<(), ApiError>) -> Self {
            Self {
                result,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn status(status: u16, message: Option<&str>) -> Self {
            Self::returning(Err(ApiError::Status {
                status,
                message: message.map(str::to_string),
            }))
        }
    }

    #[async_trait(?Send)]
    impl SignupApi for FakeApi {
        async fn create_user(&self, token: &AuthToken, credentials: &Credentials) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push((token.bearer(), credentials.clone()));
            self.result.clone()
        }
    }

    fn filled(username: &str, password: &str) -> SignupFormState {
        let mut state = SignupFormState::new();
        state.apply(FormAction::SetUsername(username.to_string()));
        state.apply(FormAction::SetPassword(password.to_string()));
        state
    }

    fn token() -> AuthToken {
        AuthToken::new("tok3n").unwrap()
    }

    /// Submits `state` against `api`, applying every dispatched action to a
    /// copy of the state. Returns the outcome, final state and whether the
    /// parent was notified.
    fn run(api: FakeApi, state: &SignupFormState) -> (SubmitOutcome, SignupFormState, bool, FakeApi) {
        let vm = SignupViewModel::with_api(api);
        let live = RefCell::new(state.clone());
        let created = Cell::new(false);

        let outcome = block_on(vm.submit(
            state,
            &token(),
            |action| live.borrow_mut().apply(action),
            || created.set(true),
        ));

        (outcome, live.into_inner(), created.get(), vm.api)
    }

    #[test]
    fn new_form_reports_missing_fields() {
        let state = SignupFormState::new();
        assert_eq!(state.validation_errors[0], MSG_USERNAME_REQUIRED);
        assert!(state.is_submit_disabled());
        assert_eq!(state.submit_label(), LABEL_SUBMIT);
    }

    #[test]
    fn good_input_enables_submit() {
        let state = filled("alice", "GoodPass123");
        assert!(state.validation_errors.is_empty());
        assert!(!state.is_submit_disabled());
    }

    #[test]
    fn disabled_conditions() {
        assert!(filled("alice", "short1").is_submit_disabled());
        assert!(filled("   ", "GoodPass123").is_submit_disabled());

        let mut state = filled("alice", "GoodPass123");
        state.apply(FormAction::SubmitStarted);
        assert!(state.is_submit_disabled());
        assert_eq!(state.submit_label(), LABEL_SUBMITTING);
    }

    #[test]
    fn typing_while_submitting_keeps_flag() {
        let mut state = filled("alice", "GoodPass123");
        state.apply(FormAction::SubmitStarted);
        state.apply(FormAction::SetPassword("GoodPass1234".to_string()));
        assert!(state.is_submitting);
        assert_eq!(state.password, "GoodPass1234");
    }

    #[test]
    fn success_notifies_parent() {
        let (outcome, state, created, api) =
            run(FakeApi::returning(Ok(())), &filled("alice", "GoodPass123"));

        assert_eq!(outcome, SubmitOutcome::Created);
        assert!(created);
        assert!(!state.is_submitting);
        assert!(state.api_error.is_empty());

        let calls = api.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Bearer tok3n");
        assert_eq!(calls[0].1, Credentials::new("alice", "GoodPass123"));
    }

    #[test]
    fn forbidden_shows_auth_message() {
        let (outcome, state, created, _) =
            run(FakeApi::status(403, None), &filled("alice", "GoodPass123"));

        assert_eq!(outcome, SubmitOutcome::Failed(MSG_NOT_AUTHENTICATED.to_string()));
        assert_eq!(state.api_error, MSG_NOT_AUTHENTICATED);
        assert!(!state.is_submitting);
        assert!(!created);
    }

    #[test]
    fn rejected_password_shows_policy_message() {
        let (_, state, created, _) = run(
            FakeApi::status(500, Some("Password not allowed: too common")),
            &filled("alice", "GoodPass123"),
        );

        assert_eq!(state.api_error, MSG_PASSWORD_NOT_ALLOWED);
        assert!(!created);
    }

    #[test]
    fn network_failure_shows_generic_message() {
        let (_, state, _, _) = run(
            FakeApi::returning(Err(ApiError::Network("Failed to fetch".to_string()))),
            &filled("alice", "GoodPass123"),
        );

        assert_eq!(state.api_error, MSG_GENERIC_FAILURE);
        assert!(!state.is_submitting);
    }

    #[test]
    fn resubmit_clears_previous_error() {
        let mut state = filled("alice", "GoodPass123");
        state.api_error = MSG_GENERIC_FAILURE.to_string();

        let (outcome, after, _, _) = run(FakeApi::returning(Ok(())), &state);
        assert_eq!(outcome, SubmitOutcome::Created);
        assert!(after.api_error.is_empty());
    }

    #[test]
    fn invalid_form_never_hits_network() {
        let (outcome, state, created, api) =
            run(FakeApi::returning(Ok(())), &filled("alice", "short1"));

        assert_eq!(outcome, SubmitOutcome::Skipped);
        assert!(!created);
        assert!(!state.is_submitting);
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn in_flight_submit_is_ignored() {
        let mut state = filled("alice", "GoodPass123");
        state.apply(FormAction::SubmitStarted);

        let (outcome, _, _, api) = run(FakeApi::returning(Ok(())), &state);
        assert_eq!(outcome, SubmitOutcome::Skipped);
        assert!(api.calls.borrow().is_empty());
    }
}
