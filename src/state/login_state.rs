// ============================================================================
// LOGIN STATE - Form input plus the phase of the current attempt
// ============================================================================

use std::fmt;

use crate::models::CredentialInput;
use crate::utils::{LABEL_LOGGING_IN, LABEL_LOGIN, MSG_FILL_ALL_FIELDS, MSG_LOGIN_FAILED};

/// User-visible cause of a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// A field was left empty. No request was sent.
    MissingFields,
    /// Network error, non-2xx answer, or the credential could not be stored.
    Rejected,
}

impl FailureReason {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFields => MSG_FILL_ALL_FIELDS,
            Self::Rejected => MSG_LOGIN_FAILED,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// idle -> validating -> submitting -> succeeded | failed
///
/// `Failed` holds the only error there is, and only `Submitting` is loading,
/// so "loading with an error" cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed { reason: FailureReason },
}

impl LoginPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error_message(self) -> Option<&'static str> {
        match self {
            Self::Failed { reason } => Some(reason.message()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub input: CredentialInput,
    pub phase: LoginPhase,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.input.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.input.password = password.into();
    }

    /// Start of an attempt. Clears any previous error.
    pub fn begin_attempt(&mut self) {
        self.phase = LoginPhase::Validating;
    }

    pub fn start_submitting(&mut self) {
        self.phase = LoginPhase::Submitting;
    }

    pub fn succeed(&mut self) {
        self.phase = LoginPhase::Succeeded;
    }

    pub fn fail(&mut self, reason: FailureReason) {
        self.phase = LoginPhase::Failed { reason };
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.phase.error_message()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            LABEL_LOGGING_IN
        } else {
            LABEL_LOGIN
        }
    }
}
