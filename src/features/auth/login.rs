//! Two-step face login. The user first names themselves (lookup), then submits
//! one camera frame for that name (verification). Transitions are split into
//! `begin_*`, which validates locally and yields the request to send, and
//! `complete_*`, which consumes the response. Nothing here performs I/O, so
//! the view owns the async calls and the reset timer.

use crate::app_lib::AppError;
use crate::features::auth::session::SessionStore;
use crate::features::auth::types::{FindUserRequest, VerifyFaceRequest, VerifyFaceResponse};
use crate::features::camera::CapturedImage;
use crate::features::status::StatusMessage;
use std::time::Duration;

/// How long a verification failure stays on screen before the flow restarts.
pub const RESET_DELAY: Duration = Duration::from_secs(2);

pub const EMPTY_NAME_MESSAGE: &str = "Please enter your name.";
pub const NO_FRAME_MESSAGE: &str = "Could not capture image. Please try again.";
const LOOKUP_FALLBACK_MESSAGE: &str = "User not found.";
const VERIFY_FALLBACK_MESSAGE: &str = "Face verification failed.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginStep {
    #[default]
    AwaitingName,
    /// The backend confirmed `name`; a face capture is expected next.
    AwaitingFace { name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Token stored; navigate to the dashboard.
    Authenticated,
    /// Keep the error visible, then call [`LoginFlow::reset`] after the delay.
    ResetAfter(Duration),
}

#[derive(Clone, Debug, Default)]
pub struct LoginFlow {
    step: LoginStep,
    name_input: String,
    message: Option<StatusMessage>,
    in_flight: bool,
    reset_pending: bool,
    /// Name sent by the lookup currently in flight.
    pending_lookup: Option<String>,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> &LoginStep {
        &self.step
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// True while a request is in flight or a reset is pending; the view
    /// disables the active step's button.
    pub fn is_busy(&self) -> bool {
        self.in_flight || self.reset_pending
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn greeting(&self) -> Option<String> {
        match &self.step {
            LoginStep::AwaitingFace { name } => {
                Some(format!("Welcome, {name}! Please verify your face."))
            }
            LoginStep::AwaitingName => None,
        }
    }

    pub fn set_name_input(&mut self, value: String) {
        self.name_input = value;
    }

    /// Starts the lookup for the typed name. Returns `None` without touching
    /// the network when the name is blank, a lookup is already running, or the
    /// flow is past the first step.
    pub fn begin_lookup(&mut self) -> Option<FindUserRequest> {
        if self.in_flight || self.step != LoginStep::AwaitingName {
            return None;
        }

        let name = self.name_input.trim();
        if name.is_empty() {
            self.message = Some(StatusMessage::error(EMPTY_NAME_MESSAGE));
            return None;
        }

        let name = name.to_string();
        self.in_flight = true;
        self.message = None;
        self.pending_lookup = Some(name.clone());
        Some(FindUserRequest { name })
    }

    /// Applies the lookup result to the name recorded by [`Self::begin_lookup`].
    /// Results arriving with no lookup in flight are ignored.
    pub fn complete_lookup(&mut self, result: Result<(), AppError>) {
        let Some(name) = self.pending_lookup.take() else {
            return;
        };
        self.in_flight = false;
        match result {
            Ok(()) => {
                log::info!("user found, awaiting face capture");
                self.step = LoginStep::AwaitingFace { name };
            }
            Err(err) => {
                self.message = Some(StatusMessage::from_error(&err, LOOKUP_FALLBACK_MESSAGE));
            }
        }
    }

    /// Starts verification with the captured frame. A missing frame (camera
    /// not ready) is reported locally and leaves the step unchanged.
    pub fn begin_verify(&mut self, frame: Option<CapturedImage>) -> Option<VerifyFaceRequest> {
        if self.is_busy() {
            return None;
        }
        let LoginStep::AwaitingFace { name } = &self.step else {
            return None;
        };

        let Some(photo) = frame else {
            self.message = Some(StatusMessage::error(NO_FRAME_MESSAGE));
            return None;
        };

        let request = VerifyFaceRequest {
            name: name.clone(),
            photo,
        };
        self.in_flight = true;
        self.message = None;
        Some(request)
    }

    /// Stores the issued token on success. Any failure, including a response
    /// without a token or a storage error, schedules a reset.
    pub fn complete_verify<S: SessionStore + ?Sized>(
        &mut self,
        result: Result<VerifyFaceResponse, AppError>,
        store: &S,
    ) -> VerifyOutcome {
        self.in_flight = false;

        let stored = result.and_then(|response| {
            if response.token.is_empty() {
                return Err(AppError::Parse(
                    "Verification response carried no token.".to_string(),
                ));
            }
            store.set(&response.token)
        });

        match stored {
            Ok(()) => {
                log::info!("face verified, session stored");
                self.message = None;
                VerifyOutcome::Authenticated
            }
            Err(err) => {
                self.message = Some(StatusMessage::from_error(&err, VERIFY_FALLBACK_MESSAGE));
                self.reset_pending = true;
                VerifyOutcome::ResetAfter(RESET_DELAY)
            }
        }
    }

    /// Returns to the name step, dropping the attempted name and the message.
    pub fn reset(&mut self) {
        log::info!("login flow reset");
        *self = Self::new();
    }
}
