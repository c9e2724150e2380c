//! Registration form state. Captures are append-only and kept in capture order
//! so thumbnails match what the user took. Like the login flow, submission is
//! split into `begin_submit` and `complete_submit` around the request.

use crate::app_lib::AppError;
use crate::features::camera::CapturedImage;
use crate::features::registration::types::{RegisterRequest, RegisterResponse};
use crate::features::status::StatusMessage;

pub const MIN_PHOTOS: usize = 2;
pub const MAX_PHOTOS: usize = 5;

pub const MAX_PHOTOS_MESSAGE: &str = "You can upload a maximum of 5 photos.";
pub const MIN_PHOTOS_MESSAGE: &str = "Please capture at least 2 photos.";
const DEFAULT_SUCCESS_MESSAGE: &str = "Registration successful!";
const FAILURE_FALLBACK_MESSAGE: &str = "Registration failed. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Frame appended; carries the new photo count.
    Added(usize),
    LimitReached,
    /// The camera had no frame to give. Nothing changed.
    NoFrame,
    /// A submission is in flight; its success would discard the capture.
    Busy,
}

#[derive(Clone, Debug, Default)]
pub struct RegistrationForm {
    name: String,
    email: String,
    phone: String,
    photos: Vec<CapturedImage>,
    message: Option<StatusMessage>,
    in_flight: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    /// Ignored while a submission is in flight.
    pub fn set_field(&mut self, field: Field, value: String) {
        if self.in_flight {
            return;
        }
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
        }
    }

    pub fn photos(&self) -> &[CapturedImage] {
        &self.photos
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn can_capture(&self) -> bool {
        !self.in_flight && self.photos.len() < MAX_PHOTOS
    }

    /// Label for the capture button, e.g. `Capture Photo (2/5)`.
    pub fn capture_label(&self) -> String {
        format!("Capture Photo ({}/{MAX_PHOTOS})", self.photos.len())
    }

    pub fn capture_photo(&mut self, frame: Option<CapturedImage>) -> CaptureOutcome {
        if self.in_flight {
            return CaptureOutcome::Busy;
        }
        if self.photos.len() >= MAX_PHOTOS {
            self.message = Some(StatusMessage::warning(MAX_PHOTOS_MESSAGE));
            return CaptureOutcome::LimitReached;
        }
        let Some(frame) = frame else {
            return CaptureOutcome::NoFrame;
        };

        self.photos.push(frame);
        self.message = None;
        CaptureOutcome::Added(self.photos.len())
    }

    /// Validates locally and yields the request to send. The photo count is
    /// checked before the profile fields.
    pub fn begin_submit(&mut self) -> Option<RegisterRequest> {
        if self.in_flight {
            return None;
        }
        if let Err(reason) = self.validate() {
            self.message = Some(StatusMessage::error(reason));
            return None;
        }

        self.in_flight = true;
        self.message = None;
        log::info!("submitting registration with {} photos", self.photos.len());
        Some(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            photos: self.photos.clone(),
        })
    }

    /// Clears the whole form on success; keeps everything on failure so the
    /// user can retry without recapturing.
    pub fn complete_submit(&mut self, result: Result<RegisterResponse, AppError>) {
        self.in_flight = false;
        match result {
            Ok(response) => {
                let text = response
                    .message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                log::info!("registration accepted");
                *self = Self {
                    message: Some(StatusMessage::success(text)),
                    ..Self::default()
                };
            }
            Err(err) => {
                self.message = Some(StatusMessage::from_error(&err, FAILURE_FALLBACK_MESSAGE));
            }
        }
    }

    /// Returns the message for the first failed check.
    fn validate(&self) -> Result<(), &'static str> {
        if self.photos.len() < MIN_PHOTOS {
            return Err(MIN_PHOTOS_MESSAGE);
        }
        if self.name.trim().is_empty() {
            return Err("Name is required.");
        }
        if self.email.trim().is_empty() {
            return Err("Email is required.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CaptureOutcome, Field, MAX_PHOTOS, MAX_PHOTOS_MESSAGE, MIN_PHOTOS_MESSAGE,
        RegistrationForm,
    };
    use crate::app_lib::AppError;
    use crate::app_lib::errors::NETWORK_ERROR_MESSAGE;
    use crate::features::camera::test_frame;
    use crate::features::registration::types::RegisterResponse;
    use crate::features::status::{StatusMessage, Tone};

    fn filled(photo_count: usize) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_field(Field::Name, "Alice".to_string());
        form.set_field(Field::Email, "alice@example.com".to_string());
        for index in 0..photo_count {
            form.capture_photo(Some(test_frame(&index.to_string())));
        }
        form
    }

    fn assert_empty(form: &RegistrationForm) {
        assert_eq!(form.field(Field::Name), "");
        assert_eq!(form.field(Field::Email), "");
        assert_eq!(form.field(Field::Phone), "");
        assert!(form.photos().is_empty());
    }

    #[test]
    fn captures_keep_order_and_count() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.capture_label(), "Capture Photo (0/5)");

        assert_eq!(form.capture_photo(Some(test_frame("a"))), CaptureOutcome::Added(1));
        assert_eq!(form.capture_photo(Some(test_frame("b"))), CaptureOutcome::Added(2));

        assert_eq!(form.photos(), &[test_frame("a"), test_frame("b")]);
        assert_eq!(form.capture_label(), "Capture Photo (2/5)");
    }

    #[test]
    fn sixth_capture_is_rejected_with_warning() {
        let mut form = filled(MAX_PHOTOS);
        assert!(!form.can_capture());

        assert_eq!(
            form.capture_photo(Some(test_frame("extra"))),
            CaptureOutcome::LimitReached
        );
        assert_eq!(form.photos().len(), MAX_PHOTOS);
        assert_eq!(
            form.message(),
            Some(&StatusMessage::warning(MAX_PHOTOS_MESSAGE))
        );
    }

    #[test]
    fn missing_frame_changes_nothing() {
        let mut form = filled(1);
        assert_eq!(form.capture_photo(None), CaptureOutcome::NoFrame);
        assert_eq!(form.photos().len(), 1);
        assert_eq!(form.message(), None);
    }

    #[test]
    fn capture_clears_previous_message() {
        let mut form = filled(1);
        assert_eq!(form.begin_submit(), None);
        assert!(form.message().is_some());

        form.capture_photo(Some(test_frame("b")));
        assert_eq!(form.message(), None);
    }

    #[test]
    fn too_few_photos_blocks_submit_before_field_checks() {
        for count in 0..2 {
            let mut form = filled(count);
            form.set_field(Field::Name, String::new());

            assert_eq!(form.begin_submit(), None);
            assert_eq!(
                form.message(),
                Some(&StatusMessage::error(MIN_PHOTOS_MESSAGE))
            );
            assert!(!form.is_in_flight());
        }
    }

    #[test]
    fn blank_profile_fields_are_rejected_locally() {
        let mut form = filled(2);
        form.set_field(Field::Name, "  ".to_string());
        assert_eq!(form.begin_submit(), None);
        assert_eq!(
            form.message(),
            Some(&StatusMessage::error("Name is required."))
        );

        form.set_field(Field::Name, "Alice".to_string());
        form.set_field(Field::Email, String::new());
        assert_eq!(form.begin_submit(), None);
        assert_eq!(
            form.message(),
            Some(&StatusMessage::error("Email is required."))
        );
    }

    #[test]
    fn submit_carries_all_fields_and_photos() {
        let mut form = filled(3);
        form.set_field(Field::Phone, " 555-0100 ".to_string());

        let request = form.begin_submit();
        let Some(request) = request else {
            panic!("expected a request");
        };
        assert_eq!(request.name, "Alice");
        assert_eq!(request.email, "alice@example.com");
        assert_eq!(request.phone, "555-0100");
        assert_eq!(
            request.photos,
            vec![test_frame("0"), test_frame("1"), test_frame("2")]
        );
        assert!(form.is_in_flight());
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn blank_phone_is_sent_empty() {
        let mut form = filled(2);
        let request = form.begin_submit();
        assert_eq!(request.map(|request| request.phone), Some(String::new()));
    }

    #[test]
    fn form_is_frozen_while_submission_is_in_flight() {
        let mut form = filled(2);
        assert!(form.begin_submit().is_some());
        assert!(!form.can_capture());

        assert_eq!(
            form.capture_photo(Some(test_frame("late"))),
            CaptureOutcome::Busy
        );
        form.set_field(Field::Name, "Bob".to_string());

        assert_eq!(form.photos().len(), 2);
        assert_eq!(form.field(Field::Name), "Alice");
        assert_eq!(form.message(), None);

        form.complete_submit(Err(AppError::Network("Failed to fetch".to_string())));
        assert!(form.can_capture());
        assert_eq!(
            form.capture_photo(Some(test_frame("retry"))),
            CaptureOutcome::Added(3)
        );
    }

    #[test]
    fn success_shows_backend_message_and_resets() {
        let mut form = RegistrationForm::new();
        form.set_field(Field::Name, "Alice".to_string());
        form.set_field(Field::Email, "alice@example.com".to_string());
        form.capture_photo(Some(test_frame("a")));
        form.capture_photo(Some(test_frame("b")));
        assert!(form.begin_submit().is_some());

        form.complete_submit(Ok(RegisterResponse {
            message: Some("Registration successful!".to_string()),
        }));

        assert_eq!(
            form.message(),
            Some(&StatusMessage::success("Registration successful!"))
        );
        assert_empty(&form);
        assert!(!form.is_in_flight());
    }

    #[test]
    fn success_without_message_uses_default() {
        let mut form = filled(2);
        assert!(form.begin_submit().is_some());

        form.complete_submit(Ok(RegisterResponse {
            message: Some("   ".to_string()),
        }));

        assert_eq!(
            form.message(),
            Some(&StatusMessage::success("Registration successful!"))
        );
        assert_empty(&form);
    }

    #[test]
    fn backend_failure_keeps_form_intact() {
        let mut form = filled(2);
        assert!(form.begin_submit().is_some());

        form.complete_submit(Err(AppError::Rejected {
            status: 409,
            message: Some("User already exists".to_string()),
        }));

        assert_eq!(
            form.message(),
            Some(&StatusMessage::error("User already exists"))
        );
        assert_eq!(form.field(Field::Name), "Alice");
        assert_eq!(form.photos().len(), 2);
        assert!(!form.is_in_flight());
    }

    #[test]
    fn silent_rejection_uses_fallback() {
        let mut form = filled(2);
        assert!(form.begin_submit().is_some());

        form.complete_submit(Err(AppError::Rejected {
            status: 500,
            message: None,
        }));

        assert_eq!(
            form.message(),
            Some(&StatusMessage::error("Registration failed. Please try again."))
        );
    }

    #[test]
    fn network_failure_is_reported_distinctly() {
        let mut form = filled(2);
        assert!(form.begin_submit().is_some());

        form.complete_submit(Err(AppError::Network("Failed to fetch".to_string())));

        let message = form.message();
        assert_eq!(message.map(|message| message.tone), Some(Tone::Error));
        assert_eq!(
            message.map(|message| message.text.as_str()),
            Some(NETWORK_ERROR_MESSAGE)
        );
        assert_eq!(form.photos().len(), 2);
    }
}
