use std::time::Duration;

use quickscope_core::TimerSet;
use quickscope_core::time::ms;
use services::WaitlistError;
use tracing::warn;

/// How long the success notice stays up after a submission.
pub const SUBMITTED_NOTICE: Duration = ms(5000);

pub const SUBMIT_ERROR_MESSAGE: &str =
    "There was an error submitting your email. Please try again.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed,
}

/// State of the waitlist signup form.
#[derive(Clone, Debug, Default)]
pub struct WaitlistFormVm {
    email: String,
    status: SubmissionStatus,
    error: Option<&'static str>,
    notice: TimerSet<()>,
}

impl WaitlistFormVm {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    #[must_use]
    pub fn show_success(&self) -> bool {
        self.status == SubmissionStatus::Submitted
    }

    /// Marks the form busy and returns the email to send, unless a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_loading() {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        self.error = None;
        Some(self.email.clone())
    }

    /// Applies the submission outcome. Returns when the success notice expires.
    pub fn finish(&mut self, now: Duration, outcome: Result<(), WaitlistError>) -> Option<Duration> {
        self.notice.cancel_all();
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Submitted;
                self.email.clear();
                self.notice.schedule(now, SUBMITTED_NOTICE, ());
                self.notice.next_deadline()
            }
            Err(err) => {
                warn!(%err, "waitlist submission failed");
                self.status = SubmissionStatus::Failed;
                self.error = Some(match err {
                    WaitlistError::InvalidEmail { .. } => INVALID_EMAIL_MESSAGE,
                    _ => SUBMIT_ERROR_MESSAGE,
                });
                None
            }
        }
    }

    /// Hides the success notice once it expires. Returns true if it changed.
    pub fn advance(&mut self, now: Duration) -> bool {
        if self.notice.pop_due(now).is_none() {
            return false;
        }
        if self.status == SubmissionStatus::Submitted {
            self.status = SubmissionStatus::Idle;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str) -> WaitlistFormVm {
        let mut form = WaitlistFormVm::default();
        form.set_email(email.to_string());
        form
    }

    #[test]
    fn success_clears_email_and_expires_after_five_seconds() {
        let mut form = filled("reader@example.com");
        assert_eq!(form.begin_submit().as_deref(), Some("reader@example.com"));
        assert!(form.is_loading());

        let expires = form.finish(ms(200), Ok(()));
        assert_eq!(expires, Some(ms(5200)));
        assert!(form.show_success());
        assert_eq!(form.email(), "");

        assert!(!form.advance(ms(5199)));
        assert!(form.show_success());
        assert!(form.advance(ms(5200)));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn in_flight_submission_blocks_a_second_one() {
        let mut form = filled("reader@example.com");
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn network_failure_shows_inline_message_and_keeps_email() {
        let mut form = filled("reader@example.com");
        form.begin_submit();
        let expires = form.finish(ms(0), Err(WaitlistError::Transport("offline".into())));

        assert_eq!(expires, None);
        assert_eq!(form.error(), Some(SUBMIT_ERROR_MESSAGE));
        assert_eq!(form.email(), "reader@example.com");
        assert_eq!(form.status(), SubmissionStatus::Failed);

        // Manual retry clears the message.
        assert!(form.begin_submit().is_some());
        assert_eq!(form.error(), None);
        assert!(form.is_loading());
    }

    #[test]
    fn invalid_email_gets_its_own_message() {
        let mut form = filled("nope");
        form.begin_submit();
        form.finish(
            ms(0),
            Err(WaitlistError::InvalidEmail { raw: "nope".into() }),
        );
        assert_eq!(form.error(), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn a_new_success_restarts_the_notice_timer() {
        let mut form = filled("a@example.com");
        form.begin_submit();
        form.finish(ms(0), Ok(()));

        form.set_email("b@example.com".into());
        form.begin_submit();
        form.finish(ms(3000), Ok(()));

        assert!(!form.advance(ms(5000)));
        assert!(form.show_success());
        assert!(form.advance(ms(8000)));
    }
}
