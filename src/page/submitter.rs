use super::{
    Message, SignupPage, REJECTED_FALLBACK_TEXT, SIGNUP_FAILED_TEXT, UNREGISTER_FAILED_TEXT,
};
use crate::api::{ActivitiesApi, SignupError};

/// Send a sign-up for `email` to `activity` and show the outcome.
///
/// The form keeps the submitted values unless the upstream accepted them.
/// Nothing is validated here: the email goes out exactly as entered.
pub async fn submit(api: &ActivitiesApi, page: &mut SignupPage, activity: &str, email: &str) {
    page.form.activity = Some(activity.to_string());
    page.form.email = email.to_string();

    match api.signup(activity, email).await {
        Ok(message) => {
            log::info!("Signed up {email} for {activity}");
            page.show_message(Message::success(message));
            page.form.reset();
        }
        Err(e) => page.show_message(failure_message(&e, SIGNUP_FAILED_TEXT, "signing up")),
    }
}

/// Remove `email` from `activity`. The sign-up form is left as it is.
pub async fn unregister(api: &ActivitiesApi, page: &mut SignupPage, activity: &str, email: &str) {
    match api.unregister(activity, email).await {
        Ok(message) => {
            log::info!("Unregistered {email} from {activity}");
            page.show_message(Message::success(message));
        }
        Err(e) => page.show_message(failure_message(&e, UNREGISTER_FAILED_TEXT, "unregistering")),
    }
}

fn failure_message(error: &SignupError, transport_text: &str, action: &str) -> Message {
    match error {
        SignupError::Rejected { status, detail } => {
            log::warn!("Upstream rejected {action} ({status}): {error}");
            let text = detail
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(REJECTED_FALLBACK_TEXT);
            Message::error(text)
        }
        SignupError::Transport(e) => {
            log::error!("Error {action}: {e}");
            Message::error(transport_text)
        }
    }
}
