//! The sign-up page as an explicit render context.
//!
//! A `SignupPage` is built once per page load and handed to the loader and
//! the submitter, which replace its regions. The askama template only reads
//! it. Element ids the template gives each region are listed in
//! [`element_ids`].

pub mod loader;
pub mod submitter;

use std::time::Duration;

use crate::config::Locale;

/// How long a message stays visible before the page hides it.
pub const MESSAGE_HIDE_AFTER: Duration = Duration::from_millis(5000);

pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_TEXT: &str = "Failed to unregister participant. Please try again.";
pub const REJECTED_FALLBACK_TEXT: &str = "An error occurred";

pub mod element_ids {
    pub const ACTIVITIES_LIST: &str = "activities-list";
    pub const ACTIVITY_SELECT: &str = "activity";
    pub const SIGNUP_FORM: &str = "signup-form";
    pub const EMAIL_INPUT: &str = "email";
    pub const MESSAGE: &str = "message";
}

/// One entry of an activity's participant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEntry {
    Participant { initials: String, label: String },
    /// Stands in for an empty roster so the list always has an item.
    Placeholder(String),
}

impl RosterEntry {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, RosterEntry::Placeholder(_))
    }

    pub fn initials(&self) -> &str {
        match self {
            RosterEntry::Participant { initials, .. } => initials,
            RosterEntry::Placeholder(_) => "",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RosterEntry::Participant { label, .. } => label,
            RosterEntry::Placeholder(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActivitiesRegion {
    #[default]
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed(String),
}

impl ActivitiesRegion {
    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            ActivitiesRegion::Loaded(cards) => cards,
            _ => &[],
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            ActivitiesRegion::Failed(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ActivitiesRegion::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    pub hide_after: Duration,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
            hide_after: MESSAGE_HIDE_AFTER,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
            hide_after: MESSAGE_HIDE_AFTER,
        }
    }

    pub fn css_class(&self) -> &'static str {
        self.kind.css_class()
    }

    pub fn hide_after_ms(&self) -> u128 {
        self.hide_after.as_millis()
    }
}

/// Values currently shown in the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFormState {
    pub activity: Option<String>,
    pub email: String,
}

impl SignupFormState {
    /// Back to the default selection and an empty email field.
    pub fn reset(&mut self) {
        self.activity = None;
        self.email.clear();
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupPage {
    pub locale: Locale,
    pub activities: ActivitiesRegion,
    pub options: Vec<ActivityOption>,
    pub form: SignupFormState,
    pub message: Option<Message>,
}

impl SignupPage {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn show_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn has_default_selection(&self) -> bool {
        self.form.activity.is_none()
    }
}
