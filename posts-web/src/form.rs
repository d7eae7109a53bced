//! State of a create or edit form between render cycles.
//!
//! Every transition takes the form by value and returns the next one, so a
//! view holds exactly one current form and replaces it on each event.

use crate::models::{FieldErrors, Post, PostFields};

pub const VALIDATION_NOTICE: &str = "Please check the errors and try again.";
pub const FAILURE_NOTICE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Editing,
    Submitting,
    Error(FieldErrors),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    mode: FormMode,
    initial: PostFields,
    fields: PostFields,
    state: FormState,
    notice: Option<&'static str>,
}

/// Outcome of asking a form to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Request should be sent with these fields; the form is now submitting.
    Send(PostForm, PostFields),
    /// Nothing to send; the returned form says why.
    Blocked(PostForm),
}

fn required_message(field: Field) -> String {
    format!("The {} field is required.", field.name())
}

impl PostForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            initial: PostFields::default(),
            fields: PostFields::default(),
            state: FormState::Idle,
            notice: None,
        }
    }

    pub fn edit(post: &Post) -> Self {
        let fields = PostFields::from(post);
        Self {
            mode: FormMode::Edit { id: post.id },
            initial: fields.clone(),
            fields,
            state: FormState::Idle,
            notice: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.fields.title,
            Field::Content => &self.fields.content,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        match &self.state {
            FormState::Error(errors) => errors.first(field.name()),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn is_dirty(&self) -> bool {
        self.fields != self.initial
    }

    pub fn can_submit(&self) -> bool {
        match self.mode {
            FormMode::Create => !self.is_submitting(),
            FormMode::Edit { .. } => !self.is_submitting() && self.is_dirty(),
        }
    }

    pub fn can_cancel(&self) -> bool {
        !self.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.is_submitting(), self.mode) {
            (true, _) => "Saving...",
            (false, FormMode::Create) => "Create Post",
            (false, FormMode::Edit { .. }) => "Update Post",
        }
    }

    /// Replaces one field. A pending request keeps the form submitting.
    pub fn with_field(mut self, field: Field, value: String) -> Self {
        match field {
            Field::Title => self.fields.title = value,
            Field::Content => self.fields.content = value,
        }

        self.state = match self.state {
            FormState::Submitting => FormState::Submitting,
            FormState::Error(mut errors) => {
                errors.clear(field.name());
                if errors.is_empty() {
                    FormState::Editing
                } else {
                    FormState::Error(errors)
                }
            }
            FormState::Idle | FormState::Editing => FormState::Editing,
        };
        self
    }

    pub fn submit(mut self) -> Submission {
        if !self.can_submit() {
            return Submission::Blocked(self);
        }

        let mut errors = FieldErrors::new();
        for field in [Field::Title, Field::Content] {
            if self.value(field).trim().is_empty() {
                errors.add(field.name(), required_message(field));
            }
        }
        if !errors.is_empty() {
            self.state = FormState::Error(errors);
            return Submission::Blocked(self);
        }

        self.state = FormState::Submitting;
        self.notice = None;
        let fields = self.fields.clone();
        Submission::Send(self, fields)
    }

    /// Backend rejected the fields.
    pub fn rejected(mut self, errors: FieldErrors) -> Self {
        self.state = if errors.is_empty() {
            FormState::Editing
        } else {
            FormState::Error(errors)
        };
        self.notice = Some(VALIDATION_NOTICE);
        self
    }

    /// Request failed for any other reason; values stay as entered.
    pub fn failed(mut self) -> Self {
        self.state = FormState::Editing;
        self.notice = Some(FAILURE_NOTICE);
        self
    }
}
