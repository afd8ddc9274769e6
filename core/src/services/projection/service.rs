//! Projection of login results into display-ready data

use crate::domain::value_objects::{
    DisplayResult, FieldErrors, LoginOutcome, NavigationPayload, ValidationState,
};

use super::messages::MessageTable;

/// Maps outcomes and validation state to what the presentation layer renders
///
/// Pure: no I/O, no shared state beyond the message table it was built with.
#[derive(Debug, Clone, Default)]
pub struct ResultProjection {
    messages: MessageTable,
}

impl ResultProjection {
    pub fn new(messages: MessageTable) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    /// Project a finished login attempt
    ///
    /// `Success` becomes a welcome text plus the flattened navigation payload;
    /// `Failure` becomes the resolved error message.
    pub fn project(&self, outcome: LoginOutcome) -> DisplayResult {
        match outcome {
            LoginOutcome::Success(user) => DisplayResult::Welcome {
                welcome_text: self.messages.welcome(&user.name),
                navigation: NavigationPayload::from(user),
            },
            LoginOutcome::Failure(code) => DisplayResult::Error {
                code,
                error_message: self.messages.resolve(code),
            },
        }
    }

    /// Inline messages for the form fields
    pub fn field_errors(&self, state: &ValidationState) -> FieldErrors {
        FieldErrors {
            username: state.username_error().map(|code| self.messages.resolve(code)),
            password: state.password_error().map(|code| self.messages.resolve(code)),
        }
    }
}
