//! Error-code-to-message tables

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

use cs_shared::Language;

use crate::errors::ErrorCode;

/// Errors raised while loading a custom message catalogue
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid message catalogue: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown error code in message catalogue: {0}")]
    UnknownCode(String),

    #[error("Message catalogue has no {language} text for {code}")]
    MissingMessage { code: ErrorCode, language: Language },
}

/// Messages shown to the user, keyed by error code
///
/// Passed explicitly into the projection; nothing is looked up globally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTable {
    language: Language,
    welcome_prefix: String,
    messages: HashMap<ErrorCode, String>,
}

/// On-disk catalogue format:
///
/// ```toml
/// [welcome]
/// en = "Welcome, "
/// pt = "Bem-vindo, "
///
/// [errors.LOGIN_FAILED]
/// en = "Login failed"
/// pt = "Falha no login"
/// ```
#[derive(Debug, Deserialize)]
struct Catalogue {
    welcome: LocalizedText,
    #[serde(default)]
    errors: HashMap<String, LocalizedText>,
}

#[derive(Debug, Deserialize)]
struct LocalizedText {
    en: Option<String>,
    pt: Option<String>,
}

impl LocalizedText {
    fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::English => self.en.as_deref(),
            Language::Portuguese => self.pt.as_deref(),
        }
    }
}

impl MessageTable {
    /// Built-in English table
    pub fn english() -> Self {
        Self::from_entries(
            Language::English,
            "Welcome, ",
            [
                (ErrorCode::InvalidUsername, "Not a valid username"),
                (ErrorCode::InvalidPassword, "Password must be >5 characters"),
                (ErrorCode::LoginFailed, "Login failed"),
            ],
        )
    }

    /// Built-in Portuguese table
    pub fn portuguese() -> Self {
        Self::from_entries(
            Language::Portuguese,
            "Bem-vindo, ",
            [
                (ErrorCode::InvalidUsername, "Nome de usuário inválido"),
                (ErrorCode::InvalidPassword, "A senha deve ter mais de 5 caracteres"),
                (ErrorCode::LoginFailed, "Falha no login"),
            ],
        )
    }

    /// Built-in table for `language`
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english(),
            Language::Portuguese => Self::portuguese(),
        }
    }

    /// Load the `language` column of a TOML catalogue
    ///
    /// Every error code must have text in the requested language; unknown
    /// codes are rejected so typos surface at load time.
    pub fn from_toml_str(source: &str, language: Language) -> Result<Self, CatalogError> {
        let catalogue: Catalogue = toml::from_str(source)?;

        let welcome_prefix = catalogue.welcome.get(language).unwrap_or_default().to_string();

        let mut messages = HashMap::new();
        for (key, text) in &catalogue.errors {
            let code: ErrorCode = key
                .parse()
                .map_err(|_| CatalogError::UnknownCode(key.clone()))?;
            if let Some(message) = text.get(language) {
                messages.insert(code, message.to_string());
            }
        }

        if let Some(code) = ErrorCode::ALL.into_iter().find(|code| !messages.contains_key(code)) {
            return Err(CatalogError::MissingMessage { code, language });
        }

        Ok(Self {
            language,
            welcome_prefix,
            messages,
        })
    }

    fn from_entries<const N: usize>(
        language: Language,
        welcome_prefix: &str,
        entries: [(ErrorCode, &str); N],
    ) -> Self {
        Self {
            language,
            welcome_prefix: welcome_prefix.to_string(),
            messages: entries
                .into_iter()
                .map(|(code, message)| (code, message.to_string()))
                .collect(),
        }
    }

    /// Replace the message for one code
    pub fn with_message(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
        self.messages.insert(code, message.into());
        self
    }

    /// Replace the welcome prefix
    pub fn with_welcome_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.welcome_prefix = prefix.into();
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Message for `code`, falling back to the code's string form
    pub fn resolve(&self, code: ErrorCode) -> String {
        self.messages
            .get(&code)
            .cloned()
            .unwrap_or_else(|| code.as_str().to_string())
    }

    /// Greeting for a user's display name
    pub fn welcome(&self, name: &str) -> String {
        format!("{}{}", self.welcome_prefix, name)
    }
}

impl Default for MessageTable {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}
