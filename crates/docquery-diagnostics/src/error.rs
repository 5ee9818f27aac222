//! docquery error types

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An error diagnostic with its code and optional help
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render the diagnostic for a terminal, with the help line indented below
    #[cfg(feature = "colored")]
    pub fn render(&self) -> String {
        use colored::Colorize;

        let label = format!("error[{}]", self.code).red().bold();
        let mut out = format!("{}: {}", label, self.message);
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".cyan(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {} - {}", self.code, self.message)
    }
}

/// Main docquery error type
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    /// A value could not be coerced to a field type
    #[error("{code}: {message}")]
    Coercion { code: ErrorCode, message: String },

    /// Schema declaration or loading error
    #[error("{code}: {message}")]
    Schema {
        code: ErrorCode,
        message: String,
        schema: Option<String>,
    },

    /// Criteria construction error
    #[error("{code}: {message}")]
    Selector {
        code: ErrorCode,
        message: String,
        key: Option<String>,
    },

    /// System error
    #[error("{code}: {message}")]
    System { code: ErrorCode, message: String },
}

impl QueryError {
    /// Create a coercion error
    pub fn coercion(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Coercion {
            code,
            message: message.into(),
        }
    }

    /// Create a schema error
    pub fn schema(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Schema {
            code,
            message: message.into(),
            schema: None,
        }
    }

    /// Create a selector error
    pub fn selector(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Selector {
            code,
            message: message.into(),
            key: None,
        }
    }

    /// Create a system error
    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::System {
            code,
            message: message.into(),
        }
    }

    /// Attach the criteria key that triggered a selector error
    pub fn with_key(self, key: impl Into<String>) -> Self {
        match self {
            Self::Selector { code, message, .. } => Self::Selector {
                code,
                message,
                key: Some(key.into()),
            },
            other => other,
        }
    }

    /// Attach the schema (name or source path) to a schema error
    pub fn with_schema(self, name: impl Into<String>) -> Self {
        match self {
            Self::Schema { code, message, .. } => Self::Schema {
                code,
                message,
                schema: Some(name.into()),
            },
            other => other,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Coercion { code, .. }
            | Self::Schema { code, .. }
            | Self::Selector { code, .. }
            | Self::System { code, .. } => *code,
        }
    }

    /// Convert to a diagnostic, falling back to the code's registered help
    pub fn to_diagnostic(&self) -> Diagnostic {
        let message = match self {
            Self::Coercion { message, .. }
            | Self::Schema { message, .. }
            | Self::Selector { message, .. }
            | Self::System { message, .. } => message.clone(),
        };
        let mut diag = Diagnostic::error(self.code(), message);

        let help = match self {
            Self::Selector { key: Some(key), .. } => Some(format!("while typecasting key '{key}'")),
            Self::Schema {
                schema: Some(name), ..
            } => Some(format!("in schema '{name}'")),
            _ => self.code().info().help.map(str::to_string),
        };
        if let Some(help) = help {
            diag = diag.with_help(help);
        }
        diag
    }
}
