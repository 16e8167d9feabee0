use thiserror::Error;

/// Result type alias using SchemaDiffError
pub type Result<T> = std::result::Result<T, SchemaDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and report output. Data conditions met while
/// diffing (absent models, dangling references, cycles) are never errors and
/// have no kind here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    InvalidInput,
    NotFound,
    AlreadyExists,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus context for
/// debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add entity ID context (a definition name or reference string)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for schemadiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaDiffError {
    /// Named definition is absent from every table it was looked up in
    #[error("Definition not found: {name}")]
    DefinitionNotFound { name: String },

    /// A definition with this name is already registered in the table
    #[error("Definition already exists: {name}")]
    DefinitionAlreadyExists { name: String },

    /// Reference string has no usable definition name
    #[error("Invalid reference: {reference:?}")]
    InvalidReference { reference: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<SchemaDiffError> for ExError {
    fn from(err: SchemaDiffError) -> Self {
        match err {
            SchemaDiffError::DefinitionNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(name)
                .with_message("Definition not found"),

            SchemaDiffError::DefinitionAlreadyExists { name } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(name)
                    .with_message("Definition already exists")
            }

            SchemaDiffError::InvalidReference { reference } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_entity_id(reference)
                    .with_message("Reference has no definition name")
            }

            SchemaDiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for SchemaDiffError {
    fn from(err: serde_json::Error) -> Self {
        SchemaDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
