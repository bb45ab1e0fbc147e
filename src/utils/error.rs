use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Input file not found: {path}")]
    InputMissing { path: String },

    #[error("Input file is not valid JSON: {path}: {reason}")]
    InputMalformed { path: String, reason: String },

    #[error("Failed to write landing file: {path}: {reason}")]
    OutputFailure { path: String, reason: String },

    #[error("Nothing to chart: {chart}")]
    EmptyAggregate { chart: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;

/// Where in the pipeline an error originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Output,
    Config,
    System,
}

/// How bad it is for the run as a whole. Drives the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InputMissing { .. } | EtlError::InputMalformed { .. } => ErrorCategory::Input,
            EtlError::EmptyAggregate { .. }
            | EtlError::SerializationError(_)
            | EtlError::ProcessingError { .. } => ErrorCategory::Data,
            EtlError::OutputFailure { .. } => ErrorCategory::Output,
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Config,
            EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::EmptyAggregate { .. } => ErrorSeverity::Low,
            EtlError::InputMissing { .. } | EtlError::InputMalformed { .. } => {
                ErrorSeverity::Medium
            }
            EtlError::OutputFailure { .. }
            | EtlError::IoError(_)
            | EtlError::SerializationError(_)
            | EtlError::ProcessingError { .. } => ErrorSeverity::High,
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::InputMissing { path } => {
                format!("Check that '{}' exists and the path is spelled correctly", path)
            }
            EtlError::InputMalformed { .. } => {
                "Check the input file: '.json' files must hold a JSON array, anything else one JSON object per line".to_string()
            }
            EtlError::OutputFailure { .. } => {
                "Check that the output directory is writable and has free space".to_string()
            }
            EtlError::EmptyAggregate { .. } => {
                "Provide input records that produce this aggregate, or ignore the skipped chart".to_string()
            }
            EtlError::IoError(_) => "Check file permissions and disk space".to_string(),
            EtlError::SerializationError(_) => {
                "Check that the records contain only valid JSON values".to_string()
            }
            EtlError::ConfigError { .. } => {
                "Review the configuration file syntax and required tables".to_string()
            }
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the configuration", field)
            }
            EtlError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            EtlError::ProcessingError { .. } => {
                "Inspect the logs above for the record that triggered this".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::InputMissing { path } => {
                format!("The input file '{}' could not be found.", path)
            }
            EtlError::InputMalformed { path, .. } => {
                format!("The input file '{}' could not be parsed as JSON.", path)
            }
            EtlError::OutputFailure { path, .. } => {
                format!("The landing file '{}' could not be written.", path)
            }
            EtlError::EmptyAggregate { chart } => {
                format!("There was no data to draw the {}.", chart)
            }
            EtlError::IoError(e) => format!("A file operation failed: {}.", e),
            EtlError::SerializationError(_) => {
                "A record could not be converted to JSON.".to_string()
            }
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => {
                format!("The configuration is invalid: {}.", self)
            }
            EtlError::ProcessingError { message } => {
                format!("Processing failed: {}.", message)
            }
        }
    }
}
