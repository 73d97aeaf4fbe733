use std::process::ExitCode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClockError {
    InvalidInput(String),
}

impl std::fmt::Display for ClockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl From<ClockError> for ExitCode {
    fn from(value: ClockError) -> Self {
        match value {
            ClockError::InvalidInput(_) => ExitCode::from(1),
        }
    }
}
