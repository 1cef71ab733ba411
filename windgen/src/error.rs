use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindProfileError {
    #[error("invalid configuration: `{name}` = {value} ({reason})")]
    InvalidConfiguration {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("failed to write wind profile: {0}")]
    Io(#[from] std::io::Error),
}

impl WindProfileError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        WindProfileError::InvalidConfiguration {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
