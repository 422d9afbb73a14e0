use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Conflicting flags: {0} and {1} cannot be combined")]
    ConflictingFlags(&'static str, &'static str),

    #[error("Label '{label}' is {len} bytes long (maximum is 63)")]
    LabelTooLong { label: String, len: usize },

    #[error("Domain name encodes to {0} bytes (maximum is 255)")]
    NameTooLong(usize),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("Socket error talking to {server}: {reason}")]
    SocketError { server: String, reason: String },

    #[error("No response from {server} (timed out or empty datagram)")]
    TimeoutOrNoData { server: String },

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),
}

impl DomainError {
    /// True for errors caused by how the tool was invoked rather than by the network.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidArguments(_) | DomainError::ConflictingFlags(..)
        )
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        DomainError::MalformedMessage(reason.into())
    }
}
