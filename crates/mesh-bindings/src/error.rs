//! Client error type

/// Error returned by every contract client method.
///
/// The transport's own error is carried untouched in [`ClientError::Transport`].
/// The other variants cover encoding a message and decoding a response.
#[derive(Debug, thiserror::Error)]
pub enum ClientError<E> {
    /// The transport failed or the chain rejected the call
    #[error("transport error: {0}")]
    Transport(#[source] E),
    /// A message could not be encoded as JSON
    #[error("failed to serialize contract message: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The contract's reply did not match the expected response shape
    #[error("failed to deserialize contract response: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl<E> ClientError<E> {
    /// The transport error, if this is one.
    pub const fn transport(&self) -> Option<&E> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }

    /// Consume the error, returning the transport error if this is one.
    pub fn into_transport(self) -> Option<E> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}
