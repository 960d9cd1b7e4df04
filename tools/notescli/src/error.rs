use tonic::Status;

/// Errors returned by [`NotesCli`](crate::NotesCli).
#[derive(Debug, thiserror::Error)]
pub enum NotesCliError {
    #[error("notescli: bad response")]
    BadResponse,
    #[error("notescli: invalid server address {0:?}")]
    InvalidAddress(String),
    #[error(transparent)]
    Connect(#[from] tonic::transport::Error),
    #[error("rpc error: code = {:?} desc = {}", .0.code(), .0.message())]
    Rpc(#[from] Status),
}

impl NotesCliError {
    /// The gRPC status code behind this error, if it came from the server.
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            Self::Rpc(status) => Some(status.code()),
            _ => None,
        }
    }
}
