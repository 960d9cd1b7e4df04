//! Client for the example Notes service.

mod error;
pub mod session;

pub use error::NotesCliError;

use tonic::transport::{Channel, Endpoint};

use grpcmock_proto::notes::GetNoteRequest;
use grpcmock_proto::notes::notes_client::NotesClient;

/// Reads notes from a Notes server.
#[derive(Clone)]
pub struct NotesCli {
    client: NotesClient<Channel>,
}

impl NotesCli {
    pub fn new(client: NotesClient<Channel>) -> Self {
        Self { client }
    }

    /// Connect to `addr`, given either as a URL or as `host:port`.
    pub async fn connect(addr: &str) -> Result<Self, NotesCliError> {
        let url = endpoint_url(addr);
        let endpoint = Endpoint::from_shared(url.clone())
            .map_err(|_| NotesCliError::InvalidAddress(addr.to_owned()))?;
        tracing::debug!(%url, "connecting to notes server");
        let channel = endpoint.connect().await?;
        Ok(Self::new(NotesClient::new(channel)))
    }

    /// Text of the note with `id`.
    ///
    /// A reply without a note is [`NotesCliError::BadResponse`].
    pub async fn get_note_text(&self, id: &str) -> Result<String, NotesCliError> {
        let resp = self
            .client
            .clone()
            .get_note(GetNoteRequest { id: id.to_owned() })
            .await?
            .into_inner();
        let note = resp.note.ok_or(NotesCliError::BadResponse)?;
        Ok(note.text)
    }
}

/// Prefix `http://` unless `addr` already names a scheme.
pub fn endpoint_url(addr: &str) -> String {
    if addr.contains("://") {
        addr.to_owned()
    } else {
        format!("http://{addr}")
    }
}
