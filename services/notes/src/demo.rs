//! Mocks installed by the `notes-mock-server` binary.

use tonic::{Request, Response, Status};

use grpcmock::GrpcMock;
use grpcmock_proto::notes::{GetNoteRequest, GetNoteResponse, Note};

/// Serve note `"1"` from `GetNote` and answer `NotFound` for any other id.
pub fn install(mock: &GrpcMock) {
    mock.set_handler("GetNote", get_note);
}

async fn get_note(request: Request<GetNoteRequest>) -> Result<Response<GetNoteResponse>, Status> {
    let id = request.into_inner().id;
    if id == "1" {
        return Ok(Response::new(GetNoteResponse {
            note: Some(Note {
                id,
                text: "test".to_owned(),
            }),
        }));
    }
    Err(Status::not_found("note not found"))
}
