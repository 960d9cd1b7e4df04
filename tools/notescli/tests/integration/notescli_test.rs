use tonic::{Code, Request, Response, Status};

use grpcmock::UnaryResponse;
use grpcmock_proto::notes::{GetNoteRequest, GetNoteResponse, Note};
use notescli::NotesCliError;

use crate::helpers::Harness;

async fn get_note(request: Request<GetNoteRequest>) -> Result<Response<GetNoteResponse>, Status> {
    let r = request.into_inner();
    if r.id == "1" {
        return Ok(Response::new(GetNoteResponse {
            note: Some(Note {
                id: "1".to_owned(),
                text: "test".to_owned(),
            }),
        }));
    }
    Err(Status::not_found("note not found"))
}

#[tokio::test]
async fn should_get_note_text_from_mock_handler() {
    let h = Harness::start().await;
    h.mock.set_handler("GetNote", get_note);

    let cases = [
        ("note exists", "1", Ok("test")),
        ("note does not exist", "2", Err(Code::NotFound)),
    ];
    for (name, id, want) in cases {
        let got = h.cli.get_note_text(id).await;
        match want {
            Ok(text) => assert_eq!(got.unwrap(), text, "{name}"),
            Err(code) => {
                let err = got.unwrap_err();
                assert_eq!(err.code(), Some(code), "{name}: {err}");
            }
        }
    }
}

#[tokio::test]
async fn should_report_bad_response_when_note_missing() {
    let h = Harness::start().await;
    h.mock
        .set_response("GetNote", UnaryResponse::ok(GetNoteResponse::default()));

    let err = h.cli.get_note_text("3").await.unwrap_err();

    assert!(
        matches!(err, NotesCliError::BadResponse),
        "expected BadResponse, got {err:?}"
    );
}

#[tokio::test]
async fn should_surface_unimplemented_without_mock() {
    let h = Harness::start().await;

    let err = h.cli.get_note_text("1").await.unwrap_err();

    assert_eq!(err.code(), Some(Code::Unimplemented));
}

#[tokio::test]
async fn should_fall_back_to_real_server_after_unset() {
    let h = Harness::start().await;
    h.mock.set_handler("GetNote", get_note);
    assert_eq!(h.cli.get_note_text("1").await.unwrap(), "test");

    h.mock.unset("GetNote");

    let err = h.cli.get_note_text("1").await.unwrap_err();
    assert_eq!(err.code(), Some(Code::Unimplemented));
}
