use std::io::Cursor;

use tonic::Status;

use grpcmock::UnaryResponse;
use grpcmock_proto::notes::{GetNoteResponse, Note};
use notescli::session;

use crate::helpers::Harness;

async fn run_session(h: &Harness, input: &str) -> String {
    let mut output = Vec::new();
    session::run(&h.cli, Cursor::new(input.as_bytes().to_vec()), &mut output)
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn should_print_text_per_id_until_quit() {
    let h = Harness::start().await;
    h.mock.set_response(
        "GetNote",
        UnaryResponse::ok(GetNoteResponse {
            note: Some(Note {
                id: "1".to_owned(),
                text: "a".to_owned(),
            }),
        }),
    );

    let out = run_session(&h, "1\n  7  \n\\q\nnever\n").await;

    assert_eq!(out, "enter \\q to quit\n\nid=a\n\nid=a\n\nid=");
}

#[tokio::test]
async fn should_print_errors_and_keep_going() {
    let h = Harness::start().await;
    h.mock.set_response(
        "GetNote",
        UnaryResponse::<GetNoteResponse>::err(Status::not_found("note not found")),
    );

    let out = run_session(&h, "2\n").await;

    assert!(
        out.contains("rpc error: code = NotFound desc = note not found"),
        "{out}"
    );
    assert!(out.ends_with("\nid="), "session should re-prompt: {out:?}");
}

#[tokio::test]
async fn should_end_quietly_on_empty_input() {
    let h = Harness::start().await;

    let out = run_session(&h, "").await;

    assert_eq!(out, "enter \\q to quit\n\nid=");
}
