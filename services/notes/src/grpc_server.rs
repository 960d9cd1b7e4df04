use tonic::{Request, Response, Status};

use grpcmock::{GrpcMock, UnaryServerInfo, UnaryServerInterceptor};
use grpcmock_proto::notes::methods::{CREATE_NOTE, GET_NOTE};
use grpcmock_proto::notes::notes_server::{Notes, NotesServer};
use grpcmock_proto::notes::{
    CreateNoteRequest, CreateNoteResponse, GetNoteRequest, GetNoteResponse,
};

/// Notes implementation that answers every method with `Unimplemented`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedNotes;

#[tonic::async_trait]
impl Notes for UnimplementedNotes {
    async fn get_note(
        &self,
        _request: Request<GetNoteRequest>,
    ) -> Result<Response<GetNoteResponse>, Status> {
        Err(Status::unimplemented("method GetNote not implemented"))
    }

    async fn create_note(
        &self,
        _request: Request<CreateNoteRequest>,
    ) -> Result<Response<CreateNoteResponse>, Status> {
        Err(Status::unimplemented("method CreateNote not implemented"))
    }
}

/// Routes every unary method of `S` through a grpcmock interceptor.
#[derive(Clone)]
pub struct MockedNotes<S> {
    inner: S,
    interceptor: UnaryServerInterceptor,
}

impl<S> MockedNotes<S> {
    pub fn new(inner: S, mock: &GrpcMock) -> Self {
        Self {
            inner,
            interceptor: mock.unary_server_interceptor(),
        }
    }
}

#[tonic::async_trait]
impl<S: Notes> Notes for MockedNotes<S> {
    async fn get_note(
        &self,
        request: Request<GetNoteRequest>,
    ) -> Result<Response<GetNoteResponse>, Status> {
        self.interceptor
            .intercept(&UnaryServerInfo::new(GET_NOTE), request, |req| {
                self.inner.get_note(req)
            })
            .await
    }

    async fn create_note(
        &self,
        request: Request<CreateNoteRequest>,
    ) -> Result<Response<CreateNoteResponse>, Status> {
        self.interceptor
            .intercept(&UnaryServerInfo::new(CREATE_NOTE), request, |req| {
                self.inner.create_note(req)
            })
            .await
    }
}

/// The `Unimplemented` Notes server behind `mock`, ready for `add_service`.
pub fn notes_server(mock: &GrpcMock) -> NotesServer<MockedNotes<UnimplementedNotes>> {
    NotesServer::new(MockedNotes::new(UnimplementedNotes, mock))
}
