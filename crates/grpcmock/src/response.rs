use tonic::{Response, Status};

/// Values returned by a mocked unary RPC.
///
/// Both fields are stored and handed back exactly as supplied. Setting both
/// is allowed; see [`UnaryResponse::into_result`] for how the pair reaches
/// the wire.
#[derive(Debug, Clone)]
pub struct UnaryResponse<T> {
    pub resp: Option<T>,
    pub err: Option<Status>,
}

impl<T> UnaryResponse<T> {
    /// A successful response carrying `resp`.
    pub fn ok(resp: T) -> Self {
        Self {
            resp: Some(resp),
            err: None,
        }
    }

    /// A failed response carrying `err`.
    pub fn err(err: Status) -> Self {
        Self {
            resp: None,
            err: Some(err),
        }
    }

    /// Convert into tonic's unary result.
    ///
    /// A present error becomes the call status and any message is dropped,
    /// the same way a gRPC server treats a handler that returns both. A
    /// response with neither cannot be serialized and fails as `Internal`.
    pub fn into_result(self) -> Result<Response<T>, Status> {
        match (self.resp, self.err) {
            (_, Some(err)) => Err(err),
            (Some(resp), None) => Ok(Response::new(resp)),
            (None, None) => Err(Status::internal(
                "grpcmock: mock response has neither a message nor an error",
            )),
        }
    }
}

impl<T> Default for UnaryResponse<T> {
    fn default() -> Self {
        Self {
            resp: None,
            err: None,
        }
    }
}
