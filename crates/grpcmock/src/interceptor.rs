use std::any::type_name;
use std::future::Future;
use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{debug, warn};

use crate::mock::UnaryHandler;
use crate::registry::{Override, Registry};
use crate::response::UnaryResponse;

/// Metadata about the unary call being intercepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnaryServerInfo<'a> {
    /// Fully-qualified method path, e.g. `"/notes.Notes/GetNote"`.
    pub full_method: &'a str,
}

impl<'a> UnaryServerInfo<'a> {
    pub const fn new(full_method: &'a str) -> Self {
        Self { full_method }
    }

    /// The segment after the last `/` of the method path.
    pub fn short_method(&self) -> &'a str {
        match self.full_method.rfind('/') {
            Some(n) => &self.full_method[n + 1..],
            None => self.full_method,
        }
    }
}

/// Unary server interceptor backed by a [`GrpcMock`](crate::GrpcMock).
///
/// Obtained from [`GrpcMock::unary_server_interceptor`](crate::GrpcMock::unary_server_interceptor).
#[derive(Clone)]
pub struct UnaryServerInterceptor {
    registry: Arc<Registry>,
}

impl UnaryServerInterceptor {
    pub(crate) fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Serve one unary call.
    ///
    /// A mock response is returned as is and a mock handler is called with
    /// `request`. Without either, `handler` (the real implementation) is
    /// called and its result returned unchanged.
    pub async fn intercept<Req, Resp, H, Fut>(
        &self,
        info: &UnaryServerInfo<'_>,
        request: Request<Req>,
        handler: H,
    ) -> Result<Response<Resp>, Status>
    where
        Req: Send + 'static,
        Resp: Clone + Send + Sync + 'static,
        H: FnOnce(Request<Req>) -> Fut,
        Fut: Future<Output = Result<Response<Resp>, Status>>,
    {
        let method = info.short_method();
        let Some(entry) = self.registry.lookup(method) else {
            debug!(method, outcome = "passthrough", "intercepted unary call");
            return handler(request).await;
        };

        match entry {
            Override::Response { resp, err } => {
                debug!(method, outcome = "mock_response", "intercepted unary call");
                // A present error is the outcome; the message only has to
                // match the method when it is actually sent.
                let resp = match resp {
                    Some(payload) if err.is_none() => match payload.downcast_ref::<Resp>() {
                        Some(resp) => Some(resp.clone()),
                        None => return Err(type_mismatch::<Resp>(method, "mock response")),
                    },
                    _ => None,
                };
                UnaryResponse { resp, err }.into_result()
            }
            Override::Handler(payload) => {
                debug!(method, outcome = "mock_handler", "intercepted unary call");
                let mock = match payload.downcast_ref::<UnaryHandler<Req, Resp>>() {
                    Some(mock) => Arc::clone(mock),
                    None => {
                        return Err(type_mismatch::<(Req, Resp)>(method, "mock handler"));
                    }
                };
                mock(request).await
            }
        }
    }
}

// A gRPC server fails a call whose handler produced a message of the wrong
// type; a mismatched mock fails the same way.
fn type_mismatch<T>(method: &str, what: &str) -> Status {
    let expected = type_name::<T>();
    warn!(method, expected, "{what} does not match the method's types");
    Status::internal(format!(
        "grpcmock: {what} for {method} does not match `{expected}`"
    ))
}
