use std::future::Future;
use std::sync::Arc;

use futures::FutureExt as _;
use futures::future::BoxFuture;
use tonic::{Request, Response, Status};
use tracing::debug;

use crate::interceptor::UnaryServerInterceptor;
use crate::registry::{Override, Payload, Registry};
use crate::response::UnaryResponse;

/// A stored mock handler for one unary method.
pub type UnaryHandler<Req, Resp> = Arc<
    dyn Fn(Request<Req>) -> BoxFuture<'static, Result<Response<Resp>, Status>> + Send + Sync,
>;

/// Mock responses and handlers for the methods of a gRPC server.
///
/// Clones share the same table, so a test can keep one handle for
/// configuration while the server holds the interceptor.
#[derive(Clone, Default)]
pub struct GrpcMock {
    registry: Arc<Registry>,
}

impl GrpcMock {
    /// A mock with no responses or handlers; every call passes through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a mock response for `method`, removing any mock handler for it.
    ///
    /// `method` is the short method name, e.g. `"GetNote"`.
    pub fn set_response<T>(&self, method: impl Into<String>, response: UnaryResponse<T>)
    where
        T: Clone + Send + Sync + 'static,
    {
        let method = method.into();
        debug!(method = %method, "set mock response");
        let entry = Override::Response {
            resp: response.resp.map(|resp| Arc::new(resp) as Payload),
            err: response.err,
        };
        self.registry.set(method, entry);
    }

    /// Set a mock handler for `method`, removing any mock response for it.
    pub fn set_handler<Req, Resp, F, Fut>(&self, method: impl Into<String>, handler: F)
    where
        Req: Send + 'static,
        Resp: Send + 'static,
        F: Fn(Request<Req>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Resp>, Status>> + Send + 'static,
    {
        let method = method.into();
        debug!(method = %method, "set mock handler");
        let stored: UnaryHandler<Req, Resp> =
            Arc::new(move |request: Request<Req>| handler(request).boxed());
        self.registry.set(method, Override::Handler(Arc::new(stored)));
    }

    /// Remove any mock response or handler for `method`.
    pub fn unset(&self, method: &str) {
        let removed = self.registry.unset(method);
        debug!(method, removed, "unset mock");
    }

    /// Remove every mock response and handler.
    pub fn clear(&self) {
        let removed = self.registry.clear();
        debug!(removed, "cleared mocks");
    }

    /// Whether `method` currently has a mock response or handler.
    pub fn is_mocked(&self, method: &str) -> bool {
        self.registry.contains(method)
    }

    /// Number of methods with a mock response or handler.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no method is mocked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An interceptor serving calls from this mock's table.
    ///
    /// Methods without a mock response or handler fall through to the real
    /// handler.
    pub fn unary_server_interceptor(&self) -> UnaryServerInterceptor {
        UnaryServerInterceptor::new(Arc::clone(&self.registry))
    }
}
