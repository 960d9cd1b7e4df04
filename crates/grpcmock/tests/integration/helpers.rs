use std::sync::atomic::{AtomicUsize, Ordering};

use tonic::metadata::MetadataValue;
use tonic::{Request, Response, Status};

use grpcmock::UnaryServerInfo;

pub const METHOD_A: &str = "MethodA";
pub const METHOD_B: &str = "MethodB";
pub const INFO_A: UnaryServerInfo<'static> = UnaryServerInfo::new("/package.Service/MethodA");
pub const INFO_B: UnaryServerInfo<'static> = UnaryServerInfo::new("/package.Service/MethodB");

pub const CTX_KEY: &str = "ctx-key";
pub const CTX_VAL: &str = "ctx-val";
pub const REQ_VAL: &str = "req";

/// Request carrying `body` with `CTX_KEY: CTX_VAL` in its metadata.
pub fn request(body: &str) -> Request<String> {
    let mut req = Request::new(body.to_owned());
    req.metadata_mut()
        .insert(CTX_KEY, MetadataValue::from_static(CTX_VAL));
    req
}

/// `"<prefix>/<ctx value>/<request>"`, the shape both test handlers answer with.
pub fn echo(prefix: &str, req: &Request<String>) -> String {
    let ctx = req
        .metadata()
        .get(CTX_KEY)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("<none>");
    format!("{prefix}/{ctx}/{}", req.get_ref())
}

pub fn resp_real() -> String {
    format!("real/{CTX_VAL}/{REQ_VAL}")
}

pub fn resp_mock() -> String {
    format!("mock/{CTX_VAL}/{REQ_VAL}")
}

/// Real implementation that counts how often it was reached.
#[derive(Default)]
pub struct RealService {
    calls: AtomicUsize,
}

impl RealService {
    pub async fn handle(&self, req: Request<String>) -> Result<Response<String>, Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Response::new(echo("real", &req)))
    }

    pub async fn fail(&self, _req: Request<String>) -> Result<Response<String>, Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Status::unavailable("err-real"))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub async fn handler_mock(req: Request<String>) -> Result<Response<String>, Status> {
    Ok(Response::new(echo("mock", &req)))
}

pub async fn handler_mock_err(_req: Request<String>) -> Result<Response<String>, Status> {
    Err(Status::permission_denied("err-mock"))
}
