//! Dynamically mock unary RPCs on a running tonic server.
//!
//! A [`GrpcMock`] holds mock responses and handlers keyed by short method
//! name (`"GetNote"` for `/notes.Notes/GetNote`). Its
//! [`UnaryServerInterceptor`] sits in front of the real service: mocked
//! methods are answered from the table, every other method reaches the real
//! implementation unchanged.
//!
//! ```no_run
//! use grpcmock::{GrpcMock, UnaryResponse, UnaryServerInfo};
//! use tonic::{Request, Status};
//!
//! # async fn demo() -> Result<(), Status> {
//! let mock = GrpcMock::new();
//! mock.set_response("GetNote", UnaryResponse::<String>::err(Status::not_found("note not found")));
//!
//! let interceptor = mock.unary_server_interceptor();
//! let info = UnaryServerInfo::new("/notes.Notes/GetNote");
//! let result = interceptor
//!     .intercept(&info, Request::new("1".to_owned()), |_req| async {
//!         Err::<tonic::Response<String>, _>(Status::unimplemented("method GetNote not implemented"))
//!     })
//!     .await;
//! assert_eq!(result.unwrap_err().code(), tonic::Code::NotFound);
//! # Ok(())
//! # }
//! ```
//!
//! Only unary RPCs are supported. All types are safe to share between tasks.

mod interceptor;
mod mock;
mod registry;
mod response;

pub use interceptor::{UnaryServerInfo, UnaryServerInterceptor};
pub use mock::{GrpcMock, UnaryHandler};
pub use response::UnaryResponse;
