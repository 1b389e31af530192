pub mod convocations;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod server;
pub mod teams;

pub use convocations::{Convocation, ConvocationSource, InMemoryConvocations, SourceError};
pub use errors::{ErrorResponse, ErrorSeverity, IntoErrorResponse};
pub use logging::{LogEntry, LogFormat, TestLogSubscriber, init_logging};
pub use middleware::{RequestStart, log_response, with_request_logging};
pub use server::{AppContext, ServerConfig, ServerError, ServerHandle, WebServer};
pub use teams::{TeamsError, TeamsResponse, resolve_teams};
