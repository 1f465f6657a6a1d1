/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod query;
mod query_request;
mod query_response;

pub use query::Query;
pub use query_request::QueryRequest;
pub use query_response::QueryResponse;
