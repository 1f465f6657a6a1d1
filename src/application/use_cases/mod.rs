/// Use cases module containing application business logic orchestration
mod run_query;

pub use run_query::RunQueryUseCase;
