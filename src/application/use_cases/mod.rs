/// Use cases module containing application logic orchestration
mod resolve_options;

pub use resolve_options::ResolveOptionsUseCase;
