/// Application layer - Use cases
///
/// This layer orchestrates the options domain services and reaches the
/// host only through ports.
pub mod use_cases;
