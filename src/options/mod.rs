/// Options resolution domain - flag taxonomy, argument rules and the
/// pure derivations that turn validated flags into scan settings.
pub mod domain;
pub mod policies;
pub mod services;
