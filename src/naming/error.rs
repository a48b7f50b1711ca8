use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("cannot generate a name from an empty base name")]
    EmptyBaseName,

    #[error("ran out of suffix attempts for '{base}'")]
    AttemptsExhausted { base: String },
}
