use thiserror::Error;

/// Input rejected before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Text mode with blank text
    #[error("Por favor, insira o texto do e-mail.")]
    EmptyText,
    /// File mode with no file chosen
    #[error("Por favor, selecione um arquivo.")]
    NoFile,
}

/// Why a submit trigger did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A request is already in flight
    #[error("an analysis is already in progress")]
    Busy,
}
