use std::path::PathBuf;
use thiserror::Error;

/// Why a path could not be selected as the email file.
#[derive(Debug, Error)]
pub enum FileSelectError {
    #[error("Arquivo não encontrado: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Não é um arquivo: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Arquivo muito grande ({size} bytes, limite {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    #[error("Erro ao ler o arquivo: {0}")]
    Io(#[from] std::io::Error),
}
