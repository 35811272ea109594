use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Charset name matched none of the supported encodings.
    #[error("Jeu de caractères inconnu : '{name}' (attendu : UTF-8 ou latin1)")]
    UnknownCharset {
        /// The name as given by the user.
        name: String,
    },
}
