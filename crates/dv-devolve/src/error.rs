use std::io;

use thiserror::Error;

/// Errors originating from the devolve engine.
///
/// Malformed input is never an error here: it is escaped and counted. Only
/// I/O failures on the source or the sinks stop a pass.
#[derive(Error, Debug)]
pub enum DevolveError {
    /// Reading the input failed.
    #[error("Erreur de lecture sur {name} : {source}")]
    Read {
        /// Display name of the input.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing transformed output failed.
    #[error("Erreur d'écriture de la sortie : {0}")]
    Write(#[source] io::Error),

    /// Writing traces or counts to the diagnostic sink failed.
    #[error("Erreur d'écriture des diagnostics : {0}")]
    Diagnostic(#[source] io::Error),
}
