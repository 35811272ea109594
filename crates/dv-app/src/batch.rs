use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dv_core::config::DevolveOptions;
use dv_core::error::CoreError;
use dv_devolve::context::{FileContext, FilePosition, Status};
use dv_devolve::devolver::Devolver;

/// Nom affiché pour l'entrée standard, et argument qui la désigne.
pub const STDIN_NAME: &str = "-";

/// Une entrée du run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Entrée standard.
    Stdin,
    /// Fichier nommé sur la ligne de commande.
    File(PathBuf),
}

impl Input {
    /// `-` is standard input, anything else a file path.
    #[must_use]
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == STDIN_NAME {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Name used in counts headers and logs.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => STDIN_NAME.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Build the input list and check every named file before anything runs.
///
/// An empty list means standard input alone.
///
/// # Errors
/// Retourne une erreur si un fichier est absent, est un répertoire, ou ne
/// peut pas être ouvert en lecture.
pub fn probe_inputs(files: &[PathBuf]) -> Result<Vec<Input>> {
    if files.is_empty() {
        return Ok(vec![Input::Stdin]);
    }
    let inputs: Vec<Input> = files.iter().map(|p| Input::from_arg(p)).collect();
    for input in &inputs {
        if let Input::File(path) = input {
            probe(path)?;
        }
    }
    Ok(inputs)
}

fn probe(path: &Path) -> Result<()> {
    let meta = match std::fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CoreError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Impossible d'accéder à {}", path.display()));
        }
    };
    if meta.is_dir() {
        anyhow::bail!("{} est un répertoire", path.display());
    }
    File::open(path).with_context(|| format!("Impossible d'ouvrir {}", path.display()))?;
    Ok(())
}

/// Devolve every input in order to `out`, counts and traces to `diag`.
///
/// The cumulative line number carries over from one input to the next. One
/// input is open at a time. An input that fails to open stops the run; the
/// remaining inputs are not processed.
///
/// # Errors
/// Retourne une erreur si un fichier ne peut pas être ouvert, ou si une
/// lecture ou une écriture échoue.
pub fn run_batch<W: Write, D: Write>(
    inputs: &[Input],
    options: &DevolveOptions,
    out: &mut W,
    diag: &mut D,
) -> Result<Status> {
    let devolver = Devolver::new(options);
    let count = inputs.len();
    let mut global_line = 0;
    let mut status = Status::Clean;

    for (index, input) in inputs.iter().enumerate() {
        let name = input.name();
        log::info!("[{}/{count}] {name}", index + 1);
        let mut ctx = FileContext::new(name, FilePosition { index, count }, global_line);

        let file_status = match input {
            Input::Stdin => devolver.devolve_file(io::stdin().lock(), &mut ctx, out, diag)?,
            Input::File(path) => {
                let file = File::open(path).map_err(|e| {
                    log::error!("Ouverture impossible : {} ({e})", path.display());
                    anyhow::Error::new(e).context(format!("Impossible d'ouvrir {}", path.display()))
                })?;
                devolver.devolve_file(BufReader::new(file), &mut ctx, out, diag)?
            }
        };

        if file_status == Status::Invalid {
            log::warn!("{} : séquences invalides", ctx.name());
        }
        global_line = ctx.global_line();
        status = status.worst(file_status);
    }

    log::debug!("{count} entrée(s), {global_line} lignes au total");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use dv_core::charset::Charset;

    use super::*;

    fn write(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn no_files_means_stdin() {
        assert_eq!(probe_inputs(&[]).unwrap(), vec![Input::Stdin]);
    }

    #[test]
    fn dash_means_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", b"a");
        let inputs = probe_inputs(&[a.clone(), PathBuf::from("-")]).unwrap();
        assert_eq!(inputs, vec![Input::File(a), Input::Stdin]);
        assert_eq!(inputs[1].name(), "-");
    }

    #[test]
    fn missing_file_fails_probe() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", b"a");
        let err = probe_inputs(&[a, dir.path().join("absent.txt")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }

    #[test]
    fn directory_fails_probe() {
        let dir = tempfile::tempdir().unwrap();
        let err = probe_inputs(&[dir.path().to_path_buf()]).unwrap_err();
        assert!(err.to_string().contains("répertoire"));
    }

    #[test]
    fn files_run_in_order_with_cumulative_lines() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", "caf\u{E9}\n".as_bytes());
        let b = write(dir.path(), "b.txt", b"x\x80\ny\n");
        let inputs = probe_inputs(&[a, b]).unwrap();

        let options = DevolveOptions {
            show_counts: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let status = run_batch(&inputs, &options, &mut out, &mut diag).unwrap();

        assert_eq!(out, b"cafe\nx*BAD:80*\ny\n");
        assert_eq!(status, Status::Invalid);
        let diag = String::from_utf8(diag).unwrap();
        assert!(diag.contains("[1/2] "));
        assert!(diag.contains("[2/2] "));
        assert!(diag.contains("lines                  2"));
    }

    #[test]
    fn clean_run_status() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", b"\xE9t\xE9\n");
        let inputs = probe_inputs(&[a]).unwrap();
        let options = DevolveOptions {
            charset: Charset::Latin1,
            ..Default::default()
        };
        let mut out = Vec::new();
        let status = run_batch(&inputs, &options, &mut out, &mut io::sink()).unwrap();
        assert_eq!(out, b"ete\n");
        assert_eq!(status, Status::Clean);
    }

    #[test]
    fn open_failure_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", b"first\n");
        let b = write(dir.path(), "b.txt", b"second\n");
        let c = write(dir.path(), "c.txt", b"third\n");
        let inputs = probe_inputs(&[a, b.clone(), c]).unwrap();
        fs::remove_file(&b).unwrap();

        let mut out = Vec::new();
        let err = run_batch(&inputs, &DevolveOptions::default(), &mut out, &mut io::sink())
            .unwrap_err();
        assert!(err.to_string().contains("b.txt"));
        assert_eq!(out, b"first\n");
    }
}
