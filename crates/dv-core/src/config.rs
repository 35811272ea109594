use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::Charset;

/// Options de dévolution, figées pour toute la durée d'un run.
///
/// Sérialisable en TOML. Every flag defaults to off and the charset to UTF-8.
///
/// # Example
/// ```
/// use dv_core::config::DevolveOptions;
/// use dv_core::charset::Charset;
/// let options = DevolveOptions::default();
/// assert_eq!(options.charset, Charset::Utf8);
/// assert!(!options.show_counts);
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DevolveOptions {
    /// Encodage source.
    pub charset: Charset,
    /// Render U+00AD SOFT HYPHEN as `-` instead of consulting the table.
    pub soft_hyphen_as_hyphen: bool,
    /// Afficher les compteurs après chaque fichier.
    pub show_counts: bool,
    /// Afficher les compteurs, mais seulement si le fichier contient des octets 8-bit.
    pub show_8bit_only: bool,
    /// Trace every successful table conversion on the diagnostic sink.
    pub trace_conversions: bool,
    /// Trace every invalid byte or sequence on the diagnostic sink.
    pub trace_errors: bool,
    /// Trace every valid rune that has no table entry.
    pub trace_untranslated: bool,
}

impl DevolveOptions {
    /// Whether end-of-file counts should be reported for a file that saw
    /// `eight_bit` bytes with the high bit set.
    ///
    /// # Example
    /// ```
    /// use dv_core::config::DevolveOptions;
    /// let options = DevolveOptions { show_8bit_only: true, ..Default::default() };
    /// assert!(!options.wants_counts(0));
    /// assert!(options.wants_counts(3));
    /// ```
    #[inline]
    #[must_use]
    pub fn wants_counts(&self, eight_bit: u64) -> bool {
        self.show_counts || (self.show_8bit_only && eight_bit > 0)
    }

    /// Turn on all three trace flags.
    pub fn trace_all(&mut self) {
        self.trace_conversions = true;
        self.trace_errors = true;
        self.trace_untranslated = true;
    }

    /// `true` if any trace flag is set.
    #[must_use]
    pub fn any_trace(&self) -> bool {
        self.trace_conversions || self.trace_errors || self.trace_untranslated
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    devolve: Option<DevolveSection>,
    trace: Option<TraceSection>,
}

/// `[devolve]` section, all fields optional for partial override.
#[derive(Deserialize)]
struct DevolveSection {
    charset: Option<Charset>,
    soft_hyphens: Option<bool>,
    show_counts: Option<bool>,
    count_8bit: Option<bool>,
}

/// `[trace]` section, all fields optional.
#[derive(Deserialize)]
struct TraceSection {
    conversions: Option<bool>,
    errors: Option<bool>,
    untranslated: Option<bool>,
}

/// Parse a TOML document and merge it over the default options.
///
/// # Errors
/// Returns an error if the document is not valid TOML, has the wrong shape,
/// or names an unknown charset.
///
/// # Example
/// ```
/// use dv_core::config::parse_config;
/// use dv_core::charset::Charset;
/// let options = parse_config("[devolve]\ncharset = \"latin-1\"\n").unwrap();
/// assert_eq!(options.charset, Charset::Latin1);
/// ```
pub fn parse_config(content: &str) -> Result<DevolveOptions> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut options = DevolveOptions::default();

    if let Some(d) = file.devolve {
        if let Some(v) = d.charset {
            options.charset = v;
        }
        if let Some(v) = d.soft_hyphens {
            options.soft_hyphen_as_hyphen = v;
        }
        if let Some(v) = d.show_counts {
            options.show_counts = v;
        }
        if let Some(v) = d.count_8bit {
            options.show_8bit_only = v;
        }
    }

    if let Some(t) = file.trace {
        if let Some(v) = t.conversions {
            options.trace_conversions = v;
        }
        if let Some(v) = t.errors {
            options.trace_errors = v;
        }
        if let Some(v) = t.untranslated {
            options.trace_untranslated = v;
        }
    }

    Ok(options)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use dv_core::config::load_config;
/// use std::path::Path;
/// let options = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<DevolveOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let options = parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    log::debug!("Config chargée depuis {} : {options:?}", path.display());
    Ok(options)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_keeps_defaults() {
        let options = parse_config("").unwrap();
        assert_eq!(options, DevolveOptions::default());
    }

    #[test]
    fn shipped_default_matches_defaults() {
        let options = parse_config(include_str!("../../../config/default.toml")).unwrap();
        assert_eq!(options, DevolveOptions::default());
    }

    #[test]
    fn sections_override_fields() {
        let options = parse_config(
            "[devolve]\n\
             charset = \"ISO-8859-1\"\n\
             soft_hyphens = true\n\
             count_8bit = true\n\
             [trace]\n\
             errors = true\n",
        )
        .unwrap();
        assert_eq!(options.charset, Charset::Latin1);
        assert!(options.soft_hyphen_as_hyphen);
        assert!(!options.show_counts);
        assert!(options.show_8bit_only);
        assert!(options.trace_errors);
        assert!(!options.trace_conversions);
        assert!(!options.trace_untranslated);
    }

    #[test]
    fn unknown_charset_fails_to_parse() {
        let err = parse_config("[devolve]\ncharset = \"cp1252\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("cp1252"));
    }

    #[test]
    fn trace_all_sets_every_flag() {
        let mut options = DevolveOptions::default();
        assert!(!options.any_trace());
        options.trace_all();
        assert!(options.trace_conversions && options.trace_errors && options.trace_untranslated);
    }

    #[test]
    fn counts_policy() {
        let plain = DevolveOptions::default();
        assert!(!plain.wants_counts(10));
        let always = DevolveOptions { show_counts: true, ..Default::default() };
        assert!(always.wants_counts(0));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[trace]\nconversions = true").unwrap();
        let options = load_config(file.path()).unwrap();
        assert!(options.trace_conversions);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(format!("{err}").contains("Impossible de lire"));
    }
}
