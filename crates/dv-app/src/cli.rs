use std::path::PathBuf;

use clap::Parser;
use dv_core::charset::Charset;
use dv_core::config::DevolveOptions;

/// charset-devolve : réduit un texte UTF-8 ou Latin-1 à de l'ASCII 7 bits.
#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(name = "charset-devolve", version, about, long_about = None)]
pub struct Cli {
    /// Fichiers à convertir. `-` ou aucun fichier : entrée standard.
    pub files: Vec<PathBuf>,

    /// Encodage source : UTF-8 (défaut) ou latin1 / ISO-8859-1.
    #[arg(short = 'C', long)]
    pub charset: Option<Charset>,

    /// Rendre U+00AD SOFT HYPHEN par `-`.
    #[arg(short = 'H', long)]
    pub soft_hyphens: bool,

    /// Afficher les compteurs après chaque fichier.
    #[arg(short = 'c', long, visible_alias = "counts")]
    pub show_counts: bool,

    /// Compteurs uniquement pour les fichiers contenant des octets 8-bit.
    #[arg(short = '8', long = "count-8bit")]
    pub count_8bit: bool,

    /// Tracer chaque conversion réussie.
    #[arg(long)]
    pub trace_conversions: bool,

    /// Tracer chaque octet ou séquence invalide.
    #[arg(long)]
    pub trace_errors: bool,

    /// Tracer chaque caractère sans traduction.
    #[arg(long)]
    pub trace_untranslated: bool,

    /// Toutes les traces ci-dessus.
    #[arg(long)]
    pub trace: bool,

    /// Mode verbeux (implique --show-counts).
    #[arg(short, long)]
    pub verbose: bool,

    /// Mode debug (implique --verbose).
    #[arg(short, long)]
    pub debug: bool,

    /// Fichier de configuration TOML, appliqué avant les options.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// `--verbose`, directly or through `--debug`.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    /// Log level from `--log-level`, raised by `--verbose` and `--debug`.
    #[must_use]
    pub fn log_filter(&self) -> log::LevelFilter {
        let base = self.log_level.parse().unwrap_or(log::LevelFilter::Warn);
        if self.debug {
            base.max(log::LevelFilter::Debug)
        } else if self.verbose {
            base.max(log::LevelFilter::Info)
        } else {
            base
        }
    }

    /// Apply the flags on top of `options`. Flags only switch options on,
    /// or select the charset.
    pub fn apply(&self, options: &mut DevolveOptions) {
        if let Some(charset) = self.charset {
            options.charset = charset;
        }
        options.soft_hyphen_as_hyphen |= self.soft_hyphens;
        options.show_counts |= self.show_counts || self.is_verbose();
        options.show_8bit_only |= self.count_8bit;
        options.trace_conversions |= self.trace_conversions;
        options.trace_errors |= self.trace_errors;
        options.trace_untranslated |= self.trace_untranslated;
        if self.trace {
            options.trace_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("charset-devolve").chain(args.iter().copied())).unwrap()
    }

    fn options(args: &[&str]) -> DevolveOptions {
        let mut options = DevolveOptions::default();
        parse(args).apply(&mut options);
        options
    }

    #[test]
    fn command_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_keep_defaults() {
        let cli = parse(&[]);
        assert!(cli.files.is_empty());
        assert_eq!(options(&[]), DevolveOptions::default());
        assert_eq!(cli.log_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn short_flags() {
        let o = options(&["-C", "latin-1", "-H", "-c", "-8", "a.txt", "-"]);
        assert_eq!(o.charset, Charset::Latin1);
        assert!(o.soft_hyphen_as_hyphen);
        assert!(o.show_counts);
        assert!(o.show_8bit_only);

        let cli = parse(&["a.txt", "-"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("-")]);
    }

    #[test]
    fn counts_alias() {
        assert!(options(&["--counts"]).show_counts);
    }

    #[test]
    fn unknown_charset_is_a_usage_error() {
        let err = Cli::try_parse_from(["charset-devolve", "--charset", "ebcdic"]).unwrap_err();
        assert!(err.to_string().contains("ebcdic"));
    }

    #[test]
    fn trace_turns_on_every_trace() {
        let o = options(&["--trace"]);
        assert!(o.trace_conversions && o.trace_errors && o.trace_untranslated);

        let o = options(&["--trace-errors"]);
        assert!(o.trace_errors);
        assert!(!o.trace_conversions);
    }

    #[test]
    fn debug_implies_verbose_implies_counts() {
        let cli = parse(&["-d"]);
        assert!(cli.is_verbose());
        assert_eq!(cli.log_filter(), log::LevelFilter::Debug);
        assert!(options(&["-d"]).show_counts);

        let cli = parse(&["-v", "--log-level", "trace"]);
        assert_eq!(cli.log_filter(), log::LevelFilter::Trace);
        assert!(options(&["-v"]).show_counts);
    }

    #[test]
    fn flags_never_switch_config_off() {
        let mut options = DevolveOptions {
            charset: Charset::Latin1,
            trace_errors: true,
            ..Default::default()
        };
        parse(&["-H"]).apply(&mut options);
        assert_eq!(options.charset, Charset::Latin1);
        assert!(options.trace_errors);
        assert!(options.soft_hyphen_as_hyphen);
    }
}
