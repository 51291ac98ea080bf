// passforge-cli: shared utilities for the command-line tool.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, bail};
use hashbrown::HashSet;
use tracing::info;
use tracing_subscriber::EnvFilter;

use passforge_core::{MutationOption, OptionSet, UnknownOption};
use passforge_engine::{GeneratorConfig, PreparedRun};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "PASSFORGE_LOG";

/// Install a stderr tracing subscriber.
///
/// The filter comes from `PASSFORGE_LOG` when set, otherwise `warn`
/// (`debug` with `verbose`).
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Extract seed words from word-list text: one per line, surrounding
/// whitespace trimmed, blank lines and `#` comments skipped.
pub fn parse_seed_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read seed words from a file, or from stdin when `path` is `-`.
pub fn read_seed_file(path: &Path) -> anyhow::Result<Vec<String>> {
    if path == Path::new("-") {
        let text = io::read_to_string(io::stdin()).context("failed to read stdin")?;
        return Ok(parse_seed_lines(&text));
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parse_seed_lines(&text))
}

/// Parse option arguments strictly. Each value may hold several names
/// separated by commas.
pub fn parse_options<S: AsRef<str>>(values: &[S]) -> Result<OptionSet, UnknownOption> {
    let mut options = OptionSet::new();
    for value in values {
        for name in value.as_ref().split(',').map(str::trim).filter(|n| !n.is_empty()) {
            options.insert(name.parse::<MutationOption>()?);
        }
    }
    Ok(options)
}

/// Comma-separated list of every valid option name, for error messages.
pub fn option_names() -> String {
    MutationOption::ALL
        .iter()
        .map(|o| o.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write one candidate per line. With `unique`, later repeats of a
/// candidate are dropped. Returns the number of lines written.
pub fn write_candidates<I, W>(candidates: I, out: &mut W, unique: bool) -> io::Result<u64>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut written = 0u64;
    for candidate in candidates {
        if unique && !seen.insert(candidate.clone()) {
            continue;
        }
        out.write_all(candidate.as_bytes())?;
        out.write_all(b"\n")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// What the binary prints for a prepared run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Every candidate, one per line.
    Candidates { unique: bool },
    /// Only the exact candidate count.
    Count,
    /// The mutated token set.
    Tokens,
}

/// Write the output for `run` in `mode` to the writer returned by `open`.
///
/// Everything that can reject the run (count overflow, the candidate
/// limit) is checked before `open` is called, so a rejected run never
/// creates or truncates the destination. Returns the number of lines
/// written.
pub fn emit<W, F>(
    run: &PreparedRun,
    config: &GeneratorConfig,
    mode: OutputMode,
    open: F,
) -> anyhow::Result<u64>
where
    W: Write,
    F: FnOnce() -> anyhow::Result<W>,
{
    match mode {
        OutputMode::Tokens => {
            let mut out = open()?;
            for token in run.tokens() {
                writeln!(out, "{token}")?;
            }
            out.flush()?;
            Ok(run.tokens().len() as u64)
        }
        OutputMode::Count => {
            let Some(n) = run.count() else {
                bail!("candidate count overflows");
            };
            let mut out = open()?;
            writeln!(out, "{n}")?;
            out.flush()?;
            Ok(1)
        }
        OutputMode::Candidates { unique } => {
            let required = config.check(run.tokens().len())?;
            info!(tokens = run.tokens().len(), %required, "writing candidates");
            let mut out = open()?;
            let written = write_candidates(run.candidates(), &mut out, unique)
                .context("failed to write candidates")?;
            info!(written, "done");
            Ok(written)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use passforge_engine::{Engine, GenerateError};

    fn prepared(words: &[&str], config: GeneratorConfig) -> PreparedRun {
        Engine::new().with_config(config).prepare(words).unwrap()
    }

    #[test]
    fn seed_lines_skip_blank_and_comments() {
        let text = "# profile\nanna\n\n  1990-02-14  \n#skip\nrex\n";
        assert_eq!(parse_seed_lines(text), vec!["anna", "1990-02-14", "rex"]);
    }

    #[test]
    fn options_split_on_commas() {
        let set = parse_options(&["upper,leet", "char"]).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(MutationOption::Leet));
    }

    #[test]
    fn options_reject_unknown() {
        let err = parse_options(&["upper,shout"]).unwrap_err();
        assert_eq!(err.0, "shout");
    }

    #[test]
    fn options_tolerate_empty_segments() {
        let set = parse_options(&["accent,,", " allChar "]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn option_names_listed() {
        assert_eq!(
            option_names(),
            "upper, lower, capitalize, accent, leet, char, allChar"
        );
    }

    #[test]
    fn write_plain() {
        let mut buf = Vec::new();
        let n = write_candidates(["a", "b", "a"].map(String::from), &mut buf, false).unwrap();
        assert_eq!(n, 3);
        assert_eq!(String::from_utf8(buf).unwrap(), "a\nb\na\n");
    }

    #[test]
    fn write_unique_keeps_first() {
        let mut buf = Vec::new();
        let n = write_candidates(["abc", "x", "abc"].map(String::from), &mut buf, true).unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(buf).unwrap(), "abc\nx\n");
    }

    // -- emit --

    #[test]
    fn emit_rejected_run_never_opens_output() {
        let config = GeneratorConfig::default().with_max_candidates(Some(1));
        let run = prepared(&["a", "b", "c"], config);
        let mut opened = false;
        let err = emit(&run, &config, OutputMode::Candidates { unique: false }, || {
            opened = true;
            Ok(Vec::new())
        })
        .unwrap_err();
        assert!(!opened);
        assert_eq!(
            err.downcast_ref::<GenerateError>(),
            Some(&GenerateError::LimitExceeded { required: 9, limit: 1 })
        );
    }

    #[test]
    fn emit_candidates_within_limit() {
        let config = GeneratorConfig::default();
        let run = prepared(&["a", "b", "c"], config);
        let mut buf = Vec::new();
        let out = &mut buf;
        let n = emit(&run, &config, OutputMode::Candidates { unique: false }, move || Ok(out))
            .unwrap();
        assert_eq!(n, 9);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "a\nb\nc\nab\nba\nac\nca\nbc\ncb\n"
        );
    }

    #[test]
    fn emit_count_ignores_limit() {
        let config = GeneratorConfig::default().with_max_candidates(Some(1));
        let run = prepared(&["a", "b", "c"], config);
        let mut buf = Vec::new();
        let out = &mut buf;
        emit(&run, &config, OutputMode::Count, move || Ok(out)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "9\n");
    }

    #[test]
    fn emit_tokens_ignores_limit() {
        let config = GeneratorConfig::default().with_max_candidates(Some(1));
        let run = prepared(&["rex", "luna", "rex"], config);
        let mut buf = Vec::new();
        let out = &mut buf;
        let n = emit(&run, &config, OutputMode::Tokens, move || Ok(out)).unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(buf).unwrap(), "rex\nluna\n");
    }
}
