//! The `dollarmath` binary.

use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::{self, ExitCode};

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use dollarmath::{Options, Plugins, SegmentKind};

const EXIT_SUCCESS: u8 = 0;
const EXIT_NO_MATH: u8 = 1;
const EXIT_PARSE_CONFIG: u8 = 2;

const LOG_ENV: &str = "DOLLARMATH_LOG";

#[derive(Debug, Parser)]
#[command(about, author, version)]
#[command(after_help = "\
By default, dollarmath will attempt to read command-line options from a \
config file specified by --config-file.  This behaviour can be disabled by \
passing --config-file none.  It is not an error if the config file does not \
exist.

Log output goes to standard error and is filtered by the DOLLARMATH_LOG \
environment variable (for example DOLLARMATH_LOG=debug).")]
struct Cli {
    /// Files to read; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Option<Vec<PathBuf>>,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH")]
    config_file: Option<String>,

    /// Output format
    #[arg(short = 't', long = "to", value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Leave `$$…$$` spans as literal text
    #[arg(long)]
    no_inline_mode: bool,

    /// Typeset math as MathML
    #[cfg(feature = "mathml")]
    #[arg(long)]
    mathml: bool,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// HTML with math in data-math-style elements
    Html,
    /// One line per segment
    Segments,
    /// One line per math expression
    Expressions,
    /// No output; exit status 0 if any math is present, 1 otherwise
    Check,
}

fn cli_with_config() -> Cli {
    let cli = Cli::parse();
    let config_file_path = &cli.config_file;

    if matches!(config_file_path.as_deref(), Some("none")) {
        return cli;
    }

    let Some(path) = config_file_path
        .clone()
        .map(PathBuf::from)
        .or_else(get_default_config_path)
    else {
        return cli;
    };

    let Ok(config_args) = fs::read_to_string(&path) else {
        return cli;
    };

    match with_config_args(&config_args, std::env::args()) {
        Ok(args) => {
            debug!(path = %path.display(), "read config file");
            Cli::parse_from(args)
        }
        Err(e) => {
            eprintln!("failed to parse {}: {}", path.display(), e);
            process::exit(EXIT_PARSE_CONFIG.into());
        }
    }
}

/// Splice the words of a config file between the program name and the rest
/// of the command line.
fn with_config_args<I>(config: &str, args: I) -> Result<Vec<String>, shell_words::ParseError>
where
    I: IntoIterator<Item = String>,
{
    let mut config_args = shell_words::split(config)?;
    let mut args = args.into_iter();
    let mut merged: Vec<String> = args.next().into_iter().collect();
    merged.append(&mut config_args);
    merged.extend(args);
    Ok(merged)
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = cli_with_config();

    let options = Options {
        inline_mode: !cli.no_inline_mode,
    };

    #[cfg(feature = "mathml")]
    let mathml = dollarmath::plugins::mathml::MathmlAdapter::new();
    #[allow(unused_mut)]
    let mut plugins = Plugins::default();
    #[cfg(feature = "mathml")]
    {
        if cli.mathml {
            plugins.render.math_renderer = Some(&mathml);
        }
    }

    let mut input = String::with_capacity(2048);
    match cli.files {
        None => {
            io::stdin().read_to_string(&mut input)?;
        }
        Some(ref paths) => {
            for path in paths {
                input.push_str(&fs::read_to_string(path)?);
            }
        }
    }
    debug!(bytes = input.len(), format = ?cli.format, "read input");

    let mut out: Box<dyn Write> = match (cli.format, &cli.output) {
        (Format::Check, _) => Box::new(io::sink()),
        (_, Some(path)) => Box::new(BufWriter::new(fs::File::create(path)?)),
        (_, None) => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let code = render(cli.format, &input, &options, &plugins, &mut out)?;
    out.flush()?;
    Ok(ExitCode::from(code))
}

/// Write `input` to `out` in the given format, returning the exit status.
fn render(
    format: Format,
    input: &str,
    options: &Options,
    plugins: &Plugins,
    out: &mut dyn Write,
) -> io::Result<u8> {
    match format {
        Format::Html => {
            fmt2io::write(&mut *out, |w| {
                dollarmath::format_html(input, options, plugins, w)
            })?;
        }
        Format::Segments => {
            for segment in dollarmath::parse(input, options) {
                let kind = match segment.kind {
                    SegmentKind::Text => "text",
                    SegmentKind::Math => "math",
                };
                writeln!(out, "{} {:?}", kind, segment.content)?;
            }
        }
        Format::Expressions => {
            for expr in dollarmath::extract_math_expressions(input, options) {
                writeln!(out, "{}", expr)?;
            }
        }
        Format::Check => {
            return Ok(if dollarmath::contains_math_syntax(input, options) {
                EXIT_SUCCESS
            } else {
                EXIT_NO_MATH
            });
        }
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_default_config_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("dollarmath")
        .ok()
        .and_then(|dirs| dirs.find_config_file("config"))
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_default_config_path() -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(args: &[&str], input: &str) -> (u8, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let options = Options {
            inline_mode: !cli.no_inline_mode,
        };
        let mut out = Vec::new();
        let code = render(cli.format, input, &options, &Plugins::default(), &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn check_exit_status() {
        assert_eq!(run(&["dollarmath", "-t", "check"], "a $$x$$ b"), (EXIT_SUCCESS, String::new()));
        assert_eq!(run(&["dollarmath", "-t", "check"], "a $x$ b"), (EXIT_NO_MATH, String::new()));
        assert_eq!(
            run(&["dollarmath", "-t", "check", "--no-inline-mode"], "$$x$$"),
            (EXIT_NO_MATH, String::new())
        );
    }

    #[test]
    fn segments_are_debug_quoted() {
        assert_eq!(
            run(&["dollarmath", "--to", "segments"], "say \"hi\"\n$$ x $$"),
            (
                EXIT_SUCCESS,
                "text \"say \\\"hi\\\"\\n\"\nmath \"x\"\n".to_string()
            )
        );
    }

    #[test]
    fn expressions_one_per_line() {
        assert_eq!(
            run(&["dollarmath", "-t", "expressions"], "$$a$$ and $$ b $$"),
            (EXIT_SUCCESS, "a\nb\n".to_string())
        );
    }

    #[test]
    fn html_is_default() {
        assert_eq!(
            run(&["dollarmath"], "x < $$y$$"),
            (
                EXIT_SUCCESS,
                "x &lt; <span data-math-style=\"inline\">y</span>".to_string()
            )
        );
    }

    #[test]
    fn config_words_follow_program_name() {
        let args = ["dollarmath", "in.txt", "-t", "html"].map(String::from);
        assert_eq!(
            with_config_args("--to 'segments' --no-inline-mode", args.clone()).unwrap(),
            vec!["dollarmath", "--to", "segments", "--no-inline-mode", "in.txt", "-t", "html"]
        );
        assert!(with_config_args("--to 'unterminated", args).is_err());
        assert_eq!(with_config_args("", Vec::new()).unwrap(), Vec::<String>::new());

        let args = ["dollarmath", "-t", "check"].map(String::from);
        let cli = Cli::try_parse_from(with_config_args("--no-inline-mode", args).unwrap()).unwrap();
        assert!(matches!(cli.format, Format::Check));
        assert!(cli.no_inline_mode);
    }

    #[test]
    fn config_file_none_is_parsed() {
        let cli = Cli::try_parse_from(["dollarmath", "--config-file", "none"]).unwrap();
        assert_eq!(cli.config_file.as_deref(), Some("none"));
    }
}
