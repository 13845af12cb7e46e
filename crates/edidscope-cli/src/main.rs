use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use edidscope_core::{BufferSource, InputFormat, Report};
use glob::glob;

mod logging;
mod render;

use logging::{LogLevel, init_logger};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("EDIDSCOPE_BUILD_COMMIT"),
    "\nbuild date: ",
    env!("EDIDSCOPE_BUILD_DATE")
);

const EXAMPLES: &str = "Examples:\n  edidscope decode /sys/class/drm/card0-HDMI-A-1/edid\n  edidscope decode dump.hex --output json --pretty\n  xrandr --verbose | edidscope decode - --format hex\n  edidscope decode 'dumps/*.bin' -o report.json";

#[derive(Parser, Debug)]
#[command(name = "edidscope")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode EDID base blocks from hex or binary dumps.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Minimum log level printed to stderr (RUST_LOG overrides)
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode the 128-byte base block of an EDID dump.
    #[command(after_help = EXAMPLES)]
    Decode {
        /// Path or glob to a hex or binary dump, or '-' for stdin
        input: PathBuf,

        /// Input encoding
        #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,

        /// Report rendering
        #[arg(long, value_enum, default_value_t = OutputArg::Text)]
        output: OutputArg,

        /// Write the report to a file instead of stdout
        #[arg(short = 'o', long)]
        report: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if the EDID header is invalid
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Auto,
    Hex,
    Binary,
}

impl From<FormatArg> for InputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Auto => InputFormat::Auto,
            FormatArg::Hex => InputFormat::Hex,
            FormatArg::Binary => InputFormat::Binary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    Text,
    Json,
}

struct DecodeOptions {
    format: InputFormat,
    output: OutputArg,
    report: Option<PathBuf>,
    pretty: bool,
    compact: bool,
    quiet: bool,
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let result = match cli.command {
        Commands::Decode {
            input,
            format,
            output,
            report,
            pretty,
            compact,
            quiet,
            strict,
        } => cmd_decode(
            input,
            DecodeOptions {
                format: format.into(),
                output,
                report,
                pretty,
                compact,
                quiet,
                strict,
            },
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_decode(input: PathBuf, opts: DecodeOptions) -> Result<(), CliError> {
    let rep = if is_stdin(&input) {
        decode_stdin(opts.format)?
    } else {
        let resolved_input = resolve_input_path(&input)?;
        validate_input_file(&resolved_input)?;
        if let Some(report_path) = opts.report.as_ref() {
            ensure_distinct_paths(&resolved_input, report_path)?;
        }
        edidscope_core::inspect_file(&resolved_input, opts.format)
            .with_context(|| format!("EDID decode failed: {}", resolved_input.display()))
            .map_err(|err| CliError::new(format!("{:#}", err), Some(decode_hint(opts.format))))?
    };

    let rendered = render_report(&rep, &opts)?;

    match opts.report.as_ref() {
        None => print!("{}", rendered),
        Some(report) => {
            if let Some(parent) = report.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(report, rendered)
                .with_context(|| format!("Failed to write report: {}", report.display()))?;
            if !opts.quiet {
                eprintln!("OK: report written -> {}", report.display());
            }
        }
    }

    if opts.strict && !rep.edid.header.valid {
        return Err(CliError::new(
            "EDID header is invalid",
            Some("the input may not start with a base block; drop --strict to decode anyway".to_string()),
        ));
    }
    Ok(())
}

fn decode_stdin(format: InputFormat) -> Result<Report, CliError> {
    let mut data = Vec::new();
    io::stdin()
        .read_to_end(&mut data)
        .context("Failed to read EDID dump from stdin")?;
    let source = BufferSource::new(data, format);
    edidscope_core::inspect_source(Path::new("-"), source)
        .context("EDID decode failed: <stdin>")
        .map_err(|err| CliError::new(format!("{:#}", err), Some(decode_hint(format))))
}

fn decode_hint(format: InputFormat) -> String {
    match format {
        InputFormat::Binary => "the dump must hold at least one 128-byte block".to_string(),
        InputFormat::Hex => {
            "hex dumps need two digits per byte; spaces, commas and 0x prefixes are allowed"
                .to_string()
        }
        InputFormat::Auto => {
            "pass --format hex or --format binary if the input type is misdetected".to_string()
        }
    }
}

fn render_report(rep: &Report, opts: &DecodeOptions) -> Result<String, CliError> {
    match opts.output {
        OutputArg::Text => render::render_text(rep)
            .context("Text rendering failed")
            .map_err(Into::into),
        OutputArg::Json => serialize_report(rep, opts.pretty, opts.compact),
    }
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    let json = if pretty {
        serde_json::to_string_pretty(rep)
    } else {
        serde_json::to_string(rep)
    };
    json.map(|json| json + "\n")
        .context("JSON serialization failed")
        .map_err(Into::into)
}

fn ensure_distinct_paths(input: &Path, report_path: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let report_abs = report_path
        .parent()
        .map(|parent| {
            if parent.as_os_str().is_empty() {
                fs::canonicalize(".")
            } else {
                fs::canonicalize(parent)
            }
        })
        .transpose();
    // A missing output directory is created later, so it cannot hold the input.
    let Ok(Some(report_dir)) = report_abs else {
        return Ok(());
    };
    let file_name = report_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid report path: {}", report_path.display()))?;
    if report_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!(
                "report path must differ from input: {}",
                report_path.display()
            ),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a hex or binary EDID dump, or '-' to read stdin".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a hex or binary EDID dump, or '-' to read stdin".to_string()),
        ));
    }
    Ok(())
}

fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let hint = "pass a single dump, or run once per file".to_string();
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let mut message = format!(
            "multiple files match pattern '{}' ({} matches); matches: {}",
            pattern,
            matches.len(),
            listed
        );
        if matches.len() > 3 {
            message.push_str(", ...");
        }
        return Err(CliError::new(message, Some(hint)));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
