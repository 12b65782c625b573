use acp_validator::application::catalog::RecordKind;
use acp_validator::domain::error_response::{ErrorResponse, ErrorResponseType};
use acp_validator::error::AcpError;
use acp_validator::interfaces::jsonl::record_reader::RecordReader;
use acp_validator::interfaces::jsonl::record_writer::RecordWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input JSON Lines file, one record per line
    input: PathBuf,

    /// Record type every line is validated as
    #[arg(long, value_enum, default_value_t = RecordKind::DelegatePaymentRequest)]
    kind: RecordKind,

    /// Fail the run if any record is rejected
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RecordReader::new(file);
    let stdout = io::stdout();
    let mut writer = RecordWriter::new(stdout.lock());

    let mut rejected = 0usize;
    for (line, parsed) in reader.records() {
        match parsed.and_then(|value| cli.kind.canonicalize(&value)) {
            Ok(canonical) => writer.write_record(&canonical).into_diagnostic()?,
            Err(AcpError::Validation(err)) => {
                rejected += 1;
                warn!(line, param = err.param(), "rejected record: {err}");
                writer
                    .write_record(&ErrorResponse::from(err))
                    .into_diagnostic()?;
            }
            Err(AcpError::Json(err)) => {
                rejected += 1;
                warn!(line, "rejected record: malformed JSON: {err}");
                let response = ErrorResponse::new(
                    ErrorResponseType::InvalidRequest,
                    "malformed_json",
                    err.to_string(),
                    None,
                );
                writer.write_record(&response).into_diagnostic()?;
            }
            Err(err) => return Err(err).into_diagnostic(),
        }
    }
    writer.flush().into_diagnostic()?;

    if cli.strict && rejected > 0 {
        miette::bail!("{rejected} record(s) rejected");
    }
    Ok(())
}
