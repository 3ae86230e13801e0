use clap::{Parser, ValueEnum};
use invoice_form::application::session::InvoiceSession;
use invoice_form::domain::ports::RecordStoreBox;
use invoice_form::infrastructure::in_memory::InMemoryRecordStore;
use invoice_form::interfaces::csv::event_reader::EventReader;
use invoice_form::interfaces::csv::line_writer::LineWriter;
use invoice_form::interfaces::json;
use invoice_form::logging;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Form event script (CSV with columns action, field, value); "-" reads stdin
    input: PathBuf,

    /// Format of the invoice table written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log filter directive (e.g. "debug"); overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).into_diagnostic()?;
    Ok(Box::new(file))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let store: RecordStoreBox = Box::new(InMemoryRecordStore::new());
    let mut session = InvoiceSession::new(store);

    let reader = EventReader::new(open_input(&cli.input)?);
    for event_result in reader.events().into_diagnostic()? {
        match event_result {
            Ok(event) => {
                debug!(?event, "applying form event");
                if let Err(e) = session.apply(event) {
                    eprintln!("Error processing event: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    let records = session.into_records();

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => {
            let mut writer = LineWriter::new(stdout.lock());
            writer.write_lines(&records).into_diagnostic()?;
        }
        OutputFormat::Json => {
            json::write_lines(stdout.lock(), &records).into_diagnostic()?;
        }
    }

    Ok(())
}
