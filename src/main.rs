use boleto::{BoletoError, BoletoRecord, DocumentBuilder, DocumentConfig};
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::process;

/// Renders a JSON array of boleto records into a PDF.
fn main() -> Result<(), BoletoError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if !(3..=4).contains(&args.len()) {
        eprintln!("Renders Febraban boletos from JSON records.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/records.json> <path/to/output.pdf> [path/to/config.json]",
            args[0]
        );
        process::exit(1);
    }

    let records_path = &args[1];
    let output_path = &args[2];
    let config = match args.get(3) {
        Some(path) => DocumentConfig::from_file(path)?,
        None => DocumentConfig::default(),
    };

    log::info!("Loading records from {}", records_path);
    let records: Vec<BoletoRecord> = serde_json::from_str(&fs::read_to_string(records_path)?)?;

    let output = BufWriter::new(File::create(output_path)?);
    let mut doc = DocumentBuilder::from_config(config).build_pdf(output)?;
    let pages = doc.draw_records(&records)?;
    doc.save()?;
    doc.into_surface().into_inner()?.flush()?;

    println!("Wrote {} records on {} pages to {}", records.len(), pages.max(1), output_path);
    Ok(())
}
