//! Process command implementation for the Hilltop processor CLI
//!
//! Files are processed strictly one after another: each is decoded,
//! assembled, encoded and delivered before the next is opened.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};

use super::shared::{RunStats, generate_final_report, load_configuration, setup_logging};
use crate::app::services::delivery::{
    DryRunSink, JsonEncoder, ObservationEncoder, ObservationSink, WriterSink,
};
use crate::app::services::hilltop_decoder::{Latin1, decode_file};
use crate::app::services::observation_assembler::{AssemblyStats, ObservationAssembler};
use crate::cli::args::Args;
use crate::{Error, Result};

/// Process command runner
///
/// 1. Set up logging and configuration
/// 2. Build the assembler and delivery sink
/// 3. Process each file in order
/// 4. Print the run summary
///
/// A file-scoped failure stops the run unless `--keep-going` is set;
/// configuration, encoding and delivery failures always stop it.
pub fn run_process(args: Args) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args)?;

    let units = config.unit_mapping();
    let assembler = ObservationAssembler::new(&config.sites, &units, &config.network, &config.method)
        .with_local_zone(config.local_offset);
    let encoder = JsonEncoder;
    let mut sink = create_sink(config.dry_run, args.output.as_deref())?;

    let mut stats = RunStats::default();

    for path in &args.files {
        match process_file(path, &assembler, &encoder, sink.as_mut()) {
            Ok(file_stats) => {
                stats.files_processed += 1;
                stats.observations_delivered += file_stats.readings_extracted;
                stats.measurements_skipped += file_stats.measurements_skipped();
            }
            Err(e) if e.is_file_scoped() && args.keep_going => {
                error!("{}", e);
                stats.files_failed += 1;
            }
            Err(e) => {
                stats.files_failed += 1;
                stats.processing_time = start_time.elapsed();
                if !args.quiet {
                    generate_final_report(&stats);
                }
                return Err(e);
            }
        }
    }

    stats.processing_time = start_time.elapsed();
    if !args.quiet {
        generate_final_report(&stats);
    }

    Ok(stats)
}

/// Decode, assemble and deliver a single Hilltop file
pub fn process_file(
    path: &Path,
    assembler: &ObservationAssembler<'_>,
    encoder: &dyn ObservationEncoder,
    sink: &mut dyn ObservationSink,
) -> Result<AssemblyStats> {
    let file = path.display().to_string();
    info!("processing: {}", file);

    let document = decode_file(path, Some(&Latin1)).map_err(|e| Error::decode(&file, e))?;
    debug!(
        "Agency \"{}\": {} measurements",
        document.agency,
        document.measurements.len()
    );

    let assembly = assembler
        .assemble(&document)
        .map_err(|e| Error::parse(&file, e))?;

    for observation in &assembly.observations {
        let payload = encoder.encode(observation)?;
        debug!("{}", String::from_utf8_lossy(&payload));
        sink.deliver(&payload)?;
    }
    sink.flush()?;

    info!(
        "completed {}: {} observations, {} measurements skipped",
        file,
        assembly.observations.len(),
        assembly.stats.measurements_skipped()
    );
    Ok(assembly.stats)
}

fn create_sink(dry_run: bool, output: Option<&Path>) -> Result<Box<dyn ObservationSink>> {
    if dry_run {
        info!("Dry run - observations will not be delivered");
        return Ok(Box::new(DryRunSink::new()));
    }

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::io(format!("Failed to create output {}", path.display()), e)
            })?;
            Ok(Box::new(WriterSink::new(BufWriter::new(file))))
        }
        None => Ok(Box::new(WriterSink::new(io::stdout().lock()))),
    }
}
