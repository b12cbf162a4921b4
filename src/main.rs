/*!
 * Clinic Records - Main Entry Point
 *
 * Loads the record files from the data directory, runs the interactive
 * menu on stdin/stdout and saves on exit.
 */

use miette::IntoDiagnostic;
use std::io;
use tracing::info;

use clinic_records::{init_tracing, Clinic, ClinicConfig, Console, FileSystem, LocalFS};

fn main() -> miette::Result<()> {
    init_tracing();

    let config = ClinicConfig::from_env()?;
    info!(data_dir = %config.data_dir.display(), "Clinic records starting");

    let fs = LocalFS::new(&config.data_dir);
    fs.create_dir(std::path::Path::new("/")).into_diagnostic()?;

    let mut clinic = Clinic::new(config);
    let report = clinic.load(&fs)?;
    info!(
        patients = report.patients,
        doctors = report.doctors,
        "Records ready"
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let exit = console.run(&mut clinic, &fs)?;

    info!(?exit, "Clinic records stopped");
    Ok(())
}
