//! Batch entry point: converts the default contacts export into a card file.
//!
//! # Responsibility
//! - Start stderr logging with the build-mode default level.
//! - Run one export with compile-time default paths.
//! - Exit non-zero when the run fails.

use contacts_vcf_core::{init_logging, init_stderr_logging, run_export, ExportConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = ExportConfig::default();

    let logging = match config.log_dir.as_deref().and_then(|dir| dir.to_str()) {
        Some(dir) => init_logging(&config.log_level, dir),
        None => init_stderr_logging(&config.log_level),
    };
    if let Err(err) = logging {
        eprintln!("contacts_vcf: logging disabled: {err}");
    }

    match run_export(&config) {
        Ok(summary) => {
            println!(
                "contacts_vcf: wrote {} contacts ({} bytes) to {}",
                summary.stats.contacts,
                summary.bytes_written,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=export module=cli status=error error={err}");
            eprintln!("contacts_vcf: export failed: {err}");
            ExitCode::FAILURE
        }
    }
}
