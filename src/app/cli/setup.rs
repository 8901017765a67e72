//! Setup command implementation.

use std::path::PathBuf;

use crate::app::ServiceTarget;
use crate::domain::{AppError, SetupMode};

pub fn run_setup(
    manifest: PathBuf,
    service_id: String,
    service_version: u32,
    accept_defaults: bool,
    non_interactive: bool,
) -> Result<(), AppError> {
    let options = crate::SetupOptions {
        manifest,
        target: ServiceTarget::new(service_id, service_version),
        mode: SetupMode { accept_defaults, non_interactive },
    };
    let service = format!("{} version {}", options.target.service_id, service_version);

    let report = crate::setup(options)?;
    if report.provisioned.is_empty() {
        println!("✅ Nothing to provision for service {}", service);
        return Ok(());
    }

    println!("✅ Provisioned resources for service {}", service);
    for kind in &report.provisioned {
        println!("  • {}", kind.manifest_key());
    }
    Ok(())
}
