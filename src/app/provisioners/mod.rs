//! Per-kind provisioners and the steps they share.

mod config_stores;
mod secret_stores;

pub use config_stores::ConfigStores;
pub use secret_stores::SecretStores;

use log::debug;

use crate::app::AppContext;
use crate::domain::{AppError, ResourceKind};
use crate::ports::{LinkRequest, ProgressSink, RemoteStore};

/// Lifecycle shared by every resource kind declared under `[setup]`.
///
/// Callers run `predefined`, then `configure`, then `create`, and stop at the
/// first error. A failed provisioner must not be driven further.
pub trait Provisioner {
    /// Resource kind handled by this provisioner.
    fn kind(&self) -> ResourceKind;

    /// True when the manifest declares at least one resource of this kind.
    fn predefined(&self) -> bool;

    /// Resolve every declared entry, prompting when the mode allows it.
    fn configure(&mut self) -> Result<(), AppError>;

    /// Create resources and entries remotely, then link each to the service.
    fn create(&mut self) -> Result<(), AppError>;
}

fn require_progress<'a>(
    ctx: &AppContext<'a>,
    kind: ResourceKind,
) -> Result<&'a dyn ProgressSink, AppError> {
    ctx.progress()
        .ok_or_else(|| AppError::internal(format!("no progress sink configured for {} setup", kind)))
}

/// Run one remote call as a progress step. Failures mark the step and carry `context`.
fn remote_step<T>(
    progress: &dyn ProgressSink,
    message: &str,
    context: impl FnOnce() -> String,
    call: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError> {
    progress.step(message);
    match call() {
        Ok(value) => {
            progress.done();
            Ok(value)
        }
        Err(err) => {
            progress.fail();
            Err(AppError::remote(context(), err))
        }
    }
}

fn link_to_service(
    ctx: &AppContext<'_>,
    progress: &dyn ProgressSink,
    kind: ResourceKind,
    store: &RemoteStore,
) -> Result<(), AppError> {
    let target = ctx.target();
    let request = LinkRequest {
        service_id: target.service_id.clone(),
        service_version: target.service_version,
        name: store.name.clone(),
        resource_id: store.id.clone(),
    };

    debug!(
        "linking {} '{}' ({}) to service {} version {}",
        kind, store.name, store.id, target.service_id, target.service_version
    );
    let link = remote_step(
        progress,
        &format!("Creating resource link between service and {} '{}'...", kind, store.name),
        || {
            format!(
                "error creating resource link between the service '{}' and the {} '{}'",
                target.service_id, kind, store.name
            )
        },
        || ctx.client().create_resource_link(&request),
    )?;
    debug!("created resource link {}", link.id);
    Ok(())
}
