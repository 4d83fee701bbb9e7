use lambda_http::{Body, Error, Request, Response};
use roles_shared::{roles, AdminApi, AppState};
use std::sync::Arc;

/// Main Lambda handler - every request is treated as a new-user webhook,
/// whatever its method or path
pub(crate) async fn function_handler<A: AdminApi>(
    event: Request,
    state: Arc<AppState<A>>,
) -> Result<Response<Body>, Error> {
    tracing::info!(
        "Set default role invoked - Method: {} Path: {}",
        event.method(),
        event.uri().path()
    );

    roles::assign_default_role(&state.admin, event.body())
        .await
        .inspect_err(|err| tracing::error!("Failed to assign default role: {}", err))
}
