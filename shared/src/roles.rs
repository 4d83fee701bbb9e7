use lambda_http::{Body, Error, Response};

use crate::admin::AdminApi;
use crate::types::{AdminResponse, IncomingEvent, RoleUpdatePayload};

/// Give the user named in a new-user webhook the default role.
/// The admin API's status and JSON body are relayed unchanged.
pub async fn assign_default_role<A: AdminApi>(
    admin: &A,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    // Fully parsed before anything goes out
    let event = IncomingEvent::from_slice(body)?;
    let user_id = event.user_id()?;

    let payload = RoleUpdatePayload::default_role();
    let downstream = admin.update_app_metadata(user_id, &payload).await?;

    tracing::info!(
        user_id,
        status = downstream.status,
        "Admin API answered role update"
    );

    relay(downstream)
}

fn relay(downstream: AdminResponse) -> Result<Response<Body>, Error> {
    let resp = Response::builder()
        .status(downstream.status)
        .header("content-type", "application/json")
        .body(downstream.body.get().to_string().into())
        .map_err(Box::new)?;
    Ok(resp)
}
