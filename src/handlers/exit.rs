use salvo::prelude::*;
use serde_json::Value;
use tracing::info;

use crate::host::AppState;
use crate::models::api_result::ApiResult;

#[handler]
pub async fn exit_api(depot: &mut Depot, res: &mut Response) {
    match depot.obtain::<AppState>() {
        Ok(state) => {
            info!("Exit requested over HTTP, shutting down");
            state.shutdown.trigger();
            ApiResult::ok(Some("Shutting down"), Value::Null).render(res);
        }
        Err(_) => {
            ApiResult::error(StatusCode::INTERNAL_SERVER_ERROR, "Host state missing").render(res);
        }
    }
}
