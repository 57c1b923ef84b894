use std::time::Instant;

use once_cell::sync::Lazy;
use salvo::prelude::*;
use serde_json::json;

use crate::models::api_result::ApiResult;

pub(crate) static STARTED_AT: Lazy<Instant> = Lazy::new(Instant::now);

#[handler]
pub async fn check_health_api(_req: &mut Request, res: &mut Response) {
    let uptime = STARTED_AT.elapsed().as_secs();
    ApiResult::ok(Some("Healthy"), json!({ "uptime_secs": uptime })).render(res);
}
