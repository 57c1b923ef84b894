use salvo::prelude::*;
use serde_json::to_value;
use tracing::debug;

use crate::host::AppState;
use crate::models::api_result::ApiResult;
use crate::models::ticker_info::TickerInfo;

pub(crate) fn get_info(state: &AppState) -> TickerInfo {
    TickerInfo::snapshot(&state.provider, &state.stats, state.interval_ms)
}

#[handler]
pub async fn get_ticker_api(depot: &mut Depot, res: &mut Response) {
    let Ok(state) = depot.obtain::<AppState>() else {
        ApiResult::error(StatusCode::INTERNAL_SERVER_ERROR, "Host state missing").render(res);
        return;
    };

    let info = get_info(state);
    debug!("Ticker info requested: {} ticks", info.ticks);

    let result = match to_value(info) {
        Ok(data) => ApiResult::ok(None, data),
        Err(e) => ApiResult::error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    };
    result.render(res);
}
