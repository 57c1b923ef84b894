pub mod api_result;
pub mod ticker_info;
pub mod ticker_status;
