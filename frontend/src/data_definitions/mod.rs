pub mod filter_store_context;
pub mod router_history;
pub mod url_param;
