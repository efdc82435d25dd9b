pub mod api;
pub mod date_utils;
pub mod dom;
pub mod logging;
pub mod storage;
