pub mod common_utils;
pub mod date_util;
pub mod page_util;
