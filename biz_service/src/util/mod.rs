pub mod sort_util;
