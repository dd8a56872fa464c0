pub mod api;
pub mod content;
pub mod db;
pub mod pagination;
pub mod storage;
pub mod validation;
