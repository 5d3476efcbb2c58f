pub mod create;
pub mod detail;
pub mod grid;
pub mod list_page;
pub mod persistence;
pub mod search;
