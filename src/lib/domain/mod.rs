pub mod compare;
pub mod models;
