//! BookVista catalog core: a searchable in-memory book catalog with
//! suggestion, detail and related-book derivations. The binary in
//! `main.rs` is a thin terminal front end; all state and filtering
//! logic lives here.

pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
