pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
