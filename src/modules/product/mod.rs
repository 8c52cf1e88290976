pub mod controller;
pub mod generator;
pub mod prompts;
pub mod routes;
pub mod schema;
