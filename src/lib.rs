pub mod app;
pub mod authors;
pub mod error;
pub mod fetch;
pub mod publish;
pub mod schema;
pub mod transform;
