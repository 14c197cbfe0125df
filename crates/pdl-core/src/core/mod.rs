pub mod network;
pub mod person_query;
pub mod query;
pub mod schema;
pub mod services;
