pub mod api;
pub mod teams_client;

pub use api::TeamsApi;
pub use teams_client::TeamsClient;
