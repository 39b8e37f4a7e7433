//! HTTP API handlers for trackflow-hub

pub mod auth;
pub mod demos;
pub mod health;
pub mod navigation;
pub mod profile;
pub mod rooms;
pub mod search;
pub mod uploads;

pub use auth::auth_routes;
pub use demos::demo_routes;
pub use health::health_routes;
pub use navigation::navigation_routes;
pub use profile::profile_routes;
pub use rooms::room_routes;
pub use search::search_routes;
pub use uploads::upload_routes;
