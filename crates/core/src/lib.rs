pub mod config;
pub mod error;
pub mod event;
pub mod lead_time;
pub mod sources;
pub mod subscriber;

pub use config::Config;
pub use error::StoreError;
pub use event::*;
pub use lead_time::*;
pub use sources::*;
pub use subscriber::*;
