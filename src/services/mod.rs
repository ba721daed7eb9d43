pub mod reporter;
pub mod search_client;

pub use reporter::*;
pub use search_client::*;
