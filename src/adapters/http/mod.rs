pub mod handlers;
pub mod response;
pub mod router;
pub mod server;

pub use router::{create_router, AppState};
pub use server::Server;
