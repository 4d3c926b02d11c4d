//! Local Pathway API Module
//! Re-exposes the Supabase table reads over HTTP on `PATHWAY_PORT`

pub mod handlers;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
