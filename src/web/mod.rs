pub mod dto;

mod error;
pub use error::{ErrorResponse, ResourceError, WebError, WebResult};

mod extract;
pub use extract::Valid;

mod state;
pub use state::AppState;

pub mod routes;

pub mod doc;
