pub mod logging;
pub mod responder;
mod utils;

pub use replyomat_model::{
    DefaultPool, Keyword, ResourceError, ResponseEntry, ResponseTable, FALLBACK_RESPONSE,
};
pub use responder::config::ResponderConfig;
pub use responder::Responder;
