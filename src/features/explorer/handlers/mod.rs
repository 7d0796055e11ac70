mod explorer_handler;

pub use explorer_handler::*;
