mod reporter_handler;

pub use reporter_handler::*;
