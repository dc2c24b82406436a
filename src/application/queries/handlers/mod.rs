//! Query Handlers

mod tag_handlers;

pub use tag_handlers::GetScannedTagHandler;
