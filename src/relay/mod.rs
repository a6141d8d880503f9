pub mod extract;
pub mod forward;
pub mod payload;
