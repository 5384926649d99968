pub mod media;
pub mod observability;
pub mod speech;
