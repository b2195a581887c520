pub mod feed;
pub mod layout;
