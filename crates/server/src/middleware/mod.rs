pub mod jwt;
pub mod role;
pub mod validate;
