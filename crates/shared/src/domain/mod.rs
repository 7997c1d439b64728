pub mod enums;
pub mod requests;
pub mod responses;
