pub mod auth;
pub mod customers;
pub mod dealers;
pub mod experts;
