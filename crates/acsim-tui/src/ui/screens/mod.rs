//! Screen rendering, one module per flow state

pub mod failure;
pub mod landing;
pub mod otp_entry;
pub mod redirect;
pub mod success;
