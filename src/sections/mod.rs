pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod services;
pub mod stats;
pub mod technology;
