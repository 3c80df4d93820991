#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod waitlist_service;

pub use quickscope_core::Clock;

pub use app_services::AppServices;
pub use error::WaitlistError;
pub use waitlist_service::{
    DEFAULT_SOURCE, EmailAddress, HttpTransport, WaitlistConfig, WaitlistRequest,
    WaitlistService, WaitlistTransport,
};
