#[cfg(feature = "web")]
pub mod admin;
#[cfg(feature = "web")]
pub mod billing;
#[cfg(feature = "web")]
pub mod event;
#[cfg(feature = "web")]
pub mod forum;
#[cfg(feature = "web")]
pub mod gallery;
#[cfg(feature = "web")]
pub mod helper;
#[cfg(feature = "web")]
pub mod introduction;
#[cfg(feature = "web")]
pub mod job;
#[cfg(feature = "web")]
pub mod member;
#[cfg(feature = "web")]
pub mod startup;
#[cfg(feature = "web")]
pub mod user;
