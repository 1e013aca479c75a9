mod admin;
mod auth;
mod billing;
mod event;
mod forum;
mod introduction;
mod job;
