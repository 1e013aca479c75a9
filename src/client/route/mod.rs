pub mod admin;
pub mod billing;
pub mod dashboard;
pub mod event;
pub mod forum;
pub mod home;
pub mod job;
pub mod login;
pub mod member;
pub mod not_found;
pub mod profile;
pub mod startup;

pub use admin::Admin;
pub use billing::{BillingSuccess, Pricing};
pub use dashboard::Dashboard;
pub use event::{EventDetail, Events};
pub use forum::{Forum, ForumThread, NewThread};
pub use home::Home;
pub use job::{JobDetail, Jobs, NewJob};
pub use login::Login;
pub use member::{MemberDetail, Members};
pub use not_found::NotFound;
pub use profile::{EditProfile, Onboarding};
pub use startup::{NewStartup, Startups};
