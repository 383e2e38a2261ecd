//! Routed Pages

mod dashboard;
mod home;
mod listing;

pub use dashboard::Dashboard;
pub use home::Home;
pub use listing::ContentListing;
