pub mod manager;

pub use manager::{Profile, ProfileManager, Profiles};
