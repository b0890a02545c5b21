pub mod features;
pub mod journal;
pub mod milestones;
pub mod profile;
pub mod status;
