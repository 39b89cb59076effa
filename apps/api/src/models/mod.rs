pub mod demo;
pub mod profile;

pub use demo::{canned_record, demo_record, DEMO_PORTFOLIO_ID};
pub use profile::{
    Education, Experience, InterestIcon, ProfileRecord, Project, SkillCategory, SkillIcon,
};
