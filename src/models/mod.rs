pub mod activity;

pub use activity::{Activity, contains_activity};
