pub mod tracker_viewmodel;

pub use tracker_viewmodel::{TrackerViewModel, ViewState};
