/// IDs de elementos que se actualizan de forma incremental
pub const TIMER_TEXT_ID: &str = "timer-text";
pub const NEW_ACTIVITY_INPUT_ID: &str = "new-activity-input";
pub const MANUAL_TIME_INPUT_ID: &str = "manual-time-input";

/// Textos de la UI
pub const APP_TITLE: &str = "Time Tracker";
pub const ACTIVITIES_TITLE: &str = "Activities";
pub const MANUAL_TIME_TITLE: &str = "Manually Add Time";
pub const ADD_ACTIVITY_LABEL: &str = "Add Activity";
pub const NEW_ACTIVITY_PLACEHOLDER: &str = "Enter new activity";
pub const START_TIMER_LABEL: &str = "Start Timer";
pub const PAUSE_TIMER_LABEL: &str = "Pause Timer";
pub const STOP_TIMER_LABEL: &str = "Stop Timer";
pub const ADD_TIME_LABEL: &str = "Add Time";
pub const MANUAL_TIME_PLACEHOLDER: &str = "Enter seconds";

/// "Time Spent: N seconds"
pub fn time_spent_label(total_time: u64) -> String {
    format!("Time Spent: {} seconds", total_time)
}

/// "N seconds"
pub fn elapsed_label(elapsed: u64) -> String {
    format!("{} seconds", elapsed)
}

/// "Tracking: nombre"
pub fn tracking_label(activity: &str) -> String {
    format!("Tracking: {}", activity)
}
