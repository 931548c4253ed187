pub mod app;
pub mod activity_form;
pub mod activity_list;
pub mod tracking_panel;

pub use app::render_app;
pub use activity_form::render_activity_form;
pub use activity_list::render_activity_list;
pub use tracking_panel::render_tracking_panel;
