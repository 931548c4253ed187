// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod persisted;
pub mod session_state;
pub mod app_state;

pub use persisted::*;
pub use session_state::*;
pub use app_state::*;
