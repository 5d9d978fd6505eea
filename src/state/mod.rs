// ============================================================================
// STATE MODULE - Rc<RefCell> state with change notifications
// ============================================================================

pub mod reactivity;
pub mod login_state;

pub use reactivity::ReactiveState;
pub use login_state::{FailureReason, LoginPhase, LoginState};
