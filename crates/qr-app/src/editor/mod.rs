//! Editor session state machine.
mod session;

pub use session::EditorSession;
