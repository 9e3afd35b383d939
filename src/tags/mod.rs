//! Image tagging core: preference store, review order, session

pub mod sequence;
pub mod session;
pub mod store;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use session::{Command, Session, SessionError, TagState};
#[allow(unused_imports)]
pub use store::{PreferenceRecord, PreferenceStore, StoreError};
