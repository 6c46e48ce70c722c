//! Infrastructure Layer
//!
//! Static demo datasets and client-local session storage.

pub mod demo_data;
pub mod demo_directory;
pub mod local_session_store;

pub use demo_directory::DemoDirectory;
pub use local_session_store::LocalSessionStore;
