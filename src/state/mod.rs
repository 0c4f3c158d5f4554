//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so pages can depend on small focused models; all
//! of it is plain data that tests exercise without a browser. Reactive
//! wrapping (`RwSignal` + context) happens at the application root.

pub mod loading;
pub mod notifications;
pub mod session;
