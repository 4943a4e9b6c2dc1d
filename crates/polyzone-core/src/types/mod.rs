//! Shared-ownership type aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` and `Arc<Mutex<T>>`.

pub mod aliases;

pub use aliases::*;
