//! Type aliases for hosts that share an engine.
//!
//! The interaction engine is confined to one logical thread and carries no
//! locking of its own. A host embeds it one of two ways:
//!
//! ```rust,ignore
//! use polyzone_core::types::*;
//!
//! // UI thread only
//! let engine: Shared<InteractionEngine> = shared(engine);
//! engine.borrow_mut().handle(event);
//!
//! // Several callers on different threads
//! let engine: ThreadSafe<InteractionEngine> = thread_safe(engine);
//! engine.lock().handle(event);
//! ```

use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Create a new `Shared<T>` from a value.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new `ThreadSafe<T>` from a value.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
