//! # Editor Lifecycle
//!
//! One-shot destroy-event primitives for editor instances.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Teardown is an explicit signal, not a drop side effect
//! - **At most once**: The destroy event fires once per instance; handlers run once
//! - **Capability interface**: Consumers see `EditorHost`, never an emitter base type
//! - **Testability first**: Subscriptions and fired state are inspectable
//!
//! ## Core Concepts
//!
//! - `DestroyNotifier`: Cloneable one-shot event; handlers subscribed before
//!   the event fires run exactly once, in registration order
//! - `EditorHost`: The two contract points an editor exposes to collaborators
//!   (an optional source element, and a one-time destroy subscription)
//! - `EditorShell`: Minimal concrete host used by tests and embedders

use element_types::SourceElement;
use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;

/// Handler invoked when the destroy event fires
pub type DestroyHandler = Box<dyn FnOnce()>;

/// Internal state of a destroy notifier
enum NotifierState {
    /// Event has not fired; handlers wait in registration order
    Pending(Vec<DestroyHandler>),
    /// Event has fired; late subscriptions can never run and are dropped
    Fired,
}

/// Shared state between all clones of a notifier
#[derive(Clone)]
struct SharedNotifierState {
    state: Rc<RefCell<NotifierState>>,
}

impl SharedNotifierState {
    fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(NotifierState::Pending(Vec::new()))),
        }
    }

    fn subscribe_once(&self, handler: DestroyHandler) {
        match &mut *self.state.borrow_mut() {
            NotifierState::Pending(handlers) => handlers.push(handler),
            NotifierState::Fired => {}
        }
    }

    fn fire(&self) {
        // Flip the state before running handlers so reentrant calls see
        // the event as fired and cannot run anything twice.
        let previous = mem::replace(&mut *self.state.borrow_mut(), NotifierState::Fired);
        if let NotifierState::Pending(handlers) = previous {
            for handler in handlers {
                handler();
            }
        }
    }

    fn has_fired(&self) -> bool {
        matches!(*self.state.borrow(), NotifierState::Fired)
    }

    fn subscriber_count(&self) -> usize {
        match &*self.state.borrow() {
            NotifierState::Pending(handlers) => handlers.len(),
            NotifierState::Fired => 0,
        }
    }
}

/// A cloneable one-shot destroy event
///
/// Handlers registered with [`subscribe_once`](DestroyNotifier::subscribe_once)
/// run exactly once, in registration order, when [`fire`](DestroyNotifier::fire)
/// is first called. Later `fire` calls are no-ops. Handlers registered after
/// the event fired are dropped without running, since a destroy event fires
/// at most once per editor instance.
///
/// ## Example
///
/// ```
/// use editor_lifecycle::DestroyNotifier;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let notifier = DestroyNotifier::new();
/// let ran = Rc::new(Cell::new(false));
///
/// let flag = ran.clone();
/// notifier.subscribe_once(Box::new(move || flag.set(true)));
///
/// notifier.fire();
/// assert!(ran.get());
/// assert!(notifier.has_fired());
/// ```
#[derive(Clone)]
pub struct DestroyNotifier {
    shared: SharedNotifierState,
}

impl DestroyNotifier {
    /// Creates a notifier that has not fired
    pub fn new() -> Self {
        Self {
            shared: SharedNotifierState::new(),
        }
    }

    /// Registers a handler to run when the event fires
    ///
    /// If the event already fired the handler is dropped without running.
    pub fn subscribe_once(&self, handler: DestroyHandler) {
        self.shared.subscribe_once(handler);
    }

    /// Fires the event, running all pending handlers in registration order
    ///
    /// Firing is idempotent: only the first call runs handlers.
    pub fn fire(&self) {
        self.shared.fire();
    }

    /// Checks whether the event has fired
    pub fn has_fired(&self) -> bool {
        self.shared.has_fired()
    }

    /// Returns the number of handlers waiting for the event
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscriber_count()
    }
}

impl Default for DestroyNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DestroyNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestroyNotifier")
            .field("fired", &self.has_fired())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Contract points an editor instance exposes to collaborators
///
/// Collaborators that protect or decorate an editor consume this
/// capability interface instead of the editor type itself: a readable
/// optional source element, and a subscription that runs at most once,
/// when the editor is torn down.
pub trait EditorHost {
    /// Returns the source element the editor was initialized on, if any
    fn source_element(&self) -> Option<SourceElement>;

    /// Registers a handler for the editor's one-time destroy event
    fn once_destroy(&self, handler: DestroyHandler);
}

/// Minimal concrete editor host
///
/// Holds the two contract points and nothing else: an optional source
/// element fixed at construction, and a destroy notifier fired by
/// [`destroy`](EditorShell::destroy). The editor's actual initialization
/// sequence lives in the host framework, not here.
#[derive(Debug)]
pub struct EditorShell {
    source_element: Option<SourceElement>,
    destroy: DestroyNotifier,
}

impl EditorShell {
    /// Creates a shell with no source element (detached editor)
    pub fn new() -> Self {
        Self {
            source_element: None,
            destroy: DestroyNotifier::new(),
        }
    }

    /// Creates a shell mounted on the given source element
    pub fn with_source_element(element: SourceElement) -> Self {
        Self {
            source_element: Some(element),
            destroy: DestroyNotifier::new(),
        }
    }

    /// Tears the editor down, firing the destroy event once
    pub fn destroy(&self) {
        self.destroy.fire();
    }

    /// Checks whether the editor has been destroyed
    pub fn is_destroyed(&self) -> bool {
        self.destroy.has_fired()
    }

    /// Returns the number of pending destroy subscriptions
    pub fn destroy_subscriber_count(&self) -> usize {
        self.destroy.subscriber_count()
    }
}

impl Default for EditorShell {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorHost for EditorShell {
    fn source_element(&self) -> Option<SourceElement> {
        self.source_element.clone()
    }

    fn once_destroy(&self, handler: DestroyHandler) {
        self.destroy.subscribe_once(handler);
    }
}
