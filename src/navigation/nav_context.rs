//! Main navigation state and its provider
//!
//! The top-level app owns a [`NavigationProvider`] and passes its handle
//! down explicitly. Components that can't be handed the state reach it with
//! [`use_main_navigation`], which fails when no provider is mounted on this
//! thread instead of inventing a default.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SwatchError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub collapsed: bool,
    pub active_href: String,
}

impl NavigationState {
    pub fn new(active_href: impl Into<String>) -> Self {
        Self {
            collapsed: false,
            active_href: active_href.into(),
        }
    }
}

/// Shared handle to the mounted navigation state
#[derive(Debug, Clone)]
pub struct NavigationHandle(Rc<RefCell<NavigationState>>);

impl NavigationHandle {
    pub fn snapshot(&self) -> NavigationState {
        self.0.borrow().clone()
    }

    pub fn is_collapsed(&self) -> bool {
        self.0.borrow().collapsed
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        self.0.borrow_mut().collapsed = collapsed;
    }

    pub fn toggle_collapsed(&self) -> bool {
        let mut state = self.0.borrow_mut();
        state.collapsed = !state.collapsed;
        state.collapsed
    }

    pub fn active_href(&self) -> String {
        self.0.borrow().active_href.clone()
    }

    pub fn set_active(&self, href: impl Into<String>) {
        self.0.borrow_mut().active_href = href.into();
    }
}

thread_local! {
    static MAIN_NAVIGATION: RefCell<Option<NavigationHandle>> = const { RefCell::new(None) };
}

/// Installs navigation state for this thread while it is alive
///
/// Dropping the provider tears the state down and restores whichever
/// provider was mounted before it.
#[derive(Debug)]
pub struct NavigationProvider {
    handle: NavigationHandle,
    previous: Option<NavigationHandle>,
}

impl NavigationProvider {
    pub fn mount(state: NavigationState) -> Self {
        let handle = NavigationHandle(Rc::new(RefCell::new(state)));
        let previous = MAIN_NAVIGATION.with(|cell| cell.borrow_mut().replace(handle.clone()));
        Self { handle, previous }
    }

    pub fn handle(&self) -> &NavigationHandle {
        &self.handle
    }
}

impl Drop for NavigationProvider {
    fn drop(&mut self) {
        let previous = self.previous.take();
        MAIN_NAVIGATION.with(|cell| *cell.borrow_mut() = previous);
    }
}

/// Handle to the mounted main navigation
///
/// Returns [`SwatchError::NavigationContextMissing`] when called outside a provider.
pub fn use_main_navigation() -> Result<NavigationHandle, SwatchError> {
    MAIN_NAVIGATION
        .with(|cell| cell.borrow().clone())
        .ok_or(SwatchError::NavigationContextMissing)
}

#[cfg(test)]
#[path = "nav_context_tests.rs"]
mod nav_context_tests;
