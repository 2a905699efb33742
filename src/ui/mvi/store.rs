//! Observable state container.

use std::marker::PhantomData;

use tokio::sync::watch;

use super::reducer::Reducer;

/// Holds the current state of reducer `R` and broadcasts every change.
///
/// Each dispatch runs the reducer under the channel lock, so intents are
/// applied one at a time and subscribers only ever observe whole states.
/// Subscribers are woken only when the reducer actually changed something.
pub struct Store<R: Reducer> {
    sender: watch::Sender<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender,
            _reducer: PhantomData,
        }
    }

    /// Apply `intent` and notify subscribers if the state changed.
    ///
    /// Returns whether a change was published.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        self.sender.send_if_modified(|state| {
            let next = R::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        })
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> R::State {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.sender.subscribe()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
