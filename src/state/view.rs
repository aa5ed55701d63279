//! Remote view-model lifecycle shared by every data-backed section.
//!
//! Each section owns one `RwSignal<ViewState<T>>` and runs exactly one fetch
//! when it mounts. The fetch outcome is applied through a pure reducer, so
//! every section resolves the same way: `Loading` becomes `Ready` on success
//! or `Fallback` on failure, and both of those are terminal. Failures never
//! propagate past the console.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use leptos::*;

/// View state for a section backed by one remote resource.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Fetch in flight; render a placeholder.
    Loading,
    /// Fetch resolved; render the payload.
    Ready(T),
    /// Fetch failed; render substitute data (a static literal or an empty
    /// collection) as if it were ready.
    Fallback(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ViewState::Fallback(_))
    }

    /// Payload for `Ready` and `Fallback`, `None` while `Loading`.
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loading => None,
            ViewState::Ready(data) | ViewState::Fallback(data) => Some(data),
        }
    }

    /// Apply a load event. Only `Loading` reacts; `Ready` and `Fallback` are
    /// terminal, so a late or duplicate event is discarded.
    pub fn reduce(self, event: LoadEvent<T>, fallback: impl FnOnce() -> T) -> Self {
        match (self, event) {
            (ViewState::Loading, LoadEvent::Loaded(data)) => ViewState::Ready(data),
            (ViewState::Loading, LoadEvent::Failed) => ViewState::Fallback(fallback()),
            (state, _) => state,
        }
    }
}

/// Outcome of a settled fetch, fed to [`ViewState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent<T> {
    Loaded(T),
    Failed,
}

/// Marks whether the scope that spawned a fetch is still alive. A response
/// that lands after revocation is dropped without touching any signal.
#[derive(Clone)]
pub struct LivenessToken(Rc<Cell<bool>>);

impl LivenessToken {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }
}

impl Default for LivenessToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Combine the outcomes of two concurrent fetches into one. Succeeds only
/// when both succeed; otherwise the first error wins and both payloads are
/// discarded.
pub fn join_outcomes<A, B>(a: Result<A, String>, b: Result<B, String>) -> Result<(A, B), String> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

/// Run one fetch for a section: spawn `future` and apply its outcome to
/// `view` exactly once. Failures are logged to the console and collapse into
/// the fallback render; nothing is surfaced to the caller.
///
/// `resource` names the fetch in log lines. The spawning scope's cleanup
/// revokes a liveness token, so a response that lands after the scope is
/// gone is silently dropped.
pub fn spawn_loader<T, F>(
    view: RwSignal<ViewState<T>>,
    resource: &'static str,
    future: F,
    fallback: impl FnOnce() -> T + 'static,
) where
    T: Clone + 'static,
    F: Future<Output = Result<T, String>> + 'static,
{
    let liveness = LivenessToken::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.revoke()
    });

    spawn_local(async move {
        let event = match future.await {
            Ok(data) => LoadEvent::Loaded(data),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch {}: {}", resource, e).into());
                LoadEvent::Failed
            }
        };

        if liveness.is_live() {
            view.update(|state| {
                let settled = std::mem::replace(state, ViewState::Loading).reduce(event, fallback);
                *state = settled;
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_fallback() -> Vec<u32> {
        Vec::new()
    }

    #[test]
    fn test_loading_resolves_to_ready() {
        let state = ViewState::Loading.reduce(LoadEvent::Loaded(vec![1, 2]), no_fallback);
        assert_eq!(state, ViewState::Ready(vec![1, 2]));
        assert!(!state.is_loading());
        assert!(!state.is_fallback());
    }

    #[test]
    fn test_loading_falls_back_on_failure() {
        let state = ViewState::Loading.reduce(LoadEvent::Failed, || vec![9]);
        assert_eq!(state, ViewState::Fallback(vec![9]));
        assert!(state.is_fallback());
        assert_eq!(state.data(), Some(&vec![9]));
    }

    #[test]
    fn test_terminal_states_absorb_late_events() {
        let ready = ViewState::Ready(vec![1]);
        let still_ready = ready.clone().reduce(LoadEvent::Failed, no_fallback);
        assert_eq!(still_ready, ready);

        let fallback = ViewState::Fallback(vec![2]);
        let still_fallback = fallback.clone().reduce(LoadEvent::Loaded(vec![3]), no_fallback);
        assert_eq!(still_fallback, fallback);
    }

    #[test]
    fn test_no_data_while_loading() {
        assert_eq!(ViewState::<Vec<u32>>::Loading.data(), None);
    }

    #[test]
    fn test_join_outcomes_requires_both() {
        assert_eq!(join_outcomes(Ok(1), Ok(2)), Ok((1, 2)));
        assert_eq!(
            join_outcomes::<i32, i32>(Err("a".to_string()), Ok(2)),
            Err("a".to_string())
        );
        assert_eq!(
            join_outcomes::<i32, i32>(Ok(1), Err("b".to_string())),
            Err("b".to_string())
        );
        // When both fail the first error wins.
        assert_eq!(
            join_outcomes::<i32, i32>(Err("a".to_string()), Err("b".to_string())),
            Err("a".to_string())
        );
    }

    #[test]
    fn test_liveness_token_revocation_is_shared() {
        let token = LivenessToken::new();
        let shared = token.clone();
        assert!(token.is_live());

        shared.revoke();
        assert!(!token.is_live());
    }
}
