//! The async operation wrapper: adapts one backend call into an observable
//! idle/loading/success/error state container for a view.
//!
//! A view owns one [`Operation`] per backend call it displays. Triggering
//! moves the state to loading immediately; resolution applies success or
//! failure. A generation counter guards against a superseded or reset
//! trigger resurrecting stale state: only the latest trigger's resolution
//! is ever applied.

use api_client::ApiError;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tracing::debug;

type SuccessHook<T> = Arc<dyn Fn(&T) + Send + Sync>;
type ErrorHook = Arc<dyn Fn(&ApiError) + Send + Sync>;

/// Snapshot of an operation's observable state.
///
/// A view must not assume `data` is present unless `loading` is false and
/// `error` is empty. `error`'s display text is ready for the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for OperationState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

struct Inner<T> {
    data: Option<T>,
    loading: bool,
    error: Option<ApiError>,
    generation: u64,
}

/// A cheap-to-clone handle over one operation's shared state. Clones observe
/// and mutate the same state; independent operations need independent
/// `Operation` values.
pub struct Operation<T> {
    inner: Arc<Mutex<Inner<T>>>,
    on_success: Option<SuccessHook<T>>,
    on_error: Option<ErrorHook>,
}

impl<T> Clone for Operation<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            on_success: self.on_success.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl<T: Clone> Default for Operation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Operation<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                data: None,
                loading: false,
                error: None,
                generation: 0,
            })),
            on_success: None,
            on_error: None,
        }
    }

    /// Registers a completion hook fired after a successful resolution is
    /// applied: once per applied trigger, never before the state update.
    pub fn on_success(mut self, hook: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(hook));
        self
    }

    /// Registers a completion hook fired after a failed resolution is
    /// applied.
    pub fn on_error(mut self, hook: impl Fn(&ApiError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(hook));
        self
    }

    /// Current state, cloned out.
    pub fn snapshot(&self) -> OperationState<T> {
        let inner = self.lock();
        OperationState {
            data: inner.data.clone(),
            loading: inner.loading,
            error: inner.error.clone(),
        }
    }

    /// Triggers the operation.
    ///
    /// The transition to loading (and the clearing of any prior error)
    /// happens synchronously at the call, before the returned future is
    /// first polled; previously loaded `data` stays visible while the
    /// reload is in flight. The returned future resolves to the payload on
    /// applied success, or `None` on failure or when the resolution was
    /// superseded by a newer trigger or a reset.
    pub fn run<F>(&self, fut: F) -> impl Future<Output = Option<T>> + use<F, T>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let generation = {
            let mut inner = self.lock();
            inner.generation += 1;
            inner.loading = true;
            inner.error = None;
            inner.generation
        };

        let handle = self.clone();
        async move {
            let result = fut.await;
            handle.apply(generation, result)
        }
    }

    /// Forces the state back to idle from any state, including mid-flight.
    /// An in-flight call's eventual resolution is discarded.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.data = None;
        inner.loading = false;
        inner.error = None;
    }

    fn apply(&self, generation: u64, result: Result<T, ApiError>) -> Option<T> {
        let hook_input = {
            let mut inner = self.lock();
            if inner.generation != generation {
                debug!(generation, "Discarding stale operation resolution.");
                return None;
            }
            inner.loading = false;
            match result {
                Ok(data) => {
                    inner.data = Some(data.clone());
                    inner.error = None;
                    Ok(data)
                }
                Err(err) => {
                    inner.error = Some(err.clone());
                    Err(err)
                }
            }
        };

        // State is updated; hooks observe the settled outcome.
        match hook_input {
            Ok(data) => {
                if let Some(hook) = &self.on_success {
                    hook(&data);
                }
                Some(data)
            }
            Err(err) => {
                if let Some(hook) = &self.on_error {
                    hook(&err);
                }
                None
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T>> {
        // The wrapper never panics while holding the lock, so poisoning
        // would indicate a bug in this module itself.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    fn app_error(message: &str) -> ApiError {
        ApiError::Application {
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn successful_trigger_lands_in_success_state() {
        let op: Operation<u32> = Operation::new();
        let result = op.run(async { Ok(42) }).await;

        assert_eq!(result, Some(42));
        let state = op.snapshot();
        assert_eq!(state.data, Some(42));
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn failed_trigger_lands_in_error_state() {
        let op: Operation<u32> = Operation::new();
        let result = op.run(async { Err(app_error("name is required")) }).await;

        assert_eq!(result, None);
        let state = op.snapshot();
        assert!(state.data.is_none());
        assert!(!state.loading);
        assert_eq!(state.error, Some(app_error("name is required")));
    }

    #[tokio::test]
    async fn trigger_is_loading_before_first_poll() {
        let op: Operation<u32> = Operation::new();
        let (_tx, rx) = oneshot::channel::<()>();

        let fut = op.run(async move {
            let _ = rx.await;
            Ok(1)
        });

        // Not yet polled; loading must already be observable.
        assert!(op.snapshot().loading);
        drop(fut);
    }

    #[tokio::test]
    async fn new_trigger_clears_previous_error_and_keeps_stale_data() {
        let op: Operation<u32> = Operation::new();
        op.run(async { Ok(7) }).await;
        op.run(async { Err(app_error("backend down")) }).await;
        assert!(op.snapshot().error.is_some());

        let (_tx, rx) = oneshot::channel::<()>();
        let fut = op.run(async move {
            let _ = rx.await;
            Ok(8)
        });
        let state = op.snapshot();
        assert!(state.loading);
        assert!(state.error.is_none());
        // The previous payload remains visible during the reload.
        assert_eq!(state.data, Some(7));
        drop(fut);
    }

    #[tokio::test]
    async fn reset_returns_to_idle_from_any_state() {
        let op: Operation<u32> = Operation::new();
        op.run(async { Ok(5) }).await;
        op.reset();
        assert_eq!(op.snapshot(), OperationState::default());

        op.run(async { Err(app_error("boom")) }).await;
        op.reset();
        assert_eq!(op.snapshot(), OperationState::default());
    }

    #[tokio::test]
    async fn resolution_arriving_after_reset_is_discarded() {
        let op: Operation<u32> = Operation::new();
        let (tx, rx) = oneshot::channel::<()>();

        let clone = op.clone();
        let task = tokio::spawn(clone.run(async move {
            let _ = rx.await;
            Ok(99)
        }));

        op.reset();
        tx.send(()).unwrap();
        assert_eq!(task.await.unwrap(), None);
        // The late resolution must not resurrect state.
        assert_eq!(op.snapshot(), OperationState::default());
    }

    #[tokio::test]
    async fn latest_trigger_wins_regardless_of_resolution_order() {
        let op: Operation<&'static str> = Operation::new();
        let (tx_a, rx_a) = oneshot::channel::<()>();
        let (tx_b, rx_b) = oneshot::channel::<()>();

        let first = tokio::spawn(op.clone().run(async move {
            let _ = rx_a.await;
            Ok("first")
        }));
        let second = tokio::spawn(op.clone().run(async move {
            let _ = rx_b.await;
            Ok("second")
        }));

        // Resolve the superseded trigger last: it must still lose.
        tx_b.send(()).unwrap();
        assert_eq!(second.await.unwrap(), Some("second"));
        tx_a.send(()).unwrap();
        assert_eq!(first.await.unwrap(), None);

        assert_eq!(op.snapshot().data, Some("second"));
    }

    #[tokio::test]
    async fn hooks_fire_once_per_applied_trigger_after_the_state_update() {
        let successes = Arc::new(AtomicUsize::new(0));
        let errors = Arc::new(AtomicUsize::new(0));

        let seen = Arc::clone(&successes);
        let op: Operation<u32> = Operation::new()
            .on_success(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .on_error({
                let errors = Arc::clone(&errors);
                move |_| {
                    errors.fetch_add(1, Ordering::SeqCst);
                }
            });

        op.run(async { Ok(1) }).await;
        op.run(async { Err(app_error("nope")) }).await;
        assert_eq!(successes.load(Ordering::SeqCst), 1);
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn hooks_do_not_fire_for_discarded_resolutions() {
        let successes = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&successes);
        let op: Operation<u32> = Operation::new().on_success(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let (tx, rx) = oneshot::channel::<()>();
        let stale = tokio::spawn(op.clone().run(async move {
            let _ = rx.await;
            Ok(1)
        }));
        op.reset();
        tx.send(()).unwrap();
        stale.await.unwrap();

        assert_eq!(successes.load(Ordering::SeqCst), 0);
    }
}
