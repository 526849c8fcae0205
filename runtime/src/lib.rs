//! # Composable Rust Runtime
//!
//! Runtime implementation for the reducer architecture.
//!
//! This crate provides the [`Store`] that owns the current state snapshot,
//! runs the reducer for every action and publishes the result.
//!
//! ## Core Components
//!
//! - **Store**: Owns one immutable snapshot and serialises all writers
//! - **Snapshot publication**: Every accepted action replaces the snapshot
//!   atomically and wakes subscribers exactly once
//! - **Rejection**: A reducer error leaves the published snapshot untouched
//!
//! ## Example
//!
//! ```ignore
//! use composable_rust_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//!
//! // Observe changes
//! let mut rx = store.subscribe();
//! rx.changed().await?;
//! ```

use composable_rust_core::reducer::Reducer;
use std::sync::Arc;
use tokio::sync::watch;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// `E` is the reducer's own error type.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError<E> {
        /// The reducer rejected the action
        ///
        /// The previously published snapshot is still current and no
        /// subscriber was notified.
        #[error("Action rejected: {0}")]
        Rejected(#[source] E),
    }

    impl<E> StoreError<E> {
        /// Returns the reducer's rejection
        #[must_use]
        pub fn into_rejection(self) -> E {
            match self {
                Self::Rejected(error) => error,
            }
        }
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use composable_rust_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_name("adventure");
/// assert_eq!(config.name, "adventure");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name reported in tracing spans and as the `store` metrics label
    pub name: String,
}

impl StoreConfig {
    /// Create a new configuration with the given store name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Set the store name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("store")
    }
}

/// Store module - the runtime coordinator
pub mod store {
    use super::{Arc, Reducer, StoreConfig, StoreError, watch};

    struct Shared<S, R, E> {
        snapshots: watch::Sender<Arc<S>>,
        reducer: R,
        environment: E,
        config: StoreConfig,
    }

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. The current snapshot (an `Arc<S>` behind a `watch` channel)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    ///
    /// Writers are serialised through the channel's write lock. Each
    /// [`send`](Store::send) reduces into a private copy of the current
    /// snapshot and only replaces the published value if the reducer accepts
    /// the action, so readers and subscribers never observe a partial update.
    ///
    /// Cloning a Store is cheap and every clone shares the same state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        shared: Arc<Shared<S, R, E>>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        R::Error: std::fmt::Display,
        S: Clone,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// # Example
        ///
        /// ```ignore
        /// let store = Store::with_config(
        ///     MyState::default(),
        ///     MyReducer,
        ///     my_environment,
        ///     StoreConfig::new("planner"),
        /// );
        /// ```
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            let (snapshots, _) = watch::channel(Arc::new(initial_state));

            Self {
                shared: Arc::new(Shared {
                    snapshots,
                    reducer,
                    environment,
                    config,
                }),
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer against a copy of the current snapshot. On
        /// success the copy becomes the new snapshot, subscribers are woken
        /// and the new snapshot is returned.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Rejected`] if the reducer rejects the action.
        /// The published snapshot is unchanged in that case.
        ///
        /// # Panics
        ///
        /// If the reducer panics, the panic propagates to the caller. The
        /// published snapshot is unaffected because the reducer only ever
        /// sees a private copy.
        #[tracing::instrument(skip_all, fields(store = %self.shared.config.name), name = "store_send")]
        pub fn send(&self, action: A) -> Result<Arc<S>, StoreError<R::Error>> {
            let shared = &*self.shared;
            let label = shared.config.name.clone();
            metrics::counter!("store.actions.total", "store" => label.clone()).increment(1);

            let mut rejection = None;
            let mut published = None;

            shared.snapshots.send_if_modified(|current| {
                tracing::trace!("Acquired write lock on snapshot");

                let mut next = S::clone(current.as_ref());
                match shared.reducer.reduce(&mut next, action, &shared.environment) {
                    Ok(()) => {
                        let next = Arc::new(next);
                        *current = Arc::clone(&next);
                        published = Some(next);
                        true
                    },
                    Err(error) => {
                        rejection = Some(error);
                        false
                    },
                }
            });

            match (published, rejection) {
                (Some(snapshot), _) => {
                    tracing::debug!("Published new snapshot");
                    metrics::counter!("store.snapshots.published", "store" => label).increment(1);
                    Ok(snapshot)
                },
                (None, Some(error)) => {
                    tracing::warn!(%error, "Action rejected");
                    metrics::counter!("store.actions.rejected", "store" => label).increment(1);
                    Err(StoreError::Rejected(error))
                },
                // send_if_modified always runs the closure exactly once
                (None, None) => unreachable!("reducer produced neither a snapshot nor an error"),
            }
        }

        /// Read current state via a closure
        ///
        /// The snapshot is borrowed only for the duration of the closure:
        ///
        /// ```ignore
        /// let mission_count = store.state(|s| s.missions.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let snapshot = self.shared.snapshots.borrow();
            f(&snapshot)
        }

        /// The current snapshot
        #[must_use]
        pub fn snapshot(&self) -> Arc<S> {
            Arc::clone(&self.shared.snapshots.borrow())
        }

        /// Subscribe to snapshot changes
        ///
        /// The receiver starts with the current snapshot marked as seen and
        /// is notified once per accepted action. Rejected actions never
        /// notify.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<Arc<S>> {
            self.shared.snapshots.subscribe()
        }

        /// The environment the reducer runs with
        #[must_use]
        pub fn environment(&self) -> &E {
            &self.shared.environment
        }

        /// The store's configuration
        #[must_use]
        pub fn config(&self) -> &StoreConfig {
            &self.shared.config
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                shared: Arc::clone(&self.shared),
            }
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("name", &self.shared.config.name)
                .field("state", &*self.shared.snapshots.borrow())
                .finish_non_exhaustive()
        }
    }
}

// Re-export for convenience
pub use store::Store;
