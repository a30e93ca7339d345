//! Category-indexed message router for courier.
//!
//! The router maps each category to a chain of subscriptions and fans
//! messages out synchronously to every current subscriber of the sent
//! category, most recently registered first.

use crate::category::{category_in_range, Category, DEFAULT_MAX_CATEGORIES};
use crate::handler::Handler;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Router errors.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Subscription token does not match a live subscription.
    #[error("Unknown subscription: {0}")]
    UnknownSubscription(u64),
}

/// Router configuration.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Bound on the category space; valid categories are `0..max_categories`.
    pub max_categories: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_categories: DEFAULT_MAX_CATEGORIES,
        }
    }
}

/// Source of unique router ids across the process.
static ROUTER_ID: AtomicU64 = AtomicU64::new(0);

/// One registration record: a handler bound to a category.
struct Subscription<M> {
    id: u64,
    handler: Arc<dyn Handler<M>>,
}

/// Opaque token for one subscription, returned by [`Router::register`].
///
/// Pass it to [`Router::unregister`] to unlink the subscription from its
/// chain. Tokens are never reused within a router, and a token carries
/// the identity of the router that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken {
    router_id: u64,
    category: Category,
    id: u64,
}

impl SubscriptionToken {
    /// The category this subscription was registered for.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}

/// The central message router.
///
/// The router owns every subscription reachable from it and dispatches
/// messages to only the handlers registered for the sent category, so a
/// `send` costs O(subscribers of that category) rather than O(all
/// handlers in the program).
///
/// `Router` is `Send + Sync`; chain mutation and traversal are guarded by
/// the table's sharded locks, and dispatch runs on a snapshot taken at
/// call time (see [`send`](Self::send)).
pub struct Router<M> {
    /// Identity of this router, stamped into every token it issues.
    router_id: u64,
    /// Subscriber chains indexed by category, in registration order.
    chains: DashMap<Category, Vec<Subscription<M>>>,
    /// Source of unique subscription ids.
    next_id: AtomicU64,
    /// Configuration.
    config: RouterConfig,
}

impl<M> Router<M> {
    /// Create a new router with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create a new router with custom configuration.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        info!("Creating router with config: {:?}", config);
        Self {
            router_id: ROUTER_ID.fetch_add(1, Ordering::Relaxed),
            chains: DashMap::new(),
            next_id: AtomicU64::new(0),
            config,
        }
    }

    /// The configured bound on the category space.
    #[must_use]
    pub fn max_categories(&self) -> usize {
        self.config.max_categories
    }

    fn check_category(&self, category: Category) {
        assert!(
            category_in_range(category, self.config.max_categories),
            "category {} out of range (max_categories = {})",
            category,
            self.config.max_categories
        );
    }

    /// Register a handler for a category.
    ///
    /// The new subscription is visited *before* all previously registered
    /// subscribers on the next [`send`](Self::send) to that category, and
    /// *after* any subscriber registered later. Registering the same
    /// handler twice creates two independent subscriptions. Registration
    /// never invokes the handler and never touches another category's
    /// chain.
    ///
    /// Returns a token that can be passed to [`unregister`](Self::unregister).
    ///
    /// # Panics
    ///
    /// Panics if `category` is outside `0..max_categories`.
    pub fn register<H>(&self, category: Category, handler: H) -> SubscriptionToken
    where
        H: Handler<M> + 'static,
    {
        self.check_category(category);

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut chain = self.chains.entry(category).or_default();
        chain.push(Subscription {
            id,
            handler: Arc::new(handler),
        });

        debug!(category, id, subscribers = chain.len(), "Registered handler");

        SubscriptionToken {
            router_id: self.router_id,
            category,
            id,
        }
    }

    /// Unlink one subscription from its category's chain.
    ///
    /// Dispatch order among the remaining subscriptions is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::UnknownSubscription`] if the token was
    /// already unregistered or was issued by a different router.
    ///
    /// # Panics
    ///
    /// Panics if the token's category is outside `0..max_categories`,
    /// which only happens with a token issued by a router configured with
    /// a larger category space.
    pub fn unregister(&self, token: SubscriptionToken) -> Result<(), RouterError> {
        self.check_category(token.category);

        if token.router_id != self.router_id {
            return Err(RouterError::UnknownSubscription(token.id));
        }

        {
            let Some(mut chain) = self.chains.get_mut(&token.category) else {
                return Err(RouterError::UnknownSubscription(token.id));
            };

            let Some(pos) = chain.iter().position(|s| s.id == token.id) else {
                return Err(RouterError::UnknownSubscription(token.id));
            };
            chain.remove(pos);

            debug!(
                category = token.category,
                id = token.id,
                subscribers = chain.len(),
                "Unregistered handler"
            );
        } // Release the lock before removing the entry

        self.chains
            .remove_if(&token.category, |_, chain| chain.is_empty());

        Ok(())
    }

    /// Dispatch a message to every current subscriber of a category.
    ///
    /// Handlers are invoked synchronously, most recently registered first.
    /// Every subscription present at the start of the call is visited
    /// exactly once; subscriptions added during dispatch (including by a
    /// handler itself, re-entrantly) are not visited until the next call.
    /// Sending to a category with no subscribers is a silent no-op.
    ///
    /// Returns the number of handlers invoked.
    ///
    /// # Panics
    ///
    /// Panics if `category` is outside `0..max_categories`. A panic raised
    /// by a handler is not caught: it propagates to the caller and the
    /// remaining subscribers in the chain are not visited.
    pub fn send(&self, category: Category, message: &M) -> usize {
        self.check_category(category);

        // Snapshot the chain so no table lock is held while handlers run.
        let handlers: Vec<Arc<dyn Handler<M>>> = match self.chains.get(&category) {
            Some(chain) => chain.iter().rev().map(|s| Arc::clone(&s.handler)).collect(),
            None => {
                trace!(category, "Send to category with no subscribers");
                return 0;
            }
        };

        trace!(category, recipients = handlers.len(), "Dispatching message");

        for handler in &handlers {
            handler.handle(message);
        }

        handlers.len()
    }

    /// Number of subscriptions currently registered for a category.
    #[must_use]
    pub fn subscriber_count(&self, category: Category) -> usize {
        self.chains.get(&category).map_or(0, |chain| chain.len())
    }

    /// Check if a category currently has any subscribers.
    #[must_use]
    pub fn has_subscribers(&self, category: Category) -> bool {
        self.subscriber_count(category) > 0
    }

    /// Get router statistics.
    #[must_use]
    pub fn stats(&self) -> RouterStats {
        RouterStats {
            category_count: self.chains.len(),
            subscription_count: self.chains.iter().map(|chain| chain.len()).sum(),
        }
    }
}

impl<M> Default for Router<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Router statistics.
#[derive(Debug, Clone)]
pub struct RouterStats {
    /// Number of categories with at least one subscriber.
    pub category_count: usize,
    /// Total number of live subscriptions.
    pub subscription_count: usize,
}
