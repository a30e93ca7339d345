//! # courier-core
//!
//! Category-indexed publish/subscribe dispatch for in-process messaging.
//!
//! Courier replaces broadcast-to-everything delivery with a dispatch
//! table: a message sent to a category reaches only the handlers
//! registered for that category, so delivery costs O(subscribers of the
//! category) instead of O(all handlers in the program).
//!
//! The building blocks:
//!
//! - **Category** - Integer dispatch index, bounded per router
//! - **Handler** - Caller-supplied unit of behavior invoked with each message
//! - **Router** - Owner of all subscriptions; register, send, unregister
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │  Publisher  │────▶│   Router    │────▶│ Subscriber chain │
//! └─────────────┘     └─────────────┘     └──────────────────┘
//!                            │
//!                            ▼
//!                   category → chain table
//! ```
//!
//! Dispatch is synchronous and ordered: the most recently registered
//! subscriber of a category is visited first. Message payloads are opaque
//! to the router; it never inspects, copies, or validates them.
//!
//! ## Example
//!
//! ```rust
//! use courier_core::{Category, Router};
//!
//! const COLLISION: Category = 0;
//!
//! let router: Router<String> = Router::new();
//! router.register(COLLISION, |msg: &String| println!("hit: {msg}"));
//!
//! let delivered = router.send(COLLISION, &"crate vs wall".to_string());
//! assert_eq!(delivered, 1);
//! ```

pub mod category;
pub mod handler;
pub mod router;

pub use category::{category_in_range, Category, DEFAULT_MAX_CATEGORIES};
pub use handler::Handler;
pub use router::{Router, RouterConfig, RouterError, RouterStats, SubscriptionToken};
