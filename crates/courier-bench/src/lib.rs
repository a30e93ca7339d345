//! Shared setup helpers for courier benchmarks.

use courier_core::{Category, Router, RouterConfig};

/// Build a router with `subscribers` no-op handlers registered on `category`.
#[must_use]
pub fn router_with_subscribers(category: Category, subscribers: usize) -> Router<u64> {
    let router = Router::new();
    for _ in 0..subscribers {
        router.register(category, |message: &u64| {
            std::hint::black_box(message);
        });
    }
    router
}

/// Build a router with `per_category` no-op handlers on every category.
#[must_use]
pub fn saturated_router(max_categories: usize, per_category: usize) -> Router<u64> {
    let router = Router::with_config(RouterConfig { max_categories });
    for category in 0..max_categories {
        for _ in 0..per_category {
            router.register(category, |message: &u64| {
                std::hint::black_box(message);
            });
        }
    }
    router
}
