//! GUI-flavored demo: widgets subscribing to input categories through the
//! `Handler` trait rather than closures.
//!
//! Run with:
//!
//! ```bash
//! RUST_LOG=courier_core=debug cargo run --example ui_events
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use courier_core::{Category, Handler, Router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CLICK: Category = 0;
const KEY_PRESS: Category = 1;
const REDRAW: Category = 2;

#[derive(Debug)]
enum UiEvent {
    Click { x: u32, y: u32 },
    Key(char),
    Redraw,
}

/// A widget that counts the clicks it sees.
struct ClickCounter {
    name: &'static str,
    clicks: Arc<AtomicUsize>,
}

impl Handler<UiEvent> for ClickCounter {
    fn handle(&self, event: &UiEvent) {
        if let UiEvent::Click { x, y } = event {
            let total = self.clicks.fetch_add(1, Ordering::Relaxed) + 1;
            println!("[{}] click #{} at ({}, {})", self.name, total, x, y);
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courier_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let router: Router<UiEvent> = Router::new();
    let clicks = Arc::new(AtomicUsize::new(0));

    router.register(
        CLICK,
        ClickCounter {
            name: "button",
            clicks: Arc::clone(&clicks),
        },
    );
    router.register(KEY_PRESS, |event: &UiEvent| {
        if let UiEvent::Key(key) = event {
            println!("[editor] key pressed: {key:?}");
        }
    });
    router.register(REDRAW, |_: &UiEvent| println!("[canvas] repainting"));

    router.send(CLICK, &UiEvent::Click { x: 120, y: 44 });
    router.send(CLICK, &UiEvent::Click { x: 80, y: 12 });
    router.send(KEY_PRESS, &UiEvent::Key('q'));
    router.send(REDRAW, &UiEvent::Redraw);

    // Click events never reach the key or redraw subscribers.
    assert_eq!(clicks.load(Ordering::Relaxed), 2);
    assert_eq!(router.subscriber_count(CLICK), 1);
}
