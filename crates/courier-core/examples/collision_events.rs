//! Physics-flavored demo: collision, damage, and respawn events routed
//! by category instead of broadcast to every object in the scene.
//!
//! Run with:
//!
//! ```bash
//! RUST_LOG=courier_core=debug cargo run --example collision_events
//! ```

use courier_core::{Category, Router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const COLLISION: Category = 0;
const DAMAGE: Category = 1;
const RESPAWN: Category = 2;

#[derive(Debug)]
struct GameEvent {
    entity: u32,
    detail: String,
}

impl GameEvent {
    fn new(entity: u32, detail: impl Into<String>) -> Self {
        Self {
            entity,
            detail: detail.into(),
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

    let router: Router<GameEvent> = Router::new();

    router.register(COLLISION, |ev: &GameEvent| {
        println!("[physics] entity {} collided: {}", ev.entity, ev.detail);
    });
    let audio = router.register(COLLISION, |ev: &GameEvent| {
        println!("[audio]   impact sound for entity {}", ev.entity);
    });
    router.register(DAMAGE, |ev: &GameEvent| {
        println!("[combat]  entity {} took damage: {}", ev.entity, ev.detail);
    });

    // The audio handler registered last, so it runs first.
    router.send(COLLISION, &GameEvent::new(7, "crate vs wall"));
    router.send(DAMAGE, &GameEvent::new(7, "12 hp"));

    // Nobody listens for respawns yet; a silent no-op.
    let delivered = router.send(RESPAWN, &GameEvent::new(7, "spawn point A"));
    assert_eq!(delivered, 0);

    // Mute the audio subscriber and collide again.
    router
        .unregister(audio)
        .expect("audio subscription is live");
    router.send(COLLISION, &GameEvent::new(9, "barrel vs floor"));

    let stats = router.stats();
    println!(
        "{} categories in use, {} live subscriptions",
        stats.category_count, stats.subscription_count
    );
}
