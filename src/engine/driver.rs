//! Async driver for the engine.
//!
//! Hosts that live on an event loop feed `Event`s through an mpsc
//! channel; the driver sleeps exactly as long as the engine allows and
//! polls when a prefetch deadline comes due. Nothing here blocks: every
//! engine call is cheap synchronous bookkeeping.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::debug;

use super::Prioritizer;
use super::event::Event;

/// Event-loop adapter around a [`Prioritizer`].
pub struct Driver {
    engine: Prioritizer,
    rx: mpsc::Receiver<Event>,
}

impl Driver {
    pub fn new(engine: Prioritizer, rx: mpsc::Receiver<Event>) -> Self {
        Self { engine, rx }
    }

    /// Run until `Event::Shutdown` (or every sender is dropped), then
    /// unmount and hand the engine back for inspection.
    pub async fn run(mut self) -> Prioritizer {
        loop {
            let sleep = self.engine.sleep_duration();
            tokio::select! {
                event = self.rx.recv() => match event {
                    Some(Event::Navigate(route)) => self.engine.navigate(route),
                    Some(Event::PointerEnter(event)) => {
                        self.engine.pointer_enter(&event);
                    }
                    Some(Event::Settled { target, outcome }) => {
                        self.engine.settle(&target, outcome);
                    }
                    Some(Event::Shutdown) | None => break,
                },
                _ = sleep_until_due(sleep) => {
                    self.engine.poll();
                }
            }
        }

        debug!("engine"; "driver shutting down");
        self.engine.unmount();
        self.engine
    }
}

/// Sleep for the engine's next deadline, or forever when it is idle.
async fn sleep_until_due(duration: Option<Duration>) {
    match duration {
        Some(duration) => tokio::time::sleep(duration).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::PreloadConfig;
    use crate::core::{TokioClock, UrlPath};
    use crate::hint::DocumentHead;
    use crate::prefetch::PointerEnter;

    fn config() -> PreloadConfig {
        PreloadConfig::from_str(
            r#"
[site]
url = "https://example.com"

[critical]
images = ["/assets/hero.avif", "/assets/logo.svg"]

[routes]
delay = 2000

[routes.adjacency]
"/" = ["/about", "/contact"]
"/about" = ["/contact"]
"#,
        )
        .unwrap()
    }

    fn spawn_driver() -> (
        Arc<DocumentHead>,
        mpsc::Sender<Event>,
        tokio::task::JoinHandle<Prioritizer>,
    ) {
        let head = Arc::new(DocumentHead::new());
        let clock = Arc::new(TokioClock::new());
        let mut engine = Prioritizer::from_config(&config(), head.clone(), clock);
        engine.mount(&[]);

        let (tx, rx) = mpsc::channel(16);
        let handle = tokio::spawn(Driver::new(engine, rx).run());
        (head, tx, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn test_prefetch_fires_after_delay() {
        let (head, tx, handle) = spawn_driver();

        tx.send(Event::Navigate("/".into())).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2100)).await;

        // 2 critical + 2 prefetch
        assert_eq!(head.len(), 4);
        assert!(head.render().contains(r#"href="/about""#));

        tx.send(Event::Shutdown).await.unwrap();
        let engine = handle.await.unwrap();
        assert!(engine.registry().is_empty());
        assert_eq!(head.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_navigation_last_route_wins() {
        let (head, tx, handle) = spawn_driver();

        tx.send(Event::Navigate("/".into())).await.unwrap();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        tx.send(Event::Navigate("/about".into())).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2100)).await;

        // Only /about's candidate set fired: /contact
        let rendered = head.render();
        assert!(rendered.contains(r#"<link rel="prefetch" href="/contact">"#));
        assert!(!rendered.contains(r#"<link rel="prefetch" href="/about">"#));

        tx.send(Event::Shutdown).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_hover_event_creates_hint_immediately() {
        let (head, tx, handle) = spawn_driver();

        tx.send(Event::Navigate("/".into())).await.unwrap();
        tx.send(Event::PointerEnter(PointerEnter::over_anchor(
            "/testimonials",
        )))
        .await
        .unwrap();
        // No delay involved: the hover hint is there before the route batch
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(head.render().contains("/testimonials"));

        tx.send(Event::Shutdown).await.unwrap();
        let engine = handle.await.unwrap();
        // Hover hints survive unmount
        assert!(
            engine
                .registry()
                .has_speculative(&UrlPath::from_route("/testimonials"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_senders_shut_the_driver_down() {
        let (head, tx, handle) = spawn_driver();

        tx.send(Event::Navigate("/".into())).await.unwrap();
        drop(tx);

        handle.await.unwrap();
        assert_eq!(head.len(), 0);
    }
}
