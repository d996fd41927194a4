use inbox_feed::{Event, Inbox, InboxBuilder, Notifier};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

struct StdOutNotifier {}

impl Notifier for StdOutNotifier {
    fn notify(&self, event: Event) {
        match event {
            Event::NewEmail {
                id,
                subject,
                category,
            } => {
                info!("New email received: {subject} ({category}) id={id}");
            }
            Event::Connected => {
                info!("Connected! Monitoring for incoming emails...");
            }
            Event::Disconnected => {
                info!("Disconnected");
            }
            Event::ReplySent(id) => {
                info!("Reply sent for {id}");
            }
            Event::Action(id, action) => {
                info!("Email {} {}", id, action.past_tense());
            }
            Event::ConfigSaved => {
                info!("Webhook configuration saved");
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let should_quit = Arc::new(AtomicBool::new(false));
    let should_quit_copy = should_quit.clone();
    ctrlc::set_handler(move || should_quit_copy.store(true, Ordering::SeqCst))
        .expect("Failed to install ctrl+c handler");

    let mut inbox: Inbox = InboxBuilder::new(Arc::new(StdOutNotifier {}))
        .poll_interval(Duration::from_secs(2))
        .build();

    inbox.connect().expect("Failed to start feed");

    info!("Feed running - Ctrl+C to quit");
    loop {
        std::thread::sleep(Duration::from_millis(250));
        if should_quit.load(Ordering::SeqCst) {
            break;
        }
    }

    inbox.disconnect().expect("Failed to stop feed");

    let stats = inbox.stats();
    info!(
        "Session over: total={} unread={} support={} sales={} marketing={} other={}",
        stats.total,
        stats.unread,
        stats.by_category.support,
        stats.by_category.sales,
        stats.by_category.marketing,
        stats.by_category.other,
    );
    info!("Goodbye");
}
