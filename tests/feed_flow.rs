use inbox_feed::{
    Category, DraftSource, EmailAction, EmailDraft, Event, InboxBuilder, Notifier,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Default)]
struct CountingNotifier {
    new_emails: AtomicUsize,
    actions: AtomicUsize,
}

impl Notifier for CountingNotifier {
    fn notify(&self, event: Event) {
        match event {
            Event::NewEmail { .. } => {
                self.new_emails.fetch_add(1, Ordering::SeqCst);
            }
            Event::Action(..) => {
                self.actions.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }
    }
}

struct SupportDrafts;

impl DraftSource for SupportDrafts {
    fn next_draft(&self) -> EmailDraft {
        EmailDraft {
            from: "customer@example.com".to_string(),
            to: "support@yourapp.com".to_string(),
            subject: "Help with order #12345".to_string(),
            body: "The tracking shows it's delayed.".to_string(),
            category: Category::Support,
            attachments: vec!["receipt.pdf".to_string()],
        }
    }
}

#[test]
fn connect_deliver_select_disconnect() {
    let notifier = Arc::new(CountingNotifier::default());
    let mut inbox = InboxBuilder::new(notifier.clone())
        .poll_interval(Duration::from_millis(25))
        .with_source(Arc::new(SupportDrafts))
        .build();

    inbox.connect().unwrap();
    assert!(inbox.is_connected());

    // Wait for a few simulated deliveries.
    let mut waited = Duration::ZERO;
    while inbox.stats().total < 3 {
        assert!(waited < Duration::from_secs(5), "no deliveries within 5s");
        std::thread::sleep(Duration::from_millis(10));
        waited += Duration::from_millis(10);
    }

    inbox.disconnect().unwrap();
    assert!(!inbox.is_connected());

    let stats = inbox.stats();
    assert_eq!(stats.total, stats.unread);
    assert_eq!(stats.by_category.get(Category::Support), stats.total);
    assert_eq!(notifier.new_emails.load(Ordering::SeqCst), stats.total);

    // No further deliveries after disconnect.
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(inbox.stats().total, stats.total);

    // View the newest email; unread drops by exactly one.
    let newest = inbox.emails()[0].id();
    let email = inbox.select(newest).unwrap();
    assert!(email.is_read());
    assert_eq!(inbox.stats().unread, stats.total - 1);
    assert_eq!(inbox.selected().unwrap().id(), newest);

    // Archive acknowledges without touching state.
    inbox.apply_action(newest, EmailAction::Archive).unwrap();
    assert_eq!(inbox.stats().total, stats.total);
    assert_eq!(notifier.actions.load(Ordering::SeqCst), 1);
}
