use std::time::Duration;

use tabby::{Runtime, RuntimeOutput, Settings, View};
use tabby_dom::{Document, Element, Event, NodeId, Window};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn page() -> Element {
    Element::div()
        .child(
            Element::button()
                .id("tab-a")
                .data("tabby-group", "faq")
                .data("tabby-panel", "a"),
        )
        .child(
            Element::button()
                .id("tab-b")
                .data("tabby-group", "faq")
                .data("tabby-panel", "b"),
        )
        .child(Element::section().id("a"))
        .child(Element::section().id("b"))
}

fn start(document: Document) -> (mpsc::Sender<Event>, JoinHandle<RuntimeOutput>) {
    let runtime = Runtime::new(document, Settings::default());
    let (tx, rx) = mpsc::channel(16);
    (tx, tokio::spawn(runtime.run(rx)))
}

fn node(doc: &Document, id: &str) -> NodeId {
    doc.element_by_id(id).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_discovers_groups() {
    let runtime = Runtime::new(Document::new(page()), Settings::default());

    assert_eq!(runtime.groups().len(), 1);
    assert_eq!(runtime.groups().get("faq").unwrap().active(), Some("a"));
    assert!(runtime.document().has_class(node(runtime.document(), "a"), "active"));
}

// ============================================================================
// Event loop
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_click_is_applied() {
    let document = Document::new(page()).with_window(Window::new(1280, 800));
    let tab_b = node(&document, "tab-b");
    let (tx, handle) = start(document);

    tx.send(Event::click(tab_b)).await.unwrap();
    drop(tx);
    let output = handle.await.unwrap();

    assert_eq!(output.groups.get("faq").unwrap().active(), Some("b"));
    assert_eq!(output.document.hash(), "#b");
}

#[tokio::test(start_paused = true)]
async fn test_resize_burst_rechecks_once_after_quiet_period() {
    let document = Document::new(page()).with_window(Window::new(1280, 800));
    let tab_b = node(&document, "tab-b");
    let (tx, handle) = start(document);

    tx.send(Event::click(tab_b)).await.unwrap();

    // Dip below the breakpoint and come back within one quiet period.
    tx.send(Event::resize(500, 800)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;
    tx.send(Event::resize(400, 800)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;
    tx.send(Event::resize(1200, 800)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;

    drop(tx);
    let output = handle.await.unwrap();

    let faq = output.groups.get("faq").unwrap();
    // An intermediate switch to accordions would have reset the open tab.
    assert_eq!(faq.view(), View::Tab);
    assert_eq!(faq.active(), Some("b"));
    assert_eq!(output.document.window().width, 1200);
}

#[tokio::test(start_paused = true)]
async fn test_resize_switches_after_quiet_period() {
    let document = Document::new(page()).with_window(Window::new(1280, 800));
    let tab_b = node(&document, "tab-b");
    let (tx, handle) = start(document);

    tx.send(Event::click(tab_b)).await.unwrap();
    tx.send(Event::resize(480, 800)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    drop(tx);
    let output = handle.await.unwrap();

    let faq = output.groups.get("faq").unwrap();
    assert_eq!(faq.view(), View::Accordion);
    assert_eq!(faq.active(), None);
}

#[tokio::test(start_paused = true)]
async fn test_pending_recheck_flushed_on_shutdown() {
    let document = Document::new(page()).with_window(Window::new(1280, 800));
    let (tx, handle) = start(document);

    tx.send(Event::resize(480, 800)).await.unwrap();
    drop(tx);
    let output = handle.await.unwrap();

    assert_eq!(output.groups.get("faq").unwrap().view(), View::Accordion);
}

#[tokio::test(start_paused = true)]
async fn test_fixed_groups_ignore_resize() {
    let document = Document::new(
        page().child(Element::div().data("tabby-group-faq", r#"{"type": "tab"}"#)),
    )
    .with_window(Window::new(1280, 800));
    let runtime = Runtime::new(document, Settings::default())
        .with_quiet_period(Duration::from_millis(10));
    assert!(!runtime.groups().responsive());

    let (tx, rx) = mpsc::channel(16);
    let handle = tokio::spawn(runtime.run(rx));

    tx.send(Event::resize(320, 800)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    drop(tx);
    let output = handle.await.unwrap();

    assert_eq!(output.groups.get("faq").unwrap().view(), View::Tab);
    assert_eq!(output.document.window().width, 320);
}
