use tabby_dom::{Document, Element, Event};

#[test]
fn test_click_event_target() {
    let doc = Document::new(Element::div().child(Element::button().id("btn")));
    let btn = doc.element_by_id("btn").unwrap();

    let event = Event::click(btn);
    assert_eq!(event, Event::Click { target: btn });
    assert_eq!(event.target(), Some(btn));
}

#[test]
fn test_resize_event_has_no_target() {
    let event = Event::resize(640, 480);
    assert_eq!(
        event,
        Event::Resize {
            width: 640,
            height: 480
        }
    );
    assert_eq!(event.target(), None);
}
