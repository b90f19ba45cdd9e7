//! Event-driven tests for the input components
//!
//! Dispatches clicks, input and focus events through the VirtualDom
//! runtime, rerenders, and checks the resulting markup and callbacks.

use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Mutex;

use dioxus::dioxus_core::{ElementId, Event, Mutation, Mutations, NoOpMutations};
use dioxus::prelude::*;
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedFocusData, SerializedFormData,
    SerializedHtmlEventConverter, SerializedMouseData,
};
use ecommerce_input_ui::{DateInput, EcommerceInput};

/// A mounted component tree plus the listeners it registered
struct Harness {
    dom: VirtualDom,
    mutations: Mutations,
}

impl Harness {
    fn mount(app: fn() -> Element) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let mutations = dom.rebuild_to_vec();
        Self { dom, mutations }
    }

    fn listener(&self, event: &str) -> ElementId {
        self.mutations
            .edits
            .iter()
            .find_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == event => Some(*id),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no {event} listener registered"))
    }

    fn dispatch(&mut self, name: &str, data: PlatformEventData) {
        let target = self.listener(name);
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event(name, event, target);
        self.rerender();
    }

    fn click(&mut self) {
        self.dispatch(
            "click",
            PlatformEventData::new(Box::<SerializedMouseData>::default()),
        );
    }

    fn type_text(&mut self, text: &str) {
        let data = SerializedFormData::new(text.to_string(), HashMap::new());
        self.dispatch("input", PlatformEventData::new(Box::new(data)));
    }

    fn focus(&mut self) {
        self.dispatch(
            "focus",
            PlatformEventData::new(Box::<SerializedFocusData>::default()),
        );
    }

    fn rerender(&mut self) {
        self.dom.render_immediate(&mut NoOpMutations);
    }

    fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

// ============================================================================
// Password toggle
// ============================================================================

#[test]
fn toggle_reveals_then_hides_password() {
    fn app() -> Element {
        rsx! {
            EcommerceInput {
                id: "password".to_string(),
                input_type: "password".to_string(),
                value: Some("hunter2".to_string()),
            }
        }
    }

    let mut harness = Harness::mount(app);
    assert!(harness.html().contains(r#"type="password""#));

    harness.click();
    let html = harness.html();
    assert!(html.contains(r#"type="text""#), "{html}");
    assert!(html.contains("Hide"), "{html}");
    assert!(!html.contains("Show"), "{html}");
    assert!(html.contains(r#"aria-pressed="true""#), "{html}");
    assert!(html.contains(r#"value="hunter2""#), "{html}");

    harness.click();
    let html = harness.html();
    assert!(html.contains(r#"type="password""#), "{html}");
    assert!(html.contains("Show"), "{html}");
    assert!(!html.contains("Hide"), "{html}");
    assert!(html.contains(r#"value="hunter2""#), "{html}");
}

// ============================================================================
// Masked input callbacks
// ============================================================================

#[test]
fn masked_text_is_forwarded_and_rejections_are_silent() {
    static FORWARDED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    fn app() -> Element {
        rsx! {
            DateInput {
                id: "dob".to_string(),
                oninput: Some(EventHandler::new(|value: String| {
                    FORWARDED.lock().unwrap().push(value);
                })),
            }
        }
    }

    let mut harness = Harness::mount(app);
    harness.type_text("2");
    harness.type_text("25");
    harness.type_text("25a");
    assert!(harness.html().contains(r#"value="25""#));

    harness.type_text("251");
    assert!(harness.html().contains(r#"value="25/1""#));

    assert_eq!(*FORWARDED.lock().unwrap(), vec!["2", "25", "25/1"]);
}

#[test]
fn focus_reaches_caller() {
    static FOCUSED: Mutex<usize> = Mutex::new(0);

    fn app() -> Element {
        rsx! {
            DateInput {
                id: "dob".to_string(),
                onfocus: Some(EventHandler::new(|_: ()| *FOCUSED.lock().unwrap() += 1)),
            }
        }
    }

    let mut harness = Harness::mount(app);
    harness.focus();
    assert_eq!(*FOCUSED.lock().unwrap(), 1);
}

// ============================================================================
// Caller-controlled value
// ============================================================================

#[test]
fn caller_value_change_after_mount_is_applied() {
    static BIRTH_DATE: GlobalSignal<String> = Signal::global(|| "25122021".to_string());

    fn app() -> Element {
        rsx! {
            DateInput { id: "dob".to_string(), value: Some(BIRTH_DATE.cloned()) }
        }
    }

    let mut harness = Harness::mount(app);
    assert!(harness.html().contains(r#"value="25/12/2021""#));

    harness.dom.in_runtime(|| BIRTH_DATE.signal().set(String::new()));
    harness.rerender();
    let html = harness.html();
    assert!(html.contains(r#"value="""#), "{html}");

    harness.type_text("3");
    assert!(harness.html().contains(r#"value="3""#));

    harness
        .dom
        .in_runtime(|| BIRTH_DATE.signal().set("01012000".to_string()));
    harness.rerender();
    let html = harness.html();
    assert!(html.contains(r#"value="01/01/2000""#), "{html}");
}
