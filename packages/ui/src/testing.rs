//! Headless VirtualDom driver for event-level component tests.

use std::any::Any;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::{ElementId, Mutation, Mutations};
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedKeyboardData,
    SerializedMouseData,
};

pub(crate) struct TestDom {
    dom: VirtualDom,
    initial: Vec<(String, ElementId)>,
    latest: Vec<(String, ElementId)>,
}

impl TestDom {
    pub(crate) fn new(app: fn() -> Element) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);
        let initial = listeners(mutations);
        Self {
            dom,
            latest: initial.clone(),
            initial,
        }
    }

    /// Listeners registered by the first render.
    pub(crate) fn initial(&self, name: &str) -> Vec<ElementId> {
        filter(&self.initial, name)
    }

    /// Listeners registered by the most recent event's re-render.
    pub(crate) fn latest(&self, name: &str) -> Vec<ElementId> {
        filter(&self.latest, name)
    }

    pub(crate) fn click(&mut self, id: ElementId) {
        self.click_batch(&[id]);
    }

    /// Click each element in turn and re-render once afterwards, as when
    /// several events land in the same frame.
    pub(crate) fn click_batch(&mut self, ids: &[ElementId]) {
        for &id in ids {
            let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
            self.send("click", data, id);
        }
        self.flush();
    }

    pub(crate) fn key_down(&mut self, id: ElementId, key: Key, code: Code) {
        let keyboard = SerializedKeyboardData::new(
            key,
            code,
            Location::Standard,
            false,
            Modifiers::empty(),
            false,
        );
        self.send("keydown", PlatformEventData::new(Box::new(keyboard)), id);
        self.flush();
    }

    fn send(&mut self, name: &str, data: PlatformEventData, id: ElementId) {
        let data: Rc<dyn Any> = Rc::new(data);
        self.dom.runtime().handle_event(name, Event::new(data, true), id);
    }

    fn flush(&mut self) {
        let mut mutations = Mutations::default();
        self.dom.render_immediate(&mut mutations);
        self.latest = listeners(mutations);
    }

    pub(crate) fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub(crate) fn dialog_open(&self) -> bool {
        self.html().contains("role=\"dialog\"")
    }
}

fn listeners(mutations: Mutations) -> Vec<(String, ElementId)> {
    mutations
        .edits
        .into_iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } => Some((name, id)),
            _ => None,
        })
        .collect()
}

fn filter(listeners: &[(String, ElementId)], name: &str) -> Vec<ElementId> {
    listeners
        .iter()
        .filter(|(n, _)| n == name)
        .map(|(_, id)| *id)
        .collect()
}

/// The initial `click` listener whose activation opens a dialog.
///
/// Listener order within a render is not part of any contract, so each
/// candidate is tried against a fresh dom.
pub(crate) fn find_trigger(app: fn() -> Element) -> ElementId {
    let candidates = TestDom::new(app).initial("click");
    candidates
        .into_iter()
        .find(|&id| {
            let mut dom = TestDom::new(app);
            dom.click(id);
            dom.dialog_open()
        })
        .expect("no click listener opens a dialog")
}

/// The dialog's close control: a `click` listener from the opening render
/// that closes the dialog and is not the backdrop.
pub(crate) fn find_close_control(app: fn() -> Element, trigger: ElementId) -> ElementId {
    let mut opened = TestDom::new(app);
    opened.click(trigger);
    let backdrop = backdrop(&opened);
    opened
        .latest("click")
        .into_iter()
        .filter(|&id| id != backdrop)
        .find(|&id| {
            let mut dom = TestDom::new(app);
            dom.click(trigger);
            dom.click(id);
            !dom.dialog_open()
        })
        .expect("no close control in the dialog")
}

/// The backdrop is the element carrying the dialog's `keydown` listener.
pub(crate) fn backdrop(dom: &TestDom) -> ElementId {
    dom.latest("keydown")
        .into_iter()
        .next()
        .expect("open dialog has no keydown listener")
}
