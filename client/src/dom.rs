//! Browser binding: mounts the widget onto the page's existing markup.
//!
//! The page provides a scrollable container, a text input and a send
//! control by fixed ids; styling for the `message`, `user-message` and
//! `bot-message` classes lives in the page stylesheet. Every failure is
//! logged to the developer console and never shown to the user.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::mpsc::{self, UnboundedSender};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::config::{WidgetConfig, endpoint_url};
use crate::net::socket;
use crate::state::chat::ChatEntry;
use crate::widget::{ChatView, ChatWidget, WidgetError, is_send_key};

type SharedWidget = Rc<RefCell<ChatWidget<DomView, UnboundedSender<String>>>>;

/// `ChatView` backed by real DOM elements.
pub struct DomView {
    document: Document,
    container: HtmlElement,
    input: HtmlInputElement,
}

impl DomView {
    /// Resolve the container and input by id.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingElement`] naming the first id that is
    /// absent or of the wrong element type.
    pub fn resolve(document: &Document, config: &WidgetConfig) -> Result<Self, WidgetError> {
        let container = element_by_id::<HtmlElement>(document, &config.container_id)?;
        let input = element_by_id::<HtmlInputElement>(document, &config.input_id)?;
        Ok(Self { document: document.clone(), container, input })
    }
}

impl ChatView for DomView {
    fn append(&mut self, entry: &ChatEntry) {
        let Ok(el) = self.document.create_element("div") else {
            log::error!("chat: could not create message element");
            return;
        };
        let [base, kind] = entry.class_names();
        if el.class_list().add_2(base, kind).is_err() {
            log::error!("chat: could not set message classes");
        }
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            html.set_inner_text(&entry.text);
        }
        if self.container.append_child(&el).is_err() {
            log::error!("chat: could not append message element");
        }
    }

    fn scroll_to_latest(&mut self) {
        self.container.set_scroll_top(self.container.scroll_height());
    }

    fn input_value(&self) -> String {
        self.input.value()
    }

    fn clear_input(&mut self) {
        self.input.set_value("");
    }
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, WidgetError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| WidgetError::MissingElement(id.to_owned()))
}

/// Bind the widget to the current page and open the chat socket.
///
/// A socket that cannot be opened is logged and leaves the widget inert:
/// typed messages still render locally and each failed send is logged.
///
/// # Errors
///
/// Returns [`WidgetError::NoDocument`] outside a browser window and
/// [`WidgetError::MissingElement`] when the page markup is incomplete.
pub fn mount(config: &WidgetConfig) -> Result<(), WidgetError> {
    let window = web_sys::window().ok_or(WidgetError::NoDocument)?;
    let document = window.document().ok_or(WidgetError::NoDocument)?;

    let view = DomView::resolve(&document, config)?;
    let button = element_by_id::<HtmlElement>(&document, &config.button_id)?;
    let input = view.input.clone();

    let location = window.location();
    let protocol = location.protocol().unwrap_or_default();
    let host = location.host().unwrap_or_else(|_| "localhost:3000".to_owned());
    let url = endpoint_url(&protocol, &host, &config.path);

    let (tx, rx) = mpsc::unbounded::<String>();
    let widget: SharedWidget = Rc::new(RefCell::new(ChatWidget::new(view, tx)));

    let on_click_widget = Rc::clone(&widget);
    let on_click = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        trigger_send(&on_click_widget);
    }) as Box<dyn FnMut(web_sys::Event)>);
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|_| WidgetError::MissingElement(config.button_id.clone()))?;
    on_click.forget();

    let on_key_widget = Rc::clone(&widget);
    let on_keydown = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
        if is_send_key(&ev.key()) && !ev.is_composing() {
            ev.prevent_default();
            trigger_send(&on_key_widget);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    input
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        .map_err(|_| WidgetError::MissingElement(config.input_id.clone()))?;
    on_keydown.forget();

    // Socket opens only once both triggers are bound.
    let inbound = Rc::clone(&widget);
    if let Err(e) = socket::spawn_connection(&url, rx, move |raw| {
        if let Err(e) = inbound.borrow_mut().on_connection_message(&raw) {
            log::error!("chat: {e}");
        }
    }) {
        log::error!("chat: {e}");
    }

    log::info!("chat widget mounted on #{}", config.container_id);
    Ok(())
}

/// Shared handler for both send triggers.
fn trigger_send(widget: &SharedWidget) {
    if let Err(e) = widget.borrow_mut().on_send_triggered() {
        log::error!("chat: {e}");
    }
}
