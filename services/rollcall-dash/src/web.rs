// services/rollcall-dash/src/web.rs
//
// Roll Call Dashboard - Browser adapters (DOM targets, URL, config element)
//

use dashkit::{DashError, Page, Target, ViewLink};
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Id of the optional `<script type="application/json">` holding config overrides
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// DOM-backed page: every target is looked up by id on each write, so a
/// layout without a given section only loses that section.
pub struct WebPage {
    document: web_sys::Document,
}

impl WebPage {
    pub fn new() -> Self {
        Self {
            document: leptos::document(),
        }
    }

    fn element(&self, target: Target) -> Result<Element, DashError> {
        self.document
            .get_element_by_id(target.element_id())
            .ok_or_else(|| DashError::MissingTarget(target.element_id().to_string()))
    }
}

impl Default for WebPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for WebPage {
    fn set_html(&mut self, target: Target, html: &str) -> Result<(), DashError> {
        self.element(target)?.set_inner_html(html);
        Ok(())
    }

    fn set_text(&mut self, target: Target, text: &str) -> Result<(), DashError> {
        self.element(target)?.set_text_content(Some(text));
        Ok(())
    }
}

/// Raw query string of the current location, including the leading `?`
pub fn current_query() -> String {
    leptos::window().location().search().unwrap_or_default()
}

pub fn current_href() -> Result<String, DashError> {
    leptos::window()
        .location()
        .href()
        .map_err(|e| DashError::Config(js_error(&e)))
}

/// Pushes the link's query onto the history without reloading the page
pub fn push_view(link: &ViewLink, param: &str) -> Result<(), DashError> {
    let history = leptos::window()
        .history()
        .map_err(|e| DashError::Unknown(js_error(&e)))?;
    history
        .push_state_with_url(&JsValue::NULL, "", Some(&link.href(param)))
        .map_err(|e| DashError::Unknown(js_error(&e)))
}

pub fn config_overrides() -> Option<String> {
    leptos::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
}

pub fn set_document_title(title: &str) {
    leptos::document().set_title(title);
}

pub fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
