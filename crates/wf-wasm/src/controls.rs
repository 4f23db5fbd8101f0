//! Filter control widgets
//!
//! Builds the threshold inputs and the discounted-only checkbox, and
//! appends them to the page's own controls region. Layout mirrors the host
//! page: right-aligned rows with the label leading the input.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlLabelElement};

use crate::dom::CONTROLS_CLASS;

pub struct Controls {
    pub price_input: HtmlInputElement,
    pub percentage_input: HtmlInputElement,
    pub discounted_only_checkbox: HtmlInputElement,
}

impl Controls {
    /// Enable or disable all inputs, used to fence off input while the item
    /// list is being scanned.
    pub fn set_enabled(&self, enabled: bool) {
        self.price_input.set_disabled(!enabled);
        self.percentage_input.set_disabled(!enabled);
        self.discounted_only_checkbox.set_disabled(!enabled);
    }
}

/// Build the control cluster and append it to the page's controls region.
pub fn install(document: &Document) -> Result<Controls, JsValue> {
    let host = document
        .get_elements_by_class_name(CONTROLS_CLASS)
        .item(0)
        .ok_or_else(|| JsValue::from_str("wishlist page has no controls region"))?;

    let container: HtmlElement = document.create_element("div")?.dyn_into()?;
    container.style().set_property("display", "inline")?;

    let price_input = labeled_text_input(
        document,
        &container,
        "maximumPriceInput",
        "Maximum price",
    )?;
    let percentage_input = labeled_text_input(
        document,
        &container,
        "discountPercentageInput",
        "Minimum discount percentage",
    )?;
    let discounted_only_checkbox = labeled_checkbox(
        document,
        &container,
        "discountedOnlyCheckbox",
        "Show only discounted items",
    )?;

    host.append_child(&container)?;

    Ok(Controls {
        price_input,
        percentage_input,
        discounted_only_checkbox,
    })
}

fn labeled_text_input(
    document: &Document,
    parent: &Element,
    id: &str,
    label_text: &str,
) -> Result<HtmlInputElement, JsValue> {
    let row: HtmlElement = document.create_element("div")?.dyn_into()?;
    row.style().set_property("text-align", "right")?;

    let label: HtmlLabelElement = document.create_element("label")?.dyn_into()?;
    label.set_html_for(id);
    label.set_text_content(Some(label_text));
    label.style().set_property("margin-right", "0.5em")?;
    row.append_child(&label)?;

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_id(id);
    input.set_type("text");
    input.style().set_property("width", "3.5em")?;
    row.append_child(&input)?;

    parent.append_child(&row)?;
    Ok(input)
}

fn labeled_checkbox(
    document: &Document,
    parent: &Element,
    id: &str,
    label_text: &str,
) -> Result<HtmlInputElement, JsValue> {
    let row: HtmlElement = document.create_element("div")?.dyn_into()?;
    row.style().set_property("text-align", "right")?;

    let checkbox: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    checkbox.set_id(id);
    checkbox.set_type("checkbox");
    row.append_child(&checkbox)?;

    let label: HtmlLabelElement = document.create_element("label")?.dyn_into()?;
    label.set_html_for(id);
    label.set_text_content(Some(label_text));
    row.append_child(&label)?;

    parent.append_child(&row)?;
    Ok(checkbox)
}
