//! Wishlist page markup schema
//!
//! The host page's class names are a fixed external contract; a change on
//! the host side is a compatibility break, not a defect here. [`DomEntry`]
//! adapts one wishlist row to the core's [`WishlistNode`] capability.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};
use wf_core::{DiscountMarkup, WishlistNode};

/// Container element holding one child per wishlist entry.
pub const WISHLIST_CONTAINER_ID: &str = "wishlist_items";
/// Host region the filter controls are appended to.
pub const CONTROLS_CLASS: &str = "controls";

const ROW_ITEM_CLASS: &str = "wishlistRowItem";
const PRICE_DATA_CLASS: &str = "gameListPriceData";
const DISCOUNT_BLOCK_CLASS: &str = "discount_block discount_block_inline";
const DISCOUNT_PCT_CLASS: &str = "discount_pct";
const DISCOUNT_PRICES_CLASS: &str = "discount_prices";
const DISCOUNT_FINAL_PRICE_CLASS: &str = "discount_final_price";
const PRICE_CLASS: &str = "price";

fn first_by_class(root: &Element, class: &str) -> Option<Element> {
    root.get_elements_by_class_name(class).item(0)
}

/// One wishlist row on the host page. The node is owned by the page; it is
/// only ever shown or hidden.
pub struct DomEntry {
    node: HtmlElement,
}

impl DomEntry {
    pub fn new(node: HtmlElement) -> Self {
        Self { node }
    }

    fn price_data(&self) -> Option<Element> {
        let row = first_by_class(&self.node, ROW_ITEM_CLASS)?;
        first_by_class(&row, PRICE_DATA_CLASS)
    }
}

impl WishlistNode for DomEntry {
    fn discount_markup(&self) -> Option<DiscountMarkup> {
        let block = first_by_class(&self.price_data()?, DISCOUNT_BLOCK_CLASS)?;
        Some(DiscountMarkup {
            percentage_text: first_by_class(&block, DISCOUNT_PCT_CLASS)
                .and_then(|el| el.text_content()),
            final_price_text: first_by_class(&block, DISCOUNT_PRICES_CLASS)
                .and_then(|prices| first_by_class(&prices, DISCOUNT_FINAL_PRICE_CLASS))
                .and_then(|el| el.text_content()),
        })
    }

    fn price_text(&self) -> Option<String> {
        first_by_class(&self.price_data()?, PRICE_CLASS)?.text_content()
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let _ = self.node.style().set_property("display", display);
    }
}

/// Scan the page's item list into one [`DomEntry`] per row.
pub fn scan_entries(document: &Document) -> Result<Vec<DomEntry>, JsValue> {
    let container = document
        .get_element_by_id(WISHLIST_CONTAINER_ID)
        .ok_or_else(|| {
            JsValue::from_str("wishlist page has no #wishlist_items container")
        })?;

    let children = container.children();
    let mut entries = Vec::with_capacity(children.length() as usize);
    for index in 0..children.length() {
        let Some(child) = children.item(index) else {
            continue;
        };
        match child.dyn_into::<HtmlElement>() {
            Ok(el) => entries.push(DomEntry::new(el)),
            Err(_) => log::warn!("skipping non-HTML wishlist row at index {}", index),
        }
    }

    Ok(entries)
}
