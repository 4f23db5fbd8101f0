//! Wishlist entry classification
//!
//! Buckets each page entry into exactly one of the three categories. Parse
//! failures are isolated per entry: a malformed discount block demotes that
//! one entry to unpriced and the scan continues.

use crate::parse::{parse_discount_percentage, parse_price, parse_price_strict};
use crate::types::{Categories, ItemClass, WishlistItem, WishlistNode};

/// A defect in the host page's markup for a single entry.
///
/// These are not expected in well-formed input; they indicate the discount
/// marker was present but its contents did not match the schema.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ClassifyError {
    #[error("discount marker without a percentage field")]
    MissingDiscountPercentage,
    #[error("discount percentage text carries no number: {0:?}")]
    UnparsableDiscountPercentage(String),
    #[error("discount marker without a final price field")]
    MissingFinalPrice,
    #[error("discounted price text carries no number: {0:?}")]
    UnparsableFinalPrice(String),
}

/// Classify a scanned list of page entries into the three categorized
/// collections. Total: every input node lands in exactly one collection.
pub fn classify<N: WishlistNode>(nodes: Vec<N>) -> Categories<N> {
    let mut categories = Categories::default();

    for node in nodes {
        match classify_one(&node) {
            Ok(class @ ItemClass::Discounted { .. }) => {
                categories.discounted.push(WishlistItem { node, class });
            }
            Ok(class @ ItemClass::Priced { .. }) => {
                categories.normally_priced.push(WishlistItem { node, class });
            }
            Ok(class @ ItemClass::Unpriced) => {
                categories.unpriced.push(WishlistItem { node, class });
            }
            Err(err) => {
                // Malformed entry; keep it visible as unpriced rather than
                // abort the whole scan.
                log::warn!("wishlist entry demoted to unpriced: {}", err);
                categories.unpriced.push(WishlistItem {
                    node,
                    class: ItemClass::Unpriced,
                });
            }
        }
    }

    categories
}

fn classify_one<N: WishlistNode>(node: &N) -> Result<ItemClass, ClassifyError> {
    if let Some(markup) = node.discount_markup() {
        let pct_text = markup
            .percentage_text
            .ok_or(ClassifyError::MissingDiscountPercentage)?;
        let discount_percentage = parse_discount_percentage(&pct_text)
            .ok_or_else(|| ClassifyError::UnparsableDiscountPercentage(pct_text.clone()))?;

        let price_text = markup
            .final_price_text
            .ok_or(ClassifyError::MissingFinalPrice)?;
        let price = parse_price_strict(&price_text)
            .ok_or_else(|| ClassifyError::UnparsableFinalPrice(price_text.clone()))?;

        return Ok(ItemClass::Discounted {
            price,
            discount_percentage,
        });
    }

    match node.price_text() {
        Some(text) if !text.trim().is_empty() => Ok(ItemClass::Priced {
            price: parse_price(&text),
        }),
        _ => Ok(ItemClass::Unpriced),
    }
}
