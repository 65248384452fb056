use maud::{html, Markup};

use crate::domain::line_item::LineItemRef;
use crate::domain::logic::format_money;
use crate::domain::order::OrderContext;

/// One affected order line inside a return, claim or swap entry:
/// quantity, thumbnail, title, SKU and the tax-inclusive unit price.
///
/// Pure projection. Missing display data degrades instead of failing: no
/// thumbnail gets the placeholder graphic, no SKU shows as `-`, and a
/// label without a resolvable product renders as inert text rather than a
/// link.
pub fn line_item_summary(item: &LineItemRef, order: &OrderContext) -> Markup {
    html! {
        div class="timeline-line-item" {
            span class="line-item-quantity" { (item.quantity) " x" }
            div class="line-item-thumbnail" {
                @match &item.thumbnail {
                    Some(src) => {
                        img src=(src) width="30" height="30" alt=(item.title);
                    }
                    None => {
                        (thumbnail_placeholder())
                    }
                }
            }
            @match item.product_id() {
                Some(product_id) => {
                    a class="line-item-label" href=(format!("/a/products/{product_id}")) {
                        (label_body(item, order))
                    }
                }
                None => {
                    span class="line-item-label" {
                        (label_body(item, order))
                    }
                }
            }
        }
    }
}

fn label_body(item: &LineItemRef, order: &OrderContext) -> Markup {
    html! {
        (item.title)
        br;
        (item.sku_label())
        br;
        (format_money(
            item.unit_price,
            order.region.tax_rate,
            &order.currency_code,
        ))
    }
}

/// Stand-in graphic for items whose product image is gone.
fn thumbnail_placeholder() -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width="30"
            height="30"
            viewBox="0 0 24 24"
            fill="none"
            stroke="#c4c4c4"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="image-placeholder"
        {
            rect x="3" y="3" width="18" height="18" rx="2" {}
            circle cx="8.5" cy="8.5" r="1.5" {}
            path d="M21 15l-5 -5l-11 11" {}
        }
    }
}
