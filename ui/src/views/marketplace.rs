use dioxus::prelude::*;

use crate::marketplace::MarketplaceBoard;

#[component]
pub fn Marketplace() -> Element {
    rsx! {
        MarketplaceBoard {}
    }
}
