use dioxus::prelude::*;

use crate::analysis::AnalysisPanel;

#[component]
pub fn Analysis() -> Element {
    rsx! {
        AnalysisPanel {}
    }
}
