use dioxus::prelude::*;

use crate::app::use_app;
use crate::components::{Button, ButtonVariant, Card, Modal};
use crate::content::MarketplaceContent;

use super::catalog::{
    Catalog, CategoryFilter, Inquiry, Product, ProductDraft, CATEGORY_OPTIONS, UNIT_OPTIONS,
};

#[component]
pub fn MarketplaceBoard() -> Element {
    let app = use_app();
    let copy = &app.content().marketplace;
    let catalog = use_context::<Signal<Catalog>>();

    let mut search = use_signal(String::new);
    let mut category = use_signal(CategoryFilter::default);
    let mut adding = use_signal(|| false);
    let mut inquiry_for = use_signal(|| Option::<Product>::None);
    let mut confirmation = use_signal(|| Option::<String>::None);

    let (categories, visible) = {
        let catalog = catalog.read();
        let term = search.read();
        let selected = category.read();
        let visible: Vec<Product> = catalog.filter(&term, &selected).cloned().collect();
        (catalog.categories(), visible)
    };
    let selected = category();

    rsx! {
        section { class: "market",
            div { class: "market__header",
                div {
                    h1 { class: "page-title", "{copy.title}" }
                    p { class: "page-subtitle", "{copy.subtitle}" }
                }
                Button { onclick: move |_| adding.set(true), "＋ {copy.add}" }
            }
            div { class: "market__filters",
                input {
                    class: "form__input market__search",
                    r#type: "search",
                    placeholder: "{copy.search_placeholder}",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                div { class: "chips",
                    for filter in categories {
                        button {
                            class: chip_class(&filter, &selected),
                            r#type: "button",
                            onclick: {
                                let filter = filter.clone();
                                move |_| category.set(filter.clone())
                            },
                            {filter.label()}
                        }
                    }
                }
            }
            if let Some(message) = confirmation() {
                p { class: "notice notice--success", "{message}" }
            }
            if visible.is_empty() {
                p { class: "market__empty", "{copy.empty}" }
            } else {
                div { class: "market__grid",
                    for product in visible {
                        {product_card(copy, product, inquiry_for)}
                    }
                }
            }
            if adding() {
                AddProductForm { on_close: move |_| adding.set(false) }
            }
            if let Some(product) = inquiry_for() {
                InquiryForm {
                    product,
                    on_close: move |_| inquiry_for.set(None),
                    on_sent: move |message: String| {
                        inquiry_for.set(None);
                        confirmation.set(Some(message));
                    },
                }
            }
        }
    }
}

fn chip_class(filter: &CategoryFilter, selected: &CategoryFilter) -> &'static str {
    if filter == selected {
        "chip chip--active"
    } else {
        "chip"
    }
}

fn product_card(
    copy: &'static MarketplaceContent,
    product: Product,
    mut inquiry_for: Signal<Option<Product>>,
) -> Element {
    let (badge_class, badge) = if product.available {
        ("badge badge--ok", &copy.in_stock)
    } else {
        ("badge badge--muted", &copy.out_of_stock)
    };
    let target = product.clone();

    rsx! {
        Card { key: "{product.id}", class: "product",
            div { class: "product__head",
                h3 { class: "product__name", "{product.name}" }
                span { class: badge_class, "{badge}" }
            }
            span { class: "product__category", "{product.category}" }
            p { class: "product__description", "{product.description}" }
            div { class: "product__price",
                strong { "{product.price_range}" }
                span { class: "product__unit", " {product.unit}" }
            }
            Button {
                variant: ButtonVariant::Outline,
                block: true,
                onclick: move |_| inquiry_for.set(Some(target.clone())),
                "{copy.inquire}"
            }
        }
    }
}

#[component]
fn AddProductForm(on_close: EventHandler<()>) -> Element {
    let app = use_app();
    let copy = &app.content().marketplace;
    let mut catalog = use_context::<Signal<Catalog>>();
    let mut draft = use_signal(ProductDraft::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let added = catalog.write().add_product(&draft.read()).is_some();
        if added {
            on_close.call(());
        }
    };

    let current = draft();

    rsx! {
        Modal {
            title: copy.add_title.clone(),
            close_label: copy.cancel.clone(),
            on_close: move |_| on_close.call(()),
            wide: true,
            form { class: "form", onsubmit: on_submit,
                label { class: "form__field",
                    span { class: "form__label", "{copy.field_name}" }
                    input {
                        class: "form__input",
                        r#type: "text",
                        required: true,
                        placeholder: "{copy.field_name_placeholder}",
                        value: "{current.name}",
                        oninput: move |evt| draft.write().name = evt.value(),
                    }
                }
                div { class: "form__row",
                    label { class: "form__field",
                        span { class: "form__label", "{copy.field_category}" }
                        select {
                            class: "form__input",
                            value: "{current.category}",
                            onchange: move |evt| draft.write().category = evt.value(),
                            for choice in CATEGORY_OPTIONS {
                                option { value: choice, selected: current.category == choice, "{choice}" }
                            }
                        }
                    }
                    label { class: "form__field",
                        span { class: "form__label", "{copy.field_unit}" }
                        select {
                            class: "form__input",
                            required: true,
                            value: "{current.unit}",
                            onchange: move |evt| draft.write().unit = evt.value(),
                            option { value: "", "{copy.field_unit_placeholder}" }
                            for unit in UNIT_OPTIONS {
                                option { value: unit, selected: current.unit == unit, "{unit}" }
                            }
                        }
                    }
                }
                div { class: "form__row",
                    label { class: "form__field",
                        span { class: "form__label", "{copy.field_price_min}" }
                        input {
                            class: "form__input",
                            r#type: "number",
                            required: true,
                            placeholder: "{copy.field_price_min_placeholder}",
                            value: "{current.price_min}",
                            oninput: move |evt| draft.write().price_min = evt.value(),
                        }
                    }
                    label { class: "form__field",
                        span { class: "form__label", "{copy.field_price_max}" }
                        input {
                            class: "form__input",
                            r#type: "number",
                            required: true,
                            placeholder: "{copy.field_price_max_placeholder}",
                            value: "{current.price_max}",
                            oninput: move |evt| draft.write().price_max = evt.value(),
                        }
                    }
                }
                label { class: "form__field",
                    span { class: "form__label", "{copy.field_description}" }
                    textarea {
                        class: "form__input",
                        rows: "3",
                        required: true,
                        placeholder: "{copy.field_description_placeholder}",
                        value: "{current.description}",
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                }
                label { class: "form__check",
                    input {
                        r#type: "checkbox",
                        checked: current.available,
                        onchange: move |evt| draft.write().available = evt.checked(),
                    }
                    span { "{copy.field_available}" }
                }
                div { class: "form__actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "{copy.cancel}"
                    }
                    Button { kind: "submit", "{copy.add}" }
                }
            }
        }
    }
}

#[component]
fn InquiryForm(product: Product, on_close: EventHandler<()>, on_sent: EventHandler<String>) -> Element {
    let app = use_app();
    let copy = &app.content().marketplace;
    let mut quantity = use_signal(String::new);
    let mut message = use_signal(String::new);

    let product_id = product.id;
    let product_name = product.name.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if quantity.read().trim().is_empty() {
            return;
        }
        let inquiry = Inquiry {
            product_id,
            quantity: quantity(),
            message: message(),
        };
        inquiry.record(&product);
        on_sent.call(format!("{} {}", copy.inquiry_sent, product.name));
    };

    rsx! {
        Modal {
            title: format!("{} {}", copy.inquiry_title, product_name),
            close_label: copy.cancel.clone(),
            on_close: move |_| on_close.call(()),
            form { class: "form", onsubmit: on_submit,
                label { class: "form__field",
                    span { class: "form__label", "{copy.inquiry_quantity}" }
                    input {
                        class: "form__input",
                        r#type: "text",
                        required: true,
                        value: "{quantity}",
                        oninput: move |evt| quantity.set(evt.value()),
                    }
                }
                label { class: "form__field",
                    span { class: "form__label", "{copy.inquiry_message}" }
                    textarea {
                        class: "form__input",
                        rows: "4",
                        placeholder: "{copy.inquiry_message_placeholder}",
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                }
                div { class: "form__actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "{copy.cancel}"
                    }
                    Button { kind: "submit", "{copy.inquiry_send}" }
                }
            }
        }
    }
}
