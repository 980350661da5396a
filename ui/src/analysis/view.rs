use api::{AnalysisClient, AnalysisResult, Hotspot};
use dioxus::prelude::*;

use crate::app::use_app;
use crate::components::{Button, ButtonVariant, Card};
use crate::config::AppConfig;
use crate::core::format::format_percent;
use crate::core::geolocation::current_position;
use crate::i18n::{content, Locale};

use super::requester::{run_analysis, AnalysisPhase, AnalysisRequester, CoordinateForm};
use super::samples::SAMPLE_LOCATIONS;

#[component]
pub fn AnalysisPanel() -> Element {
    let app = use_app();
    let locale = app.locale();
    let copy = &app.content().analysis;
    let config = use_context::<AppConfig>();
    let client = use_hook(|| AnalysisClient::new(config.analysis_endpoint.clone()));
    let timeout = config.request_timeout;

    let mut form = use_signal(CoordinateForm::default);
    let mut requester = use_signal(AnalysisRequester::default);
    let mut inflight = use_signal(|| Option::<Task>::None);
    let mut locating = use_signal(|| false);
    let mut geo_error = use_signal(|| Option::<String>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let pending = requester.write().begin(&form.read());
        let Some(pending) = pending else {
            return;
        };
        let client = client.clone();
        let task = spawn(async move {
            let outcome = run_analysis(&client, pending.request, timeout).await;
            requester.write().complete(pending.generation, outcome);
            inflight.set(None);
        });
        inflight.set(Some(task));
    };

    let on_cancel = move |_: MouseEvent| {
        if let Some(task) = inflight.take() {
            task.cancel();
        }
        requester.write().cancel();
    };

    let on_locate = move |_: MouseEvent| {
        if locating() {
            return;
        }
        locating.set(true);
        geo_error.set(None);
        spawn(async move {
            match current_position().await {
                Ok(position) => form.write().fill(position),
                Err(err) => {
                    tracing::warn!(%err, "geolocation failed");
                    geo_error.set(Some(copy.geolocation_message(&err).to_string()));
                }
            }
            locating.set(false);
        });
    };

    let loading = requester.read().is_loading();
    let phase = requester.read().phase().clone();
    let latitude = form.read().latitude.clone();
    let longitude = form.read().longitude.clone();

    rsx! {
        section { class: "analysis",
            div { class: "page-header",
                h1 { class: "page-title", "{copy.title}" }
                p { class: "page-subtitle", "{copy.subtitle}" }
            }
            Card { class: "analysis__form-card",
                form { class: "form analysis__form", onsubmit: on_submit,
                    div { class: "form__row",
                        label { class: "form__field",
                            span { class: "form__label", "{copy.latitude}" }
                            input {
                                class: "form__input",
                                r#type: "number",
                                step: "any",
                                required: true,
                                placeholder: "{copy.latitude_placeholder}",
                                value: "{latitude}",
                                oninput: move |evt| form.write().latitude = evt.value(),
                            }
                        }
                        label { class: "form__field",
                            span { class: "form__label", "{copy.longitude}" }
                            input {
                                class: "form__input",
                                r#type: "number",
                                step: "any",
                                required: true,
                                placeholder: "{copy.longitude_placeholder}",
                                value: "{longitude}",
                                oninput: move |evt| form.write().longitude = evt.value(),
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        block: true,
                        disabled: locating(),
                        onclick: on_locate,
                        if locating() { "{copy.locating}" } else { "📍 {copy.use_location}" }
                    }
                    if let Some(message) = geo_error() {
                        p { class: "notice notice--warning", "{message}" }
                    }
                    div { class: "samples",
                        span { class: "form__label", "{copy.samples}" }
                        div { class: "samples__grid",
                            for sample in SAMPLE_LOCATIONS {
                                button {
                                    class: "samples__item",
                                    r#type: "button",
                                    onclick: move |_| form.write().fill(sample.coordinates()),
                                    "{sample.name}"
                                }
                            }
                        }
                    }
                    div { class: "analysis__actions",
                        Button { kind: "submit", block: true, disabled: loading,
                            if loading {
                                span { class: "spinner" }
                                "{copy.submitting}"
                            } else {
                                "{copy.submit}"
                            }
                        }
                        if loading {
                            Button { variant: ButtonVariant::Ghost, onclick: on_cancel, "{copy.cancel}" }
                        }
                    }
                }
            }
            {
                match phase {
                    AnalysisPhase::Failure(failure) => rsx! {
                        div { class: "notice notice--error", role: "alert",
                            strong { "{copy.failed}" }
                            p { class: "notice__detail", "{failure.detail}" }
                        }
                    },
                    AnalysisPhase::Success(result) => rsx! {
                        AnalysisReport { locale, result }
                    },
                    AnalysisPhase::Idle | AnalysisPhase::Loading { .. } => rsx! {},
                }
            }
        }
    }
}

/// Rendered analysis: three metric cards plus the critical areas list.
#[component]
pub fn AnalysisReport(locale: Locale, result: AnalysisResult) -> Element {
    let copy = &content(locale).analysis;
    let ndvi = result.ndvi.clone().unwrap_or_default();
    let soil = result.soil_moisture.clone().unwrap_or_default();
    let land = result.land_use.clone().unwrap_or_default();

    rsx! {
        div { class: "report",
            div { class: "report__grid",
                MetricCard {
                    title: copy.vegetation.clone(),
                    tone: "green",
                    rows: vec![
                        (copy.healthy.clone(), format_percent(ndvi.healthy)),
                        (copy.stressed.clone(), format_percent(ndvi.stressed)),
                    ],
                }
                MetricCard {
                    title: copy.soil.clone(),
                    tone: "blue",
                    rows: vec![
                        (copy.moisture_average.clone(), format_percent(soil.average)),
                        (copy.needs_irrigation.clone(), format_percent(soil.needs_irrigation)),
                    ],
                }
                MetricCard {
                    title: copy.land_use.clone(),
                    tone: "purple",
                    rows: vec![
                        (copy.cropland.clone(), format_percent(land.cropland)),
                        (copy.baresoil.clone(), format_percent(land.baresoil)),
                    ],
                }
            }
            if let Some(hotspots) = result.hotspots.clone() {
                Card { class: "report__critical",
                    h3 { class: "report__heading", "⚠ {copy.critical}" }
                    if hotspots.is_empty() {
                        p { class: "report__empty", "{copy.no_critical}" }
                    } else {
                        div { class: "report__hotspots",
                            {hotspot_list(locale, &copy.moisture_hotspots, "blue", &hotspots.moisture)}
                            {hotspot_list(locale, &copy.stress_hotspots, "red", &hotspots.stress)}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricCard(title: String, tone: &'static str, rows: Vec<(String, String)>) -> Element {
    rsx! {
        Card { class: "metric metric--{tone}",
            h3 { class: "metric__title", "{title}" }
            for (label, value) in rows {
                div { class: "metric__row",
                    div { class: "metric__label", "{label}" }
                    div { class: "metric__value", "{value}" }
                }
            }
        }
    }
}

fn hotspot_list(locale: Locale, title: &str, tone: &str, spots: &[Hotspot]) -> Element {
    if spots.is_empty() {
        return rsx! {};
    }
    let bundle = content(locale);
    rsx! {
        div { class: "hotspots hotspots--{tone}",
            div { class: "hotspots__title", "{title}" }
            ul {
                for spot in spots.iter() {
                    li { {bundle.hotspot_line(&spot.location, &spot.severity)} }
                }
            }
        }
    }
}
