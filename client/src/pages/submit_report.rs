//! Crime report form.

#[cfg(test)]
#[path = "submit_report_test.rs"]
mod submit_report_test;

use leptos::prelude::*;

use crate::net::types::{NewReport, ReportCategory};
#[cfg(feature = "hydrate")]
use crate::state::session::use_session;

pub const SUBMITTED_MESSAGE: &str = "Report submitted successfully!";

/// Round a coordinate to six decimal places (about 0.1 m).
pub(crate) fn round_coordinate(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

fn parse_coordinate(raw: &str, limit: f64, name: &'static str) -> Result<f64, &'static str> {
    let value: f64 = raw.trim().parse().map_err(|_| name)?;
    if !value.is_finite() || value.abs() > limit {
        return Err(name);
    }
    Ok(round_coordinate(value))
}

pub(crate) fn build_report(
    category: &str,
    description: &str,
    latitude: &str,
    longitude: &str,
) -> Result<NewReport, &'static str> {
    let description = description.trim();
    if description.is_empty() {
        return Err("Describe the incident.");
    }
    Ok(NewReport {
        category: ReportCategory::parse(category).unwrap_or_default(),
        description: description.to_owned(),
        latitude: parse_coordinate(latitude, 90.0, "Latitude must be a number between -90 and 90.")?,
        longitude: parse_coordinate(longitude, 180.0, "Longitude must be a number between -180 and 180.")?,
    })
}

#[component]
pub fn SubmitReportPage() -> impl IntoView {
    let category = RwSignal::new(ReportCategory::default().as_str().to_owned());
    let description = RwSignal::new(String::new());
    let latitude = RwSignal::new(String::new());
    let longitude = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let session = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        submitted.set(false);
        let report = match build_report(&category.get(), &description.get(), &latitude.get(), &longitude.get()) {
            Ok(report) => report,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_report(session.store().client(), &report).await {
                    Ok(_) => {
                        submitted.set(true);
                        description.set(String::new());
                        category.set(ReportCategory::default().as_str().to_owned());
                    }
                    Err(e) => {
                        error.set(crate::util::session_expiry::handle_fetch_error(&session, &e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = report;
            busy.set(false);
        }
    };

    view! {
        <div class="report-form">
            <h2>"Submit a Crime Report"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>
            <Show when=move || submitted.get()>
                <p class="success">{SUBMITTED_MESSAGE}</p>
            </Show>
            <form on:submit=on_submit>
                <label for="description">"Description:"</label>
                <textarea
                    id="description"
                    placeholder="Describe the incident"
                    required
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <label for="category">"Category:"</label>
                <select
                    id="category"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    {ReportCategory::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                        .collect_view()}
                </select>
                <label for="latitude">"Latitude:"</label>
                <input
                    id="latitude"
                    type="text"
                    inputmode="decimal"
                    prop:value=move || latitude.get()
                    on:input=move |ev| latitude.set(event_target_value(&ev))
                />
                <label for="longitude">"Longitude:"</label>
                <input
                    id="longitude"
                    type="text"
                    inputmode="decimal"
                    prop:value=move || longitude.get()
                    on:input=move |ev| longitude.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Report" }}
                </button>
            </form>
        </div>
    }
}
