//! Export panel: copy the currently filtered covers grid to the
//! clipboard, either as a standalone HTML fragment for embedding or as
//! JSON for further analysis.

use dioxus::prelude::*;

use crate::core::{platform, text::escape_html};

use super::covers::{CoverEntry, CoversGridModel};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[component]
pub fn ExportPanel(model: CoversGridModel) -> Element {
    let entry_count = model.entries.len();

    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("export-panel__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "export-panel__meta export-panel__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "export-panel__meta export-panel__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let html_handler = {
        let model = model.clone();
        let status_signal = status;
        let busy_signal = busy;
        move |_| {
            let text = render_covers_html(&model);
            run_copy(
                text,
                "Preparing HTML",
                "Grid HTML copied",
                status_signal,
                busy_signal,
            );
        }
    };

    let json_handler = {
        let entries = model.entries.clone();
        let mut status_signal = status;
        let busy_signal = busy;
        move |_| match render_entries_json(&entries) {
            Ok(text) => run_copy(
                text,
                "Preparing JSON",
                "Grid JSON copied",
                status_signal,
                busy_signal,
            ),
            Err(err) => status_signal.set(ExportStatus::Error(err)),
        }
    };

    rsx! {
        section { class: "export-panel",
            div { class: "export-panel__header",
                h2 { "Export" }
                span { class: "export-panel__meta", "{entry_count} covers in view" }
            }

            div { class: "export-panel__actions",
                button {
                    r#type: "button",
                    class: "export-panel__button",
                    disabled: busy(),
                    onclick: html_handler,
                    "Copy as HTML"
                }
                button {
                    r#type: "button",
                    class: "export-panel__button",
                    disabled: busy(),
                    onclick: json_handler,
                    "Copy as JSON"
                }
            }

            if let Some((class, message)) = feedback {
                span { class: "{class}", "{message}" }
            }
        }
    }
}

fn run_copy(
    text: String,
    working: &'static str,
    done: &'static str,
    mut status_signal: Signal<ExportStatus>,
    mut busy_signal: Signal<bool>,
) {
    if busy_signal() {
        return;
    }
    busy_signal.set(true);
    status_signal.set(ExportStatus::Working(working));

    #[cfg(target_arch = "wasm32")]
    {
        platform::spawn_future(async move {
            match platform::copy_to_clipboard(text).await {
                Ok(()) => status_signal.set(ExportStatus::Done(done.to_string())),
                Err(err) => status_signal.set(ExportStatus::Error(err)),
            }
            busy_signal.set(false);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match futures::executor::block_on(platform::copy_to_clipboard(text)) {
            Ok(()) => status_signal.set(ExportStatus::Done(done.to_string())),
            Err(err) => status_signal.set(ExportStatus::Error(err)),
        }
        busy_signal.set(false);
    }
}

/// Serialize the visible entries for spreadsheet-side analysis.
fn render_entries_json(entries: &[CoverEntry]) -> Result<String, String> {
    serde_json::to_string_pretty(entries).map_err(|err| err.to_string())
}

/// Render the covers grid as a standalone HTML fragment. Every
/// user-sourced string is escaped here; nothing from the sheet reaches
/// the markup raw.
pub fn render_covers_html(model: &CoversGridModel) -> String {
    if let Some(empty) = model.empty {
        return format!(
            "<p class=\"covers-empty\">{}</p>",
            escape_html(empty.message())
        );
    }

    let mut html = String::from("<div class=\"covers-grid\">");
    for entry in &model.entries {
        html.push_str("<div class=\"cover-item\">");

        if let Some(link) = &entry.link {
            html.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"cover-link\">",
                escape_html(link)
            ));
        }

        match &entry.cover_url {
            Some(url) => html.push_str(&format!(
                "<div class=\"cover-image\" style=\"background-image: url('{}')\"></div>",
                escape_html(url)
            )),
            None => html.push_str(&format!(
                "<div class=\"cover-image cover-image-placeholder\" style=\"background-color: {}\"></div>",
                entry.color
            )),
        }

        if entry.link.is_some() {
            html.push_str("</a>");
        }

        html.push_str("<div class=\"cover-details\">");
        html.push_str(&format!(
            "<div class=\"cover-title\">{}</div>",
            escape_html(&entry.title)
        ));
        html.push_str(&format!(
            "<div class=\"cover-author\">{}</div>",
            escape_html(&entry.author)
        ));
        html.push_str(&format!("<div class=\"cover-date\">{}</div>", entry.finished));
        html.push_str(&format!(
            "<div class=\"cover-language\" style=\"background-color: {}\">{}</div>",
            entry.color,
            escape_html(&entry.language)
        ));
        html.push_str("</div></div>");
    }
    html.push_str("</div>");
    html
}
