use crate::shared::components::page_header::PageHeader;
use crate::shared::components::tone_badge::{tone_class, ToneBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use contracts::domain::a003_annotation::{
    sample_document, AnnotatedDocument, Annotation, AnnotationKind, AnnotationSelection,
    DocumentSegment,
};
use contracts::domain::common::{FixtureRecord, StatusTone};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

fn kind_icon(kind: AnnotationKind) -> &'static str {
    match kind {
        AnnotationKind::Critical => "alert-triangle",
        AnnotationKind::Warning => "alert-circle",
        AnnotationKind::Info => "info",
    }
}

/// Fixture document for the routed `:id`, recomputed when the id changes
fn document_for(document_id: Signal<String>) -> Memo<AnnotatedDocument> {
    Memo::new(move |_| sample_document(&document_id.get()))
}

fn subtitle_for(document: &AnnotatedDocument) -> String {
    format!("{} - Document ID: {}", document.title, document.id)
}

/// Body text with clickable highlights
#[component]
fn AnnotatedBody(
    document: Memo<AnnotatedDocument>,
    selection: RwSignal<AnnotationSelection>,
) -> impl IntoView {
    view! {
        <div class="document-body">
            {move || document
                .with(|d| d.segments())
                .into_iter()
                .map(|segment| match segment {
                    DocumentSegment::Plain(text) => view! { <span>{text}</span> }.into_any(),
                    DocumentSegment::Highlight { annotation_id, kind, text } => view! {
                        <mark
                            class=format!("document-body__highlight {}", tone_class(kind.tone()))
                            class:document-body__highlight--selected=move || {
                                selection.with(|s| s.is_selected(annotation_id))
                            }
                            on:click=move |_| selection.update(|s| s.select(annotation_id))
                        >
                            {text}
                        </mark>
                    }
                    .into_any(),
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn DocumentViewer() -> impl IntoView {
    let params = use_params_map();
    let document_id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));
    let document = document_for(document_id);
    let selection = RwSignal::new(AnnotationSelection::default());
    let summary = Memo::new(move |_| document.with(|d| d.summary()));
    let subtitle = Signal::derive(move || Some(document.with(subtitle_for)));

    Effect::new(move |_| {
        let id = document_id.get();
        selection.set(AnnotationSelection::default());
        log::debug!("document {} opened", id);
    });

    let selected_explanation = move || {
        let id = selection.with(|s| s.selected())?;
        document.with(|d| d.annotation(id).cloned())
    };

    view! {
        <PageFrame page_id=page_id(&Annotation::full_name(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <PageHeader title="Document Analysis" subtitle=subtitle>
                ""
            </PageHeader>

            <div class="page__content document-layout">
                <Card class="document-layout__main">
                    <h2 class="card-title">{icon("file-text")} "Document Content"</h2>
                    <AnnotatedBody document=document selection=selection />
                </Card>

                <div class="document-layout__side">
                    <Card>
                        <h2 class="card-title">"Analysis Summary"</h2>
                        {move || {
                            let summary = summary.get();
                            view! {
                                <div class="summary-row">
                                    <span>"Critical Issues"</span>
                                    <ToneBadge tone=StatusTone::Danger label=summary.critical.to_string() />
                                </div>
                                <div class="summary-row">
                                    <span>"Warnings"</span>
                                    <ToneBadge tone=StatusTone::Warning label=summary.warnings.to_string() />
                                </div>
                                <div class="summary-row">
                                    <span>"Information"</span>
                                    <ToneBadge tone=StatusTone::Info label=summary.info.to_string() />
                                </div>
                            }
                        }}
                    </Card>

                    <Card>
                        <h2 class="card-title">{Annotation::list_name()}</h2>
                        <div class="annotation-list">
                            {move || document
                                .with(|d| d.annotations.clone())
                                .into_iter()
                                .map(|annotation| {
                                    let id = annotation.id;
                                    view! {
                                        <div
                                            class=format!("annotation-card {}", tone_class(annotation.kind.tone()))
                                            class:annotation-card--selected=move || {
                                                selection.with(|s| s.is_selected(id))
                                            }
                                            on:click=move |_| selection.update(|s| s.select(id))
                                        >
                                            <span class="annotation-card__icon">
                                                {icon(kind_icon(annotation.kind))}
                                            </span>
                                            <div class="annotation-card__body">
                                                <p class="annotation-card__quote">
                                                    {format!("\"{}\"", annotation.text)}
                                                </p>
                                                <p class="annotation-card__explanation">
                                                    {annotation.explanation.clone()}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        {move || selected_explanation().map(|annotation| view! {
                            <div class="annotation-focus">
                                <ToneBadge tone=annotation.kind.tone() label=annotation.kind.as_str() />
                                <p>{annotation.explanation}</p>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    size=ButtonSize::Small
                                    on_click=move |_| selection.update(|s| s.clear())
                                >
                                    "Clear selection"
                                </Button>
                            </div>
                        })}
                    </Card>

                    <Card>
                        <h2 class="card-title">{icon("message-square")} "Ask AI"</h2>
                        <A href="/call">
                            <span class="button-link button-link--block">"Start AI Consultation"</span>
                        </A>
                    </Card>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_follows_route_id() {
        let document_id = RwSignal::new("1".to_string());
        let document = document_for(document_id.into());
        assert_eq!(
            document.with(subtitle_for),
            "TechCorp Employment Agreement - Document ID: 1"
        );

        document_id.set("2".to_string());
        assert_eq!(
            document.with(subtitle_for),
            "Consulting Services Contract - Document ID: 2"
        );

        document_id.set("upload-7".to_string());
        assert_eq!(document.with(subtitle_for), "Employment Agreement - Document ID: upload-7");
    }
}
