use crate::layout::app_services::use_services;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::export::download_text;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_translate_document::{
    Language, TranslateDocument, TranslationSession, SAMPLE_LEGAL_TEXT,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "languages",
        "Multiple Languages",
        "Translate into 7+ languages including plain English simplification",
    ),
    (
        "file-text",
        "Legal Context",
        "Preserves legal meaning while making text accessible",
    ),
    (
        "download",
        "Export Options",
        "Copy or download translations for your records",
    ),
];

#[component]
pub fn DocumentTranslation() -> impl IntoView {
    let services = StoredValue::new(use_services());
    let toasts = services.with_value(|s| s.toasts);

    let source_text = RwSignal::new(String::new());
    let language_code = RwSignal::new(String::new());
    let session = RwSignal::new(TranslationSession::new());

    let language = move || Language::from_code(&language_code.get());
    let is_translating = move || session.with(|s| s.is_translating());
    let translated = move || session.with(|s| s.translated_text().map(str::to_string));

    let translate = move |_| {
        let submitted = session
            .try_update(|s| s.submit(language(), &source_text.get_untracked()))
            .unwrap_or(Ok(None));
        let request = match submitted {
            Ok(Some(request)) => request,
            Ok(None) => return,
            Err(e) => {
                toasts.error(e.title(), e.to_string());
                return;
            }
        };
        log::info!("translating {} chars into {}", request.text.len(), request.language.code());

        let (delay_ms, translator) =
            services.with_value(|s| (s.config.translation.delay_ms, s.translator.clone()));
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if let Some(true) = session.try_update(|s| s.complete(translator.as_ref())) {
                toasts.show(
                    "Translation Complete",
                    "Your document has been successfully translated.",
                );
            }
        });
    };

    let copy = move |text: String| {
        copy_to_clipboard_with_callback(&text, move |result| match result {
            Ok(()) => toasts.show("Copied to clipboard", "Text has been copied to your clipboard."),
            Err(e) => log::warn!("{}", e),
        });
    };

    let download = move |_| {
        let completed = session.with_untracked(|s| {
            s.completed_request()
                .map(|r| r.download_name())
                .zip(s.translated_text().map(str::to_string))
        });
        if let Some((filename, text)) = completed {
            if let Err(e) = download_text(&text, &filename) {
                log::error!("download failed: {}", e);
            }
        }
    };

    view! {
        <PageFrame page_id=page_id(&TranslateDocument::full_name(), PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <PageHeader
                title=TranslateDocument::display_name()
                subtitle=TranslateDocument::description().to_string()
            >
                ""
            </PageHeader>

            <div class="page__content">
                <Card class="translate-controls">
                    <div class="translate-controls__row">
                        <label class="form__label">"Target Language"</label>
                        <Select value=language_code>
                            <option value="" disabled=true>"Select language"</option>
                            {Language::all()
                                .into_iter()
                                .map(|lang| view! { <option value=lang.code()>{lang.label()}</option> })
                                .collect_view()}
                        </Select>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || {
                                is_translating()
                                    || !TranslationSession::can_submit(language(), &source_text.get())
                            })
                            on_click=translate
                        >
                            {move || if is_translating() {
                                view! { <Spinner size=SpinnerSize::Tiny /> "Translating..." }.into_any()
                            } else {
                                view! { {icon("languages")} "Translate" }.into_any()
                            }}
                        </Button>
                    </div>
                </Card>

                <div class="translate-panes">
                    <Card class="translate-pane">
                        <div class="translate-pane__header">
                            <h2 class="card-title">"Original Text"</h2>
                            <div class="translate-pane__actions">
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    size=ButtonSize::Small
                                    on_click=move |_| source_text.set(SAMPLE_LEGAL_TEXT.to_string())
                                >
                                    "Load Sample"
                                </Button>
                                <Show when=move || !source_text.with(|t| t.is_empty())>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=move |_| copy(source_text.get_untracked())
                                    >
                                        {icon("copy")}
                                    </Button>
                                </Show>
                            </div>
                        </div>
                        <Textarea
                            value=source_text
                            placeholder="Paste your legal document text here..."
                            class="translate-pane__textarea"
                        />
                        <p class="translate-pane__count">
                            {move || format!("{} characters", source_text.with(|t| t.chars().count()))}
                        </p>
                    </Card>

                    <Card class="translate-pane">
                        <div class="translate-pane__header">
                            <h2 class="card-title">
                                {move || match language() {
                                    Some(lang) => format!("Translation ({})", lang.label()),
                                    None => "Translation".to_string(),
                                }}
                            </h2>
                            <Show when=move || translated().is_some()>
                                <div class="translate-pane__actions">
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=move |_| {
                                            if let Some(text) = translated() {
                                                copy(text);
                                            }
                                        }
                                    >
                                        {icon("copy")}
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=download
                                    >
                                        {icon("download")}
                                    </Button>
                                </div>
                            </Show>
                        </div>
                        <div class="translate-pane__output">
                            {move || {
                                if is_translating() {
                                    view! {
                                        <div class="translate-pane__placeholder">
                                            <Spinner />
                                            <p>"AI is translating your document..."</p>
                                        </div>
                                    }
                                    .into_any()
                                } else if let Some(text) = translated() {
                                    view! { <pre class="translate-pane__result">{text}</pre> }.into_any()
                                } else {
                                    view! {
                                        <div class="translate-pane__placeholder">
                                            {icon("languages")}
                                            <p>"Translation will appear here"</p>
                                        </div>
                                    }
                                    .into_any()
                                }
                            }}
                        </div>
                    </Card>
                </div>

                <div class="feature-strip">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, (icon_name, title, text))| view! {
                            <CardAnimated delay_ms=stagger_delay(i, 100) class="feature-strip__card">
                                <div class="feature-strip__icon">{icon(icon_name)}</div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </CardAnimated>
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
