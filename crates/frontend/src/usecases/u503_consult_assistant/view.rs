use super::view_model::VideoCallVm;
use crate::layout::app_services::use_services;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use contracts::domain::a005_chat_message::ChatMessage;
use contracts::domain::common::FixtureRecord;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u503_consult_assistant::ConsultAssistant;
use leptos::prelude::*;
use thaw::*;

#[component]
fn ChatBubble(message: ChatMessage, on_save: Callback<String>) -> impl IntoView {
    let is_user = message.is_user();
    let text = message.text.clone();

    view! {
        <div class="chat__row" class:chat__row--user=is_user>
            <div class="chat__bubble" class:chat__bubble--user=is_user>
                <span class="chat__avatar">{icon(if is_user { "user" } else { "bot" })}</span>
                <div class="chat__body">
                    <p class="chat__text">{message.text.clone()}</p>
                    {message.document_ref.clone().map(|reference| view! {
                        <div class="chat__reference">{format!("📄 {}", reference)}</div>
                    })}
                    <div class="chat__meta">
                        <span>{message.time_label()}</span>
                        {is_user.then(|| view! {
                            <button
                                class="chat__save"
                                title="Save for lawyer"
                                on:click=move |_| on_save.run(text.clone())
                            >
                                {icon("bookmark")}
                            </button>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn VideoCall() -> impl IntoView {
    let services = StoredValue::new(use_services());
    let vm = VideoCallVm::new();
    on_cleanup(move || vm.release());

    let call_active = move || vm.session.with(|s| s.call_active());
    let muted = move || vm.session.with(|s| s.muted());
    let video_on = move || vm.session.with(|s| s.video_on());

    let handle_send = Callback::new(move |_: ()| {
        services.with_value(|s| vm.send(s));
    });
    let on_save = Callback::new(move |question: String| {
        services.with_value(|s| vm.save_for_lawyer(s, &question));
    });

    view! {
        <PageFrame page_id=page_id(&ConsultAssistant::full_name(), PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <PageHeader
                title=ConsultAssistant::display_name()
                subtitle=ConsultAssistant::description().to_string()
            >
                ""
            </PageHeader>

            <div class="page__content call-layout">
                <div class="call-layout__main">
                    <Card class="call-stage">
                        <div class="call-stage__screen">
                            <video
                                node_ref=vm.video_ref
                                class="call-stage__video"
                                autoplay=true
                                muted=true
                                playsinline=true
                                style:display=move || if call_active() && video_on() { "block" } else { "none" }
                            ></video>
                            <Show
                                when=call_active
                                fallback=move || view! {
                                    <div class="call-stage__idle">
                                        <div class="call-stage__logo">{icon("video")}</div>
                                        <h3>"AI Legal Assistant"</h3>
                                        <p>"Start a video call for personalized legal guidance"</p>
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| vm.start_call()
                                        >
                                            "Start Video Call"
                                        </Button>
                                    </div>
                                }
                            >
                                <Show when=move || !video_on()>
                                    <div class="call-stage__camera-off">
                                        {icon("video-off")}
                                        <p>"Camera is off"</p>
                                    </div>
                                </Show>
                                <div class="call-stage__avatar">{icon("bot")}</div>
                                <div class="call-stage__status">
                                    <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Success>
                                        "Live"
                                    </Badge>
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>
                                        "AI Assistant Active"
                                    </Badge>
                                </div>
                            </Show>
                        </div>
                    </Card>

                    <Show when=call_active>
                        <Card class="call-controls card-appear">
                            <div class="call-controls__row">
                                <Button
                                    appearance=Signal::derive(move || if muted() {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    })
                                    shape=ButtonShape::Circular
                                    on_click=move |_| vm.toggle_mute()
                                >
                                    {move || icon(if muted() { "mic-off" } else { "mic" })}
                                </Button>
                                <Button
                                    appearance=Signal::derive(move || if video_on() {
                                        ButtonAppearance::Secondary
                                    } else {
                                        ButtonAppearance::Primary
                                    })
                                    shape=ButtonShape::Circular
                                    on_click=move |_| vm.toggle_video()
                                >
                                    {move || icon(if video_on() { "video" } else { "video-off" })}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    shape=ButtonShape::Circular
                                    class="call-controls__end"
                                    on_click=move |_| vm.end_call()
                                >
                                    {icon("phone")}
                                </Button>
                            </div>
                        </Card>
                    </Show>
                </div>

                <div class="call-layout__side">
                    <Card>
                        <h2 class="card-title">{icon("file-text")} "Document Context"</h2>
                        <p class="call-context__title">"Employment Agreement"</p>
                        <p class="call-context__topic">
                            "Currently discussing: Non-compete clauses and termination terms"
                        </p>
                    </Card>

                    <Card class="chat">
                        <h2 class="card-title">{icon("message-square")} {ChatMessage::list_name()}</h2>
                        <div class="chat__messages">
                            <For
                                each=move || vm.session.with(|s| s.transcript().messages().to_vec())
                                key=|msg| msg.id
                                let:msg
                            >
                                <ChatBubble message=msg on_save=on_save />
                            </For>
                            <Show when=move || vm.is_awaiting_reply()>
                                <div class="chat__typing">
                                    <Spinner size=SpinnerSize::ExtraTiny />
                                    "AI is typing..."
                                </div>
                            </Show>
                        </div>
                        <div class="chat__input">
                            <Input
                                value=vm.draft
                                placeholder="Ask about your document..."
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        handle_send.run(());
                                    }
                                }
                            />
                            <Button
                                appearance=ButtonAppearance::Primary
                                size=ButtonSize::Small
                                disabled=Signal::derive(move || vm.draft.with(|d| d.trim().is_empty()))
                                on_click=move |_| handle_send.run(())
                            >
                                {icon("send")}
                            </Button>
                        </div>
                    </Card>

                    <Show when=move || !vm.session.with(|s| s.saved_questions().is_empty())>
                        <Card class="saved-questions">
                            <h2 class="card-title">"Saved for Lawyer"</h2>
                            <ul class="saved-questions__list">
                                <For
                                    each=move || vm.session.with(|s| s.saved_questions().to_vec())
                                    key=|q| q.clone()
                                    let:question
                                >
                                    <li class="saved-questions__item">{question}</li>
                                </For>
                            </ul>
                        </Card>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
