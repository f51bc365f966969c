use super::view_model::DocumentUploadVm;
use crate::layout::app_services::use_services;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::tone_badge::tone_class;
use crate::shared::file_picker::{dropped_files, picked_files};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use contracts::domain::a001_uploaded_file::{UploadStatus, UploadedFile, UploadedFileId};
use contracts::domain::common::FixtureRecord;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_simulate_upload::SimulateUpload;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;
use web_sys::DragEvent;

fn status_icon(status: UploadStatus) -> impl IntoView {
    let name = match status {
        UploadStatus::Completed => "check-circle",
        UploadStatus::Error => "alert-circle",
        UploadStatus::Uploading | UploadStatus::Processing => "file-text",
    };
    view! { <span class=format!("upload-row__icon {}", tone_class(status.tone()))>{icon(name)}</span> }
}

#[component]
fn UploadRow(vm: DocumentUploadVm, id: UploadedFileId) -> impl IntoView {
    let file = move || vm.file(id);

    move || {
        file().map(|file| {
            let status = file.status;
            view! {
                <div class="upload-row">
                    <div class="upload-row__info">
                        {status_icon(status)}
                        <div class="upload-row__text">
                            <p class="upload-row__name">{file.name.clone()}</p>
                            <p class="upload-row__size">{file.size_label()}</p>
                        </div>
                    </div>
                    <div class="upload-row__state">
                        {match status {
                            UploadStatus::Uploading => view! {
                                <div class="progress" role="progressbar" aria-valuenow=file.progress>
                                    <div
                                        class="progress__bar"
                                        style=format!("width: {}%;", file.progress)
                                    ></div>
                                </div>
                            }
                            .into_any(),
                            UploadStatus::Processing => view! {
                                <span class="upload-row__processing">
                                    <Spinner size=SpinnerSize::Tiny />
                                    "Processing..."
                                </span>
                            }
                            .into_any(),
                            UploadStatus::Completed => view! {
                                <A href=format!("/document/{}", file.id)>
                                    <span class="button-link">"View Analysis"</span>
                                </A>
                            }
                            .into_any(),
                            UploadStatus::Error => view! {
                                <span class="upload-row__error">
                                    {file.error.clone().unwrap_or_else(|| "Upload failed".to_string())}
                                </span>
                            }
                            .into_any(),
                        }}
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click=move |_| vm.remove(id)
                        >
                            {icon("x")}
                        </Button>
                    </div>
                </div>
            }
        })
    }
}

#[component]
pub fn DocumentUpload() -> impl IntoView {
    let services = StoredValue::new(use_services());
    let vm = DocumentUploadVm::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (accept, types_label, max_mb) = services.with_value(|s| {
        let upload = &s.config.upload;
        (upload.accept.clone(), upload.accepted_types_label(), upload.max_file_mb)
    });

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        vm.drag_active.set(true);
    };
    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        vm.drag_active.set(false);
    };
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        vm.drag_active.set(false);
        let files = dropped_files(&ev);
        services.with_value(|s| vm.add_files(s, files));
    };
    let on_change = move |ev: web_sys::Event| {
        let files = picked_files(&ev);
        services.with_value(|s| vm.add_files(s, files));
    };
    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <PageFrame page_id=page_id(&SimulateUpload::full_name(), PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <PageHeader
                title=SimulateUpload::display_name()
                subtitle=SimulateUpload::description().to_string()
            >
                ""
            </PageHeader>

            <div class="page__content">
                <Card>
                    <div
                        class="drop-zone"
                        class:drop-zone--active=move || vm.drag_active.get()
                        on:dragenter=on_drag_over
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                    >
                        <div class="drop-zone__icon">{icon("upload")}</div>
                        <h3>"Drop your documents here"</h3>
                        <p>{format!("Support for {} files up to {}MB", types_label, max_mb)}</p>
                        <Button appearance=ButtonAppearance::Primary on_click=open_picker>
                            "Choose Files"
                        </Button>
                        <input
                            node_ref=input_ref
                            type="file"
                            multiple=true
                            accept=accept
                            style="display: none;"
                            on:change=on_change
                        />
                    </div>
                </Card>

                <Show when=move || !vm.queue.with(|q| q.is_empty())>
                    <Card class="upload-list">
                        <h2 class="card-title">{UploadedFile::list_name()}</h2>
                        <For
                            each=move || vm.file_ids()
                            key=|id| *id
                            let:id
                        >
                            <UploadRow vm=vm id=id />
                        </For>
                    </Card>
                </Show>
            </div>
        </PageFrame>
    }
}
