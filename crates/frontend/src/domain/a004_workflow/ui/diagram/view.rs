use super::geometry::{edge_path, CANVAS_HEIGHT, CANVAS_WIDTH, NODE_HEIGHT, NODE_WIDTH};
use super::view_model::WorkflowVm;
use crate::layout::app_services::use_services;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::tone_badge::{tone_class, ToneBadge};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_CUSTOM};
use contracts::domain::a004_workflow::{MilestoneStatus, Position, WorkflowNode, WorkflowNodeId};
use contracts::domain::common::{FixtureRecord, StatusTone};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;
use web_sys::MouseEvent;

fn status_icon(status: MilestoneStatus) -> &'static str {
    match status {
        MilestoneStatus::Completed => "check-circle",
        MilestoneStatus::InProgress => "clock",
        MilestoneStatus::Risk => "alert-triangle",
        MilestoneStatus::Pending | MilestoneStatus::Upcoming | MilestoneStatus::Future => "calendar",
    }
}

/// Pointer position in canvas units
fn canvas_point(ev: &MouseEvent, canvas: &web_sys::HtmlDivElement) -> Position {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 { CANVAS_WIDTH / rect.width() } else { 1.0 };
    let scale_y = if rect.height() > 0.0 { CANVAS_HEIGHT / rect.height() } else { 1.0 };
    Position::new(
        (f64::from(ev.client_x()) - rect.left()) * scale_x,
        (f64::from(ev.client_y()) - rect.top()) * scale_y,
    )
}

#[component]
fn DiagramNode(vm: WorkflowVm, id: WorkflowNodeId, canvas: NodeRef<leptos::html::Div>) -> impl IntoView {
    let node = move || vm.graph.with(|g| g.node(id).cloned());
    let is_source = move || vm.connect_source.get() == Some(id);

    let on_mousedown = move |ev: MouseEvent| {
        ev.prevent_default();
        if let Some(canvas) = canvas.get_untracked() {
            vm.begin_drag(id, canvas_point(&ev, &canvas));
        }
    };

    move || {
        node().map(|node| {
            view! {
                <g
                    class=format!("diagram-node {}", tone_class(node.status.tone()))
                    class:diagram-node--source=is_source
                    transform=format!("translate({} {})", node.position.x, node.position.y)
                    on:mousedown=on_mousedown
                >
                    <rect
                        class="diagram-node__box"
                        width=NODE_WIDTH
                        height=NODE_HEIGHT
                        rx="8"
                    ></rect>
                    <text class="diagram-node__label" x=NODE_WIDTH / 2.0 y="24" text-anchor="middle">
                        {node.label.clone()}
                    </text>
                    <text class="diagram-node__status" x=NODE_WIDTH / 2.0 y="42" text-anchor="middle">
                        {node.status.badge_label()}
                    </text>
                </g>
            }
        })
    }
}

#[component]
pub fn WorkflowDiagram() -> impl IntoView {
    let vm = WorkflowVm::new(use_services().toasts);
    let canvas = NodeRef::<leptos::html::Div>::new();
    let counts = Memo::new(move |_| vm.graph.with(|g| g.counts()));

    let on_mousemove = move |ev: MouseEvent| {
        if vm.drag.with_untracked(|d| d.is_none()) {
            return;
        }
        if let Some(canvas) = canvas.get_untracked() {
            vm.drag_to(canvas_point(&ev, &canvas));
        }
    };

    let edges = move || {
        vm.graph.with(|g| {
            g.edges()
                .iter()
                .filter_map(|e| {
                    let source = g.node(e.source)?.position;
                    let target = g.node(e.target)?.position;
                    Some((e.id.clone(), edge_path(source, target)))
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageFrame page_id=page_id(&WorkflowNode::full_name(), PAGE_CAT_CUSTOM) category=PAGE_CAT_CUSTOM>
            <PageHeader
                title=WorkflowNode::list_name()
                subtitle="Interactive visualization of your employment contract obligations and milestones".to_string()
            >
                ""
            </PageHeader>

            <div class="page__content workflow-layout">
                <div class="workflow-layout__main">
                    <Card>
                        <div class="card-header-row">
                            <h2 class="card-title">{icon("file-text")} "Contract Timeline"</h2>
                            <div class="card-header-row__actions">
                                <Button
                                    appearance=Signal::derive(move || if vm.connect_mode.get() {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    })
                                    size=ButtonSize::Small
                                    on_click=move |_| vm.toggle_connect_mode()
                                >
                                    {icon("link")}
                                    {move || if vm.connect_mode.get() { " Connecting..." } else { " Connect" }}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    size=ButtonSize::Small
                                    on_click=move |_| vm.ai_open.set(true)
                                >
                                    {icon("message-square")}
                                    " Ask AI"
                                </Button>
                            </div>
                        </div>
                        <Show when=move || vm.connect_mode.get()>
                            <p class="diagram-hint">
                                {move || match vm.connect_source.get() {
                                    Some(_) => "Now click the milestone that depends on it.",
                                    None => "Click the milestone the dependency starts from.",
                                }}
                            </p>
                        </Show>
                        <div
                            node_ref=canvas
                            class="diagram-canvas"
                            class:diagram-canvas--dragging=move || vm.drag.with(|d| d.is_some())
                            on:mousemove=on_mousemove
                            on:mouseup=move |_| vm.end_drag()
                            on:mouseleave=move |_| vm.end_drag()
                        >
                            <svg
                                viewBox=format!("0 0 {} {}", CANVAS_WIDTH, CANVAS_HEIGHT)
                                preserveAspectRatio="xMidYMid meet"
                            >
                                <defs>
                                    <marker
                                        id="diagram-arrow"
                                        viewBox="0 0 10 10"
                                        refX="9"
                                        refY="5"
                                        markerWidth="6"
                                        markerHeight="6"
                                        orient="auto"
                                    >
                                        <path d="M 0 0 L 10 5 L 0 10 z" class="diagram-edge__head"></path>
                                    </marker>
                                </defs>
                                <For each=edges key=|(id, path)| (id.clone(), path.clone()) let:edge>
                                    <path
                                        class="diagram-edge"
                                        d=edge.1
                                        marker-end="url(#diagram-arrow)"
                                    ></path>
                                </For>
                                <For
                                    each=move || vm.graph.with(|g| g.nodes().iter().map(|n| n.id).collect::<Vec<_>>())
                                    key=|id| *id
                                    let:id
                                >
                                    <DiagramNode vm=vm id=id canvas=canvas />
                                </For>
                            </svg>
                        </div>
                    </Card>

                    <Card>
                        <h2 class="card-title">"Status Legend"</h2>
                        <div class="legend">
                            {MilestoneStatus::all()
                                .into_iter()
                                .map(|status| view! {
                                    <div class="legend__item">
                                        <span class=format!("legend__swatch {}", tone_class(status.tone()))></span>
                                        <span>{status.legend_label()}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </Card>
                </div>

                <div class="workflow-layout__side">
                    <Card>
                        <h2 class="card-title">"Overview"</h2>
                        <div class="summary-row">
                            <span>"Total Milestones"</span>
                            {move || view! { <ToneBadge tone=StatusTone::Neutral label=counts.get().total.to_string() /> }}
                        </div>
                        <div class="summary-row">
                            <span>"Completed"</span>
                            {move || view! { <ToneBadge tone=StatusTone::Success label=counts.get().completed.to_string() /> }}
                        </div>
                        <div class="summary-row">
                            <span>"In Progress"</span>
                            {move || view! { <ToneBadge tone=StatusTone::Warning label=counts.get().in_progress.to_string() /> }}
                        </div>
                        <div class="summary-row">
                            <span>"Risks"</span>
                            {move || view! { <ToneBadge tone=StatusTone::Danger label=counts.get().risks.to_string() /> }}
                        </div>
                    </Card>

                    <Card>
                        <h2 class="card-title">"Current Focus"</h2>
                        <div class="focus-item">
                            <span class="tone--warning">{icon("clock")}</span>
                            <div>
                                <p class="focus-item__title">"Probation Period"</p>
                                <p class="focus-item__note">"45 days remaining"</p>
                            </div>
                        </div>
                        <div class="focus-item">
                            <span class="tone--neutral">{icon("file-text")}</span>
                            <div>
                                <p class="focus-item__title">"Benefits Enrollment"</p>
                                <p class="focus-item__note">"Action required"</p>
                            </div>
                        </div>
                    </Card>

                    <Card>
                        <h2 class="card-title">"Upcoming Deadlines"</h2>
                        <div class="deadline">
                            <p class="deadline__title">"Performance Review"</p>
                            <p class="deadline__when">"In 45 days"</p>
                        </div>
                        <div class="deadline">
                            <p class="deadline__title">"Benefits Enrollment"</p>
                            <p class="deadline__when">"In 14 days"</p>
                        </div>
                    </Card>
                </div>
            </div>

            {move || vm.selected_node().map(|node| view! {
                <Modal
                    title=node.label.clone()
                    title_icon=status_icon(node.status)
                    on_close=Callback::new(move |_| vm.selected.set(None))
                >
                    <div class="node-details">
                        <div class="node-details__row">
                            <span class="node-details__label">"Status:"</span>
                            <ToneBadge tone=node.status.tone() label=node.status.badge_label() />
                        </div>
                        <div>
                            <span class="node-details__label">"Description:"</span>
                            <p class="node-details__text">{node.description.clone()}</p>
                        </div>
                        <div class="node-details__actions">
                            <A href="/document/1">
                                <span class="button-link button-link--outline">"View Details"</span>
                            </A>
                            <Button
                                appearance=ButtonAppearance::Primary
                                size=ButtonSize::Small
                                on_click=move |_| vm.ask_ai()
                            >
                                "Ask AI About This"
                            </Button>
                        </div>
                    </div>
                </Modal>
            })}

            <Show when=move || vm.ai_open.get()>
                <Modal
                    title="AI Workflow Assistant"
                    title_icon="message-square"
                    on_close=Callback::new(move |_| vm.ai_open.set(false))
                >
                    <p class="modal-text">
                        "Ask me anything about your contract workflow, deadlines, or obligations."
                    </p>
                    <A href="/call">
                        <span class="button-link button-link--block">"Start Conversation"</span>
                    </A>
                </Modal>
            </Show>
        </PageFrame>
    }
}
