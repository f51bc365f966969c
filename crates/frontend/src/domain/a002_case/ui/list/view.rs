use super::state::{create_state, ALL};
use crate::layout::app_services::use_services;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::tone_badge::{tone_class, ToneBadge};
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a002_case::{all_cases, Case, CaseStats, CaseStatus, CaseType};
use contracts::domain::common::{FixtureRecord, StatusTone};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

fn status_icon(status: CaseStatus) -> &'static str {
    match status {
        CaseStatus::Active => "clock",
        CaseStatus::Pending => "clock",
        CaseStatus::Completed => "check-circle",
        CaseStatus::NeedsAttention => "alert-triangle",
    }
}

#[component]
fn CaseCard(case: Case, index: usize) -> impl IntoView {
    view! {
        <CardAnimated
            delay_ms=stagger_delay(index, 100)
            class=format!("case-card case-card--{}", case.priority.as_str())
        >
            <div class="case-card__header">
                <A href=case.document_href()>
                    <h3 class="case-card__title">{case.title.clone()}</h3>
                </A>
                <div class="case-card__badges">
                    <span class=format!("case-card__status-icon {}", tone_class(case.status.tone()))>
                        {icon(status_icon(case.status))}
                    </span>
                    <ToneBadge tone=case.status.tone() label=case.status.label() />
                    <ToneBadge tone=StatusTone::Neutral label=case.case_type.label() />
                    <ToneBadge
                        tone=case.priority.tone()
                        label=format!("{} priority", case.priority.as_str())
                    />
                </div>
            </div>
            <div class="case-card__meta">
                <span>{icon("calendar")} {format!("Last: {}", case.last_activity)}</span>
                <span>{icon("file-text")} {format!("{} documents", case.documents)}</span>
                <span>{icon("user")} {format!("{} AI interactions", case.ai_interactions)}</span>
                {case.due_date.clone().map(|due| view! {
                    <span>{icon("clock")} {format!("Due: {}", due)}</span>
                })}
            </div>
            {case.assigned_to.clone().map(|name| view! {
                <div class="case-card__assignee">
                    {icon("user")}
                    <span>{format!("Assigned to {}", name)}</span>
                </div>
            })}
        </CardAnimated>
    }
}

#[component]
pub fn CaseList() -> impl IntoView {
    let toasts = use_services().toasts;
    let state = create_state();
    let stats = CaseStats::from_cases(all_cases());

    let filtered = Memo::new(move |_| {
        state
            .filter()
            .apply(all_cases())
            .into_iter()
            .cloned()
            .collect::<Vec<Case>>()
    });

    let export = move |_| {
        let rows = filtered.get_untracked();
        let refs: Vec<&Case> = rows.iter().collect();
        match export_to_csv(&refs, "cases.csv") {
            Ok(()) => log::info!("exported {} cases", refs.len()),
            Err(e) => toasts.error("Export failed", e),
        }
    };

    view! {
        <PageFrame page_id=page_id(&Case::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <PageHeader
                title=Case::list_name()
                subtitle="Manage all your legal documents and AI interactions in one place".to_string()
            >
                <Button appearance=ButtonAppearance::Secondary on_click=export>
                    {icon("download")}
                    " Export CSV"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total Cases" icon_name="file-text" value=Signal::stored(stats.total) tone=StatusTone::Neutral />
                    <StatCard label="Active" icon_name="clock" value=Signal::stored(stats.active) tone=StatusTone::Brand />
                    <StatCard label="Need Attention" icon_name="alert-triangle" value=Signal::stored(stats.needs_attention) tone=StatusTone::Danger />
                    <StatCard label="Completed" icon_name="check-circle" value=Signal::stored(stats.completed) tone=StatusTone::Success />
                </div>

                <Card class="filter-bar">
                    <div class="filter-bar__row">
                        <div class="filter-bar__search">
                            <Input value=state.search placeholder="Search cases...">
                                <InputPrefix slot>{icon("search")}</InputPrefix>
                            </Input>
                        </div>
                        <Select value=state.status>
                            <option value=ALL>"All Status"</option>
                            {CaseStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect_view()}
                        </Select>
                        <Select value=state.case_type>
                            <option value=ALL>"All Types"</option>
                            {CaseType::all()
                                .into_iter()
                                .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                                .collect_view()}
                        </Select>
                        <Show when=move || !state.filter().is_empty()>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| state.clear()
                            >
                                {icon("x")}
                                " Clear Filters"
                            </Button>
                        </Show>
                    </div>
                </Card>

                <div class="case-list">
                    <For
                        each=move || filtered.get().into_iter().enumerate()
                        key=|(_, case)| case.id
                        children=move |(index, case)| view! { <CaseCard case=case index=index /> }
                    />
                </div>

                <Show when=move || filtered.with(|cases| cases.is_empty())>
                    <Card class="empty-state">
                        <div class="empty-state__icon">{icon("file-text")}</div>
                        <h3>"No cases found"</h3>
                        <p>"Try adjusting your search or filter criteria"</p>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| state.clear()>
                            "Clear Filters"
                        </Button>
                    </Card>
                </Show>
            </div>
        </PageFrame>
    }
}
