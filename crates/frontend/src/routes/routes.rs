use crate::domain::a002_case::ui::list::CaseList;
use crate::domain::a003_annotation::ui::details::DocumentViewer;
use crate::domain::a004_workflow::ui::diagram::WorkflowDiagram;
use crate::layout::Shell;
use crate::system::pages::landing::LandingPage;
use crate::system::pages::not_found::NotFound;
use crate::usecases::u501_simulate_upload::DocumentUpload;
use crate::usecases::u502_translate_document::DocumentTranslation;
use crate::usecases::u503_consult_assistant::VideoCall;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Client-side route table; mirrors `contracts::shared::routing::AppRoute`
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/upload") view=DocumentUpload />
                    <Route path=path!("/document/:id") view=DocumentViewer />
                    <Route path=path!("/translate") view=DocumentTranslation />
                    <Route path=path!("/call") view=VideoCall />
                    <Route path=path!("/workflow") view=WorkflowDiagram />
                    <Route path=path!("/cases") view=CaseList />
                </Routes>
            </Shell>
        </Router>
    }
}
