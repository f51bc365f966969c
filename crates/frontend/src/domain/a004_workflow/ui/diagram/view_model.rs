use super::geometry::Grab;
use crate::layout::toast_service::ToastService;
use contracts::domain::a004_workflow::{
    employment_workflow, Position, WorkflowGraph, WorkflowNode, WorkflowNodeId,
};
use leptos::logging::log;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub node: WorkflowNodeId,
    pub grab: Grab,
    pub moved: bool,
}

#[derive(Clone, Copy)]
pub struct WorkflowVm {
    pub graph: RwSignal<WorkflowGraph>,
    pub selected: RwSignal<Option<WorkflowNodeId>>,
    pub drag: RwSignal<Option<Drag>>,
    pub connect_mode: RwSignal<bool>,
    pub connect_source: RwSignal<Option<WorkflowNodeId>>,
    pub ai_open: RwSignal<bool>,
    toasts: ToastService,
}

impl WorkflowVm {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            graph: RwSignal::new(employment_workflow()),
            selected: RwSignal::new(None),
            drag: RwSignal::new(None),
            connect_mode: RwSignal::new(false),
            connect_source: RwSignal::new(None),
            ai_open: RwSignal::new(false),
            toasts,
        }
    }

    pub fn selected_node(&self) -> Option<WorkflowNode> {
        let id = self.selected.get()?;
        self.graph.with(|g| g.node(id).cloned())
    }

    pub fn begin_drag(&self, node: WorkflowNodeId, pointer: Position) {
        let Some(origin) = self.graph.with_untracked(|g| g.node(node).map(|n| n.position)) else {
            return;
        };
        self.drag.set(Some(Drag {
            node,
            grab: Grab::at(pointer, origin),
            moved: false,
        }));
    }

    pub fn drag_to(&self, pointer: Position) {
        let Some(mut drag) = self.drag.get_untracked() else {
            return;
        };
        let position = drag.grab.follow(pointer);
        self.graph.update(|g| {
            let _ = g.move_node(drag.node, position);
        });
        if !drag.moved {
            drag.moved = true;
            self.drag.set(Some(drag));
        }
    }

    /// A press and release without movement counts as a click
    pub fn end_drag(&self) {
        let Some(drag) = self.drag.get_untracked() else {
            return;
        };
        self.drag.set(None);
        if drag.moved {
            log!("node {} dropped", drag.node);
        } else {
            self.click_node(drag.node);
        }
    }

    pub fn toggle_connect_mode(&self) {
        self.connect_mode.update(|on| *on = !*on);
        self.connect_source.set(None);
    }

    /// Opens the details dialog, or picks source then target in connect mode
    pub fn click_node(&self, id: WorkflowNodeId) {
        if !self.connect_mode.get_untracked() {
            self.selected.set(Some(id));
            return;
        }
        let Some(source) = self.connect_source.get_untracked() else {
            self.connect_source.set(Some(id));
            return;
        };
        self.connect_source.set(None);

        let result = self
            .graph
            .try_update(|g| g.connect(source, id).map(|e| e.id.clone()));
        match result {
            Some(Ok(edge)) => log::info!("edge {} added", edge),
            Some(Err(e)) => {
                log::warn!("connect rejected: {}", e);
                self.toasts.error("Cannot connect milestones", e.to_string());
            }
            None => {}
        }
    }

    pub fn ask_ai(&self) {
        self.selected.set(None);
        self.ai_open.set(true);
    }
}
