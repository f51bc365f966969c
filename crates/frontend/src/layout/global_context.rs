use leptos::prelude::*;

/// UI state shared by the shell: the mobile navigation drawer
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub mobile_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            mobile_menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }

    pub fn close_mobile_menu(&self) {
        self.mobile_menu_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
