use leptos::prelude::*;

/// Open/collapsed state shared by everything under a [`SidebarProvider`].
#[derive(Debug, Clone, Copy)]
pub struct SidebarContext {
    open: RwSignal<bool>,
}

impl SidebarContext {
    pub fn new(open: bool) -> Self {
        Self {
            open: RwSignal::new(open),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn set_open(&self, open: bool) {
        self.open.set(open);
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }
}

/// The [`SidebarContext`] of the enclosing provider, if there is one.
pub fn use_sidebar() -> Option<SidebarContext> {
    use_context::<SidebarContext>()
}

/// Outer wrapper of the sidebar shell. Owns the open state and exposes it to
/// its children through context.
#[component]
pub fn SidebarProvider(
    #[prop(default = true)] default_open: bool,
    children: Children,
) -> impl IntoView {
    let ctx = SidebarContext::new(default_open);
    provide_context(ctx);

    let state = move || if ctx.is_open() { "expanded" } else { "collapsed" };

    view! {
        <div class="sidebar-wrapper" data-sidebar-state=state>
            {children()}
        </div>
    }
}

/// Main content region next to the sidebar.
#[component]
pub fn SidebarInset(children: Children) -> impl IntoView {
    view! {
        <main class="sidebar-inset">
            {children()}
        </main>
    }
}

/// The navigation sidebar. `nav` renders the application's own navigation;
/// without it the sidebar is an empty landmark.
#[component]
pub fn AppSidebar(#[prop(optional, into)] nav: ViewFn) -> impl IntoView {
    view! {
        <aside class="app-sidebar" data-sidebar="sidebar">
            {nav.run()}
        </aside>
    }
}

#[component]
pub fn SidebarTrigger() -> impl IntoView {
    let sidebar = use_sidebar();
    let on_click = move |_| {
        if let Some(sidebar) = sidebar {
            sidebar.toggle();
        }
    };

    view! {
        <button class="sidebar-trigger" type="button" aria-label="Toggle sidebar" on:click=on_click>
            "☰"
        </button>
    }
}
