use crate::sidebar::{AppSidebar, SidebarInset, SidebarProvider};
use crate::visibility::{use_sidebar_rules, SidebarRules, SidebarVisibility};
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

/// The router's pathname as an optional path; an empty pathname counts as absent.
pub fn present_path(pathname: String) -> Option<String> {
    (!pathname.is_empty()).then_some(pathname)
}

/// Tracks the sidebar decision for `pathname`, re-evaluated whenever the path
/// changes. Only an actual switch between shown and hidden is logged at debug.
pub fn use_sidebar_visibility(
    pathname: Signal<Option<String>>,
    rules: SidebarRules,
) -> Memo<SidebarVisibility> {
    Memo::new(move |previous: Option<&SidebarVisibility>| {
        let current = pathname.with(|path| rules.visibility(path.as_deref()));
        log::trace!("sidebar {current:?} for {:?}", pathname.get_untracked());
        if previous.is_some_and(|previous| *previous != current) {
            log::debug!("sidebar switched to {current:?}");
        }
        current
    })
}

/// Sidebar shell driven by an explicit path signal.
///
/// The sidebar is left out of the tree entirely when `rules` (or the rules in
/// context, or the default POS detail rule) match the current path. The
/// children always render inside the inset. An absent path shows the sidebar.
/// `sidebar` fills the sidebar with navigation when it is shown.
#[component]
pub fn SidebarShell(
    #[prop(into)] pathname: Signal<Option<String>>,
    #[prop(optional)] rules: Option<SidebarRules>,
    #[prop(optional, into)] sidebar: ViewFn,
    children: Children,
) -> impl IntoView {
    let rules = rules.unwrap_or_else(use_sidebar_rules);
    let visibility = use_sidebar_visibility(pathname, rules);

    view! {
        <SidebarProvider>
            {move || {
                visibility
                    .get()
                    .is_shown()
                    .then(|| view! { <AppSidebar nav=sidebar.clone() /> })
            }}
            <SidebarInset>{children()}</SidebarInset>
        </SidebarProvider>
    }
}

/// Chrome for the authenticated area, reading the path from the router.
///
/// Access control happens before this renders; the layout only decides
/// whether the sidebar is part of the page.
#[component]
pub fn ProtectedLayout(
    #[prop(optional, into)] sidebar: ViewFn,
    children: Children,
) -> impl IntoView {
    let location = use_location();
    let pathname = Signal::derive(move || present_path(location.pathname.get()));
    let rules = use_sidebar_rules();

    view! {
        <SidebarShell pathname=pathname rules=rules sidebar=sidebar>
            {children()}
        </SidebarShell>
    }
}

/// [`ProtectedLayout`] around the router outlet, for use as a parent route view.
#[component]
pub fn ProtectedOutlet(#[prop(optional, into)] sidebar: ViewFn) -> impl IntoView {
    view! {
        <ProtectedLayout sidebar=sidebar>
            <Outlet />
        </ProtectedLayout>
    }
}
