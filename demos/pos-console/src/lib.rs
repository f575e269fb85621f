use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{ParentRoute, Route, Router, Routes, A};
use leptos_router::hooks::use_params_map;
use leptos_router::path;
use protected_layout::prelude::*;

#[component]
pub fn PosNav() -> impl IntoView {
    view! {
        <nav class="pos-nav">
            <SidebarTrigger />
            <A href="/dashboard">"Dashboard"</A>
            <A href="/pos">"Points of sale"</A>
            <A href="/inventory">"Inventory"</A>
        </nav>
    }
}

#[component]
pub fn DashboardView() -> impl IntoView {
    view! { <h1>"Dashboard"</h1> }
}

#[component]
pub fn InventoryView() -> impl IntoView {
    view! { <h1>"Inventory"</h1> }
}

#[component]
pub fn PosListView() -> impl IntoView {
    view! {
        <h1>"Points of sale"</h1>
        <ul>
            <li><A href="/pos/1">"Main bar"</A></li>
            <li><A href="/pos/2">"Terrace"</A></li>
        </ul>
    }
}

/// Full-screen terminal for one station; the layout drops the sidebar here.
#[component]
pub fn PosTerminalView() -> impl IntoView {
    let params = use_params_map();
    let station = move || params.read().get("id").unwrap_or_default();

    view! {
        <h1>"Station " {station}</h1>
        <A href=move || format!("/pos/{}/receipt", station())>"Receipt"</A>
    }
}

#[component]
pub fn ReceiptView() -> impl IntoView {
    let params = use_params_map();
    let station = move || params.read().get("id").unwrap_or_default();

    view! { <h1>"Receipt for station " {station}</h1> }
}

#[component]
pub fn NotFoundView() -> impl IntoView {
    view! { <h1>"404"</h1> }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_sidebar_rules(SidebarRules::default());

    view! {
        <Title text="POS Console" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <Router>
            <Routes fallback=|| view! { <NotFoundView /> }>
                <ParentRoute path=path!("") view=|| view! { <ProtectedOutlet sidebar=|| view! { <PosNav /> } /> }>
                    <Route path=path!("") view=DashboardView />
                    <Route path=path!("/dashboard") view=DashboardView />
                    <Route path=path!("/inventory") view=InventoryView />
                    <Route path=path!("/pos") view=PosListView />
                    <Route path=path!("/pos/:id") view=PosTerminalView />
                    <Route path=path!("/pos/:id/receipt") view=ReceiptView />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
