use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use protected_layout::prelude::*;

fn render_with(path: Option<&str>, rules: Option<SidebarRules>) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let pathname = Signal::stored(path.map(str::to_string));
        match rules {
            Some(rules) => view! {
                <SidebarShell pathname=pathname rules=rules>
                    <p class="page">"Order 123"</p>
                </SidebarShell>
            }
            .to_html(),
            None => view! {
                <SidebarShell pathname=pathname>
                    <p class="page">"Order 123"</p>
                </SidebarShell>
            }
            .to_html(),
        }
    })
}

fn render(path: Option<&str>) -> String {
    render_with(path, None)
}

fn has_sidebar(html: &str) -> bool {
    html.contains(r#"data-sidebar="sidebar""#)
}

#[test]
fn test_pos_detail_hides_sidebar() {
    let html = render(Some("/pos/123"));
    assert!(!has_sidebar(&html), "{html}");
    assert!(html.contains("Order 123"));
    assert!(html.contains(r#"class="sidebar-inset""#));
    assert!(html.contains(r#"class="sidebar-wrapper""#));
}

#[test]
fn test_nested_pos_path_shows_sidebar() {
    assert!(has_sidebar(&render(Some("/pos/123/extra"))));
}

#[test]
fn test_pos_index_shows_sidebar() {
    assert!(has_sidebar(&render(Some("/pos"))));
}

#[test]
fn test_dashboard_shows_sidebar() {
    let html = render(Some("/dashboard"));
    assert!(has_sidebar(&html));
    assert!(html.contains("Order 123"));
}

#[test]
fn test_missing_path_shows_sidebar() {
    assert!(has_sidebar(&render(None)));
}

#[test]
fn test_sidebar_precedes_inset() {
    let html = render(Some("/dashboard"));
    let sidebar = html.find("app-sidebar").unwrap();
    let inset = html.find("sidebar-inset").unwrap();
    assert!(sidebar < inset, "{html}");
}

#[test]
fn test_same_path_renders_same_tree() {
    assert_eq!(render(Some("/pos/7")), render(Some("/pos/7")));
    assert_eq!(render(Some("/reports")), render(Some("/reports")));
}

#[test]
fn test_explicit_rules_override_default() {
    let html = render_with(Some("/pos/123"), Some(SidebarRules::empty()));
    assert!(has_sidebar(&html));

    let kiosk = SidebarRules::empty().with_hidden_path("/kiosk/:station").unwrap();
    let html = render_with(Some("/kiosk/3"), Some(kiosk));
    assert!(!has_sidebar(&html));
}

#[test]
fn test_rules_from_context() {
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_sidebar_rules(SidebarRules::default().with_hidden_path("/kiosk/:station").unwrap());
        let pathname = Signal::stored(Some("/kiosk/3".to_string()));
        view! {
            <SidebarShell pathname=pathname>
                <p>"Kiosk"</p>
            </SidebarShell>
        }
        .to_html()
    });
    assert!(!has_sidebar(&html));
    assert!(html.contains("Kiosk"));
}

#[test]
fn test_provider_starts_expanded() {
    let html = render(Some("/dashboard"));
    assert!(html.contains(r#"data-sidebar-state="expanded""#), "{html}");
}

#[test]
fn test_provider_can_start_collapsed() {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! {
            <SidebarProvider default_open=false>
                <SidebarTrigger />
                <SidebarInset>"content"</SidebarInset>
            </SidebarProvider>
        }
        .to_html()
    });
    assert!(html.contains(r#"data-sidebar-state="collapsed""#), "{html}");
    assert!(html.contains("sidebar-trigger"));
}

#[test]
fn test_sidebar_navigation_follows_visibility() {
    let render_nav = |path: &str| {
        let owner = Owner::new();
        owner.with(|| {
            let pathname = Signal::stored(Some(path.to_string()));
            view! {
                <SidebarShell pathname=pathname sidebar=|| view! { <nav>"Menu"</nav> }>
                    <p>"Page"</p>
                </SidebarShell>
            }
            .to_html()
        })
    };

    let shown = render_nav("/inventory");
    assert!(shown.contains("Menu"), "{shown}");

    let hidden = render_nav("/pos/9");
    assert!(!hidden.contains("Menu"), "{hidden}");
    assert!(hidden.contains("Page"));
}
