use leptos::prelude::*;
use pos_console::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("failed to initialise logging: {err}");
    }
    leptos::mount::mount_to_body(|| view! { <App /> });
}
