mod api;
mod form;
mod listing;
mod models;
mod navigation;
mod page_meta;
mod routes;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod state;

/// Page object the server embedded into the `#app` mount point.
#[cfg(target_arch = "wasm32")]
fn embedded_page() -> Option<models::Page> {
    let element = web_sys::window()?.document()?.get_element_by_id("app")?;
    let raw = element.get_attribute("data-page")?;

    match serde_json::from_str(&raw) {
        Ok(page) => Some(page),
        Err(err) => {
            leptos::logging::error!("embedded page did not decode: {err}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let initial = embedded_page();
    leptos::mount::mount_to_body(move || view! { <app::App initial=initial /> });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Клиент собирается trunk'ом под wasm32; на хосте остаются только unit-тесты.
}
