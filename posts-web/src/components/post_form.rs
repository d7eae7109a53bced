use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{route_method, route_url};
use crate::api::{self, ApiError};
use crate::form::{Field, FormMode, PostForm, Submission};
use crate::models::Post;
use crate::navigation::{self, VisitOptions};
use crate::state::AppState;

/// Moves the form to its next state. A form whose page was left is dropped
/// and the step is skipped.
fn advance(form: RwSignal<PostForm>, step: impl FnOnce(PostForm) -> PostForm) {
    form.try_update(|current| *current = step(current.clone()));
}

fn field_error(form: RwSignal<PostForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error(field).map(str::to_string))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

/// Shared create and edit form. `post` selects the edit mode.
#[component]
pub(crate) fn PostFormPage(
    state: AppState,
    post: Option<Post>,
    heading: String,
    subtitle: Option<String>,
) -> impl IntoView {
    let initial = match &post {
        Some(post) => PostForm::edit(post),
        None => PostForm::create(),
    };
    let (route_name, id) = match initial.mode() {
        FormMode::Create => ("posts.store", None),
        FormMode::Edit { id } => ("posts.update", Some(id)),
    };
    let submit_url = route_url(route_name, id);
    let submit_method = route_method(route_name);
    let index_url = route_url("posts.index", None);
    let back_url = index_url.clone();

    let form = RwSignal::new(initial);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let (next, fields) = match form.get_untracked().submit() {
            Submission::Send(next, fields) => (next, fields),
            Submission::Blocked(next) => {
                form.set(next);
                return;
            }
        };
        form.set(next);

        let url = submit_url.clone();
        spawn_local(async move {
            match api::submit(submit_method, &url, Some(&fields)).await {
                Ok(page) => navigation::show_page(state, page, VisitOptions::default()),
                Err(ApiError::Validation(errors)) => advance(form, |f| f.rejected(errors)),
                Err(ApiError::NotFound) => navigation::show_error(state, &url, ApiError::NotFound),
                Err(err) => {
                    leptos::logging::error!("submit failed: {err}");
                    advance(form, PostForm::failed);
                }
            }
        });
    };

    let on_input = move |field: Field, value: String| advance(form, |f| f.with_field(field, value));

    view! {
        <section class="post-form">
            <header class="page-header">
                <div>
                    <h1>{heading}</h1>
                    {subtitle.map(|subtitle| view! { <p class="subtitle">{subtitle}</p> })}
                </div>
                <button
                    type="button"
                    class="secondary"
                    on:click=move |_| navigation::go_back(state, back_url.clone())
                >
                    "Back"
                </button>
            </header>

            {move || {
                form.with(PostForm::notice)
                    .map(|notice| view! { <div class="form-notice" role="alert">{notice}</div> })
            }}

            <form on:submit=on_submit>
                <div class="field">
                    <label for="title">"Title"</label>
                    <input
                        id="title"
                        name="title"
                        type="text"
                        required
                        class:invalid=move || form.with(|f| f.error(Field::Title).is_some())
                        prop:value=move || form.with(|f| f.value(Field::Title).to_string())
                        on:input=move |ev| on_input(Field::Title, event_target_value(&ev))
                    />
                    {field_error(form, Field::Title)}
                </div>

                <div class="field">
                    <label for="content">"Content"</label>
                    <textarea
                        id="content"
                        name="content"
                        rows="10"
                        required
                        class:invalid=move || form.with(|f| f.error(Field::Content).is_some())
                        prop:value=move || form.with(|f| f.value(Field::Content).to_string())
                        on:input=move |ev| on_input(Field::Content, event_target_value(&ev))
                    ></textarea>
                    {field_error(form, Field::Content)}
                </div>

                <div class="form-actions">
                    <button type="submit" disabled=move || form.with(|f| !f.can_submit())>
                        {move || form.with(PostForm::submit_label)}
                    </button>
                    <button
                        type="button"
                        class="secondary"
                        disabled=move || form.with(|f| !f.can_cancel())
                        on:click=move |_| navigation::go_back(state, index_url.clone())
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </section>
    }
}
