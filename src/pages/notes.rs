use leptos::*;

use crate::app::{Page, use_services};
use crate::application::NotesService;
use crate::domain::{
    errors::AppResult,
    logging::LogComponent,
    notes::Note,
};
use crate::global_state::{navigate, session};
use crate::log_error;

/// 📝 Private notes of the signed-in user
#[component]
pub fn Notes() -> impl IntoView {
    let services = use_services();
    let notes = create_rw_signal(Vec::<Note>::new());
    let (error, set_error) = create_signal::<Option<String>>(None);
    let (loading, set_loading) = create_signal(false);
    let (title, set_title) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());

    // Every request returns the fresh list; apply it or surface the error.
    let apply = move |result: AppResult<Vec<Note>>| {
        match result {
            Ok(list) => {
                notes.set(list);
                set_error.set(None);
            }
            Err(e) => {
                log_error!(LogComponent::Presentation("Notes"), "{}", e);
                set_error.set(Some(e.to_string()));
            }
        }
        set_loading.set(false);
    };

    let load = {
        let services = services.clone();
        move || {
            let Some(current) = session().get_untracked() else {
                notes.set(Vec::new());
                return;
            };
            let backend = match services.backend() {
                Ok(backend) => backend,
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    return;
                }
            };
            set_loading.set(true);
            spawn_local(async move {
                apply(NotesService::new(backend).list(Some(&current)).await);
            });
        }
    };

    // Reload whenever the signed-in user changes.
    create_effect(move |_| {
        session().with(|_| ());
        load();
    });

    let add = {
        let services = services.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let backend = match services.backend() {
                Ok(backend) => backend,
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    return;
                }
            };
            let current = session().get_untracked();
            let (new_title, new_content) = (title.get_untracked(), content.get_untracked());
            set_loading.set(true);
            spawn_local(async move {
                let result = NotesService::new(backend)
                    .add(current.as_ref(), &new_title, &new_content)
                    .await;
                if result.is_ok() {
                    set_title.set(String::new());
                    set_content.set(String::new());
                }
                apply(result);
            });
        }
    };

    let delete = move |note_id: String| {
        let backend = match services.backend() {
            Ok(backend) => backend,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let current = session().get_untracked();
        set_loading.set(true);
        spawn_local(async move {
            apply(NotesService::new(backend).delete(current.as_ref(), &note_id).await);
        });
    };

    view! {
        <h2>"My Notes"</h2>
        <Show
            when=move || session().with(Option::is_some)
            fallback=|| view! {
                <p>"Sign in to keep private research notes."</p>
                <button on:click=move |_| navigate(Page::Login)>"Sign In"</button>
            }
        >
            <form class="note-form" on:submit=add.clone()>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=title
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Write your note..."
                    prop:value=content
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || loading.get()>"Add Note"</button>
            </form>
            {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
            <Show when=move || loading.get()>
                <p>"Loading..."</p>
            </Show>
            <Show when=move || !loading.get() && notes.with(Vec::is_empty)>
                <p class="empty">"No notes yet."</p>
            </Show>
            <div class="cards">
                <For
                    each=move || notes.get()
                    key=|note| note.id.clone()
                    children={
                        let delete = delete.clone();
                        move |note: Note| {
                            let delete = delete.clone();
                            let id = note.id.clone();
                            view! {
                                <div class="card">
                                    <h3>{note.title}</h3>
                                    <p>{note.content}</p>
                                    <small>{note.created_at}</small>
                                    <button on:click=move |_| delete(id.clone())>"Delete"</button>
                                </div>
                            }
                        }
                    }
                />
            </div>
        </Show>
    }
}
