//! Todo Panel Component
//!
//! Dashboard card with the in-memory todo list. Nothing here outlives the
//! page.

use leptos::prelude::*;
use login_core::{adds_on_key, TodoList};

use crate::context::use_app_context;

#[component]
pub fn TodoPanel() -> impl IntoView {
    let ctx = use_app_context();

    let todos = RwSignal::new(TodoList::new());
    let (new_todo, set_new_todo) = signal(String::new());

    let add_todo = move || {
        let text = new_todo.get_untracked();
        if let Some(notice) = todos.try_update(|list| list.add(&text)).flatten() {
            set_new_todo.set(String::new());
            ctx.notify(notice);
        }
    };

    let delete_todo = move |index: usize| {
        if let Some((removed, notice)) = todos.try_update(|list| list.remove(index)).flatten() {
            log::debug!("[DASHBOARD] Removed todo #{}: {}", index, removed);
            ctx.notify(notice);
        }
    };

    view! {
        <section class="card">
            <h2>"Todo List"</h2>

            <div class="todo-add-row">
                <input
                    type="text"
                    placeholder="Add a new todo..."
                    prop:value=move || new_todo.get()
                    on:input=move |ev| set_new_todo.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if adds_on_key(&ev.key()) {
                            add_todo();
                        }
                    }
                />
                <button class="primary-btn" on:click=move |_| add_todo()>"+ Add"</button>
            </div>

            <div class="todo-list">
                <For
                    each=move || todos.with(|list| list.items().iter().cloned().enumerate().collect::<Vec<_>>())
                    key=|(index, text)| (*index, text.clone())
                    children=move |(index, text)| {
                        view! {
                            <div class="todo-item">
                                <span>{text}</span>
                                <button class="danger-btn small" on:click=move |_| delete_todo(index)>
                                    "Delete"
                                </button>
                            </div>
                        }
                    }
                />
                {move || todos.with(|list| list.placeholder()).map(|text| view! {
                    <p class="muted center">{text}</p>
                })}
            </div>
        </section>
    }
}
