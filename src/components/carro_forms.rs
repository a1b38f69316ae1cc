//! Carro Forms Component
//!
//! Add (with optional image), update, delete and find-by-model forms.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

fn delete_prompt(modelo: &str) -> String {
    format!("Confirma exclusão do modelo \"{}\" ?", modelo)
}

/// Blocking browser confirmation; no window means no consent.
fn confirm_delete(modelo: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&delete_prompt(modelo)).ok())
        .unwrap_or(false)
}

#[component]
pub fn CarroForms() -> impl IntoView {
    let ctx = use_app_context();

    let (add_modelo, set_add_modelo) = signal(String::new());
    let (add_preco, set_add_preco) = signal(String::new());
    let (update_modelo, set_update_modelo) = signal(String::new());
    let (update_preco, set_update_preco) = signal(String::new());
    let (delete_modelo, set_delete_modelo) = signal(String::new());
    let (find_modelo, set_find_modelo) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (modelo, preco) = (add_modelo.get(), add_preco.get());
        let image = ctx.view.selected_file();
        let session = ctx.session();
        spawn_local(async move {
            session.save(&modelo, &preco, image.as_ref()).await;
        });
    };

    let on_update = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (modelo, preco) = (update_modelo.get(), update_preco.get());
        let session = ctx.session();
        spawn_local(async move {
            session.update(&modelo, &preco).await;
        });
    };

    let on_delete = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let modelo = delete_modelo.get();
        let session = ctx.session();
        spawn_local(async move {
            session.delete(&modelo, confirm_delete).await;
        });
    };

    let on_find = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let modelo = find_modelo.get();
        let session = ctx.session();
        spawn_local(async move {
            session.get_by_model(&modelo).await;
        });
    };

    view! {
        <div class="carro-forms">
            <form id="add-carro-form" class="carro-form" on:submit=on_add>
                <h2>"Adicionar carro"</h2>
                <input
                    id="modelo"
                    type="text"
                    placeholder="Modelo"
                    prop:value=move || add_modelo.get()
                    on:input=move |ev| set_add_modelo.set(event_target_value(&ev))
                />
                <input
                    id="preco"
                    type="number"
                    step="0.01"
                    placeholder="Preço"
                    prop:value=move || add_preco.get()
                    on:input=move |ev| set_add_preco.set(event_target_value(&ev))
                />
                <input id="image" type="file" accept="image/*" node_ref=ctx.view.file_input />
                <button type="submit">"Salvar"</button>
            </form>

            <form id="update-carro-form" class="carro-form" on:submit=on_update>
                <h2>"Atualizar preço"</h2>
                <input
                    id="update-modelo"
                    type="text"
                    placeholder="Modelo"
                    prop:value=move || update_modelo.get()
                    on:input=move |ev| set_update_modelo.set(event_target_value(&ev))
                />
                <input
                    id="update-preco"
                    type="number"
                    step="0.01"
                    placeholder="Novo preço"
                    prop:value=move || update_preco.get()
                    on:input=move |ev| set_update_preco.set(event_target_value(&ev))
                />
                <button type="submit">"Atualizar"</button>
            </form>

            <form id="delete-carro-form" class="carro-form" on:submit=on_delete>
                <h2>"Remover carro"</h2>
                <input
                    id="delete-modelo"
                    type="text"
                    placeholder="Modelo"
                    prop:value=move || delete_modelo.get()
                    on:input=move |ev| set_delete_modelo.set(event_target_value(&ev))
                />
                <button type="submit" class="danger">"Deletar"</button>
            </form>

            <form id="get-carro-form" class="carro-form" on:submit=on_find>
                <h2>"Buscar por modelo"</h2>
                <input
                    id="get-modelo"
                    type="text"
                    placeholder="Modelo exato"
                    prop:value=move || find_modelo.get()
                    on:input=move |ev| set_find_modelo.set(event_target_value(&ev))
                />
                <button type="submit">"Buscar"</button>
            </form>
        </div>
    }
}
