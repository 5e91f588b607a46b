mod components;
mod hooks;
mod services;

use backend::StoreConfig;
use log::LevelFilter;
use yew::prelude::*;

use components::header::Header;
use components::plant_form_modal::PlantFormModal;
use components::plant_grid::PlantGrid;
use hooks::use_plants::use_plants;

#[function_component(App)]
fn app() -> Html {
    let plants = use_plants(StoreConfig::default());
    let state = &plants.state;
    let actions = &plants.actions;

    html! {
        <>
            <Header
                plant_count={state.cards.len()}
                disabled={state.saving}
                on_add={actions.open_create.clone()}
            />
            <main class="container my-4">
                // errors raised while the dialog is closed (e.g. a failed delete)
                {match (&state.error, state.editor_open) {
                    (Some(error), false) => html! {
                        <div class="alert alert-danger">{error.clone()}</div>
                    },
                    _ => html! {},
                }}
                <PlantGrid
                    cards={state.cards.clone()}
                    show_empty_state={state.show_empty_state}
                    actions_disabled={state.saving}
                    on_edit={actions.open_edit.clone()}
                    on_delete={actions.delete.clone()}
                />
            </main>
            <PlantFormModal
                is_open={state.editor_open}
                mode={state.editor_mode.clone()}
                error={state.error.clone()}
                saving={state.saving}
                refs={plants.form_refs.clone()}
                on_save={actions.save.clone()}
                on_close={actions.close_editor.clone()}
            />
        </>
    }
}

fn main() {
    services::logging::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    yew::Renderer::<App>::new().render();
}
