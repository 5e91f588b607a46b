use shared::EditorMode;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::plant_surfaces::PlantFormRefs;

#[derive(Properties, PartialEq)]
pub struct PlantFormModalProps {
    pub is_open: bool,
    pub mode: EditorMode,
    pub error: Option<String>,
    pub saving: bool,
    pub refs: PlantFormRefs,
    pub on_save: Callback<()>,
    pub on_close: Callback<()>,
}

/// Create/edit dialog.
///
/// Stays mounted while hidden: the inputs are uncontrolled and the binder
/// reads and fills them through `refs`, so they must exist before opening.
#[function_component(PlantFormModal)]
pub fn plant_form_modal(props: &PlantFormModalProps) -> Html {
    let on_submit = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let saving = props.saving;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !saving {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let title = match props.mode {
        EditorMode::Create => "🌱 Nova Planta",
        EditorMode::Edit(_) => "✏️ Editar Planta",
    };

    html! {
        <div
            class={classes!("plant-modal-backdrop", (!props.is_open).then_some("d-none"))}
            onclick={on_backdrop_click}
        >
            <div class="plant-modal" onclick={on_modal_click}>
                <div class="plant-modal-content">
                    <h3 class="plant-modal-title">{title}</h3>

                    {if let Some(error) = props.error.clone() {
                        html! {
                            <div class="alert alert-danger plant-form-error">
                                {error}
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <form class="plant-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="common-name">{"Nome popular *"}</label>
                            <input
                                id="common-name"
                                type="text"
                                class="form-control"
                                placeholder="Ex.: Acerola"
                                ref={props.refs.common_name.clone()}
                                disabled={props.saving}
                            />
                        </div>

                        <div class="form-group">
                            <label for="scientific-name">{"Nome científico"}</label>
                            <input
                                id="scientific-name"
                                type="text"
                                class="form-control"
                                placeholder="Ex.: Malpighia emarginata"
                                ref={props.refs.scientific_name.clone()}
                                disabled={props.saving}
                            />
                        </div>

                        <div class="form-group">
                            <label for="average-production">{"Produção média (Kg/safra) *"}</label>
                            <input
                                id="average-production"
                                type="number"
                                step="0.1"
                                min="0"
                                class="form-control"
                                ref={props.refs.average_production.clone()}
                                disabled={props.saving}
                            />
                        </div>

                        <div class="form-group">
                            <label for="planting-date">{"Data de plantio *"}</label>
                            <input
                                id="planting-date"
                                type="date"
                                class="form-control"
                                ref={props.refs.planting_date.clone()}
                                disabled={props.saving}
                            />
                        </div>

                        <div class="form-group">
                            <label for="plant-photo">{"Foto"}</label>
                            <input
                                id="plant-photo"
                                type="file"
                                accept="image/*"
                                class="form-control"
                                ref={props.refs.photo.clone()}
                                disabled={props.saving}
                            />
                        </div>

                        <div class="plant-modal-buttons">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_cancel}
                                disabled={props.saving}
                            >
                                {"Cancelar"}
                            </button>
                            <button
                                type="submit"
                                class="btn btn-success"
                                disabled={props.saving}
                            >
                                {if props.saving { "Salvando..." } else { "Salvar" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
