use backend::{initialize_store, PlantBinder, SaveError, StoreConfig};
use shared::{EditorMode, PlantCard, PlantId};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::plant_surfaces::{PlantFormRefs, YewFormSurface, YewListSurface};
use crate::services::browser_storage::BrowserStorage;
use crate::services::logging::Logger;
use crate::services::photo::FilePhotoDecoder;

pub type BrowserBinder = PlantBinder<BrowserStorage, YewListSurface, YewFormSurface, FilePhotoDecoder>;

#[derive(Clone, PartialEq)]
pub struct PlantsState {
    pub cards: Vec<PlantCard>,
    pub show_empty_state: bool,
    pub editor_open: bool,
    pub editor_mode: EditorMode,
    pub error: Option<String>,
    pub saving: bool,
}

#[derive(Clone, PartialEq)]
pub struct UsePlantsActions {
    pub open_create: Callback<()>,
    pub open_edit: Callback<PlantId>,
    pub close_editor: Callback<()>,
    pub save: Callback<()>,
    pub delete: Callback<PlantId>,
}

pub struct UsePlantsResult {
    pub state: PlantsState,
    pub actions: UsePlantsActions,
    pub form_refs: PlantFormRefs,
}

/// Owns the binder for the page and exposes its state to components.
///
/// The binder is built once, on first render, with the store for `config`.
#[hook]
pub fn use_plants(config: StoreConfig) -> UsePlantsResult {
    let cards = use_state(Vec::<PlantCard>::new);
    let show_empty_state = use_state(|| false);
    let editor_open = use_state(|| false);
    let editor_mode = use_state(EditorMode::default);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let form_refs = use_memo((), |_| PlantFormRefs::default());

    let binder: Rc<BrowserBinder> = {
        let list = YewListSurface {
            cards: cards.clone(),
            show_empty_state: show_empty_state.clone(),
        };
        let form = YewFormSurface {
            refs: (*form_refs).clone(),
            is_open: editor_open.clone(),
            mode: editor_mode.clone(),
            error: error.clone(),
        };
        use_memo((), move |_| {
            let service = initialize_store(BrowserStorage::new(), config);
            PlantBinder::new(service, list, form, FilePhotoDecoder)
        })
    };

    // first render only, once the grid container is mounted
    {
        let binder = binder.clone();
        use_effect_with((), move |_| {
            binder.initialize();
            || ()
        });
    }

    let open_create = {
        let binder = binder.clone();
        Callback::from(move |_| {
            Logger::debug_with_component("PlantForm", "Opening form for a new plant");
            binder.open_for_create();
        })
    };

    let open_edit = {
        let binder = binder.clone();
        Callback::from(move |id: PlantId| {
            Logger::debug_with_component("PlantForm", &format!("Opening form for plant {}", id));
            if let Err(e) = binder.open_for_edit(&id) {
                Logger::warn_with_component("PlantForm", &e.to_string());
            }
        })
    };

    let close_editor = {
        let binder = binder.clone();
        Callback::from(move |_| binder.close_editor())
    };

    let save = {
        let binder = binder.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            // a second click while the photo is still being read is ignored
            if binder.is_saving() {
                return;
            }
            saving.set(true);

            let binder = binder.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match binder.handle_save().await {
                    Ok(plant) => Logger::info_with_component(
                        "PlantForm",
                        &format!("Saved plant {} ({})", plant.common_name, plant.id),
                    ),
                    Err(SaveError::InProgress) => return,
                    Err(e) => Logger::warn_with_component("PlantForm", &format!("Save aborted: {}", e)),
                }
                saving.set(false);
            });
        })
    };

    let delete = {
        let binder = binder.clone();
        Callback::from(move |id: PlantId| {
            if binder.is_saving() {
                return;
            }
            if !gloo::dialogs::confirm("Deseja remover esta planta?") {
                return;
            }
            if let Err(e) = binder.delete_plant(&id) {
                Logger::error_with_component("PlantGrid", &format!("Failed to delete plant {}: {}", id, e));
                binder.form().error.set(Some(e.to_string()));
            }
        })
    };

    UsePlantsResult {
        state: PlantsState {
            cards: (*cards).clone(),
            show_empty_state: *show_empty_state,
            editor_open: *editor_open,
            editor_mode: (*editor_mode).clone(),
            error: (*error).clone(),
            saving: *saving,
        },
        actions: UsePlantsActions {
            open_create,
            open_edit,
            close_editor,
            save,
            delete,
        },
        form_refs: (*form_refs).clone(),
    }
}
