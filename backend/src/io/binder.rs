//! # Plant Binder
//!
//! Bridges the form and list widgets to the `PlantService`.
//!
//! Flow for every user action: read the form, call the store, re-render the
//! full list from the store's current contents. Nothing is cached between
//! renders and no diffing is done.
//!
//! The editing dialog is either in `EditorMode::Create` or
//! `EditorMode::Edit(id)`. The mode is set by the action that opened the
//! dialog and always returns to `Create` when the dialog closes. While a
//! save is pending (e.g. waiting on the photo), the dialog cannot be
//! reopened and a second save is refused.

use log::{debug, info, warn};
use std::cell::{Cell, RefCell};

use crate::domain::{validate_form, PlantService, PlantServiceError, PlantValidationError};
use crate::storage::KeyValueStorage;
use shared::{EditorMode, Plant, PlantFormFields, PlantId};

use super::mappers::plant_mapper::PlantMapper;
use super::surfaces::{PhotoDecodeError, PhotoDecoder, PlantFormSurface, PlantListSurface};

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] PlantValidationError),
    #[error("Não foi possível carregar a foto: {0}")]
    Photo(#[from] PhotoDecodeError),
    #[error(transparent)]
    Store(#[from] PlantServiceError),
    #[error("Um salvamento já está em andamento.")]
    InProgress,
}

pub struct PlantBinder<S, L, F, D> {
    service: PlantService<S>,
    list: L,
    form: F,
    photo_decoder: D,
    mode: RefCell<EditorMode>,
    saving: Cell<bool>,
}

impl<S, L, F, D> PlantBinder<S, L, F, D>
where
    S: KeyValueStorage,
    L: PlantListSurface,
    F: PlantFormSurface,
    D: PhotoDecoder<Photo = F::Photo>,
{
    pub fn new(service: PlantService<S>, list: L, form: F, photo_decoder: D) -> Self {
        Self {
            service,
            list,
            form,
            photo_decoder,
            mode: RefCell::new(EditorMode::Create),
            saving: Cell::new(false),
        }
    }

    pub fn service(&self) -> &PlantService<S> {
        &self.service
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn mode(&self) -> EditorMode {
        self.mode.borrow().clone()
    }

    pub fn is_saving(&self) -> bool {
        self.saving.get()
    }

    /// First render; call once the display surface exists
    pub fn initialize(&self) -> usize {
        let count = self.render_plants();
        info!("Plant inventory initialized with {} plants", count);
        count
    }

    /// Open the dialog with an empty form for a new plant
    pub fn open_for_create(&self) {
        if self.is_saving() {
            debug!("Ignoring open request while a save is pending");
            return;
        }
        self.form.reset();
        self.set_mode(EditorMode::Create);
        self.form.open(&EditorMode::Create);
    }

    /// Open the dialog pre-filled with an existing plant
    pub fn open_for_edit(&self, id: &PlantId) -> Result<(), PlantServiceError> {
        if self.is_saving() {
            debug!("Ignoring edit request for {} while a save is pending", id);
            return Ok(());
        }
        let plant = match self.service.find(id) {
            Ok(Some(plant)) => plant,
            Ok(None) => {
                let err = PlantServiceError::NotFound(id.clone());
                self.form.report_error(&err.to_string());
                return Err(err);
            }
            Err(e) => {
                warn!("Could not load plant {} for editing: {}", id, e);
                self.form.report_error(&e.to_string());
                return Err(e);
            }
        };

        self.form.reset();
        self.form.load_fields(&PlantFormFields::from_plant(&plant));
        let mode = EditorMode::Edit(plant.id);
        self.form.open(&mode);
        self.set_mode(mode);
        Ok(())
    }

    /// Close the dialog, clear the form and go back to create mode
    pub fn close_editor(&self) {
        self.form.reset();
        self.form.close();
        self.set_mode(EditorMode::Create);
    }

    /// Validate the form, decode the photo if one was chosen, persist, then
    /// re-render and close the dialog.
    ///
    /// Any failure is reported on the form and leaves the store untouched.
    /// A call made while another save is pending returns `InProgress`.
    pub async fn handle_save(&self) -> Result<Plant, SaveError> {
        if self.saving.replace(true) {
            return Err(SaveError::InProgress);
        }
        let result = self.save_form().await;
        self.saving.set(false);
        result
    }

    async fn save_form(&self) -> Result<Plant, SaveError> {
        let fields = self.form.read_fields();
        let mut draft = match validate_form(&fields) {
            Ok(draft) => draft,
            Err(e) => {
                warn!("Plant form rejected: {:?}", e);
                self.form.report_error(&e.to_string());
                return Err(e.into());
            }
        };

        // captured before the await so closing the dialog mid-decode cannot
        // turn an edit into a create
        let editing_id = self.mode.borrow().editing_id().cloned();

        draft.image = match self.form.selected_photo() {
            Some(photo) => match self.photo_decoder.decode(photo).await {
                Ok(data_url) => Some(data_url),
                Err(e) => {
                    warn!("Photo decode failed: {}", e);
                    let err = SaveError::from(e);
                    self.form.report_error(&err.to_string());
                    return Err(err);
                }
            },
            None => match self.existing_image(editing_id.as_ref()) {
                Ok(image) => image,
                Err(e) => {
                    warn!("Failed to read the stored photo: {}", e);
                    self.form.report_error(&e.to_string());
                    return Err(e.into());
                }
            },
        };
        draft.id = editing_id;

        let plant = match self.service.save(draft) {
            Ok(plant) => plant,
            Err(e) => {
                warn!("Failed to save plant: {}", e);
                self.form.report_error(&e.to_string());
                return Err(e.into());
            }
        };

        self.render_plants();
        self.close_editor();
        Ok(plant)
    }

    /// Delete a plant and re-render; closes the dialog if it was editing it
    pub fn delete_plant(&self, id: &PlantId) -> Result<bool, PlantServiceError> {
        let removed = self.service.delete(id)?;
        let was_editing = self.mode.borrow().editing_id() == Some(id);
        if was_editing {
            self.close_editor();
        }
        self.render_plants();
        Ok(removed)
    }

    /// Re-render every card from the store; returns the number of plants
    pub fn render_plants(&self) -> usize {
        let plants = self.service.get_all();

        if plants.is_empty() {
            self.list.replace_cards(Vec::new());
            self.list.show_empty_state(true);
            debug!("Rendered empty plant list");
            return 0;
        }

        self.list.show_empty_state(false);
        self.list
            .replace_cards(PlantMapper::to_cards(&plants, self.service.now()));
        debug!("Rendered {} plant cards", plants.len());
        plants.len()
    }

    fn existing_image(&self, editing_id: Option<&PlantId>) -> Result<Option<String>, PlantServiceError> {
        let Some(id) = editing_id else {
            return Ok(None);
        };
        Ok(self.service.find(id)?.and_then(|plant| plant.image))
    }

    fn set_mode(&self, mode: EditorMode) {
        *self.mode.borrow_mut() = mode;
    }
}
