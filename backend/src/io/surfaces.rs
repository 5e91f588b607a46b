//! Traits for the widgets the binder talks to.

use async_trait::async_trait;
use shared::{EditorMode, PlantCard, PlantFormFields};

/// The plant grid plus its empty-state indicator
pub trait PlantListSurface {
    /// Show or hide the "no plants yet" indicator
    fn show_empty_state(&self, visible: bool);

    /// Replace every rendered card with `cards`, in order
    fn replace_cards(&self, cards: Vec<PlantCard>);
}

/// The create/edit form and the dialog that hosts it
pub trait PlantFormSurface {
    /// Handle to a photo file chosen by the user
    type Photo: 'static;

    /// Current text values of the form fields
    fn read_fields(&self) -> PlantFormFields;

    /// Photo file chosen in the form, if any
    fn selected_photo(&self) -> Option<Self::Photo>;

    /// Fill the form with an existing plant's values
    fn load_fields(&self, fields: &PlantFormFields);

    /// Clear every field, including the photo input
    fn reset(&self);

    /// Show the dialog in the given mode
    fn open(&self, mode: &EditorMode);

    /// Hide the dialog
    fn close(&self);

    /// Show a blocking message to the user
    fn report_error(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhotoDecodeError {
    #[error("failed to read photo: {0}")]
    Read(String),
    #[error("photo file is empty")]
    Empty,
}

/// Turns a chosen photo file into text that can be stored (a data URL).
///
/// Decoding is the only suspend point of the save flow.
#[async_trait(?Send)]
pub trait PhotoDecoder {
    type Photo: 'static;

    async fn decode(&self, photo: Self::Photo) -> Result<String, PhotoDecodeError>;
}
