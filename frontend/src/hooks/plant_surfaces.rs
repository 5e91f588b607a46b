//! yew-backed implementations of the binder's surfaces.
//!
//! Field values are read from and written to the DOM inputs through
//! `NodeRef`s; everything else the binder changes goes through state handles
//! so the components re-render.

use backend::{PlantFormSurface, PlantListSurface};
use shared::{EditorMode, PlantCard, PlantFormFields};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone)]
pub struct YewListSurface {
    pub cards: UseStateHandle<Vec<PlantCard>>,
    pub show_empty_state: UseStateHandle<bool>,
}

impl PlantListSurface for YewListSurface {
    fn show_empty_state(&self, visible: bool) {
        self.show_empty_state.set(visible);
    }

    fn replace_cards(&self, cards: Vec<PlantCard>) {
        self.cards.set(cards);
    }
}

/// DOM inputs of the plant form
#[derive(Clone, Default, PartialEq)]
pub struct PlantFormRefs {
    pub common_name: NodeRef,
    pub scientific_name: NodeRef,
    pub average_production: NodeRef,
    pub planting_date: NodeRef,
    pub photo: NodeRef,
}

impl PlantFormRefs {
    fn text_inputs(&self) -> [&NodeRef; 4] {
        [
            &self.common_name,
            &self.scientific_name,
            &self.average_production,
            &self.planting_date,
        ]
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn set_input_value(node: &NodeRef, value: &str) {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.set_value(value);
    }
}

#[derive(Clone)]
pub struct YewFormSurface {
    pub refs: PlantFormRefs,
    pub is_open: UseStateHandle<bool>,
    pub mode: UseStateHandle<EditorMode>,
    pub error: UseStateHandle<Option<String>>,
}

impl PlantFormSurface for YewFormSurface {
    type Photo = web_sys::File;

    fn read_fields(&self) -> PlantFormFields {
        PlantFormFields {
            common_name: input_value(&self.refs.common_name),
            scientific_name: input_value(&self.refs.scientific_name),
            average_production: input_value(&self.refs.average_production),
            planting_date: input_value(&self.refs.planting_date),
        }
    }

    fn selected_photo(&self) -> Option<web_sys::File> {
        self.refs
            .photo
            .cast::<HtmlInputElement>()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    }

    fn load_fields(&self, fields: &PlantFormFields) {
        set_input_value(&self.refs.common_name, &fields.common_name);
        set_input_value(&self.refs.scientific_name, &fields.scientific_name);
        set_input_value(&self.refs.average_production, &fields.average_production);
        set_input_value(&self.refs.planting_date, &fields.planting_date);
    }

    fn reset(&self) {
        for node in self.refs.text_inputs() {
            set_input_value(node, "");
        }
        // clearing the value also clears the FileList
        set_input_value(&self.refs.photo, "");
        self.error.set(None);
    }

    fn open(&self, mode: &EditorMode) {
        self.mode.set(mode.clone());
        self.is_open.set(true);
    }

    fn close(&self) {
        self.is_open.set(false);
        self.mode.set(EditorMode::Create);
    }

    fn report_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));
    }
}
