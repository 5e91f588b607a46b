//! Test doubles for the binder: switchable storage, recording surfaces and a
//! photo decoder that never touches a real file.

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tokio::sync::oneshot;

use crate::io::{PhotoDecodeError, PhotoDecoder, PlantBinder, PlantFormSurface, PlantListSurface};
use crate::storage::{KeyValueStorage, MemoryStorage, StoreConfig};
use crate::initialize_store;
use shared::{EditorMode, PlantCard, PlantFormFields};

/// "Today" for every binder test: 65 days after 2024-01-01
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 6, 0, 0, 0).unwrap()
}

/// Memory storage whose reads or writes can be made to fail, the way a
/// browser does with storage disabled or over quota. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FailingStorage {
    inner: MemoryStorage,
    fail_reads: Rc<Cell<bool>>,
    fail_writes: Rc<Cell<bool>>,
}

impl FailingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStorage for FailingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.get() {
            bail!("SecurityError: storage is disabled");
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            bail!("QuotaExceededError: cannot write '{}'", key);
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if self.fail_writes.get() {
            bail!("QuotaExceededError: cannot remove '{}'", key);
        }
        self.inner.remove_item(key)
    }
}

/// List surface that keeps what was last rendered
#[derive(Default)]
pub struct RecordingList {
    cards: RefCell<Vec<PlantCard>>,
    empty_state: RefCell<Option<bool>>,
}

impl RecordingList {
    pub fn cards(&self) -> Vec<PlantCard> {
        self.cards.borrow().clone()
    }

    /// `None` until the binder has rendered once
    pub fn empty_state_visible(&self) -> Option<bool> {
        *self.empty_state.borrow()
    }
}

impl PlantListSurface for RecordingList {
    fn show_empty_state(&self, visible: bool) {
        *self.empty_state.borrow_mut() = Some(visible);
    }

    fn replace_cards(&self, cards: Vec<PlantCard>) {
        *self.cards.borrow_mut() = cards;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Opened(EditorMode),
    Reset,
    Closed,
}

/// Form surface backed by plain fields; the "photo" is its text content
#[derive(Default)]
pub struct FakeForm {
    fields: RefCell<PlantFormFields>,
    photo: RefCell<Option<String>>,
    errors: RefCell<Vec<String>>,
    events: RefCell<Vec<FormEvent>>,
}

impl FakeForm {
    pub fn fill(&self, fields: PlantFormFields) {
        *self.fields.borrow_mut() = fields;
    }

    pub fn choose_photo(&self, content: &str) {
        *self.photo.borrow_mut() = Some(content.to_string());
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn events(&self) -> Vec<FormEvent> {
        self.events.borrow().clone()
    }
}

impl PlantFormSurface for FakeForm {
    type Photo = String;

    fn read_fields(&self) -> PlantFormFields {
        self.fields.borrow().clone()
    }

    fn selected_photo(&self) -> Option<String> {
        self.photo.borrow().clone()
    }

    fn load_fields(&self, fields: &PlantFormFields) {
        *self.fields.borrow_mut() = fields.clone();
    }

    fn reset(&self) {
        *self.fields.borrow_mut() = PlantFormFields::default();
        *self.photo.borrow_mut() = None;
        self.events.borrow_mut().push(FormEvent::Reset);
    }

    fn open(&self, mode: &EditorMode) {
        self.events.borrow_mut().push(FormEvent::Opened(mode.clone()));
    }

    fn close(&self) {
        self.events.borrow_mut().push(FormEvent::Closed);
    }

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

/// Wraps the text "photo" in a data URL; empty content fails like an empty file.
///
/// `hold_next` keeps the next decode pending until the returned sender
/// fires, standing in for a slow file read. Clones share the gate.
#[derive(Clone, Default)]
pub struct StubPhotoDecoder {
    gate: Rc<RefCell<Option<oneshot::Receiver<()>>>>,
}

impl StubPhotoDecoder {
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.gate.borrow_mut() = Some(gate);
        release
    }
}

#[async_trait(?Send)]
impl PhotoDecoder for StubPhotoDecoder {
    type Photo = String;

    async fn decode(&self, photo: String) -> Result<String, PhotoDecodeError> {
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if photo.is_empty() {
            return Err(PhotoDecodeError::Empty);
        }
        Ok(format!("data:text/plain;base64,{}", photo))
    }
}

pub type TestBinder = PlantBinder<FailingStorage, RecordingList, FakeForm, StubPhotoDecoder>;

pub struct TestEnvironment {
    pub binder: TestBinder,
    /// Shares its map and failure switches with the binder's store
    pub storage: FailingStorage,
    /// Shares its gate with the binder's decoder
    pub photos: StubPhotoDecoder,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let storage = FailingStorage::new();
        let service = initialize_store(storage.clone(), StoreConfig::with_storage_key("binder-test"))
            .with_clock(fixed_now);
        let photos = StubPhotoDecoder::default();
        let binder = PlantBinder::new(service, RecordingList::default(), FakeForm::default(), photos.clone());
        Self {
            binder,
            storage,
            photos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_uses_isolated_key() -> anyhow::Result<()> {
        let env = TestEnvironment::new();
        assert_eq!(env.storage.get_item("binder-test")?, None);

        env.binder.service().save(shared::PlantDraft {
            id: None,
            common_name: "Caju".to_string(),
            scientific_name: None,
            average_production: 3.0,
            planting_date: "2023-05-10".to_string(),
            image: None,
        })?;
        assert!(env.storage.get_item("binder-test")?.is_some());
        assert!(env.storage.get_item("brejo-paraibano-fruteiras")?.is_none());
        Ok(())
    }

    #[test]
    fn test_failing_storage_switches() -> Result<()> {
        let storage = FailingStorage::new();
        storage.set_item("k", "v")?;

        storage.fail_reads(true);
        assert!(storage.get_item("k").is_err());
        storage.fail_reads(false);

        storage.fail_writes(true);
        assert!(storage.set_item("k", "w").is_err());
        assert!(storage.remove_item("k").is_err());
        assert_eq!(storage.get_item("k")?, Some("v".to_string()));
        Ok(())
    }
}
