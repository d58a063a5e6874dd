//! View state for the collection admin page.
//!
//! DESIGN
//! ======
//! All state changes go through `CollectionViewState::apply`, which returns
//! at most one `Command` for the page to run. Command results come back as
//! further actions. Keeping the reducer free of I/O lets tests replay whole
//! add/delete flows against a recording fake.
//!
//! Only one modal exists at a time, and the image picked for deletion lives
//! inside the confirm modal, so a cancelled selection cannot leak into a
//! later delete.
//!
//! ORDERING
//! ========
//! Every list request carries a generation number. A response is applied
//! only if it belongs to the newest request, so a slow response cannot
//! overwrite a newer list.
//!
//! Every add or remove carries a mutation sequence number. Its completion
//! moves the open modal only if that modal is still waiting on the same
//! number, so a cancelled request cannot unlock a newer one. A successful
//! mutation is acknowledged once the follow-up list request lands.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use crate::net::api::CollectionApi;
use crate::net::error::{ApiError, FailureKind};
use crate::net::types::{CollectionId, Image, ImageId};

pub const ADD_SUCCESS_MESSAGE: &str = "Image added successfully";
pub const REMOVE_SUCCESS_MESSAGE: &str = "Image removed successfully";
const ADD_FAILURE_PREFIX: &str = "Failed to add image";
const REMOVE_FAILURE_PREFIX: &str = "Failed to remove image";

/// Progress of the most recent list request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The newest request failed; `images` still holds the previous list.
    Failed(FailureKind),
}

/// Where a modal's confirm action stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Editing,
    /// Mutation `seq` in flight.
    Submitting { seq: u64 },
    /// Mutation succeeded; waiting for list request `generation` to land.
    Refreshing { generation: u64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    AddImage { draft_url: String, stage: Stage },
    ConfirmDelete { image: Image, stage: Stage },
}

/// Outcome acknowledgment waiting to be shown to the admin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// The route resolved to `CollectionId` (mount or route change).
    Open(CollectionId),
    ImagesLoaded { generation: u64, result: Result<Vec<Image>, ApiError> },
    OpenAdd,
    EditDraft(String),
    SubmitAdd,
    AddFinished { collection: CollectionId, seq: u64, result: Result<(), ApiError> },
    SelectForDelete(Image),
    ConfirmDelete,
    RemoveFinished { collection: CollectionId, seq: u64, result: Result<(), ApiError> },
    CloseModal,
    DismissNotice,
}

/// Side effect requested by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    FetchImages { collection: CollectionId, generation: u64 },
    AddImage { collection: CollectionId, url: String, seq: u64 },
    RemoveImage { collection: CollectionId, image: ImageId, seq: u64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionViewState {
    pub collection: Option<CollectionId>,
    /// Server order, replaced wholesale on every successful load.
    pub images: Vec<Image>,
    pub list: ListStatus,
    pub modal: Modal,
    pub notice: Option<Notice>,
    /// Generation of the newest list request.
    pub generation: u64,
    /// Sequence number of the newest add or remove request.
    pub mutation_seq: u64,
}

impl CollectionViewState {
    pub fn is_add_open(&self) -> bool {
        matches!(self.modal, Modal::AddImage { .. })
    }

    pub fn is_delete_open(&self) -> bool {
        matches!(self.modal, Modal::ConfirmDelete { .. })
    }

    /// Text in the add-image input; empty whenever the add modal is closed.
    pub fn draft_url(&self) -> &str {
        match &self.modal {
            Modal::AddImage { draft_url, .. } => draft_url,
            _ => "",
        }
    }

    pub fn selected_image(&self) -> Option<&Image> {
        match &self.modal {
            Modal::ConfirmDelete { image, .. } => Some(image),
            _ => None,
        }
    }

    /// True while the open modal's mutation or follow-up refresh is pending.
    pub fn is_busy(&self) -> bool {
        match &self.modal {
            Modal::AddImage { stage, .. } | Modal::ConfirmDelete { stage, .. } => *stage != Stage::Editing,
            Modal::Closed => false,
        }
    }

    pub fn apply(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::Open(collection) => self.open(collection),
            Action::ImagesLoaded { generation, result } => {
                self.images_loaded(generation, result);
                None
            }
            Action::OpenAdd => {
                self.modal = Modal::AddImage { draft_url: String::new(), stage: Stage::Editing };
                None
            }
            Action::EditDraft(text) => {
                if let Modal::AddImage { draft_url, stage: Stage::Editing } = &mut self.modal {
                    *draft_url = text;
                }
                None
            }
            Action::SubmitAdd => self.submit_add(),
            Action::AddFinished { collection, seq, result } => self.add_finished(collection, seq, result),
            Action::SelectForDelete(image) => {
                self.modal = Modal::ConfirmDelete { image, stage: Stage::Editing };
                None
            }
            Action::ConfirmDelete => self.confirm_delete(),
            Action::RemoveFinished { collection, seq, result } => self.remove_finished(collection, seq, result),
            Action::CloseModal => {
                self.modal = Modal::Closed;
                None
            }
            Action::DismissNotice => {
                self.notice = None;
                None
            }
        }
    }

    fn open(&mut self, collection: CollectionId) -> Option<Command> {
        if self.collection.as_ref() == Some(&collection) {
            return None;
        }
        self.collection = Some(collection);
        self.modal = Modal::Closed;
        self.notice = None;
        self.fetch()
    }

    /// Start a new list request for the current collection.
    fn fetch(&mut self) -> Option<Command> {
        let collection = self.collection.clone()?;
        self.generation = self.generation.wrapping_add(1);
        self.list = ListStatus::Loading;
        Some(Command::FetchImages { collection, generation: self.generation })
    }

    fn images_loaded(&mut self, generation: u64, result: Result<Vec<Image>, ApiError>) {
        if generation != self.generation {
            leptos::logging::log!("discarding stale image list (generation {generation}, newest {})", self.generation);
            return;
        }
        let outcome = match result {
            Ok(images) => {
                self.images = images;
                self.list = ListStatus::Loaded;
                Ok(())
            }
            Err(e) => {
                leptos::logging::error!("Error fetching images: {e}");
                self.list = ListStatus::Failed(e.kind());
                Err(e)
            }
        };
        self.settle_refresh(generation, outcome);
    }

    /// Finish a modal waiting on the refresh that follows its mutation.
    ///
    /// The mutation counts as done only when the refresh succeeds too; a
    /// failed refresh returns the modal to editing for another try.
    fn settle_refresh(&mut self, generation: u64, outcome: Result<(), ApiError>) {
        let (success, failure_prefix) = match &self.modal {
            Modal::AddImage { stage: Stage::Refreshing { generation: g }, .. } if *g <= generation => {
                (ADD_SUCCESS_MESSAGE, ADD_FAILURE_PREFIX)
            }
            Modal::ConfirmDelete { stage: Stage::Refreshing { generation: g }, .. } if *g <= generation => {
                (REMOVE_SUCCESS_MESSAGE, REMOVE_FAILURE_PREFIX)
            }
            _ => return,
        };
        match outcome {
            Ok(()) => {
                self.modal = Modal::Closed;
                self.notice = Some(Notice::Success(success.to_owned()));
            }
            Err(e) => {
                self.notice = Some(Notice::Failure(format!("{failure_prefix}: {}", e.payload())));
                self.set_stage(Stage::Editing);
            }
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.mutation_seq = self.mutation_seq.wrapping_add(1);
        self.mutation_seq
    }

    fn submit_add(&mut self) -> Option<Command> {
        let collection = self.collection.clone()?;
        let url = match &self.modal {
            Modal::AddImage { draft_url, stage: Stage::Editing } => draft_url.clone(),
            _ => return None,
        };
        let seq = self.next_seq();
        self.set_stage(Stage::Submitting { seq });
        Some(Command::AddImage { collection, url, seq })
    }

    fn add_finished(&mut self, collection: CollectionId, seq: u64, result: Result<(), ApiError>) -> Option<Command> {
        let owns_modal = matches!(self.modal, Modal::AddImage { stage: Stage::Submitting { seq: s }, .. } if s == seq);
        self.mutation_finished(collection, result, owns_modal, ADD_SUCCESS_MESSAGE, ADD_FAILURE_PREFIX)
    }

    fn confirm_delete(&mut self) -> Option<Command> {
        let Some(collection) = self.collection.clone() else {
            leptos::logging::error!("No collection selected.");
            return None;
        };
        let Modal::ConfirmDelete { image, stage } = &self.modal else {
            leptos::logging::error!("Selected image or imageId is undefined.");
            return None;
        };
        if image.id.is_blank() {
            leptos::logging::error!("Selected image or imageId is undefined.");
            return None;
        }
        if *stage != Stage::Editing {
            return None;
        }
        let image = image.id.clone();
        let seq = self.next_seq();
        self.set_stage(Stage::Submitting { seq });
        Some(Command::RemoveImage { collection, image, seq })
    }

    fn remove_finished(&mut self, collection: CollectionId, seq: u64, result: Result<(), ApiError>) -> Option<Command> {
        let owns_modal =
            matches!(self.modal, Modal::ConfirmDelete { stage: Stage::Submitting { seq: s }, .. } if s == seq);
        self.mutation_finished(collection, result, owns_modal, REMOVE_SUCCESS_MESSAGE, REMOVE_FAILURE_PREFIX)
    }

    /// Shared tail of add/remove: refresh on success, report on failure.
    ///
    /// `owns_modal` is true when the open modal issued this exact mutation.
    /// Its acknowledgment then waits for the refresh (see `settle_refresh`).
    /// A mutation nobody is waiting on is acknowledged right away, and one
    /// for a collection the page has since left triggers no refresh.
    fn mutation_finished(
        &mut self,
        collection: CollectionId,
        result: Result<(), ApiError>,
        owns_modal: bool,
        success: &str,
        failure_prefix: &str,
    ) -> Option<Command> {
        match result {
            Ok(()) => {
                if !owns_modal {
                    self.notice = Some(Notice::Success(success.to_owned()));
                }
                if self.collection.as_ref() != Some(&collection) {
                    return None;
                }
                let command = self.fetch();
                if owns_modal {
                    self.set_stage(Stage::Refreshing { generation: self.generation });
                }
                command
            }
            Err(e) => {
                leptos::logging::error!("{failure_prefix}: {e}");
                self.notice = Some(Notice::Failure(format!("{failure_prefix}: {}", e.payload())));
                if owns_modal {
                    self.set_stage(Stage::Editing);
                }
                None
            }
        }
    }

    fn set_stage(&mut self, next: Stage) {
        if let Modal::AddImage { stage, .. } | Modal::ConfirmDelete { stage, .. } = &mut self.modal {
            *stage = next;
        }
    }
}

/// Run one reducer command against the API and wrap the result as an action.
pub async fn execute<A: CollectionApi>(api: &A, command: Command) -> Action {
    match command {
        Command::FetchImages { collection, generation } => {
            let result = api.list_images(&collection).await;
            Action::ImagesLoaded { generation, result }
        }
        Command::AddImage { collection, url, seq } => {
            let result = api.add_image(&collection, &url).await;
            Action::AddFinished { collection, seq, result }
        }
        Command::RemoveImage { collection, image, seq } => {
            let result = api.remove_image(&collection, &image).await;
            Action::RemoveFinished { collection, seq, result }
        }
    }
}
