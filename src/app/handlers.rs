use crate::app::notice::Notice;
use crate::app::render;
use crate::core::api::MedicinoApi;
use crate::domain::ports::Transport;
use crate::utils::error::ApiFailure;
use crate::utils::validation::{validate_medicine_name, validate_symptoms};

/// What a user action produced: an optional notice and an optional rendered body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionOutcome {
    pub notice: Option<Notice>,
    pub body: Option<String>,
}

impl ActionOutcome {
    fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            body: None,
        }
    }

    fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    fn page(body: String) -> Self {
        Self {
            notice: None,
            body: Some(body),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.notice.as_ref().is_some_and(Notice::is_error)
    }
}

/// Input checks, façade calls and rendering for each user-facing action.
pub struct ActionHandlers<'a, T: Transport> {
    api: &'a MedicinoApi<T>,
}

impl<'a, T: Transport> ActionHandlers<'a, T> {
    pub fn new(api: &'a MedicinoApi<T>) -> Self {
        Self { api }
    }

    pub async fn diagnose(&self, raw_symptoms: &str) -> ActionOutcome {
        let symptoms = match validate_symptoms(raw_symptoms) {
            Ok(cleaned) => cleaned,
            Err(e) => return ActionOutcome::notice(Notice::error(e.user_friendly_message())),
        };

        tracing::info!("🩺 Diagnosing: {}", symptoms);
        match self.api.diagnose(&symptoms).await {
            Ok(record) => ActionOutcome::notice(Notice::success("Diagnosis completed successfully!"))
                .with_body(render::render_diagnosis(&record)),
            Err(e) => ActionOutcome::notice(Notice::error(format!(
                "Diagnosis failed: {}",
                e.notice_message()
            ))),
        }
    }

    pub async fn search_medicine(&self, raw_name: &str) -> ActionOutcome {
        let name = match validate_medicine_name(raw_name) {
            Ok(name) => name,
            Err(e) => return ActionOutcome::notice(Notice::error(e.user_friendly_message())),
        };

        match self.api.get_medicine(&name).await {
            Ok(medicine) => ActionOutcome::notice(Notice::success("Medicine found successfully!"))
                .with_body(render::render_medicine(&medicine)),
            Err(ApiFailure::Logical(_)) => ActionOutcome::notice(Notice::error(
                "Medicine not found. Try a different name or check spelling.",
            ))
            .with_body(render::render_medicine_not_found(&name)),
            Err(e) => ActionOutcome::notice(Notice::error(format!(
                "Search failed: {}",
                e.notice_message()
            ))),
        }
    }

    pub async fn list_medicines(&self) -> ActionOutcome {
        match self.api.list_medicines().await {
            Ok(medicines) if medicines.is_empty() => {
                ActionOutcome::notice(Notice::info("No medicines found in the database."))
            }
            Ok(medicines) => ActionOutcome::notice(Notice::success(format!(
                "Loaded {} medicines",
                medicines.len()
            )))
            .with_body(render::render_medicine_catalogue(&medicines)),
            Err(ApiFailure::Logical(_)) => {
                ActionOutcome::notice(Notice::error("Failed to load medicines list."))
            }
            Err(e) => ActionOutcome::notice(Notice::error(format!(
                "Failed to load medicines list: {}",
                e.notice_message()
            ))),
        }
    }

    pub async fn show_history(&self) -> ActionOutcome {
        match self.api.get_history().await {
            Ok(history) if history.is_empty() => {
                ActionOutcome::notice(Notice::info("No diagnosis history available"))
            }
            Ok(history) => ActionOutcome::notice(Notice::success(format!(
                "Loaded {} diagnosis records",
                history.len()
            )))
            .with_body(render::render_history(&history)),
            Err(ApiFailure::Logical(_)) => ActionOutcome::notice(Notice::error("No history found")),
            Err(e) => ActionOutcome::notice(Notice::error(format!(
                "Failed to load history: {}",
                e.notice_message()
            ))),
        }
    }

    pub fn emergency_guide(&self) -> ActionOutcome {
        ActionOutcome::page(render::emergency_guide())
    }

    pub fn about(&self) -> ActionOutcome {
        ActionOutcome::page(render::about())
    }
}
