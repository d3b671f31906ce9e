use crate::domain::model::{BackendKind, BackendTarget};
use crate::domain::ports::ConfigProvider;
use std::sync::{PoisonError, RwLock};

/// The two configured backends and which one requests currently go to.
///
/// Starts on `Primary`. Only `BackendResolver` changes the active backend;
/// every gateway call reads it.
#[derive(Debug)]
pub struct BackendSelection {
    primary: BackendTarget,
    secondary: BackendTarget,
    active: RwLock<BackendKind>,
}

impl BackendSelection {
    pub fn new(primary: BackendTarget, secondary: BackendTarget) -> Self {
        Self {
            primary: BackendTarget {
                kind: BackendKind::Primary,
                ..primary
            },
            secondary: BackendTarget {
                kind: BackendKind::Secondary,
                ..secondary
            },
            active: RwLock::new(BackendKind::Primary),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(
            config.backend_target(BackendKind::Primary),
            config.backend_target(BackendKind::Secondary),
        )
    }

    pub fn target(&self, kind: BackendKind) -> &BackendTarget {
        match kind {
            BackendKind::Primary => &self.primary,
            BackendKind::Secondary => &self.secondary,
        }
    }

    pub fn active_kind(&self) -> BackendKind {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn active_target(&self) -> &BackendTarget {
        self.target(self.active_kind())
    }

    pub(crate) fn activate(&self, kind: BackendKind) {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        *active = kind;
    }
}

impl Default for BackendSelection {
    fn default() -> Self {
        Self::new(
            BackendTarget::default_primary(),
            BackendTarget::default_secondary(),
        )
    }
}
