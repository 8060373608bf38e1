//! Avatar - image with a delayed fallback.
//!
//! The root holds the image loading status. Image and fallback both read the
//! root; the fallback only shows once the status is not `Loaded` and the
//! configured delay has passed.

use std::fmt;
use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::context::{ContextKey, get_context, provide_context};
use crate::error::{ContextError, Result};

const ROOT_CONTEXT_KEY: ContextKey<AvatarRootContext> = ContextKey::new("hawk-avatar-root-key");

const ROOT_NAME: &str = "Avatar.Root";

/// Loading state of the avatar image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AvatarLoadingStatus {
    #[default]
    Loading,
    Error,
    Loaded,
}

impl AvatarLoadingStatus {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "loading" => Some(Self::Loading),
            "error" => Some(Self::Error),
            "loaded" => Some(Self::Loaded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error => "error",
            Self::Loaded => "loaded",
        }
    }
}

pub type LoadingStatusCallback = Rc<dyn Fn(AvatarLoadingStatus)>;

/// Properties for the avatar root.
#[derive(Default)]
pub struct AvatarRootProps {
    /// Initial status (default: loading).
    pub loading_status: AvatarLoadingStatus,
    /// Milliseconds to wait before the fallback may show (default: 0).
    pub delay_ms: u64,
    /// Called when the status changes.
    pub on_loading_status_change: Option<LoadingStatusCallback>,
}

struct RootState {
    loading_status: Signal<AvatarLoadingStatus>,
    delay_ms: u64,
    on_loading_status_change: Option<LoadingStatusCallback>,
}

/// Shared handle to an avatar root.
#[derive(Clone)]
pub struct AvatarRootContext {
    inner: Rc<RootState>,
}

impl AvatarRootContext {
    pub fn new(props: AvatarRootProps) -> Self {
        Self {
            inner: Rc::new(RootState {
                loading_status: signal(props.loading_status),
                delay_ms: props.delay_ms,
                on_loading_status_change: props.on_loading_status_change,
            }),
        }
    }

    pub fn loading_status(&self) -> AvatarLoadingStatus {
        self.inner.loading_status.get()
    }

    /// The reactive cell behind [`loading_status`](Self::loading_status).
    pub fn loading_status_signal(&self) -> Signal<AvatarLoadingStatus> {
        self.inner.loading_status.clone()
    }

    pub fn delay_ms(&self) -> u64 {
        self.inner.delay_ms
    }

    /// Record a new status. The callback only fires on an actual change.
    pub fn set_loading_status(&self, status: AvatarLoadingStatus) {
        if self.inner.loading_status.get() == status {
            return;
        }
        log::debug!("avatar status -> {}", status.as_str());
        self.inner.loading_status.set(status);
        if let Some(on_change) = &self.inner.on_loading_status_change {
            on_change(status);
        }
    }

    pub fn should_show_image(&self) -> bool {
        self.loading_status() == AvatarLoadingStatus::Loaded
    }

    /// Whether the fallback is due after `elapsed_ms` since mount.
    pub fn should_show_fallback(&self, elapsed_ms: u64) -> bool {
        !self.should_show_image() && elapsed_ms >= self.inner.delay_ms
    }
}

impl fmt::Debug for AvatarRootContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvatarRootContext")
            .field("loading_status", &self.loading_status())
            .field("delay_ms", &self.inner.delay_ms)
            .finish()
    }
}

/// Create the root and publish it in the current scope.
pub fn use_avatar_root(props: AvatarRootProps) -> AvatarRootContext {
    let root = AvatarRootContext::new(props);
    log::debug!("avatar root published (delay {}ms)", root.delay_ms());
    provide_context(&ROOT_CONTEXT_KEY, root)
}

fn nearest_root(component: &'static str) -> Result<AvatarRootContext> {
    get_context(&ROOT_CONTEXT_KEY).ok_or_else(|| ContextError::missing(component, ROOT_NAME))
}

/// Read the nearest avatar root for an image.
pub fn use_avatar_image() -> Result<AvatarRootContext> {
    nearest_root("Avatar.Image")
}

/// Read the nearest avatar root for a fallback.
pub fn use_avatar_fallback() -> Result<AvatarRootContext> {
    nearest_root("Avatar.Fallback")
}
