//! # hawk-ui
//!
//! Headless, accessible UI primitives built on
//! [spark-signals](https://github.com/RLabs-Inc/spark-signals).
//!
//! Each primitive follows a root / item / trigger / content composition.
//! The root owns the mutable state as a `Signal`, nested parts read it
//! through a subtree-scoped context store or through explicit handles.
//! Rendering and styling are left to the host.
//!
//! ## Modules
//!
//! - [`accordion`] - Expandable sections, single or multiple open
//! - [`avatar`] - Image loading status with a delayed fallback
//! - [`alert`] - Variant-to-class mapping for alert parts
//! - [`context`] - Subtree-scoped context store
//! - [`id`] - Unique ids for linking triggers to content
//! - [`types`] - Shared enums (heading levels, data state)

pub mod accordion;
pub mod alert;
pub mod avatar;
pub mod context;
pub mod error;
pub mod id;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{ContextError, Result};

pub use id::{IdGenerator, SequentialIds, create_id, create_id_with_prefix};

pub use context::{
    ContextKey, get_context, has_context, pop_context_scope, provide_context, push_context_scope,
    reset_context_state, with_context_scope,
};

pub use accordion::{
    AccordionHeaderProps, AccordionItemContext, AccordionItemProps, AccordionRootContext,
    AccordionRootProps, AccordionType, AccordionValue, use_accordion_content, use_accordion_header,
    use_accordion_item, use_accordion_root, use_accordion_trigger,
};

pub use avatar::{
    AvatarLoadingStatus, AvatarRootContext, AvatarRootProps, use_avatar_fallback,
    use_avatar_image, use_avatar_root,
};

pub use alert::{
    AlertDescriptionProps, AlertPart, AlertRootProps, AlertTitleProps, AlertVariant, alert_class,
    alert_description_class, alert_title_class,
};
