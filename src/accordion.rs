//! Accordion - Root / Item / Trigger / Content state.
//!
//! The root owns the open value. Each item derives its initial open state
//! from the root's default value, gets a trigger/content id pair, and can
//! toggle itself through the root.
//!
//! Two ways to wire it up:
//! - Ambient: `use_accordion_root` inside a scope, then `use_accordion_item`
//!   and `use_accordion_trigger` in nested scopes (see [`crate::context`]).
//! - Explicit: keep the [`AccordionRootContext`] handle and call
//!   [`AccordionRootContext::item`] directly.
//!
//! # Example
//!
//! ```ignore
//! use hawk_ui::accordion::*;
//! use hawk_ui::context::with_context_scope;
//!
//! with_context_scope(|| {
//!     use_accordion_root(AccordionRootProps {
//!         default_value: AccordionValue::single("a"),
//!         ..Default::default()
//!     });
//!     with_context_scope(|| {
//!         let item = use_accordion_item(AccordionItemProps::new("a"))?;
//!         assert!(item.is_open());
//!         with_context_scope(|| {
//!             let trigger = use_accordion_trigger()?;
//!             trigger.toggle();
//!             Ok(())
//!         })
//!     })
//! })?;
//! ```

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::{Rc, Weak};

use spark_signals::{Signal, signal};

use crate::context::{ContextKey, get_context, has_context, provide_context};
use crate::error::{ContextError, Result};
use crate::id::{DEFAULT_ID_PREFIX, IdGenerator, global_ids};
use crate::types::{DataState, HeadingLevel};

const ROOT_CONTEXT_KEY: ContextKey<AccordionRootContext> =
    ContextKey::new("hawk-accordion-root-key");
const ITEM_CONTEXT_KEY: ContextKey<AccordionItemContext> =
    ContextKey::new("hawk-accordion-item-key");

const ROOT_NAME: &str = "Accordion.Root";
const ITEM_NAME: &str = "Accordion.Item";

// =============================================================================
// Value
// =============================================================================

/// Whether one or several items can be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AccordionType {
    #[default]
    Single,
    Multiple,
}

impl AccordionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

/// The open value of an accordion.
///
/// `Single` holds at most one open item, `Multiple` any number of them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AccordionValue {
    Single(Option<String>),
    Multiple(BTreeSet<String>),
}

impl AccordionValue {
    /// Single mode with `value` open.
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(Some(value.into()))
    }

    /// Single mode with nothing open.
    pub fn none() -> Self {
        Self::Single(None)
    }

    /// Multiple mode with the given items open.
    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multiple(values.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> AccordionType {
        match self {
            Self::Single(_) => AccordionType::Single,
            Self::Multiple(_) => AccordionType::Multiple,
        }
    }

    /// Whether `item` is open under this value.
    ///
    /// Equality in single mode, set membership in multiple mode.
    pub fn contains(&self, item: &str) -> bool {
        match self {
            Self::Single(open) => open.as_deref() == Some(item),
            Self::Multiple(open) => open.contains(item),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(open) => open.is_none(),
            Self::Multiple(open) => open.is_empty(),
        }
    }
}

impl Default for AccordionValue {
    fn default() -> Self {
        Self::none()
    }
}

// =============================================================================
// Props
// =============================================================================

/// Called with the new value whenever the open value changes.
pub type ValueChangeCallback = Rc<dyn Fn(&AccordionValue)>;

/// Properties for the accordion root.
///
/// The mode comes from `default_value`.
///
/// ```ignore
/// let root = AccordionRootContext::new(AccordionRootProps {
///     default_value: AccordionValue::multiple(["a", "c"]),
///     ..Default::default()
/// });
/// ```
pub struct AccordionRootProps {
    /// When disabled, no item can be toggled (default: false).
    pub disabled: bool,

    /// Initial open value. Falls back to `default_value` when absent.
    pub value: Option<AccordionValue>,

    /// Value used to decide which items start open.
    pub default_value: AccordionValue,

    /// Change callback.
    pub on_value_change: Option<ValueChangeCallback>,

    /// Single mode only: whether the open item can be closed by its
    /// trigger (default: true).
    pub collapsible: bool,
}

impl Default for AccordionRootProps {
    fn default() -> Self {
        Self {
            disabled: false,
            value: None,
            default_value: AccordionValue::default(),
            on_value_change: None,
            collapsible: true,
        }
    }
}

/// Properties for an accordion item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionItemProps {
    /// Identifies the item inside the root's value.
    pub value: String,
    /// When disabled, this item cannot be toggled (default: false).
    pub disabled: bool,
}

impl AccordionItemProps {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Properties for the accordion header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionHeaderProps {
    /// Heading wrapping the trigger (default: h3).
    pub level: HeadingLevel,
}

impl Default for AccordionHeaderProps {
    fn default() -> Self {
        Self {
            level: HeadingLevel::H3,
        }
    }
}

// =============================================================================
// Root Context
// =============================================================================

struct RootState {
    disabled: bool,
    collapsible: bool,
    value: Signal<AccordionValue>,
    default_value: AccordionValue,
    on_value_change: Option<ValueChangeCallback>,
    items: RefCell<Vec<Weak<ItemState>>>,
    /// Set once a value has been committed; items created afterwards open
    /// from the current value instead of the default.
    committed: Cell<bool>,
}

/// Shared handle to an accordion root. Clones refer to the same root.
#[derive(Clone)]
pub struct AccordionRootContext {
    inner: Rc<RootState>,
}

impl AccordionRootContext {
    /// Build a root without publishing it.
    pub fn new(props: AccordionRootProps) -> Self {
        let AccordionRootProps {
            disabled,
            value,
            default_value,
            on_value_change,
            collapsible,
        } = props;

        let initial = match value {
            Some(value) if value.kind() == default_value.kind() => value,
            Some(value) => {
                log::warn!(
                    "accordion value is `{}` but default value is `{}`; using default value",
                    value.kind().as_str(),
                    default_value.kind().as_str()
                );
                default_value.clone()
            }
            None => default_value.clone(),
        };

        Self {
            inner: Rc::new(RootState {
                disabled,
                collapsible,
                value: signal(initial),
                default_value,
                on_value_change,
                items: RefCell::new(Vec::new()),
                committed: Cell::new(false),
            }),
        }
    }

    pub fn disabled(&self) -> bool {
        self.inner.disabled
    }

    /// Meaningful only in single mode.
    pub fn collapsible(&self) -> bool {
        self.inner.collapsible
    }

    pub fn accordion_type(&self) -> AccordionType {
        self.inner.default_value.kind()
    }

    pub fn is_multiple(&self) -> bool {
        self.accordion_type() == AccordionType::Multiple
    }

    pub fn default_value(&self) -> &AccordionValue {
        &self.inner.default_value
    }

    /// Current open value.
    pub fn value(&self) -> AccordionValue {
        self.inner.value.get()
    }

    /// The reactive cell behind [`value`](Self::value).
    pub fn value_signal(&self) -> Signal<AccordionValue> {
        self.inner.value.clone()
    }

    /// Replace the open value and resync every item.
    pub fn set_value(&self, value: AccordionValue) -> Result<()> {
        let expected = self.accordion_type();
        if value.kind() != expected {
            log::warn!("rejected accordion value of the wrong mode");
            return Err(ContextError::ValueTypeMismatch {
                expected: expected.as_str(),
                found: value.kind().as_str(),
            });
        }
        self.commit(value);
        Ok(())
    }

    /// Create an item under this root, using the process-wide id generator.
    pub fn item(&self, props: AccordionItemProps) -> AccordionItemContext {
        self.item_with_ids(props, global_ids())
    }

    /// Create an item under this root with ids from `ids`.
    pub fn item_with_ids(
        &self,
        props: AccordionItemProps,
        ids: &dyn IdGenerator,
    ) -> AccordionItemContext {
        let open = if self.inner.committed.get() {
            self.inner.value.get().contains(&props.value)
        } else {
            self.inner.default_value.contains(&props.value)
        };

        let state = Rc::new(ItemState {
            root: self.clone(),
            value: props.value,
            disabled: props.disabled,
            open: signal(open),
            trigger_id: ids.next_id(DEFAULT_ID_PREFIX),
            content_id: ids.next_id(DEFAULT_ID_PREFIX),
        });

        let mut items = self.inner.items.borrow_mut();
        items.retain(|item| item.strong_count() > 0);
        items.push(Rc::downgrade(&state));

        AccordionItemContext { inner: state }
    }

    /// Number of items still alive under this root.
    pub fn item_count(&self) -> usize {
        self.inner
            .items
            .borrow()
            .iter()
            .filter(|item| item.strong_count() > 0)
            .count()
    }

    fn commit(&self, next: AccordionValue) {
        self.inner.committed.set(true);
        let changed = self.inner.value.get() != next;
        if changed {
            self.inner.value.set(next.clone());
        }

        // Items start from the default value, which can disagree with the
        // initial value, so resync even when the value itself is unchanged.
        // Collect first: setting a signal can run effects that create items.
        let items: Vec<Rc<ItemState>> = self
            .inner
            .items
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect();
        for item in items {
            let open = next.contains(&item.value);
            if item.open.get() != open {
                item.open.set(open);
            }
        }

        if changed {
            if let Some(on_change) = &self.inner.on_value_change {
                on_change(&next);
            }
        }
    }
}

impl fmt::Debug for AccordionRootContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionRootContext")
            .field("disabled", &self.inner.disabled)
            .field("collapsible", &self.inner.collapsible)
            .field("value", &self.inner.value.get())
            .field("default_value", &self.inner.default_value)
            .field("items", &self.item_count())
            .finish()
    }
}

// =============================================================================
// Item Context
// =============================================================================

struct ItemState {
    root: AccordionRootContext,
    value: String,
    disabled: bool,
    open: Signal<bool>,
    trigger_id: String,
    content_id: String,
}

/// Shared handle to one accordion item, read by its trigger and content.
///
/// Root fields are reachable through the `root_*` accessors; the root's
/// default value is not.
#[derive(Clone)]
pub struct AccordionItemContext {
    inner: Rc<ItemState>,
}

impl AccordionItemContext {
    pub fn item_value(&self) -> &str {
        &self.inner.value
    }

    pub fn item_disabled(&self) -> bool {
        self.inner.disabled
    }

    /// Reactive open state.
    pub fn item_open(&self) -> Signal<bool> {
        self.inner.open.clone()
    }

    pub fn trigger_id(&self) -> &str {
        &self.inner.trigger_id
    }

    pub fn content_id(&self) -> &str {
        &self.inner.content_id
    }

    pub fn root_disabled(&self) -> bool {
        self.inner.root.disabled()
    }

    pub fn root_value(&self) -> Signal<AccordionValue> {
        self.inner.root.value_signal()
    }

    pub fn accordion_type(&self) -> AccordionType {
        self.inner.root.accordion_type()
    }

    pub fn collapsible(&self) -> bool {
        self.inner.root.collapsible()
    }

    pub fn is_open(&self) -> bool {
        self.inner.open.get()
    }

    /// Disabled either on the item or on the whole root.
    pub fn is_disabled(&self) -> bool {
        self.inner.disabled || self.inner.root.disabled()
    }

    /// Open/closed state for a `data-state` attribute.
    pub fn data_state(&self) -> DataState {
        DataState::from(self.is_open())
    }

    /// Flip this item the way a trigger click would.
    ///
    /// Whether the item counts as open is read from the root value, not from
    /// [`item_open`](Self::item_open). Returns `false` when nothing changed:
    /// the item or root is disabled, or this is the open item of a
    /// non-collapsible single accordion.
    pub fn toggle(&self) -> bool {
        if self.is_disabled() {
            log::debug!("accordion item `{}` is disabled", self.inner.value);
            return false;
        }

        let root = &self.inner.root;
        let item = &self.inner.value;
        let next = match root.value() {
            AccordionValue::Single(open) if open.as_deref() == Some(item.as_str()) => {
                if !root.collapsible() {
                    return false;
                }
                AccordionValue::none()
            }
            AccordionValue::Single(_) => AccordionValue::single(item.clone()),
            AccordionValue::Multiple(mut open) => {
                if !open.remove(item) {
                    open.insert(item.clone());
                }
                AccordionValue::Multiple(open)
            }
        };

        root.commit(next);
        true
    }

    /// Open this item if it is closed.
    pub fn open(&self) -> bool {
        !self.in_root_value() && self.toggle()
    }

    /// Close this item if it is open.
    pub fn close(&self) -> bool {
        self.in_root_value() && self.toggle()
    }

    fn in_root_value(&self) -> bool {
        self.inner.root.value().contains(&self.inner.value)
    }
}

impl fmt::Debug for AccordionItemContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionItemContext")
            .field("item_value", &self.inner.value)
            .field("item_disabled", &self.inner.disabled)
            .field("item_open", &self.inner.open.get())
            .field("trigger_id", &self.inner.trigger_id)
            .field("content_id", &self.inner.content_id)
            .finish()
    }
}

// =============================================================================
// Context Getters
// =============================================================================

/// Create the root and publish it in the current scope.
pub fn use_accordion_root(props: AccordionRootProps) -> AccordionRootContext {
    let root = AccordionRootContext::new(props);
    log::debug!(
        "accordion root ({}) published",
        root.accordion_type().as_str()
    );
    provide_context(&ROOT_CONTEXT_KEY, root)
}

/// Create an item under the nearest root and publish it in the current scope.
pub fn use_accordion_item(props: AccordionItemProps) -> Result<AccordionItemContext> {
    let root = get_context(&ROOT_CONTEXT_KEY)
        .ok_or_else(|| ContextError::missing(ITEM_NAME, ROOT_NAME))?;

    let item = root.item(props);
    log::debug!(
        "accordion item `{}` published (open: {})",
        item.item_value(),
        item.is_open()
    );
    Ok(provide_context(&ITEM_CONTEXT_KEY, item))
}

fn nearest_item(component: &'static str) -> Result<AccordionItemContext> {
    if !has_context(&ROOT_CONTEXT_KEY) {
        return Err(ContextError::missing(component, ROOT_NAME));
    }
    get_context(&ITEM_CONTEXT_KEY).ok_or_else(|| ContextError::missing(component, ITEM_NAME))
}

/// Read the nearest item for a trigger.
pub fn use_accordion_trigger() -> Result<AccordionItemContext> {
    nearest_item("Accordion.Trigger")
}

/// Read the nearest item for a content region.
pub fn use_accordion_content() -> Result<AccordionItemContext> {
    nearest_item("Accordion.Content")
}

/// Read the nearest item for a header.
pub fn use_accordion_header() -> Result<AccordionItemContext> {
    nearest_item("Accordion.Header")
}

// =============================================================================
// Tests
// =============================================================================
