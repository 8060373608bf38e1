//! Alert - Root / Title / Description.
//!
//! Alerts carry no state and no context. The only logic is mapping a
//! variant to its class list.
//!
//! ```ignore
//! use hawk_ui::alert::{AlertRootProps, AlertVariant, alert_class};
//!
//! let class = alert_class(&AlertRootProps {
//!     variant: AlertVariant::Destructive,
//!     class: Some("mt-4".into()),
//! });
//! ```

use crate::types::HeadingLevel;

// =============================================================================
// Variant
// =============================================================================

/// Visual variants for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlertVariant {
    #[default]
    Default,
    /// Errors and destructive outcomes
    Destructive,
}

impl AlertVariant {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "destructive" => Some(Self::Destructive),
            _ => None,
        }
    }

    pub const fn all() -> &'static [AlertVariant] {
        &[Self::Default, Self::Destructive]
    }

    /// Classes this variant adds on top of the root's base classes.
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Default => "bg-background text-foreground",
            Self::Destructive => {
                "border-destructive/50 text-destructive dark:border-destructive [&>svg]:text-destructive"
            }
        }
    }
}

// =============================================================================
// Parts
// =============================================================================

/// The three pieces an alert is composed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPart {
    Root,
    Title,
    Description,
}

impl AlertPart {
    /// Classes every instance of this part carries.
    pub const fn base_class(&self) -> &'static str {
        match self {
            Self::Root => {
                "relative w-full rounded-lg border px-4 py-3 text-sm [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 [&>svg]:text-foreground [&>svg~*]:pl-7"
            }
            Self::Title => "mb-1 font-medium leading-none tracking-tight",
            Self::Description => "text-sm [&_p]:leading-relaxed",
        }
    }

    /// ARIA role for the part, if it has one.
    pub const fn role(&self) -> Option<&'static str> {
        match self {
            Self::Root => Some("alert"),
            Self::Title | Self::Description => None,
        }
    }
}

// =============================================================================
// Props
// =============================================================================

/// Properties for the alert root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertRootProps {
    pub variant: AlertVariant,
    /// Extra classes appended after the variant's.
    pub class: Option<String>,
}

/// Properties for the alert title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertTitleProps {
    /// Heading element (default: h5).
    pub level: HeadingLevel,
    pub class: Option<String>,
}

impl Default for AlertTitleProps {
    fn default() -> Self {
        Self {
            level: HeadingLevel::H5,
            class: None,
        }
    }
}

/// Properties for the alert description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertDescriptionProps {
    pub class: Option<String>,
}

fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full class list for an alert root.
pub fn alert_class(props: &AlertRootProps) -> String {
    join_classes(&[
        AlertPart::Root.base_class(),
        props.variant.class_name(),
        props.class.as_deref().unwrap_or_default(),
    ])
}

/// Full class list for an alert title.
pub fn alert_title_class(props: &AlertTitleProps) -> String {
    join_classes(&[
        AlertPart::Title.base_class(),
        props.class.as_deref().unwrap_or_default(),
    ])
}

/// Full class list for an alert description.
pub fn alert_description_class(props: &AlertDescriptionProps) -> String {
    join_classes(&[
        AlertPart::Description.base_class(),
        props.class.as_deref().unwrap_or_default(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!(AlertVariant::from_str("destructive"), Some(AlertVariant::Destructive));
        assert_eq!(AlertVariant::from_str("DEFAULT"), Some(AlertVariant::Default));
        assert_eq!(AlertVariant::from_str("warning"), None);
        assert_eq!(AlertVariant::all().len(), 2);
    }

    #[test]
    fn test_alert_class_default() {
        let class = alert_class(&AlertRootProps::default());
        assert!(class.starts_with("relative w-full"));
        assert!(class.ends_with("bg-background text-foreground"));
    }

    #[test]
    fn test_alert_class_appends_extra() {
        let class = alert_class(&AlertRootProps {
            variant: AlertVariant::Destructive,
            class: Some("  mt-4 ".into()),
        });
        assert!(class.contains("text-destructive"));
        assert!(class.ends_with(" mt-4"));
        assert!(!class.contains("  "));
    }

    #[test]
    fn test_part_classes() {
        let title = alert_title_class(&AlertTitleProps::default());
        assert_eq!(title, "mb-1 font-medium leading-none tracking-tight");
        assert_eq!(AlertTitleProps::default().level, HeadingLevel::H5);

        let description = alert_description_class(&AlertDescriptionProps {
            class: Some("italic".into()),
        });
        assert_eq!(description, "text-sm [&_p]:leading-relaxed italic");
    }

    #[test]
    fn test_roles() {
        assert_eq!(AlertPart::Root.role(), Some("alert"));
        assert_eq!(AlertPart::Title.role(), None);
    }
}
