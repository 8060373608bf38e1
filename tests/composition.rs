//! Builds primitives the way a host renderer would: one context scope per
//! component, children built inside their parent's scope.

use std::cell::RefCell;
use std::rc::Rc;

use hawk_ui::{
    AccordionItemContext, AccordionItemProps, AccordionRootProps, AccordionValue,
    AvatarLoadingStatus, AvatarRootProps, ContextError, reset_context_state,
    use_accordion_content, use_accordion_item, use_accordion_root, use_accordion_trigger,
    use_avatar_fallback, use_avatar_image, use_avatar_root, with_context_scope,
};

/// Mount an item with a trigger and a content child; hand back what the
/// trigger and content saw.
fn mount_item(value: &str) -> (AccordionItemContext, AccordionItemContext) {
    with_context_scope(|| {
        use_accordion_item(AccordionItemProps::new(value)).unwrap();
        let trigger = with_context_scope(|| use_accordion_trigger().unwrap());
        let content = with_context_scope(|| use_accordion_content().unwrap());
        (trigger, content)
    })
}

#[test]
fn accordion_multiple_tree() {
    reset_context_state();

    let changes: Rc<RefCell<Vec<AccordionValue>>> = Rc::new(RefCell::new(Vec::new()));
    let changes_clone = changes.clone();

    let items = with_context_scope(|| {
        use_accordion_root(AccordionRootProps {
            default_value: AccordionValue::multiple(["a", "c"]),
            on_value_change: Some(Rc::new(move |v: &AccordionValue| {
                changes_clone.borrow_mut().push(v.clone());
            })),
            ..Default::default()
        });
        ["a", "b", "c"].map(mount_item)
    });

    let open: Vec<bool> = items.iter().map(|(t, _)| t.is_open()).collect();
    assert_eq!(open, vec![true, false, true]);

    // Trigger and content of one item share the same cell
    let (trigger_b, content_b) = &items[1];
    assert_eq!(trigger_b.trigger_id(), content_b.trigger_id());
    assert_ne!(trigger_b.trigger_id(), trigger_b.content_id());

    trigger_b.toggle();
    assert!(content_b.is_open());
    assert_eq!(
        changes.borrow().last(),
        Some(&AccordionValue::multiple(["a", "b", "c"]))
    );
}

#[test]
fn accordion_single_tree() {
    reset_context_state();

    let items = with_context_scope(|| {
        use_accordion_root(AccordionRootProps {
            default_value: AccordionValue::single("a"),
            ..Default::default()
        });
        ["a", "b"].map(mount_item)
    });

    let (trigger_a, content_a) = &items[0];
    let (trigger_b, content_b) = &items[1];
    assert!(content_a.is_open());
    assert!(!content_b.is_open());

    trigger_b.toggle();
    assert!(!trigger_a.is_open());
    assert!(content_b.is_open());
}

#[test]
fn sibling_roots_are_independent() {
    reset_context_state();

    let first = with_context_scope(|| {
        use_accordion_root(AccordionRootProps {
            default_value: AccordionValue::single("x"),
            ..Default::default()
        });
        mount_item("x").0
    });
    let second = with_context_scope(|| {
        use_accordion_root(AccordionRootProps {
            default_value: AccordionValue::single("y"),
            ..Default::default()
        });
        mount_item("x").0
    });

    assert!(first.is_open());
    assert!(!second.is_open());
}

#[test]
fn missing_ancestor_for_every_family() {
    reset_context_state();

    let errors = [
        use_accordion_item(AccordionItemProps::new("a")).unwrap_err(),
        use_accordion_trigger().unwrap_err(),
        use_accordion_content().unwrap_err(),
        use_avatar_image().unwrap_err(),
        use_avatar_fallback().unwrap_err(),
    ];

    for err in errors {
        assert!(matches!(err, ContextError::MissingAncestorContext { .. }));
    }
}

#[test]
fn avatar_tree() {
    reset_context_state();

    with_context_scope(|| {
        use_avatar_root(AvatarRootProps {
            delay_ms: 250,
            ..Default::default()
        });

        let fallback = with_context_scope(|| use_avatar_fallback().unwrap());
        with_context_scope(|| {
            let image = use_avatar_image().unwrap();
            assert!(!image.should_show_image());
            image.set_loading_status(AvatarLoadingStatus::Error);
        });

        assert_eq!(fallback.loading_status(), AvatarLoadingStatus::Error);
        assert!(!fallback.should_show_fallback(100));
        assert!(fallback.should_show_fallback(250));
    });
}
