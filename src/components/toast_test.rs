use leptos::prelude::*;

use super::*;

#[test]
fn kinds_map_to_distinct_classes() {
    assert_ne!(ToastKind::Info.css_class(), ToastKind::Success.css_class());
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Error.css_class());
    assert_ne!(ToastKind::Info.css_class(), ToastKind::Error.css_class());
}

#[test]
fn toasts_stack_in_enqueue_order_with_unique_keys() {
    let toasts: Toasts = RwSignal::new(Vec::new());
    show_toast(toasts, "uno", ToastKind::Info);
    show_toast(toasts, "dos", ToastKind::Success);
    show_toast(toasts, "tres", ToastKind::Error);

    let queue = toasts.get_untracked();
    let messages: Vec<_> = queue.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["uno", "dos", "tres"]);

    let mut ids: Vec<_> = queue.iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn custom_duration_still_enqueues_immediately() {
    let toasts: Toasts = RwSignal::new(Vec::new());
    show_toast_for(toasts, "lento", ToastKind::Info, 10_000);
    assert_eq!(toasts.get_untracked().len(), 1);
}
