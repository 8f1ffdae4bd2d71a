//! Integration tests for selector building and rendering.

use selkit_css::factory::{attr, class, element, id, pseudo_class, pseudo_element};
use selkit_css::selector::{Category, Render, Selector, SelectorError};

#[test]
fn test_render_classes_in_insertion_order() {
    let mut selector = class("main").unwrap().class("container").unwrap();
    assert_eq!(selector.render(), ".main.container");
}

#[test]
fn test_render_element_attribute_pseudo_class() {
    let mut selector = element("a")
        .unwrap()
        .attr("href$=\".png\"")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.render(), "a[href$=\".png\"]:focus");
}

#[test]
fn test_render_every_category() {
    let mut selector = element("li")
        .unwrap()
        .id("first")
        .unwrap()
        .class("item")
        .unwrap()
        .class("active")
        .unwrap()
        .attr("data-x")
        .unwrap()
        .attr("lang|=\"en\"")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_class("nth-child(2)")
        .unwrap()
        .pseudo_element("before")
        .unwrap();
    assert_eq!(
        selector.render(),
        "li#first.item.active[data-x][lang|=\"en\"]:hover:nth-child(2)::before"
    );
}

#[test]
fn test_each_factory_starts_fresh() {
    assert_eq!(element("div").unwrap().render(), "div");
    assert_eq!(id("nav").unwrap().render(), "#nav");
    assert_eq!(class("btn").unwrap().render(), ".btn");
    assert_eq!(attr("disabled").unwrap().render(), "[disabled]");
    assert_eq!(pseudo_class("checked").unwrap().render(), ":checked");
    assert_eq!(pseudo_element("after").unwrap().render(), "::after");
}

#[test]
fn test_second_render_is_empty() {
    let mut selector = element("div").unwrap().id("main").unwrap();
    assert_eq!(selector.render(), "div#main");
    assert_eq!(selector.render(), "");
}

#[test]
fn test_render_after_drain_returns_only_new_parts() {
    let mut selector = element("p").unwrap().class("lead").unwrap();
    assert_eq!(selector.render(), "p.lead");
    selector.push(Category::PseudoClass, "hover").unwrap();
    assert_eq!(selector.render(), ":hover");
}

#[test]
fn test_display_is_idempotent_and_survives_render() {
    let mut selector = element("a").unwrap().class("x").unwrap();
    let _ = selector.render();
    assert_eq!(selector.to_string(), "a.x");
    assert_eq!(selector.to_string(), "a.x");
}

#[test]
fn test_tokens_are_not_validated() {
    let mut selector = element("").unwrap().class("has space").unwrap().attr("]").unwrap();
    assert_eq!(selector.render(), ".has space[]]");
}

// Uniqueness

#[test]
fn test_id_twice_is_uniqueness_error() {
    let err = id("a").unwrap().id("b").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Uniqueness {
            category: Category::Id,
            existing: "a".to_string(),
        }
    );
}

#[test]
fn test_element_twice_is_uniqueness_error() {
    let err = element("div").unwrap().element("span").unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Uniqueness {
            category: Category::Element,
            ..
        }
    ));
}

#[test]
fn test_pseudo_element_twice_is_uniqueness_error() {
    let err = pseudo_element("before")
        .unwrap()
        .pseudo_element("after")
        .unwrap_err();
    assert_eq!(err.category(), Category::PseudoElement);
    assert!(matches!(err, SelectorError::Uniqueness { .. }));
}

#[test]
fn test_uniqueness_checked_before_order() {
    // Element is both repeated and out of order here.
    let err = element("div").unwrap().id("x").unwrap().element("p").unwrap_err();
    assert!(matches!(err, SelectorError::Uniqueness { .. }));
}

#[test]
fn test_repeatable_categories_accept_duplicates() {
    let mut selector = attr("a").unwrap().attr("a").unwrap();
    assert_eq!(selector.render(), "[a][a]");
    let mut selector = pseudo_class("x").unwrap().pseudo_class("x").unwrap();
    assert_eq!(selector.render(), ":x:x");
}

// Ordering

#[test]
fn test_class_after_attr_is_order_error() {
    let err = attr("href").unwrap().class("x").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            category: Category::Class,
            previous: Category::Attribute,
        }
    );
}

#[test]
fn test_element_after_id_is_order_error() {
    let err = id("main").unwrap().element("div").unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Order {
            category: Category::Element,
            previous: Category::Id,
        }
    ));
}

#[test]
fn test_pseudo_class_after_pseudo_element_is_order_error() {
    let err = pseudo_element("after").unwrap().pseudo_class("hover").unwrap_err();
    assert_eq!(err.category(), Category::PseudoClass);
}

#[test]
fn test_skipping_categories_is_allowed() {
    let mut selector = element("input").unwrap().pseudo_element("placeholder").unwrap();
    assert_eq!(selector.render(), "input::placeholder");
}

#[test]
fn test_failed_push_leaves_selector_usable() {
    let mut selector = Selector::new();
    selector.push(Category::Class, "a").unwrap();
    selector.push(Category::Attribute, "b").unwrap();

    let err = selector.push(Category::Class, "c").unwrap_err();
    assert!(matches!(err, SelectorError::Order { .. }));

    assert_eq!(selector.class_parts(), ["a".to_string()]);
    assert_eq!(selector.last_rank(), 4);
    assert_eq!(selector.render(), ".a[b]");
    // Still rejected after rendering: ordering state is not reset.
    assert!(selector.push(Category::Id, "late").is_err());
}

#[test]
fn test_accessors_report_parts() {
    let selector = element("a")
        .unwrap()
        .id("home")
        .unwrap()
        .class("nav")
        .unwrap()
        .pseudo_element("marker")
        .unwrap();
    assert_eq!(selector.element_part(), Some("a"));
    assert_eq!(selector.id_part(), Some("home"));
    assert_eq!(selector.class_parts(), ["nav".to_string()]);
    assert!(selector.attribute_parts().is_empty());
    assert!(selector.pseudo_class_parts().is_empty());
    assert_eq!(selector.pseudo_element_part(), Some("marker"));
    assert_eq!(selector.last_category(), Some(Category::PseudoElement));
    assert_eq!(selector.pending(), "a#home.nav::marker");
}

#[test]
fn test_empty_selector() {
    let mut selector = Selector::new();
    assert_eq!(selector.last_rank(), 0);
    assert_eq!(selector.render(), "");
    assert_eq!(selector.to_string(), "");
}

#[test]
fn test_parts_serialize_without_empty_fields() {
    let selector = element("a").unwrap().class("x").unwrap().class("y").unwrap();
    let json = serde_json::to_value(selector.parts()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "element": "a", "classes": ["x", "y"] })
    );
}

#[test]
fn test_error_messages_name_categories() {
    let err = attr("x").unwrap().class("y").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("class cannot follow attribute"), "{message}");

    let err = pseudo_element("a").unwrap().pseudo_element("b").unwrap_err();
    assert!(err.to_string().contains("pseudo-element is already `a`"));
}
