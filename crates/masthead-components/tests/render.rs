use dioxus::prelude::*;
use masthead_common::{AuthorRecord, AuthorRegistry};
use masthead_components::FrameOptions;
use masthead_components::render::{
    render_author_badge, render_author_list, render_frame, render_frame_text,
};

/// Helper: a small registry independent of the bundled data
fn test_registry() -> AuthorRegistry {
    let record = |key: &str, name: &str, first_name: &str, twitter: Option<&str>| AuthorRecord {
        key: key.into(),
        name: name.into(),
        first_name: first_name.into(),
        image: format!("/avatars/{key}.webp"),
        twitter: twitter.map(Into::into),
    };
    AuthorRegistry::new([
        record("noor", "Noor Haddad", "Noor", Some("noorh")),
        record("ivo", "Ivo Petrov", "Ivo", None),
        record("sade", "Sade Adeyemi", "Sade", Some("sade_a")),
        record("pia", "Pia Lund", "Pia", Some("")),
    ])
    .unwrap()
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|id| id.to_string()).collect()
}

fn renders_nothing(html: &str) -> bool {
    !html.contains("<div") && !html.contains("<a") && !html.contains("<img")
}

#[test]
fn test_badge_markup() {
    let html = render_author_badge(&test_registry(), "noor", false);
    assert!(html.contains(r#"href="https://twitter.com/noorh""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(html.contains(r#"src="/avatars/noor.webp""#));
    assert!(html.contains(r#"width="40""#));
    assert!(html.contains(r#"height="40""#));
    assert!(html.contains("rounded-full"));
    assert!(html.contains(r#"alt="Picture Noor Haddad""#));
    assert!(html.contains(">Noor Haddad<"));
}

#[test]
fn test_badge_snapshots() {
    let registry = test_registry();
    insta::assert_snapshot!(
        "badge_with_handle",
        render_author_badge(&registry, "noor", false)
    );
    insta::assert_snapshot!(
        "badge_without_handle",
        render_author_badge(&registry, "ivo", false)
    );
}

#[test]
fn test_badge_without_handle_uses_placeholder() {
    let registry = test_registry();
    let html = render_author_badge(&registry, "ivo", false);
    assert!(html.contains(r##"href="#""##));
    assert!(!html.contains("twitter.com"));

    let html = render_author_badge(&registry, "pia", false);
    assert!(html.contains(r##"href="#""##));
}

#[test]
fn test_badge_first_name_fallback() {
    let registry = test_registry();
    let html = render_author_badge(&registry, "Sade", true);
    assert!(html.contains(r#"href="https://twitter.com/sade_a""#));
    assert!(html.contains(">Sade<"));
    assert!(!html.contains(">Sade Adeyemi<"));

    assert!(renders_nothing(&render_author_badge(&registry, "Nobody", false)));
}

#[test]
fn test_list_renders_known_authors_in_order() {
    let html = render_author_list(&test_registry(), &ids(&["ivo", "ghost", "noor"]));
    assert!(html.contains("justify-center"));
    let ivo = html.find("Ivo Petrov").unwrap();
    let noor = html.find("Noor Haddad").unwrap();
    assert!(ivo < noor);
    assert_eq!(html.matches("<a ").count(), 2);
}

#[test]
fn test_list_empty_renders_nothing() {
    let registry = test_registry();
    assert!(renders_nothing(&render_author_list(&registry, &[])));
    assert!(renders_nothing(&render_author_list(&registry, &ids(&["ghost", "Noor"]))));
}

#[test]
fn test_list_switches_to_first_names_past_two() {
    let registry = test_registry();

    let two = render_author_list(&registry, &ids(&["noor", "ivo"]));
    assert!(two.contains(">Noor Haddad<"));
    assert!(two.contains(">Ivo Petrov<"));

    let three = render_author_list(&registry, &ids(&["noor", "ivo", "sade"]));
    assert!(three.contains(">Noor<"));
    assert!(three.contains(">Ivo<"));
    assert!(three.contains(">Sade<"));
    assert!(!three.contains(">Noor Haddad<"));
    // The alt text keeps the full name.
    assert!(three.contains(r#"alt="Picture Noor Haddad""#));
}

#[test]
fn test_list_snapshots() {
    let registry = test_registry();
    insta::assert_snapshot!(
        "list_two_authors",
        render_author_list(&registry, &ids(&["noor", "ivo"]))
    );
    insta::assert_snapshot!(
        "list_three_authors",
        render_author_list(&registry, &ids(&["noor", "ivo", "sade"]))
    );
}

#[test]
fn test_list_keeps_duplicates() {
    let html = render_author_list(&test_registry(), &ids(&["ivo", "ivo"]));
    assert_eq!(html.matches("<a ").count(), 2);
    assert_eq!(html.matches(">Ivo Petrov<").count(), 2);
}

#[test]
fn test_author_components_without_registry_render_nothing() {
    let html = dioxus_ssr::render_element(rsx! {
        masthead_components::AuthorList { authors: ids(&["noor"]) }
    });
    assert!(renders_nothing(&html));
}

#[test]
fn test_frame_defaults() {
    let html = render_frame_text(FrameOptions::default(), "", "caption");
    assert!(html.contains(r#"class="my-4""#));
    assert!(html.contains("max-w-2xl"));
    assert!(html.contains("bg-primary/5"));
    assert!(!html.contains("bg-gradient-to-tr"));
    assert!(!html.contains("max-w-full"));
    assert!(html.contains("caption"));
}

#[test]
fn test_frame_border_and_transparent() {
    let options = FrameOptions {
        border: true,
        transparent: true,
        ..Default::default()
    };
    let html = render_frame_text(options, "not-prose", "shot");
    assert!(html.contains("bg-gradient-to-tr"));
    assert!(html.contains("not-prose"));
    assert!(html.contains("bg-transparent"));
    assert!(!html.contains("bg-primary/5"));
    assert!(html.contains("max-w-2xl"));
}

#[test]
fn test_frame_passes_children_through() {
    let options = FrameOptions {
        full_width: true,
        ..Default::default()
    };
    let html = render_frame(options, "", rsx! {
        img { src: "/shots/editor.png", alt: "editor" }
    });
    assert!(html.contains("max-w-full"));
    assert!(!html.contains("max-w-2xl"));
    assert!(html.contains(r#"src="/shots/editor.png""#));
    let outer = html.find("my-4").unwrap();
    let inner = html.find("overflow-hidden").unwrap();
    let child = html.find("/shots/editor.png").unwrap();
    assert!(outer < inner && inner < child);
}

#[test]
fn test_frame_snapshots() {
    let frame = |border, full_width, transparent, class| {
        let options = FrameOptions {
            border,
            full_width,
            transparent,
        };
        render_frame_text(options, class, "caption")
    };
    insta::assert_snapshot!("frame_default", frame(false, false, false, ""));
    insta::assert_snapshot!("frame_border", frame(true, false, false, ""));
    insta::assert_snapshot!("frame_full_width", frame(false, true, false, ""));
    insta::assert_snapshot!("frame_transparent", frame(false, false, true, ""));
    insta::assert_snapshot!("frame_all_flags", frame(true, true, true, "not-prose"));
}

#[test]
fn test_frame_escapes_text_content() {
    let html = render_frame_text(FrameOptions::default(), "", "<b>bold</b> & more");
    assert!(html.contains("&#60;b&#62;bold&#60;/b&#62; &#38; more"));
    assert!(!html.contains("<b>"));
}
