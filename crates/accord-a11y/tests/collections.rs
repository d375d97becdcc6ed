//! Per-document collections

mod common;

use accord_a11y::collect::MediaKind;
use accord_a11y::{DocumentId, EngineConfig};
use accord_aria::Role;
use common::{by_id, evaluate, evaluate_with};

#[test]
fn test_landmarks_and_headings() {
    let model = evaluate(
        r#"<header id="banner"><h1>Site</h1></header>
           <nav id="nav"><ul><li><a href="/">Home</a></li><li><a href="/a">About</a></li></ul></nav>
           <main id="main">
             <h2>Intro</h2>
             <section aria-label="Details" id="region"><h3>More</h3></section>
             <section id="plain"><h3>Untitled</h3></section>
           </main>
           <h4>Loose</h4>"#,
    );
    let structure = &model.collections().structure;
    assert!(structure.has_main(DocumentId::TOP));
    let levels: Vec<u32> = structure.headings.iter().map(|h| h.level).collect();
    assert_eq!(levels, vec![1, 2, 3, 3, 4]);
    assert_eq!(structure.landmarks.len(), 3);

    let main = &structure.landmarks[2];
    assert_eq!(main.element, by_id(&model, "main"));
    assert_eq!(main.headings.len(), 2);
    assert_eq!(main.children.len(), 1);
    assert_eq!(main.children[0].role, Role::Region);
    assert_eq!(structure.unlandmarked_headings.len(), 1);
}

#[test]
fn test_lists_count_links() {
    let model = evaluate(
        r#"<ul id="outer">
             <li><a href="/1">one</a></li>
             <li><ol id="inner"><li><a href="/2">two</a></li></ol></li>
           </ul>"#,
    );
    let lists = &model.collections().lists.lists;
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].link_count, 1);
    let inner = &lists[0].children[1].children[0];
    assert_eq!(inner.element, by_id(&model, "inner"));
    assert_eq!(inner.link_count, 1);
}

#[test]
fn test_controls_and_forms() {
    let model = evaluate(
        r#"<form id="f">
             <fieldset><legend>Contact</legend>
               <label for="n">Name</label><input id="n">
             </fieldset>
             <button>Send</button>
           </form>
           <button id="outside">Other</button>"#,
    );
    let controls = &model.collections().controls;
    let form = by_id(&model, "f");
    assert_eq!(controls.forms, vec![form]);
    let in_form = controls.in_form(form);
    assert!(in_form.contains(&by_id(&model, "n")));
    assert!(!in_form.contains(&by_id(&model, "outside")));
    assert_eq!(
        model.facts(by_id(&model, "n")).unwrap().grouping_labels,
        vec!["Contact".to_string()]
    );
}

#[test]
fn test_media_images_links_ids() {
    let model = evaluate(
        r##"<video id="v" controls autoplay src="clip.mp4"><track kind="captions" srclang="en"></video>
           <object data="movie.swf"><param name="quality" value="high"></object>
           <img id="logo" src="/static/logo.png?v=3" alt="Logo" usemap="#m">
           <map name="m"><area href="/a" alt="A"><area href="/b" alt="B"></map>
           <svg><title>Chart</title></svg>
           <a href="/a">More</a><a href="/b">more</a>
           <p id="twin">1</p><p id="twin">2</p>"##,
    );
    let collections = model.collections();

    let video = &collections.media.media[0];
    assert_eq!(video.kind, MediaKind::Video);
    assert!(video.has_track("captions") && video.autoplay && video.controls);
    assert_eq!(collections.media.media[1].params, vec![("quality".to_string(), "high".to_string())]);

    let images = &collections.images;
    assert_eq!(images.images[0].file_name.as_deref(), Some("logo.png"));
    assert!(images.images.iter().any(|i| i.is_svg));
    let map = images.map_for(model.tree(), by_id(&model, "logo")).unwrap();
    assert_eq!(map.areas.len(), 2);

    let links = &collections.links;
    assert!(links.links.len() >= 4);
    assert_eq!(links.ambiguous().len(), 1);

    assert_eq!(collections.ids.duplicates(DocumentId::TOP), ["twin".to_string()]);
}

#[test]
fn test_aria13_roles_need_config() {
    let html = r#"<span id="m" role="mark">hit</span>"#;
    let model = evaluate(html);
    assert_eq!(model.role(by_id(&model, "m")).unwrap(), Role::Generic);
    let model = evaluate_with(html, EngineConfig::aria13());
    assert_eq!(model.role(by_id(&model, "m")).unwrap(), Role::Mark);
}
