use wasm_bindgen_test::*;
use yew::Renderer;

use hello_friend_web::app::App;
use hello_friend_web::components::footer::{Footer, Props};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .expect("window")
        .document()
        .expect("document")
}

fn ensure_app_root() -> web_sys::Element {
    let doc = document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
fn app_mounts_footer_with_default_attribution() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    let doc = document();
    let footer = doc
        .query_selector("footer")
        .expect("query footer")
        .expect("footer exists");
    let text = footer.text_content().unwrap_or_default();
    assert!(text.contains("Hello Friend"));
    let links = footer
        .query_selector_all("a")
        .expect("query attribution links");
    assert_eq!(links.length(), 3);
}

#[wasm_bindgen_test]
fn footer_injects_trusted_markup_into_live_dom() {
    let props = Props {
        copyrights: Some("<b id=\"injected-co\">Co.</b>".into()),
    };
    Renderer::<Footer>::with_root_and_props(ensure_app_root(), props).render();
    let doc = document();
    let bold = doc
        .get_element_by_id("injected-co")
        .expect("injected markup reaches the DOM");
    assert_eq!(bold.tag_name(), "B");
    assert_eq!(bold.text_content().unwrap_or_default(), "Co.");
}
