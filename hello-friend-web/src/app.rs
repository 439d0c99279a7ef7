use crate::components::footer::Footer;
use crate::site::SiteConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let site = use_memo((), |()| SiteConfig::load_from_static());
    let copyrights = site.copyrights.clone().map(AttrValue::from);

    html! {
        <div class="site">
            <main id="main" role="main" class="site-content">
                <h1 class="site-title">{ site.title.clone() }</h1>
                { (!site.description.is_empty())
                    .then(|| html! { <p class="site-description">{ site.description.clone() }</p> })
                    .unwrap_or_default() }
            </main>
            <Footer {copyrights} />
        </div>
    }
}
