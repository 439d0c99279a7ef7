use yew::prelude::*;

struct ProfileLink {
    label: &'static str,
    href: &'static str,
}

const SITE_LINE: &str = "© 2026 Hello Friend";
const AUTHOR: ProfileLink = ProfileLink {
    label: "@friend",
    href: "https://hellofriend.dev",
};
const PROFILE_LINKS: &[ProfileLink] = &[
    ProfileLink {
        label: "GitHub",
        href: "https://github.com/hello-friend",
    },
    ProfileLink {
        label: "Twitter",
        href: "https://twitter.com/hellofriend",
    },
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Copyright markup injected into the footer verbatim.
    ///
    /// The value is never sanitized or escaped here. Whoever builds the
    /// props must only pass markup that is already safe to render.
    #[prop_or_default]
    pub copyrights: Option<AttrValue>,
}

/// Page footer showing either caller-supplied copyright markup or the
/// built-in attribution links.
#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let custom = p.copyrights.as_ref().filter(|c| !c.is_empty());
    html! {
        <footer>
        {
            match custom {
                Some(markup) => html! {
                    <div>{ Html::from_html_unchecked(markup.clone()) }</div>
                },
                None => html! {
                    <>
                        <span class="footer-copyrights">
                            { SITE_LINE }
                            { " by " }
                            <a href={AUTHOR.href}>{ AUTHOR.label }</a>
                        </span>
                        { for PROFILE_LINKS.iter().map(|link| html! {
                            <span class="footer-copyrights">
                                <a href={link.href}>{ link.label }</a>
                            </span>
                        }) }
                    </>
                },
            }
        }
        </footer>
    }
}
