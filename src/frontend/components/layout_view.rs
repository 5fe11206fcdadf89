use brain_web::layout::{DomAttributes, Element, Node, Tag};
use brain_web::navigation::Navigator;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Render a layout tree, wiring link activation to `navigator`.
pub fn render_node<N>(node: &Node, navigator: &N) -> AnyView
where
    N: Navigator + Clone + 'static,
{
    match node {
        Node::Text { text } => text.clone().into_any(),
        Node::LineBreak => view! { <br/> }.into_any(),
        Node::Element(element) => render_element(element, navigator),
    }
}

fn render_element<N>(element: &Element, navigator: &N) -> AnyView
where
    N: Navigator + Clone + 'static,
{
    let DomAttributes {
        id,
        class,
        destination,
    } = element.dom_attributes();
    let class = class.unwrap_or_default();
    let children = element
        .children
        .iter()
        .map(|child| render_node(child, navigator))
        .collect_view();

    match element.tag {
        Tag::Div => view! { <div id=id class=class>{children}</div> }.into_any(),
        Tag::H1 => view! { <h1 id=id class=class>{children}</h1> }.into_any(),
        Tag::H2 => view! { <h2 id=id class=class>{children}</h2> }.into_any(),
        Tag::Button => view! { <button id=id class=class>{children}</button> }.into_any(),
        Tag::Link => {
            // Not an anchor: the router must not see this click, the navigator issues it
            let click = element.click_handler(navigator.clone());
            let on_click = move |_: MouseEvent| {
                if let Err(e) = click() {
                    web_sys::console::error_1(&format!("Navigation failed: {}", e).into());
                }
            };

            view! {
                <nav id=id class=class data-href=destination on:click=on_click>
                    {children}
                </nav>
            }
            .into_any()
        }
    }
}
