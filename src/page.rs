// Page markup - the templates and host container the components mount into
//
// This is the board's static page: an `app` host plus three templates.
// Components look them up by id at construction time.

use crate::dom::{Document, Markup};

/// Host container every top-level component attaches to
pub const APP_HOST: &str = "app";

pub const INPUT_TEMPLATE: &str = "project-input";
pub const LIST_TEMPLATE: &str = "project-list";
pub const ITEM_TEMPLATE: &str = "single-project";

/// Element ids of the form controls inside the input template
pub const TITLE_INPUT: &str = "title";
pub const DESCRIPTION_INPUT: &str = "description";
pub const PEOPLE_INPUT: &str = "people";

/// Register templates and create the `app` host
pub fn build(doc: &Document) {
    doc.register_template(INPUT_TEMPLATE, input_template());
    doc.register_template(ITEM_TEMPLATE, item_template());
    doc.register_template(LIST_TEMPLATE, list_template());
    doc.append_markup(doc.body(), &Markup::new("div").id(APP_HOST));
}

fn form_control(label: &str, control: Markup) -> Markup {
    Markup::new("div")
        .class("form-control")
        .child(Markup::new("label").text(label))
        .child(control)
}

fn input_template() -> Markup {
    Markup::new("form")
        .child(form_control(
            "Title",
            Markup::new("input").id(TITLE_INPUT),
        ))
        .child(form_control(
            "Description",
            Markup::new("textarea").id(DESCRIPTION_INPUT),
        ))
        .child(form_control(
            "People",
            Markup::new("input").id(PEOPLE_INPUT),
        ))
        .child(Markup::new("button").text("ADD PROJECT"))
}

fn item_template() -> Markup {
    Markup::new("li")
        .child(Markup::new("h2"))
        .child(Markup::new("h3"))
        .child(Markup::new("p"))
}

fn list_template() -> Markup {
    Markup::new("section")
        .class("projects")
        .child(Markup::new("header").child(Markup::new("h2")))
        .child(Markup::new("ul"))
}
