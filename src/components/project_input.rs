// Project form - validates input and adds projects to the store
//
// The form is write-only: it never subscribes to the store. A submission
// that fails validation raises the "Invalid!" alert and leaves both the form
// and the store as they were.

use super::{attach_from_template, bind, require, Component};
use crate::dom::{Document, Event, EventKind, InsertPosition, NodeId};
use crate::page::{APP_HOST, DESCRIPTION_INPUT, INPUT_TEMPLATE, PEOPLE_INPUT, TITLE_INPUT};
use crate::state::ProjectStore;
use crate::validation::{validate, Validatable, Value};
use anyhow::Result;
use std::cell::OnceCell;
use std::rc::{Rc, Weak};

/// Message shown when any field fails validation
pub const INVALID_INPUT: &str = "Invalid!";

/// Element id assigned to the form
pub const FORM_ID: &str = "user-input";

/// Handles to the three form controls
#[derive(Debug, Clone, Copy)]
struct FormFields {
    title: NodeId,
    description: NodeId,
    people: NodeId,
}

/// Validated form values, ready for the store
#[derive(Debug, Clone, PartialEq)]
struct UserInput {
    title: String,
    description: String,
    people: u32,
}

pub struct ProjectInput {
    me: Weak<ProjectInput>,
    doc: Document,
    store: Rc<ProjectStore>,
    element: NodeId,
    fields: OnceCell<FormFields>,
}

impl ProjectInput {
    pub fn new(doc: &Document, store: Rc<ProjectStore>) -> Result<Rc<Self>> {
        let element = attach_from_template(
            doc,
            INPUT_TEMPLATE,
            APP_HOST,
            InsertPosition::AfterBegin,
            Some(FORM_ID),
        )?;

        let input = Rc::new_cyclic(|me| Self {
            me: me.clone(),
            doc: doc.clone(),
            store,
            element,
            fields: OnceCell::new(),
        });

        input.configure()?;
        Ok(input)
    }

    fn on_submit(&self, event: &mut Event) {
        event.prevent_default();

        let Some(input) = self.gather_userinput() else {
            return;
        };
        self.store
            .add_project(&input.title, &input.description, input.people);
        self.clear();
    }

    /// Read and validate the three controls, alerting on failure
    fn gather_userinput(&self) -> Option<UserInput> {
        let fields = self.fields.get()?;
        let title = self.doc.value(fields.title);
        let description = self.doc.value(fields.description);
        let people = self.doc.value(fields.people);

        let people_value = match people.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Text(people.clone()),
        };

        let title_rules = Validatable::new(title.as_str()).required();
        let description_rules = Validatable::new(description.as_str())
            .required()
            .min_length(5)
            .max_length(20);
        let people_rules = Validatable::new(people_value.clone()).required().min(2.0);

        // Only whole counts that fit the store's field
        let people = match people_value {
            Value::Number(n) if n.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&n) => {
                Some(n as u32)
            }
            _ => None,
        };

        match people {
            Some(people)
                if validate(&title_rules)
                    && validate(&description_rules)
                    && validate(&people_rules) =>
            {
                Some(UserInput {
                    title,
                    description,
                    people,
                })
            }
            _ => {
                tracing::debug!("Rejected form input");
                self.doc.alert(INVALID_INPUT);
                None
            }
        }
    }

    fn clear(&self) {
        if let Some(fields) = self.fields.get() {
            self.doc.set_value(fields.title, "");
            self.doc.set_value(fields.description, "");
            self.doc.set_value(fields.people, "");
        }
    }
}

impl Component for ProjectInput {
    fn element(&self) -> NodeId {
        self.element
    }

    fn configure(&self) -> Result<()> {
        let fields = FormFields {
            title: require(&self.doc, self.element, &format!("input#{}", TITLE_INPUT))?,
            description: require(
                &self.doc,
                self.element,
                &format!("textarea#{}", DESCRIPTION_INPUT),
            )?,
            people: require(&self.doc, self.element, &format!("input#{}", PEOPLE_INPUT))?,
        };
        let _ = self.fields.set(fields);

        self.doc.add_event_listener(
            self.element,
            EventKind::Submit,
            bind(&self.me, Self::on_submit),
        );
        Ok(())
    }

    /// The form is static markup; nothing to fill in
    fn render_content(&self) -> Result<()> {
        Ok(())
    }
}
