// Project store with synchronous subscriber notification
//
// The store owns every Project. Writes go through `add_project` and
// `move_project`; both notify every listener, in registration order, with a
// freshly cloned Vec before returning. Listeners are snapshotted before the
// call so a listener may read the store (or register another listener)
// without tripping a RefCell borrow.

use crate::model::{Project, ProjectStatus};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Subscriber callback - receives an owned copy of the full sequence
type Listener = Rc<dyn Fn(Vec<Project>)>;

/// The single authoritative collection of projects
#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<Listener>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. There is no way to unregister.
    pub fn add_listener(&self, listener: impl Fn(Vec<Project>) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Append a new Active project and notify
    ///
    /// No validation happens here; callers are expected to have checked
    /// their input already.
    pub fn add_project(&self, title: &str, description: &str, people: u32) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.projects.borrow_mut().push(Project {
            id: id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            people,
            status: ProjectStatus::Active,
        });

        tracing::info!("Added project '{}' ({} people)", title, people);
        tracing::debug!("Project id: {}", id);

        self.update_listeners();
        id
    }

    /// Change a project's status, then notify
    ///
    /// Listeners are notified even when the id is unknown or the status is
    /// already `new_status`; a drop always triggers a redraw.
    pub fn move_project(&self, project_id: &str, new_status: ProjectStatus) {
        {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|p| p.id == project_id) {
                Some(project) if project.status != new_status => {
                    tracing::info!(
                        "Moved '{}' from {} to {}",
                        project.title,
                        project.status,
                        new_status
                    );
                    project.status = new_status;
                }
                Some(_) => tracing::debug!("Project {} already {}", project_id, new_status),
                None => tracing::debug!("Move ignored, no project with id {}", project_id),
            }
        }

        self.update_listeners();
    }

    /// Read view of the live sequence, for inspection
    pub fn dump_projects(&self) -> Ref<'_, Vec<Project>> {
        self.projects.borrow()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    fn update_listeners(&self) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            let snapshot = self.projects.borrow().clone();
            listener(snapshot);
        }
    }
}
