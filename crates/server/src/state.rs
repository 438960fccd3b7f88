use std::sync::Arc;

use models::contact_message::ContactMessage;
use models::project::Project;
use models::service::Service;
use models::team_member::TeamMember;
use service::collection::Collection;
use service::contact::ContactService;

/// Shared handler state: one collection handle per entity plus the contact
/// facade. Nothing here is mutable between requests.
#[derive(Clone)]
pub struct ServerState {
    pub projects: Arc<dyn Collection<Project>>,
    pub services: Arc<dyn Collection<Service>>,
    pub team: Arc<dyn Collection<TeamMember>>,
    pub contact: Arc<ContactService>,
}

impl ServerState {
    pub fn new(
        projects: Arc<dyn Collection<Project>>,
        services: Arc<dyn Collection<Service>>,
        team: Arc<dyn Collection<TeamMember>>,
        messages: Arc<dyn Collection<ContactMessage>>,
    ) -> Self {
        Self {
            projects,
            services,
            team,
            contact: Arc::new(ContactService::new(messages)),
        }
    }
}
