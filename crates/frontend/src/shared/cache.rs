//! Tag-based invalidation for remote collections.
//!
//! Every list read is associated with an [`EntityTag`]; mutations bump the
//! tag's version and every live list controller tracking it refetches. This
//! mirrors the provides/invalidates contract of the backend API layer.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityTag {
    Client,
    Project,
    Interaction,
    Reminder,
    Freelancer,
    User,
}

/// One version signal per tag so invalidating clients does not disturb
/// controllers watching projects.
#[derive(Clone, Copy)]
pub struct InvalidationBus {
    clients: RwSignal<u32>,
    projects: RwSignal<u32>,
    interactions: RwSignal<u32>,
    reminders: RwSignal<u32>,
    freelancer: RwSignal<u32>,
    user: RwSignal<u32>,
}

impl InvalidationBus {
    pub fn new() -> Self {
        Self {
            clients: RwSignal::new(0),
            projects: RwSignal::new(0),
            interactions: RwSignal::new(0),
            reminders: RwSignal::new(0),
            freelancer: RwSignal::new(0),
            user: RwSignal::new(0),
        }
    }

    fn slot(&self, tag: EntityTag) -> RwSignal<u32> {
        match tag {
            EntityTag::Client => self.clients,
            EntityTag::Project => self.projects,
            EntityTag::Interaction => self.interactions,
            EntityTag::Reminder => self.reminders,
            EntityTag::Freelancer => self.freelancer,
            EntityTag::User => self.user,
        }
    }

    /// Tracked read; fetch effects subscribe to the tag through this.
    pub fn version(&self, tag: EntityTag) -> u32 {
        self.slot(tag).get()
    }

    /// Marks every read of `tag` stale.
    pub fn invalidate(&self, tag: EntityTag) {
        self.slot(tag).update(|v| *v += 1);
    }
}

impl Default for InvalidationBus {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_invalidation() -> InvalidationBus {
    use_context::<InvalidationBus>().expect("InvalidationBus not provided in context")
}
