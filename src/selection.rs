//! Current resume and job description selection

use crate::input::{Document, Role};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Populated,
}

/// Owns at most one document per role. Every write replaces the whole slot.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    resume: Option<Document>,
    job_description: Option<Document>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_resume(&mut self, doc: Option<Document>) {
        self.set(Role::Resume, doc);
    }

    pub fn set_job_description(&mut self, doc: Option<Document>) {
        self.set(Role::JobDescription, doc);
    }

    pub fn set(&mut self, role: Role, doc: Option<Document>) {
        let slot = self.slot_mut(role);
        let previous = std::mem::replace(slot, doc);
        if previous.is_some() {
            debug!("Discarded previous {} selection", role);
        }
    }

    pub fn clear(&mut self, role: Role) {
        self.set(role, None);
    }

    pub fn get(&self, role: Role) -> Option<&Document> {
        match role {
            Role::Resume => self.resume.as_ref(),
            Role::JobDescription => self.job_description.as_ref(),
        }
    }

    pub fn resume(&self) -> Option<&Document> {
        self.resume.as_ref()
    }

    pub fn job_description(&self) -> Option<&Document> {
        self.job_description.as_ref()
    }

    pub fn state(&self, role: Role) -> SlotState {
        match self.get(role) {
            Some(_) => SlotState::Populated,
            None => SlotState::Empty,
        }
    }

    pub fn can_analyze(&self) -> bool {
        self.resume.is_some() && self.job_description.is_some()
    }

    /// Both documents, when analysis is runnable
    pub fn pair(&self) -> Option<(&Document, &Document)> {
        Some((self.resume.as_ref()?, self.job_description.as_ref()?))
    }

    fn slot_mut(&mut self, role: Role) -> &mut Option<Document> {
        match role {
            Role::Resume => &mut self.resume,
            Role::JobDescription => &mut self.job_description,
        }
    }
}
