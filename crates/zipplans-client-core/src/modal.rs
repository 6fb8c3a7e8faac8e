//! Modal flags and the create/update form state machine.

use crate::resource::Draft;

/// The three operations a resource exposes through overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOp {
    Create,
    Update,
    Delete,
}

/// Which overlay is currently open for one resource.
///
/// The page controller owns one value per resource and shares it among the
/// create/update/delete flows, so every mutation goes through [`Self::set`]
/// and merges exactly one key. There is deliberately no constructor taking
/// all three flags: sibling flags set between renders must survive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalFlags {
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl ModalFlags {
    /// Read-modify-write merge of a single flag.
    pub fn set(&mut self, op: ModalOp, open: bool) {
        match op {
            ModalOp::Create => self.create = open,
            ModalOp::Update => self.update = open,
            ModalOp::Delete => self.delete = open,
        }
    }

    #[must_use]
    pub fn is_open(&self, op: ModalOp) -> bool {
        match op {
            ModalOp::Create => self.create,
            ModalOp::Update => self.update,
            ModalOp::Delete => self.delete,
        }
    }
}

/// Lifecycle of one create-or-update form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    OpenClean,
    OpenDirty,
    Submitting,
}

/// Field state for one create-or-update form hosted in a dismissible
/// overlay: the draft, a single validation-error flag, and a submitting flag
/// guarding duplicate submits.
#[derive(Debug, Clone, Default)]
pub struct ModalForm<D: Draft> {
    pub draft: D,
    pub submitting: bool,
    pub has_errors: bool,
    dirty: bool,
}

impl<D: Draft> ModalForm<D> {
    /// Seeds the draft when a modal opens (default for create, the current
    /// record's write shape for update).
    pub fn seed(&mut self, draft: D) {
        self.draft = draft;
        self.dirty = false;
        self.has_errors = false;
    }

    /// Applies one field edit. Edits always clear a prior validation error
    /// and re-apply the field caps.
    pub fn edit(&mut self, apply: impl FnOnce(&mut D)) {
        apply(&mut self.draft);
        self.draft.clamp();
        self.dirty = true;
        self.has_errors = false;
    }

    /// Submit-time required-field check. On failure the error flag is raised
    /// and no request may be sent.
    pub fn validate(&mut self) -> bool {
        if self.draft.is_complete() {
            true
        } else {
            self.has_errors = true;
            false
        }
    }

    /// Discards the draft. Runs on every close, cancel or success alike.
    pub fn reset(&mut self) {
        self.draft = D::default();
        self.submitting = false;
        self.has_errors = false;
        self.dirty = false;
    }

    /// Current phase given whether this form's modal flag is raised.
    #[must_use]
    pub fn phase(&self, open: bool) -> FormPhase {
        if !open {
            FormPhase::Closed
        } else if self.submitting {
            FormPhase::Submitting
        } else if self.dirty {
            FormPhase::OpenDirty
        } else {
            FormPhase::OpenClean
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanDraft;

    #[test]
    fn set_merges_a_single_flag() {
        let mut flags = ModalFlags::default();
        flags.set(ModalOp::Update, true);
        flags.set(ModalOp::Delete, true);
        flags.set(ModalOp::Update, false);
        assert!(!flags.create);
        assert!(!flags.update);
        assert!(flags.delete);
        assert!(flags.is_open(ModalOp::Delete));
    }

    #[test]
    fn edits_clear_the_error_flag() {
        let mut form: ModalForm<PlanDraft> = ModalForm::default();
        assert!(!form.validate());
        assert!(form.has_errors);

        form.edit(|draft| draft.name = "Small".to_string());
        assert!(!form.has_errors);
    }

    #[test]
    fn edits_apply_field_caps() {
        let mut form: ModalForm<PlanDraft> = ModalForm::default();
        form.edit(|draft| draft.name = "a name far longer than twenty characters".to_string());
        assert_eq!(form.draft.name.chars().count(), 20);
    }

    #[test]
    fn phase_tracks_the_form_lifecycle() {
        let mut form: ModalForm<PlanDraft> = ModalForm::default();
        assert_eq!(form.phase(false), FormPhase::Closed);
        assert_eq!(form.phase(true), FormPhase::OpenClean);

        form.edit(|draft| draft.name = "Small".to_string());
        assert_eq!(form.phase(true), FormPhase::OpenDirty);

        form.submitting = true;
        assert_eq!(form.phase(true), FormPhase::Submitting);

        form.reset();
        assert_eq!(form.phase(false), FormPhase::Closed);
        assert_eq!(form.draft, PlanDraft::default());
    }
}
