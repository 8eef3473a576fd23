use crate::types::{ProfileField, UserProfile};
use tracing::debug;

/// Splits comma separated input into trimmed skills. Blank tokens are kept,
/// so `""` yields `[""]`.
pub fn parse_skills(text: &str) -> Vec<String> {
    text.split(',').map(|skill| skill.trim().to_string()).collect()
}

/// Owns the committed profile and the draft used while editing.
///
/// Outside edit mode the draft always equals the committed profile.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    committed: UserProfile,
    draft: UserProfile,
    editing: bool,
}

impl ProfileEditor {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            draft: profile.clone(),
            committed: profile,
            editing: false,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.committed
    }

    pub fn draft(&self) -> &UserProfile {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self) {
        self.draft = self.committed.clone();
        self.editing = true;
        debug!("Profile edit started");
    }

    pub fn edit_field(&mut self, field: ProfileField, value: String) {
        if !self.editing {
            debug!("Ignoring edit of {:?} outside edit mode", field);
            return;
        }
        self.draft.set_field(field, value);
    }

    pub fn edit_skills(&mut self, text: &str) {
        if !self.editing {
            debug!("Ignoring skills edit outside edit mode");
            return;
        }
        self.draft.skills = parse_skills(text);
    }

    pub fn save(&mut self) {
        if self.editing {
            self.committed = self.draft.clone();
        }
        self.editing = false;
        debug!("Profile saved for {}", self.committed.name);
    }

    pub fn cancel(&mut self) {
        self.draft = self.committed.clone();
        self.editing = false;
        debug!("Profile edit cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_profile;

    #[test]
    fn skills_are_split_and_trimmed() {
        assert_eq!(parse_skills("React, Node.js,  Go"), vec!["React", "Node.js", "Go"]);
    }

    #[test]
    fn empty_skills_input_keeps_one_blank_entry() {
        assert_eq!(parse_skills(""), vec![""]);
        assert_eq!(parse_skills("Rust,,"), vec!["Rust", "", ""]);
    }

    #[test]
    fn save_commits_draft() {
        let mut editor = ProfileEditor::new(default_profile());
        editor.begin_edit();
        editor.edit_field(ProfileField::Name, "Jane".to_string());
        editor.edit_skills("Rust, Go");
        assert_eq!(editor.profile().name, "John Doe");

        editor.save();
        assert!(!editor.is_editing());
        assert_eq!(editor.profile().name, "Jane");
        assert_eq!(editor.profile().skills, vec!["Rust", "Go"]);
        assert_eq!(editor.profile(), editor.draft());
    }

    #[test]
    fn cancel_discards_draft() {
        let mut editor = ProfileEditor::new(default_profile());
        editor.begin_edit();
        editor.edit_field(ProfileField::Name, "Jane".to_string());
        editor.cancel();

        assert!(!editor.is_editing());
        assert_eq!(editor.profile().name, "John Doe");
        assert_eq!(editor.draft().name, "John Doe");
    }

    #[test]
    fn edits_outside_edit_mode_are_ignored() {
        let mut editor = ProfileEditor::new(default_profile());
        editor.edit_field(ProfileField::Email, "x@y.z".to_string());
        editor.edit_skills("");
        assert_eq!(editor.profile(), editor.draft());
        assert_eq!(editor.draft().email, "john.doe@example.com");
    }

    #[test]
    fn email_and_phone_accept_free_text() {
        let mut editor = ProfileEditor::new(default_profile());
        editor.begin_edit();
        editor.edit_field(ProfileField::Email, "not an email".to_string());
        editor.edit_field(ProfileField::Phone, "call me".to_string());
        editor.save();
        assert_eq!(editor.profile().email, "not an email");
        assert_eq!(editor.profile().phone, "call me");
    }
}
