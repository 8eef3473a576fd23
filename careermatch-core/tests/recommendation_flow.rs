use careermatch_core::{
    catalog, Action, AppState, Effect, MatchStrength, Page, ProfileField, ResumeFile,
};

fn start_analysis(state: &mut AppState, file: &str) -> Effect {
    state
        .dispatch(Action::SubmitResume(Some(ResumeFile::from_path(file))))
        .expect("pdf upload should be accepted")
}

#[test]
fn upload_wait_reset_scenario() {
    let mut state = AppState::new();
    state
        .dispatch(Action::Navigate(Page::Recommendations))
        .unwrap();

    let ticket = match start_analysis(&mut state, "/tmp/resume.pdf") {
        Effect::StartAnalysis { ticket, file } => {
            assert_eq!(file.name, "resume.pdf");
            ticket
        }
        other => panic!("unexpected effect {:?}", other),
    };
    assert!(state.flow().is_processing());
    assert!(state.flow().recommendations().is_empty());

    state
        .dispatch(Action::AnalysisFinished {
            ticket,
            recommendations: catalog::mock_recommendations(),
        })
        .unwrap();
    assert!(!state.flow().is_processing());
    assert_eq!(state.flow().recommendations().len(), 5);

    let strengths: Vec<MatchStrength> = state
        .flow()
        .recommendations()
        .iter()
        .map(|r| r.strength())
        .collect();
    assert_eq!(
        strengths,
        vec![
            MatchStrength::Strong,
            MatchStrength::Strong,
            MatchStrength::Moderate,
            MatchStrength::Moderate,
            MatchStrength::Moderate,
        ]
    );

    assert_eq!(state.dispatch(Action::ResetUpload).unwrap(), Effect::None);
    assert!(state.flow().file().is_none());
    assert!(state.flow().recommendations().is_empty());
    assert_eq!(state.page(), Page::Recommendations);
}

#[test]
fn non_pdf_selections_never_leave_idle() {
    let mut state = AppState::new();
    for name in ["cv.docx", "cv.txt", "photo.png", "resume"] {
        assert!(state
            .dispatch(Action::SubmitResume(Some(ResumeFile::from_path(name))))
            .is_err());
        assert!(state.flow().file().is_none());
        assert!(state.flow().recommendations().is_empty());
    }
    assert!(state.dispatch(Action::SubmitResume(None)).is_err());
}

#[test]
fn reset_during_processing_cancels() {
    let mut state = AppState::new();
    let ticket = match start_analysis(&mut state, "cv.pdf") {
        Effect::StartAnalysis { ticket, .. } => ticket,
        other => panic!("unexpected effect {:?}", other),
    };
    assert_eq!(
        state.dispatch(Action::ResetUpload).unwrap(),
        Effect::CancelAnalysis(ticket)
    );
}

#[test]
fn profile_edit_save_and_cancel() {
    let mut state = AppState::new();
    state.dispatch(Action::Navigate(Page::Profile)).unwrap();

    state.dispatch(Action::BeginEdit).unwrap();
    state
        .dispatch(Action::EditField(
            "name".parse::<ProfileField>().unwrap(),
            "Jane".to_string(),
        ))
        .unwrap();
    state.dispatch(Action::CancelEdit).unwrap();
    assert_eq!(state.profile().profile().name, "John Doe");

    state.dispatch(Action::BeginEdit).unwrap();
    state
        .dispatch(Action::EditField(ProfileField::Name, "Jane".to_string()))
        .unwrap();
    state
        .dispatch(Action::EditSkills("React, Node.js,  Go".to_string()))
        .unwrap();
    state.dispatch(Action::SaveProfile).unwrap();

    let profile = state.profile().profile();
    assert_eq!(profile.name, "Jane");
    assert_eq!(profile.skills, vec!["React", "Node.js", "Go"]);
    assert!(!state.profile().is_editing());
    assert_eq!(state.profile().draft(), profile);
}
