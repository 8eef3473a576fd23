use careermatch_core::{ConfigError, CoreError, ErrorExt, ErrorReporter, UploadError};

#[test]
fn test_error_codes() {
    let upload_error = CoreError::Upload(UploadError::NoFileSelected);
    assert_eq!(upload_error.error_code(), "UPLOAD");

    let config_error = CoreError::Config(ConfigError::ValidationFailed {
        reason: "bad".to_string(),
    });
    assert_eq!(config_error.error_code(), "CONFIG");

    let not_found = CoreError::NotFound {
        resource: "internship posting 9".to_string(),
    };
    assert_eq!(not_found.error_code(), "NOT_FOUND");

    let unsupported = UploadError::UnsupportedMediaType {
        file_name: "cv.docx".to_string(),
        media_type: "application/msword".to_string(),
    };
    assert_eq!(unsupported.error_code(), "UPLOAD_UNSUPPORTED_TYPE");
}

#[test]
fn test_user_friendly_messages() {
    let upload_error = CoreError::Upload(UploadError::UnsupportedMediaType {
        file_name: "cv.png".to_string(),
        media_type: "image/png".to_string(),
    });
    assert_eq!(upload_error.user_friendly_message(), "Please upload a PDF file");

    let missing = CoreError::Upload(UploadError::NoFileSelected);
    assert_eq!(missing.user_friendly_message(), "Please upload a PDF file");

    let config_error = CoreError::Config(ConfigError::InvalidValue {
        field: "window.width".to_string(),
        value: "0".to_string(),
    });
    let message = config_error.user_friendly_message();
    assert!(message.contains("window.width"));
}

#[test]
fn test_error_conversion() {
    let err: CoreError = UploadError::AlreadySubmitted.into();
    assert!(matches!(err, CoreError::Upload(UploadError::AlreadySubmitted)));
    assert_eq!(
        err.to_string(),
        "Upload error: A resume has already been submitted"
    );
}

#[test]
fn test_error_reporter() {
    let reporter = ErrorReporter::new()
        .with_error_reporting(true)
        .with_warning_reporting(true);
    let error = CoreError::Upload(UploadError::NoFileSelected);

    // This test just ensures the methods don't panic
    reporter.report_error(&error);
    reporter.report_warning(&error);
}
