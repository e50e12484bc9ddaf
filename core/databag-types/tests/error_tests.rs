use databag_types::Error;

#[test]
fn error_display_invalid_path() {
    let err = Error::InvalidPath("person..firstName".into());
    let msg = format!("{err}");
    assert!(msg.contains("invalid path provided"));
    assert!(msg.contains("person..firstName"));
}

#[test]
fn invalid_path_is_distinguishable() {
    assert!(Error::InvalidPath(String::new()).is_invalid_path());
}

#[test]
fn error_from_serde_json() {
    let serde_err: Result<serde_json::Value, _> = serde_json::from_str("not json");
    let err: Error = serde_err.unwrap_err().into();
    assert!(format!("{err}").contains("serialization"));
    assert!(!err.is_invalid_path());
}

#[test]
fn error_is_debug() {
    let err = Error::InvalidPath("x".into());
    let _ = format!("{err:?}");
}
