use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IconError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(IconError::render("x").to_string().contains("render error:"));
    assert!(IconError::font("x").to_string().contains("font error:"));
}

#[test]
fn io_error_names_the_path() {
    let err = IconError::io(
        "res/mipmap-mdpi/ic_launcher.png",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    let msg = err.to_string();
    assert!(msg.contains("res/mipmap-mdpi/ic_launcher.png"));
    assert!(msg.contains("denied"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IconError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
