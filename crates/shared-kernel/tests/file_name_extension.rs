use ll_shared_kernel::FileName;

fn ext(name: &str) -> Option<String> {
    FileName::from(name).extension().map(|e| e.as_str().to_string())
}

#[test]
fn extension_keeps_dot_and_case() {
    assert_eq!(ext("main.go").as_deref(), Some(".go"));
    assert_eq!(ext("file.JS").as_deref(), Some(".JS"));
    assert_eq!(ext("archive.tar.gz").as_deref(), Some(".gz"));
    assert_eq!(ext(".bashrc").as_deref(), Some(".bashrc"));
}

#[test]
fn names_without_extension() {
    assert_eq!(ext("Makefile"), None);
    assert_eq!(ext("trailing."), None);
    assert_eq!(ext("."), None);
}
