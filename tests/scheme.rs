use std::fs;
use std::path::PathBuf;

use mutil::MUtil;
use mutil::host::{HostEnvironment, HostInfo, HostInfoError, StaticHost};
use mutil::scheme::{SchemeList, is_app_scheme_url, is_registered_scheme};
use mutil::version::VersionTarget;
use tempfile::TempDir;

const INFO: &str = r#"{
    "CFBundleShortVersionString": "5.2.1",
    "CFBundleVersion": "5210",
    "CFBundleURLTypes": [
        { "CFBundleURLName": "com.example.main", "CFBundleURLSchemes": ["myapp", "myapp-legacy"] },
        { "CFBundleURLName": "com.example.auth", "CFBundleURLSchemes": ["myapp-auth"] }
    ]
}"#;

fn write_info(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("Info.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn is_registered_scheme_matches_exactly() {
    assert!(is_registered_scheme("myapp", &["myapp", "otherapp"]));
    assert!(!is_registered_scheme("unknown", &[] as &[&str]));
    assert!(!is_registered_scheme("", &["myapp"]));
}

#[test]
fn host_info_file_drives_scheme_and_version_checks() {
    let dir = TempDir::new().unwrap();
    let info = HostInfo::load(&write_info(&dir, INFO)).unwrap();
    let util = MUtil::new(StaticHost::new(info).with_os_version("17.5"));

    assert!(util.is_app_scheme("myapp"));
    assert!(util.is_app_scheme("myapp-auth"));
    // only the first scheme of each URL type is registered
    assert!(!util.is_app_scheme("myapp-legacy"));

    assert!(util.check_version_range(VersionTarget::AppVersion, "5.2", "5.10"));
    assert!(util.check_version_range(VersionTarget::BuildVersion, "5000", "6000"));
    assert!(util.check_version_range(VersionTarget::OsVersion, "17", "17.5"));
}

#[test]
fn scheme_list_from_host_checks_urls() {
    let host = StaticHost::new(HostInfo::from_json(INFO).unwrap());
    let schemes: Vec<String> = SchemeList::from_host(&host)
        .iter()
        .map(str::to_string)
        .collect();

    assert!(is_app_scheme_url("myapp-auth://callback?code=1", &schemes));
    assert!(!is_app_scheme_url("https://example.com", &schemes));
    assert_eq!(host.url_schemes(), schemes);
}

#[test]
fn missing_host_info_file_is_io_error() {
    let dir = TempDir::new().unwrap();

    let result = HostInfo::load(&dir.path().join("missing.json"));

    assert!(matches!(result, Err(HostInfoError::Io { .. })));
}
