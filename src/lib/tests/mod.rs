use super::errors::Error;
use super::resolver::*;
use super::substituter::*;
use super::types::*;
use std::fs::{read_to_string, File};
use std::io::prelude::*;
use tempfile::tempdir;

const TEMPLATE: &str = "V=_version E=_env B=_buildNumber";

fn stamp_template(cli_params: &CliParams) -> String {
    Stamper::from_substitutions(TARGET_FILE, resolve("1.2.3", cli_params))
        .stamp_str(TEMPLATE)
        .unwrap()
}

#[test]
fn test_read_version() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(VERSION_FILE);

    File::create(&path)
        .unwrap()
        .write_all(b"1.2.3\r\n")
        .unwrap();

    assert_eq!(read_version(&path).unwrap(), "1.2.3");

    File::create(&path).unwrap();
    assert_eq!(read_version(&path).unwrap(), "");

    dir.close().unwrap();
}

#[test]
fn test_read_version_missing() {
    let dir = tempdir().unwrap();

    match read_version(&dir.path().join(VERSION_FILE)) {
        Err(Error::VersionFile(_)) => (),
        x => panic!("Expected Error::VersionFile, got {:?}", x),
    }

    dir.close().unwrap();
}

#[test]
fn test_split_params() {
    assert_eq!(split_params("prod,99"), vec!["prod", "99"]);
    assert_eq!(split_params(",77"), vec!["", "77"]);
    assert_eq!(split_params("prod"), vec!["prod"]);
    assert_eq!(split_params(""), vec![""]);
}

#[test]
fn test_resolve_defaults() {
    let subs = resolve("1.2.3", &CliParams::default());

    assert_eq!(
        subs.iter().collect::<Vec<_>>(),
        vec![("version", "1.2.3"), ("env", "dev"), ("buildNumber", "0")]
    );
}

#[test]
fn test_resolve_flags() {
    let cli_params = CliParams {
        environment: Some("staging".to_string()),
        build_number: Some("42".to_string()),
        params: None,
    };

    assert_eq!(stamp_template(&cli_params), "V=1.2.3 E=staging B=42");
}

#[test]
fn test_resolve_params() {
    let cli_params = CliParams {
        params: Some(split_params("prod,99")),
        ..CliParams::default()
    };

    assert_eq!(stamp_template(&cli_params), "V=1.2.3 E=prod B=99");
}

#[test]
fn test_resolve_params_empty_env() {
    let cli_params = CliParams {
        params: Some(split_params(",77")),
        ..CliParams::default()
    };

    assert_eq!(stamp_template(&cli_params), "V=1.2.3 E=dev B=77");
}

#[test]
fn test_resolve_params_override_flags() {
    let cli_params = CliParams {
        environment: Some("staging".to_string()),
        build_number: Some("42".to_string()),
        params: Some(split_params("prod")),
    };

    let subs = resolve("1.2.3", &cli_params);
    assert_eq!(subs.get(KEY_ENV), Some("prod"));
    assert_eq!(subs.get(KEY_BUILD_NUMBER), Some("42"));
}

#[test]
fn test_resolve_empty_flag() {
    let cli_params = CliParams {
        environment: Some(String::new()),
        ..CliParams::default()
    };

    assert_eq!(resolve("", &cli_params).get(KEY_ENV), Some(DEFAULT_ENV));
}

#[test]
fn test_substitutions_insert() {
    let mut subs = Substitutions::new();
    assert!(subs.is_empty());

    subs.insert("a", "1").insert("b", "2").insert("a", "3");

    assert_eq!(subs.len(), 2);
    assert_eq!(subs.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    assert_eq!(subs.get("c"), None);
}

#[test]
fn test_replace_first() {
    assert_eq!(
        replace_first("_env _ENV", "env", "prod").unwrap(),
        ("prod _ENV".to_string(), true)
    );
    assert_eq!(
        replace_first("nothing here", "env", "prod").unwrap(),
        ("nothing here".to_string(), false)
    );
    assert_eq!(
        replace_first("a_BuildNumber", "buildNumber", "$1${0}").unwrap(),
        ("a$1${0}".to_string(), true)
    );
    assert_eq!(
        replace_first("_a.b _axb", "a.b", "x").unwrap().0,
        "x _axb"
    );
}

#[test]
fn test_stamp_str_in_order() {
    let mut subs = Substitutions::new();
    subs.insert("version", "_env").insert("env", "dev");

    // `_version` becomes `_env` first, which is then the first `_env` in the text
    assert_eq!(
        Stamper::from_substitutions(TARGET_FILE, subs)
            .stamp_str("_version _env")
            .unwrap(),
        "dev _env"
    );
}

#[test]
fn test_stamp_str_no_placeholders() {
    let text = "const x = 1;\n";
    assert_eq!(stamp_template_text(text), text);
}

fn stamp_template_text(text: &str) -> String {
    Stamper::from_substitutions(TARGET_FILE, resolve("1.2.3", &CliParams::default()))
        .stamp_str(text)
        .unwrap()
}

#[test]
fn test_stamp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(TARGET_FILE);

    File::create(&path)
        .unwrap()
        .write_all(b"export default { version: '_VERSION', env: '_Env', build: '_buildnumber' };\n")
        .unwrap();

    let mut stamper = Stamper::new(&path);
    stamper
        .set_substitutions(resolve("2.0.0", &CliParams::default()))
        .stamp()
        .unwrap();

    assert_eq!(
        read_to_string(&path).unwrap(),
        "export default { version: '2.0.0', env: 'dev', build: '0' };\n"
    );

    // Nothing left to replace, so a second run doesn't change anything
    stamper.stamp().unwrap();
    assert_eq!(
        read_to_string(&path).unwrap(),
        "export default { version: '2.0.0', env: 'dev', build: '0' };\n"
    );

    dir.close().unwrap();
}

#[test]
fn test_stamp_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(TARGET_FILE);

    let res = Stamper::from_substitutions(&path, resolve("1.2.3", &CliParams::default())).stamp();

    match res {
        Err(Error::TargetFile(_)) => (),
        x => panic!("Expected Error::TargetFile, got {:?}", x),
    }
    assert!(!path.exists());

    dir.close().unwrap();
}

#[test]
fn test_stamp_unreadable_target() {
    let dir = tempdir().unwrap();

    // A directory can be opened, but not read as a string
    let res = Stamper::from_substitutions(dir.path(), resolve("1.2.3", &CliParams::default())).stamp();

    match res {
        Err(Error::TargetFile(_)) => (),
        x => panic!("Expected Error::TargetFile, got {:?}", x),
    }

    dir.close().unwrap();
}
