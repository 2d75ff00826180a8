// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{ErrorKind, ZipError};
use crate::spec::attribute::{ModeInput, UnixMode};

macro_rules! mode_parse_helper {
    ($name:ident, $text:expr, $mode:expr) => {
        #[test]
        fn $name() {
            let parsed: UnixMode = $text.parse().expect("failed to parse mode");
            assert_eq!(parsed, UnixMode($mode));
        }
    };
}

mode_parse_helper!(parse_regular_file, "-rw-r--r--", 0o100644);
mode_parse_helper!(parse_executable, "-rwxr-x--x", 0o100751);
mode_parse_helper!(parse_directory, "drwxr-xr-x", 0o040755);
mode_parse_helper!(parse_symlink, "lrwxrwxrwx", 0o120777);
mode_parse_helper!(parse_no_permissions, "----------", 0o100000);
mode_parse_helper!(parse_decimal, "33188", 0o100644);

#[test]
fn invalid_modes_test() {
    for text in ["rw-r--r--", "-rw-r--r---", "xrw-r--r--", "-wr-r--r--", "-rw-r--r-z", "", "d"] {
        let err = text.parse::<UnixMode>().expect_err(text);
        assert!(matches!(err, ZipError::InvalidMode(ref invalid) if invalid == text));
        assert_eq!(err.kind(), ErrorKind::InvalidMode);
    }
}

#[test]
fn resolve_defaults_test() {
    assert_eq!(UnixMode::resolve(None, false).expect("no default"), UnixMode::DEFAULT_FILE);
    assert_eq!(UnixMode::resolve(None, true).expect("no default"), UnixMode::DEFAULT_DIRECTORY);
    assert_eq!(UnixMode::DEFAULT_FILE.0, 0o100644);
    assert_eq!(UnixMode::DEFAULT_DIRECTORY.0, 0o040755);
}

#[test]
fn resolve_mismatch_test() {
    let directory = ModeInput::from("drwxr-xr-x");
    let file = ModeInput::from(0o100644u32);

    assert!(matches!(UnixMode::resolve(Some(&directory), false), Err(ZipError::ModeMismatch)));
    assert!(matches!(UnixMode::resolve(Some(&file), true), Err(ZipError::ModeMismatch)));

    assert_eq!(UnixMode::resolve(Some(&directory), true).expect("rejected directory mode"), UnixMode(0o040755));
    assert_eq!(UnixMode::resolve(Some(&file), false).expect("rejected file mode"), UnixMode(0o100644));
}

#[test]
fn external_attributes_test() {
    let mode = UnixMode(0o100644);

    assert_eq!(mode.as_external_attributes(), 0o100644 << 16);
    assert_eq!(UnixMode::from_external_attributes(mode.as_external_attributes()), mode);
    assert!(!mode.is_dir());
    assert!(UnixMode::DEFAULT_DIRECTORY.is_dir());
}
