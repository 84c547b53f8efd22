use std::io::Write;

use tempfile::NamedTempFile;
use trail_pathfinder::app::{run_app, AppError, Cli};

#[test]
fn run_app_succeeds_on_a_valid_trail_map() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "M food").expect("write");
    writeln!(file, "F food river").expect("write");
    writeln!(file, "D raft").expect("write");
    writeln!(file, "S food axe fallen tree").expect("write");
    writeln!(file, "X").expect("write");
    file.flush().expect("flush");

    let cli = Cli {
        trail_file: file.path().to_path_buf(),
        quiet: true,
    };
    assert!(run_app(cli).is_ok());
}

#[test]
fn run_app_rejects_a_missing_file() {
    let cli = Cli {
        trail_file: "no-such-trail-map.txt".into(),
        quiet: true,
    };
    let err = run_app(cli).expect_err("missing file must fail");
    assert!(matches!(err, AppError::General(_)));
}
