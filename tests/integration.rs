use pipescores::{
    convert, convert_file, run, Config, ConvertError, DelimitedHistoryWriter, Delimiter,
    QuotedHistoryReader, EXIT_CONVERSION_FAILED, EXIT_USAGE,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const SAMPLE: &str = std::include_str!("./sample.txt");

const GAME: &str = "'2021-05-01' 'Hawks' '3' 'Eagles' '1' 'North Field'\n";
const SHORT_GAME: &str = "'2021-05-01' 'Hawks' '3' 'Eagles' '1'\n";

fn pipescores(args: &[&PathBuf]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pipescores"));
    cmd.args(args);
    cmd
}

#[test]
fn integration() {
    let mut reader = QuotedHistoryReader::new(SAMPLE.as_bytes());
    let mut writer = DelimitedHistoryWriter::new(vec![], Delimiter::Pipe);

    assert_eq!(convert(&mut reader, &mut writer).unwrap(), 4);

    let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();

    assert_eq!(
        "2021-05-01|Hawks|3|Eagles|1|North Field
2021-05-01|Owls|0|Crows|2|South Field
2021-05-08|Eagles|5|Owls|5|
2021-05-15|Crows|10|Hawks|7|Riverside Park
",
        data,
    )
}

#[test]
fn convert_file_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scores.txt");
    let output = dir.path().join("scores.csv");
    fs::write(&input, SAMPLE).unwrap();

    assert_eq!(convert_file(&input, &output, Delimiter::Comma).unwrap(), 4);
    assert_eq!(
        fs::read_to_string(&output).unwrap().lines().next(),
        Some("2021-05-01,Hawks,3,Eagles,1,North Field")
    );
}

#[test]
fn convert_file_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    let output = dir.path().join("empty.csv");
    fs::write(&input, "").unwrap();

    assert_eq!(convert_file(&input, &output, Delimiter::Tab).unwrap(), 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn convert_file_leaves_no_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.txt");
    let output = dir.path().join("broken.csv");
    fs::write(&input, format!("{}{}", GAME, SHORT_GAME)).unwrap();

    let err = convert_file(&input, &output, Delimiter::Comma).unwrap_err();

    assert_eq!(err.path, input);
    assert!(matches!(
        err.source,
        ConvertError::MalformedRecord { line: 2, .. }
    ));
    assert!(!output.exists());
}

#[test]
fn convert_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("missing.csv");

    // The command line refuses this up front, the library still reports it
    let err = convert_file(&input, &output, Delimiter::Comma).unwrap_err();

    assert_eq!(err.path, input);
    assert!(matches!(err.source, ConvertError::Io(_)));
    assert!(!output.exists());
}

#[test]
fn run_continues_after_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = |name: &str| -> PathBuf { dir.path().join(name) };
    fs::write(path("bad.txt"), SHORT_GAME).unwrap();
    fs::write(path("good.txt"), GAME).unwrap();

    let config = Config::new(
        Delimiter::Pipe,
        vec![
            (path("bad.txt"), path("bad.out")),
            (path("good.txt"), path("good.out")),
        ],
    );
    let summary = run(&config);

    assert_eq!(summary.exit_code(), EXIT_CONVERSION_FAILED);
    assert_eq!(summary.failed().count(), 1);
    assert_eq!(summary.outcomes()[0].input, path("bad.txt"));
    assert!(summary.outcomes()[1].result.is_ok());
    assert!(!path("bad.out").exists());
    assert_eq!(
        fs::read_to_string(path("good.out")).unwrap(),
        "2021-05-01|Hawks|3|Eagles|1|North Field\n"
    );
}

#[test]
fn cli_pipe_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scores.txt");
    let output = dir.path().join("scores.psv");
    fs::write(&input, GAME).unwrap();

    let status = pipescores(&[&input, &output])
        .args(["-d", "|"])
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "2021-05-01|Hawks|3|Eagles|1|North Field\n"
    );
}

#[test]
fn cli_default_comma() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scores.txt");
    let output = dir.path().join("scores.csv");
    fs::write(&input, GAME).unwrap();

    let status = pipescores(&[&input, &output]).status().unwrap();

    assert_eq!(status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "2021-05-01,Hawks,3,Eagles,1,North Field\n"
    );
}

#[test]
fn cli_tab_escape() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scores.txt");
    let output = dir.path().join("scores.tsv");
    fs::write(&input, GAME).unwrap();

    let status = pipescores(&[&input, &output])
        .args(["-d", "\\t"])
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "2021-05-01\tHawks\t3\tEagles\t1\tNorth Field\n"
    );
}

#[test]
fn cli_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    let output = dir.path().join("empty.csv");
    fs::write(&input, "").unwrap();

    let status = pipescores(&[&input, &output]).status().unwrap();

    assert_eq!(status.code(), Some(0));
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn cli_unsupported_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scores.txt");
    let output = dir.path().join("scores.out");
    fs::write(&input, GAME).unwrap();

    let result = pipescores(&[&input, &output])
        .args(["-d", "%"])
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(i32::from(EXIT_USAGE)));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Unsupported delimiter"));
    assert!(!output.exists());
}

#[test]
fn cli_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("missing.csv");

    let result = pipescores(&[&input, &output]).output().unwrap();

    assert_eq!(result.status.code(), Some(i32::from(EXIT_USAGE)));
    assert!(String::from_utf8_lossy(&result.stderr).contains("does not exist"));
    assert!(!output.exists());
}

#[test]
fn cli_missing_paths() {
    let status = pipescores(&[]).status().unwrap();
    assert_eq!(status.code(), Some(i32::from(EXIT_USAGE)));
}

#[test]
fn cli_malformed_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.txt");
    let output = dir.path().join("short.csv");
    fs::write(&input, SHORT_GAME).unwrap();

    let result = pipescores(&[&input, &output]).output().unwrap();

    assert_eq!(result.status.code(), Some(i32::from(EXIT_CONVERSION_FAILED)));
    assert!(String::from_utf8_lossy(&result.stderr).contains("line 1"));
    assert!(!output.exists());
}

#[test]
fn cli_multiple_files_partial_failure() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    let bad = dir.path().join("bad.txt");
    let good_out = dir.path().join("good.csv");
    let bad_out = dir.path().join("bad.csv");
    fs::write(&good, GAME).unwrap();
    fs::write(&bad, SHORT_GAME).unwrap();

    let result = pipescores(&[&bad, &good, &bad_out, &good_out])
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(i32::from(EXIT_CONVERSION_FAILED)));
    assert!(String::from_utf8_lossy(&result.stdout).contains("converted"));
    assert!(String::from_utf8_lossy(&result.stderr).contains("failed"));
    assert!(good_out.exists());
    assert!(!bad_out.exists());
}
