use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_studyhubd");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn studyhubd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({ "id": id, "method": method, "params": params });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn titles(result: &serde_json::Value) -> Vec<String> {
    result["notes"]
        .as_array()
        .expect("notes array")
        .iter()
        .map(|n| n["title"].as_str().expect("note title").to_string())
        .collect()
}

#[test]
fn title_sort_is_ascending_a_to_z() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "dataset.load", json!({}));

    let res = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "notes.list",
        json!({ "sortBy": "title" }),
    );
    assert_eq!(
        titles(&res),
        vec![
            "Calculus Integration Techniques",
            "Data Structures and Algorithms",
            "Quantum Physics Fundamentals",
        ]
    );

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn default_sort_is_last_modified_newest_first() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "dataset.load", json!({}));

    // No sortBy and an unknown sortBy land on the same default order.
    let default = request_ok(&mut stdin, &mut reader, "2", "notes.list", json!({}));
    assert_eq!(
        titles(&default),
        vec![
            "Calculus Integration Techniques",
            "Data Structures and Algorithms",
            "Quantum Physics Fundamentals",
        ]
    );
    let fallback = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "notes.list",
        json!({ "sortBy": "size" }),
    );
    assert_eq!(titles(&fallback), titles(&default));

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn created_sort_is_newest_first() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "dataset.load", json!({}));

    let res = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "notes.list",
        json!({ "sortBy": "created" }),
    );
    assert_eq!(
        titles(&res),
        vec![
            "Calculus Integration Techniques",
            "Quantum Physics Fundamentals",
            "Data Structures and Algorithms",
        ]
    );

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn tag_only_query_still_finds_the_note() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "dataset.load", json!({}));

    // "programming" lives only in one note's tag set.
    let res = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "notes.list",
        json!({ "search": "programming" }),
    );
    assert_eq!(titles(&res), vec!["Data Structures and Algorithms"]);

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn starred_and_subject_filters_conjoin_with_search() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "dataset.load", json!({}));

    let starred = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "notes.list",
        json!({ "starredOnly": true }),
    );
    assert_eq!(starred["matched"], 2);

    let narrowed = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "notes.list",
        json!({ "starredOnly": true, "subject": "mathematics" }),
    );
    assert_eq!(titles(&narrowed), vec!["Calculus Integration Techniques"]);

    // Starred + a subject with no starred notes is empty, not an error.
    let empty = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "notes.list",
        json!({ "starredOnly": true, "subject": "physics" }),
    );
    assert_eq!(empty["matched"], 0);

    drop(stdin);
    let _ = child.wait();
}
