mod ipc;
mod model;
mod store;
mod views;

use std::io::{self, BufRead, Write};

/// One request per line in, one response per line out. A line that is not
/// valid JSON has no id to echo, so it gets a best-effort error object.
fn serve<R: BufRead, W: Write>(reader: R, mut writer: W) -> io::Result<()> {
    let mut state = ipc::AppState::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let resp = match serde_json::from_str::<ipc::Request>(&line) {
            Ok(req) => ipc::handle_request(&mut state, req),
            Err(e) => serde_json::json!({
                "ok": false,
                "error": { "code": "bad_json", "message": e.to_string() }
            }),
        };
        let encoded = serde_json::to_string(&resp)
            .unwrap_or_else(|_| "{\"ok\":false}".to_string());
        writeln!(writer, "{}", encoded)?;
        writer.flush()?;
    }
    Ok(())
}

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    // A closed pipe just ends the session.
    let _ = serve(stdin.lock(), stdout.lock());
}

#[cfg(test)]
mod tests {
    use super::serve;

    fn run_lines(input: &str) -> Vec<serde_json::Value> {
        let mut out: Vec<u8> = Vec::new();
        serve(input.as_bytes(), &mut out).expect("serve in-memory session");
        String::from_utf8(out)
            .expect("utf8 output")
            .lines()
            .map(|l| serde_json::from_str(l).expect("response json"))
            .collect()
    }

    #[test]
    fn responses_line_up_with_requests() {
        let input = "\n{\"id\":\"a\",\"method\":\"health\"}\n{\"id\":\"b\",\"method\":\"no.such\"}\n";
        let responses = run_lines(input);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], "a");
        assert_eq!(responses[0]["ok"], true);
        assert_eq!(responses[1]["id"], "b");
        assert_eq!(responses[1]["ok"], false);
        assert_eq!(responses[1]["error"]["code"], "not_implemented");
    }

    #[test]
    fn bad_json_gets_error_line_and_session_continues() {
        let input = "not json\n{\"id\":\"c\",\"method\":\"health\"}\n";
        let responses = run_lines(input);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["ok"], false);
        assert_eq!(responses[0]["error"]["code"], "bad_json");
        assert_eq!(responses[1]["id"], "c");
    }

    #[test]
    fn data_methods_gate_until_dataset_load() {
        let input = concat!(
            "{\"id\":\"1\",\"method\":\"attendance.list\"}\n",
            "{\"id\":\"2\",\"method\":\"dataset.load\"}\n",
            "{\"id\":\"3\",\"method\":\"attendance.list\"}\n",
        );
        let responses = run_lines(input);
        assert_eq!(responses[0]["error"]["code"], "no_dataset");
        assert_eq!(responses[1]["ok"], true);
        assert_eq!(responses[1]["result"]["source"], "builtin");
        assert_eq!(responses[2]["ok"], true);
        assert_eq!(responses[2]["result"]["matched"], 5);
    }
}
