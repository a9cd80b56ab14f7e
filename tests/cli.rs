use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
    time::{SystemTime, UNIX_EPOCH},
};

struct CommandResult {
    status_ok: bool,
    stdout:    String,
    stderr:    String,
}

fn make_temp_dir(name: &str) -> Result<PathBuf, String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)
                               .map_err(|e| e.to_string())?
                               .as_nanos();
    let dir = std::env::temp_dir().join("lrcalc_cli_tests")
                                  .join(format!("{name}_{now}"));
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    Ok(dir)
}

fn run_cmd(args: &[&str], input: Option<&str>) -> Result<CommandResult, String> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lrcalc"));
    cmd.args(args)
       .env_remove("RUST_LOG")
       .stdin(Stdio::piped())
       .stdout(Stdio::piped())
       .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| e.to_string())?;

    if let Some(mut handle) = child.stdin.take()
       && let Some(data) = input
    {
        handle.write_all(data.as_bytes()).map_err(|e| e.to_string())?;
    }

    let output = child.wait_with_output().map_err(|e| e.to_string())?;
    Ok(CommandResult { status_ok: output.status.success(),
                       stdout:    String::from_utf8_lossy(&output.stdout).to_string(),
                       stderr:    String::from_utf8_lossy(&output.stderr).to_string(), })
}

#[test]
fn one_shot_expression() -> Result<(), String> {
    let result = run_cmd(&["2+3*4"], None)?;
    if !result.status_ok {
        return Err(result.stderr);
    }
    if result.stdout != "answer = 20.000000\n" {
        return Err(format!("unexpected output: {:?}", result.stdout));
    }
    Ok(())
}

#[test]
fn one_shot_leading_minus() -> Result<(), String> {
    let result = run_cmd(&["-3*2"], None)?;
    if !result.status_ok {
        return Err(result.stderr);
    }
    if result.stdout != "answer = -6.000000\n" {
        return Err(format!("unexpected output: {:?}", result.stdout));
    }
    Ok(())
}

#[test]
fn one_shot_invalid_character_fails() -> Result<(), String> {
    let result = run_cmd(&["2+a"], None)?;
    if result.status_ok {
        return Err("expected failure for invalid character".into());
    }
    if !result.stderr.contains("Invalid character 'a' at position 2") {
        return Err(format!("unexpected error output: {:?}", result.stderr));
    }
    Ok(())
}

#[test]
fn piped_session_prints_prompt_and_answers() -> Result<(), String> {
    let result = run_cmd(&[], Some("1+2\n10/2-1\n\n7\n"))?;
    if !result.status_ok {
        return Err(result.stderr);
    }
    let expected = "> answer = 3.000000\n> answer = 4.000000\n> ";
    if result.stdout != expected {
        return Err(format!("unexpected output: {:?}", result.stdout));
    }
    Ok(())
}

#[test]
fn piped_session_continues_after_error() -> Result<(), String> {
    let result = run_cmd(&["--prompt", ""], Some("2+a\n4*2\n"))?;
    if !result.status_ok {
        return Err(result.stderr);
    }
    if result.stdout != "answer = 8.000000\n" {
        return Err(format!("unexpected output: {:?}", result.stdout));
    }
    if !result.stderr.contains("error: Invalid character 'a'") {
        return Err(format!("unexpected error output: {:?}", result.stderr));
    }
    Ok(())
}

#[test]
fn abort_on_error_stops_session() -> Result<(), String> {
    let result = run_cmd(&["--abort-on-error", "--prompt", ""], Some("1\n2 2\n3\n"))?;
    if result.status_ok {
        return Err("expected failure with --abort-on-error".into());
    }
    if result.stdout != "answer = 1.000000\n" {
        return Err(format!("unexpected output: {:?}", result.stdout));
    }
    Ok(())
}

#[test]
fn file_input_with_precision() -> Result<(), String> {
    let dir = make_temp_dir("file_input")?;
    let file = dir.join("lines.txt");
    fs::write(&file, "3.5+1.25\n1/4\n").map_err(|e| e.to_string())?;

    let result = run_cmd(&["--file", file.to_str().ok_or("bad path")?, "--precision", "2"],
                         None)?;
    if !result.status_ok {
        return Err(result.stderr);
    }
    if result.stdout != "answer = 4.75\nanswer = 0.25\n" {
        return Err(format!("unexpected output: {:?}", result.stdout));
    }
    Ok(())
}

#[test]
fn missing_file_reports_path_and_cause() -> Result<(), String> {
    let dir = make_temp_dir("missing_file")?;
    let file = dir.join("absent.txt");
    let path = file.to_str().ok_or("bad path")?;

    let result = run_cmd(&["--file", path], None)?;
    if result.status_ok {
        return Err("expected failure for missing file".into());
    }
    let expected = format!("Failed to read the input file '{path}': ");
    if !result.stderr.contains(&expected) {
        return Err(format!("unexpected error output: {:?}", result.stderr));
    }
    if !result.stderr.contains("os error") {
        return Err(format!("underlying cause missing: {:?}", result.stderr));
    }
    Ok(())
}
