use std::process::Command;

#[test]
fn unreachable_provider_exits_non_zero_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data").join("cache.json");

    let status = Command::new(env!("CARGO_BIN_EXE_fpl_snapshot"))
        .current_dir(dir.path())
        .env("FPL_BASE_URL", "http://127.0.0.1:9/api")
        .env("FPL_OUT_FILE", &out)
        .env("FPL_TIMEOUT_MS", "1000")
        .env_remove("FPL_TEAM_ID")
        .status()
        .expect("binary should start");

    assert!(!status.success());
    assert!(!out.exists());
}
