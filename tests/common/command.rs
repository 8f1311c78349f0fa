use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn fleet_root() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_drift_command(root: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("drift").expect("Failed to find drift binary");
    // Keep ambient color configuration out of the captured output.
    cmd.env_remove("CLICOLOR_FORCE");
    cmd.env_remove("NO_COLOR");
    cmd.arg(root);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_init_repository(dir: &Path) {
    run_git_command(dir, &["init", "--initial-branch=main"])
        .assert()
        .success();
    run_git_command(dir, &["config", "user.name", "fake_user"])
        .assert()
        .success();
    run_git_command(dir, &["config", "user.email", "fake_email@email.com"])
        .assert()
        .success();
}

pub fn git_commit_file(dir: &Path, file_name: &str, content: &str, message: &str) {
    std::fs::write(dir.join(file_name), content)
        .unwrap_or_else(|e| panic!("Failed to write {:?}: {}", dir.join(file_name), e));
    run_git_command(dir, &["add", "."]).assert().success();
    run_git_command(dir, &["commit", "-m", message])
        .assert()
        .success();
}

pub fn git_head_sha(dir: &Path) -> String {
    let output = run_git_command(dir, &["rev-parse", "HEAD"])
        .output()
        .expect("Failed to run git rev-parse");
    String::from_utf8(output.stdout)
        .expect("non-utf8 commit sha")
        .trim()
        .to_string()
}

/// Fabricate a remote-tracking ref and configure it as the branch
/// upstream, without any network operation. The fetch refspec is what
/// lets git map the branch to its remote-tracking ref.
pub fn git_set_upstream(dir: &Path, branch: &str, sha: &str) {
    run_git_command(dir, &["config", "remote.origin.url", "."])
        .assert()
        .success();
    run_git_command(
        dir,
        &[
            "config",
            "remote.origin.fetch",
            "+refs/heads/*:refs/remotes/origin/*",
        ],
    )
    .assert()
    .success();
    run_git_command(
        dir,
        &["update-ref", &format!("refs/remotes/origin/{branch}"), sha],
    )
    .assert()
    .success();
    run_git_command(dir, &["config", &format!("branch.{branch}.remote"), "origin"])
        .assert()
        .success();
    run_git_command(
        dir,
        &[
            "config",
            &format!("branch.{branch}.merge"),
            &format!("refs/heads/{branch}"),
        ],
    )
    .assert()
    .success();
}

/// A working copy with one commit whose branch tip matches its upstream:
/// nothing to report.
pub fn synced_repository(root: &Path, name: &str) -> PathBuf {
    use fake::Fake;
    use fake::faker::lorem::en::Words;

    let dir = root.join(name);
    std::fs::create_dir_all(&dir)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", dir, e));

    git_init_repository(&dir);
    let content = Words(5..10).fake::<Vec<String>>().join(" ");
    git_commit_file(&dir, "README.md", &content, "Initial commit");
    git_set_upstream(&dir, "main", &git_head_sha(&dir));

    dir
}

/// A directory that is not under version control at all.
pub fn plain_directory(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(dir.join("src"))
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", dir, e));
    dir
}

/// A directory carrying a mercurial marker.
pub fn mercurial_directory(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(dir.join(".hg"))
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", dir, e));
    dir
}
