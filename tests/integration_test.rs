// tests/integration_test.rs
use git2::{Commit, Oid, Repository, Signature};
use tempfile::TempDir;

use git_beta_tag::branch_info::EnvBranchInfo;
use git_beta_tag::cli::{run_workflow, WorkflowArgs, WorkflowOutcome};
use git_beta_tag::config::Config;
use git_beta_tag::domain::TagLookup;
use git_beta_tag::git::{Git2Repository, Publisher, TagStore};

fn commit_on(repo: &Repository, branch: &str, message: &str, parent: Option<Oid>) -> Oid {
    let sig = Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents: Vec<Commit> = parent
        .map(|oid| repo.find_commit(oid).unwrap())
        .into_iter()
        .collect();
    let parent_refs: Vec<&Commit> = parents.iter().collect();
    let refname = format!("refs/heads/{}", branch);

    repo.commit(
        Some(refname.as_str()),
        &sig,
        &sig,
        message,
        &tree,
        &parent_refs,
    )
    .unwrap()
}

fn tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag_lightweight(name, &object, false).unwrap();
}

/// release: c1 (v1.2.0)
/// main:    c1 <- c2 (v1.3.0-beta.0) <- c3, checked out
/// untagged: orphan root commit
fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();

    let c1 = commit_on(&repo, "release", "initial release", None);
    tag(&repo, "v1.2.0", c1);
    let c2 = commit_on(&repo, "main", "feat: search", Some(c1));
    tag(&repo, "v1.3.0-beta.0", c2);
    commit_on(&repo, "main", "Merge pull request #4 from acme/fix/search-crash", Some(c2));
    commit_on(&repo, "untagged", "orphan", None);

    repo.set_head("refs/heads/main").unwrap();
    dir
}

fn add_bare_remote(dir: &TempDir) -> TempDir {
    let remote_dir = TempDir::new().unwrap();
    Repository::init_bare(remote_dir.path()).unwrap();
    let repo = Repository::open(dir.path()).unwrap();
    repo.remote("origin", remote_dir.path().to_str().unwrap())
        .unwrap();
    remote_dir
}

#[test]
fn test_latest_tag_per_branch() {
    let dir = fixture();
    let repo = Git2Repository::open(dir.path()).unwrap();

    assert_eq!(
        repo.latest_tag("release"),
        TagLookup::Found("v1.2.0".to_string())
    );
    assert_eq!(
        repo.latest_tag("main"),
        TagLookup::Found("v1.3.0-beta.0".to_string())
    );
}

#[test]
fn test_branch_without_tags() {
    let dir = fixture();
    let repo = Git2Repository::open(dir.path()).unwrap();

    assert_eq!(repo.latest_tag("untagged"), TagLookup::NoneOnBranch);
}

#[test]
fn test_missing_branch_is_query_failure() {
    let dir = fixture();
    let repo = Git2Repository::open(dir.path()).unwrap();

    assert!(matches!(
        repo.latest_tag("does-not-exist"),
        TagLookup::QueryFailed(_)
    ));
}

#[test]
fn test_all_tags() {
    let dir = fixture();
    let repo = Git2Repository::open(dir.path()).unwrap();

    let mut tags = repo.all_tags().unwrap();
    tags.sort();
    assert_eq!(tags, vec!["v1.2.0".to_string(), "v1.3.0-beta.0".to_string()]);
}

#[test]
fn test_head_information() {
    let dir = fixture();
    let repo = Git2Repository::open(dir.path()).unwrap();

    assert_eq!(repo.current_branch().as_deref(), Some("main"));
    assert_eq!(
        repo.head_commit_message().as_deref(),
        Some("Merge pull request #4 from acme/fix/search-crash")
    );
}

#[test]
fn test_create_and_push_to_remote() {
    let dir = fixture();
    let remote_dir = add_bare_remote(&dir);
    let repo = Git2Repository::open(dir.path()).unwrap();

    repo.create_and_push("v1.3.0-beta.1").unwrap();

    assert!(repo.all_tags().unwrap().contains(&"v1.3.0-beta.1".to_string()));
    let remote = Repository::open_bare(remote_dir.path()).unwrap();
    assert!(remote.find_reference("refs/tags/v1.3.0-beta.1").is_ok());
}

#[test]
fn test_push_without_remote_fails() {
    let dir = fixture();
    let repo = Git2Repository::open(dir.path()).unwrap();

    let err = repo.create_and_push("v1.3.0-beta.1").unwrap_err();
    assert!(err.to_string().contains("Remote operation failed"));
    assert!(!repo.all_tags().unwrap().contains(&"v1.3.0-beta.1".to_string()));
}

#[test]
fn test_failed_push_is_retried_on_next_run() {
    let dir = fixture();
    let raw = Repository::open(dir.path()).unwrap();
    let missing = dir.path().join("no-such-remote.git");
    raw.remote("origin", missing.to_str().unwrap()).unwrap();
    let repo = Git2Repository::open(dir.path()).unwrap();

    let branch_info = EnvBranchInfo::new(Some("feat/x".to_string()), Vec::new());
    let first = run_workflow(
        &WorkflowArgs::default(),
        &Config::default(),
        &repo,
        &repo,
        &branch_info,
    );
    let second = run_workflow(
        &WorkflowArgs::default(),
        &Config::default(),
        &repo,
        &repo,
        &branch_info,
    );

    assert_eq!(first.tag.as_deref(), Some("v1.3.0-beta.1"));
    assert!(matches!(first.outcome, WorkflowOutcome::PublishFailed(_)));
    assert!(matches!(second.outcome, WorkflowOutcome::PublishFailed(_)));
    assert_eq!(second.exit_code(), 1);
    assert!(raw.find_reference("refs/tags/v1.3.0-beta.1").is_err());
}

#[test]
fn test_fetch_without_remote_fails() {
    let dir = fixture();
    let repo = Git2Repository::open(dir.path()).unwrap();

    assert!(repo.fetch_tags().is_err());
}

#[test]
fn test_workflow_against_real_repository() {
    let dir = fixture();
    let remote_dir = add_bare_remote(&dir);
    let repo = Git2Repository::open(dir.path()).unwrap();

    // HEAD is main and the merge commit names a fix branch
    let branch_info = EnvBranchInfo::new(None, Vec::new()).with_repository(&repo);
    let result = run_workflow(
        &WorkflowArgs::default(),
        &Config::default(),
        &repo,
        &repo,
        &branch_info,
    );

    assert_eq!(result.branch.as_deref(), Some("fix/search-crash"));
    assert_eq!(result.tag.as_deref(), Some("v1.3.0-beta.1"));
    assert_eq!(result.outcome, WorkflowOutcome::Published);

    let remote = Repository::open_bare(remote_dir.path()).unwrap();
    assert!(remote.find_reference("refs/tags/v1.3.0-beta.1").is_ok());
}

#[test]
fn test_repository_without_any_tags() {
    let dir = TempDir::new().unwrap();
    let raw = Repository::init(dir.path()).unwrap();
    commit_on(&raw, "release", "initial", None);
    let repo = Git2Repository::open(dir.path()).unwrap();

    assert_eq!(repo.latest_tag("release"), TagLookup::NoneOnBranch);
    assert!(repo.all_tags().unwrap().is_empty());
}
