use std::path::Path;

use git2::{
    Cred, CredentialType, DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode,
    FetchOptions, PushOptions, RemoteCallbacks, Repository as Git2Repo,
};
use tracing::{debug, warn};

use crate::domain::TagLookup;
use crate::error::{BetaTagError, Result};
use crate::git::{Publisher, TagStore};

/// Wrapper around git2::Repository implementing the tag store and publisher
pub struct Git2Repository {
    repo: Git2Repo,
    remote: String,
}

impl Git2Repository {
    /// Open or discover a git repository, using `origin` as the remote
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository {
            repo,
            remote: "origin".to_string(),
        })
    }

    /// Use `remote` for remote-tracking lookups, fetch and push
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Short name of the checked-out branch, `None` when HEAD is detached or unborn
    pub fn current_branch(&self) -> Option<String> {
        let head = self.repo.head().ok()?;
        if !head.is_branch() {
            return None;
        }
        head.shorthand().map(|name| name.to_string())
    }

    /// Message of the commit at HEAD
    pub fn head_commit_message(&self) -> Option<String> {
        let commit = self.repo.head().ok()?.peel_to_commit().ok()?;
        commit.message().map(|msg| msg.to_string())
    }

    /// Fetch all tags from the configured remote.
    pub fn fetch_tags(&self) -> Result<()> {
        let mut remote = self.repo.find_remote(&self.remote).map_err(|e| {
            BetaTagError::remote(format!("Cannot find remote '{}': {}", self.remote, e))
        })?;

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(remote_callbacks());

        // Branches land in remote-tracking refs so release/main lookups see them
        let refspec_heads = format!("+refs/heads/*:refs/remotes/{}/*", self.remote);
        let refspecs = [refspec_heads.as_str(), "+refs/tags/*:refs/tags/*"];
        remote
            .fetch(&refspecs, Some(&mut fetch_options), None)
            .map_err(|e| {
                BetaTagError::remote(format!(
                    "Failed to fetch from remote '{}': {}",
                    self.remote, e
                ))
            })?;

        debug!(remote = %self.remote, "fetched branches and tags");
        Ok(())
    }

    fn branch_commit(&self, branch: &str) -> std::result::Result<git2::Commit<'_>, String> {
        let candidates = [
            format!("refs/remotes/{}/{}", self.remote, branch),
            format!("refs/heads/{}", branch),
        ];

        for name in &candidates {
            if let Ok(reference) = self.repo.find_reference(name) {
                debug!(reference = %name, "resolved branch reference");
                return reference
                    .peel_to_commit()
                    .map_err(|e| format!("Cannot peel '{}' to a commit: {}", name, e));
            }
        }

        Err(format!("Cannot find branch '{}'", branch))
    }

    fn create_tag(&self, tag: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo
            .tag_lightweight(tag, head.as_object(), false)
            .map_err(|e| BetaTagError::tag(format!("Cannot create tag '{}': {}", tag, e)))?;
        debug!(tag, commit = %head.id(), "created lightweight tag");
        Ok(())
    }

    fn push_tag(&self, tag: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(&self.remote).map_err(|_| {
            BetaTagError::remote(format!("No remote named '{}' found", self.remote))
        })?;

        let mut callbacks = remote_callbacks();
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                warn!(refname, status, "remote rejected reference update");
                Err(git2::Error::from_str(&format!(
                    "Push failed for {}",
                    refname
                )))
            } else {
                Ok(())
            }
        });

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/tags/{}:refs/tags/{}", tag, tag);
        remote
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| {
                if e.class() == ErrorClass::Net {
                    BetaTagError::remote(format!("Network error during push: {}", e))
                } else if e.class() == ErrorClass::Reference {
                    BetaTagError::remote(format!("Reference error during push: {}", e))
                } else {
                    BetaTagError::remote(format!("Failed to push tag '{}': {}", tag, e))
                }
            })
    }
}

/// Credential callbacks: SSH keys from `~/.ssh`, then the SSH agent, then defaults.
fn remote_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Some(home) = dirs::home_dir() {
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let path = home.join(".ssh").join(key);
                    if path.exists() {
                        if let Ok(cred) = Cred::ssh_key(username, None, &path, None) {
                            return Ok(cred);
                        }
                    }
                }
            }

            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }

        Cred::default()
    });
    callbacks
}

impl TagStore for Git2Repository {
    fn latest_tag(&self, branch: &str) -> TagLookup {
        let commit = match self.branch_commit(branch) {
            Ok(commit) => commit,
            Err(reason) => return TagLookup::QueryFailed(reason),
        };

        // libgit2 reports an empty tag set as a generic describe failure
        match self.repo.tag_names(None) {
            Ok(tags) if tags.is_empty() => return TagLookup::NoneOnBranch,
            Ok(_) => {}
            Err(e) => return TagLookup::QueryFailed(format!("Cannot list tags: {}", e)),
        }

        let mut describe_options = DescribeOptions::new();
        describe_options.describe_tags();

        let describe = match commit.as_object().describe(&describe_options) {
            Ok(describe) => describe,
            Err(e) if e.code() == ErrorCode::NotFound => return TagLookup::NoneOnBranch,
            Err(e) => {
                return TagLookup::QueryFailed(format!("Cannot describe '{}': {}", branch, e))
            }
        };

        // Abbreviated size 0 yields the bare tag name, like `--abbrev=0`
        let mut format_options = DescribeFormatOptions::new();
        format_options.abbreviated_size(0);

        match describe.format(Some(&format_options)) {
            Ok(tag) => TagLookup::Found(tag),
            Err(e) => TagLookup::QueryFailed(format!("Cannot format describe result: {}", e)),
        }
    }

    fn all_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}

impl Publisher for Git2Repository {
    fn create_and_push(&self, tag: &str) -> Result<()> {
        self.create_tag(tag)?;

        if let Err(push_err) = self.push_tag(tag) {
            match self.repo.tag_delete(tag) {
                Ok(()) => debug!(tag, "removed local tag after failed push"),
                Err(e) => warn!(tag, error = %e, "cannot remove local tag after failed push"),
            }
            return Err(push_err);
        }
        Ok(())
    }
}
