//! GitHub CLI (`gh`) operations

use crate::error::{Error, Result};
use crate::process::CommandRunner;
use camino::Utf8Path;
use tracing::{debug, info};

const GH: &str = "gh";

/// Repository hosting operations through `gh`
#[derive(Debug, Clone, Default)]
pub struct GitHub<R> {
    runner: R,
}

impl<R: CommandRunner> GitHub<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn gh(&self, dir: &Utf8Path, args: &[&str]) -> Result<String> {
        self.runner.run(dir, GH, args)
    }

    /// Whether `gh` can be executed
    pub fn is_available(&self) -> bool {
        self.gh(Utf8Path::new("."), &["version"]).is_ok()
    }

    /// Create a repository from `dir` and push it, returning the repository URL
    pub fn create_repo(
        &self,
        dir: &Utf8Path,
        name: &str,
        org: Option<&str>,
        private: bool,
    ) -> Result<String> {
        let full_name = match org.filter(|o| !o.is_empty()) {
            Some(org) => format!("{}/{}", org, name),
            None => name.to_string(),
        };
        let visibility = if private { "--private" } else { "--public" };

        let url = self.gh(
            dir,
            &[
                "repo",
                "create",
                &full_name,
                visibility,
                "--source",
                dir.as_str(),
                "--push",
            ],
        )?
        .trim()
        .to_string();

        if url.is_empty() {
            return Err(Error::external_tool(
                "gh repo create",
                "no repository URL in output",
            ));
        }

        info!("Created GitHub repository {}", url);
        Ok(url)
    }

    /// Accounts logged in to `gh`, in `gh auth status` order
    pub fn list_auth_accounts(&self) -> Vec<String> {
        match self.gh(Utf8Path::new("."), &["auth", "status"]) {
            Ok(out) => parse_auth_accounts(&out),
            Err(e) => {
                debug!("gh auth status failed: {}", e);
                Vec::new()
            }
        }
    }

    pub fn is_auth_account(&self, account: &str) -> bool {
        self.list_auth_accounts().iter().any(|a| a == account)
    }

    /// Make `account` the active `gh` account
    pub fn switch_account(&self, account: &str) -> Result<()> {
        self.gh(Utf8Path::new("."), &["auth", "switch", "--user", account])?;
        info!("Switched gh account to {}", account);
        Ok(())
    }
}

/// Extract account names from `gh auth status` output
///
/// Lines look like `Logged in to github.com account jack (keyring)`.
fn parse_auth_accounts(output: &str) -> Vec<String> {
    let mut accounts: Vec<String> = Vec::new();
    for line in output.lines() {
        let mut words = line.split_whitespace();
        while let Some(word) = words.next() {
            if word == "account" {
                if let Some(name) = words.next() {
                    let name = name.trim_matches(|c: char| !c.is_alphanumeric() && c != '-');
                    if !name.is_empty() && !accounts.iter().any(|a| a == name) {
                        accounts.push(name.to_string());
                    }
                }
                break;
            }
        }
    }
    accounts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::fake::FakeRunner;

    const AUTH_STATUS: &str = "\
github.com
  ✓ Logged in to github.com account jack (keyring)
  - Active account: true
  - Git operations protocol: https

  ✓ Logged in to github.com account jack-work (keyring)
  - Active account: false
";

    #[test]
    fn test_parse_auth_accounts() {
        assert_eq!(parse_auth_accounts(AUTH_STATUS), vec!["jack", "jack-work"]);
        assert!(parse_auth_accounts("You are not logged into any GitHub hosts.").is_empty());
    }

    #[test]
    fn test_create_repo_with_org() {
        let runner = FakeRunner::new().ok("https://github.com/acme/demo\n");
        let gh = GitHub::new(&runner);

        let url = gh
            .create_repo(Utf8Path::new("/p/demo"), "demo", Some("acme"), true)
            .unwrap();
        assert_eq!(url, "https://github.com/acme/demo");
        assert_eq!(
            runner.calls(),
            vec!["gh repo create acme/demo --private --source /p/demo --push"]
        );
    }

    #[test]
    fn test_create_repo_public_without_org() {
        let runner = FakeRunner::new().ok("https://github.com/jack/demo");
        let gh = GitHub::new(&runner);

        gh.create_repo(Utf8Path::new("/p/demo"), "demo", None, false)
            .unwrap();
        assert_eq!(
            runner.calls(),
            vec!["gh repo create demo --public --source /p/demo --push"]
        );
    }

    #[test]
    fn test_is_auth_account_and_switch() {
        let runner = FakeRunner::new().ok(AUTH_STATUS).ok(AUTH_STATUS);
        let gh = GitHub::new(&runner);

        assert!(gh.is_auth_account("jack-work"));
        assert!(!gh.is_auth_account("someone-else"));

        gh.switch_account("jack-work").unwrap();
        assert_eq!(
            runner.calls().last().map(String::as_str),
            Some("gh auth switch --user jack-work")
        );
    }

    #[test]
    fn test_unavailable_when_gh_fails() {
        let runner = FakeRunner::new().fail("gh", "not found");
        assert!(!GitHub::new(&runner).is_available());
    }
}
