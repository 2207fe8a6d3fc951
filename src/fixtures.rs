//! Trimmed versions of GitHub’s example webhook payloads.

pub(crate) const PR: &str = r#"{
  "action": "opened",
  "number": 2,
  "pull_request": {
    "url": "https://api.github.com/repos/Codertocat/Hello-World/pulls/2",
    "id": 279147437,
    "node_id": "MDExOlB1bGxSZXF1ZXN0Mjc5MTQ3NDM3",
    "html_url": "https://github.com/Codertocat/Hello-World/pull/2",
    "number": 2,
    "state": "open",
    "locked": false,
    "title": "Update the README with new information.",
    "user": {
      "login": "Codertocat",
      "id": 21031067,
      "avatar_url": "https://avatars1.githubusercontent.com/u/21031067?v=4",
      "type": "User",
      "site_admin": false
    },
    "body": "This is a pretty simple change that we need to pull into master.",
    "created_at": "2019-05-15T15:20:33Z",
    "updated_at": "2019-05-15T15:20:33Z",
    "closed_at": null,
    "merged_at": null,
    "draft": false,
    "head": {"label": "Codertocat:changes", "ref": "changes", "sha": "ec26c3e57ca3a959ca5aad62de7213c562f8c821"},
    "base": {"label": "Codertocat:master", "ref": "master", "sha": "f95f852bd8fca8fcc58a9a2d6c842781e32a215e"},
    "merged": false,
    "mergeable": null,
    "comments": 0,
    "commits": 1,
    "additions": 1,
    "deletions": 1,
    "changed_files": 1
  },
  "repository": {
    "id": 186853002,
    "name": "Hello-World",
    "full_name": "Codertocat/Hello-World",
    "private": false,
    "html_url": "https://github.com/Codertocat/Hello-World",
    "default_branch": "master"
  },
  "sender": {
    "login": "Codertocat",
    "id": 21031067,
    "type": "User"
  }
}"#;

pub(crate) const WORKFLOW_RUN: &str = r#"{
  "action": "completed",
  "workflow_run": {
    "id": 30433642,
    "name": "Build",
    "node_id": "MDEyOldvcmtmbG93IFJ1bjI2OTI4OQ==",
    "head_branch": "main",
    "head_sha": "acb5820ced9479c074f688cc328bf03f341a511d",
    "run_number": 562,
    "event": "push",
    "status": "completed",
    "conclusion": "success",
    "workflow_id": 159038,
    "html_url": "https://github.com/Codertocat/Hello-World/actions/runs/30433642",
    "created_at": "2020-01-22T19:33:08Z",
    "updated_at": "2020-01-22T19:33:08Z",
    "run_attempt": 1,
    "run_started_at": "2020-01-22T19:33:08Z"
  },
  "workflow": {
    "id": 159038,
    "name": "Build",
    "path": ".github/workflows/build.yml",
    "state": "active"
  },
  "repository": {
    "id": 186853002,
    "name": "Hello-World",
    "full_name": "Codertocat/Hello-World",
    "private": false
  },
  "sender": {
    "login": "Codertocat",
    "id": 21031067
  }
}"#;

pub(crate) const WORKFLOW_JOB: &str = r#"{
  "action": "completed",
  "workflow_job": {
    "id": 2832853555,
    "run_id": 940463255,
    "run_url": "https://api.github.com/repos/Codertocat/Hello-World/actions/runs/940463255",
    "node_id": "MDg6Q2hlY2tSdW4yODMyODUzNTU1",
    "head_sha": "f83a356604ae3c5d03e1b46ef4d1ca77d64a90b0",
    "html_url": "https://github.com/Codertocat/Hello-World/runs/2832853555",
    "status": "completed",
    "conclusion": "failure",
    "started_at": "2019-08-08T08:00:10Z",
    "completed_at": "2019-08-08T08:01:12Z",
    "name": "test",
    "labels": ["gpu", "db-app", "dc-03"],
    "runner_id": 1,
    "runner_name": "my runner"
  },
  "repository": {
    "id": 186853002,
    "name": "Hello-World",
    "full_name": "Codertocat/Hello-World",
    "private": false
  },
  "sender": {
    "login": "Codertocat",
    "id": 21031067
  }
}"#;
