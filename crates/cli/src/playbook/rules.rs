// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! Task-level diagnostic rules.
//!
//! Each rule is a pure, stateless check over a single task node. Rules are
//! independent of each other; registry order only affects report layout.
//! The walker re-fires every rule at each nesting depth, so rules never
//! recurse into `block`/`rescue`/`always` themselves.

use aho_corasick::AhoCorasick;

use crate::config::PlaybookConfig;
use crate::error::{Error, Result};
use crate::issue::Issue;

use super::task::{SECRET_MODULES, SHORT_MODULE_NAMES, TaskNode};

/// Context shared by every rule invocation. Never holds mutable state.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    /// Promote otherwise-suppressed informational findings.
    pub strict: bool,
}

/// A single diagnostic rule over one task node.
pub trait TaskRule: Send + Sync {
    /// Unique identifier for this rule.
    fn name(&self) -> &'static str;

    /// Apply the rule, returning zero or more issues.
    fn check(&self, task: &TaskNode, location: &str, ctx: &RuleContext) -> Vec<Issue>;
}

/// Build the registry in canonical order.
///
/// Pattern compilation happens here, once; a malformed pattern set is a
/// fatal configuration error, reported before any file is read.
pub fn all_rules(config: &PlaybookConfig) -> Result<Vec<Box<dyn TaskRule>>> {
    Ok(vec![
        Box::new(MissingName),
        Box::new(ChangedWhen::new(config)),
        Box::new(ShellPipefail),
        Box::new(CommandShellFeatures),
        Box::new(SecretExposure::new(config)?),
        Box::new(ShortModuleNames),
    ])
}

/// Tasks should carry a name describing what they do. Inclusion
/// directives are exempt; they commonly omit one.
struct MissingName;

impl TaskRule for MissingName {
    fn name(&self) -> &'static str {
        "missing-name"
    }

    fn check(&self, task: &TaskNode, location: &str, _ctx: &RuleContext) -> Vec<Issue> {
        if task.has_key("name") || task.has_key("include_tasks") || task.has_key("import_tasks") {
            return Vec::new();
        }

        vec![
            Issue::warning("Task missing name attribute")
                .at(location)
                .with_suggestion("Add name: field to describe what this task does"),
        ]
    }
}

/// Command/shell tasks should declare `changed_when`, or at least
/// `register`. Registered tasks whose name reads like a query (check,
/// verify, ...) are accepted silently unless strict mode promotes them.
struct ChangedWhen {
    check_keywords: Vec<String>,
}

impl ChangedWhen {
    fn new(config: &PlaybookConfig) -> Self {
        Self {
            check_keywords: config
                .check_name_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    fn is_check_task(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.check_keywords.iter().any(|word| lower.contains(word))
    }
}

impl TaskRule for ChangedWhen {
    fn name(&self) -> &'static str {
        "changed-when"
    }

    fn check(&self, task: &TaskNode, location: &str, ctx: &RuleContext) -> Vec<Issue> {
        if task.action.is_none() || task.has_changed_when {
            return Vec::new();
        }

        if !task.has_register {
            return vec![
                Issue::warning("Command/shell task without changed_when or register")
                    .at(location)
                    .with_suggestion("Add changed_when: and register: for proper idempotency"),
            ];
        }

        if self.is_check_task(task.name.unwrap_or("unnamed task")) {
            if ctx.strict {
                return vec![
                    Issue::info("Command/shell task without changed_when")
                        .at(location)
                        .with_suggestion("Add changed_when: false if this is a read-only check"),
                ];
            }
            return Vec::new();
        }

        vec![
            Issue::warning("Command/shell task without changed_when")
                .at(location)
                .with_suggestion("Add changed_when: to control when task reports as changed"),
        ]
    }
}

/// Shell scripts with pipes or redirects should fail the whole pipeline,
/// not just the last command.
struct ShellPipefail;

impl TaskRule for ShellPipefail {
    fn name(&self) -> &'static str {
        "shell-pipefail"
    }

    fn check(&self, task: &TaskNode, location: &str, _ctx: &RuleContext) -> Vec<Issue> {
        let Some(action) = task.action else {
            return Vec::new();
        };
        if !action.module.contains("shell") {
            return Vec::new();
        }
        let Some(script) = action.args.as_str() else {
            return Vec::new();
        };

        if !script.contains('|') && !script.contains('>') {
            return Vec::new();
        }
        if script.contains("set -euo pipefail") || script.contains("set -o pipefail") {
            return Vec::new();
        }

        vec![
            Issue::warning(r#"Shell task with pipes missing "set -euo pipefail""#)
                .at(location)
                .with_suggestion(r#"Add "set -euo pipefail" at the start of shell script"#),
        ]
    }
}

/// The command module does not run a shell; arguments that rely on shell
/// metacharacters belong in the shell module.
struct CommandShellFeatures;

/// Metacharacters the command module passes through literally.
const SHELL_FEATURE_CHARS: &[char] = &['|', '>', '<', '&', ';', '$'];

impl TaskRule for CommandShellFeatures {
    fn name(&self) -> &'static str {
        "command-shell-features"
    }

    fn check(&self, task: &TaskNode, location: &str, _ctx: &RuleContext) -> Vec<Issue> {
        let Some(action) = task.action else {
            return Vec::new();
        };
        if !action.module.contains("command") {
            return Vec::new();
        }
        let Some(args) = action.args.as_str() else {
            return Vec::new();
        };

        if !args.contains(SHELL_FEATURE_CHARS) {
            return Vec::new();
        }

        vec![
            Issue::info("Command module used with shell features")
                .at(location)
                .with_suggestion(
                    "Consider using shell module instead (requires pipes, redirects, etc.)",
                ),
        ]
    }
}

/// Tasks that touch credentials should set `no_log`. A task is
/// secret-sensitive if it uses a secret-handling module or if its
/// rendered text mentions any secret keyword.
struct SecretExposure {
    keywords: AhoCorasick,
}

impl SecretExposure {
    fn new(config: &PlaybookConfig) -> Result<Self> {
        let keywords = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&config.secret_keywords)
            .map_err(|e| Error::Pattern(format!("secret keyword set: {}", e)))?;

        Ok(Self { keywords })
    }
}

impl TaskRule for SecretExposure {
    fn name(&self) -> &'static str {
        "secret-exposure"
    }

    fn check(&self, task: &TaskNode, location: &str, _ctx: &RuleContext) -> Vec<Issue> {
        let has_secret_module = SECRET_MODULES.iter().any(|&module| task.has_key(module));
        let has_secret_keyword = !has_secret_module && self.keywords.is_match(&task.rendered());

        if !has_secret_module && !has_secret_keyword {
            return Vec::new();
        }
        if task.no_log_truthy() {
            return Vec::new();
        }

        vec![
            Issue::warning("Task may handle secrets without no_log")
                .at(location)
                .with_suggestion("Add no_log: true to prevent secret leakage"),
        ]
    }
}

/// Unqualified module names resolve through the whole module search path;
/// the fully-qualified form pins the intended module.
struct ShortModuleNames;

impl TaskRule for ShortModuleNames {
    fn name(&self) -> &'static str {
        "short-module-names"
    }

    fn check(&self, task: &TaskNode, location: &str, _ctx: &RuleContext) -> Vec<Issue> {
        task.keys()
            .filter(|key| SHORT_MODULE_NAMES.contains(key))
            .map(|key| {
                Issue::info("Short module name used")
                    .at(location)
                    .with_suggestion(format!("Use ansible.builtin.{} for clarity", key))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
