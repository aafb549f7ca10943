// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! Playbook idempotency checker.
//!
//! Loads each file as a multi-document stream, extracts the play-like
//! units from every document, and walks their task collections
//! depth-first, firing the rule registry at every task node. Nested
//! `block`/`rescue`/`always` branches are visited in that fixed order
//! with the location path extended per level.

pub mod rules;
pub mod task;

use serde_yaml::Value;

use crate::config::PlaybookConfig;
use crate::error::Result;
use crate::issue::Issue;
use crate::loader;

use rules::{RuleContext, TaskRule, all_rules};
use task::TaskNode;

/// Task collections checked inside each play, in check order.
const TASK_COLLECTIONS: &[&str] = &["tasks", "handlers", "pre_tasks", "post_tasks"];

/// The playbook checker: a rule registry plus its immutable context.
pub struct PlaybookChecker {
    rules: Vec<Box<dyn TaskRule>>,
    ctx: RuleContext,
}

impl PlaybookChecker {
    pub fn new(config: &PlaybookConfig, strict: bool) -> Result<Self> {
        Ok(Self {
            rules: all_rules(config)?,
            ctx: RuleContext { strict },
        })
    }

    /// Check one playbook's text, returning its issues in rule-evaluation
    /// order. A file with no play-like units yields zero issues.
    pub fn check_text(&self, text: &str) -> Vec<Issue> {
        let stream = loader::load_documents(text);
        if let Some(err) = &stream.error {
            return vec![Issue::error(format!("Failed to parse YAML: {}", err))];
        }

        let mut issues = Vec::new();
        for doc in &stream.documents {
            for (play_idx, play) in extract_plays(doc).into_iter().enumerate() {
                self.check_play(play, play_idx, &mut issues);
            }
        }
        issues
    }

    fn check_play(&self, play: &Value, play_idx: usize, issues: &mut Vec<Issue>) {
        for &collection in TASK_COLLECTIONS {
            if let Some(tasks) = play.get(collection).and_then(Value::as_sequence) {
                self.check_tasks(tasks, &format!("play[{}].{}", play_idx, collection), issues);
            }
        }
    }

    fn check_tasks(&self, tasks: &[Value], location: &str, issues: &mut Vec<Issue>) {
        for (task_idx, raw) in tasks.iter().enumerate() {
            // Not every sequence element is a task in a lenient document
            let Some(task) = TaskNode::from_value(raw) else {
                continue;
            };

            let task_location = format!("{}[{}]", location, task_idx);
            for rule in &self.rules {
                issues.extend(rule.check(&task, &task_location, &self.ctx));
            }

            if let Some(block) = task.block {
                self.check_tasks(block, &format!("{}.block", task_location), issues);
            }
            if let Some(rescue) = task.rescue {
                self.check_tasks(rescue, &format!("{}.rescue", task_location), issues);
            }
            if let Some(always) = task.always {
                self.check_tasks(always, &format!("{}.always", task_location), issues);
            }
        }
    }
}

/// Extract the play-like units of one document: a sequence yields its
/// mapping elements, a bare mapping yields itself, anything else yields
/// nothing. Stray scalars are common in multi-document files and are not
/// an error.
fn extract_plays(doc: &Value) -> Vec<&Value> {
    match doc {
        Value::Sequence(items) => items.iter().filter(|item| item.is_mapping()).collect(),
        Value::Mapping(_) => vec![doc],
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
