//! Typed view over a loosely-typed task mapping.
//!
//! Tolerant conversion: a wrong-shaped field reads as absent, never as a
//! decode error. Lenient documents routinely mix tasks with plain data.

use serde_yaml::{Sequence, Value};

/// Command and shell modules, tested in priority order. A task naming two
/// of these resolves to the first match in this list.
pub const COMMAND_MODULES: &[&str] = &[
    "command",
    "shell",
    "ansible.builtin.command",
    "ansible.builtin.shell",
];

/// Modules that handle credentials.
pub const SECRET_MODULES: &[&str] = &[
    "user",
    "ansible.builtin.user",
    "mysql_user",
    "community.mysql.mysql_user",
    "postgresql_user",
    "community.postgresql.postgresql_user",
];

/// Unqualified module names that should carry the ansible.builtin prefix.
pub const SHORT_MODULE_NAMES: &[&str] = &["command", "shell", "copy", "template", "service", "file"];

/// The module key that makes a task actionable, with its argument value.
#[derive(Debug, Clone, Copy)]
pub struct Action<'a> {
    pub module: &'a str,
    pub args: &'a Value,
}

/// One checkable task, decoded once from a document mapping.
#[derive(Debug)]
pub struct TaskNode<'a> {
    value: &'a Value,

    pub name: Option<&'a str>,
    pub action: Option<Action<'a>>,
    pub has_register: bool,
    pub has_changed_when: bool,
    pub no_log: Option<&'a Value>,

    pub block: Option<&'a Sequence>,
    pub rescue: Option<&'a Sequence>,
    pub always: Option<&'a Sequence>,
}

impl<'a> TaskNode<'a> {
    /// Decode a task from a document value. Non-mapping values are not
    /// tasks and yield `None`.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        if !value.is_mapping() {
            return None;
        }

        let action = COMMAND_MODULES.iter().find_map(|&module| {
            value.get(module).map(|args| Action { module, args })
        });

        Some(Self {
            value,
            name: value.get("name").and_then(Value::as_str),
            action,
            has_register: value.get("register").is_some(),
            has_changed_when: value.get("changed_when").is_some(),
            no_log: value.get("no_log"),
            block: value.get("block").and_then(Value::as_sequence),
            rescue: value.get("rescue").and_then(Value::as_sequence),
            always: value.get("always").and_then(Value::as_sequence),
        })
    }

    /// Whether the task mapping carries a key at all, regardless of shape.
    pub fn has_key(&self, key: &str) -> bool {
        self.value.get(key).is_some()
    }

    /// String keys of the task mapping, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.value
            .as_mapping()
            .into_iter()
            .flat_map(|m| m.iter())
            .filter_map(|(k, _)| k.as_str())
    }

    /// Textual rendering of the whole task, for keyword scanning.
    pub fn rendered(&self) -> String {
        serde_yaml::to_string(self.value).unwrap_or_default()
    }

    /// Whether `no_log` evaluates truthy under the string/boolean
    /// coercion rules.
    pub fn no_log_truthy(&self) -> bool {
        self.no_log.is_some_and(is_truthy)
    }
}

/// Boolean coercion for boolean-like task attributes: `true`, or one of
/// the strings `true`/`yes`/`on`/`1` after trimming, case-insensitive.
/// Everything else, including numbers, is falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => {
            let normalized = s.trim().to_ascii_lowercase();
            matches!(normalized.as_str(), "true" | "yes" | "on" | "1")
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
