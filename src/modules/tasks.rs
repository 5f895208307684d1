use crate::config::Config;
use crate::console::Prompt;
use crate::exceptions::HearthError;
use crate::module::CommandModule;
use crate::modules::store::{JsonStore, Record};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const IDENTITY: &str = "task_module";
pub const DATA_FILE: &str = "tasks.json";

const MISSING_IDS: &str = "Please provide at least one task ID.";

const HELP: &str = r#"Task Module

Usage: task [command] <args>

Examples:
task add <task>                     Add a new task.
task remove <task_id(s)>            Remove task(s).
task edit <task_id> <task>          Edit a task.
task complete <task_id(s)>          Mark task(s) as complete.
task undo <task_id(s)>              Undo task(s).
task list                           List all the tasks."#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: usize,
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub completed: bool,
}

impl Record for Task {
    fn id(&self) -> usize {
        self.id
    }

    fn set_id(&mut self, id: usize) {
        self.id = id;
    }
}

pub fn factory(config: &Config) -> Result<Box<dyn CommandModule>, HearthError> {
    Ok(Box::new(TaskModule::open(config.data_file(DATA_FILE))?))
}

fn timestamp() -> String {
    let format = time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let now = crate::utils::now_local();
    now.format(&format).unwrap_or_else(|_| now.to_string())
}

pub struct TaskModule {
    store: JsonStore<Task>,
}

impl TaskModule {
    pub fn open(path: PathBuf) -> Result<Self, HearthError> {
        Ok(Self {
            store: JsonStore::open(path)?,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.items()
    }

    fn add(&mut self, words: &[String]) -> Result<String, HearthError> {
        if words.is_empty() {
            return Ok("Please provide the task content.".to_string());
        }
        let content = words.join(" ");
        self.store.push(Task {
            id: self.store.next_id(),
            content: content.clone(),
            created_at: timestamp(),
            completed: false,
        });
        self.store.save()?;
        Ok(format!("Task added: {}", content))
    }

    fn list(&self) -> String {
        let tasks = self.store.items();
        let Some(longest) = tasks.iter().max_by_key(|t| t.content.chars().count()) else {
            return "No tasks found.".to_string();
        };
        let estimate = longest.id.to_string().len()
            + longest.content.chars().count()
            + longest.created_at.chars().count()
            + 10;
        let rule = "-".repeat(estimate.min(crate::console::get_terminal_width()));

        let mut lines = vec!["\nYour Tasks:".to_string(), rule.clone()];
        for task in tasks {
            let status = if task.completed { "x" } else { " " };
            lines.push(format!(
                "{}. [{}] - {} ({})",
                task.id, status, task.content, task.created_at
            ));
        }
        lines.push(rule);
        lines.join("\n")
    }

    fn set_completed(&mut self, ids: &[String], completed: bool) -> Result<String, HearthError> {
        if ids.is_empty() {
            return Ok(MISSING_IDS.to_string());
        }
        let report = self
            .store
            .apply_ids(ids.iter().map(String::as_str), |tasks, pos| {
                tasks[pos].completed = completed;
            });
        self.store.save()?;
        let verb = if completed {
            "marked as complete!"
        } else {
            "undone!"
        };
        Ok(report.summarize("Tasks", verb))
    }

    fn remove(&mut self, ids: &[String]) -> Result<String, HearthError> {
        if ids.is_empty() {
            return Ok(MISSING_IDS.to_string());
        }
        let report = self
            .store
            .apply_ids(ids.iter().map(String::as_str), |tasks, pos| {
                tasks.remove(pos);
            });
        self.store.reindex();
        self.store.save()?;
        Ok(report.summarize("Tasks", "removed."))
    }

    fn edit(&mut self, args: &[String]) -> Result<String, HearthError> {
        let Some((id, words)) = args.split_first() else {
            return Err(HearthError::InvalidInput(
                "Usage: task edit <task_id> <task>".to_string(),
            ));
        };
        let Ok(id) = id.parse::<usize>() else {
            return Ok(format!("{} is not a valid task ID.", id));
        };
        let Some(task) = self.store.find_mut(id) else {
            return Ok(format!("Task with ID {} not found.", id));
        };
        task.content = words.join(" ");
        self.store.save()?;
        Ok(format!("Task {} edited!", id))
    }
}

impl CommandModule for TaskModule {
    fn execute(&mut self, args: &[String], _prompt: &mut dyn Prompt) -> Result<String, HearthError> {
        let rest = args.get(1..).unwrap_or_default();
        match args.first().map(String::as_str) {
            Some("add") => self.add(rest),
            Some("list") => Ok(self.list()),
            Some("complete") => self.set_completed(rest, true),
            Some("undo") => self.set_completed(rest, false),
            Some("remove") => self.remove(rest),
            Some("edit") => self.edit(rest),
            _ => Ok(self.help()),
        }
    }

    fn help(&self) -> String {
        HELP.to_string()
    }
}
