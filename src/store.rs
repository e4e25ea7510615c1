use crate::task::Task;
use log::error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// In-memory task collection mirrored to a flat file.
///
/// Every mutating operation rewrites the whole backing file. Persistence
/// failures are logged and the in-memory state stays authoritative for the
/// rest of the session; on-disk state catches up on the next successful write.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u32,
    storage_path: PathBuf,
}

impl TaskStore {
    /// Loads the store from `path`, or starts empty when the file does not
    /// exist. Lines that fail to parse are skipped with a warning; the id
    /// counter resumes after the highest id found and stops growing at
    /// `u32::MAX`. A file that exists but cannot be read is logged and
    /// treated as empty; the session keeps running in memory.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let storage_path = path.into();
        let contents = match std::fs::read_to_string(&storage_path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(err) => {
                error!(
                    "failed to load tasks from {}: {err}",
                    storage_path.display()
                );
                String::new()
            }
        };
        let tasks: Vec<Task> = contents.lines().filter_map(Task::parse_line).collect();
        let next_id = tasks
            .iter()
            .map(Task::id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Self {
            tasks,
            next_id,
            storage_path,
        }
    }

    /// Adds a task with the next sequential id and returns that id.
    /// Titles are stored as given; empty titles are allowed.
    pub fn add(&mut self, title: String) -> u32 {
        let id = self.next_id;
        self.tasks.push(Task::new(id, title, false));
        self.next_id += 1;
        self.persist();
        id
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replaces the title of the task with `id`. Returns false when no task
    /// has that id; the file is left untouched in that case.
    pub fn rename(&mut self, id: u32, new_title: String) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.set_title(new_title);
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Marks the task with `id` as done. Completing an already-completed task
    /// succeeds silently. Returns false when no task has that id.
    pub fn complete(&mut self, id: u32) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.set_completed(true);
                self.persist();
                true
            }
            None => false,
        }
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Overwrites the backing file with the full collection, one line per
    /// task. Not crash-safe: there is no write-to-temp-then-rename step, so a
    /// crash mid-write can truncate the file.
    fn persist(&self) {
        if let Err(err) = self.write_all() {
            error!(
                "failed to save tasks to {}: {err}",
                self.storage_path.display()
            );
        }
    }

    fn write_all(&self) -> io::Result<()> {
        let mut file = File::create(&self.storage_path)?;
        for task in &self.tasks {
            writeln!(file, "{}", task.to_line())?;
        }
        Ok(())
    }
}
