use crate::store::TaskStore;
use crate::task::Task;
use std::io::{self, BufRead, Write};

/// Runs the interactive menu loop until the user exits or input ends.
///
/// Generic over the reader and writer so a whole session can be driven from
/// in-memory buffers in tests. All user-facing text goes to `output`;
/// diagnostics go through the `log` facade instead.
pub fn run<R, W>(store: &mut TaskStore, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        print_menu(&mut output)?;
        let Some(choice) = read_line(&mut input)? else {
            break;
        };
        match choice.as_str() {
            "1" => {
                write!(output, "Enter task title: ")?;
                output.flush()?;
                let Some(title) = read_line(&mut input)? else {
                    break;
                };
                store.add(title);
                writeln!(output, "Task added!")?;
            }
            "2" => view_tasks(store.tasks(), &mut output)?,
            "3" => {
                write!(output, "Enter ID of task to update: ")?;
                output.flush()?;
                let Some(line) = read_line(&mut input)? else {
                    break;
                };
                let Ok(id) = line.parse::<u32>() else {
                    writeln!(output, "Invalid ID format.")?;
                    continue;
                };
                write!(output, "Enter new title: ")?;
                output.flush()?;
                let Some(new_title) = read_line(&mut input)? else {
                    break;
                };
                if store.rename(id, new_title) {
                    writeln!(output, "Task updated.")?;
                } else {
                    writeln!(output, "Task not found.")?;
                }
            }
            "4" => {
                write!(output, "Enter ID of task to mark as done: ")?;
                output.flush()?;
                let Some(line) = read_line(&mut input)? else {
                    break;
                };
                let Ok(id) = line.parse::<u32>() else {
                    writeln!(output, "Invalid ID format.")?;
                    continue;
                };
                if store.complete(id) {
                    writeln!(output, "Task marked as done.")?;
                } else {
                    writeln!(output, "Task not found.")?;
                }
            }
            "5" => {
                writeln!(output, "Exiting.")?;
                break;
            }
            _ => writeln!(output, "Invalid option.")?,
        }
    }
    Ok(())
}

fn print_menu(output: &mut impl Write) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Simple To-Do App")?;
    writeln!(output, "1. Add Task")?;
    writeln!(output, "2. View Tasks")?;
    writeln!(output, "3. Update Task Title")?;
    writeln!(output, "4. Mark Task as Done")?;
    writeln!(output, "5. Exit")?;
    write!(output, "Choose option: ")?;
    output.flush()
}

fn view_tasks(tasks: &[Task], output: &mut impl Write) -> io::Result<()> {
    if tasks.is_empty() {
        writeln!(output, "No tasks yet.")?;
        return Ok(());
    }
    writeln!(output)?;
    writeln!(output, "--- Tasks ---")?;
    writeln!(output, "{:<3} {:<20} {:<10}", "ID", "Title", "Status")?;
    for task in tasks {
        writeln!(output, "{task}")?;
    }
    writeln!(output, "-------------")?;
    Ok(())
}

/// Reads one line without its trailing newline. `None` means end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
