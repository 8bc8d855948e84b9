use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PRIORITY", "DUE", "TAGS", "STATUS"]);
        for task in tasks {
            let tags = task.tags.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
            table.add_row(row![
                c->task.id,
                b->task.title,
                c->task.priority,
                c->task.due.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
                if tags.is_empty() { "-".to_string() } else { tags },
                c->if task.done { "✅" } else { "❌" }
            ]);
        }
        table.printstd();
    }
}
