use anyhow::Result;
use colored::*;
use rigup_core::colors::get_task_color;
use rigup_core::provisioner::Provisioner;

pub fn execute(provisioner: &Provisioner) -> Result<()> {
    let result = provisioner
        .list_tasks()
        .map_err(|e| anyhow::anyhow!("Failed to list tasks: {}", e))?;

    let heading = match &result.manifest_name {
        Some(name) => format!("Tasks in {}", name),
        None => "Tasks".to_string(),
    };
    println!("{}", heading.bold().underline());

    if result.tasks.is_empty() {
        println!("  {}", "No tasks defined".dimmed());
        return Ok(());
    }

    for task in &result.tasks {
        let task_color = get_task_color(&task.name);
        let status = if task.satisfied {
            "[satisfied]".green()
        } else {
            "[pending]".yellow()
        };
        println!("{} {}", task.name.color(task_color).bold(), status);

        if let Some(description) = &task.description {
            println!("  {}", description.dimmed());
        }
        if !task.prerequisites.is_empty() {
            println!(
                "  {} {}",
                "requires:".dimmed(),
                task.prerequisites.join(", ")
            );
        }
        if let Some(creates) = &task.creates {
            println!("  {} {}", "creates:".dimmed(), creates.display());
        }
    }

    Ok(())
}
