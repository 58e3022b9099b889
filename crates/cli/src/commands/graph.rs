use anyhow::Result;
use colored::*;
use rigup_core::provisioner::Provisioner;

pub fn execute(provisioner: &Provisioner) -> Result<()> {
    println!("{}", "Task Dependency Graph:".bold().underline());

    let result = provisioner.dependency_graph();

    if !result.cycles.is_empty() {
        let cycles_description = result
            .cycles
            .iter()
            .map(|cycle| {
                let mut path = cycle.clone();
                if let Some(first) = path.first().cloned() {
                    path.push(first);
                }
                path.join(" -> ")
            })
            .collect::<Vec<_>>()
            .join("; ");

        println!(
            "{} {}",
            "Warning:".yellow().bold(),
            format!("Circular dependencies detected: {}", cycles_description).yellow()
        );
    }

    if result.graph.node_count() == 0 {
        println!("  {}", "No tasks defined".dimmed());
        return Ok(());
    }

    for (node_index, node_weight) in result.graph.node_indices().zip(result.graph.node_weights()) {
        println!("{}", node_weight.blue().bold());

        let mut prerequisites = Vec::new();
        for neighbor in result.graph.neighbors(node_index) {
            if let Some(name) = result.graph.node_weight(neighbor) {
                prerequisites.push(name.clone());
            }
        }

        if !prerequisites.is_empty() {
            println!("  {} {}", "requires:".dimmed(), prerequisites.join(", "));
        } else {
            println!("  {}", "no prerequisites".dimmed());
        }
        println!();
    }

    Ok(())
}
