use anyhow::Result;
use colored::*;
use rigup_core::provisioner::Provisioner;

pub fn execute(provisioner: &Provisioner, targets: &[String]) -> Result<()> {
    // Get execution plan from the provisioner
    let plan = provisioner
        .plan(targets)
        .map_err(|e| anyhow::anyhow!("Failed to compute execution plan: {}", e))?;

    println!(
        "{} {}",
        "Execution plan for".bold(),
        plan.targets.join(", ").cyan()
    );

    println!("\n{}:", "Execution order".bold());
    if plan.steps.is_empty() {
        println!("  {}", "Nothing to do".dimmed());
        return Ok(());
    }

    for (i, step) in plan.steps.iter().enumerate() {
        if step.up_to_date {
            println!("  {}. {} {}", i + 1, step.name.cyan(), "(up to date)".dimmed());
        } else {
            println!("  {}. {}", i + 1, step.name.cyan());
        }
        if let Some(command) = &step.command {
            println!("     {}", command.dimmed());
        }
    }

    Ok(())
}
