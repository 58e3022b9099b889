use anyhow::Result;
use colored::*;
use rigup_core::provisioner::Provisioner;

pub fn execute(provisioner: &Provisioner, targets: &[String]) -> Result<()> {
    if targets.is_empty() {
        println!("{}", "Provisioning default targets".bold());
    } else {
        println!("{} {}", "Provisioning".bold(), targets.join(", ").cyan());
    }

    // Execute targets using the provisioner
    let summary = provisioner
        .run(targets)
        .map_err(|e| anyhow::anyhow!("Provisioning failed: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        format!(
            "Provisioning complete ({} executed, {} skipped)",
            summary.executed.len(),
            summary.skipped.len()
        )
        .green()
        .bold()
    );

    Ok(())
}
