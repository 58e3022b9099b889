//! Consistent task color management for terminal output.

use colored::Color;

/// Get a consistent color for a task name
pub fn get_task_color(task_name: &str) -> Color {
    // Use a simple hash of the task name bytes for consistent colors
    let hash = task_name
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    // Label palette kept away from the red/yellow/green used for status output
    let colors = [
        Color::TrueColor {
            r: 100,
            g: 149,
            b: 237,
        }, // Cornflower blue
        Color::TrueColor {
            r: 186,
            g: 85,
            b: 211,
        }, // Medium orchid
        Color::TrueColor {
            r: 0,
            g: 206,
            b: 209,
        }, // Dark turquoise
        Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        }, // Orange
        Color::TrueColor {
            r: 219,
            g: 112,
            b: 147,
        }, // Pale violet red
    ];

    colors[(hash % colors.len() as u64) as usize]
}
