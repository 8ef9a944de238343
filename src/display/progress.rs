//! Wizard progress formatting

use crate::wizard::WizardStep;

const BAR_WIDTH: usize = 20;

/// `[#####---------------]  25%`
pub fn format_progress_bar(progress: f32) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = (progress * BAR_WIDTH as f32).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        (progress * 100.0).round() as u32
    )
}

/// Title line shown above each wizard screen
pub fn format_step_header(step: WizardStep) -> String {
    let title = step.title();
    format!(
        "\n{}\n{}\n{}\n",
        title,
        "=".repeat(title.len()),
        format_progress_bar(step.progress())
    )
}

/// Numbered step list marking the current step and the steps already done
pub fn format_step_list(current: WizardStep) -> String {
    WizardStep::all()
        .iter()
        .map(|&step| {
            let marker = if step == current {
                ">"
            } else if step < current {
                "x"
            } else {
                " "
            };
            format!("[{}] {}. {}\n", marker, step.index(), step.title())
        })
        .collect()
}
