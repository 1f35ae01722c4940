//! Plain-text rendering of a dashboard for terminals

use std::fmt::Write;

use super::binding::StatField;
use super::recording::RecordingView;
use crate::dashboard::charts::{ChartSlot, ChartSpec};
use crate::dashboard::nav::NavItem;

/// Width of the longest chart bar, in characters
const BAR_WIDTH: u64 = 32;

/// Render everything a [`RecordingView`] currently shows
pub fn render_dashboard(view: &RecordingView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "🏥 BioPharm");
    if let Some(welcome) = view.welcome_text() {
        let _ = writeln!(out, "Welcome, {}", welcome);
    }
    if let Some(role) = view.role_label() {
        let _ = writeln!(out, "Role: {}", role);
    }
    let _ = writeln!(out);

    render_sidebar(&mut out, view);

    let _ = writeln!(out);
    for field in StatField::ALL {
        let value = view.stat(field).unwrap_or("—");
        let _ = writeln!(out, "{:<12} {:>8}", field.title(), value);
    }

    for (slot, title) in [
        (ChartSlot::Sales, "Weekly Sales"),
        (ChartSlot::Inventory, "Inventory Health"),
    ] {
        if let Some(spec) = view.chart(slot) {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", title);
            out.push_str(&render_chart(spec));
        }
    }

    out
}

fn render_sidebar(out: &mut String, view: &RecordingView) {
    let style = view.sidebar();
    let _ = writeln!(
        out,
        "Sidebar ({}, content margin {})",
        if style.collapsed { "collapsed" } else { "expanded" },
        style.margin_left_css()
    );

    for key in view.visible_nav_keys() {
        let (icon, label) = NavItem::find(key)
            .map(|item| (item.icon, item.label))
            .unwrap_or(("•", key));

        if style.labels_visible {
            let _ = writeln!(out, "  {} {}", icon, label);
        } else {
            let _ = writeln!(out, "  {}", icon);
        }
    }
}

/// Horizontal bar rendering of every dataset in `spec`
pub fn render_chart(spec: &ChartSpec) -> String {
    let mut out = String::new();
    let max = spec.max_value().max(1);
    let label_width = spec.data.labels.iter().map(|l| l.len()).max().unwrap_or(0);

    for dataset in &spec.data.datasets {
        for (idx, value) in dataset.data.iter().enumerate() {
            let label = spec.data.labels.get(idx).map(String::as_str).unwrap_or("");
            let len = (u128::from(*value) * u128::from(BAR_WIDTH) / u128::from(max)) as usize;
            let _ = writeln!(
                out,
                "  {:<width$} {} {}",
                label,
                "█".repeat(len),
                value,
                width = label_width
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::charts::SampleData;
    use crate::dashboard::layout::SidebarStyle;
    use crate::view::binding::ViewBinding;

    #[test]
    fn test_chart_bars_scale_to_max() {
        let text = render_chart(&SampleData::DEFAULT.sales_chart());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);

        // Saturday holds the maximum and gets the full-width bar
        let sat = lines[5];
        assert!(sat.contains(&"█".repeat(BAR_WIDTH as usize)));
        assert!(sat.ends_with("220"));
    }

    #[test]
    fn test_chart_bars_with_huge_values() {
        let sample = SampleData {
            sales: [u64::MAX, 1, 0, 0, 0, 0, 0],
            inventory: [0, 0, 0],
        };
        let text = render_chart(&sample.sales_chart());
        let lines: Vec<_> = text.lines().collect();

        assert!(lines[0].contains(&"█".repeat(BAR_WIDTH as usize)));
        assert!(lines[0].ends_with(&u64::MAX.to_string()));
        assert!(!lines[1].contains('█'));
    }

    #[test]
    fn test_collapsed_sidebar_hides_labels() {
        let mut view = RecordingView::with_nav_keys(["pos"]);
        let text = render_dashboard(&view);
        assert!(text.contains("Point of Sale"));

        view.set_sidebar_collapsed(&SidebarStyle::COLLAPSED);
        let text = render_dashboard(&view);
        assert!(!text.contains("Point of Sale"));
        assert!(text.contains("content margin 80px"));
    }

    #[test]
    fn test_stats_placeholder_before_seeding() {
        let text = render_dashboard(&RecordingView::new());
        assert!(text.contains("Total Sales"));
        assert!(text.contains("—"));
    }
}
