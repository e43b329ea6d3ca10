// src/view/table.rs

//! Plain-text rendering of a page view.

use crate::models::ViewConfig;
use crate::pipeline::TimestampFormatter;

use super::state::PageView;

/// Renders a [`PageView`] as a summary line, an aligned table and a page indicator.
#[derive(Debug, Clone)]
pub struct TableRenderer {
    formatter: TimestampFormatter,
    download_label: String,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

impl TableRenderer {
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            formatter: TimestampFormatter::for_locale_setting(&config.timestamp_format, &config.locale),
            download_label: config.download_label.clone(),
        }
    }

    /// `Total Packages: A Available / U Unavailable`
    pub fn summary_line(&self, view: &PageView<'_>) -> String {
        format!(
            "Total Packages: {} Available / {} Unavailable",
            view.available_count(),
            view.unavailable_count()
        )
    }

    /// Render the whole view. Row numbers restart at 1 on each page.
    pub fn render(&self, view: &PageView<'_>) -> String {
        let header = [
            "#".to_string(),
            "Status".to_string(),
            "Package".to_string(),
            "Date".to_string(),
            self.download_label.clone(),
        ];

        let rows: Vec<[String; 5]> = view
            .visible_page
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let timestamp = record.closest().and_then(|s| s.timestamp.as_deref());
                [
                    (index + 1).to_string(),
                    record.availability().to_string(),
                    record.display_name(),
                    self.formatter.format(timestamp),
                    record.download_url().unwrap_or("-").to_string(),
                ]
            })
            .collect();

        let mut widths = header.each_ref().map(|cell| cell.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut lines = vec![self.summary_line(view), format_row(&header, &widths)];
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        lines.extend(rows.iter().map(|row| format_row(row, &widths)));
        lines.push(page_indicator(view));

        lines.join("\n")
    }
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn page_indicator(view: &PageView<'_>) -> String {
    if view.total_pages == 0 {
        "No matching packages".to_string()
    } else {
        format!(
            "Page {} of {} ({} matches)",
            view.current_page, view.total_pages, view.total_matches
        )
    }
}
