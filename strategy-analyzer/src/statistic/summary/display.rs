use crate::statistic::{
    summary::{Metric, SummaryStatistics},
    time::{Frequency, TimeInterval},
};
use prettytable::{Cell, Row, Table};

impl SummaryStatistics {
    pub fn print_summary(&self) {
        println!();
        self.table().printstd();
    }

    /// Render the [`SummaryStatistics`] as a [`Table`] with one row per [`Metric`].
    pub fn table(&self) -> Table {
        let mut table = Table::new();

        // Styling
        table.set_format(*prettytable::format::consts::FORMAT_BOX_CHARS);

        // Title row spanning all columns (eg/ Summary Statistics (Daily, Annual(252), 364 Days))
        let num_columns = self.columns().count() + 1;
        let mut title_cell = Cell::new(&self.title()).style_spec("bcB");
        title_cell.set_hspan(num_columns);
        table.add_row(Row::new(vec![title_cell]));

        // Header row (eg/ | Strategy | Benchmark | ... )
        let mut header_row = Row::new(vec![Cell::new("").style_spec("bcB")]);
        for column in self.columns() {
            header_row.add_cell(Cell::new(column.as_str()).style_spec("bcB"));
        }
        table.add_row(header_row);

        // Metric rows
        for (metric, values) in &self.rows {
            let mut row = Row::new(vec![Cell::new(&metric.to_string()).style_spec("bcB")]);
            for value in values.values() {
                row.add_cell(Cell::new(&format_value(*metric, *value)));
            }
            table.add_row(row);
        }

        table
    }

    fn title(&self) -> String {
        let convention = match self.frequency {
            Frequency::Day => format!(", {}", self.convention.name()),
            _ => String::new(),
        };

        format!(
            "Summary Statistics ({}{}, {} Days)",
            self.frequency.name(),
            convention,
            self.duration().num_days()
        )
    }
}

/// Format a [`Metric`] value as a percentage or ratio, rendering non-finite values as "N/A".
pub fn format_value(metric: Metric, value: f64) -> String {
    if !value.is_finite() {
        "N/A".to_string()
    } else if metric.is_percentage() {
        format!("{:.2}%", value * 100.0)
    } else {
        format!("{:.3}", value)
    }
}
